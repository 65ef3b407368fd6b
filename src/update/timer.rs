//! Counter message handlers

use crate::commands::Cmd;
use crate::messages::TimerMsg;
use crate::model::AppModel;

/// Advance the counter when a second has passed.
///
/// Returns `Cmd::Redraw` only on a recorded tick, so polls in between cost
/// nothing to render.
pub fn update_timer(model: &mut AppModel, msg: TimerMsg) -> Option<Cmd> {
    match msg {
        TimerMsg::Poll(now) => {
            let state = model.running_state_mut()?;
            if !state.ticker.poll(now) {
                return None;
            }

            state.timer.tick();
            tracing::trace!(elapsed = state.timer.elapsed_secs, "tick");
            Some(Cmd::Redraw)
        }
    }
}
