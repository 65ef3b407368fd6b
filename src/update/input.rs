//! Wage prompt message handlers

use crate::commands::Cmd;
use crate::messages::InputMsg;
use crate::model::{AppModel, Phase, RunningState, Wage};

/// Handle wage prompt messages. Ignored once the counter is running.
pub fn update_input(model: &mut AppModel, msg: InputMsg) -> Option<Cmd> {
    let input = model.input_mut()?;

    match msg {
        InputMsg::InsertText(text) => input.insert_text(&text).then_some(Cmd::Redraw),

        InputMsg::DeleteBackward => input.delete_backward().then_some(Cmd::Redraw),

        InputMsg::Confirm => {
            if input.is_empty() {
                return None;
            }

            match Wage::parse(input.buffer()) {
                Ok(wage) => {
                    tracing::info!(hourly = wage.hourly(), "wage confirmed, starting counter");
                    model.phase = Phase::Running(RunningState::new(wage));
                }
                Err(e) => {
                    tracing::warn!(input = input.buffer(), error = %e, "rejected wage input");
                    input.set_error(format!("Invalid wage: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }
    }
}
