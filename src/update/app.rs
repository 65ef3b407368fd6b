//! App message handlers (window events, quit)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages (window events, quit)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.resize(width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => {
            if model.running {
                tracing::info!(timing = model.is_timing(), "quit requested");
            }
            model.running = false;
            Some(Cmd::Quit)
        }
    }
}
