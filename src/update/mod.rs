//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod input;
mod timer;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::PhaseSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use input::update_input;
pub use timer::update_timer;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Input(m) => input::update_input(model, m),
        Msg::Timer(m) => timer::update_timer(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Logs the message and any phase/counter change it caused.
/// Poll messages arrive every few milliseconds, so only the ones that
/// actually tick are logged.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::TimerMsg;

    let is_noisy = matches!(&msg, Msg::Timer(TimerMsg::Poll(_)));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = PhaseSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    if let Some(diff) = before.diff(&PhaseSnapshot::from_model(model)) {
        debug!(target: "state", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type, e.g. `Input::InsertText("5")`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Input(m) => format!("Input::{:?}", m),
        Msg::Timer(m) => format!("Timer::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
