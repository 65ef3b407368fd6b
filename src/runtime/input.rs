//! Keyboard input handling
//!
//! Maps winit key and IME events to wage prompt and app messages.

use winit::event::Ime;
use winit::keyboard::{Key, NamedKey};

use wage_timer::commands::Cmd;
use wage_timer::messages::{AppMsg, InputMsg, Msg};
use wage_timer::model::AppModel;
use wage_timer::update::update;

/// Handle a key press. `text` is the text the key produced, if any.
pub fn handle_key(model: &mut AppModel, key: &Key, text: Option<&str>) -> Option<Cmd> {
    match key {
        Key::Named(NamedKey::Escape) => update(model, Msg::App(AppMsg::Quit)),
        Key::Named(NamedKey::Backspace) => update(model, Msg::Input(InputMsg::DeleteBackward)),
        Key::Named(NamedKey::Enter) => update(model, Msg::Input(InputMsg::Confirm)),
        _ => {
            let text = text.filter(|t| t.chars().any(|c| !c.is_control()))?;
            update(model, Msg::Input(InputMsg::InsertText(text.to_string())))
        }
    }
}

/// Handle input method events. Only committed text reaches the prompt;
/// preedit text is composed by the IME and never shown.
pub fn handle_ime(model: &mut AppModel, ime: &Ime) -> Option<Cmd> {
    match ime {
        Ime::Commit(text) if !text.is_empty() => {
            update(model, Msg::Input(InputMsg::InsertText(text.clone())))
        }
        _ => None,
    }
}
