//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::time::Instant;

/// Wage prompt messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMsg {
    /// Append typed text to the buffer
    InsertText(String),
    /// Delete the last character (Backspace)
    DeleteBackward,
    /// Parse the buffer and start the counter (Enter)
    Confirm,
}

/// Counter messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMsg {
    /// The event loop woke up at this monotonic instant
    Poll(Instant),
}

/// Application-level messages (window events, lifecycle)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMsg {
    /// Window resized (physical pixels)
    Resize(u32, u32),
    /// Window closed or quit shortcut pressed
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Input(InputMsg),
    Timer(TimerMsg),
    App(AppMsg),
}
