//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effects requested by an update, performed by the runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Request a window redraw
    Redraw,
    /// Leave the event loop
    Quit,
}
