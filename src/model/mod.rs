//! Model module - application state for the Elm-style architecture
//!
//! All state lives in [`AppModel`] and is only changed through
//! [`crate::update::update`].

pub mod timer;
pub mod wage;

pub use timer::{Ticker, TimerState, TICK_INTERVAL};
pub use wage::{Wage, WageError};

use crate::theme::Theme;

pub const WINDOW_TITLE: &str = "Wage Timer";
/// Window width in logical pixels
pub const WINDOW_WIDTH: u32 = 600;
/// Window height in logical pixels
pub const WINDOW_HEIGHT: u32 = 200;

/// Longest wage text the prompt accepts
pub const MAX_INPUT_LEN: usize = 24;

const PROMPT_LABEL: &str = "Enter hourly wage: ";

/// Text typed at the wage prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WageInput {
    buffer: String,
    /// Message from the last rejected confirm, cleared on the next edit
    error: Option<String>,
}

impl WageInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Append printable characters up to [`MAX_INPUT_LEN`]. Returns whether anything changed.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let mut changed = false;
        for ch in text.chars().filter(|c| !c.is_control()) {
            if self.buffer.chars().count() >= MAX_INPUT_LEN {
                break;
            }
            self.buffer.push(ch);
            changed = true;
        }
        if changed {
            self.error = None;
        }
        changed
    }

    /// Remove the last character. Returns false on an empty buffer.
    pub fn delete_backward(&mut self) -> bool {
        if self.buffer.pop().is_some() {
            self.error = None;
            true
        } else {
            false
        }
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn prompt_text(&self) -> String {
        format!("{}{}", PROMPT_LABEL, self.buffer)
    }
}

/// State of the running counter
#[derive(Debug, Clone, Copy)]
pub struct RunningState {
    pub wage: Wage,
    pub timer: TimerState,
    pub ticker: Ticker,
}

impl RunningState {
    pub fn new(wage: Wage) -> Self {
        Self {
            wage,
            timer: TimerState::new(),
            ticker: Ticker::default(),
        }
    }

    pub fn display_text(&self) -> String {
        self.timer.display(&self.wage)
    }
}

/// Which of the two screens is active
#[derive(Debug, Clone)]
pub enum Phase {
    AwaitingInput(WageInput),
    Running(RunningState),
}

/// The complete application state
#[derive(Debug, Clone)]
pub struct AppModel {
    pub phase: Phase,
    pub theme: Theme,
    /// Physical window size in pixels
    pub window_size: (u32, u32),
    /// Cleared by a quit signal; the event loop exits once this is false
    pub running: bool,
}

impl AppModel {
    pub fn new(theme: Theme) -> Self {
        Self {
            phase: Phase::AwaitingInput(WageInput::new()),
            theme,
            window_size: (WINDOW_WIDTH, WINDOW_HEIGHT),
            running: true,
        }
    }

    pub fn input(&self) -> Option<&WageInput> {
        match &self.phase {
            Phase::AwaitingInput(input) => Some(input),
            Phase::Running(_) => None,
        }
    }

    pub fn input_mut(&mut self) -> Option<&mut WageInput> {
        match &mut self.phase {
            Phase::AwaitingInput(input) => Some(input),
            Phase::Running(_) => None,
        }
    }

    pub fn running_state(&self) -> Option<&RunningState> {
        match &self.phase {
            Phase::Running(state) => Some(state),
            Phase::AwaitingInput(_) => None,
        }
    }

    pub fn running_state_mut(&mut self) -> Option<&mut RunningState> {
        match &mut self.phase {
            Phase::Running(state) => Some(state),
            Phase::AwaitingInput(_) => None,
        }
    }

    pub fn is_timing(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    /// The counter line, once a wage has been confirmed
    pub fn timer_text(&self) -> Option<String> {
        self.running_state().map(RunningState::display_text)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }
}
