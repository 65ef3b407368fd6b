//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use wage_timer::commands::Cmd;
use wage_timer::messages::{InputMsg, Msg, TimerMsg};
use wage_timer::model::AppModel;
use wage_timer::theme::Theme;
use wage_timer::update::update;

/// Fresh model at the wage prompt
pub fn test_model() -> AppModel {
    AppModel::new(Theme::default())
}

/// Type text into the prompt one character at a time
pub fn type_text(model: &mut AppModel, text: &str) {
    for ch in text.chars() {
        update(model, Msg::Input(InputMsg::InsertText(ch.to_string())));
    }
}

pub fn confirm(model: &mut AppModel) -> Option<Cmd> {
    update(model, Msg::Input(InputMsg::Confirm))
}

/// A monotonic clock the test advances by hand
pub struct SimClock {
    now: Instant,
}

impl SimClock {
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn advance_ms(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
    }

    /// Deliver a poll at the current simulated instant
    pub fn poll(&self, model: &mut AppModel) -> Option<Cmd> {
        update(model, Msg::Timer(TimerMsg::Poll(self.now)))
    }
}

/// Enter a wage, confirm it, and prime the ticker. Panics if the wage is rejected.
pub fn start_timer(wage: &str) -> (AppModel, SimClock) {
    let mut model = test_model();
    type_text(&mut model, wage);
    confirm(&mut model);
    assert!(model.is_timing(), "wage {:?} was rejected", wage);

    let clock = SimClock::new();
    clock.poll(&mut model);
    (model, clock)
}

/// Advance the simulated clock one second at a time, polling after each step
pub fn run_seconds(model: &mut AppModel, clock: &mut SimClock, seconds: u64) {
    for _ in 0..seconds {
        clock.advance_ms(1000);
        clock.poll(model);
    }
}
