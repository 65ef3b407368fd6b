//! Logging setup and state snapshots for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=state=debug` - only phase/counter changes
//! - `RUST_LOG=wage_timer::update=trace` - module-level filtering, including ticks
//!
//! # Log Files
//!
//! Nothing is written to disk unless a log directory is passed (`--log-dir`).
//! In that case logs go to `<dir>/wage-timer.log` with daily rotation, at debug level.

use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, Phase};

/// Initialize tracing subscriber with console and optional file logging
///
/// Console output respects RUST_LOG and defaults to `warn`.
pub fn init(log_dir: Option<&Path>) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = log_dir.and_then(|dir| match crate::config_paths::ensure_dir(dir) {
        Ok(()) => {
            let file_appender = tracing_appender::rolling::daily(dir, "wage-timer.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the phase and counter for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseSnapshot {
    pub phase: &'static str,
    pub buffer_len: usize,
    pub has_error: bool,
    pub elapsed_secs: u64,
    pub running: bool,
}

impl PhaseSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        let (phase, buffer_len, has_error, elapsed_secs) = match &model.phase {
            Phase::AwaitingInput(input) => (
                "input",
                input.buffer().chars().count(),
                input.error().is_some(),
                0,
            ),
            Phase::Running(state) => ("running", 0, false, state.timer.elapsed_secs),
        };

        Self {
            phase,
            buffer_len,
            has_error,
            elapsed_secs,
            running: model.running,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &PhaseSnapshot) -> Option<String> {
        if self.phase != other.phase {
            return Some(format!("phase: {} → {}", self.phase, other.phase));
        }

        let mut changes = Vec::new();
        if self.buffer_len != other.buffer_len {
            changes.push(format!("buffer: {} → {} chars", self.buffer_len, other.buffer_len));
        }
        if self.has_error != other.has_error {
            let status = if other.has_error { "shown" } else { "cleared" };
            changes.push(format!("error {}", status));
        }
        if self.elapsed_secs != other.elapsed_secs {
            changes.push(format!(
                "elapsed: {}s → {}s",
                self.elapsed_secs, other.elapsed_secs
            ));
        }
        if self.running != other.running {
            changes.push("quitting".to_string());
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
