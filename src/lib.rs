//! Wage Timer - Elm-style desktop wage counter
//!
//! This crate provides the core types and logic for a small window that
//! asks for an hourly wage and then counts elapsed time and earnings,
//! implementing the Elm Architecture pattern.

pub mod cli;
pub mod clock;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
