//! Wage Timer - counts up what you have earned, second by second
//!
//! Startup order: CLI → logging → config → theme → font → window.
//! Any failure before the window is up exits with status 1.

mod runtime;

use anyhow::{Context, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use wage_timer::cli::CliArgs;
use wage_timer::config::AppConfig;
use wage_timer::model::AppModel;
use wage_timer::theme::{self, Theme};
use wage_timer::view::load_font;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    wage_timer::tracing::init(args.log_dir.as_deref());

    let startup = args.into_config(AppConfig::load());

    let theme = theme::load_theme(&startup.theme_id).unwrap_or_else(|e| {
        tracing::warn!("Failed to load theme '{}': {}, using default", startup.theme_id, e);
        Theme::default()
    });

    let font = load_font(&startup.font_path).inspect_err(|e| {
        tracing::error!("{:#}", e);
    })?;

    let event_loop = EventLoop::new().context("Failed to initialize event loop")?;
    let mut app = App::new(AppModel::new(theme), font, startup.font_size);

    event_loop.run_app(&mut app)?;

    app.into_result()
}
