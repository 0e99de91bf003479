//! Sign-In GUI - Main Entry Point
//!
//! Hosts the sign-in form in a desktop window.

use anyhow::Context as _;
use signin_gui::app::application::run_app;
use signin_gui::app::logging;
use signin_gui::config::AppConfig;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;

    // Held until exit so the file writer flushes
    let _log_guard = logging::init(&config.log);

    tracing::info!("Starting sign-in GUI...");

    run_app(config);
    Ok(())
}
