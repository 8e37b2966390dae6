//! docbrowser TUI — interactive terminal documentation browser.
//!
//! Sidebar navigation with live search and a content pane, built with
//! `ratatui` + `crossterm`.

mod app;
mod screens;
mod widgets;

use color_eyre::eyre::Result;
use docbrowser_shared::{SessionConfig, load_config};

/// Env var naming a file to write logs to. Stdout belongs to the terminal UI.
const LOG_FILE_ENV: &str = "DOCBROWSER_LOG";

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let config = load_config()?;
    let browser = docbrowser_core::open_session(&SessionConfig::from(&config))?;
    tracing::info!("starting TUI");
    app::run(browser)
}

fn init_tracing() -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let Some(path) = std::env::var_os(LOG_FILE_ENV) else {
        return Ok(());
    };
    let file = std::fs::File::create(path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("docbrowser=debug"));

    fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();

    Ok(())
}
