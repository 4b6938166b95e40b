mod app;
mod cli;
mod control;
mod data;
mod page;
mod playback;
mod render;
mod ui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let cli = cli::Cli::parse();

    if let Err(e) = data::assets::ensure_assets_ready() {
        log::warn!("asset setup failed: {e:#}");
    }

    let mut config = data::config::Config::load_or_default(cli.config.as_deref())?;
    if let Some(track) = cli.track {
        config.track.src = track;
    }

    let theme = data::theme_loader::ThemeLoader::load(&config.theme).unwrap_or_else(|e| {
        log::warn!("theme {}: {e:#}; using built-in colors", config.theme);
        ui::theme::Theme::fallback()
    });
    log::info!("theme {:?}, {:?} colors", theme.name, theme.capability);

    let media = playback::local_player::LocalPlayer::new().context("open audio output")?;

    let mut app = app::state::AppState::new(config, theme, media);
    app.start();
    app::event_loop::run(&mut app)
}
