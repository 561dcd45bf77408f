mod app;
mod storage;
mod theme_store;

use clap::Parser;
use glide_components::slider::SliderArgsError;
use glide_ui::{Color, dp};
use thiserror::Error;
use tracing::{info, warn};

pub use crate::{
    app::{Session, SessionConfig, SessionLog},
    storage::{KeyValueStore, StorageError},
    theme_store::ThemeStore,
};

/// Drives a glide slider through a scripted touch session and logs every
/// frame it would paint.
#[derive(Debug, Parser)]
#[command(name = "example", version)]
pub struct Cli {
    /// Toggle the persisted dark theme flag before running
    #[arg(long)]
    pub toggle_dark: bool,
    /// Upper bound of the slider
    #[arg(long, default_value_t = 100.0)]
    pub maximum: f32,
    /// Step size, 0 for a continuous slider
    #[arg(long, default_value_t = 1.0)]
    pub step: f32,
    /// Soft ceiling the thumb cannot be dragged past, <= 0 to disable
    #[arg(long, default_value_t = 80.0)]
    pub max_available: f32,
    /// Number of tick labels
    #[arg(long, default_value_t = 5)]
    pub labels: usize,
    /// Container width in logical pixels
    #[arg(long, default_value_t = 300.0)]
    pub width: f32,
    /// Display scale used to convert dp constants to pixels
    #[arg(long, default_value_t = 1.0)]
    pub scale_factor: f64,
    /// Thumb color as `#rgb`, `#rrggbb` or `#rrggbbaa`
    #[arg(long)]
    pub thumb_color: Option<Color>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid slider configuration: {0}")]
    Slider(#[from] SliderArgsError),
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,glide_components=debug,example=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

fn open_storage() -> KeyValueStore {
    KeyValueStore::open_default().unwrap_or_else(|e| {
        let fallback = std::env::temp_dir().join("glide");
        warn!("{e}, falling back to {}", fallback.display());
        KeyValueStore::in_dir(fallback)
    })
}

pub fn run() -> Result<(), AppError> {
    init_tracing();
    let cli = Cli::parse();
    dp::set_scale_factor(cli.scale_factor);

    let themes = ThemeStore::load(open_storage());
    if cli.toggle_dark {
        let mode = themes.toggle_dark();
        info!(%mode, "theme toggled");
    }

    let config = SessionConfig {
        maximum_value: cli.maximum,
        step: cli.step,
        max_available_value: cli.max_available,
        label_count: cli.labels,
        width: cli.width,
        thumb_color: cli.thumb_color,
    };
    let mut session = Session::new(&config, themes.theme())?;
    let log = session.run(config.width);
    info!(
        starts = log.starts.len(),
        changes = log.changes.len(),
        completes = ?log.completes,
        value = session.slider().value(),
        "session finished"
    );
    Ok(())
}
