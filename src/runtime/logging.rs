use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// Send `tracing` output to the log file; the terminal belongs to the player.
pub fn init(settings: &LogSettings) -> std::io::Result<()> {
    let path = settings
        .file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("termplay.log"));
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.filter.as_str()));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
    Ok(())
}
