use std::env;
use std::path::{Path, PathBuf};

use ::config::{Config, ConfigError, Environment, File};

use super::schema::Settings;
use crate::keys::KeyBindings;

const ENV_PREFIX: &str = "TERMPLAY";
const PATH_VAR: &str = "TERMPLAY_CONFIG_PATH";
const APP_DIR: &str = "termplay";

impl Settings {
    /// Config file (see [`config_file`]), overlaid by `TERMPLAY__SECTION__KEY`
    /// environment variables, over the built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(config_file().as_deref())
    }

    /// Like [`Settings::load`] with an explicit file. A missing file is not an
    /// error.
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Reject values the player cannot run with. All problems are reported
    /// together.
    pub fn validate(&self) -> Result<(), String> {
        let mut problems = Vec::new();

        if self.player.fps == 0 {
            problems.push("player.fps must be >= 1".to_string());
        }
        if !(self.player.seek_fraction > 0.0 && self.player.seek_fraction <= 1.0) {
            problems.push("player.seek_fraction must be in (0, 1]".to_string());
        }
        if self.ui.box_width < 10 {
            problems.push("ui.box_width must be >= 10".to_string());
        }
        if let Err(msg) = KeyBindings::from_settings(&self.keys) {
            problems.push(msg);
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.join("; "))
        }
    }
}

/// `TERMPLAY_CONFIG_PATH` when set, otherwise [`xdg_config_file`].
pub fn config_file() -> Option<PathBuf> {
    env::var_os(PATH_VAR)
        .map(PathBuf::from)
        .or_else(xdg_config_file)
}

/// `$XDG_CONFIG_HOME/termplay/config.toml`, or `~/.config/termplay/config.toml`
/// without `XDG_CONFIG_HOME`.
pub fn xdg_config_file() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join(APP_DIR).join("config.toml"))
}
