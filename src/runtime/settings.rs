use crate::config::Settings;

/// Load and validate settings. A broken config is reported on stderr and the
/// defaults are used instead; the player still starts.
pub fn load_settings() -> Settings {
    let loaded = Settings::load()
        .map_err(|e| format!("failed to load config: {e}"))
        .and_then(|s| match s.validate() {
            Ok(()) => Ok(s),
            Err(msg) => Err(format!("invalid config: {msg}")),
        });

    loaded.unwrap_or_else(|msg| {
        eprintln!("termplay: {msg}, using defaults");
        Settings::default()
    })
}
