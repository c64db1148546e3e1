use crate::config;

/// Settings are best-effort: any load or validation problem falls back
/// to defaults so the app still starts.
pub fn load_settings() -> config::Settings {
    let loaded = config::Settings::load()
        .map_err(|e| e.to_string())
        .and_then(|s| s.validate().map(|()| s));

    loaded.unwrap_or_else(|why| {
        eprintln!("vivace: using default config: {why}");
        config::Settings::default()
    })
}
