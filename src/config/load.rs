use std::{env, path::PathBuf};

use super::schema::Settings;

const ENV_PREFIX: &str = "VIVACE";
const APP_DIR: &str = "vivace";

impl Settings {
    /// Load settings as layered sources: struct defaults, then the
    /// config file (when one exists), then `VIVACE__` environment
    /// variables, with later layers winning.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = config_path() {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.storage.fallback_track_name.trim().is_empty() {
            return Err("storage.fallback_track_name must not be blank".to_string());
        }
        Ok(())
    }
}

/// Where the config file lives: the `VIVACE_CONFIG_PATH` override, or
/// `config.toml` in the XDG config directory.
pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os("VIVACE_CONFIG_PATH") {
        return Some(explicit.into());
    }
    let config_home = xdg_dir("XDG_CONFIG_HOME", &[".config"])?;
    Some(config_home.join(APP_DIR).join("config.toml"))
}

/// The per-user data directory, `$XDG_DATA_HOME/vivace` or
/// `~/.local/share/vivace`.
pub fn default_data_dir() -> Option<PathBuf> {
    Some(xdg_dir("XDG_DATA_HOME", &[".local", "share"])?.join(APP_DIR))
}

/// Resolve the directory imported tracks live in. An explicit
/// `storage.library_dir` wins; otherwise `tracks/` under the data
/// directory, or a relative `tracks/` as a last resort.
pub fn resolve_library_dir(settings: &Settings) -> PathBuf {
    settings.storage.library_dir.clone().unwrap_or_else(|| {
        default_data_dir()
            .map(|d| d.join("tracks"))
            .unwrap_or_else(|| PathBuf::from("tracks"))
    })
}

/// `$var` when set, otherwise `$HOME` extended with `home_suffix`.
fn xdg_dir(var: &str, home_suffix: &[&str]) -> Option<PathBuf> {
    if let Some(dir) = env::var_os(var) {
        return Some(dir.into());
    }
    let mut dir = PathBuf::from(env::var_os("HOME")?);
    for part in home_suffix {
        dir.push(part);
    }
    Some(dir)
}
