use std::env;
use std::fs;
use std::path::PathBuf;

use crate::model::config::AppConfig;

/// Error type for config IO
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no config directory on this system")]
    NoConfigDir,
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config encode: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Path of `config.toml`: `$PLANK_CONFIG` when set (tests use this),
/// otherwise `<user config dir>/plank/config.toml`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = env::var("PLANK_CONFIG") {
        return Ok(PathBuf::from(path));
    }
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join("plank").join("config.toml"))
}

/// Load the config, degrading to defaults when the file is missing or
/// unreadable; a broken theme file must never keep the app from starting.
pub fn load() -> AppConfig {
    let Ok(path) = config_path() else {
        return AppConfig::default();
    };
    match fs::read_to_string(&path) {
        Ok(text) => toml::from_str(&text).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Write the config via temp file + rename so a crash mid-write cannot
/// leave a torn file behind.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string(config)?;
    let tmp = path.with_extension("toml.tmp");
    fs::write(&tmp, &text)?;
    fs::rename(&tmp, &path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::ThemePref;
    use tempfile::TempDir;

    // Serialized via the PLANK_CONFIG env var, which is process-global.
    fn with_config_path<T>(f: impl FnOnce(&std::path::Path) -> T) -> T {
        static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
        let _guard = LOCK.lock().unwrap();
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        unsafe { env::set_var("PLANK_CONFIG", &path) };
        let out = f(&path);
        unsafe { env::remove_var("PLANK_CONFIG") };
        out
    }

    #[test]
    fn round_trips_theme() {
        with_config_path(|_| {
            let config = AppConfig {
                theme: ThemePref::Light,
            };
            save(&config).unwrap();
            assert_eq!(load(), config);
        });
    }

    #[test]
    fn missing_file_defaults() {
        with_config_path(|_| {
            assert_eq!(load(), AppConfig::default());
        });
    }

    #[test]
    fn malformed_file_defaults() {
        with_config_path(|path| {
            fs::write(path, "theme = 42").unwrap();
            assert_eq!(load(), AppConfig::default());
        });
    }
}
