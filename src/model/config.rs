use serde::{Deserialize, Serialize};

/// Color scheme preference, the one setting that survives restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePref {
    Light,
    #[default]
    Dark,
}

impl ThemePref {
    pub fn toggled(self) -> Self {
        match self {
            ThemePref::Light => ThemePref::Dark,
            ThemePref::Dark => ThemePref::Light,
        }
    }
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemePref,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_keys_missing() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.theme, ThemePref::Dark);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = AppConfig { theme: ThemePref::Light };
        let text = toml::to_string(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
