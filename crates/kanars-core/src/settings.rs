// Engine settings
// Tunable parameters loaded from a TOML file. Deployed variants have shipped
// with idle timeouts of both 3000 and 5000 ms, so the timeout is never
// hard-coded.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::mode::ActiveMode;

/// Default idle timeout before a half-typed series is discarded.
pub const DEFAULT_IDLE_TIMEOUT_MS: u64 = 5000;

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
struct SettingsToml {
    #[serde(default)]
    engine: Option<EngineToml>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct EngineToml {
    #[serde(default)]
    idle_timeout_ms: Option<u64>,

    #[serde(default)]
    startup_mode: Option<String>,
}

/// Runtime-tunable engine parameters.
#[derive(Debug, Clone)]
pub struct Settings {
    idle_timeout: Duration,
    startup_mode: ActiveMode,
    source_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    pub fn new() -> Self {
        Self {
            idle_timeout: Duration::from_millis(DEFAULT_IDLE_TIMEOUT_MS),
            startup_mode: ActiveMode::Latin,
            source_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut settings = Self::from_toml_str(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let parsed: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();
        if let Some(engine) = parsed.engine {
            if let Some(ms) = engine.idle_timeout_ms {
                if ms == 0 {
                    return Err(SettingsError::InvalidValue(
                        "idle_timeout_ms must be positive".to_string(),
                    ));
                }
                settings.idle_timeout = Duration::from_millis(ms);
            }
            if let Some(mode) = engine.startup_mode {
                settings.startup_mode = ActiveMode::from_str(&mode).map_err(|_| {
                    SettingsError::InvalidValue(format!("unknown startup_mode '{}'", mode))
                })?;
            }
        }
        Ok(settings)
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    pub fn set_idle_timeout(&mut self, timeout: Duration) {
        self.idle_timeout = timeout;
    }

    pub fn startup_mode(&self) -> ActiveMode {
        self.startup_mode
    }

    pub fn set_startup_mode(&mut self, mode: ActiveMode) {
        self.startup_mode = mode;
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::new();
        assert_eq!(settings.idle_timeout(), Duration::from_millis(5000));
        assert_eq!(settings.startup_mode(), ActiveMode::Latin);
    }

    #[test]
    fn test_parse_toml() {
        let settings = Settings::from_toml_str(
            r#"
            [engine]
            idle_timeout_ms = 3000
            startup_mode = "hiragana"
            "#,
        )
        .unwrap();
        assert_eq!(settings.idle_timeout(), Duration::from_millis(3000));
        assert_eq!(settings.startup_mode(), ActiveMode::Hiragana);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(
            settings.idle_timeout(),
            Duration::from_millis(DEFAULT_IDLE_TIMEOUT_MS)
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            Settings::from_toml_str("[engine]\nidle_timeout_ms = 0"),
            Err(SettingsError::InvalidValue(_))
        ));
        assert!(matches!(
            Settings::from_toml_str("[engine]\nstartup_mode = \"kanji\""),
            Err(SettingsError::InvalidValue(_))
        ));
        assert!(matches!(
            Settings::from_toml_str("not toml ["),
            Err(SettingsError::TomlParse(_))
        ));
    }
}
