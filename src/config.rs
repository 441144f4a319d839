//! TOML-based dashboard configuration and preset definitions.

use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Log levels accepted by `[logging] level`.
pub const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Top-level dashboard configuration parsed from TOML.
///
/// All sections are optional. Load from TOML with
/// [`DashboardConfig::from_toml_file`] or start from a preset with
/// [`DashboardConfig::from_preset`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Random source parameters.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Diagnostic logging.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// HTTP API parameters.
    #[serde(default)]
    pub api: ApiConfig,
    /// Terminal dashboard parameters.
    #[serde(default)]
    pub tui: TuiConfig,
}

/// Random source parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Fixed seed; every refresh re-samples from OS entropy when absent.
    pub seed: Option<u64>,
}

/// Diagnostic logging.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default level filter; `RUST_LOG` takes precedence when set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// HTTP API parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// Listen port.
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

/// Terminal dashboard parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TuiConfig {
    /// Auto-refresh interval in milliseconds (must be > 0).
    pub refresh_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { refresh_ms: 2000 }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"tui.refresh_ms"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl Error for ConfigError {}

impl DashboardConfig {
    /// Returns the live preset: a fresh sample on every refresh.
    pub fn live() -> Self {
        Self::default()
    }

    /// Returns the demo preset: seeded, so every refresh shows the same tables.
    pub fn demo() -> Self {
        Self {
            generation: GenerationConfig { seed: Some(42) },
            ..Self::default()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["live", "demo"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "live" => Ok(Self::live()),
            "demo" => Ok(Self::demo()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigError {
                field: "logging.level".into(),
                message: format!(
                    "must be one of {}, got \"{}\"",
                    LOG_LEVELS.join(", "),
                    self.logging.level
                ),
            });
        }

        if self.api.port == 0 {
            errors.push(ConfigError {
                field: "api.port".into(),
                message: "must be > 0".into(),
            });
        }

        if self.tui.refresh_ms == 0 {
            errors.push(ConfigError {
                field: "tui.refresh_ms".into(),
                message: "must be > 0".into(),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_preset_is_unseeded_and_valid() {
        let cfg = DashboardConfig::live();
        assert!(cfg.generation.seed.is_none());
        let errors = cfg.validate();
        assert!(errors.is_empty(), "live should be valid: {errors:?}");
    }

    #[test]
    fn demo_preset_is_seeded() {
        let cfg = DashboardConfig::from_preset("demo");
        assert_eq!(cfg.ok().and_then(|c| c.generation.seed), Some(42));
    }

    #[test]
    fn from_preset_unknown() {
        let err = DashboardConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn all_presets_are_valid() {
        for name in DashboardConfig::PRESETS {
            let cfg = DashboardConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[generation]
seed = 7

[logging]
level = "debug"

[api]
port = 8080

[tui]
refresh_ms = 500
"#;
        let cfg = DashboardConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().and_then(|c| c.generation.seed), Some(7));
        assert_eq!(cfg.as_ref().map(|c| &*c.logging.level), Some("debug"));
        assert_eq!(cfg.as_ref().map(|c| c.api.port), Some(8080));
        assert_eq!(cfg.as_ref().map(|c| c.tui.refresh_ms), Some(500));
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let cfg = DashboardConfig::from_toml_str("[api]\nport = 9000\n");
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.api.port), Some(9000));
        assert_eq!(cfg.as_ref().map(|c| c.tui.refresh_ms), Some(2000));
        assert_eq!(cfg.as_ref().map(|c| &*c.logging.level), Some("info"));
        assert!(cfg.as_ref().is_some_and(|c| c.generation.seed.is_none()));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[generation]
seed = 1
sectors = 8
"#;
        assert!(DashboardConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn validation_catches_zero_refresh() {
        let mut cfg = DashboardConfig::live();
        cfg.tui.refresh_ms = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "tui.refresh_ms"));
    }

    #[test]
    fn validation_catches_bad_log_level() {
        let mut cfg = DashboardConfig::live();
        cfg.logging.level = "loud".to_string();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "logging.level"));
    }

    #[test]
    fn validation_accepts_uppercase_log_level() {
        let mut cfg = DashboardConfig::live();
        cfg.logging.level = "WARN".to_string();
        assert!(cfg.validate().is_empty());
    }
}
