//! Startup configuration shared by the front-ends.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::speed::{Fps, MAX_FPS, MIN_FPS};
use crate::variant::Variant;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyConfig {
    #[serde(default = "default_target")]
    pub target: u64,
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default = "default_variant")]
    pub variant: String,
}

fn default_target() -> u64 {
    100
}

fn default_fps() -> u32 {
    crate::speed::DEFAULT_FPS
}

fn default_variant() -> String {
    "playful".to_string()
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            fps: default_fps(),
            variant: default_variant(),
        }
    }
}

/// A checked config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub target: u64,
    pub fps: Fps,
    pub variant: Variant,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    UnknownVariant(String),
    FpsOutOfRange(u32),
    InvalidTarget,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read config: {}", e),
            ConfigError::Json(e) => write!(f, "Invalid config JSON: {}", e),
            ConfigError::UnknownVariant(name) => write!(f, "Unknown variant '{}'", name),
            ConfigError::FpsOutOfRange(v) => {
                write!(f, "fps {} is outside {}..={}", v, MIN_FPS, MAX_FPS)
            }
            ConfigError::InvalidTarget => write!(f, "target must be above 0"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl TallyConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<Settings, ConfigError> {
        if self.target == 0 {
            return Err(ConfigError::InvalidTarget);
        }
        let fps = Fps::new(self.fps).ok_or(ConfigError::FpsOutOfRange(self.fps))?;
        let variant = Variant::by_name(&self.variant)
            .ok_or_else(|| ConfigError::UnknownVariant(self.variant.clone()))?;
        Ok(Settings {
            target: self.target,
            fps,
            variant,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let cfg = TallyConfig::from_json("{}").unwrap();
        assert_eq!(cfg, TallyConfig::default());
        let s = cfg.validate().unwrap();
        assert_eq!(s.target, 100);
        assert_eq!(s.fps.get(), 33);
        assert_eq!(s.variant.name, "playful");
    }

    #[test]
    fn partial_config_overrides_fields() {
        let cfg = TallyConfig::from_json(r#"{"fps": 60, "variant": "plain"}"#).unwrap();
        let s = cfg.validate().unwrap();
        assert_eq!(s.fps.get(), 60);
        assert_eq!(s.variant.name, "plain");
        assert_eq!(s.target, 100);
    }

    #[test]
    fn bad_values_are_rejected() {
        let cfg = TallyConfig {
            fps: 0,
            ..TallyConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::FpsOutOfRange(0))));

        let cfg = TallyConfig {
            variant: "neon".to_string(),
            ..TallyConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::UnknownVariant(_))));

        let cfg = TallyConfig {
            target: 0,
            ..TallyConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidTarget)));

        assert!(matches!(
            TallyConfig::from_json("{\"fps\": \"fast\"}"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = TallyConfig::load(Path::new("/nonexistent/tally/config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
