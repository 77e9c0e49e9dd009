use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::clipboard::DEFAULT_HOLD;
use crate::copier::DEFAULT_MESSAGE;
use crate::notify::NotifyMode;
use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notify: NotifyMode,

    #[serde(default = "default_message")]
    pub message: String,

    /// Milliseconds the clipboard is held after a copy (Linux only).
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,

    /// Document used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<PathBuf>,
}

fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

fn default_hold_ms() -> u64 {
    DEFAULT_HOLD.as_millis() as u64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notify: NotifyMode::default(),
            message: default_message(),
            hold_ms: default_hold_ms(),
            document: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.notify, NotifyMode::Dialog);
        assert_eq!(config.message, "Copied!");
        assert_eq!(config.hold_ms, 250);
        assert!(config.document.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("notify = \"dialog\""));
        assert!(!toml_str.contains("document"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
        notify = "stderr"
        hold_ms = 1000
        document = "/tmp/transcript.md"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.notify, NotifyMode::Stderr);
        assert_eq!(config.message, "Copied!");
        assert_eq!(config.hold_ms, 1000);
        assert_eq!(config.document, Some(PathBuf::from("/tmp/transcript.md")));
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config.message, "Copied!");
    }

    #[test]
    fn test_load_from_invalid_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "notify = \"popup\"").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
