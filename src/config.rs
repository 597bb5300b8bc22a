//! Application configuration persistence
//!
//! Stores user preferences in `~/.config/sqldraft/config.yaml`

use serde::{Deserialize, Serialize};

/// Environment variable that overrides `api.base_url`
pub const API_BASE_URL_ENV: &str = "SQLDRAFT_API_BASE_URL";

/// Configuration that persists across sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default)]
    pub api: ApiSettings,
}

/// Settings for mounted SQL editors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Display height handed to the host, opaque to the controller
    #[serde(default = "default_height")]
    pub height: String,
    /// Emit `Change` notifications on every buffer mutation
    #[serde(default)]
    pub notify_changes: bool,
}

/// Settings for the admin backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

pub fn default_height() -> String {
    "400px".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            height: default_height(),
            notify_changes: false,
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Load config from disk, or return defaults if not found
    ///
    /// `SQLDRAFT_API_BASE_URL` wins over the file when set.
    pub fn load() -> Self {
        let mut config = Self::load_file();
        if let Ok(base_url) = std::env::var(API_BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                tracing::debug!("Using API base URL from {}", API_BASE_URL_ENV);
                config.api.base_url = base_url;
            }
        }
        config
    }

    fn load_file() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse a config document; missing sections fall back to defaults
    pub fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.editor.height, "400px");
        assert!(!config.editor.notify_changes);
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = AppConfig::parse("editor:\n  height: 600px\n").unwrap();
        assert_eq!(config.editor.height, "600px");
        assert_eq!(config.api, ApiSettings::default());
    }

    #[test]
    fn test_empty_mapping_is_default() {
        let config = AppConfig::parse("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
