use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_DIR_ENV: &str = "ALERT_DASHBOARD_CONFIG_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Last known window placement
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WindowGeometry {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    /// False until the window has been closed once
    #[serde(default)]
    pub has_position: bool,
}

impl WindowGeometry {
    pub const MIN_WIDTH: f64 = 360.0;
    pub const MIN_HEIGHT: f64 = 240.0;

    pub fn clamped_size(&self) -> (f64, f64) {
        (
            self.width.max(Self::MIN_WIDTH),
            self.height.max(Self::MIN_HEIGHT),
        )
    }
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 420.0,
            x: 50.0,
            y: 50.0,
            has_position: false,
        }
    }
}

/// Dashboard shell settings. Alert data is never stored here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub window: WindowGeometry,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

fn default_title() -> String {
    "Alerts".to_string()
}

fn default_subtitle() -> String {
    "Overview of your notifications and alerts".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowGeometry::default(),
            title: default_title(),
            subtitle: default_subtitle(),
        }
    }
}

/// Directory holding settings.json: `$ALERT_DASHBOARD_CONFIG_DIR` or the working directory
pub fn config_dir() -> PathBuf {
    std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(app_config_dir: PathBuf) -> Self {
        Self {
            config_path: app_config_dir.join("settings.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn try_load(&self) -> Result<Settings, ConfigError> {
        let content = fs::read_to_string(&self.config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load settings, falling back to defaults when the file is missing or broken
    pub fn load(&self) -> Settings {
        if !self.config_path.exists() {
            return Settings::default();
        }
        match self.try_load() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!(
                    "Ignoring settings at {}: {err}",
                    self.config_path.display()
                );
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        // Ensure directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());

        assert_eq!(manager.path(), dir.path().join("settings.json"));

        let default = manager.load();
        assert_eq!(default, Settings::default());

        let new_settings = Settings {
            window: WindowGeometry {
                width: 800.0,
                height: 300.0,
                x: 10.0,
                y: 20.0,
                has_position: true,
            },
            title: "Ops".to_string(),
            subtitle: "Night shift".to_string(),
        };

        manager.save(&new_settings).unwrap();
        let loaded = manager.load();

        assert_eq!(loaded, new_settings);
    }

    #[test]
    fn test_corrupt_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());
        fs::write(manager.path(), "{ not json").unwrap();

        assert!(matches!(manager.try_load(), Err(ConfigError::Json(_))));
        assert_eq!(manager.load(), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());
        fs::write(manager.path(), r#"{ "title": "Pager" }"#).unwrap();

        let loaded = manager.load();
        assert_eq!(loaded.title, "Pager");
        assert_eq!(loaded.subtitle, default_subtitle());
        assert_eq!(loaded.window, WindowGeometry::default());
    }

    #[test]
    fn test_window_size_clamped() {
        let geometry = WindowGeometry {
            width: 10.0,
            height: 10.0,
            ..WindowGeometry::default()
        };
        assert_eq!(
            geometry.clamped_size(),
            (WindowGeometry::MIN_WIDTH, WindowGeometry::MIN_HEIGHT)
        );
    }
}
