//! Application settings
//!
//! Window size, item bounds, startup preset and logging. Stored as JSON in the
//! platform config dir. Layouts themselves are never written here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::constants::{clipboard, config as paths, items, logging, window};
use crate::layout::{ItemLimits, LayoutPreset, presets};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_window_width")]
    pub window_width: u16,
    #[serde(default = "default_window_height")]
    pub window_height: u16,
    /// Preset id loaded at startup
    #[serde(default = "default_preset_id")]
    pub default_preset: String,
    #[serde(default = "default_min_items")]
    pub min_items: usize,
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    /// How long the "Copied!" acknowledgement stays up
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
}

fn default_log_level() -> String {
    logging::DEFAULT_LEVEL.to_string()
}

fn default_window_width() -> u16 {
    1440
}

fn default_window_height() -> u16 {
    900
}

fn default_preset_id() -> String {
    presets::default_preset().id.to_string()
}

fn default_min_items() -> usize {
    items::MIN_ITEMS
}

fn default_max_items() -> usize {
    items::MAX_ITEMS
}

fn default_copy_feedback_ms() -> u64 {
    clipboard::FEEDBACK_MS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            default_preset: default_preset_id(),
            min_items: default_min_items(),
            max_items: default_max_items(),
            copy_feedback_ms: default_copy_feedback_ms(),
        }
    }
}

impl AppConfig {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(paths::APP_DIR);
        path.push(paths::FILENAME);
        path
    }

    /// Load settings from the default location, writing defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "Settings file not found, creating default");
            let config = AppConfig::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let mut config: AppConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings JSON from {}", path.display()))?;
        config.validate_and_clamp();

        info!(path = %path.display(), preset = %config.default_preset, "Loaded settings");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        info!(path = %path.display(), "Saved settings");
        Ok(())
    }

    /// Clamp values to ranges the editor can work with
    pub fn validate_and_clamp(&mut self) {
        if self.min_items < items::MIN_ITEMS {
            warn!(min_items = self.min_items, min = items::MIN_ITEMS, "min_items below minimum, clamping");
            self.min_items = items::MIN_ITEMS;
        }

        if self.max_items > items::MAX_ITEMS_LIMIT {
            warn!(max_items = self.max_items, max = items::MAX_ITEMS_LIMIT, "max_items exceeds limit, clamping");
            self.max_items = items::MAX_ITEMS_LIMIT;
        }

        if self.min_items > self.max_items {
            warn!(min_items = self.min_items, max_items = self.max_items, "min_items exceeds max_items, using max_items for both");
            self.min_items = self.max_items;
        }

        if self.window_width < window::MIN_WIDTH {
            warn!(window_width = self.window_width, min = window::MIN_WIDTH, "window_width below minimum, clamping");
            self.window_width = window::MIN_WIDTH;
        }

        if self.window_height < window::MIN_HEIGHT {
            warn!(window_height = self.window_height, min = window::MIN_HEIGHT, "window_height below minimum, clamping");
            self.window_height = window::MIN_HEIGHT;
        }

        if presets::find(&self.default_preset).is_none() {
            warn!(default_preset = %self.default_preset, using = %default_preset_id(), "Unknown default_preset, using first preset");
            self.default_preset = default_preset_id();
        }
    }

    pub fn item_limits(&self) -> ItemLimits {
        ItemLimits {
            min: self.min_items,
            max: self.max_items,
        }
    }

    /// Preset for `id`, falling back to the configured default
    pub fn startup_preset(&self, id: Option<&str>) -> &'static LayoutPreset {
        if let Some(id) = id {
            match presets::find(id) {
                Some(preset) => return preset,
                None => warn!(preset = %id, "Unknown preset requested, using configured default"),
            }
        }
        presets::find(&self.default_preset).unwrap_or_else(presets::default_preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("flexbox-labs-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "max_items": 8 }"#).unwrap();
        assert_eq!(config.max_items, 8);
        assert_eq!(config.min_items, 1);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.default_preset, "basic-row");
        assert_eq!(config.copy_feedback_ms, 2000);
    }

    #[test]
    fn test_validate_clamps_item_bounds() {
        let mut config = AppConfig {
            min_items: 0,
            max_items: 500,
            ..AppConfig::default()
        };
        config.validate_and_clamp();
        assert_eq!(config.item_limits(), ItemLimits { min: 1, max: 64 });

        let mut config = AppConfig {
            min_items: 10,
            max_items: 4,
            ..AppConfig::default()
        };
        config.validate_and_clamp();
        assert_eq!(config.item_limits(), ItemLimits { min: 4, max: 4 });
    }

    #[test]
    fn test_validate_clamps_window_size() {
        let mut config = AppConfig {
            window_width: 0,
            window_height: 300,
            ..AppConfig::default()
        };
        config.validate_and_clamp();
        assert_eq!((config.window_width, config.window_height), (1100, 700));

        let mut config = AppConfig::default();
        config.validate_and_clamp();
        assert_eq!((config.window_width, config.window_height), (1440, 900));
    }

    #[test]
    fn test_validate_replaces_unknown_preset() {
        let mut config = AppConfig {
            default_preset: "masonry".to_string(),
            ..AppConfig::default()
        };
        config.validate_and_clamp();
        assert_eq!(config.default_preset, "basic-row");
    }

    #[test]
    fn test_startup_preset_prefers_requested() {
        let config = AppConfig {
            default_preset: "navbar".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.startup_preset(Some("sidebar")).id, "sidebar");
        assert_eq!(config.startup_preset(Some("nope")).id, "navbar");
        assert_eq!(config.startup_preset(None).id, "navbar");
    }

    #[test]
    fn test_load_creates_then_reads_file() {
        let path = temp_path("create/settings.json");
        let _ = fs::remove_file(&path);

        let created = AppConfig::load_from(&path).unwrap();
        assert_eq!(created, AppConfig::default());
        assert!(path.exists());

        let modified = AppConfig {
            default_preset: "card-grid".to_string(),
            max_items: 20,
            ..AppConfig::default()
        };
        modified.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), modified);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let path = temp_path("invalid/settings.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse settings JSON"));

        let _ = fs::remove_file(&path);
    }
}
