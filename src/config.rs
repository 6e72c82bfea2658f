//! Startup configuration.
//!
//! Settings are read from the JSON file named by the `DOODLER_CONFIG`
//! environment variable. Without one, or if it cannot be used, the defaults
//! apply.
//!
//! ```json
//! {
//!   "default_style": { "color": "black", "width": 5.0, "opacity": 1.0 },
//!   "gestures": { "touch_slop": 8.0, "long_press_secs": 0.4 },
//!   "window": { "title": "Drawing Canvas", "width": 800.0, "height": 600.0 }
//! }
//! ```

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::input::GestureConfig;
use crate::style::{PaletteColor, StrokeStyle};

/// Environment variable holding the path of the config file
pub const CONFIG_ENV_VAR: &str = "DOODLER_CONFIG";

/// Style the first stroke is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub color: PaletteColor,
    pub width: f32,
    pub opacity: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color: PaletteColor::Black,
            width: 5.0,
            opacity: 1.0,
        }
    }
}

impl StyleConfig {
    pub fn to_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.color.color(), self.width, self.opacity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Drawing Canvas".to_owned(),
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing sections fall back to their defaults
pub struct Config {
    pub default_style: StyleConfig,
    pub gestures: GestureConfig,
    pub window: WindowConfig,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], falling back to defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        let path = Path::new(&path);
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                warn!("{}; using default config", err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let style = &self.default_style;
        if !style.width.is_finite() || style.width <= 0.0 {
            return Err(invalid("default_style.width", format!("{} is not a positive width", style.width)));
        }
        if !(0.0..=1.0).contains(&style.opacity) {
            return Err(invalid("default_style.opacity", format!("{} is outside 0..=1", style.opacity)));
        }
        if !self.gestures.touch_slop.is_finite() || self.gestures.touch_slop < 0.0 {
            return Err(invalid("gestures.touch_slop", format!("{} is negative", self.gestures.touch_slop)));
        }
        if !self.gestures.long_press_secs.is_finite() || self.gestures.long_press_secs <= 0.0 {
            return Err(invalid(
                "gestures.long_press_secs",
                format!("{} is not a positive duration", self.gestures.long_press_secs),
            ));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(invalid(
                "window",
                format!("{}x{} is not a usable size", self.window.width, self.window.height),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
