use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::LoadedConfig;

/// Typed application settings. Every key has a default, so an empty
/// document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub shell: ShellConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub main_title: String,
    pub main_width: u32,
    pub main_height: u32,
    /// Share of the screen the order viewer takes, per axis.
    pub viewer_fraction: f64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            main_title: "Wood Store".to_string(),
            main_width: 400,
            main_height: 300,
            viewer_fraction: 0.8,
        }
    }
}

/// Screen size the viewer geometry is derived from. A console has no
/// screen to measure, so it is configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub screen_width: u32,
    pub screen_height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            screen_width: 1920,
            screen_height: 1080,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(v: &Value) -> Result<Self> {
        let cfg: AppConfig =
            serde_json::from_value(v.clone()).context("config does not match the expected shape")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_loaded(loaded: &LoadedConfig) -> Result<Self> {
        Self::from_json(&loaded.config_json)
    }

    pub fn validate(&self) -> Result<()> {
        let f = self.shell.viewer_fraction;
        if !(f > 0.0 && f <= 1.0) {
            bail!("CONFIG_INVALID shell.viewer_fraction must be in (0, 1], got {f}");
        }
        if self.shell.main_width == 0 || self.shell.main_height == 0 {
            bail!("CONFIG_INVALID shell.main_width/main_height must be > 0");
        }
        if self.display.screen_width == 0 || self.display.screen_height == 0 {
            bail!("CONFIG_INVALID display.screen_width/screen_height must be > 0");
        }
        if self.shell.main_title.trim().is_empty() {
            bail!("CONFIG_INVALID shell.main_title must not be empty");
        }
        Ok(())
    }
}
