//! Plotter job settings
//!
//! A job's unit, orientation, tool and feed settings can be kept in a JSON or
//! TOML file and written onto any builder before the drawing operations.
//!
//! ```toml
//! measuring_unit = "M"
//! flip_axes = true
//! cut_off = true
//! tool = "kiss"
//! velocity = 40
//! pressure = 50
//! ```

use crate::error::{ConfigError, SettingsError, SettingsResult};
use dmplkit_core::{MeasuringUnit, PlotBuilder, Tool};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const APP_DIR: &str = "dmplkit";
const SETTINGS_FILE: &str = "plotter.toml";

/// Settings applied at the start of a plot job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlotterSettings {
    /// Measuring unit of the job
    pub measuring_unit: MeasuringUnit,
    /// Swap x and y for every operation
    pub flip_axes: bool,
    /// Cut off the material when the job finishes
    pub cut_off: bool,
    /// Tool to select before drawing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<Tool>,
    /// Plotter velocity override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity: Option<i32>,
    /// Pen pressure override in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<i32>,
}

impl PlotterSettings {
    /// Create settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings file location, `<config dir>/dmplkit/plotter.toml`
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        info!("Loaded plotter settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match FileFormat::from_path(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        info!("Saved plotter settings to {}", path.display());
        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> SettingsResult<()> {
        if let Some(velocity) = self.velocity {
            if velocity <= 0 {
                return Err(SettingsError::InvalidSetting {
                    key: "velocity".to_string(),
                    reason: format!("must be > 0, got {}", velocity),
                });
            }
        }

        if let Some(pressure) = self.pressure {
            if pressure <= 0 {
                return Err(SettingsError::InvalidSetting {
                    key: "pressure".to_string(),
                    reason: format!("must be > 0, got {}", pressure),
                });
            }
        }

        Ok(())
    }

    /// Write the settings onto a builder
    ///
    /// Order: measuring unit, axis flip, tool, velocity, pressure, cut-off.
    pub fn apply_to<B: PlotBuilder>(&self, builder: &mut B) -> SettingsResult<()> {
        self.validate()?;
        debug!("Applying plotter settings {:?}", self);

        builder.set_measuring_unit(self.measuring_unit)?;
        if self.flip_axes {
            builder.flip_axes();
        }
        if let Some(tool) = self.tool {
            builder.change_pen(tool.pen())?;
        }
        if let Some(velocity) = self.velocity {
            builder.velocity(velocity);
        }
        if let Some(pressure) = self.pressure {
            builder.pressure(pressure);
        }
        if self.cut_off {
            builder.cut_off();
        }

        Ok(())
    }
}

/// Supported settings file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("(none)").to_string(),
            )
            .into()),
        }
    }
}
