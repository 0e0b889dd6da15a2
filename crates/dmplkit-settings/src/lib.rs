//! Plotter settings for DMPLKit
//!
//! Provides settings file handling and validation. Settings are stored as
//! JSON or TOML and applied to a builder as the preamble of a plot job.

pub mod config;
pub mod error;

pub use config::PlotterSettings;
pub use error::{ConfigError, SettingsError, SettingsResult};
