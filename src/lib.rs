//! # DMPLKit
//!
//! Fluent builders for plotter and cutter programs:
//! - DM/PL command strings for the device
//! - SVG previews of the same program
//! - Recorded programs that replay onto either builder
//! - JSON/TOML job settings
//!
//! ## Architecture
//!
//! DMPLKit is organized as a workspace with multiple crates:
//!
//! 1. **dmplkit-core** - `PlotBuilder` trait, units, tools, errors, recorded programs
//! 2. **dmplkit-dmpl** - DM/PL command generation
//! 3. **dmplkit-preview** - SVG preview rendering
//! 4. **dmplkit-settings** - Plotter job settings files
//! 5. **dmplkit** - This crate, re-exporting the others
//!
//! ## Usage
//!
//! ```rust
//! use dmplkit::{DmplBuilder, PlotBuilder};
//!
//! let mut builder = DmplBuilder::new();
//! builder.pen_up().regular_cut()?.pen_down().plot(-1984, 1337);
//! assert_eq!(builder.compile(), ";: ECM,U H L0,A100,100,R,U,P0;,D,-1984,1337,e");
//! # Ok::<(), dmplkit::PlotError>(())
//! ```

pub use dmplkit_core::{
    Axes, IntoMeasuringUnit, MeasuringUnit, Operation, PlotBuilder, PlotError, PlotProgram,
    Result, Tool, UnitStep, CUT_THROUGH_PRESSURE, KISS_CUT_PRESSURE, MAX_PEN, MIN_PEN,
};
pub use dmplkit_dmpl::DmplBuilder;
pub use dmplkit_preview::SvgBuilder;
pub use dmplkit_settings::{ConfigError, PlotterSettings, SettingsError, SettingsResult};

/// Initialize logging to stdout
///
/// The level defaults to INFO and can be overridden with `RUST_LOG`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
