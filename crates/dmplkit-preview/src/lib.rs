//! # DMPLKit Preview
//!
//! Renders plot programs as SVG documents for visual inspection before they
//! are sent to the plotter. Each cutting tool gets its own line style:
//!
//! - **regular**: solid blue
//! - **kiss**: dashed blue
//! - **through**: solid red
//! - **flex**: dashed red
//!
//! Circles, ellipses and curves are not drawn. Pressure, velocity, cut-off
//! and raw commands have no visual effect.

pub mod svg_renderer;

pub use dmplkit_core::{PlotBuilder, PlotError};
pub use svg_renderer::{escape_attribute, format_number, SvgBuilder};
