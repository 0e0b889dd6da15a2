//! # DMPLKit Core
//!
//! Core types, traits, and errors shared by the DMPLKit plot builders.
//!
//! - [`PlotBuilder`]: the operation set every output format implements
//! - [`MeasuringUnit`] and [`Tool`]: the plotter's unit and pen tables
//! - [`Axes`]: the sticky axis flip applied to coordinate pairs
//! - [`Operation`] and [`PlotProgram`]: builder calls recorded as data
//! - [`PlotError`]: validation failures

pub mod axes;
pub mod builder;
pub mod error;
pub mod operation;
pub mod tool;
pub mod units;

pub use axes::Axes;
pub use builder::PlotBuilder;
pub use error::{PlotError, Result};
pub use operation::{Operation, PlotProgram};
pub use tool::{Tool, CUT_THROUGH_PRESSURE, KISS_CUT_PRESSURE, MAX_PEN, MIN_PEN};
pub use units::{IntoMeasuringUnit, MeasuringUnit, UnitStep};
