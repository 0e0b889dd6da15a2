//! Error handling for DMPLKit
//!
//! Every builder operation that validates its input reports failures through
//! [`PlotError`]. Errors are raised by the call that receives the bad value and
//! leave the builder untouched, so a caller can correct the input and keep
//! chaining on the same instance.
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::units::MeasuringUnit;
use thiserror::Error;

/// Plot builder error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlotError {
    /// Pen id outside the plotter's pen range (0-6)
    #[error("{0} is not a valid Pen")]
    InvalidPen(i32),

    /// Measuring unit outside `1`, `2`, `3`, `4`, `5`, `M`
    #[error("{0} is not a valid measuring unit")]
    InvalidMeasuringUnit(String),

    /// Curve point list must hold whole (x, y) pairs
    #[error("{0} is not an even number of curve coordinates")]
    OddCurvePoints(usize),

    /// Measuring unit is valid but the renderer cannot scale it
    #[error("Unhandled unit: {0}")]
    UnhandledUnit(MeasuringUnit),

    /// Pen id is valid but has no tool class in the preview
    #[error("{0} is not mapped to a preview tool")]
    UnmappedPen(i32),
}

impl PlotError {
    /// Check if this error rejected an argument outright
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            PlotError::InvalidPen(_)
                | PlotError::InvalidMeasuringUnit(_)
                | PlotError::OddCurvePoints(_)
        )
    }

    /// Check if this error comes from a renderer lacking support for a valid value
    pub fn is_unsupported(&self) -> bool {
        matches!(self, PlotError::UnhandledUnit(_) | PlotError::UnmappedPen(_))
    }
}

/// Result type using PlotError
pub type Result<T> = std::result::Result<T, PlotError>;
