//! Recorded plot operations
//!
//! An [`Operation`] is one builder call captured as data. A [`PlotProgram`]
//! replays a list of them onto any [`PlotBuilder`], so the same job can be
//! compiled for the plotter and for a preview without repeating the calls.

use crate::builder::PlotBuilder;
use crate::error::Result;
use crate::units::MeasuringUnit;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single builder call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Plot of x and y
    Plot { x: i32, y: i32 },
    /// Circle with radius `r` centered in (x, y)
    Circle { x: i32, y: i32, r: i32 },
    /// Arc of `degrees` around (x, y)
    Arc { x: i32, y: i32, degrees: i32 },
    /// Ellipse around (x, y) with axes (x1, y1) and (x2, y2)
    Ellipse {
        x: i32,
        y: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    },
    /// Curve from (x, y) with slope (x1, y1) through flattened `points`
    Curve {
        x: i32,
        y: i32,
        x1: i32,
        y1: i32,
        #[serde(default)]
        points: Vec<i32>,
    },
    /// Pen change
    ChangePen { pen: i32 },
    /// Lift the pen
    PenUp,
    /// Lower the pen
    PenDown,
    /// Measuring unit change
    SetUnit { unit: MeasuringUnit },
    /// Velocity change
    SetVelocity { velocity: i32 },
    /// Pen pressure change in grams
    SetPressure { grams: i32 },
    /// Swap x and y from here on
    FlipAxes,
    /// Cut off the material at the end of the program
    CutOff,
    /// Raw protocol command
    RawCommand { command: String },
}

impl Operation {
    /// Perform this operation on a builder
    pub fn apply<B: PlotBuilder>(&self, builder: &mut B) -> Result<()> {
        match self {
            Self::Plot { x, y } => {
                builder.plot(*x, *y);
            }
            Self::Circle { x, y, r } => {
                builder.circle(*x, *y, *r);
            }
            Self::Arc { x, y, degrees } => {
                builder.arc(*x, *y, *degrees);
            }
            Self::Ellipse {
                x,
                y,
                x1,
                y1,
                x2,
                y2,
            } => {
                builder.ellipse(*x, *y, *x1, *y1, *x2, *y2);
            }
            Self::Curve {
                x,
                y,
                x1,
                y1,
                points,
            } => {
                builder.curve(*x, *y, *x1, *y1, points)?;
            }
            Self::ChangePen { pen } => {
                builder.change_pen(*pen)?;
            }
            Self::PenUp => {
                builder.pen_up();
            }
            Self::PenDown => {
                builder.pen_down();
            }
            Self::SetUnit { unit } => {
                builder.set_measuring_unit(*unit)?;
            }
            Self::SetVelocity { velocity } => {
                builder.velocity(*velocity);
            }
            Self::SetPressure { grams } => {
                builder.pressure(*grams);
            }
            Self::FlipAxes => {
                builder.flip_axes();
            }
            Self::CutOff => {
                builder.cut_off();
            }
            Self::RawCommand { command } => {
                builder.push_command(command.as_str());
            }
        }
        Ok(())
    }
}

/// An ordered list of operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlotProgram {
    operations: Vec<Operation>,
}

impl PlotProgram {
    /// Create an empty program
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation
    pub fn push(&mut self, operation: Operation) -> &mut Self {
        self.operations.push(operation);
        self
    }

    /// Recorded operations in order
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Number of recorded operations
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Replay every operation onto a builder, stopping at the first rejected one
    pub fn render_onto<B: PlotBuilder>(&self, builder: &mut B) -> Result<()> {
        debug!("Replaying {} plot operations", self.operations.len());
        for operation in &self.operations {
            operation.apply(builder)?;
        }
        Ok(())
    }

    /// Replay onto a fresh builder and compile it
    pub fn compile_with<B: PlotBuilder + Default>(&self) -> Result<String> {
        let mut builder = B::default();
        self.render_onto(&mut builder)?;
        Ok(builder.compile())
    }
}

impl From<Vec<Operation>> for PlotProgram {
    fn from(operations: Vec<Operation>) -> Self {
        Self { operations }
    }
}

impl FromIterator<Operation> for PlotProgram {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PlotProgram {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
