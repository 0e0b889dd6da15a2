//! The plot builder capability set
//!
//! Every output format implements [`PlotBuilder`]. Callers pick a builder,
//! chain operations on it and finish with [`PlotBuilder::compile`]:
//!
//! ```rust,ignore
//! let mut builder = DmplBuilder::new();
//! builder.pen_up().regular_cut()?.pen_down().plot(-1984, 1337);
//! let program = builder.compile();
//! ```
//!
//! Coordinates are integers in device steps. Once axes are flipped, every
//! (x, y) pair passed to a later operation is swapped before use.

use crate::error::Result;
use crate::tool::Tool;
use crate::units::IntoMeasuringUnit;

/// Operations shared by all plot output formats
pub trait PlotBuilder {
    /// Adds a plot of x and y
    fn plot(&mut self, x: i32, y: i32) -> &mut Self;

    /// Adds a circle with radius `r` centered in (x, y)
    fn circle(&mut self, x: i32, y: i32, r: i32) -> &mut Self;

    /// Adds a circle arc
    ///
    /// (x, y) is the center of the circle which contains the arc. `degrees`
    /// is the size of the arc between -360 and +360; positive values move
    /// counterclockwise, negative values clockwise.
    fn arc(&mut self, x: i32, y: i32, degrees: i32) -> &mut Self;

    /// Adds an ellipse with center (x, y), lateral axis (x1, y1) and vertical axis (x2, y2)
    fn ellipse(&mut self, x: i32, y: i32, x1: i32, y1: i32, x2: i32, y2: i32) -> &mut Self;

    /// Adds a curve through a list of points
    ///
    /// (x1, y1) is the slope at the first point, `points` holds flattened
    /// (x, y) pairs and must have an even length.
    fn curve(&mut self, x: i32, y: i32, x1: i32, y1: i32, points: &[i32]) -> Result<&mut Self>;

    /// Changes the pen of the plotter
    fn change_pen(&mut self, pen: i32) -> Result<&mut Self>;

    /// Lifts the pen up
    fn pen_up(&mut self) -> &mut Self;

    /// Pushes the pen down on the material
    fn pen_down(&mut self) -> &mut Self;

    /// Changes to the flex cut pen
    fn flex_cut(&mut self) -> Result<&mut Self> {
        self.change_pen(Tool::Flex.pen())
    }

    /// Changes to the regular pen
    fn regular_cut(&mut self) -> Result<&mut Self> {
        self.change_pen(Tool::Regular.pen())
    }

    /// Changes to the cut-through pen
    fn through_cut(&mut self) -> Result<&mut Self> {
        self.change_pen(Tool::Through.pen())
    }

    /// Changes to the kiss cut pen
    fn kiss_cut(&mut self) -> Result<&mut Self> {
        self.change_pen(Tool::Kiss.pen())
    }

    /// Changes the pen pressure in grams
    fn pressure(&mut self, grams: i32) -> &mut Self;

    /// Changes the plotter velocity
    fn velocity(&mut self, velocity: i32) -> &mut Self;

    /// Specifies the measuring unit
    ///
    /// `1` selects 0.001 inch, `5` selects 0.005 inch, `M` selects 0.1 mm.
    fn set_measuring_unit<U: IntoMeasuringUnit>(&mut self, unit: U) -> Result<&mut Self>;

    /// Swaps x and y for all following operations
    fn flip_axes(&mut self) -> &mut Self;

    /// Cuts off the material when the program finishes
    fn cut_off(&mut self) -> &mut Self;

    /// Pushes a raw command
    fn push_command(&mut self, command: impl Into<String>) -> &mut Self;

    /// Compiles the operations into the builder's output format
    fn compile(&self) -> String;
}
