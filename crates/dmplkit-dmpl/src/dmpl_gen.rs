//! DM/PL command generation.

use dmplkit_core::{
    Axes, IntoMeasuringUnit, MeasuringUnit, PlotBuilder, PlotError, Result, Tool,
};
use tracing::{debug, warn};

/// Program finalizer
const END: &str = "e";
/// Program finalizer that also cuts off the material
const END_WITH_CUT_OFF: &str = ";:c,e";

/// Builds DM/PL command strings for the plotter.
///
/// Operations are stored as comma-separated tokens; the header and the
/// finalizer are only produced by [`PlotBuilder::compile`].
#[derive(Debug, Clone, Default)]
pub struct DmplBuilder {
    instructions: Vec<String>,
    cut_off: bool,
    axes: Axes,
    measuring_unit: MeasuringUnit,
}

impl DmplBuilder {
    /// Creates a builder with metric units and unflipped axes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias for `compile()`, kept for callers of the older name.
    pub fn compile_dmpl(&self) -> String {
        self.compile()
    }

    /// Tokens pushed so far, without header or finalizer.
    pub fn tokens(&self) -> &[String] {
        &self.instructions
    }

    /// Measuring unit written into the `EC` header.
    pub fn measuring_unit(&self) -> MeasuringUnit {
        self.measuring_unit
    }

    /// Whether the program will end with a cut-off.
    pub fn is_cut_off(&self) -> bool {
        self.cut_off
    }

    /// Whether coordinate pairs are being swapped.
    pub fn axes_flipped(&self) -> bool {
        self.axes.is_flipped()
    }

    fn push_pair(&mut self, x: i32, y: i32) {
        let (x, y) = self.axes.apply(x, y);
        self.instructions.push(x.to_string());
        self.instructions.push(y.to_string());
    }

    /// Pushes an `op x` token followed by `y`, the shape commands' prefix.
    fn push_shape_origin(&mut self, op: &str, x: i32, y: i32) {
        let (x, y) = self.axes.apply(x, y);
        self.instructions.push(format!("{} {}", op, x));
        self.instructions.push(y.to_string());
    }
}

impl PlotBuilder for DmplBuilder {
    fn plot(&mut self, x: i32, y: i32) -> &mut Self {
        self.push_pair(x, y);
        self
    }

    fn circle(&mut self, x: i32, y: i32, r: i32) -> &mut Self {
        self.push_shape_origin("CC", x, y);
        self.instructions.push(r.to_string());
        self
    }

    fn arc(&mut self, x: i32, y: i32, degrees: i32) -> &mut Self {
        self.push_shape_origin("CA", x, y);
        self.instructions.push(degrees.to_string());
        self
    }

    fn ellipse(&mut self, x: i32, y: i32, x1: i32, y1: i32, x2: i32, y2: i32) -> &mut Self {
        self.push_shape_origin("CE", x, y);
        self.push_pair(x1, y1);
        self.push_pair(x2, y2);
        self
    }

    fn curve(&mut self, x: i32, y: i32, x1: i32, y1: i32, points: &[i32]) -> Result<&mut Self> {
        if points.len() % 2 != 0 {
            warn!("Rejected curve with {} trailing coordinates", points.len());
            return Err(PlotError::OddCurvePoints(points.len()));
        }

        self.push_shape_origin("CG", x, y);
        self.push_pair(x1, y1);
        for pair in points.chunks_exact(2) {
            self.push_pair(pair[0], pair[1]);
        }

        Ok(self)
    }

    fn change_pen(&mut self, pen: i32) -> Result<&mut Self> {
        if !Tool::is_valid_pen(pen) {
            warn!("Rejected pen {}", pen);
            return Err(PlotError::InvalidPen(pen));
        }

        Ok(self.push_command(format!("P{};", pen)))
    }

    fn pen_up(&mut self) -> &mut Self {
        self.push_command("U")
    }

    fn pen_down(&mut self) -> &mut Self {
        self.push_command("D")
    }

    fn pressure(&mut self, grams: i32) -> &mut Self {
        self.push_command(format!("BP{};", grams))
    }

    fn velocity(&mut self, velocity: i32) -> &mut Self {
        self.push_command(format!("V{};", velocity))
    }

    fn set_measuring_unit<U: IntoMeasuringUnit>(&mut self, unit: U) -> Result<&mut Self> {
        let unit = unit.into_measuring_unit().inspect_err(|e| warn!("{}", e))?;
        debug!("Measuring unit set to {}", unit);
        self.measuring_unit = unit;
        Ok(self)
    }

    fn flip_axes(&mut self) -> &mut Self {
        self.axes.flip();
        self
    }

    fn cut_off(&mut self) -> &mut Self {
        self.cut_off = true;
        self
    }

    fn push_command(&mut self, command: impl Into<String>) -> &mut Self {
        self.instructions.push(command.into());
        self
    }

    fn compile(&self) -> String {
        let mut dmpl = format!(";: EC{},U H L0,A100,100,R,", self.measuring_unit);

        for instruction in &self.instructions {
            dmpl.push_str(instruction);
            dmpl.push(',');
        }
        dmpl.push_str(if self.cut_off { END_WITH_CUT_OFF } else { END });

        debug!(
            "Compiled {} DM/PL tokens ({} bytes)",
            self.instructions.len(),
            dmpl.len()
        );
        dmpl
    }
}
