//! SVG preview renderer
//! Illustrates a plot program as an SVG line drawing.
//! Features:
//! - Lines for every pen-down plot, styled by the active cutting tool
//! - Arcs as SVG elliptical arc paths
//! - Canvas sized from the extent of the drawing and the measuring unit

use dmplkit_core::{
    Axes, IntoMeasuringUnit, MeasuringUnit, PlotBuilder, PlotError, Result, Tool, UnitStep,
};
use tracing::{debug, trace, warn};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

const STYLE: &str = r#"    <defs>
        <style>
            .regular {
                stroke: rgb(0,0,255);
                stroke-width: 4;
            }

            .kiss {
                stroke: rgb(0,0,255);
                stroke-width: 4;
                stroke-dasharray: 20 4;
            }

            .flex {
                stroke: rgb(255,0,0);
                stroke-width: 4;
                stroke-dasharray: 20 4;
            }

            .through {
                stroke: rgb(255,0,0);
                stroke-width: 4;
            }

            path {
                fill: none;
            }
        </style>
    </defs>
"#;

/// Builds an SVG preview of a plot program.
///
/// Unlike the DM/PL builder this one tracks where the pen is: plots are
/// relative moves from the current position, and every visited point grows
/// the drawing's extent.
#[derive(Debug, Clone)]
pub struct SvgBuilder {
    x: i64,
    y: i64,
    max_x: f64,
    max_y: f64,
    instructions: Vec<String>,
    axes: Axes,
    pen_down: bool,
    tool: Tool,
    measuring_unit: MeasuringUnit,
    step: UnitStep,
}

impl Default for SvgBuilder {
    fn default() -> Self {
        let measuring_unit = MeasuringUnit::default();
        Self {
            x: 0,
            y: 0,
            max_x: 0.0,
            max_y: 0.0,
            instructions: Vec::new(),
            axes: Axes::new(),
            pen_down: true,
            tool: Tool::default(),
            measuring_unit,
            step: measuring_unit.step().unwrap_or(UnitStep::TENTH_MILLIMETER),
        }
    }
}

impl SvgBuilder {
    /// Creates a builder at the origin with the pen down and the regular tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pen position.
    pub fn cursor(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// Largest x and y reached so far.
    pub fn extent(&self) -> (f64, f64) {
        (self.max_x, self.max_y)
    }

    /// Tool used for the next drawn element.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Whether plots currently draw.
    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    /// Measuring unit used to size the canvas.
    pub fn measuring_unit(&self) -> MeasuringUnit {
        self.measuring_unit
    }

    /// Markup fragments emitted so far.
    pub fn elements(&self) -> &[String] {
        &self.instructions
    }

    fn grow_extent(&mut self, x: f64, y: f64) {
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn push_element(&mut self, name: &str, attributes: &[(&str, String)]) {
        let mut element = format!("<{}", name);
        for (attribute, value) in attributes {
            element.push_str(&format!(" {}=\"{}\"", attribute, escape_attribute(value)));
        }
        element.push_str(" />");
        self.instructions.push(element);
    }
}

impl PlotBuilder for SvgBuilder {
    fn plot(&mut self, x: i32, y: i32) -> &mut Self {
        let (dx, dy) = self.axes.apply(x, y);
        let target_x = self.x + i64::from(dx);
        let target_y = self.y + i64::from(dy);

        self.grow_extent(target_x as f64, target_y as f64);

        if self.pen_down {
            let class = self.tool.css_class().to_string();
            self.push_element(
                "line",
                &[
                    ("x1", self.x.to_string()),
                    ("y1", self.y.to_string()),
                    ("x2", target_x.to_string()),
                    ("y2", target_y.to_string()),
                    ("class", class),
                ],
            );
        }

        self.x = target_x;
        self.y = target_y;
        self
    }

    /// Not drawn in the preview.
    fn circle(&mut self, x: i32, y: i32, r: i32) -> &mut Self {
        trace!("Circle ({}, {}) r={} not rendered in SVG preview", x, y, r);
        self
    }

    /// Adds a circle arc.
    ///
    /// (x, y) is the center of the circle relative to the current position.
    /// The end point is an approximation that only looks right for arcs of
    /// more than 180 degrees; the large-arc flag is always set. The current
    /// position does not move.
    fn arc(&mut self, x: i32, y: i32, degrees: i32) -> &mut Self {
        let (dx, dy) = self.axes.apply(x, y);
        let (dx, dy) = (f64::from(dx), f64::from(dy));
        let radius = (dx * dx + dy * dy).sqrt();

        let angle = i64::from(degrees) + 180;
        let radians = angle as f64 * std::f64::consts::PI / 180.0;
        let end_x = dx + radius * radians.cos();
        let end_y = dy + radius * radians.sin();

        self.grow_extent(
            self.x as f64 + dx + radius,
            self.y as f64 + dy + radius,
        );

        let large_arc = 1;
        let sweep = if angle < 0 { 0 } else { 1 };

        let description = format!(
            "M {} {} a {} {} 0 {} {} {} {}",
            self.x,
            self.y,
            format_number(radius),
            format_number(radius),
            large_arc,
            sweep,
            format_number(end_x),
            format_number(end_y),
        );
        let class = self.tool.css_class().to_string();
        self.push_element("path", &[("d", description), ("class", class)]);
        self
    }

    /// Not drawn in the preview.
    fn ellipse(&mut self, x: i32, y: i32, _x1: i32, _y1: i32, _x2: i32, _y2: i32) -> &mut Self {
        trace!("Ellipse at ({}, {}) not rendered in SVG preview", x, y);
        self
    }

    /// Not drawn in the preview.
    fn curve(&mut self, x: i32, y: i32, _x1: i32, _y1: i32, points: &[i32]) -> Result<&mut Self> {
        trace!(
            "Curve from ({}, {}) with {} coordinates not rendered in SVG preview",
            x,
            y,
            points.len()
        );
        Ok(self)
    }

    fn change_pen(&mut self, pen: i32) -> Result<&mut Self> {
        if !Tool::is_valid_pen(pen) {
            warn!("Rejected pen {}", pen);
            return Err(PlotError::InvalidPen(pen));
        }

        match Tool::from_pen(pen) {
            Some(tool) => {
                self.tool = tool;
                Ok(self)
            }
            None => {
                warn!("Pen {} has no preview tool", pen);
                Err(PlotError::UnmappedPen(pen))
            }
        }
    }

    fn pen_up(&mut self) -> &mut Self {
        self.pen_down = false;
        self
    }

    fn pen_down(&mut self) -> &mut Self {
        self.pen_down = true;
        self
    }

    /// No effect in the SVG output.
    fn pressure(&mut self, _grams: i32) -> &mut Self {
        self
    }

    /// No effect in the SVG output.
    fn velocity(&mut self, _velocity: i32) -> &mut Self {
        self
    }

    fn set_measuring_unit<U: IntoMeasuringUnit>(&mut self, unit: U) -> Result<&mut Self> {
        let unit = unit.into_measuring_unit().inspect_err(|e| warn!("{}", e))?;
        let step = unit.step().ok_or_else(|| {
            warn!("Unhandled unit {} in SVG preview", unit);
            PlotError::UnhandledUnit(unit)
        })?;

        debug!("Preview unit set to {} ({} {})", unit, step.size, step.label);
        self.measuring_unit = unit;
        self.step = step;
        Ok(self)
    }

    fn flip_axes(&mut self) -> &mut Self {
        self.axes.flip();
        self
    }

    /// No effect in the SVG output.
    fn cut_off(&mut self) -> &mut Self {
        self
    }

    /// No effect in the SVG output.
    fn push_command(&mut self, _command: impl Into<String>) -> &mut Self {
        self
    }

    fn compile(&self) -> String {
        let width = format!("{}{}", format_number(self.max_x * self.step.size), self.step.label);
        let height = format!("{}{}", format_number(self.max_y * self.step.size), self.step.label);

        let mut svg = format!(
            "<svg xmlns=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
            SVG_NAMESPACE,
            width,
            height,
            format_number(self.max_x),
            format_number(self.max_y),
        );
        svg.push_str(STYLE);
        svg.push_str("    ");
        svg.push_str(&self.instructions.join("\n"));
        svg.push_str("\n</svg>");

        debug!(
            "Compiled SVG preview with {} elements, {}x{}",
            self.instructions.len(),
            width,
            height
        );
        svg
    }
}

/// Formats a number for SVG output: at most six decimals, no trailing zeros.
pub fn format_number(value: f64) -> String {
    let text = format!("{:.6}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Escapes a value for use inside a double-quoted XML attribute.
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
