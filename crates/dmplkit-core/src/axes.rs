//! Axis orientation shared by every builder.

/// Sticky x/y swap applied to coordinate pairs
///
/// Once flipped the axes stay flipped; there is no way back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Axes {
    flipped: bool,
}

impl Axes {
    /// Unflipped axes
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap x and y for every pair applied from now on
    pub fn flip(&mut self) {
        self.flipped = true;
    }

    /// Whether pairs are currently swapped
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Orient a coordinate pair
    pub fn apply(&self, x: i32, y: i32) -> (i32, i32) {
        if self.flipped {
            (y, x)
        } else {
            (x, y)
        }
    }
}
