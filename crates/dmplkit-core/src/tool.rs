//! Pens and cutting tools
//!
//! The plotter carries pens 0 through 6. Four of them are fitted with the
//! cutting tools the builders know by name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest valid pen id
pub const MIN_PEN: i32 = 0;
/// Highest valid pen id
pub const MAX_PEN: i32 = 6;

/// Pen pressure in grams for a kiss cut
pub const KISS_CUT_PRESSURE: i32 = 50;
/// Pen pressure in grams for cutting through the material
pub const CUT_THROUGH_PRESSURE: i32 = 100;

/// Cutting tool mounted on a pen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Pen 0
    #[default]
    Regular,
    /// Pen 1, cuts the top layer only
    Kiss,
    /// Pen 5, cuts through the material
    Through,
    /// Pen 6, perforating flex cut
    Flex,
}

impl Tool {
    /// Pen id the tool is mounted on
    pub fn pen(self) -> i32 {
        match self {
            Self::Regular => 0,
            Self::Kiss => 1,
            Self::Through => 5,
            Self::Flex => 6,
        }
    }

    /// Tool mounted on a pen, if any
    pub fn from_pen(pen: i32) -> Option<Self> {
        match pen {
            0 => Some(Self::Regular),
            1 => Some(Self::Kiss),
            5 => Some(Self::Through),
            6 => Some(Self::Flex),
            _ => None,
        }
    }

    /// Style class used for this tool in SVG previews
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Kiss => "kiss",
            Self::Through => "through",
            Self::Flex => "flex",
        }
    }

    /// Check a pen id against the plotter's pen range
    pub fn is_valid_pen(pen: i32) -> bool {
        (MIN_PEN..=MAX_PEN).contains(&pen)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}
