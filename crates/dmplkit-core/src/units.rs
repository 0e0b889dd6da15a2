//! Measuring units
//!
//! DM/PL selects the size of one device step with the `EC` header command.
//! `1` selects 0.001 inch, `5` selects 0.005 inch and `M` selects 0.1 mm.
//! Codes `2`, `3` and `4` are accepted by the plotter but carry no known
//! physical step size.

use crate::error::{PlotError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measuring unit selected by the `EC` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum MeasuringUnit {
    /// `1`: 0.001 inch steps
    Thousandth,
    /// `2`
    Two,
    /// `3`
    Three,
    /// `4`
    Four,
    /// `5`: 0.005 inch steps
    FiveThousandths,
    /// `M`: 0.1 mm steps
    #[default]
    TenthMillimeter,
}

/// Physical size of one device step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitStep {
    /// Unit suffix ("mm" or "in")
    pub label: &'static str,
    /// Length of one step in `label` units
    pub size: f64,
}

impl UnitStep {
    /// Step of the default `M` unit
    pub const TENTH_MILLIMETER: UnitStep = UnitStep {
        label: "mm",
        size: 0.1,
    };
}

impl MeasuringUnit {
    /// All units accepted by the `EC` header
    pub const ALL: [MeasuringUnit; 6] = [
        MeasuringUnit::Thousandth,
        MeasuringUnit::Two,
        MeasuringUnit::Three,
        MeasuringUnit::Four,
        MeasuringUnit::FiveThousandths,
        MeasuringUnit::TenthMillimeter,
    ];

    /// Protocol code of this unit
    pub fn code(self) -> char {
        match self {
            Self::Thousandth => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::FiveThousandths => '5',
            Self::TenthMillimeter => 'M',
        }
    }

    /// Step size, for the units with a known physical size
    pub fn step(self) -> Option<UnitStep> {
        match self {
            Self::TenthMillimeter => Some(UnitStep::TENTH_MILLIMETER),
            Self::Thousandth => Some(UnitStep {
                label: "in",
                size: 0.001,
            }),
            Self::FiveThousandths => Some(UnitStep {
                label: "in",
                size: 0.005,
            }),
            Self::Two | Self::Three | Self::Four => None,
        }
    }
}

impl fmt::Display for MeasuringUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for MeasuringUnit {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1" => Ok(Self::Thousandth),
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            "4" => Ok(Self::Four),
            "5" => Ok(Self::FiveThousandths),
            "M" => Ok(Self::TenthMillimeter),
            _ => Err(PlotError::InvalidMeasuringUnit(s.to_string())),
        }
    }
}

impl TryFrom<String> for MeasuringUnit {
    type Error = PlotError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<MeasuringUnit> for String {
    fn from(unit: MeasuringUnit) -> Self {
        unit.code().to_string()
    }
}

/// Values a caller may hand to `set_measuring_unit`
///
/// Validation happens here, so a builder never stores an unknown unit.
pub trait IntoMeasuringUnit {
    /// Convert into a measuring unit, rejecting anything outside `1`-`5`, `M`
    fn into_measuring_unit(self) -> Result<MeasuringUnit>;
}

impl IntoMeasuringUnit for MeasuringUnit {
    fn into_measuring_unit(self) -> Result<MeasuringUnit> {
        Ok(self)
    }
}

impl IntoMeasuringUnit for &str {
    fn into_measuring_unit(self) -> Result<MeasuringUnit> {
        self.parse()
    }
}

impl IntoMeasuringUnit for String {
    fn into_measuring_unit(self) -> Result<MeasuringUnit> {
        self.parse()
    }
}

impl IntoMeasuringUnit for char {
    fn into_measuring_unit(self) -> Result<MeasuringUnit> {
        let mut buf = [0u8; 4];
        self.encode_utf8(&mut buf).parse()
    }
}

impl IntoMeasuringUnit for u32 {
    fn into_measuring_unit(self) -> Result<MeasuringUnit> {
        self.to_string().parse()
    }
}

impl IntoMeasuringUnit for i32 {
    fn into_measuring_unit(self) -> Result<MeasuringUnit> {
        self.to_string().parse()
    }
}
