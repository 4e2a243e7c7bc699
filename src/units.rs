//! Measurements and the physical unit table.
//!
//! Every physical length in a figure is ultimately expressed in *mils*
//! (thousandths of an inch). A [`Measurement`] pairs a magnitude with a
//! [`Unit`]; absolute units convert to mils through a fixed table, while
//! [`Unit::Percent`] and [`Unit::User`] only have a meaning inside a viewport.
//!
//! ```rust
//! use figscale::{Measurement, Unit};
//!
//! let m = Measurement::new(2.54, Unit::Centimeter);
//! assert!((m.to_mils().unwrap() - 1000.0).abs() < 1e-9);
//!
//! // Relative units need a viewport to resolve.
//! assert_eq!(Measurement::new(50.0, Unit::Percent).to_mils(), None);
//! ```

use std::fmt;

/// Mils per inch.
pub const MILS_PER_INCH: f64 = 1000.0;
/// Mils per centimeter (1 in = 2.54 cm).
pub const MILS_PER_CM: f64 = 1000.0 / 2.54;
/// Mils per millimeter (1 in = 25.4 mm).
pub const MILS_PER_MM: f64 = 1000.0 / 25.4;
/// Mils per typographic point (1 in = 72 pt).
pub const MILS_PER_POINT: f64 = 1000.0 / 72.0;

/// Unit tag carried by a [`Measurement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    #[default]
    Inch,
    Centimeter,
    Millimeter,
    Point,
    /// Percentage of the enclosing viewport's width (X) or height (Y).
    Percent,
    /// Coordinates of the viewport's own coordinate system.
    User,
}

impl Unit {
    /// Returns `true` for units whose physical size depends on a viewport.
    pub const fn is_relative(self) -> bool {
        matches!(self, Self::Percent | Self::User)
    }

    /// Mils per unit for the absolute units; `None` for relative ones.
    pub const fn mils_per_unit(self) -> Option<f64> {
        match self {
            Self::Inch => Some(MILS_PER_INCH),
            Self::Centimeter => Some(MILS_PER_CM),
            Self::Millimeter => Some(MILS_PER_MM),
            Self::Point => Some(MILS_PER_POINT),
            Self::Percent | Self::User => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Inch => "in",
            Self::Centimeter => "cm",
            Self::Millimeter => "mm",
            Self::Point => "pt",
            Self::Percent => "%",
            Self::User => "u",
        };
        f.write_str(token)
    }
}

/// One of the two orthogonal directions of a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    X,
    Y,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// A magnitude paired with a unit.
///
/// A NaN or infinite magnitude is kept as is and marks the measurement
/// undefined: it converts to nothing rather than to some other point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    value: f64,
    unit: Unit,
}

impl Measurement {
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Shorthand for a measurement in user units.
    pub fn user(value: f64) -> Self {
        Self::new(value, Unit::User)
    }

    /// Shorthand for a measurement in inches.
    pub fn inches(value: f64) -> Self {
        Self::new(value, Unit::Inch)
    }

    /// Shorthand for a percentage of the viewport.
    pub fn percent(value: f64) -> Self {
        Self::new(value, Unit::Percent)
    }

    pub const fn value(&self) -> f64 {
        self.value
    }

    pub const fn unit(&self) -> Unit {
        self.unit
    }

    pub const fn is_relative(&self) -> bool {
        self.unit.is_relative()
    }

    /// Whether the magnitude is finite.
    pub fn is_defined(&self) -> bool {
        self.value.is_finite()
    }

    /// Converts an absolute measurement to mils.
    ///
    /// Returns `None` for percent and user units, which need a viewport, and
    /// for an undefined magnitude.
    pub fn to_mils(&self) -> Option<f64> {
        if !self.is_defined() {
            return None;
        }
        self.unit.mils_per_unit().map(|k| self.value * k)
    }

    /// Expresses a length in mils as a measurement in an absolute unit.
    ///
    /// Returns `None` when `unit` is relative.
    pub fn from_mils(mils: f64, unit: Unit) -> Option<Self> {
        let k = unit.mils_per_unit()?;
        Some(Self::new(mils / k, unit))
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}
