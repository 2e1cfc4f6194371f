//! Text rendering of Cartesian points.
//!
//! The canonical form is three space-separated values, each rounded to
//! eight decimal places and printed with the shortest representation that
//! round-trips (so trailing zeros are dropped: `0.5`, `0`, `-1`).
//! [`CartesianFormat`] can change the number of places or switch to a
//! fixed-width form that always prints every decimal.

use std::fmt;

use crate::Cartesian;

/// Decimal places used by the canonical rendering.
pub const DEFAULT_DECIMALS: u8 = 8;

/// Scaled magnitudes at or above 2^52 carry no fractional part.
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Round `value` to `decimals` places, ties to even.
///
/// Non-finite values, and values whose scaled magnitude no longer has a
/// fractional part, are returned unchanged. A negative zero produced by
/// rounding is returned as positive zero.
#[must_use]
pub fn round_to(value: f64, decimals: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let scale = 10f64.powi(i32::from(decimals));
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= INTEGRAL_THRESHOLD {
        return value;
    }

    // Adding positive zero folds -0.0 into 0.0.
    scaled.round_ties_even() / scale + 0.0
}

/// Options for rendering a [`Cartesian`] as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartesianFormat {
    /// Decimal places each component is rounded to.
    pub decimals: u8,
    /// Always print exactly `decimals` digits after the point.
    pub fixed_width: bool,
}

impl Default for CartesianFormat {
    fn default() -> Self {
        Self::CANONICAL
    }
}

impl CartesianFormat {
    /// The format used by `Cartesian`'s `Display` implementation.
    pub const CANONICAL: Self = Self {
        decimals: DEFAULT_DECIMALS,
        fixed_width: false,
    };

    /// Create the canonical format.
    #[must_use]
    pub fn new() -> Self {
        Self::CANONICAL
    }

    /// Set the number of decimal places.
    #[must_use]
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    /// Enable or disable zero-padding to `decimals` places.
    #[must_use]
    pub fn with_fixed_width(mut self, fixed_width: bool) -> Self {
        self.fixed_width = fixed_width;
        self
    }

    /// Render a point to a string.
    #[must_use]
    pub fn render(self, point: &Cartesian) -> String {
        self.display(point).to_string()
    }

    /// Wrap a point in a `Display` adapter using this format.
    #[must_use]
    pub fn display(self, point: &Cartesian) -> DisplayCartesian {
        DisplayCartesian {
            point: *point,
            format: self,
        }
    }

    fn write_component(self, f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
        let rounded = round_to(value, self.decimals);
        if self.fixed_width {
            write!(f, "{rounded:.prec$}", prec = usize::from(self.decimals))
        } else {
            write!(f, "{rounded}")
        }
    }
}

/// `Display` adapter returned by [`CartesianFormat::display`] and
/// [`Cartesian::display_with`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayCartesian {
    point: Cartesian,
    format: CartesianFormat,
}

impl fmt::Display for DisplayCartesian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format.write_component(f, self.point.x)?;
        f.write_str(" ")?;
        self.format.write_component(f, self.point.y)?;
        f.write_str(" ")?;
        self.format.write_component(f, self.point.z)
    }
}
