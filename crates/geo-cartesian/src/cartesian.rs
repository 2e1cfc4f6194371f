//! Cartesian points and the unit-sphere transform.
//!
//! A geodetic position (latitude φ, longitude λ) maps to
//!
//! ```text
//! x = cos φ · cos λ
//! y = cos φ · sin λ
//! z = sin φ
//! ```
//!
//! and back through `λ = atan2(y, x)`, `φ = atan2(z, √(x² + y²))`. Both
//! directions are total: nothing is validated and NaN or infinite inputs
//! propagate through the trigonometry.

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{CoordinateError, Result};
use crate::format::{CartesianFormat, DisplayCartesian};
use crate::geodetic::{Geodetic, LatLon};

/// A point in 3-D space, usually on the unit sphere.
///
/// Points derived from a geodetic position have unit length (up to
/// rounding). Points built with [`Cartesian::new`] are stored verbatim and
/// may have any length.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cartesian {
    /// X component, towards latitude 0, longitude 0.
    pub x: f64,
    /// Y component, towards latitude 0, longitude 90° east.
    pub y: f64,
    /// Z component, towards the north pole.
    pub z: f64,
}

impl Cartesian {
    /// The origin, `(0, 0, 0)`.
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a point from raw components, without normalization.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a point from raw components, rejecting NaN and infinities.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::NonFinite`] naming the first bad component.
    pub fn try_new(x: f64, y: f64, z: f64) -> Result<Self> {
        for (axis, value) in [("x", x), ("y", y), ("z", z)] {
            if !value.is_finite() {
                tracing::debug!("rejected cartesian component {axis}={value}");
                return Err(CoordinateError::NonFinite { axis, value });
            }
        }
        Ok(Self::new(x, y, z))
    }

    /// Project a geodetic position onto the unit sphere.
    ///
    /// Out-of-range angles are not rejected; they still produce a point on
    /// the sphere.
    #[must_use]
    pub fn from_geodetic<G: Geodetic + ?Sized>(position: &G) -> Self {
        Self::from(unit_vector(position.latitude(), position.longitude()))
    }

    /// Overwrite this point with the projection of a new geodetic position.
    pub fn recompute<G: Geodetic + ?Sized>(&mut self, position: &G) {
        let previous = *self;
        *self = Self::from_geodetic(position);
        tracing::trace!(from = %previous, to = %self, "recomputed cartesian point");
    }

    /// Convert back to latitude and longitude in degrees.
    ///
    /// The origin maps to `(0, 0)`. Points off the unit sphere are treated
    /// as directions; only their angle matters.
    #[must_use]
    pub fn to_lat_long(&self) -> LatLon {
        lat_long_from_components(self.x, self.y, self.z)
    }

    /// The point as a glam vector.
    #[must_use]
    pub fn as_dvec3(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Distance from the origin.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.as_dvec3().length()
    }

    /// Whether `x² + y² + z²` is within `tolerance` of 1.
    #[must_use]
    pub fn is_unit(&self, tolerance: f64) -> bool {
        (self.as_dvec3().length_squared() - 1.0).abs() <= tolerance
    }

    /// Scale the point onto the unit sphere. The origin stays at the origin.
    #[must_use]
    pub fn normalize(&self) -> Self {
        Self::from(self.as_dvec3().normalize_or_zero())
    }

    /// Central angle in degrees between two points, seen from the origin.
    ///
    /// For points derived from geodetic positions this is their great-circle
    /// separation on the unit sphere. Returns 0 if either point is the origin.
    #[must_use]
    pub fn angle_to(&self, other: &Self) -> f64 {
        let a = self.as_dvec3();
        let b = other.as_dvec3();
        // atan2 of |a × b| and a · b stays accurate near 0° and 180°.
        a.cross(b).length().atan2(a.dot(b)).to_degrees()
    }

    /// Render with a non-canonical format.
    #[must_use]
    pub fn display_with(&self, format: CartesianFormat) -> DisplayCartesian {
        format.display(self)
    }
}

/// Convert Cartesian components to latitude and longitude in degrees.
///
/// Same conversion as [`Cartesian::to_lat_long`], for callers holding three
/// loose values.
#[must_use]
pub fn cartesian_to_lat_long(x: f64, y: f64, z: f64) -> LatLon {
    lat_long_from_components(x, y, z)
}

fn lat_long_from_components(x: f64, y: f64, z: f64) -> LatLon {
    let lon_rad = y.atan2(x);
    let hyp = (x * x + y * y).sqrt();
    let lat_rad = z.atan2(hyp);
    LatLon::new(lat_rad.to_degrees(), lon_rad.to_degrees())
}

fn unit_vector(lat_deg: f64, lon_deg: f64) -> DVec3 {
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();
    DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
}

impl fmt::Display for Cartesian {
    /// Canonical form: each component rounded to 8 places, space separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&CartesianFormat::CANONICAL.display(self), f)
    }
}

impl From<LatLon> for Cartesian {
    fn from(position: LatLon) -> Self {
        Self::from_geodetic(&position)
    }
}

impl From<Cartesian> for LatLon {
    fn from(point: Cartesian) -> Self {
        point.to_lat_long()
    }
}

impl From<DVec3> for Cartesian {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Cartesian> for DVec3 {
    fn from(point: Cartesian) -> Self {
        point.as_dvec3()
    }
}
