//! Geodetic positions (latitude and longitude in degrees).

use serde::{Deserialize, Serialize};

use crate::error::{CoordinateError, Result};

/// Anything that can report a latitude and longitude in degrees.
///
/// The transforms in this crate only read these two angles. Range checks,
/// hemisphere handling and datum corrections belong to the implementor.
pub trait Geodetic {
    /// Latitude in degrees, positive north.
    fn latitude(&self) -> f64;

    /// Longitude in degrees, positive east.
    fn longitude(&self) -> f64;
}

impl<T: Geodetic + ?Sized> Geodetic for &T {
    fn latitude(&self) -> f64 {
        (**self).latitude()
    }

    fn longitude(&self) -> f64 {
        (**self).longitude()
    }
}

/// A `(latitude, longitude)` pair in degrees.
impl Geodetic for (f64, f64) {
    fn latitude(&self) -> f64 {
        self.0
    }

    fn longitude(&self) -> f64 {
        self.1
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLon {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl LatLon {
    /// Create a position without range checks.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a position, rejecting non-finite or out-of-range angles.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::NonFinite`] for NaN or infinite input,
    /// [`CoordinateError::LatitudeOutOfRange`] outside [-90, 90] and
    /// [`CoordinateError::LongitudeOutOfRange`] outside [-180, 180].
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        let checked = check_latitude(latitude).and_then(|()| check_longitude(longitude));
        if let Err(e) = checked {
            tracing::debug!("rejected geodetic position: {e}");
            return Err(e);
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Whether both angles are finite and inside their valid ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        check_latitude(self.latitude).is_ok() && check_longitude(self.longitude).is_ok()
    }
}

impl Geodetic for LatLon {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl From<(f64, f64)> for LatLon {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

fn check_latitude(value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CoordinateError::NonFinite {
            axis: "latitude",
            value,
        });
    }
    if !(-90.0..=90.0).contains(&value) {
        return Err(CoordinateError::LatitudeOutOfRange { value });
    }
    Ok(())
}

fn check_longitude(value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CoordinateError::NonFinite {
            axis: "longitude",
            value,
        });
    }
    if !(-180.0..=180.0).contains(&value) {
        return Err(CoordinateError::LongitudeOutOfRange { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_accepts_bounds() {
        for (lat, lon) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0), (45.5, -73.25)] {
            let pos = LatLon::try_new(lat, lon).unwrap();
            assert!(pos.is_valid());
            assert!((pos.latitude - lat).abs() < f64::EPSILON);
            assert!((pos.longitude - lon).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert_eq!(
            LatLon::try_new(90.000_001, 0.0),
            Err(CoordinateError::LatitudeOutOfRange { value: 90.000_001 })
        );
        assert_eq!(
            LatLon::try_new(0.0, -180.5),
            Err(CoordinateError::LongitudeOutOfRange { value: -180.5 })
        );
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        let result = LatLon::try_new(f64::NAN, 0.0);
        assert!(matches!(
            result,
            Err(CoordinateError::NonFinite {
                axis: "latitude",
                ..
            })
        ));

        let result = LatLon::try_new(0.0, f64::NEG_INFINITY);
        assert!(matches!(
            result,
            Err(CoordinateError::NonFinite {
                axis: "longitude",
                ..
            })
        ));
    }

    #[test]
    fn test_new_is_unchecked() {
        let pos = LatLon::new(120.0, 400.0);
        assert!(!pos.is_valid());
        assert!((pos.latitude() - 120.0).abs() < f64::EPSILON);
        assert!((pos.longitude() - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tuple_is_geodetic() {
        let pair = (12.5, -3.0);
        assert!((pair.latitude() - 12.5).abs() < f64::EPSILON);
        assert!((pair.longitude() + 3.0).abs() < f64::EPSILON);

        let pos = LatLon::from(pair);
        assert!((pos.latitude - 12.5).abs() < f64::EPSILON);
        assert!((pos.longitude + 3.0).abs() < f64::EPSILON);
    }
}
