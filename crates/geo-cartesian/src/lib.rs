//! Unit-sphere conversions between geodetic positions and Cartesian points.
//!
//! A latitude/longitude pair in degrees is projected onto the sphere of
//! radius 1 centred at the origin, and any `(x, y, z)` can be turned back
//! into a latitude/longitude pair. No ellipsoid or datum is modelled.
//!
//! # Design principles
//!
//! - **Pure**: Every operation is plain arithmetic on `Copy` values
//! - **Total**: Transforms never fail; NaN and infinities propagate
//! - **Capability-based**: Input positions only need to implement [`Geodetic`]
//!
//! # Example
//!
//! ```
//! use geo_cartesian::{Cartesian, LatLon, cartesian_to_lat_long};
//!
//! let point = Cartesian::from_geodetic(&LatLon::new(45.0, 0.0));
//! assert_eq!(point.to_string(), "0.70710678 0 0.70710678");
//!
//! let back = cartesian_to_lat_long(0.0, 1.0, 0.0);
//! assert!((back.longitude - 90.0).abs() < 1e-9);
//! ```

mod cartesian;
mod error;
pub mod format;
mod geodetic;

pub use cartesian::{Cartesian, cartesian_to_lat_long};
pub use error::{CoordinateError, Result};
pub use format::{CartesianFormat, DisplayCartesian};
pub use geodetic::{Geodetic, LatLon};
