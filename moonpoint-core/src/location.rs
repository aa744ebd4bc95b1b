//! Observer position on Earth.
//!
//! [`GeoCoordinate`] is what a positioning subsystem hands to the pipeline: geodetic
//! latitude and longitude in degrees, validated on construction. A coordinate is
//! immutable; a new fix replaces it wholesale.
//!
//! # Conventions
//!
//! - **Latitude**: north positive, [-90°, 90°]
//! - **Longitude**: east positive, [-180°, 180°]
//!
//! ```
//! use moonpoint_core::GeoCoordinate;
//!
//! let obs = GeoCoordinate::new(38.9, -77.0)?;
//! assert_eq!(obs.longitude(), -77.0);
//! assert!(GeoCoordinate::new(95.0, 0.0).is_err());
//! # Ok::<(), moonpoint_core::CompassError>(())
//! ```

use crate::angle::{validate_latitude_degrees, validate_longitude_degrees};
use crate::{Angle, CompassResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate from degrees.
    ///
    /// # Errors
    ///
    /// [`CompassError::InvalidCoordinate`](crate::CompassError::InvalidCoordinate) when
    /// either value is non-finite or outside its range.
    pub fn new(latitude: f64, longitude: f64) -> CompassResult<Self> {
        let latitude = validate_latitude_degrees(latitude, "GeoCoordinate::new")?;
        let longitude = validate_longitude_degrees(longitude, "GeoCoordinate::new")?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees, north positive.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, east positive.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude_angle(&self) -> Angle {
        Angle::from_degrees(self.latitude)
    }

    pub fn longitude_angle(&self) -> Angle {
        Angle::from_degrees(self.longitude)
    }
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.4}°{} {:.4}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}
