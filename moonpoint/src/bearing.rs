//! Moon azimuth + device heading → pointer rotation.
//!
//! Two conventions meet here. The ephemeris reports azimuth astronomically
//! (0 = south, increasing westward, radians); the device reports heading as a
//! compass (0 = north, clockwise, degrees). A half turn maps one onto the other:
//!
//! ```text
//! azimuth (rad, from S) ─► ×180/π ─► +180 ─► mod 360 ─► bearing (deg, from N)
//! ```
//!
//! The rotation is the signed shortest swing from where the device points to the
//! bearing, in (-180, 180], positive clockwise.
//!
//! ```
//! use moonpoint::bearing::compute_rotation;
//!
//! // Moon due south (bearing 180), device facing 170: swing 10° clockwise.
//! let r = compute_rotation(0.0, 170.0)?;
//! assert!((r.degrees() - 10.0).abs() < 1e-9);
//! assert!(r.is_clockwise());
//! # Ok::<(), moonpoint_core::CompassError>(())
//! ```

use moonpoint_core::angle::{validate_finite, wrap_0_360, wrap_signed_180};
use moonpoint_core::constants::{DEG_TO_RAD, HALF_TURN_DEGREES, RAD_TO_DEG};
use moonpoint_core::CompassResult;
use std::fmt;

/// Signed pointer rotation in degrees, within (-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RotationAngle(f64);

impl RotationAngle {
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Same rotation in radians, for renderers that rotate by radians.
    pub fn radians(self) -> f64 {
        self.0 * DEG_TO_RAD
    }

    pub fn is_clockwise(self) -> bool {
        self.0 > 0.0
    }
}

impl fmt::Display for RotationAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sense = if self.0 > 0.0 {
            "clockwise"
        } else if self.0 < 0.0 {
            "counter-clockwise"
        } else {
            "aligned"
        };
        write!(f, "{:+.1}° ({})", self.0, sense)
    }
}

fn bearing_degrees(azimuth_rad: f64, operation: &str) -> CompassResult<f64> {
    let azimuth = validate_finite(azimuth_rad, operation, "moon azimuth")?;
    Ok(wrap_0_360(azimuth * RAD_TO_DEG + HALF_TURN_DEGREES))
}

/// Compass bearing in [0, 360) of a south-based astronomical azimuth.
///
/// # Errors
///
/// `InvalidAngle` when `azimuth_rad` is NaN or infinite.
pub fn compass_bearing(azimuth_rad: f64) -> CompassResult<f64> {
    bearing_degrees(azimuth_rad, "compass_bearing")
}

/// Rotation that swings a forward-pointing indicator onto the Moon.
///
/// # Errors
///
/// `InvalidAngle` when either input is NaN or infinite.
pub fn compute_rotation(azimuth_rad: f64, heading_deg: f64) -> CompassResult<RotationAngle> {
    let bearing = bearing_degrees(azimuth_rad, "compute_rotation")?;
    let heading = validate_finite(heading_deg, "compute_rotation", "device heading")?;
    Ok(RotationAngle(wrap_signed_180(bearing - heading)))
}
