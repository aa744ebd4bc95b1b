use moonpoint_core::Angle;
use std::fmt;

/// Topocentric position of the Moon at one instant.
///
/// `azimuth` follows the astronomical convention: 0 = south, increasing westward,
/// in `[0, 2π)`. `altitude` is in `[-π/2, π/2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonPosition {
    pub azimuth: Angle,
    pub altitude: Angle,
    pub distance_km: f64,
    pub parallactic_angle: Angle,
}

impl MoonPosition {
    pub fn is_above_horizon(&self) -> bool {
        self.altitude.radians() > 0.0
    }
}

impl fmt::Display for MoonPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "az {:.2}° (from S) alt {:.2}° dist {:.0} km",
            self.azimuth.degrees(),
            self.altitude.degrees(),
            self.distance_km
        )
    }
}
