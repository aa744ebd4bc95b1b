//! Equatorial → horizontal transforms and the small corrections applied on the way.
//!
//! Azimuths come out of [`equatorial_to_horizontal`] measured from north through
//! east. The pipeline's published convention is the astronomical one (0 = south,
//! increasing westward), produced by [`south_based_azimuth`].

use moonpoint_core::angle::{clamp_dec, wrap_0_2pi};
use moonpoint_core::constants::{HALF_PI, PI};
use moonpoint_core::Angle;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPosition {
    /// North-based, eastward azimuth in [0, 2π).
    pub azimuth: Angle,
    pub altitude: Angle,
}

pub fn equatorial_to_horizontal(
    hour_angle: Angle,
    declination: Angle,
    latitude: Angle,
) -> HorizontalPosition {
    let (sin_ha, cos_ha) = hour_angle.sin_cos();
    let (sin_dec, cos_dec) = declination.sin_cos();
    let (sin_lat, cos_lat) = latitude.sin_cos();

    // Unit vector in the local north/east/up frame
    let x = -cos_ha * cos_dec * sin_lat + sin_dec * cos_lat;
    let y = -sin_ha * cos_dec;
    let z = cos_ha * cos_dec * cos_lat + sin_dec * sin_lat;

    let r = libm::sqrt(x * x + y * y);
    let azimuth = if r != 0.0 { libm::atan2(y, x) } else { 0.0 };
    let altitude = libm::atan2(z, r);

    HorizontalPosition {
        azimuth: Angle::from_radians(wrap_0_2pi(azimuth)),
        altitude: Angle::from_radians(altitude),
    }
}

/// Rotates a north-based azimuth by half a turn into the 0 = south convention.
#[inline]
pub fn south_based_azimuth(north_based: Angle) -> Angle {
    Angle::from_radians(wrap_0_2pi(north_based.radians() + PI))
}

/// Angle between the direction to the celestial pole and the zenith, at the target.
pub fn parallactic_angle(hour_angle: Angle, declination: Angle, latitude: Angle) -> Angle {
    let (sin_ha, cos_ha) = hour_angle.sin_cos();
    let (sin_dec, cos_dec) = declination.sin_cos();
    let (sin_lat, cos_lat) = latitude.sin_cos();

    let numerator = sin_ha;
    let denominator = sin_lat / cos_lat * cos_dec - sin_dec * cos_ha;

    Angle::from_radians(libm::atan2(numerator, denominator))
}

/// Lowers a geocentric altitude to the topocentric one.
///
/// Diurnal parallax: `p = asin(sin π · sin z)` where `π` is the horizontal parallax
/// and `z` the zenith distance.
pub fn apply_diurnal_parallax(altitude: Angle, horizontal_parallax: Angle) -> Angle {
    let zenith = HALF_PI - altitude.radians();
    let ratio = horizontal_parallax.sin();
    let parallax = if ratio < 1.0 {
        libm::asin(ratio * libm::sin(zenith))
    } else {
        HALF_PI
    };
    Angle::from_radians(altitude.radians() - parallax)
}

/// Mean atmospheric refraction (Sæmundsson) for a true altitude, in the same angle.
///
/// Altitudes below the horizon use the horizon value; the formula diverges
/// a few degrees under it.
pub fn refraction(altitude: Angle) -> Angle {
    let h = altitude.radians().max(0.0);
    Angle::from_radians(0.0002967 / libm::tan(h + 0.00312536 / (h + 0.08901179)))
}

/// Adds refraction and keeps the result a valid altitude.
pub fn apparent_altitude(true_altitude: Angle) -> Angle {
    Angle::from_radians(clamp_dec(
        true_altitude.radians() + refraction(true_altitude).radians(),
    ))
}
