//! Sidereal time from the Earth rotation angle.
//!
//! GMST follows the IAU 2006 expression: the Earth rotation angle plus a polynomial
//! in TT centuries. The pipeline feeds UTC for both UT1 and TT. The resulting error
//! (ΔT ≈ 70 s, |UT1 - UTC| < 0.9 s) moves the Moon by well under a tenth of a degree,
//! far below what a handheld compass resolves.

use crate::JulianDate;
use moonpoint_core::angle::wrap_0_2pi;
use moonpoint_core::constants::{ARCSEC_TO_RAD, J2000_JD, TWOPI};
use moonpoint_core::math::fmod;
use moonpoint_core::{Angle, CompassError, CompassResult};

/// Earth rotation angle (IAU 2000) in [0, 2π).
pub fn earth_rotation_angle(ut1: &JulianDate) -> CompassResult<Angle> {
    let (d1, d2) = if ut1.jd1 < ut1.jd2 {
        (ut1.jd1, ut1.jd2)
    } else {
        (ut1.jd2, ut1.jd1)
    };

    let t = d1 + (d2 - J2000_JD);

    if !t.is_finite() || t.abs() > 1e12 {
        return Err(CompassError::invalid_time(
            "earth_rotation_angle",
            &format!("Time value out of valid range: {} days from J2000", t),
        ));
    }

    let f = fmod(d1, 1.0) + fmod(d2, 1.0);
    let theta = TWOPI * (f + 0.7790572732640 + 0.00273781191135448 * t);

    Ok(Angle::from_radians(wrap_0_2pi(theta)))
}

/// Greenwich mean sidereal time in [0, 2π).
pub fn greenwich_mean_sidereal_time(jd: &JulianDate) -> CompassResult<Angle> {
    let era = earth_rotation_angle(jd)?;
    let t = jd.centuries_since_j2000();

    // Horner form keeps the higher-order terms from losing precision
    let polynomial_arcsec = 0.014506
        + t * (4612.156534
            + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 + t * (-0.0000000368)))));

    Ok(Angle::from_radians(wrap_0_2pi(
        era.radians() + polynomial_arcsec * ARCSEC_TO_RAD,
    )))
}

/// Local mean sidereal time for an east-positive longitude, in [0, 2π).
pub fn local_sidereal_time(jd: &JulianDate, longitude: Angle) -> CompassResult<Angle> {
    let gmst = greenwich_mean_sidereal_time(jd)?;
    Ok((gmst + longitude).normalized())
}
