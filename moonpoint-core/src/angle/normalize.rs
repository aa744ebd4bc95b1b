//! Angle normalization.
//!
//! **Wrapping** preserves direction: 370° and 10° point the same way.
//! **Clamping** enforces physical limits: an altitude cannot pass the zenith.
//!
//! The wrapping functions use `libm::fmod` (via [`crate::math::fmod`]). Rust's `%`
//! and `fmod` both keep the sign of the dividend, so every wrap adjusts negative
//! remainders afterwards.
//!
//! # Signed rotation range
//!
//! [`wrap_signed_180`] is the only function here with a half-open range closed on
//! the positive side, `(-180, 180]`. A half turn is physically the same whichever
//! way the pointer swings, and reporting it as both `-180` and `+180` depending on
//! the order of the operands would make the rotation flicker. The result is therefore
//! canonicalized to `+180`.
//!
//! ```
//! use moonpoint_core::angle::{wrap_0_360, wrap_signed_180};
//!
//! assert_eq!(wrap_0_360(-90.0), 270.0);
//! assert_eq!(wrap_signed_180(190.0), -170.0);
//! assert_eq!(wrap_signed_180(-180.0), 180.0);
//! assert_eq!(wrap_signed_180(180.0), 180.0);
//! ```

use crate::constants::{FULL_TURN_DEGREES, HALF_PI, HALF_TURN_DEGREES, PI, TWOPI};
use crate::math::fmod;

/// Wraps radians to [-π, π).
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w >= PI {
        w - TWOPI
    } else if w < -PI {
        w + TWOPI
    } else {
        w
    }
}

/// Wraps radians to [0, 2π).
///
/// Astronomical azimuth, right ascension and sidereal time all live in this range.
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        w + TWOPI
    } else {
        w
    }
}

/// Clamps radians to [-π/2, π/2].
///
/// Used on altitudes after refraction is added, where rounding could otherwise
/// carry a near-zenith value a hair past 90°.
#[inline]
pub fn clamp_dec(x: f64) -> f64 {
    x.clamp(-HALF_PI, HALF_PI)
}

/// Wraps degrees to [0, 360).
#[inline]
pub fn wrap_0_360(deg: f64) -> f64 {
    let w = fmod(deg, FULL_TURN_DEGREES);
    let w = if w < 0.0 { w + FULL_TURN_DEGREES } else { w };
    // -1e-14 + 360 rounds to 360.0
    if w >= FULL_TURN_DEGREES {
        0.0
    } else {
        w
    }
}

/// Wraps degrees to (-180, 180], with -180 canonicalized to +180.
///
/// Computes `((deg + 180) mod 360) - 180` with the modulo held non-negative, then
/// folds the lower boundary onto the upper one.
#[inline]
pub fn wrap_signed_180(deg: f64) -> f64 {
    let w = wrap_0_360(deg + HALF_TURN_DEGREES) - HALF_TURN_DEGREES;
    if w <= -HALF_TURN_DEGREES {
        HALF_TURN_DEGREES
    } else {
        w
    }
}
