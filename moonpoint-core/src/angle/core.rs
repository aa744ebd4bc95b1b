//! Core angle type.
//!
//! [`Angle`] stores radians because every trigonometric call in the ephemeris wants
//! radians. Degrees are available at the edges through [`Angle::from_degrees`] and
//! [`Angle::degrees`].
//!
//! ```
//! use moonpoint_core::Angle;
//!
//! let a = Angle::from_degrees(90.0);
//! assert!((a.radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//!
//! let (sin, cos) = a.sin_cos();
//! assert!((sin - 1.0).abs() < 1e-15 && cos.abs() < 1e-15);
//! ```

use super::normalize::{wrap_0_2pi, wrap_pm_pi};
use crate::constants::{HALF_PI, PI};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An angular measurement stored as radians.
///
/// `Eq` and `Ord` are not implemented because the payload can be NaN.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub const ZERO: Self = Self { rad: 0.0 };

    pub const PI: Self = Self { rad: PI };

    pub const HALF_PI: Self = Self { rad: HALF_PI };

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Creates an angle from arcminutes (1/60 degree).
    #[inline]
    pub fn from_arcminutes(arcmin: f64) -> Self {
        Self::from_degrees(arcmin / 60.0)
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    /// Hours of right ascension or sidereal time (15° per hour).
    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / 15.0
    }

    #[inline]
    pub fn sin(self) -> f64 {
        libm::sin(self.rad)
    }

    #[inline]
    pub fn cos(self) -> f64 {
        libm::cos(self.rad)
    }

    /// Sine and cosine in one call.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        libm::sincos(self.rad)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }

    /// Same direction, wrapped to [0, 2π).
    #[inline]
    pub fn normalized(self) -> Self {
        Self::from_radians(wrap_0_2pi(self.rad))
    }

    /// Same direction, wrapped to [-π, π).
    #[inline]
    pub fn wrapped(self) -> Self {
        Self::from_radians(wrap_pm_pi(self.rad))
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}°", p, self.degrees()),
            None => write!(f, "{:.4}°", self.degrees()),
        }
    }
}
