//! Angle type, normalization and validation.
//!
//! | Quantity | Unit | Range | Function |
//! |----------|------|-------|----------|
//! | Right ascension, sidereal time, astronomical azimuth | rad | [0, 2π) | [`wrap_0_2pi`] |
//! | Hour angle | rad | [-π, π) | [`wrap_pm_pi`] |
//! | Declination, altitude | rad | [-π/2, π/2] | [`clamp_dec`] |
//! | Compass bearing, heading | deg | [0, 360) | [`wrap_0_360`] |
//! | Pointer rotation | deg | (-180, 180] | [`wrap_signed_180`] |

mod core;
mod normalize;
mod ops;
mod validate;

pub use self::core::Angle;
pub use normalize::{clamp_dec, wrap_0_2pi, wrap_0_360, wrap_pm_pi, wrap_signed_180};
pub use validate::{validate_finite, validate_latitude_degrees, validate_longitude_degrees};
