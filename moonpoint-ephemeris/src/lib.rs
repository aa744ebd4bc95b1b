//! Topocentric lunar ephemeris.
//!
//! Given an instant and an observer, this crate answers two questions: where is the Moon
//! in the observer's sky right now, and when does it rise and set today.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`julian`] | Two-part Julian dates from `chrono` instants |
//! | [`sidereal`] | Earth rotation angle, GMST and local sidereal time |
//! | [`lunar`] | Geocentric right ascension, declination and distance |
//! | [`horizontal`] | Equatorial → horizontal, parallax, refraction |
//! | [`visibility`] | Parabolic rise/set search over one local day |
//!
//! # Pipeline
//!
//! ```text
//! DateTime ─► JulianDate ─┬─► lunar series ─► (α, δ, Δ)
//!                         └─► GMST + λ ──────► LST
//!                                               │
//!                     H = LST − α ◄─────────────┘
//!                          │
//!               equatorial_to_horizontal(H, δ, φ)
//!                          │
//!           parallax ─► refraction ─► MoonPosition (azimuth 0 = south)
//! ```
//!
//! # Accuracy
//!
//! The lunar series keeps only the principal terms, and UTC stands in for UT1 and TT.
//! Positions are good to a few tenths of a degree, rise and set to a couple of minutes.
//! That is well below the noise of a handheld compass.
//!
//! ```
//! use chrono::DateTime;
//! use moonpoint_ephemeris::{compute_position, compute_visibility};
//!
//! let at = DateTime::parse_from_rfc3339("2024-03-20T14:00:00-04:00").unwrap();
//! let pos = compute_position(&at, 38.9, -77.0)?;
//! assert!(pos.altitude.radians().abs() <= std::f64::consts::FRAC_PI_2);
//!
//! let window = compute_visibility(&at, 38.9, -77.0)?;
//! assert!(window.rise.is_some() || window.set.is_some() || window.always_up || window.always_down());
//! # Ok::<(), moonpoint_core::CompassError>(())
//! ```

mod engine;
pub mod horizontal;
pub mod julian;
pub mod lunar;
mod options;
mod position;
pub mod sidereal;
pub mod visibility;

pub use engine::{compute_position, compute_visibility, Ephemeris};
pub use julian::JulianDate;
pub use options::EphemerisOptions;
pub use position::MoonPosition;
pub use visibility::VisibilityWindow;
