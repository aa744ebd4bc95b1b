//! Numeric foundation for the moonpoint bearing pipeline.
//!
//! `moonpoint-core` holds the small set of types every other crate in the workspace
//! agrees on: a radians-backed [`Angle`], the normalization rules for the angular
//! ranges the pipeline uses, a validated observer [`GeoCoordinate`], and the
//! [`CompassError`] taxonomy.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] type, wrapping/clamping, finiteness and range validation |
//! | [`location`] | [`GeoCoordinate`] observer position in degrees |
//! | [`constants`] | Epochs, unit conversions, lunar and terrestrial radii |
//! | [`errors`] | [`CompassError`] and [`CompassResult`] |
//! | [`math`] | `fmod` and the three-point parabola used by the rise/set search |
//!
//! # Conventions
//!
//! - **Radians internally**: trigonometry works on radians, so [`Angle`] stores radians.
//!   Degree values only appear at the edges (coordinates, headings, rotations).
//! - **Fail fast**: non-finite or out-of-range input produces an error instead of a
//!   clamped or defaulted value. A wrong but plausible bearing is worse than no bearing.
//!
//! ```
//! use moonpoint_core::{Angle, GeoCoordinate};
//! use moonpoint_core::angle::wrap_signed_180;
//!
//! let washington = GeoCoordinate::new(38.9, -77.0)?;
//! assert!((washington.latitude_angle().degrees() - 38.9).abs() < 1e-12);
//!
//! // 350° relative to 10° is a 20° swing counter-clockwise, not 340° clockwise.
//! assert!((wrap_signed_180(350.0 - 10.0) - (-20.0)).abs() < 1e-12);
//!
//! let half_turn = Angle::PI;
//! assert_eq!(half_turn.degrees(), 180.0);
//! # Ok::<(), moonpoint_core::CompassError>(())
//! ```

pub mod angle;
pub mod constants;
pub mod errors;
pub mod location;
pub mod math;

pub use angle::Angle;
pub use errors::{CompassError, CompassResult, ViolationKind};
pub use location::GeoCoordinate;
