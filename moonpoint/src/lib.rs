//! Moon bearing reconciliation.
//!
//! Turns a location, a device heading and the clock into the rotation that points an
//! on-screen arrow at the Moon, plus a one-line description of today's visibility.
//!
//! | Module | Role |
//! |--------|------|
//! | [`bearing`] | Azimuth + heading → signed rotation |
//! | [`narrator`] | Rise/set window → visibility message |
//! | [`controller`] | State machine deciding what to recompute on each input |
//! | [`heading`], [`location`], [`clock`] | Inputs from the host device |
//! | [`session`], [`commands`] | Interactive shell driving the controller |
//!
//! ```
//! use chrono::DateTime;
//! use moonpoint::clock::FixedClock;
//! use moonpoint::controller::Controller;
//! use moonpoint::heading::HeadingSample;
//! use moonpoint::location::LocationUpdate;
//!
//! let now = DateTime::parse_from_rfc3339("2024-03-20T14:00:00-04:00").unwrap();
//! let mut controller = Controller::new(FixedClock::new(now));
//!
//! controller.on_heading(HeadingSample::new(90.0)?)?;
//! assert!(controller.rotation().is_none());
//!
//! controller.on_location(LocationUpdate::fix(38.9, -77.0)?)?;
//! let rotation = controller.rotation().unwrap();
//! assert!(rotation.degrees() > -180.0 && rotation.degrees() <= 180.0);
//! # Ok::<(), moonpoint_core::CompassError>(())
//! ```

pub mod bearing;
pub mod clock;
pub mod commands;
pub mod controller;
pub mod error;
pub mod heading;
pub mod location;
pub mod narrator;
pub mod session;

pub use error::{Error, Result};
