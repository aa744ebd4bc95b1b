//! Error types for the bearing pipeline.
//!
//! The pipeline only fails on contract violations from upstream collaborators:
//! a coordinate or angle that is not finite or lies outside its valid range.
//! A value that simply has not arrived yet is not an error; callers model that
//! with `Option` and skip the computation.
//!
//! | Variant | Raised by | Typical cause |
//! |---------|-----------|---------------|
//! | [`InvalidCoordinate`](CompassError::InvalidCoordinate) | coordinate construction, ephemeris | NaN latitude, longitude 200° |
//! | [`InvalidAngle`](CompassError::InvalidAngle) | heading samples, bearing reconciliation | infinite azimuth, NaN heading |
//! | [`InvalidTime`](CompassError::InvalidTime) | rise/set search | local midnight not representable |
//!
//! None of the variants is recoverable by retrying: the same input fails the same way.
//!
//! ```
//! use moonpoint_core::{CompassError, ViolationKind};
//!
//! let err = CompassError::invalid_angle("compute_rotation", ViolationKind::NotFinite, "heading is NaN");
//! assert_eq!(err.kind(), Some(ViolationKind::NotFinite));
//! assert!(err.to_string().contains("compute_rotation"));
//! ```

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How an input violated its contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ViolationKind {
    /// Value is NaN or infinite.
    NotFinite,
    /// Value is finite but outside its domain (e.g., latitude > 90°).
    OutOfRange,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CompassError {
    /// Observer latitude/longitude is non-finite or out of range.
    #[error("Invalid coordinate in {operation} ({kind:?}): {message}")]
    InvalidCoordinate {
        operation: String,
        kind: ViolationKind,
        message: String,
    },

    /// Heading or azimuth is non-finite or out of range.
    #[error("Invalid angle in {operation} ({kind:?}): {message}")]
    InvalidAngle {
        operation: String,
        kind: ViolationKind,
        message: String,
    },

    /// An instant or day boundary could not be represented.
    #[error("Invalid time in {context}: {message}")]
    InvalidTime { context: String, message: String },
}

pub type CompassResult<T> = Result<T, CompassError>;

impl CompassError {
    pub fn invalid_coordinate(operation: &str, kind: ViolationKind, reason: &str) -> Self {
        Self::InvalidCoordinate {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    pub fn invalid_angle(operation: &str, kind: ViolationKind, reason: &str) -> Self {
        Self::InvalidAngle {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    pub fn invalid_time(context: &str, reason: &str) -> Self {
        Self::InvalidTime {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }

    /// The violation behind a coordinate or angle error; `None` for time errors.
    pub fn kind(&self) -> Option<ViolationKind> {
        match self {
            Self::InvalidCoordinate { kind, .. } | Self::InvalidAngle { kind, .. } => Some(*kind),
            Self::InvalidTime { .. } => None,
        }
    }
}
