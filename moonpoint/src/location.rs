use moonpoint_core::{CompassResult, GeoCoordinate};
use std::fmt;

/// Why the positioning subsystem could not produce a fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationFailure {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Other(String),
}

impl LocationFailure {
    /// Parses a failure keyword, case-insensitive. Unknown keywords become `Other`.
    pub fn from_keyword(keyword: &str, message: Option<&str>) -> Self {
        match keyword.to_uppercase().as_str() {
            "DENIED" | "PERMISSION" | "PERMISSIONDENIED" => LocationFailure::PermissionDenied,
            "UNAVAILABLE" | "POSITIONUNAVAILABLE" => LocationFailure::PositionUnavailable,
            "TIMEOUT" => LocationFailure::Timeout,
            _ => LocationFailure::Other(match message {
                Some(m) => format!("{} {}", keyword, m),
                None => keyword.to_string(),
            }),
        }
    }
}

impl fmt::Display for LocationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationFailure::PermissionDenied => write!(f, "location permission denied"),
            LocationFailure::PositionUnavailable => write!(f, "position unavailable"),
            LocationFailure::Timeout => write!(f, "location request timed out"),
            LocationFailure::Other(message) => write!(f, "location error: {}", message),
        }
    }
}

/// Outcome of one location request.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationUpdate {
    Fix(GeoCoordinate),
    Unavailable(LocationFailure),
}

impl LocationUpdate {
    pub fn fix(latitude: f64, longitude: f64) -> CompassResult<Self> {
        Ok(LocationUpdate::Fix(GeoCoordinate::new(latitude, longitude)?))
    }

    pub fn coordinate(&self) -> Option<&GeoCoordinate> {
        match self {
            LocationUpdate::Fix(c) => Some(c),
            LocationUpdate::Unavailable(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(
            LocationFailure::from_keyword("denied", None),
            LocationFailure::PermissionDenied
        );
        assert_eq!(
            LocationFailure::from_keyword("TIMEOUT", Some("ignored")),
            LocationFailure::Timeout
        );
        assert_eq!(
            LocationFailure::from_keyword("gps", Some("cold start")),
            LocationFailure::Other("gps cold start".to_string())
        );
    }

    #[test]
    fn test_fix_validates() {
        assert!(LocationUpdate::fix(38.9, -77.0).unwrap().coordinate().is_some());
        assert!(LocationUpdate::fix(38.9, -181.0).is_err());
        let lost = LocationUpdate::Unavailable(LocationFailure::Timeout);
        assert!(lost.coordinate().is_none());
    }
}
