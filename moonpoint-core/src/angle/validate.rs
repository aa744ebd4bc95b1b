use crate::{CompassError, CompassResult, ViolationKind};

/// Rejects NaN and infinite angles. `operation` names the caller in the error.
pub fn validate_finite(value: f64, operation: &str, what: &str) -> CompassResult<f64> {
    if value.is_finite() {
        return Ok(value);
    }

    Err(CompassError::invalid_angle(
        operation,
        ViolationKind::NotFinite,
        &format!("{} is not finite ({})", what, value),
    ))
}

pub fn validate_latitude_degrees(latitude: f64, operation: &str) -> CompassResult<f64> {
    if !latitude.is_finite() {
        return Err(CompassError::invalid_coordinate(
            operation,
            ViolationKind::NotFinite,
            "Latitude must be finite",
        ));
    }

    if (-90.0..=90.0).contains(&latitude) {
        return Ok(latitude);
    }

    Err(CompassError::invalid_coordinate(
        operation,
        ViolationKind::OutOfRange,
        &format!("Latitude {}° outside [-90°, 90°]", latitude),
    ))
}

pub fn validate_longitude_degrees(longitude: f64, operation: &str) -> CompassResult<f64> {
    if !longitude.is_finite() {
        return Err(CompassError::invalid_coordinate(
            operation,
            ViolationKind::NotFinite,
            "Longitude must be finite",
        ));
    }

    if (-180.0..=180.0).contains(&longitude) {
        return Ok(longitude);
    }

    Err(CompassError::invalid_coordinate(
        operation,
        ViolationKind::OutOfRange,
        &format!("Longitude {}° outside [-180°, 180°]", longitude),
    ))
}
