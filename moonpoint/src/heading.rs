//! Where the device is pointing.
//!
//! Heading reaches the pipeline from two places: the orientation sensor and a manual
//! override for devices without one. Both sit behind [`HeadingSource`], and
//! [`HeadingInput`] picks between them so the controller only ever sees a
//! [`HeadingSample`].
//!
//! ```text
//! ┌───────────────┐   ┌───────────────┐
//! │ SensorHeading │   │ ManualHeading │
//! │ (live stream) │   │ (0..=359 knob)│
//! └───────┬───────┘   └───────┬───────┘
//!         └─────────┬─────────┘
//!                   ▼
//!          ┌─────────────────┐
//!          │  HeadingInput   │  override wins while engaged
//!          └────────┬────────┘
//!                   ▼ current() -> Option<HeadingSample>
//! ```

use moonpoint_core::angle::{validate_finite, wrap_0_360};
use moonpoint_core::{CompassError, CompassResult, ViolationKind};
use std::fmt;

/// Device heading in degrees, clockwise from north, in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HeadingSample(f64);

impl HeadingSample {
    /// Normalizes any finite reading into [0, 360).
    pub fn new(degrees: f64) -> CompassResult<Self> {
        let degrees = validate_finite(degrees, "HeadingSample::new", "heading")?;
        Ok(Self(wrap_0_360(degrees)))
    }

    pub fn degrees(self) -> f64 {
        self.0
    }
}

impl fmt::Display for HeadingSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingSourceKind {
    Sensor,
    Manual,
}

impl fmt::Display for HeadingSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadingSourceKind::Sensor => write!(f, "sensor"),
            HeadingSourceKind::Manual => write!(f, "manual"),
        }
    }
}

/// Anything that can say which way the device faces.
pub trait HeadingSource {
    /// Latest heading, or `None` before the first reading.
    fn current(&self) -> Option<HeadingSample>;

    fn kind(&self) -> HeadingSourceKind;
}

/// Latest reading from the orientation sensor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorHeading {
    latest: Option<HeadingSample>,
}

impl SensorHeading {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, sample: HeadingSample) {
        self.latest = Some(sample);
    }
}

impl HeadingSource for SensorHeading {
    fn current(&self) -> Option<HeadingSample> {
        self.latest
    }

    fn kind(&self) -> HeadingSourceKind {
        HeadingSourceKind::Sensor
    }
}

/// Slider-style override in whole degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualHeading {
    degrees: u16,
}

impl ManualHeading {
    pub const MAX_DEGREES: u16 = 359;

    pub fn new(degrees: u16) -> CompassResult<Self> {
        if degrees > Self::MAX_DEGREES {
            return Err(CompassError::invalid_angle(
                "ManualHeading::new",
                ViolationKind::OutOfRange,
                &format!("manual heading {}° outside 0..=359", degrees),
            ));
        }
        Ok(Self { degrees })
    }

    pub fn degrees(&self) -> u16 {
        self.degrees
    }
}

impl HeadingSource for ManualHeading {
    fn current(&self) -> Option<HeadingSample> {
        Some(HeadingSample(f64::from(self.degrees)))
    }

    fn kind(&self) -> HeadingSourceKind {
        HeadingSourceKind::Manual
    }
}

/// Sensor stream plus an optional override.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeadingInput {
    sensor: SensorHeading,
    manual: Option<ManualHeading>,
}

impl HeadingInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a sensor reading. It only becomes current once no override is engaged.
    pub fn record_sensor(&mut self, sample: HeadingSample) {
        self.sensor.record(sample);
    }

    pub fn engage(&mut self, manual: ManualHeading) {
        self.manual = Some(manual);
    }

    pub fn release(&mut self) {
        self.manual = None;
    }

    pub fn is_overridden(&self) -> bool {
        self.manual.is_some()
    }

    pub fn sensor(&self) -> &SensorHeading {
        &self.sensor
    }

    pub fn manual(&self) -> Option<&ManualHeading> {
        self.manual.as_ref()
    }

    fn active(&self) -> &dyn HeadingSource {
        match &self.manual {
            Some(manual) => manual as &dyn HeadingSource,
            None => &self.sensor,
        }
    }
}

impl HeadingSource for HeadingInput {
    fn current(&self) -> Option<HeadingSample> {
        self.active().current()
    }

    fn kind(&self) -> HeadingSourceKind {
        self.active().kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_normalizes() {
        assert_eq!(HeadingSample::new(370.0).unwrap().degrees(), 10.0);
        assert_eq!(HeadingSample::new(-90.0).unwrap().degrees(), 270.0);
        assert_eq!(HeadingSample::new(360.0).unwrap().degrees(), 0.0);
        assert!(HeadingSample::new(f64::NAN).is_err());
    }

    #[test]
    fn test_manual_range() {
        assert_eq!(ManualHeading::new(0).unwrap().degrees(), 0);
        assert_eq!(ManualHeading::new(359).unwrap().degrees(), 359);
        let err = ManualHeading::new(360).unwrap_err();
        assert_eq!(err.kind(), Some(ViolationKind::OutOfRange));
    }

    #[test]
    fn test_sensor_empty_until_first_reading() {
        let mut sensor = SensorHeading::new();
        assert!(sensor.current().is_none());
        sensor.record(HeadingSample::new(42.0).unwrap());
        assert_eq!(sensor.current().map(HeadingSample::degrees), Some(42.0));
        assert_eq!(sensor.kind(), HeadingSourceKind::Sensor);
    }

    #[test]
    fn test_override_replaces_sensor() {
        let mut input = HeadingInput::new();
        input.record_sensor(HeadingSample::new(90.0).unwrap());
        assert_eq!(input.current().map(HeadingSample::degrees), Some(90.0));

        input.engage(ManualHeading::new(200).unwrap());
        input.record_sensor(HeadingSample::new(95.0).unwrap());
        assert_eq!(input.current().map(HeadingSample::degrees), Some(200.0));
        assert_eq!(input.kind(), HeadingSourceKind::Manual);

        input.release();
        assert_eq!(input.current().map(HeadingSample::degrees), Some(95.0));
        assert_eq!(input.kind(), HeadingSourceKind::Sensor);
    }

    #[test]
    fn test_override_without_sensor() {
        let mut input = HeadingInput::new();
        assert!(input.current().is_none());
        input.engage(ManualHeading::new(0).unwrap());
        assert_eq!(input.current().map(HeadingSample::degrees), Some(0.0));
        input.release();
        assert!(input.current().is_none());
    }
}
