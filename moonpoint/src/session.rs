use crate::bearing::compass_bearing;
use crate::clock::{Clock, SystemClock};
use crate::controller::{Controller, Transition};
use crate::error::Result;
use crate::heading::{HeadingInput, HeadingSample, HeadingSource, ManualHeading};
use crate::location::LocationUpdate;
use log::debug;
use moonpoint_ephemeris::EphemerisOptions;

/// Interactive state: the controller plus the heading inputs that feed it.
pub struct Session {
    pub controller: Controller<Box<dyn Clock>>,
    pub heading: HeadingInput,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self::with_options(clock, EphemerisOptions::default())
    }

    pub fn with_options(clock: impl Clock + 'static, options: EphemerisOptions) -> Self {
        Self {
            controller: Controller::with_options(Box::new(clock), options),
            heading: HeadingInput::new(),
        }
    }

    pub fn locate(&mut self, update: LocationUpdate) -> Result<Transition> {
        Ok(self.controller.on_location(update)?)
    }

    /// Feeds a sensor reading. Returns `None` while an override hides the sensor.
    pub fn sensor_heading(&mut self, sample: HeadingSample) -> Result<Option<Transition>> {
        self.heading.record_sensor(sample);
        if self.heading.is_overridden() {
            debug!("sensor heading {} ignored under manual override", sample);
            return Ok(None);
        }
        Ok(Some(self.controller.on_heading(sample)?))
    }

    pub fn simulate(&mut self, manual: ManualHeading) -> Result<Option<Transition>> {
        self.heading.engage(manual);
        self.push_current_heading()
    }

    /// Drops the override and falls back to the last sensor reading, if any.
    pub fn stop_simulation(&mut self) -> Result<Option<Transition>> {
        self.heading.release();
        self.push_current_heading()
    }

    fn push_current_heading(&mut self) -> Result<Option<Transition>> {
        match self.heading.current() {
            Some(sample) => Ok(Some(self.controller.on_heading(sample)?)),
            None => Ok(None),
        }
    }

    pub fn refresh(&mut self) -> Result<Transition> {
        Ok(self.controller.refresh_visibility()?)
    }

    /// Compass bearing of the Moon, once a position is known.
    pub fn moon_bearing(&self) -> Result<Option<f64>> {
        match &self.controller.state().position {
            Some(position) => Ok(Some(compass_bearing(position.azimuth.radians())?)),
            None => Ok(None),
        }
    }
}
