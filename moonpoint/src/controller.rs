//! Recomputation controller.
//!
//! Three inputs feed two derived values:
//!
//! ```text
//! location ──► coordinate ──┬─► position ──┐
//!                           └─► visibility  ├─► rotation
//! heading ─────────────────────────────────┘
//! refresh ──► visibility
//! ```
//!
//! Every transition recomputes its outputs from the current inputs. A transition whose
//! prerequisite is missing is a no-op reported as [`Transition::Idle`], never an error.
//! Errors only come from malformed input, and they leave the state untouched.

use crate::bearing::{compute_rotation, RotationAngle};
use crate::clock::Clock;
use crate::heading::HeadingSample;
use crate::location::{LocationFailure, LocationUpdate};
use chrono::{DateTime, FixedOffset};
use log::{debug, info, warn};
use moonpoint_core::{CompassError, CompassResult, GeoCoordinate};
use moonpoint_ephemeris::{Ephemeris, EphemerisOptions, MoonPosition, VisibilityWindow};
use std::fmt;

/// Upstream change delivered to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Location(LocationUpdate),
    Heading(HeadingSample),
    RefreshVisibility,
}

/// Prerequisite whose absence turned a transition into a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Location,
    Position,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::Location => write!(f, "no location yet"),
            Missing::Position => write!(f, "no moon position yet"),
        }
    }
}

/// What a transition recomputed.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// New fix: position and visibility replaced; rotation replaced if a heading is known.
    Located {
        position: MoonPosition,
        visibility: VisibilityWindow,
        rotation: Option<RotationAngle>,
    },
    /// Fix lost: coordinate, position, visibility and rotation cleared.
    LocationLost(LocationFailure),
    /// New heading against a known position.
    Rotated(RotationAngle),
    VisibilityRefreshed(VisibilityWindow),
    Idle(Missing),
}

/// Everything the controller knows, inputs and derived values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineState {
    pub coordinate: Option<GeoCoordinate>,
    pub heading: Option<HeadingSample>,
    pub position: Option<MoonPosition>,
    pub visibility: Option<VisibilityWindow>,
    pub rotation: Option<RotationAngle>,
}

pub struct Controller<C: Clock> {
    clock: C,
    options: EphemerisOptions,
    state: PipelineState,
}

impl<C: Clock> Controller<C> {
    pub fn new(clock: C) -> Self {
        Self::with_options(clock, EphemerisOptions::default())
    }

    pub fn with_options(clock: C, options: EphemerisOptions) -> Self {
        Self {
            clock,
            options,
            state: PipelineState::default(),
        }
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn rotation(&self) -> Option<RotationAngle> {
        self.state.rotation
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn options(&self) -> &EphemerisOptions {
        &self.options
    }

    /// Changes the ephemeris options. Derived values refresh on the next location.
    pub fn set_options(&mut self, options: EphemerisOptions) {
        self.options = options;
    }

    pub fn apply(&mut self, event: Event) -> CompassResult<Transition> {
        match event {
            Event::Location(update) => self.on_location(update),
            Event::Heading(sample) => self.on_heading(sample),
            Event::RefreshVisibility => self.refresh_visibility(),
        }
    }

    pub fn on_location(&mut self, update: LocationUpdate) -> CompassResult<Transition> {
        let coordinate = match update {
            LocationUpdate::Fix(coordinate) => coordinate,
            LocationUpdate::Unavailable(failure) => {
                warn!("location unavailable: {}", failure);
                self.state.coordinate = None;
                self.state.position = None;
                self.state.visibility = None;
                self.state.rotation = None;
                return Ok(Transition::LocationLost(failure));
            }
        };

        let now = self.clock.now();
        let (position, visibility, rotation) = self
            .recompute(coordinate, &now)
            .map_err(|err| rejected("location", err))?;

        info!("location {} at {}: {}", coordinate, now, position);
        self.state.coordinate = Some(coordinate);
        self.state.position = Some(position);
        self.state.visibility = Some(visibility);
        self.state.rotation = rotation;

        Ok(Transition::Located {
            position,
            visibility,
            rotation,
        })
    }

    pub fn on_heading(&mut self, sample: HeadingSample) -> CompassResult<Transition> {
        let Some(position) = self.state.position else {
            self.state.heading = Some(sample);
            debug!("heading {} stored, waiting for a position", sample);
            return Ok(Transition::Idle(Missing::Position));
        };

        let rotation = compute_rotation(position.azimuth.radians(), sample.degrees())
            .map_err(|err| rejected("heading", err))?;
        self.state.heading = Some(sample);
        self.state.rotation = Some(rotation);
        debug!("heading {} -> rotation {}", sample, rotation);
        Ok(Transition::Rotated(rotation))
    }

    /// Recomputes today's window for the current coordinate, leaving the position alone.
    pub fn refresh_visibility(&mut self) -> CompassResult<Transition> {
        let Some(coordinate) = self.state.coordinate else {
            debug!("visibility refresh skipped: no location");
            return Ok(Transition::Idle(Missing::Location));
        };

        let now = self.clock.now();
        let visibility = Ephemeris::with_options(coordinate, self.options)
            .visibility_on(&now)
            .map_err(|err| rejected("visibility refresh", err))?;
        info!(
            "visibility for {} refreshed: rise {:?} set {:?}",
            now.date_naive(),
            visibility.rise,
            visibility.set
        );
        self.state.visibility = Some(visibility);
        Ok(Transition::VisibilityRefreshed(visibility))
    }

    fn recompute(
        &self,
        coordinate: GeoCoordinate,
        now: &DateTime<FixedOffset>,
    ) -> CompassResult<(MoonPosition, VisibilityWindow, Option<RotationAngle>)> {
        let ephemeris = Ephemeris::with_options(coordinate, self.options);
        let position = ephemeris.position_at(now)?;
        let visibility = ephemeris.visibility_on(now)?;
        let rotation = match self.state.heading {
            Some(heading) => Some(compute_rotation(
                position.azimuth.radians(),
                heading.degrees(),
            )?),
            None => None,
        };
        Ok((position, visibility, rotation))
    }
}

fn rejected(input: &str, err: CompassError) -> CompassError {
    warn!("{} rejected: {}", input, err);
    err
}
