//! Daily rise/set search.
//!
//! The day is cut into segments of `step` hours. Each segment is sampled at its start,
//! middle and end, a [`Parabola`] is fitted through the three samples of the
//! horizon function, and its zero crossings inside the segment become rise or set
//! events: a crossing with positive slope is a rise, negative slope a set. A positive horizon function means the upper limb is above the horizon.

use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use moonpoint_core::constants::HOURS_PER_DAY;
use moonpoint_core::math::{Parabola, UnitRoots};
use moonpoint_core::{CompassError, CompassResult};

/// Moon rise and set for one local day.
///
/// `rise == None` with a `set` means the Moon was already up at the start of the day;
/// `set == None` with a `rise` means it is still up at the end. When both are `None`,
/// `always_up` tells the two remaining cases apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityWindow {
    pub rise: Option<DateTime<FixedOffset>>,
    pub set: Option<DateTime<FixedOffset>>,
    pub always_up: bool,
}

impl VisibilityWindow {
    /// True if neither a rise nor a set happens during the day.
    pub fn has_no_events(&self) -> bool {
        self.rise.is_none() && self.set.is_none()
    }

    pub fn always_down(&self) -> bool {
        self.has_no_events() && !self.always_up
    }
}

/// Midnight that opens the calendar day of `at`, in the offset of `at`.
pub fn local_midnight(at: &DateTime<FixedOffset>) -> CompassResult<DateTime<FixedOffset>> {
    let naive = at
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| CompassError::invalid_time("local_midnight", "no midnight on this date"))?;

    at.offset()
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| {
            CompassError::invalid_time("local_midnight", "midnight is not a single instant")
        })
}

const BOUNDARY_TOLERANCE_HOURS: f64 = 1e-6;

fn hours_after(start: &DateTime<FixedOffset>, hours: f64) -> DateTime<FixedOffset> {
    *start + Duration::milliseconds(libm::round(hours * 3_600_000.0) as i64)
}

/// Scans the 24 hours after `start` for horizon crossings of `horizon`.
///
/// `horizon` is evaluated at the segment boundaries and midpoints. The scan stops as
/// soon as both a rise and a set have been seen.
pub fn search_day<F>(
    start: DateTime<FixedOffset>,
    step_hours: f64,
    mut horizon: F,
) -> CompassResult<VisibilityWindow>
where
    F: FnMut(DateTime<FixedOffset>) -> CompassResult<f64>,
{
    if !step_hours.is_finite() || step_hours <= 0.0 || step_hours > HOURS_PER_DAY {
        return Err(CompassError::invalid_time(
            "search_day",
            "search step must be within (0, 24] hours",
        ));
    }

    let half = step_hours / 2.0;
    let initial = horizon(start)?;

    let mut rise: Option<f64> = None;
    let mut set: Option<f64> = None;
    let mut h0 = initial;
    let mut center = half;
    let mut last_event: Option<f64> = None;

    while center - half < HOURS_PER_DAY {
        let h1 = horizon(hours_after(&start, center))?;
        let h2 = horizon(hours_after(&start, center + half))?;
        let fit = Parabola::through(h0, h1, h2);

        let roots = match fit.roots_in_unit_interval() {
            UnitRoots::None => [None, None],
            UnitRoots::One(x) => [Some(x), None],
            UnitRoots::Two(x1, x2) => [Some(x1), Some(x2)],
        };

        for x in roots.into_iter().flatten() {
            let hour = center + x * half;
            // A root on the shared boundary was already reported by the previous segment.
            if last_event.is_some_and(|prev| (hour - prev).abs() < BOUNDARY_TOLERANCE_HOURS) {
                continue;
            }
            let slope = fit.slope(x);
            if slope > 0.0 {
                rise = Some(hour);
            } else if slope < 0.0 {
                set = Some(hour);
            } else {
                continue;
            }
            last_event = Some(hour);
        }

        if rise.is_some() && set.is_some() {
            break;
        }
        h0 = h2;
        center += step_hours;
    }

    let within_day = |hour: f64| (0.0..=HOURS_PER_DAY).contains(&hour);
    let rise = rise.filter(|h| within_day(*h));
    let set = set.filter(|h| within_day(*h));

    Ok(VisibilityWindow {
        rise: rise.map(|h| hours_after(&start, h)),
        set: set.map(|h| hours_after(&start, h)),
        always_up: rise.is_none() && set.is_none() && initial > 0.0,
    })
}
