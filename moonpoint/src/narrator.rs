//! Visibility window → one of four plain-language messages.

use chrono::{DateTime, FixedOffset};
use moonpoint_ephemeris::VisibilityWindow;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityNarrative {
    /// Rises and sets within the day.
    FullWindow {
        rise: DateTime<FixedOffset>,
        set: DateTime<FixedOffset>,
    },
    /// Rises and is still up at the end of the day.
    RiseOnly { rise: DateTime<FixedOffset> },
    /// Already up at the start of the day, then sets.
    SetOnly { set: DateTime<FixedOffset> },
    NotVisible,
}

pub fn describe(window: &VisibilityWindow) -> VisibilityNarrative {
    match (window.rise, window.set) {
        (Some(rise), Some(set)) => VisibilityNarrative::FullWindow { rise, set },
        (Some(rise), None) => VisibilityNarrative::RiseOnly { rise },
        (None, Some(set)) => VisibilityNarrative::SetOnly { set },
        (None, None) => VisibilityNarrative::NotVisible,
    }
}

fn clock_time(t: &DateTime<FixedOffset>) -> String {
    t.format("%H:%M").to_string()
}

impl fmt::Display for VisibilityNarrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisibilityNarrative::FullWindow { rise, set } => write!(
                f,
                "The Moon is visible from {} to {}",
                clock_time(rise),
                clock_time(set)
            ),
            VisibilityNarrative::RiseOnly { rise } => {
                write!(f, "The Moon is visible starting at {}", clock_time(rise))
            }
            VisibilityNarrative::SetOnly { set } => {
                write!(f, "The Moon is visible now through {}", clock_time(set))
            }
            VisibilityNarrative::NotVisible => write!(f, "The Moon is not visible today"),
        }
    }
}
