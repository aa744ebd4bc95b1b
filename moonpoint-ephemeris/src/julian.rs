use chrono::{DateTime, TimeZone};
use moonpoint_core::constants::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, MILLIS_PER_DAY_F64, UNIX_EPOCH_JD,
};
use std::fmt;

/// Two-part Julian Date.
///
/// `jd1` carries the whole days and `jd2` the fraction, which keeps sub-second
/// resolution that a single `f64` near 2.46 million would lose.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    /// Julian Date of an instant. The offset of `at` is irrelevant; only the instant counts.
    pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        let days = at.timestamp_millis() as f64 / MILLIS_PER_DAY_F64;
        let whole = days.floor();
        Self::new(UNIX_EPOCH_JD + whole, days - whole)
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }

    pub fn days_since_j2000(&self) -> f64 {
        (self.jd1 - J2000_JD) + self.jd2
    }

    pub fn centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_CENTURY
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_j2000_epoch() {
        let at = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let jd = JulianDate::from_datetime(&at);
        assert_eq!(jd.to_f64(), J2000_JD);
        assert_eq!(jd.days_since_j2000(), 0.0);
    }

    #[test]
    fn test_unix_epoch() {
        let at = Utc.timestamp_opt(0, 0).unwrap();
        let jd = JulianDate::from_datetime(&at);
        assert_eq!(jd.jd1(), UNIX_EPOCH_JD);
        assert_eq!(jd.jd2(), 0.0);
    }

    #[test]
    fn test_fraction_kept_in_jd2() {
        let at = Utc.with_ymd_and_hms(2024, 3, 20, 18, 0, 0).unwrap();
        let jd = JulianDate::from_datetime(&at);
        assert_eq!(jd.jd1(), 2460389.5);
        assert!((jd.jd2() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_offset_does_not_change_instant() {
        let utc = Utc.with_ymd_and_hms(2024, 3, 20, 18, 0, 0).unwrap();
        let edt = utc.with_timezone(&FixedOffset::west_opt(4 * 3600).unwrap());
        assert_eq!(JulianDate::from_datetime(&utc), JulianDate::from_datetime(&edt));
    }

    #[test]
    fn test_before_unix_epoch() {
        let at = Utc.with_ymd_and_hms(1969, 12, 31, 18, 0, 0).unwrap();
        let jd = JulianDate::from_datetime(&at);
        assert_eq!(jd.jd1(), UNIX_EPOCH_JD - 1.0);
        assert!((jd.jd2() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_add_days_and_centuries() {
        let jd = JulianDate::j2000().add_days(DAYS_PER_JULIAN_CENTURY);
        assert_eq!(jd.centuries_since_j2000(), 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(JulianDate::j2000().to_string(), "JD 2451545.000000000");
    }
}
