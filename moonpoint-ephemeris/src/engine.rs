use crate::horizontal::{
    apparent_altitude, apply_diurnal_parallax, equatorial_to_horizontal, parallactic_angle,
    south_based_azimuth,
};
use crate::lunar::{moon_equatorial, LunarEquatorial};
use crate::sidereal::local_sidereal_time;
use crate::visibility::{local_midnight, search_day};
use crate::{EphemerisOptions, JulianDate, MoonPosition, VisibilityWindow};
use chrono::{DateTime, FixedOffset, TimeZone};
use log::debug;
use moonpoint_core::angle::{clamp_dec, validate_latitude_degrees, validate_longitude_degrees};
use moonpoint_core::{Angle, CompassResult, GeoCoordinate};

/// Lunar ephemeris for one observer.
///
/// ```
/// use chrono::DateTime;
/// use moonpoint_core::GeoCoordinate;
/// use moonpoint_ephemeris::Ephemeris;
///
/// let eph = Ephemeris::new(GeoCoordinate::new(38.9, -77.0)?);
/// let at = DateTime::parse_from_rfc3339("2024-03-20T18:00:00Z").unwrap();
/// let pos = eph.position_at(&at)?;
/// assert!((0.0..std::f64::consts::TAU).contains(&pos.azimuth.radians()));
/// # Ok::<(), moonpoint_core::CompassError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ephemeris {
    observer: GeoCoordinate,
    options: EphemerisOptions,
}

/// Intermediate result shared by the position and the horizon function.
struct Topocentric {
    lunar: LunarEquatorial,
    hour_angle: Angle,
    north_azimuth: Angle,
    /// Geometric altitude, with parallax when enabled.
    altitude: Angle,
}

impl Ephemeris {
    pub fn new(observer: GeoCoordinate) -> Self {
        Self::with_options(observer, EphemerisOptions::default())
    }

    pub fn with_options(observer: GeoCoordinate, options: EphemerisOptions) -> Self {
        Self { observer, options }
    }

    pub fn observer(&self) -> &GeoCoordinate {
        &self.observer
    }

    pub fn options(&self) -> &EphemerisOptions {
        &self.options
    }

    fn topocentric(&self, jd: &JulianDate) -> CompassResult<Topocentric> {
        let lunar = moon_equatorial(jd);
        let lst = local_sidereal_time(jd, self.observer.longitude_angle())?;
        let hour_angle = (lst - lunar.right_ascension).wrapped();
        let latitude = self.observer.latitude_angle();

        let horizontal = equatorial_to_horizontal(hour_angle, lunar.declination, latitude);
        let altitude = if self.options.parallax {
            apply_diurnal_parallax(horizontal.altitude, lunar.horizontal_parallax())
        } else {
            horizontal.altitude
        };

        Ok(Topocentric {
            lunar,
            hour_angle,
            north_azimuth: horizontal.azimuth,
            altitude,
        })
    }

    /// Moon position at `at`. Only the instant matters, not its offset.
    pub fn position_at<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> CompassResult<MoonPosition> {
        let jd = JulianDate::from_datetime(at);
        let topo = self.topocentric(&jd)?;

        let altitude = if self.options.refraction {
            apparent_altitude(topo.altitude)
        } else {
            Angle::from_radians(clamp_dec(topo.altitude.radians()))
        };

        let position = MoonPosition {
            azimuth: south_based_azimuth(topo.north_azimuth),
            altitude,
            distance_km: topo.lunar.distance_km,
            parallactic_angle: parallactic_angle(
                topo.hour_angle,
                topo.lunar.declination,
                self.observer.latitude_angle(),
            ),
        };
        debug!("moon position at {} for {}: {}", jd, self.observer, position);
        Ok(position)
    }

    /// Height of the upper limb above the standard horizon, in radians.
    fn horizon_function(&self, at: &DateTime<FixedOffset>) -> CompassResult<f64> {
        let topo = self.topocentric(&JulianDate::from_datetime(at))?;
        let dip = Angle::from_arcminutes(self.options.horizon_refraction_arcmin);
        Ok(topo.altitude.radians() + dip.radians() + topo.lunar.semi_diameter().radians())
    }

    /// Rise and set during the calendar day of `at`, in the offset of `at`.
    pub fn visibility_on(&self, at: &DateTime<FixedOffset>) -> CompassResult<VisibilityWindow> {
        let start = local_midnight(at)?;
        let window = search_day(start, self.options.search_step_hours, |t| {
            self.horizon_function(&t)
        })?;
        debug!(
            "visibility for {} on {}: rise {:?} set {:?} always_up {}",
            self.observer,
            start.date_naive(),
            window.rise,
            window.set,
            window.always_up
        );
        Ok(window)
    }
}

fn observer_from_degrees(latitude: f64, longitude: f64, operation: &str) -> CompassResult<GeoCoordinate> {
    let latitude = validate_latitude_degrees(latitude, operation)?;
    let longitude = validate_longitude_degrees(longitude, operation)?;
    GeoCoordinate::new(latitude, longitude)
}

/// Moon azimuth (0 = south, westward) and altitude for an observer given in degrees.
///
/// # Errors
///
/// `InvalidCoordinate` for non-finite or out-of-range latitude or longitude.
pub fn compute_position<Tz: TimeZone>(
    at: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> CompassResult<MoonPosition> {
    let observer = observer_from_degrees(latitude, longitude, "compute_position")?;
    Ephemeris::new(observer).position_at(at)
}

/// Rise and set during the local calendar day containing `at`.
///
/// # Errors
///
/// `InvalidCoordinate` for bad coordinates; `InvalidTime` when the day boundary
/// cannot be represented.
pub fn compute_visibility(
    at: &DateTime<FixedOffset>,
    latitude: f64,
    longitude: f64,
) -> CompassResult<VisibilityWindow> {
    let observer = observer_from_degrees(latitude, longitude, "compute_visibility")?;
    Ephemeris::new(observer).visibility_on(at)
}
