//! Geocentric lunar coordinates from a truncated analytic series.
//!
//! The principal periodic terms of the lunar theory (Meeus, ch. 47) reproduce the
//! Moon's ecliptic longitude to a few tenths of a degree and its distance to a few
//! hundred kilometers. That is an order of magnitude better than a phone
//! magnetometer, and it needs no tables or files.

use crate::JulianDate;
use moonpoint_core::angle::wrap_0_2pi;
use moonpoint_core::constants::{DEG_TO_RAD, EARTH_EQUATORIAL_RADIUS_KM, MOON_RADIUS_KM};
use moonpoint_core::Angle;

/// Mean-equinox-of-date equatorial position of the Moon's center, seen from Earth's center.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarEquatorial {
    pub right_ascension: Angle,
    pub declination: Angle,
    pub distance_km: f64,
}

impl LunarEquatorial {
    /// Angle subtended by Earth's equatorial radius at the Moon's distance.
    pub fn horizontal_parallax(&self) -> Angle {
        Angle::from_radians(libm::asin(EARTH_EQUATORIAL_RADIUS_KM / self.distance_km))
    }

    /// Apparent angular radius of the lunar disk.
    pub fn semi_diameter(&self) -> Angle {
        Angle::from_radians(libm::asin(MOON_RADIUS_KM / self.distance_km))
    }
}

/// Delaunay-style arguments in radians, wrapped to [0, 2π).
struct FundamentalArguments {
    mean_longitude: f64,
    mean_elongation: f64,
    sun_mean_anomaly: f64,
    moon_mean_anomaly: f64,
    argument_of_latitude: f64,
}

impl FundamentalArguments {
    fn at(t: f64) -> Self {
        let reduce = |deg: f64| wrap_0_2pi(deg * DEG_TO_RAD);
        Self {
            mean_longitude: reduce(218.3164477 + 481267.88123421 * t),
            mean_elongation: reduce(297.8501921 + 445267.1114034 * t),
            sun_mean_anomaly: reduce(357.5291092 + 35999.0502909 * t),
            moon_mean_anomaly: reduce(134.9633964 + 477198.8675055 * t),
            argument_of_latitude: reduce(93.272095 + 483202.0175233 * t),
        }
    }
}

fn mean_obliquity(t: f64) -> f64 {
    (23.439291 - 0.0130042 * t) * DEG_TO_RAD
}

pub fn moon_equatorial(jd: &JulianDate) -> LunarEquatorial {
    let t = jd.centuries_since_j2000();
    let FundamentalArguments {
        mean_longitude: l_prime,
        mean_elongation: d,
        sun_mean_anomaly: m,
        moon_mean_anomaly: m_prime,
        argument_of_latitude: f,
    } = FundamentalArguments::at(t);

    let longitude = l_prime
        + DEG_TO_RAD
            * (6.289 * libm::sin(m_prime)
                + 1.274 * libm::sin(2.0 * d - m_prime)
                + 0.658 * libm::sin(2.0 * d)
                + 0.214 * libm::sin(2.0 * m_prime)
                - 0.186 * libm::sin(m)
                - 0.114 * libm::sin(2.0 * f));

    let latitude = DEG_TO_RAD
        * (5.128 * libm::sin(f) + 0.281 * libm::sin(m_prime + f) + 0.278 * libm::sin(m_prime - f));

    let distance_km = 385000.56
        - 20905.355 * libm::cos(m_prime)
        - 3699.111 * libm::cos(2.0 * d - m_prime)
        - 2955.968 * libm::cos(2.0 * d)
        - 569.925 * libm::cos(2.0 * m_prime);

    let eps = mean_obliquity(t);

    let (sin_lon, cos_lon) = libm::sincos(longitude);
    let (sin_lat, cos_lat) = libm::sincos(latitude);
    let (sin_eps, cos_eps) = libm::sincos(eps);

    let ra = libm::atan2(sin_lon * cos_eps - libm::tan(latitude) * sin_eps, cos_lon);
    let dec = libm::asin(sin_lat * cos_eps + cos_lat * sin_eps * sin_lon);

    LunarEquatorial {
        right_ascension: Angle::from_radians(wrap_0_2pi(ra)),
        declination: Angle::from_radians(dec),
        distance_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declination_within_lunar_standstill() {
        // Declination never exceeds ~28.7° (major standstill)
        for day in 0..60 {
            let jd = JulianDate::new(2460389.5, day as f64 * 0.5);
            let moon = moon_equatorial(&jd);
            assert!(
                moon.declination.degrees().abs() < 29.0,
                "declination {}° on step {}",
                moon.declination.degrees(),
                day
            );
            let ra = moon.right_ascension.radians();
            assert!((0.0..std::f64::consts::TAU).contains(&ra));
        }
    }

    #[test]
    fn test_distance_between_perigee_and_apogee() {
        for day in 0..30 {
            let moon = moon_equatorial(&JulianDate::new(2460389.5, day as f64));
            assert!(
                (355_000.0..=407_500.0).contains(&moon.distance_km),
                "distance {} km",
                moon.distance_km
            );
        }
    }

    #[test]
    fn test_parallax_and_semi_diameter_magnitudes() {
        let moon = moon_equatorial(&JulianDate::new(2460389.5, 0.75));
        // ~0.9° horizontal parallax, ~0.25° semi-diameter
        assert!((0.88..1.02).contains(&moon.horizontal_parallax().degrees()));
        assert!((0.24..0.28).contains(&moon.semi_diameter().degrees()));
    }

    #[test]
    fn test_moon_moves_about_13_degrees_per_day() {
        let a = moon_equatorial(&JulianDate::new(2460389.5, 0.0));
        let b = moon_equatorial(&JulianDate::new(2460390.5, 0.0));
        let step = (b.right_ascension - a.right_ascension).normalized().degrees();
        assert!((10.0..17.0).contains(&step), "RA step {}°", step);
    }
}
