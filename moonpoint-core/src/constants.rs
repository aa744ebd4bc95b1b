pub const J2000_JD: f64 = 2451545.0;

/// Julian Date of 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2440587.5;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const MILLIS_PER_DAY_F64: f64 = 86_400_000.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const FULL_TURN_DEGREES: f64 = 360.0;

pub const HALF_TURN_DEGREES: f64 = 180.0;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// WGS84 equatorial radius in kilometers, used for the lunar horizontal parallax.
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.137;

/// Mean lunar radius in kilometers (IAU).
pub const MOON_RADIUS_KM: f64 = 1737.4;

/// Standard refraction at the apparent horizon, in arcminutes.
pub const HORIZON_REFRACTION_ARCMIN: f64 = 34.0;
