use moonpoint_core::constants::HORIZON_REFRACTION_ARCMIN;

/// Switches for the corrections applied by the [`Ephemeris`](crate::Ephemeris).
///
/// ```
/// use moonpoint_ephemeris::EphemerisOptions;
///
/// let opts = EphemerisOptions { refraction: false, ..Default::default() };
/// assert!(opts.parallax);
/// assert_eq!(opts.search_step_hours, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EphemerisOptions {
    /// Add mean atmospheric refraction to the reported altitude.
    pub refraction: bool,
    /// Shift the geocentric altitude to the observer's position on the surface.
    pub parallax: bool,
    /// Horizon dip used by the rise/set search, in arcminutes.
    pub horizon_refraction_arcmin: f64,
    /// Width of each parabolic segment of the rise/set search.
    pub search_step_hours: f64,
}

impl Default for EphemerisOptions {
    fn default() -> Self {
        Self {
            refraction: true,
            parallax: true,
            horizon_refraction_arcmin: HORIZON_REFRACTION_ARCMIN,
            search_step_hours: 2.0,
        }
    }
}
