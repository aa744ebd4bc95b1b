#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Quadratic through three equally spaced samples, parameterized on `x ∈ [-1, 1]`.
///
/// The samples sit at `x = -1`, `0` and `+1`. Used to locate horizon crossings
/// between coarse altitude samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parabola {
    a: f64,
    b: f64,
    c: f64,
}

/// Zero crossings of a [`Parabola`] that fall inside `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitRoots {
    None,
    One(f64),
    Two(f64, f64),
}

impl Parabola {
    pub fn through(y_prev: f64, y_mid: f64, y_next: f64) -> Self {
        Self {
            a: (y_prev + y_next) / 2.0 - y_mid,
            b: (y_next - y_prev) / 2.0,
            c: y_mid,
        }
    }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// Derivative of the fit at `x`.
    #[inline]
    pub fn slope(&self, x: f64) -> f64 {
        2.0 * self.a * x + self.b
    }

    /// Abscissa and value of the extremum. A degenerate (straight) fit has no vertex.
    pub fn vertex(&self) -> Option<(f64, f64)> {
        if self.a == 0.0 {
            return None;
        }
        let xe = -self.b / (2.0 * self.a);
        Some((xe, self.eval(xe)))
    }

    /// Roots inside `[-1, 1]`, in ascending order.
    pub fn roots_in_unit_interval(&self) -> UnitRoots {
        let in_unit = |x: f64| x.abs() <= 1.0;

        if self.a == 0.0 {
            if self.b == 0.0 {
                return UnitRoots::None;
            }
            let x = -self.c / self.b;
            return if in_unit(x) {
                UnitRoots::One(x)
            } else {
                UnitRoots::None
            };
        }

        let discriminant = self.b * self.b - 4.0 * self.a * self.c;
        if discriminant < 0.0 {
            return UnitRoots::None;
        }

        let xe = -self.b / (2.0 * self.a);
        let dx = libm::sqrt(discriminant) / (2.0 * self.a.abs());
        let (x1, x2) = (xe - dx, xe + dx);

        match (in_unit(x1), in_unit(x2)) {
            (true, true) => UnitRoots::Two(x1, x2),
            (true, false) => UnitRoots::One(x1),
            (false, true) => UnitRoots::One(x2),
            (false, false) => UnitRoots::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmod_keeps_dividend_sign() {
        assert_eq!(fmod(370.0, 360.0), 10.0);
        assert_eq!(fmod(-10.0, 360.0), -10.0);
    }

    #[test]
    fn test_parabola_passes_through_samples() {
        let p = Parabola::through(-2.0, 1.0, 6.0);
        assert_eq!(p.eval(-1.0), -2.0);
        assert_eq!(p.eval(0.0), 1.0);
        assert_eq!(p.eval(1.0), 6.0);
    }

    #[test]
    fn test_parabola_two_roots() {
        // y = x^2 - 0.25 sampled at -1, 0, 1
        let p = Parabola::through(0.75, -0.25, 0.75);
        match p.roots_in_unit_interval() {
            UnitRoots::Two(x1, x2) => {
                assert!((x1 + 0.5).abs() < 1e-12);
                assert!((x2 - 0.5).abs() < 1e-12);
            }
            other => panic!("expected two roots, got {:?}", other),
        }
        let (xe, ye) = p.vertex().unwrap();
        assert!(xe.abs() < 1e-12);
        assert!((ye + 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_parabola_single_root_from_line() {
        let p = Parabola::through(-1.0, 0.0, 1.0);
        assert_eq!(p.roots_in_unit_interval(), UnitRoots::One(0.0));
        assert!(p.vertex().is_none());
        assert_eq!(p.slope(0.0), 1.0);
    }

    #[test]
    fn test_parabola_slope_signs_at_roots() {
        // y = x^2 - 0.25 falls through -0.5 and rises through +0.5
        let p = Parabola::through(0.75, -0.25, 0.75);
        assert!(p.slope(-0.5) < 0.0);
        assert!(p.slope(0.5) > 0.0);
    }

    #[test]
    fn test_parabola_roots_outside_interval() {
        let p = Parabola::through(3.0, 2.0, 3.0);
        assert_eq!(p.roots_in_unit_interval(), UnitRoots::None);

        // y = x^2 - 4: roots at ±2
        let wide = Parabola::through(-3.0, -4.0, -3.0);
        assert_eq!(wide.roots_in_unit_interval(), UnitRoots::None);
    }
}
