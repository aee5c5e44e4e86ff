use crate::MeshNum;

/// The relative error below which two scalars are considered equal.
pub const DEFAULT_MAX_RELATIVE: f32 = 1.0e-6;

/// The absolute error below which two scalars are considered equal.
///
/// Equal to the square of [DEFAULT_MAX_RELATIVE].
pub const DEFAULT_MAX_ABSOLUTE: f32 = 1.0e-12;

/// Controls when two scalars are treated as numerically interchangeable.
///
/// Two values `a` and `b` are approximately equal if `|a - b|` is at most `max_absolute`
/// *or* if `|a - b|` is at most `max_relative` times the larger magnitude of `a` and `b`.
/// The absolute threshold only matters for values near zero, where relative errors are
/// meaningless.
///
/// The defaults (`1e-6` relative, `1e-12` absolute) are tuned for single and double precision
/// geometry. Looser tolerances will merge distinct input points, tighter tolerances make
/// boundary classifications (see [PointShapeRelation::On](crate::PointShapeRelation::On))
/// sensitive to rounding.
///
/// # Example
/// ```
/// use cavity_mesh::Tolerance;
///
/// let tolerance = Tolerance::<f64>::default().with_max_relative(1e-3);
/// assert!(tolerance.approx_eq(1000.0, 1000.5));
/// assert!(!Tolerance::<f64>::default().approx_eq(1000.0, 1000.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance<S> {
    max_relative: S,
    max_absolute: S,
}

impl<S: MeshNum> Default for Tolerance<S> {
    fn default() -> Self {
        Self {
            max_relative: DEFAULT_MAX_RELATIVE.into(),
            max_absolute: DEFAULT_MAX_ABSOLUTE.into(),
        }
    }
}

impl<S: MeshNum> Tolerance<S> {
    /// Creates the default tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum relative error.
    pub fn with_max_relative(mut self, max_relative: S) -> Self {
        self.max_relative = max_relative.abs();
        self
    }

    /// Sets the maximum absolute error.
    pub fn with_max_absolute(mut self, max_absolute: S) -> Self {
        self.max_absolute = max_absolute.abs();
        self
    }

    /// Returns the maximum relative error.
    pub fn max_relative(&self) -> S {
        self.max_relative
    }

    /// Returns the maximum absolute error.
    pub fn max_absolute(&self) -> S {
        self.max_absolute
    }

    /// Returns `true` if `a` and `b` are equal within this tolerance.
    #[inline]
    pub fn approx_eq(&self, a: S, b: S) -> bool {
        a.relative_eq(&b, self.max_absolute, self.max_relative)
    }

    /// Returns `true` if `a` is equal to zero within this tolerance.
    ///
    /// Zero has no magnitude to relate to, hence only the absolute threshold applies.
    #[inline]
    pub fn approx_zero(&self, a: S) -> bool {
        self.approx_eq(a, S::zero())
    }
}

#[cfg(test)]
mod test {
    use super::Tolerance;
    use float_next_after::NextAfter;

    #[test]
    fn test_defaults() {
        let tolerance = Tolerance::<f64>::default();
        assert!((tolerance.max_relative() - 1e-6).abs() < 1e-12);
        assert!((tolerance.max_absolute() - 1e-12).abs() < 1e-18);
    }

    #[test]
    fn test_relative_threshold() {
        let tolerance = Tolerance::<f64>::default();
        assert!(tolerance.approx_eq(1.0e6, 1.0e6 + 0.5));
        assert!(!tolerance.approx_eq(1.0e6, 1.0e6 + 2.0));
        assert!(tolerance.approx_eq(-3.0, -3.0 * (1.0 + 5e-7)));
        assert!(!tolerance.approx_eq(-3.0, 3.0));
    }

    #[test]
    fn test_absolute_threshold() {
        let tolerance = Tolerance::<f64>::default();
        assert!(tolerance.approx_zero(0.0));
        assert!(tolerance.approx_zero(5e-13));
        assert!(tolerance.approx_zero(0.0.next_after(f64::INFINITY)));
        assert!(!tolerance.approx_zero(1e-10));
        assert!(tolerance.approx_eq(1e-13, -1e-13));
    }

    #[test]
    fn test_infinity() {
        let tolerance = Tolerance::<f64>::default();
        assert!(tolerance.approx_eq(f64::INFINITY, f64::INFINITY));
        assert!(!tolerance.approx_eq(f64::INFINITY, 1.0e300));
        assert!(!tolerance.approx_eq(f64::NAN, f64::NAN));
    }

    #[test]
    fn test_builder() {
        let tolerance = Tolerance::<f32>::new()
            .with_max_relative(-0.25)
            .with_max_absolute(0.5);
        assert_eq!(tolerance.max_relative(), 0.25);
        assert!(tolerance.approx_eq(0.0, 0.4));
        assert!(tolerance.approx_eq(10.0, 12.0));
        assert!(!tolerance.approx_eq(10.0, 14.0));
    }
}
