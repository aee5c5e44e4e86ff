use approx::RelativeEq;
use num_traits::{Float, FloatConst};

use crate::Tolerance;

/// A coordinate type that can be used with a mesh domain.
///
/// Exact predicates are evaluated after converting the type into a `f64`, all other
/// calculations stay in `S`.
///
/// This type should usually be either `f32` or `f64`.
pub trait MeshNum:
    Float + FloatConst + RelativeEq<Epsilon = Self> + Into<f64> + From<f32> + std::fmt::Debug
{
}

impl<T> MeshNum for T where
    T: Float + FloatConst + RelativeEq<Epsilon = T> + Into<f64> + From<f32> + std::fmt::Debug
{
}

/// A two dimensional point.
///
/// This is the basic type used for defining positions.
///
/// Equality is *approximate*: two points compare equal if both coordinates are equal within
/// the default [Tolerance]. This relation is not transitive; use [Point2::approx_eq] with an
/// explicit tolerance where that matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point2<S> {
    /// The point's x coordinate
    pub x: S,
    /// The point's y coordinate
    pub y: S,
}

impl<S> Point2<S> {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Point2 { x, y }
    }
}

impl<S: MeshNum> Point2<S> {
    /// Returns the euclidean distance between this point and another point.
    #[inline]
    pub fn distance(&self, other: Self) -> S {
        self.distance_2(other).sqrt()
    }

    /// Returns the squared distance of this point and another point.
    #[inline]
    pub fn distance_2(&self, other: Self) -> S {
        self.sub(other).length2()
    }

    /// Returns this point moved by `(dx, dy)`.
    pub fn offset(&self, dx: S, dy: S) -> Self {
        Point2::new(self.x + dx, self.y + dy)
    }

    /// Checks if both coordinates are equal within `tolerance`.
    pub fn approx_eq(&self, other: Self, tolerance: &Tolerance<S>) -> bool {
        tolerance.approx_eq(self.x, other.x) && tolerance.approx_eq(self.y, other.y)
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) fn to_f64(self) -> Point2<f64> {
        Point2::new(self.x.into(), self.y.into())
    }

    pub(crate) fn mul(&self, factor: S) -> Self {
        Point2 {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub(crate) fn div(&self, divisor: S) -> Self {
        Point2 {
            x: self.x / divisor,
            y: self.y / divisor,
        }
    }

    pub(crate) fn add(&self, other: Self) -> Self {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub(crate) fn length2(&self) -> S {
        self.x * self.x + self.y * self.y
    }

    pub(crate) fn sub(&self, other: Self) -> Self {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    pub(crate) fn dot(&self, other: Self) -> S {
        self.x * other.x + self.y * other.y
    }

    pub(crate) fn min(&self, other: Self) -> Self {
        Point2::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub(crate) fn max(&self, other: Self) -> Self {
        Point2::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl<S: MeshNum> PartialEq for Point2<S> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(*other, &Tolerance::default())
    }
}

impl<S: MeshNum> From<Point2<S>> for [S; 2] {
    #[inline]
    fn from(point: Point2<S>) -> Self {
        [point.x, point.y]
    }
}

impl<S: MeshNum> From<Point2<S>> for (S, S) {
    #[inline]
    fn from(point: Point2<S>) -> (S, S) {
        (point.x, point.y)
    }
}

impl<S: MeshNum> From<[S; 2]> for Point2<S> {
    #[inline]
    fn from(source: [S; 2]) -> Self {
        Self::new(source[0], source[1])
    }
}

impl<S: MeshNum> From<(S, S)> for Point2<S> {
    #[inline]
    fn from(source: (S, S)) -> Self {
        Self::new(source.0, source.1)
    }
}
