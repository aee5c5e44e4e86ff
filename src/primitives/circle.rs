use super::{PointShapeRelation, Shape};
use crate::{MeshNum, Point2, Tolerance};

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy)]
pub struct Circle<S> {
    center: Point2<S>,
    radius: S,
}

impl<S: MeshNum> Circle<S> {
    /// Creates a new circle. Negative radii are stored as their magnitude.
    pub fn new(center: Point2<S>, radius: S) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// Creates a new circle from center coordinates.
    pub fn from_coordinates(x: S, y: S, radius: S) -> Self {
        Self::new(Point2::new(x, y), radius)
    }

    /// Returns the circle's center.
    pub fn center(&self) -> Point2<S> {
        self.center
    }

    /// Returns the circle's radius.
    pub fn radius(&self) -> S {
        self.radius
    }

    /// Returns the circle's diameter.
    pub fn diameter(&self) -> S {
        self.radius + self.radius
    }

    /// Returns `true` if center and radius are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }
}

impl<S: MeshNum> PartialEq for Circle<S> {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && crate::math::approx_equal(self.radius, other.radius)
    }
}

impl<S: MeshNum> Shape<S> for Circle<S> {
    fn midpoint(&self) -> Point2<S> {
        self.center
    }

    fn perimeter(&self) -> S {
        S::PI() * self.diameter()
    }

    fn area(&self) -> S {
        S::PI() * self.radius * self.radius
    }

    fn circumscribed_circle(&self) -> Option<Circle<S>> {
        Some(*self)
    }

    fn contains_with(&self, point: Point2<S>, tolerance: &Tolerance<S>) -> PointShapeRelation {
        let distance = self.center.distance(point);
        if tolerance.approx_eq(distance, self.radius) {
            PointShapeRelation::On
        } else if distance < self.radius {
            PointShapeRelation::Inside
        } else {
            PointShapeRelation::Outside
        }
    }
}

#[cfg(test)]
mod test {
    use super::Circle;
    use crate::{Point2, PointShapeRelation, Shape, Tolerance};
    use approx::assert_relative_eq;

    #[test]
    fn test_measures() {
        let circle = Circle::from_coordinates(1.0f64, 2.0, -2.0);
        assert_eq!(circle.radius(), 2.0);
        assert_eq!(circle.diameter(), 4.0);
        assert_relative_eq!(circle.area(), 4.0 * std::f64::consts::PI, epsilon = 1e-12);
        assert_relative_eq!(
            circle.perimeter(),
            4.0 * std::f64::consts::PI,
            epsilon = 1e-12
        );
        assert_eq!(circle.midpoint(), Point2::new(1.0, 2.0));
    }

    #[test]
    fn test_contains() {
        let circle = Circle::new(Point2::new(0.0, 0.0), 1.0);
        assert_eq!(circle.contains(Point2::new(0.5, 0.5)), PointShapeRelation::Inside);
        assert_eq!(circle.contains(Point2::new(1.0, 0.0)), PointShapeRelation::On);
        assert_eq!(circle.contains(Point2::new(0.0, -1.0)), PointShapeRelation::On);
        assert_eq!(circle.contains(Point2::new(1.0, 1.0)), PointShapeRelation::Outside);
    }

    #[test]
    fn test_contains_boundary_points() {
        let center = Point2::new(0.3, -0.7);
        let circle = Circle::new(center, 2.5);
        for i in 0..32 {
            let angle = i as f64 * std::f64::consts::PI / 16.0;
            let p = center.offset(2.5 * angle.cos(), 2.5 * angle.sin());
            assert_eq!(circle.contains(p), PointShapeRelation::On);
        }
    }

    #[test]
    fn test_contains_with_tolerance() {
        let circle = Circle::new(Point2::new(0.0, 0.0), 1.0);
        let p = Point2::new(1.01, 0.0);
        assert_eq!(circle.contains(p), PointShapeRelation::Outside);
        let loose = Tolerance::default().with_max_relative(0.1);
        assert_eq!(circle.contains_with(p, &loose), PointShapeRelation::On);
    }
}
