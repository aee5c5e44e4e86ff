//! Immutable geometric value types.
//!
//! All shapes compute their derived quantities (perimeter, area, circumscribed circle, ...)
//! once at construction. Every shape implements [Shape], which also provides a uniform
//! three-way point classification.

mod circle;
mod polyline;
mod quad;
mod segment;
mod triangle;

pub use circle::Circle;
pub use polyline::Polyline;
pub use quad::Quad;
pub use segment::Segment;
pub use triangle::Triangle;

use crate::{MeshNum, Point2, Tolerance};

/// Describes where a point lies relative to a shape.
///
/// *See [Shape::contains]*
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointShapeRelation {
    /// The point lies within the shape.
    Inside,
    /// The point lies outside of the shape.
    Outside,
    /// The point lies on the shape's boundary, within tolerance.
    On,
}

impl PointShapeRelation {
    /// Returns `true` unless the point lies outside.
    pub fn is_inside_or_on(self) -> bool {
        self != PointShapeRelation::Outside
    }
}

/// Common interface of all geometric primitives.
pub trait Shape<S: MeshNum> {
    /// Returns the geometric center of the shape.
    fn midpoint(&self) -> Point2<S>;

    /// Returns the perimeter of the shape.
    fn perimeter(&self) -> S;

    /// Returns the (non-negative) area of the shape.
    fn area(&self) -> S;

    /// Returns a circle enclosing the shape.
    ///
    /// Returns `None` only if the circle is undefined, e.g. for a triangle with collinear vertices.
    fn circumscribed_circle(&self) -> Option<Circle<S>>;

    /// Classifies a point relative to this shape.
    ///
    /// A point within `tolerance` of the boundary is always reported as [PointShapeRelation::On],
    /// regardless of which side it lies on.
    fn contains_with(&self, point: Point2<S>, tolerance: &Tolerance<S>) -> PointShapeRelation;

    /// Classifies a point relative to this shape using the default [Tolerance].
    fn contains(&self, point: Point2<S>) -> PointShapeRelation {
        self.contains_with(point, &Tolerance::default())
    }
}

impl<S: MeshNum> Shape<S> for Point2<S> {
    fn midpoint(&self) -> Point2<S> {
        *self
    }

    fn perimeter(&self) -> S {
        S::zero()
    }

    fn area(&self) -> S {
        S::zero()
    }

    fn circumscribed_circle(&self) -> Option<Circle<S>> {
        Some(Circle::new(*self, S::zero()))
    }

    fn contains_with(&self, point: Point2<S>, tolerance: &Tolerance<S>) -> PointShapeRelation {
        if self.approx_eq(point, tolerance) {
            PointShapeRelation::On
        } else {
            PointShapeRelation::Outside
        }
    }
}

#[cfg(test)]
mod test {
    use super::{PointShapeRelation, Shape};
    use crate::Point2;

    #[test]
    fn test_point_shape() {
        let p = Point2::new(2.0, 3.0);
        assert_eq!(p.area(), 0.0);
        assert_eq!(p.perimeter(), 0.0);
        assert_eq!(p.midpoint(), p);
        assert_eq!(p.contains(Point2::new(2.0, 3.0)), PointShapeRelation::On);
        assert_eq!(p.contains(Point2::new(2.0, 3.1)), PointShapeRelation::Outside);
        let circle = p.circumscribed_circle().unwrap();
        assert_eq!(circle.radius(), 0.0);
        assert_eq!(circle.contains(p), PointShapeRelation::On);
    }

    #[test]
    fn test_relation() {
        assert!(PointShapeRelation::On.is_inside_or_on());
        assert!(PointShapeRelation::Inside.is_inside_or_on());
        assert!(!PointShapeRelation::Outside.is_inside_or_on());
    }
}
