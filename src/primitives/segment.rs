use super::{Circle, PointShapeRelation, Shape};
use crate::{math, MeshNum, Point2, Tolerance};

/// A line segment between two points.
///
/// Segments are undirected: `Segment::new(a, b) == Segment::new(b, a)`.
#[derive(Debug, Clone, Copy)]
pub struct Segment<S> {
    v1: Point2<S>,
    v2: Point2<S>,
    length: S,
    midpoint: Point2<S>,
}

impl<S: MeshNum> Segment<S> {
    /// Creates a new segment.
    pub fn new(v1: Point2<S>, v2: Point2<S>) -> Self {
        let two = S::one() + S::one();
        Self {
            v1,
            v2,
            length: v1.distance(v2),
            midpoint: v1.add(v2).div(two),
        }
    }

    /// Creates a new segment from the coordinates of its end points.
    pub fn from_coordinates(x1: S, y1: S, x2: S, y2: S) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Returns the first end point.
    pub fn v1(&self) -> Point2<S> {
        self.v1
    }

    /// Returns the second end point.
    pub fn v2(&self) -> Point2<S> {
        self.v2
    }

    /// Returns both end points.
    pub fn vertices(&self) -> [Point2<S>; 2] {
        [self.v1, self.v2]
    }

    /// Returns the segment's length.
    pub fn length(&self) -> S {
        self.length
    }

    /// Returns the circle whose diameter is this segment.
    ///
    /// A point inside this circle *encroaches* upon the segment.
    pub fn diametral_circle(&self) -> Circle<S> {
        let two = S::one() + S::one();
        Circle::new(self.midpoint, self.length / two)
    }

    /// Returns the same segment with swapped end points.
    pub fn reversed(&self) -> Self {
        Self {
            v1: self.v2,
            v2: self.v1,
            ..*self
        }
    }
}

impl<S: MeshNum> PartialEq for Segment<S> {
    fn eq(&self, other: &Self) -> bool {
        (self.v1 == other.v1 && self.v2 == other.v2) || (self.v1 == other.v2 && self.v2 == other.v1)
    }
}

impl<S: MeshNum> Shape<S> for Segment<S> {
    fn midpoint(&self) -> Point2<S> {
        self.midpoint
    }

    fn perimeter(&self) -> S {
        self.length
    }

    fn area(&self) -> S {
        S::zero()
    }

    fn circumscribed_circle(&self) -> Option<Circle<S>> {
        Some(self.diametral_circle())
    }

    fn contains_with(&self, point: Point2<S>, tolerance: &Tolerance<S>) -> PointShapeRelation {
        if math::is_on_segment(self.v1, self.v2, point, tolerance) {
            PointShapeRelation::On
        } else {
            PointShapeRelation::Outside
        }
    }
}

#[cfg(test)]
mod test {
    use super::Segment;
    use crate::{Point2, PointShapeRelation, Shape};
    use approx::assert_relative_eq;

    #[test]
    fn test_measures() {
        let s = Segment::from_coordinates(0.0, 0.0, 6.0, 8.0);
        assert_relative_eq!(s.length(), 10.0);
        assert_relative_eq!(s.perimeter(), 10.0);
        assert_eq!(s.area(), 0.0);
        assert_eq!(s.midpoint(), Point2::new(3.0, 4.0));
        let circle = s.diametral_circle();
        assert_eq!(circle.center(), Point2::new(3.0, 4.0));
        assert_relative_eq!(circle.radius(), 5.0);
        assert_eq!(circle.contains(s.v1()), PointShapeRelation::On);
        assert_eq!(circle.contains(s.v2()), PointShapeRelation::On);
    }

    #[test]
    fn test_orientation_independent_equality() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(-3.0, 0.5);
        assert_eq!(Segment::new(a, b), Segment::new(b, a));
        assert_eq!(Segment::new(a, b), Segment::new(a, b).reversed());
        assert_ne!(Segment::new(a, b), Segment::new(a, Point2::new(-3.0, 0.6)));
    }

    #[test]
    fn test_contains() {
        let s = Segment::from_coordinates(1.0, 1.0, 3.0, 2.0);
        for i in 0..=8 {
            let t = i as f64 / 8.0;
            let p = Point2::new(1.0 + 2.0 * t, 1.0 + t);
            assert_eq!(s.contains(p), PointShapeRelation::On);
        }
        assert_eq!(s.contains(Point2::new(2.0, 2.0)), PointShapeRelation::Outside);
        assert_eq!(s.contains(Point2::new(5.0, 3.0)), PointShapeRelation::Outside);
        assert_eq!(s.contains(Point2::new(-1.0, 0.0)), PointShapeRelation::Outside);
    }
}
