use super::{Circle, PointShapeRelation, Shape};
use crate::{MeshNum, Point2, Tolerance};

/// An axis aligned rectangle.
///
/// Mesh domains track the running bounding box of their input with a `Quad`; the
/// triangulation sizes its super triangle from the box's circumscribed circle.
#[derive(Debug, Clone, Copy)]
pub struct Quad<S> {
    lower: Point2<S>,
    upper: Point2<S>,
}

impl<S: MeshNum> Quad<S> {
    /// Creates a quad from its center, width and height.
    pub fn new(center: Point2<S>, width: S, height: S) -> Self {
        let two = S::one() + S::one();
        let half = Point2::new(width.abs() / two, height.abs() / two);
        Self {
            lower: center.sub(half),
            upper: center.add(half),
        }
    }

    /// Creates a quad with zero extent located at `point`.
    pub fn from_point(point: Point2<S>) -> Self {
        Self {
            lower: point,
            upper: point,
        }
    }

    /// Creates the smallest quad containing two corners.
    pub fn from_corners(corner1: Point2<S>, corner2: Point2<S>) -> Self {
        Self {
            lower: corner1.min(corner2),
            upper: corner1.max(corner2),
        }
    }

    /// Returns the smallest quad containing `self` and `point`.
    #[must_use]
    pub fn add_point(&self, point: Point2<S>) -> Self {
        Self {
            lower: self.lower.min(point),
            upper: self.upper.max(point),
        }
    }

    /// Returns the x coordinate of the left side.
    pub fn left(&self) -> S {
        self.lower.x
    }

    /// Returns the x coordinate of the right side.
    pub fn right(&self) -> S {
        self.upper.x
    }

    /// Returns the y coordinate of the bottom side.
    pub fn bottom(&self) -> S {
        self.lower.y
    }

    /// Returns the y coordinate of the top side.
    pub fn top(&self) -> S {
        self.upper.y
    }

    /// Returns the width.
    pub fn width(&self) -> S {
        self.upper.x - self.lower.x
    }

    /// Returns the height.
    pub fn height(&self) -> S {
        self.upper.y - self.lower.y
    }

    /// Returns the center.
    pub fn center(&self) -> Point2<S> {
        let two = S::one() + S::one();
        self.lower.add(self.upper).div(two)
    }

    /// Returns the corner with the smaller coordinates.
    pub fn lower(&self) -> Point2<S> {
        self.lower
    }

    /// Returns the corner with the larger coordinates.
    pub fn upper(&self) -> Point2<S> {
        self.upper
    }
}

impl<S: MeshNum> PartialEq for Quad<S> {
    fn eq(&self, other: &Self) -> bool {
        self.lower == other.lower && self.upper == other.upper
    }
}

impl<S: MeshNum> Shape<S> for Quad<S> {
    fn midpoint(&self) -> Point2<S> {
        self.center()
    }

    fn perimeter(&self) -> S {
        let two = S::one() + S::one();
        two * (self.width() + self.height())
    }

    fn area(&self) -> S {
        self.width() * self.height()
    }

    fn circumscribed_circle(&self) -> Option<Circle<S>> {
        let two = S::one() + S::one();
        Some(Circle::new(
            self.center(),
            self.lower.distance(self.upper) / two,
        ))
    }

    fn contains_with(&self, point: Point2<S>, tolerance: &Tolerance<S>) -> PointShapeRelation {
        let within_x = point.x >= self.lower.x && point.x <= self.upper.x;
        let within_y = point.y >= self.lower.y && point.y <= self.upper.y;
        let on_vertical_side = (tolerance.approx_eq(point.x, self.lower.x)
            || tolerance.approx_eq(point.x, self.upper.x))
            && (within_y
                || tolerance.approx_eq(point.y, self.lower.y)
                || tolerance.approx_eq(point.y, self.upper.y));
        let on_horizontal_side = (tolerance.approx_eq(point.y, self.lower.y)
            || tolerance.approx_eq(point.y, self.upper.y))
            && (within_x
                || tolerance.approx_eq(point.x, self.lower.x)
                || tolerance.approx_eq(point.x, self.upper.x));

        if on_vertical_side || on_horizontal_side {
            PointShapeRelation::On
        } else if within_x && within_y {
            PointShapeRelation::Inside
        } else {
            PointShapeRelation::Outside
        }
    }
}
