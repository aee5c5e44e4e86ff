use super::{Circle, PointShapeRelation, Segment, Shape};
use crate::math::{self, Orientation};
use crate::{MeshError, MeshNum, Point2, Tolerance};

/// A triangle given by three points.
///
/// The vertex order is kept as given and is *not* required to be counter clockwise. All
/// derived quantities are computed on construction.
#[derive(Debug, Clone, Copy)]
pub struct Triangle<S> {
    vertices: [Point2<S>; 3],
    signed_area: S,
    perimeter: S,
    midpoint: Point2<S>,
    circumscribed_circle: Option<Circle<S>>,
}

impl<S: MeshNum> Triangle<S> {
    /// Creates a new triangle.
    pub fn new(v1: Point2<S>, v2: Point2<S>, v3: Point2<S>) -> Self {
        let three = S::one() + S::one() + S::one();
        Self {
            vertices: [v1, v2, v3],
            signed_area: math::signed_triangle_area(v1, v2, v3),
            perimeter: v1.distance(v2) + v2.distance(v3) + v3.distance(v1),
            midpoint: v1.add(v2).add(v3).div(three),
            circumscribed_circle: circumcircle(v1, v2, v3),
        }
    }

    /// Creates a new triangle from the coordinates of its vertices.
    pub fn from_coordinates(x1: S, y1: S, x2: S, y2: S, x3: S, y3: S) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2), Point2::new(x3, y3))
    }

    /// Returns the vertices in the order they were given.
    pub fn vertices(&self) -> [Point2<S>; 3] {
        self.vertices
    }

    /// Returns the edges `(v1, v2)`, `(v2, v3)` and `(v3, v1)`.
    pub fn edges(&self) -> [Segment<S>; 3] {
        let [v1, v2, v3] = self.vertices;
        [Segment::new(v1, v2), Segment::new(v2, v3), Segment::new(v3, v1)]
    }

    /// Returns the signed area, positive for counter clockwise vertex order.
    pub fn signed_area(&self) -> S {
        self.signed_area
    }

    /// Returns the exact orientation of the vertices.
    pub fn orientation(&self) -> Orientation {
        let [v1, v2, v3] = self.vertices;
        math::orientation(v1, v2, v3)
    }

    /// Returns `true` if the vertices are collinear and no circumscribed circle exists.
    pub fn is_degenerate(&self) -> bool {
        self.circumscribed_circle.is_none()
    }

    /// Returns the circumscribed circle or an error if the triangle is degenerate.
    pub fn try_circumscribed_circle(&self) -> Result<Circle<S>, MeshError> {
        self.circumscribed_circle
            .ok_or_else(|| MeshError::degenerate_triangle(self.vertices))
    }

    fn ccw_vertices(&self) -> [Point2<S>; 3] {
        let [v1, v2, v3] = self.vertices;
        if self.signed_area < S::zero() {
            [v1, v3, v2]
        } else {
            [v1, v2, v3]
        }
    }
}

/// Calculates the circumscribed circle using the determinant formula.
///
/// The formula is evaluated relative to `v1` to reduce cancellation for triangles far away
/// from the origin. Returns `None` if the vertices are exactly collinear or if the resulting
/// circle is not finite.
fn circumcircle<S: MeshNum>(v1: Point2<S>, v2: Point2<S>, v3: Point2<S>) -> Option<Circle<S>> {
    if math::orientation(v1, v2, v3).is_collinear() {
        return None;
    }
    let one = S::one();
    let two = one + one;
    let four = two + two;

    let origin = v1;
    let [v1, v2, v3] = [v1, v2, v3].map(|v| v.sub(origin));

    let a = math::determinant_3x3(v1.x, v1.y, one, v2.x, v2.y, one, v3.x, v3.y, one);
    let n1 = v1.length2();
    let n2 = v2.length2();
    let n3 = v3.length2();
    let bx = -math::determinant_3x3(n1, v1.y, one, n2, v2.y, one, n3, v3.y, one);
    let by = math::determinant_3x3(n1, v1.x, one, n2, v2.x, one, n3, v3.x, one);
    let c = -math::determinant_3x3(n1, v1.x, v1.y, n2, v2.x, v2.y, n3, v3.x, v3.y);

    // a is twice the signed area, zero only for collinear input
    let center = Point2::new(-bx / (two * a), -by / (two * a));
    let radius = (bx * bx + by * by - four * a * c).sqrt() / (two * a).abs();
    let circle = Circle::new(center.add(origin), radius);
    if circle.is_finite() {
        Some(circle)
    } else {
        None
    }
}

impl<S: MeshNum> PartialEq for Triangle<S> {
    /// Triangles are equal if their vertices are equal *in the same order*.
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl<S: MeshNum> Shape<S> for Triangle<S> {
    fn midpoint(&self) -> Point2<S> {
        self.midpoint
    }

    fn perimeter(&self) -> S {
        self.perimeter
    }

    fn area(&self) -> S {
        self.signed_area.abs()
    }

    fn circumscribed_circle(&self) -> Option<Circle<S>> {
        self.circumscribed_circle
    }

    fn contains_with(&self, point: Point2<S>, tolerance: &Tolerance<S>) -> PointShapeRelation {
        let vertices = self.ccw_vertices();
        for i in 0..3 {
            let from = vertices[i];
            let to = vertices[(i + 1) % 3];
            if math::is_on_line(from, to, point, tolerance) {
                // A point on the extension of an edge lies outside of the triangle
                return if math::is_on_segment(from, to, point, tolerance) {
                    PointShapeRelation::On
                } else {
                    PointShapeRelation::Outside
                };
            }
            if math::signed_triangle_area(from, to, point) < S::zero() {
                return PointShapeRelation::Outside;
            }
        }
        PointShapeRelation::Inside
    }
}
