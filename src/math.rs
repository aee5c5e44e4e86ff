//! Scalar predicates used by all shapes and by the triangulation engine.
//!
//! The determinant based functions in this module use plain cofactor expansion without
//! pivoting. They are precise enough for well separated input but become the dominant source
//! of artifacts for nearly collinear or nearly cocircular point sets. Only
//! [orientation] and the circumcircle predicates ([circumcircle_relation_exact],
//! [in_circumcircle_exact]) are evaluated with exact arithmetic through the `robust` crate.
//! The triangulation engine decides encroachment with them; the shapes keep their tolerant
//! classifications.

use crate::primitives::PointShapeRelation;
use crate::{MeshError, MeshNum, Point2, Tolerance};

/// Returns `true` if `a` and `b` are equal within the default [Tolerance].
#[inline]
pub fn approx_equal<S: MeshNum>(a: S, b: S) -> bool {
    Tolerance::default().approx_eq(a, b)
}

/// Returns `true` if `a` is zero within the default [Tolerance].
#[inline]
pub fn approx_zero<S: MeshNum>(a: S) -> bool {
    Tolerance::default().approx_zero(a)
}

/// Returns the euclidean distance between `(x1, y1)` and `(x2, y2)`.
#[inline]
pub fn distance<S: MeshNum>(x1: S, y1: S, x2: S, y2: S) -> S {
    let x = x1 - x2;
    let y = y1 - y2;
    (x * x + y * y).sqrt()
}

/// Returns the determinant of the matrix `[[a1, a2], [b1, b2]]`.
#[inline]
pub fn determinant_2x2<S: MeshNum>(a1: S, a2: S, b1: S, b2: S) -> S {
    a1 * b2 - a2 * b1
}

/// Returns the determinant of the matrix `[[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]]`.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn determinant_3x3<S: MeshNum>(
    a1: S,
    a2: S,
    a3: S,
    b1: S,
    b2: S,
    b3: S,
    c1: S,
    c2: S,
    c3: S,
) -> S {
    a1 * b2 * c3 - a1 * b3 * c2 - a2 * b1 * c3 + a2 * b3 * c1 + a3 * b1 * c2 - a3 * b2 * c1
}

/// Returns the signed area of the triangle `(p1, p2, p3)`.
///
/// The area is positive for counter clockwise and negative for clockwise vertex order.
pub fn signed_triangle_area<S: MeshNum>(p1: Point2<S>, p2: Point2<S>, p3: Point2<S>) -> S {
    let one = S::one();
    let two = one + one;
    determinant_3x3(p1.x, p1.y, one, p2.x, p2.y, one, p3.x, p3.y, one) / two
}

/// Returns `true` if `p` lies on the infinite line through `from` and `to`, within `tolerance`.
///
/// Instead of comparing the signed area of `(from, to, p)` against zero, the two products
/// of the underlying 2x2 determinant are compared with each other. This keeps the test
/// independent of the coordinate scale.
pub fn is_on_line<S: MeshNum>(
    from: Point2<S>,
    to: Point2<S>,
    p: Point2<S>,
    tolerance: &Tolerance<S>,
) -> bool {
    let d = to.sub(from);
    let q = p.sub(from);
    tolerance.approx_eq(d.x * q.y, d.y * q.x)
}

/// Returns `true` if `p` lies on the line segment between `from` and `to`, within `tolerance`.
pub fn is_on_segment<S: MeshNum>(
    from: Point2<S>,
    to: Point2<S>,
    p: Point2<S>,
    tolerance: &Tolerance<S>,
) -> bool {
    if p.approx_eq(from, tolerance) || p.approx_eq(to, tolerance) {
        return true;
    }
    if !is_on_line(from, to, p, tolerance) {
        return false;
    }
    let d = to.sub(from);
    let factor = p.sub(from).dot(d);
    let length_2 = d.length2();
    factor >= S::zero() && factor <= length_2
}

/// Describes the winding of three points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The points are ordered counter clockwise.
    CounterClockwise,
    /// The points are ordered clockwise.
    Clockwise,
    /// The points lie on a common line.
    Collinear,
}

impl Orientation {
    pub(crate) fn from_determinant(determinant: f64) -> Self {
        if determinant > 0.0 {
            Orientation::CounterClockwise
        } else if determinant < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }

    /// Returns `true` if the points are collinear.
    pub fn is_collinear(self) -> bool {
        self == Orientation::Collinear
    }
}

fn to_robust_coord<S: MeshNum>(point: Point2<S>) -> robust::Coord<f64> {
    let point = point.to_f64();
    robust::Coord {
        x: point.x,
        y: point.y,
    }
}

/// Returns the exact orientation of `(p1, p2, p3)`.
///
/// Unlike [signed_triangle_area], this predicate never suffers from rounding errors.
pub fn orientation<S: MeshNum>(p1: Point2<S>, p2: Point2<S>, p3: Point2<S>) -> Orientation {
    let result = robust::orient2d(to_robust_coord(p1), to_robust_coord(p2), to_robust_coord(p3));
    Orientation::from_determinant(result)
}

/// Classifies `p` against the circumcircle of `(v1, v2, v3)` with exact arithmetic.
///
/// The vertex order of the triangle does not matter. Collinear vertices have no circumcircle,
/// every point is reported as [PointShapeRelation::Outside].
pub fn circumcircle_relation_exact<S: MeshNum>(
    v1: Point2<S>,
    v2: Point2<S>,
    v3: Point2<S>,
    p: Point2<S>,
) -> PointShapeRelation {
    let (v1, v2) = match orientation(v1, v2, v3) {
        Orientation::CounterClockwise => (v1, v2),
        Orientation::Clockwise => (v2, v1),
        Orientation::Collinear => return PointShapeRelation::Outside,
    };
    // incircle is positive for ccw ordered vertices if p lies inside
    let determinant = robust::incircle(
        to_robust_coord(v1),
        to_robust_coord(v2),
        to_robust_coord(v3),
        to_robust_coord(p),
    );
    if determinant > 0.0 {
        PointShapeRelation::Inside
    } else if determinant < 0.0 {
        PointShapeRelation::Outside
    } else {
        PointShapeRelation::On
    }
}

/// Returns `true` if `p` lies strictly within the circumcircle of `(v1, v2, v3)`.
///
/// The vertex order of the triangle does not matter. Returns `false` for collinear vertices.
pub fn in_circumcircle_exact<S: MeshNum>(
    v1: Point2<S>,
    v2: Point2<S>,
    v3: Point2<S>,
    p: Point2<S>,
) -> bool {
    circumcircle_relation_exact(v1, v2, v3, p) == PointShapeRelation::Inside
}

/// Checks if a coordinate value can be used as mesh input.
///
/// Returns an error if the value is NaN or infinite. Such values would otherwise silently
/// poison every bounding box and circumcircle derived from them.
pub fn validate_coordinate<S: MeshNum>(value: S) -> Result<(), MeshError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MeshError::InvalidCoordinate {
            value: value.into(),
        })
    }
}

/// Checks both coordinates of a point, see [validate_coordinate].
pub fn validate_point<S: MeshNum>(point: Point2<S>) -> Result<(), MeshError> {
    validate_coordinate(point.x)?;
    validate_coordinate(point.y)
}
