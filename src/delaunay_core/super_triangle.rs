use super::cavity::Circumcircle;
use crate::math::{self, Orientation};
use crate::primitives::{Quad, Shape, Triangle};
use crate::{MeshError, MeshNum, Point2};

/// An equilateral triangle enclosing all input points.
///
/// The triangle is centered on the input's bounding box. Its inscribed circle has the
/// radius of the box's circumscribed circle multiplied by a margin, which keeps every
/// input point strictly inside.
///
/// During insertion the corners are not used by their coordinates. Every predicate involving
/// a corner is evaluated as if the corner was infinitely far away from the center, in the
/// direction of its actual position. This keeps every convex hull edge of the input in the
/// triangulation, no matter how close the corners are.
#[derive(Debug, Clone, Copy)]
pub struct SuperTriangle<S> {
    vertices: [Point2<S>; 3],
    center: Point2<S>,
}

/// A corner of a triangle created during insertion.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Corner<S> {
    Real(Point2<S>),
    /// The super triangle corner with the given index, moved infinitely far away.
    AtInfinity(usize),
}

impl<S> Corner<S> {
    fn is_at_infinity(&self) -> bool {
        matches!(self, Corner::AtInfinity(_))
    }
}

/// Rotates the corners cyclically: a lone corner at infinity moves to the last position, the
/// only real corner of a triangle with two corners at infinity as well.
fn rotate<S: Copy>(corners: [Corner<S>; 3]) -> [Corner<S>; 3] {
    let num_at_infinity = corners.iter().filter(|corner| corner.is_at_infinity()).count();
    let pivot = corners
        .iter()
        .position(|corner| match num_at_infinity {
            1 => corner.is_at_infinity(),
            2 => !corner.is_at_infinity(),
            _ => true,
        })
        .unwrap_or(0);
    [
        corners[(pivot + 1) % 3],
        corners[(pivot + 2) % 3],
        corners[pivot],
    ]
}

fn cross<S: MeshNum>(a: Point2<S>, b: Point2<S>) -> S {
    a.x * b.y - a.y * b.x
}

impl<S: MeshNum> SuperTriangle<S> {
    /// Builds the super triangle for a bounding box.
    ///
    /// A box with zero extent (a single input point) is treated as if its circumscribed
    /// circle had radius one.
    pub fn from_bounds(bounds: &Quad<S>, margin: S) -> Self {
        let center = bounds.center();
        let bounding_radius = bounds
            .circumscribed_circle()
            .map(|circle| circle.radius())
            .unwrap_or_else(S::zero);
        let bounding_radius = if bounding_radius > S::zero() {
            bounding_radius
        } else {
            S::one()
        };

        let three = S::one() + S::one() + S::one();
        // Inradius of the equilateral triangle
        let r = bounding_radius * margin;
        // Half of the side length
        let s = r * three.sqrt();
        // Height
        let h = r * three;

        Self {
            vertices: [
                Point2::new(center.x - s, center.y - r),
                Point2::new(center.x + s, center.y - r),
                Point2::new(center.x, center.y - r + h),
            ],
            center,
        }
    }

    /// Returns the corners in counter clockwise order.
    pub fn vertices(&self) -> [Point2<S>; 3] {
        self.vertices
    }

    /// Returns the center of the bounding box, which is also the triangle's circumcenter.
    pub fn center(&self) -> Point2<S> {
        self.center
    }

    /// Returns the super triangle as a shape.
    pub fn triangle(&self) -> Triangle<S> {
        let [v1, v2, v3] = self.vertices;
        Triangle::new(v1, v2, v3)
    }

    /// Unit vector pointing from the center towards a corner.
    pub(crate) fn direction(corner: usize) -> Point2<S> {
        let one = S::one();
        let two = one + one;
        let half_sqrt_3 = (one + two).sqrt() / two;
        match corner {
            0 => Point2::new(-half_sqrt_3, -one / two),
            1 => Point2::new(half_sqrt_3, -one / two),
            _ => Point2::new(S::zero(), one),
        }
    }

    /// Returns the orientation of three corners.
    ///
    /// The orientation of a triangle with corners at infinity is dominated by the corners'
    /// directions. Ties fall back to the position of the center.
    pub(crate) fn orientation(&self, corners: [Corner<S>; 3]) -> Orientation {
        match rotate(corners) {
            [Corner::Real(u), Corner::Real(v), Corner::Real(w)] => math::orientation(u, v, w),
            [Corner::Real(u), Corner::Real(v), Corner::AtInfinity(corner)] => {
                let leading = cross(v.sub(u), Self::direction(corner));
                if leading > S::zero() {
                    Orientation::CounterClockwise
                } else if leading < S::zero() {
                    Orientation::Clockwise
                } else {
                    math::orientation(u, v, self.center)
                }
            }
            [Corner::AtInfinity(i), Corner::AtInfinity(j), _] => {
                if i == j {
                    Orientation::Collinear
                } else if j == (i + 1) % 3 {
                    Orientation::CounterClockwise
                } else {
                    Orientation::Clockwise
                }
            }
            // Not produced by `rotate`
            _ => Orientation::Collinear,
        }
    }

    /// Returns the circumcircle of three counter clockwise corners.
    ///
    /// Fails if three real corners have no finite circumscribed circle.
    pub(crate) fn circumcircle(
        &self,
        corners: [Corner<S>; 3],
    ) -> Result<Circumcircle<S>, MeshError> {
        Ok(match rotate(corners) {
            [Corner::Real(u), Corner::Real(v), Corner::Real(w)] => {
                Triangle::new(u, v, w).try_circumscribed_circle()?;
                Circumcircle::Finite {
                    vertices: [u, v, w],
                }
            }
            [Corner::Real(from), Corner::Real(to), Corner::AtInfinity(_)] => {
                Circumcircle::HalfPlane { from, to }
            }
            [Corner::AtInfinity(i), Corner::AtInfinity(j), Corner::Real(apex)] => {
                // The three directions sum up to zero
                let opposite = 3 - i - j;
                Circumcircle::Apex {
                    apex,
                    opposite: Self::direction(opposite),
                    center: self.center,
                }
            }
            _ => Circumcircle::Unbounded,
        })
    }
}
