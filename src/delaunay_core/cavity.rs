use smallvec::SmallVec;

use super::FixedVertexHandle;
use crate::math::{self, Orientation};
use crate::primitives::PointShapeRelation;
use crate::{MeshNum, Point2};

/// The circumscribed circle of a triangle that is currently being built.
///
/// Circles of triangles with super triangle corners are the limits for corners infinitely far
/// away: a half plane for one such corner, the region beyond the real corner for two of them.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Circumcircle<S> {
    /// The super triangle itself, it encloses everything.
    Unbounded,
    /// The circle through three real, counter clockwise vertices.
    Finite { vertices: [Point2<S>; 3] },
    /// The open half plane left of `from -> to`, including the open edge itself.
    HalfPlane { from: Point2<S>, to: Point2<S> },
    /// Points beyond `apex` when looking away from the corner in direction `opposite`. Ties
    /// are decided by the distance to `center`.
    Apex {
        apex: Point2<S>,
        opposite: Point2<S>,
        center: Point2<S>,
    },
}

impl<S: MeshNum> Circumcircle<S> {
    /// Classifies `point` with exact predicates, no tolerance is applied.
    pub fn classify(&self, point: Point2<S>) -> PointShapeRelation {
        match *self {
            Circumcircle::Unbounded => PointShapeRelation::Inside,
            Circumcircle::Finite { vertices: [v0, v1, v2] } => {
                math::circumcircle_relation_exact(v0, v1, v2, point)
            }
            Circumcircle::HalfPlane { from, to } => match math::orientation(from, to, point) {
                Orientation::CounterClockwise => PointShapeRelation::Inside,
                Orientation::Clockwise => PointShapeRelation::Outside,
                Orientation::Collinear => {
                    let edge = to.sub(from);
                    let offset = point.dot(edge);
                    let start = from.dot(edge);
                    let end = to.dot(edge);
                    if offset > start && offset < end {
                        PointShapeRelation::Inside
                    } else {
                        PointShapeRelation::Outside
                    }
                }
            },
            Circumcircle::Apex {
                apex,
                opposite,
                center,
            } => {
                let beyond = point.sub(apex).dot(opposite);
                if beyond < S::zero() {
                    PointShapeRelation::Inside
                } else if beyond > S::zero() {
                    PointShapeRelation::Outside
                } else {
                    let distance = point.distance_2(center);
                    let apex_distance = apex.distance_2(center);
                    if distance < apex_distance {
                        PointShapeRelation::Inside
                    } else if distance > apex_distance {
                        PointShapeRelation::Outside
                    } else {
                        PointShapeRelation::On
                    }
                }
            }
        }
    }
}

/// A triangle of the triangulation that is currently being built.
///
/// Vertices are stored counter clockwise, the circumscribed circle is set up once when the
/// triangle is created.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ActiveTriangle<S> {
    pub vertices: [FixedVertexHandle; 3],
    pub circumcircle: Circumcircle<S>,
}

impl<S: MeshNum> ActiveTriangle<S> {
    /// Returns `true` if `point` lies inside or on the circumscribed circle.
    fn is_encroached_by(&self, point: Point2<S>) -> bool {
        self.circumcircle.classify(point) != PointShapeRelation::Outside
    }
}

/// The outline of a cavity.
///
/// Edges are undirected for matching purposes but keep the direction they had in the first
/// triangle that contributed them. Adding an edge that is already present removes it
/// instead: an edge shared by two cavity triangles lies inside the cavity.
#[derive(Debug, Clone, Default)]
pub(crate) struct CavityBoundary {
    edges: SmallVec<[[FixedVertexHandle; 2]; 16]>,
}

impl CavityBoundary {
    pub fn toggle(&mut self, from: FixedVertexHandle, to: FixedVertexHandle) {
        let existing = self
            .edges
            .iter()
            .position(|&[a, b]| (a == from && b == to) || (a == to && b == from));
        match existing {
            Some(position) => {
                self.edges.remove(position);
            }
            None => self.edges.push([from, to]),
        }
    }

    pub fn add_triangle(&mut self, [v0, v1, v2]: [FixedVertexHandle; 3]) {
        self.toggle(v0, v1);
        self.toggle(v1, v2);
        self.toggle(v2, v0);
    }

    pub fn edges(&self) -> &[[FixedVertexHandle; 2]] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// The triangles encroached by a new vertex, removed from the working list.
#[derive(Debug, Clone)]
pub(crate) struct Cavity {
    pub num_removed: usize,
    pub boundary: CavityBoundary,
}

impl Cavity {
    /// Scans every active triangle and removes those whose circumscribed circle contains
    /// `point` or passes through it. Their edges are accumulated into the cavity boundary.
    pub fn collect<S: MeshNum>(active: &mut Vec<ActiveTriangle<S>>, point: Point2<S>) -> Self {
        let mut boundary = CavityBoundary::default();
        let mut num_removed = 0;
        active.retain(|triangle| {
            if triangle.is_encroached_by(point) {
                boundary.add_triangle(triangle.vertices);
                num_removed += 1;
                false
            } else {
                true
            }
        });
        Self {
            num_removed,
            boundary,
        }
    }
}
