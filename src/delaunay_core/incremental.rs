use tracing::{debug, trace};

use super::cavity::{ActiveTriangle, Cavity};
use super::handles::MAX_VERTICES;
use super::super_triangle::Corner;
use super::{
    FixedVertexHandle, MeshTriangle, MeshVertex, SuperTriangle, Triangulation, VertexKind,
};
use crate::math::{self, Orientation};
use crate::primitives::Quad;
use crate::{MeshError, MeshNum, Point2, Tolerance, TriangulationParameters};

const NUM_SYNTHETIC_VERTICES: usize = 3;

fn check_capacity(num_points: usize) -> Result<(), MeshError> {
    if num_points > MAX_VERTICES - NUM_SYNTHETIC_VERTICES {
        Err(MeshError::TooManyVertices { count: num_points })
    } else {
        Ok(())
    }
}

fn corner<S: MeshNum>(vertices: &[MeshVertex<S>], handle: FixedVertexHandle) -> Corner<S> {
    let vertex = &vertices[handle.index()];
    if vertex.is_synthetic() {
        Corner::AtInfinity(handle.index())
    } else {
        Corner::Real(vertex.position())
    }
}

/// Runs the incremental cavity insertion over `points` in the given order.
///
/// `bounds` must contain every point; it sizes the super triangle.
pub(crate) fn triangulate<S: MeshNum>(
    points: &[Point2<S>],
    bounds: &Quad<S>,
    parameters: &TriangulationParameters<S>,
) -> Result<Triangulation<S>, MeshError> {
    let tolerance = *parameters.tolerance();
    if points.is_empty() {
        return Ok(Triangulation::empty(tolerance));
    }
    check_capacity(points.len())?;

    debug!(num_points = points.len(), "starting triangulation");

    let super_triangle = SuperTriangle::from_bounds(bounds, parameters.super_triangle_margin());
    let mut vertices: Vec<MeshVertex<S>> = super_triangle
        .vertices()
        .into_iter()
        .map(|position| MeshVertex::new(position, VertexKind::Synthetic))
        .collect();
    vertices.reserve(points.len());

    let initial = [0, 1, 2].map(FixedVertexHandle::new);
    let mut active = vec![ActiveTriangle {
        vertices: initial,
        circumcircle: super_triangle.circumcircle(initial.map(|h| corner(&vertices, h)))?,
    }];

    for (index, &point) in points.iter().enumerate() {
        if vertices[NUM_SYNTHETIC_VERTICES..]
            .iter()
            .any(|vertex| vertex.position().approx_eq(point, &tolerance))
        {
            debug!(index, ?point, "skipping duplicate vertex");
            continue;
        }

        let handle = FixedVertexHandle::new(vertices.len());
        vertices.push(MeshVertex::new(point, VertexKind::Real(index)));

        let cavity = Cavity::collect(&mut active, point);
        trace!(
            index,
            ?point,
            encroached = cavity.num_removed,
            boundary = cavity.boundary.len(),
            "inserting vertex"
        );

        for &[from, to] in cavity.boundary.edges() {
            let triangle = [from, to, handle];
            let corners = triangle.map(|vertex| corner(&vertices, vertex));
            let circumcircle = if super_triangle.orientation(corners)
                == Orientation::CounterClockwise
            {
                super_triangle.circumcircle(corners)
            } else {
                Err(MeshError::degenerate_triangle(
                    triangle.map(|vertex| vertices[vertex.index()].position()),
                ))
            };
            match circumcircle {
                Ok(circumcircle) => active.push(ActiveTriangle {
                    vertices: triangle,
                    circumcircle,
                }),
                Err(error) => {
                    debug!(index, ?point, %error, "rejecting degenerate triangle");
                    return Err(error);
                }
            }
        }
    }

    let mut result = if parameters.keeps_super_triangle() {
        let triangles = active
            .iter()
            .map(|triangle| MeshTriangle::new(triangle.vertices))
            .collect();
        Triangulation::from_parts(vertices, triangles, tolerance)
    } else {
        strip_super_triangle(vertices, &active, tolerance)
    };

    if parameters.builds_neighbors() {
        result.rebuild_neighbors();
    }

    debug!(
        num_vertices = result.num_vertices(),
        num_triangles = result.num_triangles(),
        "finished triangulation"
    );
    Ok(result)
}

/// Removes the synthetic corners and every triangle referring to one of them.
///
/// The synthetic vertices occupy the first three slots, every remaining handle is shifted
/// accordingly.
fn strip_super_triangle<S: MeshNum>(
    mut vertices: Vec<MeshVertex<S>>,
    active: &[ActiveTriangle<S>],
    tolerance: Tolerance<S>,
) -> Triangulation<S> {
    let triangles = active
        .iter()
        .filter(|triangle| {
            triangle
                .vertices
                .iter()
                .all(|vertex| !vertices[vertex.index()].is_synthetic())
        })
        .map(|triangle| {
            MeshTriangle::new(
                triangle
                    .vertices
                    .map(|vertex| FixedVertexHandle::new(vertex.index() - NUM_SYNTHETIC_VERTICES)),
            )
        })
        .collect();
    vertices.drain(..NUM_SYNTHETIC_VERTICES);
    Triangulation::from_parts(vertices, triangles, tolerance)
}

impl<S: MeshNum> Triangulation<S> {
    /// Triangulates a sequence of points with the given parameters.
    ///
    /// Points are inserted in order. Points equal within tolerance to an earlier point are
    /// skipped; [VertexKind::Real] holds the index of each vertex within `points`.
    ///
    /// This is the engine behind [MeshDomain::triangulate](crate::MeshDomain::triangulate)
    /// for callers that already hold their input in a slice.
    pub fn from_points(
        points: &[Point2<S>],
        parameters: &TriangulationParameters<S>,
    ) -> Result<Self, MeshError> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(Self::empty(*parameters.tolerance()));
        };
        math::validate_point(*first)?;
        let mut bounds = Quad::from_point(*first);
        for point in rest {
            math::validate_point(*point)?;
            bounds = bounds.add_point(*point);
        }
        triangulate(points, &bounds, parameters)
    }
}
