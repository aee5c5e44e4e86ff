use thiserror::Error;

use crate::{MeshNum, Point2};

/// The error type used by mesh domains, shapes and triangulations.
///
/// Duplicate input is *not* an error: points equal within the configured tolerance are
/// silently absorbed by [MeshDomain](crate::MeshDomain).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A flat coordinate array did not contain an `x` and a `y` value for every vertex.
    #[error("input coordinates must contain two values (x then y) for each vertex, got {count}")]
    OddCoordinateCount {
        /// Number of values that were passed in.
        count: usize,
    },

    /// A polyline was created from fewer than two vertices.
    #[error("a polyline needs at least two vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices that were passed in.
        count: usize,
    },

    /// A coordinate was NaN or infinite.
    #[error("invalid coordinate value: {value}")]
    InvalidCoordinate {
        /// The offending value, converted to `f64`.
        value: f64,
    },

    /// A neighbor update named a triangle that is not a neighbor.
    #[error("neighbor not found")]
    NeighborNotFound,

    /// A neighbor update named "no neighbor" as the neighbor to replace.
    #[error("the neighbor to replace must not be empty")]
    MissingNeighbor,

    /// The input holds more points than a triangulation can address with its handles.
    #[error(
        "cannot triangulate {count} points, at most {} are supported",
        crate::MAX_VERTICES - 3
    )]
    TooManyVertices {
        /// Number of points that were passed in.
        count: usize,
    },

    /// A handle does not refer to an element of the triangulation.
    #[error("handle {index} is out of bounds")]
    InvalidHandle {
        /// The index stored in the handle.
        index: usize,
    },

    /// Three vertices are collinear or not counter clockwise, no valid triangle exists.
    ///
    /// Reported instead of propagating NaN or infinite circles into later encroachment tests
    /// or emitting folded triangles.
    #[error("degenerate triangle {vertices:?}: vertices are collinear or clockwise")]
    DegenerateTriangle {
        /// The triangle's vertex positions, converted to `f64`.
        vertices: [[f64; 2]; 3],
    },
}

impl MeshError {
    pub(crate) fn degenerate_triangle<S: MeshNum>(vertices: [Point2<S>; 3]) -> Self {
        MeshError::DegenerateTriangle {
            vertices: vertices.map(|vertex| {
                let vertex = vertex.to_f64();
                [vertex.x, vertex.y]
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::MeshError;
    use crate::{Point2, MAX_VERTICES};

    #[test]
    fn test_messages() {
        let error = MeshError::TooManyVertices {
            count: MAX_VERTICES,
        };
        assert_eq!(
            error.to_string(),
            format!(
                "cannot triangulate {} points, at most {} are supported",
                MAX_VERTICES,
                MAX_VERTICES - 3
            )
        );

        let error = MeshError::degenerate_triangle([
            Point2::new(0.0f32, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ]);
        assert_eq!(
            error,
            MeshError::DegenerateTriangle {
                vertices: [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]
            }
        );
    }
}
