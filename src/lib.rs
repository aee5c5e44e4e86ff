//! # cavity_mesh
//! Incremental 2D Delaunay triangulation of point sets.
//!
//! Input points, lines and polygons are collected in a [MeshDomain]. Triangulating the
//! domain inserts every point one after another into a triangulation that is bootstrapped
//! from a large synthetic *super triangle*. Each insertion removes all triangles whose
//! circumscribed circle contains the new point (the *cavity*) and connects the cavity's
//! outline to the new point. Finally, the super triangle's corners and every triangle
//! touching them are removed.
//!
//! Circle tests run on exact predicates, and the super triangle's corners behave as if they
//! were infinitely far away. The result is the Delaunay triangulation of the input and
//! covers its convex hull.
//!
//! # Features
//!  * Immutable geometric [primitives] with a uniform [Shape] interface and a tolerant
//!    three-way point classification ([PointShapeRelation])
//!  * Configurable approximate equality ([Tolerance]) with `1e-6` relative and `1e-12`
//!    absolute default thresholds
//!  * Degenerate (collinear or inverted) triangles are reported as
//!    [MeshError::DegenerateTriangle] instead of propagating NaN circles
//!  * Generic over the coordinate type, `f32` and `f64` are supported out of the box
//!
//! # Example
//! ```
//! use cavity_mesh::{MeshDomain, MeshError, Shape};
//!
//! # fn main() -> Result<(), MeshError> {
//! let mut domain = MeshDomain::new();
//! domain.add_polygon(&[0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0])?;
//! domain.add_point(1.0, 0.8)?;
//!
//! let triangulation = domain.triangulate()?;
//! assert_eq!(triangulation.num_vertices(), 5);
//! assert_eq!(triangulation.num_triangles(), 4);
//! for triangle in triangulation.shapes() {
//!     println!("{:?} with area {}", triangle.vertices(), triangle.area());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//! Triangulation progress is reported through the [tracing](https://docs.rs/tracing) crate.
//! No subscriber is installed by this crate.

#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(missing_docs)]

mod delaunay_core;
mod domain;
mod error;
mod parameters;
mod point;
mod tolerance;

pub mod math;
pub mod primitives;

pub use crate::delaunay_core::{
    MeshTriangle, MeshVertex, SuperTriangle, Triangulation, VertexKind, MAX_VERTICES,
};
pub use crate::domain::{Boundary, MeshDomain};
pub use crate::error::MeshError;
pub use crate::parameters::{TriangulationParameters, DEFAULT_SUPER_TRIANGLE_MARGIN};
pub use crate::point::{MeshNum, Point2};
pub use crate::primitives::{PointShapeRelation, Shape};
pub use crate::tolerance::{Tolerance, DEFAULT_MAX_ABSOLUTE, DEFAULT_MAX_RELATIVE};

/// Handle types used by [Triangulation].
///
/// Handles are lightweight references into a triangulation's vertex and triangle lists.
pub mod handles {
    pub use crate::delaunay_core::{
        FixedHandleImpl, FixedTriangleHandle, FixedVertexHandle, HandleTag, TriangleTag,
        VertexTag,
    };
}

#[cfg(test)]
mod test_utilities;
