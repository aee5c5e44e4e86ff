mod cavity;
mod handles;
mod incremental;
mod super_triangle;
mod triangulation;
mod vertex;

pub(crate) use incremental::triangulate;

pub use handles::{
    FixedHandleImpl, FixedTriangleHandle, FixedVertexHandle, HandleTag, TriangleTag, VertexTag,
    MAX_VERTICES,
};
pub use super_triangle::SuperTriangle;
pub use triangulation::{MeshTriangle, Triangulation};
pub use vertex::{MeshVertex, VertexKind};
