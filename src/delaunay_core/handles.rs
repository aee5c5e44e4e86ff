use std::marker::PhantomData;

/// Marker trait for [VertexTag] and [TriangleTag].
///
/// There should be no need to implement this.
pub trait HandleTag:
    Clone + Copy + PartialEq + Eq + PartialOrd + Ord + std::fmt::Debug + Default + std::hash::Hash
{
    /// Name used by the handle's `Debug` implementation.
    fn debug_string() -> &'static str;
}

/// Marker type for handles that refer to a vertex.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct VertexTag;

/// Marker type for handles that refer to a triangle.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct TriangleTag;

impl HandleTag for VertexTag {
    fn debug_string() -> &'static str {
        "Vertex"
    }
}

impl HandleTag for TriangleTag {
    fn debug_string() -> &'static str {
        "Triangle"
    }
}

/// Internal type definition that is only exposed for documentation purposes.
///
/// Use [FixedVertexHandle] and [FixedTriangleHandle] instead.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedHandleImpl<Type> {
    index: u32,
    ty: PhantomData<Type>,
}

/// Fixed handle to a vertex of a [Triangulation](crate::Triangulation).
///
/// Handles stay valid as long as the triangulation they were obtained from is alive.
pub type FixedVertexHandle = FixedHandleImpl<VertexTag>;

/// Fixed handle to a triangle of a [Triangulation](crate::Triangulation).
pub type FixedTriangleHandle = FixedHandleImpl<TriangleTag>;

impl<Type: HandleTag> std::fmt::Debug for FixedHandleImpl<Type> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(&format!("Fixed{}Handle", Type::debug_string()))
            .field("index", &self.index)
            .finish()
    }
}

impl<Type: HandleTag> FixedHandleImpl<Type> {
    /// Creates a handle from an index.
    ///
    /// Indices are stored as `u32`; triangulations check their size before creating
    /// handles.
    pub(crate) const fn new(index: usize) -> Self {
        Self {
            index: index as u32,
            ty: PhantomData,
        }
    }

    /// Returns the index this handle refers to.
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

/// The largest number of vertices a triangulation can hold, including the three synthetic
/// super triangle corners.
pub const MAX_VERTICES: usize = u32::MAX as usize;
