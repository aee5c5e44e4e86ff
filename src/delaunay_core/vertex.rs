use crate::{MeshNum, Point2};

/// Distinguishes input vertices from the corners of the super triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VertexKind {
    /// An input vertex. Carries the index of the point in the input sequence.
    Real(usize),
    /// A corner of the super triangle.
    ///
    /// Only present in a [Triangulation](crate::Triangulation) created with
    /// [keep_super_triangle](crate::TriangulationParameters::keep_super_triangle).
    Synthetic,
}

impl VertexKind {
    /// Returns `true` for super triangle corners.
    pub fn is_synthetic(self) -> bool {
        self == VertexKind::Synthetic
    }

    /// Returns the input index of a real vertex.
    pub fn input_index(self) -> Option<usize> {
        match self {
            VertexKind::Real(index) => Some(index),
            VertexKind::Synthetic => None,
        }
    }
}

/// A vertex of a [Triangulation](crate::Triangulation).
#[derive(Debug, Clone, Copy)]
pub struct MeshVertex<S> {
    position: Point2<S>,
    kind: VertexKind,
}

impl<S: MeshNum> MeshVertex<S> {
    pub(crate) fn new(position: Point2<S>, kind: VertexKind) -> Self {
        Self { position, kind }
    }

    /// Returns the vertex position.
    pub fn position(&self) -> Point2<S> {
        self.position
    }

    /// Returns whether this vertex was part of the input.
    pub fn kind(&self) -> VertexKind {
        self.kind
    }

    /// Shorthand for `self.kind().is_synthetic()`.
    pub fn is_synthetic(&self) -> bool {
        self.kind.is_synthetic()
    }
}

impl<S: MeshNum> PartialEq for MeshVertex<S> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.position == other.position
    }
}
