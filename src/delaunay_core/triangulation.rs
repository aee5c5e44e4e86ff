use hashbrown::HashMap;

use super::{FixedTriangleHandle, FixedVertexHandle, MeshVertex};
use crate::math;
use crate::primitives::{Shape, Triangle};
use crate::{MeshError, MeshNum, Point2, Tolerance};

/// A triangle of a [Triangulation], referring to its vertices by handle.
///
/// Vertices are ordered counter clockwise. Neighbor slot `i` holds the triangle across
/// the edge from vertex `i` to vertex `(i + 1) % 3`, or `None` for an edge on the convex
/// hull.
///
/// If the super triangle is kept, the order of triangles touching its corners is counter
/// clockwise for corners moved infinitely far away, not necessarily for their coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshTriangle {
    vertices: [FixedVertexHandle; 3],
    neighbors: [Option<FixedTriangleHandle>; 3],
}

impl MeshTriangle {
    pub(crate) fn new(vertices: [FixedVertexHandle; 3]) -> Self {
        Self {
            vertices,
            neighbors: [None; 3],
        }
    }

    /// Returns the vertex handles in counter clockwise order.
    pub fn vertices(&self) -> [FixedVertexHandle; 3] {
        self.vertices
    }

    /// Returns all three neighbor slots.
    pub fn neighbors(&self) -> [Option<FixedTriangleHandle>; 3] {
        self.neighbors
    }

    /// Returns the edges as vertex pairs, edge `i` starts at vertex `i`.
    pub fn edges(&self) -> [[FixedVertexHandle; 2]; 3] {
        let [v0, v1, v2] = self.vertices;
        [[v0, v1], [v1, v2], [v2, v0]]
    }

    /// Returns `true` if `vertex` is a corner of this triangle.
    pub fn has_vertex(&self, vertex: FixedVertexHandle) -> bool {
        self.vertices.contains(&vertex)
    }
}

fn undirected_key(from: FixedVertexHandle, to: FixedVertexHandle) -> [FixedVertexHandle; 2] {
    if from < to {
        [from, to]
    } else {
        [to, from]
    }
}

/// The result of triangulating a [MeshDomain](crate::MeshDomain).
///
/// A triangulation is a flat list of vertices and a flat list of triangles referring to
/// them by [FixedVertexHandle]. It is created fresh by every triangulation request and
/// does not change when the domain it was created from changes.
///
/// # Example
/// ```
/// use cavity_mesh::{MeshDomain, MeshError, Point2};
///
/// # fn main() -> Result<(), MeshError> {
/// let mut domain = MeshDomain::new();
/// domain.add_point(0.0, 0.0)?;
/// domain.add_point(1.0, 0.0)?;
/// domain.add_point(0.0, 1.0)?;
/// domain.add_point(1.0, 1.0)?;
///
/// let triangulation = domain.triangulate()?;
/// assert_eq!(triangulation.num_triangles(), 2);
///
/// let total_area: f64 = triangulation.shapes().map(|triangle| triangle.area()).sum();
/// assert!((total_area - 1.0).abs() < 1e-12);
///
/// let located = triangulation.locate(Point2::new(0.2, 0.1));
/// assert!(located.is_some());
/// # use cavity_mesh::Shape;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Triangulation<S> {
    vertices: Vec<MeshVertex<S>>,
    triangles: Vec<MeshTriangle>,
    tolerance: Tolerance<S>,
}

impl<S: MeshNum> Triangulation<S> {
    pub(crate) fn empty(tolerance: Tolerance<S>) -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            tolerance,
        }
    }

    pub(crate) fn from_parts(
        vertices: Vec<MeshVertex<S>>,
        triangles: Vec<MeshTriangle>,
        tolerance: Tolerance<S>,
    ) -> Self {
        Self {
            vertices,
            triangles,
            tolerance,
        }
    }

    /// Returns all vertices. The index of a vertex equals the index of its handle.
    pub fn vertices(&self) -> &[MeshVertex<S>] {
        &self.vertices
    }

    /// Returns a vertex.
    pub fn vertex(&self, handle: FixedVertexHandle) -> Result<&MeshVertex<S>, MeshError> {
        self.vertices
            .get(handle.index())
            .ok_or(MeshError::InvalidHandle {
                index: handle.index(),
            })
    }

    /// Iterates over all vertex handles.
    pub fn fixed_vertices(&self) -> impl Iterator<Item = FixedVertexHandle> {
        (0..self.vertices.len()).map(FixedVertexHandle::new)
    }

    /// Returns all triangles. The index of a triangle equals the index of its handle.
    pub fn triangles(&self) -> &[MeshTriangle] {
        &self.triangles
    }

    /// Returns a triangle.
    pub fn triangle(&self, handle: FixedTriangleHandle) -> Result<&MeshTriangle, MeshError> {
        self.triangles
            .get(handle.index())
            .ok_or(MeshError::InvalidHandle {
                index: handle.index(),
            })
    }

    /// Iterates over all triangle handles.
    pub fn fixed_triangles(&self) -> impl Iterator<Item = FixedTriangleHandle> {
        (0..self.triangles.len()).map(FixedTriangleHandle::new)
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if the triangulation contains no triangle.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns the tolerance used by [Self::locate] and [Self::find_vertex].
    pub fn tolerance(&self) -> &Tolerance<S> {
        &self.tolerance
    }

    /// Returns a triangle's geometry.
    pub fn shape(&self, handle: FixedTriangleHandle) -> Result<Triangle<S>, MeshError> {
        let triangle = self.triangle(handle)?;
        let [v0, v1, v2] = triangle.vertices;
        Ok(Triangle::new(
            self.vertex(v0)?.position(),
            self.vertex(v1)?.position(),
            self.vertex(v2)?.position(),
        ))
    }

    /// Iterates over the geometry of all triangles.
    pub fn shapes(&self) -> impl Iterator<Item = Triangle<S>> + '_ {
        self.triangles.iter().map(move |triangle| {
            let [v0, v1, v2] = triangle.vertices.map(|v| self.vertices[v.index()].position());
            Triangle::new(v0, v1, v2)
        })
    }

    /// Returns the sum of all triangle areas.
    pub fn total_area(&self) -> S {
        self.shapes()
            .fold(S::zero(), |sum, triangle| sum + triangle.area())
    }

    /// Returns the neighbor slots of a triangle.
    pub fn neighbors(
        &self,
        handle: FixedTriangleHandle,
    ) -> Result<[Option<FixedTriangleHandle>; 3], MeshError> {
        Ok(self.triangle(handle)?.neighbors)
    }

    /// Replaces the neighbor `old` of `triangle` with `new`.
    ///
    /// Fails with [MeshError::MissingNeighbor] if `old` is `None` (an empty slot cannot be
    /// identified) and with [MeshError::NeighborNotFound] if `old` is not a neighbor of
    /// `triangle`. The update is one-sided: the neighbor's own slots are not touched.
    pub fn set_neighbor(
        &mut self,
        triangle: FixedTriangleHandle,
        old: Option<FixedTriangleHandle>,
        new: Option<FixedTriangleHandle>,
    ) -> Result<(), MeshError> {
        let old = old.ok_or(MeshError::MissingNeighbor)?;
        if let Some(new) = new {
            self.triangle(new)?;
        }
        let num_triangles = self.triangles.len();
        let entry = self
            .triangles
            .get_mut(triangle.index())
            .ok_or(MeshError::InvalidHandle {
                index: triangle.index(),
            })?;
        if old.index() >= num_triangles {
            return Err(MeshError::InvalidHandle { index: old.index() });
        }
        let slot = entry
            .neighbors
            .iter_mut()
            .find(|slot| **slot == Some(old))
            .ok_or(MeshError::NeighborNotFound)?;
        *slot = new;
        Ok(())
    }

    /// Recomputes all neighbor slots from shared edges.
    pub fn rebuild_neighbors(&mut self) {
        let mut open_edges: HashMap<[FixedVertexHandle; 2], (usize, usize)> =
            HashMap::with_capacity(self.triangles.len() * 2);
        for triangle in &mut self.triangles {
            triangle.neighbors = [None; 3];
        }

        for index in 0..self.triangles.len() {
            let edges = self.triangles[index].edges();
            for (slot, [from, to]) in edges.into_iter().enumerate() {
                match open_edges.remove(&undirected_key(from, to)) {
                    Some((other, other_slot)) => {
                        self.triangles[index].neighbors[slot] =
                            Some(FixedTriangleHandle::new(other));
                        self.triangles[other].neighbors[other_slot] =
                            Some(FixedTriangleHandle::new(index));
                    }
                    None => {
                        open_edges.insert(undirected_key(from, to), (index, slot));
                    }
                }
            }
        }
    }

    /// Returns every undirected edge together with the number of triangles it borders.
    ///
    /// In a valid triangulation interior edges border two triangles and hull edges one.
    /// Edges are sorted by their vertex handles.
    pub fn undirected_edges(&self) -> Vec<([FixedVertexHandle; 2], usize)> {
        let mut multiplicity: HashMap<[FixedVertexHandle; 2], usize> = HashMap::new();
        for triangle in &self.triangles {
            for [from, to] in triangle.edges() {
                *multiplicity.entry(undirected_key(from, to)).or_default() += 1;
            }
        }
        let mut result: Vec<_> = multiplicity.into_iter().collect();
        result.sort_unstable();
        result
    }

    /// Returns the first triangle that contains `point` or has it on its boundary.
    pub fn locate(&self, point: Point2<S>) -> Option<FixedTriangleHandle> {
        self.shapes()
            .position(|triangle| triangle.contains_with(point, &self.tolerance).is_inside_or_on())
            .map(FixedTriangleHandle::new)
    }

    /// Returns the vertex at `(x, y)`, compared within tolerance.
    pub fn find_vertex(&self, x: S, y: S) -> Option<FixedVertexHandle> {
        let position = Point2::new(x, y);
        self.vertices
            .iter()
            .position(|vertex| vertex.position().approx_eq(position, &self.tolerance))
            .map(FixedVertexHandle::new)
    }

    /// Checks the triangulation's invariants and panics if one is broken.
    ///
    /// Checked are handle validity, counter clockwise orientation, edge multiplicity (at
    /// most two), neighbor symmetry and the empty circumcircle property. Synthetic vertices
    /// must not be referenced unless the super triangle was kept. Triangles touching a kept
    /// super triangle corner are exempt from the geometric checks since their corners are
    /// treated as infinitely far away. Runs in quadratic time.
    pub fn sanity_check(&self) {
        let keeps_super_triangle = self.vertices.iter().any(|vertex| vertex.is_synthetic());

        for triangle in &self.triangles {
            for vertex in triangle.vertices {
                assert!(vertex.index() < self.vertices.len());
                if !keeps_super_triangle {
                    assert!(!self.vertices[vertex.index()].is_synthetic());
                }
            }
        }

        for (edge, count) in self.undirected_edges() {
            assert!(count <= 2, "edge {:?} borders {} triangles", edge, count);
        }

        for (index, triangle) in self.triangles.iter().enumerate() {
            for (slot, neighbor) in triangle.neighbors.iter().enumerate() {
                let Some(neighbor) = neighbor else {
                    continue;
                };
                let other = &self.triangles[neighbor.index()];
                assert!(other
                    .neighbors
                    .contains(&Some(FixedTriangleHandle::new(index))));
                let [from, to] = triangle.edges()[slot];
                assert!(other.has_vertex(from) && other.has_vertex(to));
            }
        }

        let real_positions: Vec<_> = self
            .vertices
            .iter()
            .filter(|vertex| !vertex.is_synthetic())
            .map(|vertex| vertex.position())
            .collect();
        for (index, triangle) in self.triangles.iter().enumerate() {
            if triangle
                .vertices
                .iter()
                .any(|vertex| self.vertices[vertex.index()].is_synthetic())
            {
                continue;
            }
            let [v0, v1, v2] = triangle
                .vertices
                .map(|vertex| self.vertices[vertex.index()].position());
            assert_eq!(
                math::orientation(v0, v1, v2),
                math::Orientation::CounterClockwise,
                "triangle {} is not counter clockwise",
                index
            );
            for &position in &real_positions {
                assert!(
                    !math::in_circumcircle_exact(v0, v1, v2, position),
                    "{:?} lies inside the circumcircle of triangle {}",
                    position,
                    index
                );
            }
        }
    }
}
