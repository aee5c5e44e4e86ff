use crate::{MeshNum, Tolerance};

/// Scaling applied to the bounding circle's radius before the super triangle is built.
pub const DEFAULT_SUPER_TRIANGLE_MARGIN: f32 = 1.2;

/// Controls how a [MeshDomain](crate::MeshDomain) is triangulated.
///
/// The default parameters run the plain incremental algorithm: synthetic super triangle
/// corners are removed from the result and neighbor relations are rebuilt afterwards.
///
/// # Example
/// ```
/// use cavity_mesh::{MeshDomain, MeshError, Tolerance, TriangulationParameters};
///
/// # fn main() -> Result<(), MeshError> {
/// let mut domain = MeshDomain::new();
/// domain.add_polygon(&[0.0, 0.0, 4.0, 0.0, 4.0, 3.0, 0.0, 3.0])?;
///
/// let parameters = TriangulationParameters::new()
///     .with_tolerance(Tolerance::default().with_max_relative(1e-9))
///     .without_neighbors();
/// let triangulation = domain.triangulate_with(&parameters)?;
/// assert_eq!(triangulation.num_triangles(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulationParameters<S> {
    tolerance: Tolerance<S>,
    super_triangle_margin: S,
    keep_super_triangle: bool,
    build_neighbors: bool,
}

impl<S: MeshNum> Default for TriangulationParameters<S> {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            super_triangle_margin: DEFAULT_SUPER_TRIANGLE_MARGIN.into(),
            keep_super_triangle: false,
            build_neighbors: true,
        }
    }
}

impl<S: MeshNum> TriangulationParameters<S> {
    /// Creates a new set of `TriangulationParameters`.
    ///
    /// Refer to the [struct definition](Self) for more information.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specifies the tolerance used for duplicate suppression. The resulting
    /// [Triangulation](crate::Triangulation) uses it for `locate` and `find_vertex`.
    ///
    /// Defaults to [Tolerance::default].
    pub fn with_tolerance(mut self, tolerance: Tolerance<S>) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Specifies by how much the input's bounding circle is enlarged before the super
    /// triangle is built around it.
    ///
    /// Circle tests treat the corners as points at infinity, so the margin only changes the
    /// corner positions reported for a kept super triangle. Values below `1.0` are clamped
    /// to `1.0`.
    ///
    /// Defaults to `1.2`.
    pub fn with_super_triangle_margin(mut self, margin: S) -> Self {
        self.super_triangle_margin = margin.max(S::one());
        self
    }

    /// Keeps the super triangle's corners and all triangles referencing them in the
    /// result.
    ///
    /// Useful for inspecting the algorithm. The synthetic vertices are marked with
    /// [VertexKind::Synthetic](crate::VertexKind::Synthetic).
    pub fn keep_super_triangle(mut self) -> Self {
        self.keep_super_triangle = true;
        self
    }

    /// Skips rebuilding neighbor relations after triangulating.
    ///
    /// All neighbor slots of the result will be empty until
    /// [Triangulation::rebuild_neighbors](crate::Triangulation::rebuild_neighbors) is called.
    pub fn without_neighbors(mut self) -> Self {
        self.build_neighbors = false;
        self
    }

    /// Returns the configured tolerance.
    pub fn tolerance(&self) -> &Tolerance<S> {
        &self.tolerance
    }

    /// Returns the configured super triangle margin.
    pub fn super_triangle_margin(&self) -> S {
        self.super_triangle_margin
    }

    pub(crate) fn keeps_super_triangle(&self) -> bool {
        self.keep_super_triangle
    }

    pub(crate) fn builds_neighbors(&self) -> bool {
        self.build_neighbors
    }
}

#[cfg(test)]
mod test {
    use super::TriangulationParameters;
    use crate::Tolerance;

    #[test]
    fn test_defaults() {
        let parameters = TriangulationParameters::<f64>::new();
        assert_eq!(parameters.super_triangle_margin(), 1.2f32 as f64);
        assert_eq!(*parameters.tolerance(), Tolerance::default());
        assert!(!parameters.keeps_super_triangle());
        assert!(parameters.builds_neighbors());
    }

    #[test]
    fn test_builder() {
        let tolerance = Tolerance::default().with_max_absolute(1e-9);
        let parameters = TriangulationParameters::<f64>::new()
            .with_tolerance(tolerance)
            .with_super_triangle_margin(3.0)
            .keep_super_triangle()
            .without_neighbors();
        assert_eq!(*parameters.tolerance(), tolerance);
        assert_eq!(parameters.super_triangle_margin(), 3.0);
        assert!(parameters.keeps_super_triangle());
        assert!(!parameters.builds_neighbors());

        let clamped = TriangulationParameters::<f64>::new().with_super_triangle_margin(0.5);
        assert_eq!(clamped.super_triangle_margin(), 1.0);
    }
}
