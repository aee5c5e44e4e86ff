use tracing::trace;

use crate::delaunay_core;
use crate::primitives::{Polyline, Quad};
use crate::{math, MeshError, MeshNum, Point2, Tolerance, Triangulation, TriangulationParameters};

/// A polyline or polygon of a [MeshDomain], tagged with a region identifier.
#[derive(Debug, Clone)]
pub struct Boundary<S> {
    id: i32,
    polyline: Polyline<S>,
}

impl<S: MeshNum> Boundary<S> {
    /// Returns the region identifier. Lines and unlabeled shapes use region `0`.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Returns the boundary's geometry.
    pub fn polyline(&self) -> &Polyline<S> {
        &self.polyline
    }

    /// Shorthand for `self.polyline().is_closed()`.
    pub fn is_closed(&self) -> bool {
        self.polyline.is_closed()
    }
}

impl<S: MeshNum> PartialEq for Boundary<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.polyline == other.polyline
    }
}

/// Collects the input of a triangulation.
///
/// A domain accumulates points, lines, polylines and polygons. Points that are equal to an
/// earlier point within the domain's [Tolerance] are silently ignored. Every vertex of a
/// line or polygon is also added as a point, the shapes themselves are kept as
/// [Boundary] descriptions but do *not* constrain the triangulation.
///
/// The domain tracks the bounding box of all accepted points, which sizes the super
/// triangle once [Self::triangulate] is called.
///
/// Mutating a domain requires exclusive access while triangulating only borrows it. Use a
/// [Mutex](std::sync::Mutex) or [RwLock](std::sync::RwLock) if several threads feed the
/// same domain.
///
/// # Example
/// ```
/// use cavity_mesh::{MeshDomain, MeshError};
///
/// # fn main() -> Result<(), MeshError> {
/// let mut domain = MeshDomain::new();
/// assert!(domain.add_point(0.0, 0.0)?);
/// // Duplicates are ignored
/// assert!(!domain.add_point(0.0, 1e-14)?);
/// domain.add_line(1.0, 0.0, 0.5, 1.0)?;
///
/// let bounds = domain.bounds().unwrap();
/// assert_eq!(bounds.right(), 1.0);
///
/// let triangulation = domain.triangulate()?;
/// assert_eq!(triangulation.num_triangles(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MeshDomain<S> {
    points: Vec<Point2<S>>,
    boundaries: Vec<Boundary<S>>,
    bounds: Option<Quad<S>>,
    tolerance: Tolerance<S>,
}

impl<S: MeshNum> Default for MeshDomain<S> {
    fn default() -> Self {
        Self::with_tolerance(Tolerance::default())
    }
}

impl<S: MeshNum> MeshDomain<S> {
    /// Creates an empty domain that compares points with the default [Tolerance].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty domain that compares points with a custom tolerance.
    pub fn with_tolerance(tolerance: Tolerance<S>) -> Self {
        Self {
            points: Vec::new(),
            boundaries: Vec::new(),
            bounds: None,
            tolerance,
        }
    }

    /// Returns the tolerance used for duplicate detection.
    pub fn tolerance(&self) -> &Tolerance<S> {
        &self.tolerance
    }

    /// Adds a point.
    ///
    /// Returns `Ok(false)` if an equal point was added before, in which case the domain is
    /// not changed. Fails with [MeshError::InvalidCoordinate] for NaN or infinite
    /// coordinates.
    pub fn add_point(&mut self, x: S, y: S) -> Result<bool, MeshError> {
        let point = Point2::new(x, y);
        math::validate_point(point)?;
        Ok(self.insert_point(point))
    }

    fn insert_point(&mut self, point: Point2<S>) -> bool {
        if self
            .points
            .iter()
            .any(|existing| existing.approx_eq(point, &self.tolerance))
        {
            trace!(?point, "ignoring duplicate input point");
            return false;
        }
        self.points.push(point);
        self.bounds = Some(match self.bounds {
            Some(bounds) => bounds.add_point(point),
            None => Quad::from_point(point),
        });
        true
    }

    /// Adds a line segment from `(x1, y1)` to `(x2, y2)` to region `0`.
    pub fn add_line(&mut self, x1: S, y1: S, x2: S, y2: S) -> Result<(), MeshError> {
        self.add_boundary(0, false, &[x1, y1, x2, y2])
    }

    /// Adds an open polyline to region `0`.
    ///
    /// `coordinates` holds the vertices as `[x1, y1, x2, y2, ...]`.
    pub fn add_polyline(&mut self, coordinates: &[S]) -> Result<(), MeshError> {
        self.add_boundary(0, false, coordinates)
    }

    /// Adds a closed polygon to region `0`.
    ///
    /// `coordinates` holds the vertices as `[x1, y1, x2, y2, ...]`.
    pub fn add_polygon(&mut self, coordinates: &[S]) -> Result<(), MeshError> {
        self.add_boundary(0, true, coordinates)
    }

    /// Adds a closed polygon to the region `id`.
    pub fn add_polygon_with_id(&mut self, id: i32, coordinates: &[S]) -> Result<(), MeshError> {
        self.add_boundary(id, true, coordinates)
    }

    /// Adds a polyline or polygon to the region `id`.
    ///
    /// Fails without changing the domain if `coordinates` has odd length
    /// ([MeshError::OddCoordinateCount]), contains less than two vertices
    /// ([MeshError::TooFewVertices]) or contains NaN or infinite values.
    /// Several boundaries may share the same region.
    pub fn add_boundary(
        &mut self,
        id: i32,
        closed: bool,
        coordinates: &[S],
    ) -> Result<(), MeshError> {
        for value in coordinates {
            math::validate_coordinate(*value)?;
        }
        let polyline = Polyline::from_coordinates(closed, coordinates)?;
        for vertex in polyline.vertices() {
            self.insert_point(*vertex);
        }
        self.boundaries.push(Boundary { id, polyline });
        Ok(())
    }

    /// Returns all accepted points in insertion order.
    pub fn points(&self) -> &[Point2<S>] {
        &self.points
    }

    /// Returns all boundaries in insertion order.
    pub fn boundaries(&self) -> &[Boundary<S>] {
        &self.boundaries
    }

    /// Iterates over the boundaries of a region.
    pub fn region(&self, id: i32) -> impl Iterator<Item = &Polyline<S>> + '_ {
        self.boundaries
            .iter()
            .filter(move |boundary| boundary.id == id)
            .map(|boundary| &boundary.polyline)
    }

    /// Returns the bounding box of all points, `None` for an empty domain.
    pub fn bounds(&self) -> Option<Quad<S>> {
        self.bounds
    }

    /// Returns the number of accepted points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no point has been added.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Removes all points and boundaries.
    pub fn clear(&mut self) {
        self.points.clear();
        self.boundaries.clear();
        self.bounds = None;
    }

    /// Triangulates all points with default [TriangulationParameters], using the domain's
    /// tolerance.
    pub fn triangulate(&self) -> Result<Triangulation<S>, MeshError> {
        self.triangulate_with(&TriangulationParameters::new().with_tolerance(self.tolerance))
    }

    /// Triangulates all points.
    ///
    /// An empty domain results in an empty triangulation. Less than three non collinear
    /// points never produce a triangle.
    pub fn triangulate_with(
        &self,
        parameters: &TriangulationParameters<S>,
    ) -> Result<Triangulation<S>, MeshError> {
        match &self.bounds {
            Some(bounds) => delaunay_core::triangulate(&self.points, bounds, parameters),
            None => Triangulation::from_points(&[], parameters),
        }
    }
}
