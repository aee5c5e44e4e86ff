use super::{Circle, PointShapeRelation, Segment, Shape};
use crate::{math, MeshError, MeshNum, Point2, Tolerance};

/// An ordered sequence of at least two points, either open or closed.
///
/// A closed polyline connects its last vertex back to the first one and encloses a
/// region. Open polylines have no interior: [Shape::contains] only ever reports
/// [PointShapeRelation::On] or [PointShapeRelation::Outside] for them.
#[derive(Debug, Clone)]
pub struct Polyline<S> {
    vertices: Vec<Point2<S>>,
    closed: bool,
    centroid: Point2<S>,
    perimeter: S,
    area: S,
}

impl<S: MeshNum> Polyline<S> {
    /// Creates a new polyline.
    ///
    /// Returns [MeshError::TooFewVertices] if less than two vertices are given.
    pub fn new(closed: bool, vertices: Vec<Point2<S>>) -> Result<Self, MeshError> {
        if vertices.len() < 2 {
            return Err(MeshError::TooFewVertices {
                count: vertices.len(),
            });
        }

        let mut result = Self {
            vertices,
            closed,
            centroid: Point2::new(S::zero(), S::zero()),
            perimeter: S::zero(),
            area: S::zero(),
        };

        let count: S = (result.vertices.len() as f32).into();
        result.centroid = result
            .vertices
            .iter()
            .fold(Point2::new(S::zero(), S::zero()), |sum, v| sum.add(*v))
            .div(count);
        result.perimeter = result
            .segments()
            .fold(S::zero(), |sum, segment| sum + segment.length());
        if closed {
            result.area = shoelace(&result.vertices).abs();
        }
        Ok(result)
    }

    /// Creates a polyline from a flat `[x1, y1, x2, y2, ...]` coordinate list.
    pub fn from_coordinates(closed: bool, coordinates: &[S]) -> Result<Self, MeshError> {
        if coordinates.len() % 2 != 0 {
            return Err(MeshError::OddCoordinateCount {
                count: coordinates.len(),
            });
        }
        let vertices = coordinates
            .chunks_exact(2)
            .map(|xy| Point2::new(xy[0], xy[1]))
            .collect();
        Self::new(closed, vertices)
    }

    /// Returns the vertices in order.
    pub fn vertices(&self) -> &[Point2<S>] {
        &self.vertices
    }

    /// Returns `true` if the last vertex is connected to the first one.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`, a polyline has at least two vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over all consecutive vertex pairs, including the closing segment of a
    /// closed polyline.
    pub fn segments(&self) -> impl Iterator<Item = Segment<S>> + '_ {
        let closing = if self.closed && self.vertices.len() > 2 {
            self.vertices
                .last()
                .zip(self.vertices.first())
                .map(|(last, first)| Segment::new(*last, *first))
        } else {
            None
        };
        self.vertices
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .chain(closing)
    }

    /// Returns the vertex average.
    pub fn centroid(&self) -> Point2<S> {
        self.centroid
    }

    /// Returns the enclosed area with its winding sign: positive for counter clockwise
    /// vertex order. Zero for open polylines.
    pub fn signed_area(&self) -> S {
        if self.closed {
            shoelace(&self.vertices)
        } else {
            S::zero()
        }
    }
}

fn shoelace<S: MeshNum>(vertices: &[Point2<S>]) -> S {
    let two = S::one() + S::one();
    let mut sum = S::zero();
    for (i, v) in vertices.iter().enumerate() {
        let next = vertices[(i + 1) % vertices.len()];
        sum = sum + math::determinant_2x2(v.x, v.y, next.x, next.y);
    }
    sum / two
}

impl<S: MeshNum> PartialEq for Polyline<S> {
    fn eq(&self, other: &Self) -> bool {
        self.closed == other.closed && self.vertices == other.vertices
    }
}

impl<S: MeshNum> Shape<S> for Polyline<S> {
    fn midpoint(&self) -> Point2<S> {
        self.centroid
    }

    fn perimeter(&self) -> S {
        self.perimeter
    }

    fn area(&self) -> S {
        self.area
    }

    fn circumscribed_circle(&self) -> Option<Circle<S>> {
        let radius = self
            .vertices
            .iter()
            .map(|v| self.centroid.distance(*v))
            .fold(S::zero(), S::max);
        Some(Circle::new(self.centroid, radius))
    }

    fn contains_with(&self, point: Point2<S>, tolerance: &Tolerance<S>) -> PointShapeRelation {
        if self
            .segments()
            .any(|segment| segment.contains_with(point, tolerance) == PointShapeRelation::On)
        {
            return PointShapeRelation::On;
        }
        if !self.closed || self.vertices.len() < 3 {
            return PointShapeRelation::Outside;
        }

        // Even-odd rule: count the edges crossing the ray from `point` towards +x. The side
        // of each crossing edge is decided by the sign of its sub-triangle area.
        let mut crossings = 0usize;
        for segment in self.segments() {
            let [from, to] = segment.vertices();
            let area = math::signed_triangle_area(from, to, point);
            let upwards = from.y <= point.y && to.y > point.y && area > S::zero();
            let downwards = from.y > point.y && to.y <= point.y && area < S::zero();
            if upwards || downwards {
                crossings += 1;
            }
        }

        if crossings % 2 == 1 {
            PointShapeRelation::Inside
        } else {
            PointShapeRelation::Outside
        }
    }
}

#[cfg(test)]
mod test {
    use super::Polyline;
    use crate::{MeshError, Point2, PointShapeRelation, Shape};
    use approx::assert_relative_eq;

    fn square(closed: bool) -> Result<Polyline<f64>, MeshError> {
        Polyline::from_coordinates(closed, &[0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0])
    }

    #[test]
    fn test_too_few_vertices() {
        assert_eq!(
            Polyline::<f64>::new(false, vec![Point2::new(1.0, 1.0)]),
            Err(MeshError::TooFewVertices { count: 1 })
        );
        assert_eq!(
            Polyline::from_coordinates(true, &[0.0, 0.0, 1.0]),
            Err(MeshError::OddCoordinateCount { count: 3 })
        );
    }

    #[test]
    fn test_measures() -> Result<(), MeshError> {
        let closed = square(true)?;
        assert_eq!(closed.segments().count(), 4);
        assert_relative_eq!(closed.perimeter(), 8.0);
        assert_relative_eq!(closed.area(), 4.0);
        assert_relative_eq!(closed.signed_area(), 4.0);
        assert_eq!(closed.centroid(), Point2::new(1.0, 1.0));

        let open = square(false)?;
        assert_eq!(open.segments().count(), 3);
        assert_relative_eq!(open.perimeter(), 6.0);
        assert_eq!(open.area(), 0.0);

        let clockwise =
            Polyline::from_coordinates(true, &[0.0, 0.0, 0.0, 2.0, 2.0, 2.0, 2.0, 0.0])?;
        assert_relative_eq!(clockwise.area(), 4.0);
        assert_relative_eq!(clockwise.signed_area(), -4.0);
        Ok(())
    }

    #[test]
    fn test_two_vertices_closed() -> Result<(), MeshError> {
        let line = Polyline::from_coordinates(true, &[0.0, 0.0, 3.0, 4.0])?;
        assert_eq!(line.segments().count(), 1);
        assert_relative_eq!(line.perimeter(), 5.0);
        assert_eq!(line.area(), 0.0);
        assert_eq!(line.contains(Point2::new(1.5, 2.0)), PointShapeRelation::On);
        Ok(())
    }

    #[test]
    fn test_circumscribed_circle() -> Result<(), MeshError> {
        let closed = square(true)?;
        let circle = closed.circumscribed_circle().unwrap();
        assert_eq!(circle.center(), Point2::new(1.0, 1.0));
        assert_relative_eq!(circle.radius(), 2.0f64.sqrt());
        for v in closed.vertices() {
            assert!(circle.contains(*v).is_inside_or_on());
        }
        Ok(())
    }

    #[test]
    fn test_contains() -> Result<(), MeshError> {
        let closed = square(true)?;
        assert_eq!(closed.contains(Point2::new(1.0, 1.0)), PointShapeRelation::Inside);
        assert_eq!(closed.contains(Point2::new(0.0, 1.0)), PointShapeRelation::On);
        assert_eq!(closed.contains(Point2::new(2.0, 2.0)), PointShapeRelation::On);
        assert_eq!(closed.contains(Point2::new(3.0, 1.0)), PointShapeRelation::Outside);
        assert_eq!(closed.contains(Point2::new(-1.0, 2.0)), PointShapeRelation::Outside);

        let open = square(false)?;
        assert_eq!(open.contains(Point2::new(1.0, 1.0)), PointShapeRelation::Outside);
        assert_eq!(open.contains(Point2::new(1.0, 2.0)), PointShapeRelation::On);
        // The missing closing segment
        assert_eq!(open.contains(Point2::new(0.0, 1.0)), PointShapeRelation::Outside);
        Ok(())
    }

    #[test]
    fn test_contains_concave() -> Result<(), MeshError> {
        // A "U" shape opening upwards
        let u = Polyline::from_coordinates(
            true,
            &[0.0, 0.0, 3.0, 0.0, 3.0, 3.0, 2.0, 3.0, 2.0, 1.0, 1.0, 1.0, 1.0, 3.0, 0.0, 3.0],
        )?;
        assert_eq!(u.contains(Point2::new(0.5, 2.0)), PointShapeRelation::Inside);
        assert_eq!(u.contains(Point2::new(2.5, 2.0)), PointShapeRelation::Inside);
        assert_eq!(u.contains(Point2::new(1.5, 0.5)), PointShapeRelation::Inside);
        assert_eq!(u.contains(Point2::new(1.5, 2.0)), PointShapeRelation::Outside);
        assert_eq!(u.contains(Point2::new(1.5, 1.0)), PointShapeRelation::On);
        assert_relative_eq!(u.area(), 7.0);
        Ok(())
    }

    #[test]
    fn test_contains_self_intersecting() -> Result<(), MeshError> {
        // A pentagram, its center is covered twice and reported outside by the even-odd rule
        let star: Vec<_> = (0..5)
            .map(|i| {
                let angle =
                    std::f64::consts::FRAC_PI_2 + i as f64 * 4.0 * std::f64::consts::PI / 5.0;
                Point2::new(angle.cos(), angle.sin())
            })
            .collect();
        let star = Polyline::new(true, star)?;
        assert_eq!(star.contains(Point2::new(0.0, 0.0)), PointShapeRelation::Outside);
        assert_eq!(star.contains(Point2::new(0.0, 0.8)), PointShapeRelation::Inside);
        Ok(())
    }
}
