#![allow(missing_docs)]
use crate::math::{self, Orientation};
use crate::Point2;
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;

pub const SEED: &[u8; 32] = b"wPYxAkIiHcEmSBAxQFoXFrpYToCe1B71";
pub const SEED2: &[u8; 32] = b"14LzG37Y9EHTcmLW8vBDqWwtYsCeVVyF";

pub fn random_points_in_range(range: f64, size: usize, seed: &[u8; 32]) -> Vec<Point2<f64>> {
    let mut rng = rand::rngs::StdRng::from_seed(*seed);
    let range = Uniform::new(-range, range);
    let mut points = Vec::with_capacity(size);
    for _ in 0..size {
        let x = range.sample(&mut rng);
        let y = range.sample(&mut rng);
        points.push(Point2::new(x, y));
    }
    points
}

pub fn random_points_with_seed(size: usize, seed: &[u8; 32]) -> Vec<Point2<f64>> {
    random_points_in_range(1.0, size, seed)
}

/// The corners of a regular polygon inscribed in the unit circle, followed by random points
/// within radius 0.5. Each corner's radius is moved by up to `jitter`, so the hull is the
/// polygon itself as long as `jitter` is small against the polygon's sagitta.
pub fn ring_with_interior(
    num_corners: usize,
    jitter: f64,
    num_interior: usize,
    seed: &[u8; 32],
) -> Vec<Point2<f64>> {
    let mut rng = rand::rngs::StdRng::from_seed(*seed);
    let offset = Uniform::new_inclusive(-jitter, jitter);
    let mut points: Vec<_> = (0..num_corners)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / num_corners as f64;
            let radius = 1.0 + offset.sample(&mut rng);
            Point2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();

    let radius = Uniform::new(0.0, 0.5);
    let angle = Uniform::new(0.0, std::f64::consts::TAU);
    for _ in 0..num_interior {
        let r = radius.sample(&mut rng);
        let a = angle.sample(&mut rng);
        points.push(Point2::new(r * a.cos(), r * a.sin()));
    }
    points
}

/// Area of the convex hull of `points`, computed with Andrew's monotone chain.
pub fn convex_hull_area(points: &[Point2<f64>]) -> f64 {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup_by(|a, b| a.x == b.x && a.y == b.y);
    if sorted.len() < 3 {
        return 0.0;
    }

    // The last point of each chain starts the other one
    let mut hull = half_hull(sorted.iter().copied());
    hull.pop();
    let mut upper = half_hull(sorted.iter().rev().copied());
    upper.pop();
    hull.extend(upper);

    let anchor = hull[0];
    hull.windows(2)
        .skip(1)
        .map(|pair| math::signed_triangle_area(anchor, pair[0], pair[1]))
        .sum()
}

fn half_hull(points: impl Iterator<Item = Point2<f64>>) -> Vec<Point2<f64>> {
    let mut chain: Vec<Point2<f64>> = Vec::new();
    for point in points {
        while chain.len() >= 2
            && math::orientation(chain[chain.len() - 2], chain[chain.len() - 1], point)
                != Orientation::CounterClockwise
        {
            chain.pop();
        }
        chain.push(point);
    }
    chain
}

#[cfg(test)]
mod test {
    use super::{convex_hull_area, ring_with_interior, SEED};
    use crate::Point2;
    use approx::assert_relative_eq;

    #[test]
    fn test_convex_hull_area() {
        let square = [(0.0, 0.0), (2.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 2.0), (1.0, 0.0)]
            .map(Point2::from);
        assert_relative_eq!(convex_hull_area(&square), 4.0);
        let points = ring_with_interior(12, 0.0, 30, SEED);
        assert_relative_eq!(convex_hull_area(&points), 3.0, epsilon = 1e-12);
        assert_eq!(convex_hull_area(&square[..2]), 0.0);
    }
}
