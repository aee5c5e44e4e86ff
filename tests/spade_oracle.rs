//! Compares the incremental triangulation against spade's Delaunay triangulation.

use std::collections::HashSet;

use cavity_mesh::{MeshDomain, MeshError, Point2, Triangulation, TriangulationParameters};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use spade::{DelaunayTriangulation, Triangulation as _};

const SEED: &[u8; 32] = b"u7NQoPmRrGx2sWc1hTbYzAe9LdKv0Fj3";

type TriangleKey = [(u64, u64); 3];

fn key(positions: [(f64, f64); 3]) -> TriangleKey {
    let mut key = positions.map(|(x, y)| (x.to_bits(), y.to_bits()));
    key.sort_unstable();
    key
}

fn uniform_points(size: usize, range: f64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::from_seed(*SEED);
    let range = Uniform::new(-range, range);
    (0..size)
        .map(|_| [range.sample(&mut rng), range.sample(&mut rng)])
        .collect()
}

fn spade_triangles(points: &[[f64; 2]]) -> HashSet<TriangleKey> {
    let vertices = points
        .iter()
        .map(|&[x, y]| spade::Point2::new(x, y))
        .collect();
    let triangulation: DelaunayTriangulation<spade::Point2<f64>> =
        DelaunayTriangulation::bulk_load(vertices).expect("spade rejected the input");
    triangulation
        .inner_faces()
        .map(|face| key(face.positions().map(|p| (p.x, p.y))))
        .collect()
}

fn own_triangles(triangulation: &Triangulation<f64>) -> Vec<TriangleKey> {
    triangulation
        .shapes()
        .map(|shape| key(shape.vertices().map(|p: Point2<f64>| (p.x, p.y))))
        .collect()
}

fn assert_same_triangles(triangulation: &Triangulation<f64>, points: &[[f64; 2]]) {
    let expected = spade_triangles(points);
    let actual = own_triangles(triangulation);
    let unique: HashSet<_> = actual.iter().copied().collect();
    assert_eq!(unique.len(), actual.len(), "a triangle was emitted twice");
    assert_eq!(unique, expected);
}

#[test]
fn matches_spade_for_uniform_points() -> Result<(), MeshError> {
    for (size, range) in [(20, 1.0), (200, 1.0), (300, 1.0e4)] {
        let points = uniform_points(size, range);
        let mut domain = MeshDomain::new();
        for &[x, y] in &points {
            domain.add_point(x, y)?;
        }
        let triangulation = domain.triangulate()?;
        triangulation.sanity_check();
        assert_same_triangles(&triangulation, &points);
    }
    Ok(())
}

#[test]
fn matches_spade_for_nearly_cocircular_points() -> Result<(), MeshError> {
    let mut rng = StdRng::from_seed(*SEED);
    let jitter = Uniform::new_inclusive(-1e-7, 1e-7);
    let mut points: Vec<[f64; 2]> = (0..64)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / 64.0;
            let radius = 1.0 + jitter.sample(&mut rng);
            [radius * angle.cos(), radius * angle.sin()]
        })
        .collect();
    let interior = Uniform::new(-0.5, 0.5);
    for _ in 0..30 {
        points.push([interior.sample(&mut rng), interior.sample(&mut rng)]);
    }

    let input: Vec<Point2<f64>> = points.iter().map(|&p| p.into()).collect();
    let triangulation = Triangulation::from_points(&input, &TriangulationParameters::default())?;
    triangulation.sanity_check();
    assert_same_triangles(&triangulation, &points);
    Ok(())
}

#[test]
fn matches_spade_for_a_regular_hull() -> Result<(), MeshError> {
    let mut points: Vec<[f64; 2]> = (0..16)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / 16.0;
            [angle.cos(), angle.sin()]
        })
        .collect();
    let mut rng = StdRng::from_seed(*SEED);
    let radius = Uniform::new(0.0, 0.25);
    let angle = Uniform::new(0.0, std::f64::consts::TAU);
    for _ in 0..150 {
        let r: f64 = radius.sample(&mut rng);
        let a: f64 = angle.sample(&mut rng);
        points.push([r.sqrt() * a.cos(), r.sqrt() * a.sin()]);
    }

    let input: Vec<Point2<f64>> = points.iter().map(|&p| p.into()).collect();
    let triangulation = Triangulation::from_points(&input, &TriangulationParameters::default())?;
    triangulation.sanity_check();
    assert_same_triangles(&triangulation, &points);
    Ok(())
}
