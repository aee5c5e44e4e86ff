#![no_main]
mod fuzz_shared;
use cavity_mesh::{MeshDomain, MeshError};
use fuzz_shared::FuzzPoint;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<FuzzPoint>, Vec<f64>, bool)| {
    let (points, boundary, closed) = input;
    if points.len() > 100 {
        return;
    }
    let mut domain = MeshDomain::new();
    for point in &points {
        let accepted = domain.add_point(point.x, point.y);
        assert_eq!(accepted.is_err(), !point.is_usable(f64::MAX));
    }
    let num_points = domain.num_points();
    if domain.add_boundary(1, closed, &boundary).is_err() {
        assert_eq!(domain.num_points(), num_points);
    }
    if let Some(bounds) = domain.bounds() {
        for point in domain.points() {
            assert!(point.x >= bounds.left() && point.x <= bounds.right());
            assert!(point.y >= bounds.bottom() && point.y <= bounds.top());
        }
    }
    if domain.points().iter().all(|p| p.x.abs() <= 20.0 && p.y.abs() <= 20.0) {
        match domain.triangulate() {
            Ok(triangulation) => triangulation.sanity_check(),
            Err(MeshError::DegenerateTriangle { .. }) => {}
            Err(error) => panic!("unexpected error: {}", error),
        }
    }
});
