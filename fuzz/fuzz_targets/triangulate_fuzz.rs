#![no_main]
mod fuzz_shared;
use cavity_mesh::{MeshError, Triangulation, TriangulationParameters};
use fuzz_shared::FuzzPoint;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<FuzzPoint>| {
    if data.len() > 200 || !data.iter().all(|p| p.is_usable(20.0)) {
        return;
    }
    let points: Vec<_> = data.iter().map(FuzzPoint::position).collect();
    match Triangulation::from_points(&points, &TriangulationParameters::default()) {
        Ok(triangulation) => triangulation.sanity_check(),
        Err(MeshError::DegenerateTriangle { .. }) => {}
        Err(error) => panic!("unexpected error: {}", error),
    }
});
