//! Helper functions for integration tests

use diffusion_rs::models::PhysicalParameters;
use diffusion_rs::physics::SpatialGrid;
use diffusion_rs::solver::{GhostCellPolicy, Scenario};

/// Padded grid that must build
pub fn padded_grid(dx: f64, l_max: f64) -> SpatialGrid {
    SpatialGrid::padded(dx, l_max).expect("valid grid")
}

/// Reaction-diffusion scenario on the ×20 extended domain
pub fn unbounded_scenario(params: PhysicalParameters, dx: f64, l_max: f64) -> Scenario {
    Scenario::reaction_diffusion(params, dx, l_max, GhostCellPolicy::Unbounded)
        .expect("valid scenario")
}

/// Σ c·dx
pub fn grid_mass(values: &[f64], dx: f64) -> f64 {
    values.iter().sum::<f64>() * dx
}

/// Largest pointwise gap between two profiles of equal length
pub fn max_abs_difference(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "profiles differ in length");
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}
