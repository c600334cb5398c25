//! Reaction-diffusion right-hand side
//!
//! # Mathematical Model
//!
//! ```text
//! ∂c/∂t = D ∂²c/∂x² − β c + α χ(x)
//! ```
//!
//! where:
//! - `c(x,t)`: concentration field on the padded grid
//! - `D`: diffusion coefficient
//! - `β`: first-order degradation rate
//! - `α`: production rate
//! - `χ(x)`: normalized production profile ([`SourceShape`])
//!
//! The second derivative uses the periodic operator of
//! [`numerical_laplacian`]. The model is evaluated on every cell, guard cells
//! included; boundary behaviour is applied afterwards by the solver.

use nalgebra::DVector;

use crate::models::parameters::PhysicalParameters;
use crate::models::source::SourceShape;
use crate::physics::{PhysicalModel, PhysicalQuantity, PhysicalState, SpatialGrid};
use crate::solver::laplacian::numerical_laplacian;

/// Reaction-diffusion model on a fixed 1D grid
///
/// # Example
///
/// ```rust
/// use diffusion_rs::models::{PhysicalParameters, ReactionDiffusion};
/// use diffusion_rs::physics::{PhysicalModel, SpatialGrid};
///
/// let grid = SpatialGrid::padded(0.1, 1.0).unwrap();
/// let model = ReactionDiffusion::new(PhysicalParameters::new(1.0, 0.5, 1.0, 0.5), &grid);
///
/// // From zero, only the source contributes
/// let rate = model.compute_physics(&model.setup_initial_state());
/// let rate = rate.concentration().unwrap();
/// assert!((rate[11] - 2.0).abs() < 1e-12);   // x = 0, α/w
/// assert_eq!(rate[0], 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct ReactionDiffusion {
    params: PhysicalParameters,
    coordinates: Vec<f64>,
    dx: f64,

    /// α·χ(x), fixed for the lifetime of the model
    production: DVector<f64>,
}

impl ReactionDiffusion {
    /// Build the model on `grid`, sampling the source once
    pub fn new(params: PhysicalParameters, grid: &SpatialGrid) -> Self {
        let coordinates = grid.coordinates().to_vec();
        let production = params.source().profile(&coordinates) * params.production;

        Self {
            params,
            coordinates,
            dx: grid.dx(),
            production,
        }
    }

    /// Parameters this model was built with
    pub fn parameters(&self) -> &PhysicalParameters {
        &self.params
    }

    /// Shape of the production region
    pub fn source(&self) -> SourceShape {
        self.params.source()
    }

    /// Grid coordinates, guard cells included
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Spatial step used by the Laplacian
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Right-hand side for one concentration field
    pub fn rate(&self, c: &DVector<f64>) -> DVector<f64> {
        let diffusion = numerical_laplacian(c, self.dx) * self.params.diffusion;
        diffusion - c * self.params.degradation + &self.production
    }
}

impl PhysicalModel for ReactionDiffusion {
    fn points(&self) -> usize {
        self.coordinates.len()
    }

    fn compute_physics(&self, state: &PhysicalState) -> PhysicalState {
        let mut result = PhysicalState::empty();

        if let Some(c) = state.concentration() {
            result.set(PhysicalQuantity::Concentration, self.rate(c));
        }

        result
    }

    fn setup_initial_state(&self) -> PhysicalState {
        PhysicalState::new(
            PhysicalQuantity::Concentration,
            DVector::zeros(self.coordinates.len()),
        )
    }

    fn name(&self) -> &str {
        "Reaction-Diffusion"
    }

    fn description(&self) -> Option<&str> {
        Some("dc/dt = D d2c/dx2 - beta c + alpha chi(x), periodic finite differences")
    }

    fn max_stable_dt(&self) -> Option<f64> {
        Some(self.params.stability_limit(self.dx))
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> SpatialGrid {
        SpatialGrid::padded(0.5, 2.0).unwrap()
    }

    #[test]
    fn test_model_dimensions() {
        let model = ReactionDiffusion::new(PhysicalParameters::new(1.0, 1.0, 1.0, 1.0), &grid());
        assert_eq!(model.points(), 11);
        assert_eq!(model.setup_initial_state().concentration().unwrap().len(), 11);
        assert_eq!(model.name(), "Reaction-Diffusion");
        assert!(model.description().is_some());
    }

    #[test]
    fn test_source_term_only_from_zero() {
        let params = PhysicalParameters::new(1.0, 1.0, 3.0, 1.0);
        let model = ReactionDiffusion::new(params, &grid());

        let rate = model.rate(&DVector::zeros(11));
        // x = -0.5, 0, 0.5 are inside [-0.5, 0.5]
        assert_eq!(rate[4], 3.0);
        assert_eq!(rate[5], 3.0);
        assert_eq!(rate[6], 3.0);
        assert_eq!(rate[3], 0.0);
        assert_eq!(rate[7], 0.0);
    }

    #[test]
    fn test_degradation_term() {
        let params = PhysicalParameters::new(0.0, 2.0, 0.0, 1.0);
        let model = ReactionDiffusion::new(params, &grid());

        let rate = model.rate(&DVector::from_element(11, 1.5));
        assert!(rate.iter().all(|&r| (r + 3.0).abs() < 1e-12));
    }

    #[test]
    fn test_diffusion_term() {
        let params = PhysicalParameters::new(2.0, 0.0, 0.0, 1.0);
        let model = ReactionDiffusion::new(params, &grid());

        let mut c = DVector::zeros(11);
        c[5] = 1.0;
        let rate = model.rate(&c);

        // D * (-2) / dx² at the spike, D / dx² next to it
        assert!((rate[5] + 16.0).abs() < 1e-12);
        assert!((rate[4] - 8.0).abs() < 1e-12);
        assert!((rate[6] - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_offset_source() {
        let params = PhysicalParameters::new(1.0, 0.0, 1.0, 1.0).with_offset(1.0);
        let model = ReactionDiffusion::new(params, &grid());
        let rate = model.rate(&DVector::zeros(11));

        // x = 1.0, 1.5, 2.0 → indices 7, 8, 9
        assert_eq!(rate[6], 0.0);
        assert_eq!(rate[7], 1.0);
        assert_eq!(rate[9], 1.0);
        assert_eq!(rate[10], 0.0);
    }

    #[test]
    fn test_missing_concentration_gives_empty_rate() {
        let model = ReactionDiffusion::new(PhysicalParameters::new(1.0, 1.0, 1.0, 1.0), &grid());
        let rate = model.compute_physics(&PhysicalState::empty());
        assert!(rate.concentration().is_none());
    }

    #[test]
    fn test_stability_hint() {
        let model = ReactionDiffusion::new(PhysicalParameters::free_diffusion(1.0), &grid());
        assert_eq!(model.max_stable_dt(), Some(0.125));
    }
}
