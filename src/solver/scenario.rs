//! Simulation scenario definition
//!
//! A scenario combines a physical model with its grid, a boundary policy and
//! the initial field.
use crate::error::{DiffusionError, Result};
use crate::models::{PhysicalParameters, ReactionDiffusion};
use crate::physics::{PhysicalModel, PhysicalQuantity, PhysicalState, SpatialGrid};
use crate::solver::boundary::GhostCellPolicy;

/// Simulation scenario
///
/// Defines a specific case to simulate:
/// - Physical model (equations)
/// - Padded spatial grid
/// - Boundary policy for the guard cells
/// - Initial state (zero unless replaced)
///
/// # Design
///
/// The same scenario can be solved with different numerical settings.
/// This is the "WHAT to solve" (not "HOW to solve").
///
/// # Example
///
/// ```rust
/// use diffusion_rs::models::PhysicalParameters;
/// use diffusion_rs::solver::{GhostCellPolicy, Scenario};
///
/// let params = PhysicalParameters::new(1.0, 0.0, 0.0, 0.5);
/// let scenario = Scenario::reaction_diffusion(params, 0.1, 5.0, GhostCellPolicy::Reflect)
///     .unwrap()
///     .with_initial_profile(|x| if x.abs() < 0.5 { 1.0 } else { 0.0 });
///
/// assert!(scenario.validate().is_ok());
/// assert_eq!(scenario.grid.len(), 103);
/// ```
pub struct Scenario {
    /// Physical model (equations)
    pub model: Box<dyn PhysicalModel>,

    /// Padded grid the model is sampled on
    pub grid: SpatialGrid,

    /// Guard-cell correction applied after every update
    pub boundary: GhostCellPolicy,

    /// State at t = 0
    pub initial_state: PhysicalState,
}

impl Scenario {
    /// Create a scenario, starting from the model's own initial state
    pub fn new(model: Box<dyn PhysicalModel>, grid: SpatialGrid, boundary: GhostCellPolicy) -> Self {
        let initial_state = model.setup_initial_state();
        Self {
            model,
            grid,
            boundary,
            initial_state,
        }
    }

    /// Reaction-diffusion problem on `[-l_max, l_max]`
    ///
    /// With [`GhostCellPolicy::Unbounded`] the grid covers `20·l_max`
    /// instead, so that nothing reaches the edges.
    ///
    /// # Errors
    ///
    /// [`DiffusionError::InvalidGrid`] when `dx` or `l_max` cannot form a grid.
    pub fn reaction_diffusion(
        params: PhysicalParameters,
        dx: f64,
        l_max: f64,
        boundary: GhostCellPolicy,
    ) -> Result<Self> {
        let grid = SpatialGrid::padded(dx, l_max * boundary.domain_scale())?;
        let model = ReactionDiffusion::new(params, &grid);

        Ok(Self::new(Box::new(model), grid, boundary))
    }

    /// Replace the initial concentration by `profile(x)` on every grid point
    pub fn with_initial_profile<F>(mut self, profile: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let field = self.grid.field_from(profile);
        self.initial_state.set(PhysicalQuantity::Concentration, field);
        self
    }

    /// Replace the whole initial state
    pub fn with_initial_state(mut self, state: PhysicalState) -> Self {
        self.initial_state = state;
        self
    }

    /// Check that model, grid and initial state agree on the number of points
    pub fn validate(&self) -> Result<()> {
        let expected = self.grid.len();

        if self.model.points() != expected {
            return Err(DiffusionError::LengthMismatch {
                name: "model points",
                expected,
                actual: self.model.points(),
            });
        }

        let Some(concentration) = self.initial_state.concentration() else {
            return Err(DiffusionError::LengthMismatch {
                name: "initial concentration",
                expected,
                actual: 0,
            });
        };

        if concentration.len() != expected {
            return Err(DiffusionError::LengthMismatch {
                name: "initial concentration",
                expected,
                actual: concentration.len(),
            });
        }

        Ok(())
    }

    /// Get model name
    pub fn get_model_name(&self) -> &str {
        self.model.name()
    }

    /// Number of physical cells (guard cells excluded)
    pub fn interior_points(&self) -> usize {
        self.grid.len().saturating_sub(2)
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.get_model_name())
            .field("points", &self.grid.len())
            .field("dx", &self.grid.dx())
            .field("l_max", &self.grid.l_max())
            .field("boundary", &self.boundary)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
