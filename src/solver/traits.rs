//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! - `SolverConfiguration` says HOW to integrate (time step, snapshot count)
//! - `Scenario` says WHAT to integrate (model, grid, boundary, initial field)
//! - `Solver` turns both into a `SimulationResult`
//!
//! Results only ever contain physical cells: the guard cells of the padded
//! grid are stripped from the coordinates and from every snapshot.

use std::collections::HashMap;

use nalgebra::DVector;
use ndarray::Array2;

use crate::error::{DiffusionError, Result};
use crate::solver::Scenario;

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration of an explicit time integration
///
/// `time_steps` counts snapshots, the initial condition included: a run
/// performs `time_steps - 1` updates and ends at `t = (time_steps - 1)·dt`.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::time_evolution(0.001, 1000);
/// assert!(config.validate().is_ok());
/// assert!((config.total_time() - 0.999).abs() < 1e-12);
///
/// assert!(SolverConfiguration::time_evolution(0.0, 10).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfiguration {
    /// Time step
    pub dt: f64,

    /// Number of stored snapshots (ndt)
    pub time_steps: usize,
}

impl SolverConfiguration {
    /// Create a time evolution configuration
    pub fn time_evolution(dt: f64, time_steps: usize) -> Self {
        Self { dt, time_steps }
    }

    /// Time of the last snapshot
    pub fn total_time(&self) -> f64 {
        self.time_steps.saturating_sub(1) as f64 * self.dt
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.dt.is_finite() {
            return Err(DiffusionError::InvalidConfiguration(format!(
                "time step must be finite, got {}",
                self.dt
            )));
        }
        if self.dt <= 0.0 {
            return Err(DiffusionError::InvalidConfiguration(format!(
                "time step must be positive, got {}",
                self.dt
            )));
        }
        if self.time_steps == 0 {
            return Err(DiffusionError::InvalidConfiguration(
                "time steps must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Output of a time integration
///
/// `state_trajectory[n]` is the concentration at `time_points[n] = n·dt`,
/// sampled on `x`. The trajectory always contains the initial condition.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    /// Physical coordinates (guard cells removed)
    pub x: Vec<f64>,

    /// Time of every snapshot
    pub time_points: Vec<f64>,

    /// Concentration snapshots (guard cells removed)
    pub state_trajectory: Vec<DVector<f64>>,

    /// Last snapshot
    pub final_state: DVector<f64>,

    /// Free-form run information (solver name, dt, boundary...)
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Build a result, the final state being the last trajectory entry
    pub fn new(x: Vec<f64>, time_points: Vec<f64>, state_trajectory: Vec<DVector<f64>>) -> Self {
        let final_state = state_trajectory
            .last()
            .cloned()
            .unwrap_or_else(|| DVector::zeros(x.len()));

        Self {
            x,
            time_points,
            state_trajectory,
            final_state,
            metadata: HashMap::new(),
        }
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Number of snapshots
    pub fn len(&self) -> usize {
        self.state_trajectory.len()
    }

    /// True when no snapshot was stored
    pub fn is_empty(&self) -> bool {
        self.state_trajectory.is_empty()
    }

    /// Sum of the concentration of one snapshot
    ///
    /// Multiply by `dx` for the integral over the domain.
    pub fn total_mass(&self, step: usize) -> Option<f64> {
        self.state_trajectory.get(step).map(|c| c.sum())
    }

    /// Sum of the concentration of every snapshot
    pub fn masses(&self) -> Vec<f64> {
        self.state_trajectory.iter().map(|c| c.sum()).collect()
    }

    /// Trajectory as a `(snapshots × cells)` array
    pub fn to_array(&self) -> Array2<f64> {
        let cells = self.x.len();
        Array2::from_shape_fn((self.len(), cells), |(n, i)| self.state_trajectory[n][i])
    }

    /// Coordinates and snapshots as plain vectors
    pub fn into_parts(self) -> (Vec<f64>, Vec<Vec<f64>>) {
        let ct = self
            .state_trajectory
            .into_iter()
            .map(|c| c.as_slice().to_vec())
            .collect();
        (self.x, ct)
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// Common interface for time integrators
pub trait Solver {
    /// Integrate `scenario` according to `config`
    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> Result<SimulationResult>;

    /// Human readable name
    fn name(&self) -> &str;
}
