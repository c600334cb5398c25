//! Forward Euler finite-difference integrator
//!
//! # Mathematical Background
//!
//! The reaction-diffusion equation is discretized in space on the padded
//! grid and integrated in time with the explicit scheme:
//!
//! ```text
//! c_{n+1} = c_n + dt · (D·lap(c_n) − β·c_n + α·χ)
//! ```
//!
//! after which the guard cells of `c_{n+1}` are corrected by the scenario's
//! [`GhostCellPolicy`](crate::solver::GhostCellPolicy).
//!
//! # Characteristics
//!
//! - **Order**: first order in time, second order in space
//! - **Stability**: conditional, `dt ≤ 2/(4D/dx² + β)`
//! - **Complexity**: one right-hand side evaluation per step
//! - **Memory**: the whole history is stored, `ndt × cells`
//!
//! # Stability
//!
//! A time step above the limit makes the solution oscillate and blow up.
//! The solver logs a warning in that case, and again on the first non-finite
//! snapshot, but still runs: choosing `dt` is the caller's responsibility.
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::models::PhysicalParameters;
//! use diffusion_rs::solver::{EulerSolver, GhostCellPolicy, Scenario, Solver, SolverConfiguration};
//!
//! let params = PhysicalParameters::new(1.0, 1.0, 1.0, 0.5);
//! let scenario = Scenario::reaction_diffusion(params, 0.1, 2.0, GhostCellPolicy::Absorb).unwrap();
//! let config = SolverConfiguration::time_evolution(0.001, 100);
//!
//! let result = EulerSolver::new().solve(&scenario, &config).unwrap();
//! assert_eq!(result.len(), 100);
//! assert_eq!(result.x.len(), 41);
//! ```

use log::{info, warn};

use crate::error::Result;
use crate::models::PhysicalParameters;
use crate::solver::progress::{LogProgress, NoProgress, ProgressObserver};
use crate::solver::stepper::EulerStepper;
use crate::solver::{GhostCellPolicy, Scenario, SimulationResult, Solver, SolverConfiguration};

// =================================================================================================
// Forward Euler Solver
// =================================================================================================

/// Forward Euler time-stepping solver
///
/// # Algorithm
///
/// 1. Validate configuration and scenario
/// 2. Store the initial condition
/// 3. For `n = 1 .. ndt−1`: one [`EulerStepper`] update, store the snapshot
/// 4. Strip guard cells and return the history
///
/// `time_points[n]` is computed as `n·dt` from the index, not accumulated.
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Forward Euler solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use diffusion_rs::solver::{EulerSolver, Solver};
    ///
    /// let solver = EulerSolver::new();
    /// assert_eq!(solver.name(), "Forward Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Integrate while reporting progress to `observer`
    pub fn solve_with_progress(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
        observer: &mut dyn ProgressObserver,
    ) -> Result<SimulationResult> {
        // ====== Validation ======

        config.validate()?;
        scenario.validate()?;

        let dt = config.dt;
        let time_steps = config.time_steps;
        let updates = time_steps - 1;

        if let Some(limit) = scenario.model.max_stable_dt()
            && dt > limit
        {
            warn!(
                "dt = {} exceeds the explicit stability limit {:.3e}, the solution will diverge",
                dt, limit
            );
        }

        info!(
            "{}: {} points, {} steps of dt = {}, boundary = {}",
            scenario.get_model_name(),
            scenario.grid.len(),
            time_steps,
            dt,
            scenario.boundary
        );

        // ====== Integration ======

        let stepper = EulerStepper::new(scenario, dt)?;

        let mut time_points = Vec::with_capacity(time_steps);
        let mut state_trajectory = Vec::with_capacity(time_steps);
        let mut diverged = false;

        observer.on_start(updates);

        for snapshot in stepper.take(time_steps) {
            if !diverged && snapshot.concentration.iter().any(|c| !c.is_finite()) {
                warn!(
                    "non-finite concentration at step {} (t = {}), reduce dt",
                    snapshot.step, snapshot.time
                );
                diverged = true;
            }

            if snapshot.step > 0 {
                observer.on_step(snapshot.step, updates);
            }

            time_points.push(snapshot.time);
            state_trajectory.push(snapshot.concentration);
        }

        observer.on_finish();

        // ====== Result ======

        let mut result = SimulationResult::new(
            scenario.grid.interior_coordinates(),
            time_points,
            state_trajectory,
        );

        result.add_metadata("solver", self.name());
        result.add_metadata("model", scenario.get_model_name());
        result.add_metadata("boundary", scenario.boundary.as_str());
        result.add_metadata("time steps", &time_steps.to_string());
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("dx", &scenario.grid.dx().to_string());
        result.add_metadata("total time", &config.total_time().to_string());

        info!("{} finished at t = {}", self.name(), config.total_time());

        Ok(result)
    }
}

impl Solver for EulerSolver {
    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> Result<SimulationResult> {
        self.solve_with_progress(scenario, config, &mut NoProgress)
    }

    fn name(&self) -> &str {
        "Forward Euler"
    }
}

// =================================================================================================
// Plain-array entry point
// =================================================================================================

/// Integrate from a zero field and return `(x, ct)` as plain vectors
///
/// `boundary` is one of `None`, `"none"`, `"period"`, `"reflect"`,
/// `"absorb"`. Without a boundary the domain is extended ×20. Progress is
/// logged every 10 %.
///
/// # Errors
///
/// Unknown boundary strings, grids that cannot be built and invalid `dt` or
/// `ndt` are reported as [`DiffusionError`](crate::DiffusionError).
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::euler_scheme;
///
/// let (x, ct) = euler_scheme(0.1, 5.0, 0.001, 10, 1.0, 0.0, 0.0, 0.5, Some("reflect")).unwrap();
/// assert_eq!(x.len(), 101);
/// assert_eq!(ct.len(), 10);
/// assert!(ct.iter().all(|c| c.len() == 101));
///
/// assert!(euler_scheme(0.1, 5.0, 0.001, 10, 1.0, 0.0, 0.0, 0.5, Some("mirror")).is_err());
/// ```
#[allow(clippy::too_many_arguments)]
pub fn euler_scheme(
    dx: f64,
    l_max: f64,
    dt: f64,
    ndt: usize,
    d: f64,
    beta: f64,
    alpha: f64,
    w: f64,
    boundary: Option<&str>,
) -> Result<(Vec<f64>, Vec<Vec<f64>>)> {
    let policy = GhostCellPolicy::from_option(boundary)?;
    let params = PhysicalParameters::new(d, beta, alpha, w);
    let scenario = Scenario::reaction_diffusion(params, dx, l_max, policy)?;
    let config = SolverConfiguration::time_evolution(dt, ndt);

    let result = EulerSolver::new().solve_with_progress(&scenario, &config, &mut LogProgress::default())?;
    Ok(result.into_parts())
}

// =================================================================================================
// Tests
// =================================================================================================
