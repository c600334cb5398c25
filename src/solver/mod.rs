//! Numerical solvers
//!
//! This module turns a reaction-diffusion problem into a time history, and
//! provides the closed-form solutions used to check it.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Physical model (right-hand side)
//!    - Padded grid
//!    - Ghost-cell boundary policy
//!    - Initial state
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to solve
//!    - Time step `dt`
//!    - Number of snapshots `ndt`
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - Applies the scheme, returns a `SimulationResult`
//!
//! # Module Organization
//!
//! - **`traits`**: `Solver`, `SolverConfiguration`, `SimulationResult`
//! - **`boundary`**: `GhostCellPolicy`, the four boundary modes
//! - **`laplacian`**: periodic second difference
//! - **`scenario`**: problem definition and validation
//! - **`stepper`**: `EulerStepper`, one snapshot per `next()`
//! - **`progress`**: progress observers
//! - **`methods`**: `EulerSolver`, `euler_scheme` and the analytical references
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌──────────────┐   ┌─────────────────┐
//! │ SpatialGrid  │──▶│ ReactionDiffusion│ (equations)
//! └──────┬───────┘   └────────┬────────┘
//!        │                    │
//!        └─────────┬──────────┘
//!         ┌────────▼────────┐
//!         │ Scenario        │ ← WHAT (model + grid + GhostCellPolicy)
//!         └────────┬────────┘
//!         ┌────────▼─────────────┐
//!         │ SolverConfiguration  │ ← HOW (dt, ndt)
//!         └────────┬─────────────┘
//!         ┌────────▼────────┐
//!         │ EulerStepper    │ ← one update + boundary per step
//!         └────────┬────────┘
//!         ┌────────▼────────────┐
//!         │ SimulationResult    │ ← x, t, c(x,t) without guard cells
//!         └─────────────────────┘
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use diffusion_rs::models::PhysicalParameters;
//! use diffusion_rs::solver::{EulerSolver, GhostCellPolicy, Scenario, Solver, SolverConfiguration};
//!
//! # fn main() -> diffusion_rs::Result<()> {
//! let params = PhysicalParameters::new(1.0, 0.0, 0.0, 0.5);
//! let scenario = Scenario::reaction_diffusion(params, 0.1, 5.0, "reflect".parse()?)?
//!     .with_initial_profile(|x| (-x * x).exp());
//!
//! let config = SolverConfiguration::time_evolution(0.001, 1000);
//! let result = EulerSolver::new().solve(&scenario, &config)?;
//!
//! assert_eq!(result.x.len(), 101);
//! let masses = result.masses();
//! assert!((masses[999] - masses[0]).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```
//!
//! # Time Step Selection
//!
//! Forward Euler is conditionally stable:
//!
//! ```text
//! dt ≤ 2 / (4D/dx² + β)
//! ```
//!
//! [`PhysicalParameters::stability_limit`](crate::models::PhysicalParameters::stability_limit)
//! computes the bound. Larger steps are accepted and logged as a warning.
//!
//! # Error Handling
//!
//! All fallible operations return [`crate::Result`]. Errors are usage errors
//! only (bad grid, bad configuration, unknown boundary string, length
//! mismatch); physical parameters are never checked.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod boundary;
pub mod laplacian;
mod methods;
mod progress;
mod scenario;
mod stepper;
mod traits;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Stored in an AtomicUsize so that benchmarks and tests can change it at
// runtime. Relaxed ordering is enough: the value is a performance hint, not
// a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of cells from which the `parallel` feature hands the Euler
/// update and the steady-state convolution to rayon.
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

/// Runtime-configurable parallel-execution threshold.
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// Only consulted when the crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// Saves the current threshold on construction and restores it on drop.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{SimulationResult, Solver, SolverConfiguration};

pub use boundary::{GhostCellPolicy, UNBOUNDED_DOMAIN_SCALE};
pub use laplacian::numerical_laplacian;
pub use progress::{LogProgress, NoProgress, ProgressObserver};
pub use scenario::Scenario;
pub use stepper::{EulerStepper, Snapshot};

pub use methods::{
    EulerSolver, GreensSteadyState, analytical_solution, convolve_same, euler_scheme,
    greens_function, steady, steady_x0,
};

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_value() {
        assert_eq!(DEFAULT_PARALLEL_THRESHOLD, 999);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_panics() {
        set_parallel_threshold(0);
    }

    #[test]
    fn test_threshold_guard_restores_previous_value() {
        let before = parallel_threshold();
        {
            let _guard = ThresholdGuard::save(42);
            assert_eq!(parallel_threshold(), 42);
        }
        assert_eq!(parallel_threshold(), before);
    }
}
