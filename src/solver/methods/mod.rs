//! Numerical and closed-form solution methods
//!
//! # Available Methods
//!
//! ## Explicit time stepping
//!
//! - **[`EulerSolver`]**: forward Euler on the padded grid, implements
//!   [`Solver`](crate::solver::Solver)
//!   - Order: first order in time
//!   - Cost: one right-hand side evaluation per step
//!   - [`euler_scheme`] wraps it for plain-array callers
//!
//! ## Closed-form references
//!
//! Used to cross-check the integrator:
//!
//! - [`analytical_solution`]: free diffusion from a point source
//! - [`steady`] / [`steady_x0`]: Green's function steady state with
//!   degradation, for a centered or shifted source
//! - [`GreensSteadyState`]: the same, driven by
//!   [`PhysicalParameters`](crate::models::PhysicalParameters)
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::models::PhysicalParameters;
//! use diffusion_rs::solver::{EulerSolver, GhostCellPolicy, GreensSteadyState, Scenario, Solver, SolverConfiguration};
//!
//! let params = PhysicalParameters::new(1.0, 1.0, 1.0, 1.0);
//! let scenario = Scenario::reaction_diffusion(params, 0.1, 1.0, GhostCellPolicy::Unbounded).unwrap();
//! let result = EulerSolver::new()
//!     .solve(&scenario, &SolverConfiguration::time_evolution(0.004, 10))
//!     .unwrap();
//!
//! let reference = GreensSteadyState::new(params).evaluate(&result.x, 0.1);
//! assert_eq!(reference.len(), result.x.len());
//! ```

pub mod analytical;
pub mod euler;

pub use analytical::{
    GreensSteadyState, analytical_solution, convolve_same, greens_function, steady, steady_x0,
};
pub use euler::{EulerSolver, euler_scheme};
