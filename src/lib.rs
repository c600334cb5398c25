//! diffusion-rs: 1D Reaction-Diffusion Simulation
//!
//! Numerical integration of
//!
//! ```text
//! ∂c/∂t = D ∂²c/∂x² − β c + α χ(x)
//! ```
//!
//! on a uniform grid with forward Euler, four ghost-cell boundary policies
//! and closed-form references (free-diffusion Gaussian, Green's function
//! steady state) to validate the numerics.
//!
//! # Architecture
//!
//! diffusion-rs keeps physics and numerics apart:
//!
//! 1. **Physical models** define the right-hand side (what to solve)
//! 2. **Solvers** advance it in time and apply the boundary policy (how to solve)
//!
//! # Quick Start
//!
//! ```rust
//! use diffusion_rs::prelude::*;
//!
//! # fn main() -> diffusion_rs::Result<()> {
//! // 1. Physics: D = 1, β = 1, α = 1, source of width 1 centered on 0
//! let params = PhysicalParameters::new(1.0, 1.0, 1.0, 1.0);
//!
//! // 2. Scenario: padded grid on [-2, 2], reflecting walls
//! let scenario = Scenario::reaction_diffusion(params, 0.1, 2.0, GhostCellPolicy::Reflect)?;
//!
//! // 3. Solver: 500 snapshots, dt = 0.004
//! let config = SolverConfiguration::time_evolution(0.004, 500);
//! let result = EulerSolver::new().solve(&scenario, &config)?;
//!
//! // 4. Results never contain guard cells
//! assert_eq!(result.x.len(), 41);
//! assert_eq!(result.len(), 500);
//! # Ok(())
//! # }
//! ```
//!
//! The same run as plain vectors:
//!
//! ```rust
//! use diffusion_rs::solver::euler_scheme;
//!
//! # fn main() -> diffusion_rs::Result<()> {
//! let (x, snapshots) = euler_scheme(0.1, 2.0, 0.004, 500, 1.0, 1.0, 1.0, 1.0, Some("reflect"))?;
//! assert_eq!(snapshots.len(), 500);
//! assert_eq!(snapshots[0].len(), x.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: State containers, the `PhysicalModel` trait, the padded grid
//! - [`models`]: Reaction-diffusion model, parameters, source shapes
//! - [`solver`]: Euler stepping, boundary policies, analytical references
//! - [`output`]: Plots and CSV export
//! - [`error`]: Error type shared by the whole crate

pub mod error;
pub mod physics;

pub mod models;
pub mod output;
pub mod solver;

pub use error::{DiffusionError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use diffusion_rs::prelude::*;
    //! ```
    pub use crate::error::{DiffusionError, Result};
    pub use crate::models::{PhysicalParameters, ReactionDiffusion, SourceShape};
    pub use crate::physics::{PhysicalModel, PhysicalQuantity, PhysicalState, SpatialGrid};
    pub use crate::solver::{
        EulerSolver, EulerStepper, GhostCellPolicy, Scenario, SimulationResult, Solver,
        SolverConfiguration,
    };
}
