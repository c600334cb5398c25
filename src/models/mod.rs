//! Physical models for reaction-diffusion simulation
//!
//! All models implement the [`PhysicalModel`](crate::physics::PhysicalModel) trait.
//! The solver calls `compute_physics` at each time step. Models are responsible
//! for the physics (diffusion, degradation, production), the solver for the
//! time integration and the boundary policy.
//!
//! # Available Models
//!
//! ## [`ReactionDiffusion`]
//!
//! One species diffusing with coefficient `D`, degraded at rate `β` and
//! produced at rate `α` inside a localized region.
//!
//! # Production region
//!
//! [`SourceShape`] describes where particles appear: a rectangular pulse of
//! width `w` centered on 0 or starting at `x0`. Both integrate to one, so the
//! total production per unit time is `α`. [`PhysicalParameters`] bundles the
//! scalars of one run.

pub mod parameters;
pub mod reaction_diffusion;
pub mod source;

pub use parameters::PhysicalParameters;
pub use reaction_diffusion::ReactionDiffusion;
pub use source::{SourceShape, chi, chi_x0};
