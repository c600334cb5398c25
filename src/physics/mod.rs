//! Physical layer: state containers, model trait and spatial grid
//!
//! A physical model encapsulates the right-hand side of the evolution
//! equation. It is **separate from numerical solvers**:
//! - The model provides the **equations** (physics)
//! - The solver provides the **method** to integrate them (numerics)
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::physics::{PhysicalModel, PhysicalState, PhysicalQuantity};
//! use nalgebra::DVector;
//!
//! struct Decay;
//!
//! impl PhysicalModel for Decay {
//!     fn points(&self) -> usize { 3 }
//!     fn compute_physics(&self, state: &PhysicalState) -> PhysicalState {
//!         state.clone() * -1.0
//!     }
//!     fn setup_initial_state(&self) -> PhysicalState {
//!         PhysicalState::new(PhysicalQuantity::Concentration, DVector::from_element(3, 1.0))
//!     }
//!     fn name(&self) -> &str { "Decay" }
//! }
//!
//! let model = Decay;
//! let rate = model.compute_physics(&model.setup_initial_state());
//! assert_eq!(rate.concentration().unwrap()[0], -1.0);
//! ```

pub mod grid;
pub mod traits;

pub use grid::{SpatialGrid, linspace};
pub use traits::{PhysicalModel, PhysicalQuantity, PhysicalState};
