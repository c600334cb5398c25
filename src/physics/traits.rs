//! Physical model traits and types
//!
//! This module defines the core API for physical models:
//! - `PhysicalModel`: trait for all physical models
//! - `PhysicalState`: state container handed between model and solver
//! - `PhysicalQuantity`: type-safe quantity identifiers

use nalgebra::DVector;
use std::collections::HashMap;

// =================================================================================================
// Physical quantities (Type-safe Identifiers)
// =================================================================================================

/// Known physical quantities (type-safe enum)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalQuantity {
    /// Particle concentration c(x)
    Concentration,
}

// =================================================================================================
// Physical State
// =================================================================================================

/// Physical state of the system at one instant
///
/// Every quantity is a field sampled on the (padded) spatial grid.
///
/// # Example
/// ```
/// use diffusion_rs::physics::{PhysicalQuantity, PhysicalState};
/// use nalgebra::DVector;
///
/// let state = PhysicalState::new(PhysicalQuantity::Concentration, DVector::zeros(5));
/// assert_eq!(state.concentration().unwrap().len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalState {
    quantities: HashMap<PhysicalQuantity, DVector<f64>>,
}

impl PhysicalState {
    /// Create a new state with primary quantity
    pub fn new(quantity: PhysicalQuantity, value: DVector<f64>) -> Self {
        let mut quantities = HashMap::new();
        quantities.insert(quantity, value);

        Self { quantities }
    }

    /// Create an empty state
    pub fn empty() -> Self {
        Self {
            quantities: HashMap::new(),
        }
    }

    /// Get a quantity by type
    pub fn get(&self, quantity: PhysicalQuantity) -> Option<&DVector<f64>> {
        self.quantities.get(&quantity)
    }

    /// Get mutable reference to a quantity
    pub fn get_mut(&mut self, quantity: PhysicalQuantity) -> Option<&mut DVector<f64>> {
        self.quantities.get_mut(&quantity)
    }

    /// Shortcut for the concentration field
    pub fn concentration(&self) -> Option<&DVector<f64>> {
        self.get(PhysicalQuantity::Concentration)
    }

    /// Set a quantity
    pub fn set(&mut self, quantity: PhysicalQuantity, value: DVector<f64>) {
        self.quantities.insert(quantity, value);
    }

    /// Iterate mutably over quantities and their fields
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&PhysicalQuantity, &mut DVector<f64>)> {
        self.quantities.iter_mut()
    }
}

// =================================================================================================
// Physical Model Trait
// =================================================================================================

/// Trait for physical models
///
/// The model provides the right-hand side `f(c)` of `∂t c = f(c)`, the
/// solver integrates it and applies the boundary policy.
pub trait PhysicalModel: Send + Sync {
    /// Number of grid points, guard cells included
    fn points(&self) -> usize;

    /// Evaluate the right-hand side at `state`
    ///
    /// Returns a state holding the time derivative of every evolved quantity.
    fn compute_physics(&self, state: &PhysicalState) -> PhysicalState;

    /// Creates the initial state for this physical model
    fn setup_initial_state(&self) -> PhysicalState;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }

    /// Largest time step for which an explicit update stays bounded, if known
    ///
    /// Solvers only report a violation, they never reject the step.
    fn max_stable_dt(&self) -> Option<f64> {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_physical_state() {
        let state = PhysicalState::empty();

        assert_eq!(state.quantities.len(), 0);
        assert!(state.concentration().is_none());
    }

    #[test]
    fn test_new_physical_state() {
        let state = PhysicalState::new(
            PhysicalQuantity::Concentration,
            DVector::from_row_slice(&[1.0, 2.0]),
        );

        assert_eq!(state.concentration().unwrap().len(), 2);
        assert_eq!(state.get(PhysicalQuantity::Concentration), state.concentration());
    }

    #[test]
    fn test_set_replaces_field() {
        let mut state = PhysicalState::new(PhysicalQuantity::Concentration, DVector::zeros(2));
        state.set(PhysicalQuantity::Concentration, DVector::from_element(3, 1.0));

        assert_eq!(state.concentration().unwrap().len(), 3);
    }

    #[test]
    fn test_fields_are_mutable_in_place() {
        let mut state = PhysicalState::new(
            PhysicalQuantity::Concentration,
            DVector::from_row_slice(&[1.0, 2.0]),
        );

        for (_, field) in state.iter_mut() {
            *field *= 10.0;
        }
        if let Some(c) = state.get_mut(PhysicalQuantity::Concentration) {
            c[0] += 1.0;
        }

        let c = state.concentration().unwrap();
        assert_eq!(c[0], 11.0);
        assert_eq!(c[1], 20.0);
    }
}
