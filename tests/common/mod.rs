//! Common utilities for integration tests
#![allow(dead_code)]

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{ConstantGrowth, ExponentialDecay};
pub use test_helpers::{
    grid_mass, max_abs_difference, padded_grid, relative_error, unbounded_scenario,
};
