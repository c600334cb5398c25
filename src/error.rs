//! Error type shared by the grid, scenario and solver layers
//!
//! Physical parameters (`D`, `β`, evaluation time) are never validated here:
//! a non-physical value propagates as `inf`/`NaN` through the arithmetic.
//! Only usage errors are reported, i.e. inputs for which no array can be
//! built or no boundary policy can be selected.

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, DiffusionError>;

/// Usage errors reported by diffusion-rs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiffusionError {
    /// Boundary mode string that does not name a [`GhostCellPolicy`](crate::solver::GhostCellPolicy)
    #[error("unknown boundary condition '{0}' (expected one of: none, period, reflect, absorb)")]
    UnknownBoundary(String),

    /// Grid parameters from which no coordinate array can be built
    #[error("invalid grid: {message} (dx={dx}, l_max={l_max})")]
    InvalidGrid {
        message: String,
        dx: f64,
        l_max: f64,
    },

    /// Solver configuration outside its domain (non-positive dt, zero steps)
    #[error("invalid solver configuration: {0}")]
    InvalidConfiguration(String),

    /// Two arrays that must share a length do not
    #[error("length mismatch for {name}: expected {expected}, got {actual}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl DiffusionError {
    pub(crate) fn invalid_grid(message: impl Into<String>, dx: f64, l_max: f64) -> Self {
        Self::InvalidGrid {
            message: message.into(),
            dx,
            l_max,
        }
    }
}
