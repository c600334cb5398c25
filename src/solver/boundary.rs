//! Ghost-cell boundary policies
//!
//! # Design Philosophy
//!
//! The Laplacian always wraps around. Every boundary behaviour is obtained by
//! correcting the guard cells of the *fresh* field right after each update,
//! before the field is stored:
//!
//! | mode      | variant     | correction                                            |
//! |-----------|-------------|-------------------------------------------------------|
//! | none      | `Unbounded` | none, the domain is made 20× larger instead           |
//! | `period`  | `Periodic`  | none, the wrap is the intended physics                |
//! | `reflect` | `Reflect`   | guard mass folded into its neighbour, guards zeroed   |
//! | `absorb`  | `Absorb`    | two outermost cells on each side zeroed               |
//!
//! Mode strings are parsed strictly: anything outside the table is a
//! [`DiffusionError::UnknownBoundary`].

use std::fmt;
use std::str::FromStr;

use nalgebra::DVector;

use crate::error::{DiffusionError, Result};

/// Factor applied to `Lmax` when no boundary is requested
pub const UNBOUNDED_DOMAIN_SCALE: f64 = 20.0;

// =================================================================================================
// Ghost Cell Policy
// =================================================================================================

/// Boundary treatment of the two guard cells
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::GhostCellPolicy;
/// use nalgebra::DVector;
///
/// let policy: GhostCellPolicy = "reflect".parse().unwrap();
///
/// let mut c = DVector::from_row_slice(&[0.5, 1.0, 1.0, 1.0, 0.25]);
/// policy.apply(&mut c);
/// assert_eq!(c.as_slice(), &[0.0, 1.5, 1.0, 1.25, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GhostCellPolicy {
    /// No wall: the grid is extended ×20 so the edges are never reached
    #[default]
    Unbounded,

    /// Periodic wrap of the Laplacian, no correction
    Periodic,

    /// No-flux wall, total mass conserved
    Reflect,

    /// Perfect sink at both ends
    Absorb,
}

impl GhostCellPolicy {
    /// Map an optional mode string, `None` meaning [`GhostCellPolicy::Unbounded`]
    ///
    /// # Errors
    ///
    /// [`DiffusionError::UnknownBoundary`] for an unrecognized string.
    pub fn from_option(mode: Option<&str>) -> Result<Self> {
        match mode {
            Some(mode) => mode.parse(),
            None => Ok(Self::Unbounded),
        }
    }

    /// Factor applied to the requested half-width before building the grid
    pub fn domain_scale(&self) -> f64 {
        match self {
            Self::Unbounded => UNBOUNDED_DOMAIN_SCALE,
            Self::Periodic | Self::Reflect | Self::Absorb => 1.0,
        }
    }

    /// Whether the policy keeps the total mass of a source-free, decay-free run
    pub fn conserves_mass(&self) -> bool {
        !matches!(self, Self::Absorb)
    }

    /// Mode string accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unbounded => "none",
            Self::Periodic => "period",
            Self::Reflect => "reflect",
            Self::Absorb => "absorb",
        }
    }

    /// Correct the guard cells of a freshly updated field in place
    ///
    /// Fields shorter than the cells a policy touches are left as they are
    /// for `Reflect`, and zeroed entirely for `Absorb`.
    pub fn apply(&self, field: &mut DVector<f64>) {
        let n = field.len();

        match self {
            Self::Unbounded | Self::Periodic => {}

            Self::Reflect => {
                if n < 3 {
                    return;
                }
                field[1] += field[0];
                field[n - 2] += field[n - 1];
                field[0] = 0.0;
                field[n - 1] = 0.0;
            }

            Self::Absorb => {
                if n < 4 {
                    field.fill(0.0);
                    return;
                }
                field[0] = 0.0;
                field[1] = 0.0;
                field[n - 2] = 0.0;
                field[n - 1] = 0.0;
            }
        }
    }
}

impl FromStr for GhostCellPolicy {
    type Err = DiffusionError;

    fn from_str(mode: &str) -> Result<Self> {
        match mode {
            "none" => Ok(Self::Unbounded),
            "period" | "periodic" => Ok(Self::Periodic),
            "reflect" => Ok(Self::Reflect),
            "absorb" => Ok(Self::Absorb),
            other => Err(DiffusionError::UnknownBoundary(other.to_string())),
        }
    }
}

impl fmt::Display for GhostCellPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
