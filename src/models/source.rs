//! Spatial production profiles
//!
//! Defines where particles are produced along x. Both rectangular shapes
//! integrate to one (indicator of the region divided by its width), so the
//! production rate α alone sets how many particles appear per unit time.
//!
//! Interval ends are **included**: a grid point sitting exactly on `±w/2`
//! (or on `x0`, `x0 + w`) receives `1/w`. The steady-state convolution relies
//! on the same sampling, so both sides see the same discrete source.
//!
//! # Example
//!
//! ```rust
//! use diffusion_rs::models::SourceShape;
//!
//! let source = SourceShape::centered(0.5);
//! assert_eq!(source.evaluate(0.25), 2.0);   // edge is inside
//! assert_eq!(source.evaluate(0.3), 0.0);
//!
//! let shifted = SourceShape::offset(1.0, 2.0);
//! assert_eq!(shifted.evaluate(2.0), 1.0);
//! assert_eq!(shifted.evaluate(3.0), 1.0);
//! assert_eq!(shifted.evaluate(1.9), 0.0);
//! ```

use nalgebra::DVector;

/// Shape function of the production region
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceShape {
    /// `1/w` on `[-w/2, w/2]`
    Centered { width: f64 },

    /// `1/w` on `[start, start + w]`
    Offset { width: f64, start: f64 },

    /// No production anywhere
    None,
}

impl SourceShape {
    /// Region of width `width` centered on `x = 0`
    pub fn centered(width: f64) -> Self {
        Self::Centered { width }
    }

    /// Region of width `width` starting at `start`
    pub fn offset(width: f64, start: f64) -> Self {
        Self::Offset { width, start }
    }

    /// No production
    pub fn none() -> Self {
        Self::None
    }

    /// Evaluate the shape function at one coordinate
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            Self::Centered { width } => {
                if x <= width / 2.0 && x >= -width / 2.0 {
                    1.0 / width
                } else {
                    0.0
                }
            }

            Self::Offset { width, start } => {
                if x >= start && x <= start + width {
                    1.0 / width
                } else {
                    0.0
                }
            }

            Self::None => 0.0,
        }
    }

    /// Evaluate at every coordinate
    pub fn evaluate_series(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&xi| self.evaluate(xi)).collect()
    }

    /// Evaluate at every coordinate, as a field
    pub fn profile(&self, x: &[f64]) -> DVector<f64> {
        DVector::from_iterator(x.len(), x.iter().map(|&xi| self.evaluate(xi)))
    }
}

/// Centered production profile: `1/w` on `[-w/2, w/2]`, 0 elsewhere
pub fn chi(x: &[f64], w: f64) -> Vec<f64> {
    SourceShape::centered(w).evaluate_series(x)
}

/// Shifted production profile: `1/w` on `[x0, x0 + w]`, 0 elsewhere
pub fn chi_x0(x: &[f64], w: f64, x0: f64) -> Vec<f64> {
    SourceShape::offset(w, x0).evaluate_series(x)
}

// =================================================================================================
// Tests
// =================================================================================================
