//! Physical parameter bundle for one run
//!
//! Values are taken as given. `D <= 0` or `β <= 0` only become a problem
//! where a formula divides by them (Green's function length scale), and then
//! surface as `inf`/`NaN` in the returned arrays.

use crate::models::source::SourceShape;

/// Scalar parameters of `∂t c = D ∂x² c − β c + α·source(x)`
///
/// # Example
///
/// ```rust
/// use diffusion_rs::models::{PhysicalParameters, SourceShape};
///
/// let params = PhysicalParameters::new(1.0, 0.5, 2.0, 0.5);
/// assert_eq!(params.source(), SourceShape::centered(0.5));
///
/// let shifted = params.with_offset(1.0);
/// assert_eq!(shifted.source(), SourceShape::offset(0.5, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParameters {
    /// Diffusion coefficient D
    pub diffusion: f64,

    /// Degradation rate β
    pub degradation: f64,

    /// Production rate α
    pub production: f64,

    /// Width w of the production region
    pub width: f64,

    /// Start x0 of the production region, centered on 0 when unset
    pub offset: Option<f64>,
}

impl PhysicalParameters {
    /// Centered source of width `w`
    pub fn new(diffusion: f64, degradation: f64, production: f64, width: f64) -> Self {
        Self {
            diffusion,
            degradation,
            production,
            width,
            offset: None,
        }
    }

    /// Same parameters with the source moved to `[x0, x0 + w]`
    pub fn with_offset(mut self, x0: f64) -> Self {
        self.offset = Some(x0);
        self
    }

    /// Pure diffusion: no production, no degradation
    pub fn free_diffusion(diffusion: f64) -> Self {
        Self::new(diffusion, 0.0, 0.0, 1.0)
    }

    /// Shape of the production region
    pub fn source(&self) -> SourceShape {
        match self.offset {
            Some(start) => SourceShape::offset(self.width, start),
            None => SourceShape::centered(self.width),
        }
    }

    /// Decay length `λ = √(D/β)` of the steady-state profile
    pub fn decay_length(&self) -> f64 {
        (self.diffusion / self.degradation).sqrt()
    }

    /// Largest stable forward-Euler time step on a grid of spacing `dx`
    ///
    /// The most negative eigenvalue of the discrete operator
    /// `D·lap − β` is `−(4D/dx² + β)`, so the update stays bounded for
    ///
    /// ```text
    /// dt ≤ 2 / (4D/dx² + β)      (≈ dx²/(2D) when β is small)
    /// ```
    ///
    /// This is informative only. Nothing in the crate rejects a larger `dt`.
    pub fn stability_limit(&self, dx: f64) -> f64 {
        2.0 / (4.0 * self.diffusion / (dx * dx) + self.degradation)
    }
}
