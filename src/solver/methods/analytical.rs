//! Closed-form reference solutions
//!
//! # Free diffusion
//!
//! `N` particles released at `x = 0` spread as
//!
//! ```text
//! c(x,t) = N / √(4πDt) · exp(−x² / (4Dt))
//! ```
//!
//! # Steady state with degradation
//!
//! The Green's function of `D ∂x² − β` on the real line is
//!
//! ```text
//! G(x) = exp(−|x|/λ) / (2√(Dβ)),      λ = √(D/β)
//! ```
//!
//! and the steady profile is the convolution of `G` with the production term,
//! evaluated here by direct summation on the grid:
//!
//! ```text
//! c_ss = (G ∗ α χ) · dx
//! ```
//!
//! Parameters are not checked: `t = 0`, `D <= 0` or `β <= 0` give `inf`/`NaN`.

use crate::models::{PhysicalParameters, chi, chi_x0};

/// Gaussian spread of `n` particles released at the origin
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::analytical_solution;
///
/// let c = analytical_solution(&[0.0], 1.0, 1.0, 1.0);
/// assert!((c[0] - 1.0 / (4.0 * std::f64::consts::PI).sqrt()).abs() < 1e-15);
/// ```
pub fn analytical_solution(x: &[f64], t: f64, d: f64, n: f64) -> Vec<f64> {
    let spread = 4.0 * d * t;
    let amplitude = n / (std::f64::consts::PI * spread).sqrt();

    x.iter()
        .map(|&xi| amplitude * (-xi * xi / spread).exp())
        .collect()
}

/// Green's function of `D ∂x² − β` sampled on `x`
pub fn greens_function(x: &[f64], d: f64, beta: f64) -> Vec<f64> {
    let lambda = (d / beta).sqrt();
    let norm = 2.0 * (d * beta).sqrt();

    x.iter().map(|&xi| (-xi.abs() / lambda).exp() / norm).collect()
}

/// Discrete convolution truncated to the longer input, centered
///
/// Same indexing as the `"same"` mode of the usual numerical libraries: with
/// `n` the shorter length, output `k` is entry `k + (n-1) - n/2` of the full
/// convolution. Either input empty gives an empty result.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::convolve_same;
///
/// let out = convolve_same(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 1.0, 1.0]);
/// assert_eq!(out, vec![3.0, 6.0, 9.0, 12.0, 9.0]);
/// ```
pub fn convolve_same(a: &[f64], v: &[f64]) -> Vec<f64> {
    if a.is_empty() || v.is_empty() {
        return Vec::new();
    }

    let (long, short) = if v.len() > a.len() { (v, a) } else { (a, v) };
    let n = short.len();
    let offset = (n - 1) - n / 2;

    let full_at = |j: usize| -> f64 {
        // full[j] = Σ long[i]·short[j−i] over valid i
        let lo = j.saturating_sub(n - 1);
        let hi = j.min(long.len() - 1);
        (lo..=hi).map(|i| long[i] * short[j - i]).sum()
    };

    #[cfg(feature = "parallel")]
    {
        if long.len() >= crate::solver::parallel_threshold() {
            use rayon::prelude::*;
            return (0..long.len())
                .into_par_iter()
                .map(|k| full_at(k + offset))
                .collect();
        }
    }

    (0..long.len()).map(|k| full_at(k + offset)).collect()
}

/// Steady state for the centered source of width `w`
pub fn steady(x: &[f64], d: f64, beta: f64, alpha: f64, w: f64, dx: f64) -> Vec<f64> {
    let production: Vec<f64> = chi(x, w).into_iter().map(|s| alpha * s).collect();
    convolve_steady(x, d, beta, &production, dx)
}

/// Steady state for the source on `[x0, x0 + w]`
pub fn steady_x0(x: &[f64], d: f64, beta: f64, alpha: f64, w: f64, x0: f64, dx: f64) -> Vec<f64> {
    let production: Vec<f64> = chi_x0(x, w, x0).into_iter().map(|s| alpha * s).collect();
    convolve_steady(x, d, beta, &production, dx)
}

fn convolve_steady(x: &[f64], d: f64, beta: f64, production: &[f64], dx: f64) -> Vec<f64> {
    let kernel = greens_function(x, d, beta);
    convolve_same(&kernel, production)
        .into_iter()
        .map(|value| value * dx)
        .collect()
}

/// Steady state of a parameter set
///
/// Picks [`steady`] or [`steady_x0`] from [`PhysicalParameters::offset`].
///
/// # Example
///
/// ```rust
/// use diffusion_rs::models::PhysicalParameters;
/// use diffusion_rs::physics::linspace;
/// use diffusion_rs::solver::GreensSteadyState;
///
/// let x = linspace(-10.0, 10.0, 201);
/// let params = PhysicalParameters::new(1.0, 1.0, 1.0, 1.0);
/// let profile = GreensSteadyState::new(params).evaluate(&x, 0.1);
///
/// // production balances degradation: β·∫c dx = α·Σχ·dx, and the
/// // 11 grid points inside [-0.5, 0.5] give Σχ·dx = 1.1
/// let total: f64 = profile.iter().sum::<f64>() * 0.1;
/// assert!((total - 1.1).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreensSteadyState {
    params: PhysicalParameters,
}

impl GreensSteadyState {
    pub fn new(params: PhysicalParameters) -> Self {
        Self { params }
    }

    /// Steady profile on `x` with quadrature step `dx`
    pub fn evaluate(&self, x: &[f64], dx: f64) -> Vec<f64> {
        let p = &self.params;
        match p.offset {
            Some(x0) => steady_x0(x, p.diffusion, p.degradation, p.production, p.width, x0, dx),
            None => steady(x, p.diffusion, p.degradation, p.production, p.width, dx),
        }
    }

    /// Decay length of the profile outside the source
    pub fn decay_length(&self) -> f64 {
        self.params.decay_length()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
