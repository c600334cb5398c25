//! Periodic second-difference operator
//!
//! ```text
//! lap[i] = (c[i+1] + c[i-1] - 2 c[i]) / dx²      indices mod n
//! ```
//!
//! The wrap is applied unconditionally. Non-periodic boundaries are obtained
//! by correcting the guard cells after each update
//! ([`GhostCellPolicy::apply`](crate::solver::GhostCellPolicy::apply)),
//! never by special-casing the operator.

use nalgebra::DVector;

/// Discrete Laplacian with periodic wraparound
///
/// A single-cell field is its own neighbour on both sides and gives 0.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::solver::numerical_laplacian;
/// use nalgebra::DVector;
///
/// let c = DVector::from_row_slice(&[1.0, 0.0, 0.0, 0.0]);
/// let lap = numerical_laplacian(&c, 1.0);
/// assert_eq!(lap.as_slice(), &[-2.0, 1.0, 0.0, 1.0]);
/// ```
pub fn numerical_laplacian(c: &DVector<f64>, dx: f64) -> DVector<f64> {
    let n = c.len();
    let inv_dx2 = 1.0 / (dx * dx);

    DVector::from_fn(n, |i, _| {
        let left = c[(i + n - 1) % n];
        let right = c[(i + 1) % n];
        (right + left - 2.0 * c[i]) * inv_dx2
    })
}
