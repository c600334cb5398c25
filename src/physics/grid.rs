//! Spatial grid and field builder
//!
//! The grid spans `[-Lmax-dx, Lmax+dx]` with `2*floor(Lmax/dx)+3` points.
//! The first and last points are guard cells: the integrator writes into
//! them, boundary policies read them, and every result handed back to a
//! caller has them stripped.
//!
//! ```text
//!  guard                 physical domain                  guard
//!   [0] | [1]  [2]  ...  [n/2] (x = 0)  ...  [n-3]  [n-2] | [n-1]
//!  -L-dx  -L                                          +L    +L+dx
//! ```

use nalgebra::DVector;

use crate::error::{DiffusionError, Result};

/// Upper bound on the number of points of a padded grid
const MAX_POINTS: usize = usize::MAX / 2;

/// Evenly spaced samples over `[start, stop]`, both ends included
///
/// Matches the usual `linspace` convention: `start + i*step` with
/// `step = (stop - start)/(num - 1)`, and the last sample pinned to `stop`.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
            values[num - 1] = stop;
            values
        }
    }
}

/// Uniform 1D grid with one guard cell on each side
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialGrid {
    coordinates: Vec<f64>,
    dx: f64,
    l_max: f64,
}

impl SpatialGrid {
    /// Build the padded grid over `[-l_max-dx, l_max+dx]`
    ///
    /// # Errors
    ///
    /// `DiffusionError::InvalidGrid` when `dx` is not strictly positive or
    /// either value is not finite, when `l_max` is negative, or when
    /// `l_max / dx` asks for more than `usize::MAX / 2` points.
    ///
    /// # Example
    ///
    /// ```
    /// use diffusion_rs::physics::SpatialGrid;
    ///
    /// let grid = SpatialGrid::padded(0.1, 5.0).unwrap();
    /// assert_eq!(grid.len(), 103);
    /// assert_eq!(grid.interior_coordinates().len(), 101);
    /// ```
    pub fn padded(dx: f64, l_max: f64) -> Result<Self> {
        if !dx.is_finite() || !l_max.is_finite() {
            return Err(DiffusionError::invalid_grid("values must be finite", dx, l_max));
        }
        if dx <= 0.0 {
            return Err(DiffusionError::invalid_grid("dx must be positive", dx, l_max));
        }
        if l_max < 0.0 {
            return Err(DiffusionError::invalid_grid("l_max must not be negative", dx, l_max));
        }

        let points = 2.0 * (l_max / dx).floor() + 3.0;
        if !points.is_finite() || points > MAX_POINTS as f64 {
            return Err(DiffusionError::invalid_grid("too many grid points", dx, l_max));
        }
        let points = points as usize;
        let coordinates = linspace(-l_max - dx, l_max + dx, points);

        Ok(Self {
            coordinates,
            dx,
            l_max,
        })
    }

    /// Number of points, guard cells included
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Always false for a grid built by [`SpatialGrid::padded`]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Nominal spatial step (the one used by the finite differences)
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Half-width of the physical domain
    pub fn l_max(&self) -> f64 {
        self.l_max
    }

    /// Distance between consecutive coordinates
    ///
    /// Equal to `dx` when `l_max` is a multiple of `dx`.
    pub fn spacing(&self) -> f64 {
        self.coordinates[1] - self.coordinates[0]
    }

    /// All coordinates, guard cells included
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Coordinates without the two guard cells
    pub fn interior_coordinates(&self) -> Vec<f64> {
        self.coordinates[1..self.coordinates.len() - 1].to_vec()
    }

    /// Zero concentration on every point
    pub fn zero_field(&self) -> DVector<f64> {
        DVector::zeros(self.len())
    }

    /// Field sampled from `profile(x)` on every point
    pub fn field_from<F>(&self, profile: F) -> DVector<f64>
    where
        F: Fn(f64) -> f64,
    {
        DVector::from_iterator(self.len(), self.coordinates.iter().map(|&x| profile(x)))
    }

    /// Drop the first and last entries of a padded field
    pub fn strip(field: &DVector<f64>) -> DVector<f64> {
        if field.len() < 2 {
            return DVector::zeros(0);
        }
        field.rows(1, field.len() - 2).into_owned()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
