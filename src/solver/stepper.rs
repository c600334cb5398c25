//! Resumable forward-Euler stepping
//!
//! [`EulerStepper`] produces one snapshot per call to `next()`. The first
//! snapshot is the initial condition, each following one is the result of a
//! single update:
//!
//! ```text
//! c ← c + dt · f(c)          f = model right-hand side, every cell
//! policy.apply(c)            guard-cell correction on the fresh field
//! ```
//!
//! The iterator never ends on its own. Take as many snapshots as needed and
//! drop it to stop early.

use nalgebra::DVector;

use crate::error::{DiffusionError, Result};
use crate::physics::{PhysicalState, SpatialGrid};
use crate::solver::Scenario;

/// One stored instant of a run
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Number of updates performed so far
    pub step: usize,

    /// `step · dt`
    pub time: f64,

    /// Concentration on the physical cells (guard cells removed)
    pub concentration: DVector<f64>,
}

/// Iterator over the snapshots of a forward-Euler integration
///
/// # Example
///
/// ```rust
/// use diffusion_rs::models::PhysicalParameters;
/// use diffusion_rs::solver::{EulerStepper, GhostCellPolicy, Scenario};
///
/// let params = PhysicalParameters::new(1.0, 0.0, 0.0, 0.5);
/// let scenario = Scenario::reaction_diffusion(params, 0.1, 1.0, GhostCellPolicy::Reflect)
///     .unwrap()
///     .with_initial_profile(|x| if x.abs() < 0.3 { 1.0 } else { 0.0 });
///
/// let stepper = EulerStepper::new(&scenario, 0.001).unwrap();
/// let masses: Vec<f64> = stepper.take(50).map(|s| s.concentration.sum()).collect();
///
/// assert_eq!(masses.len(), 50);
/// assert!((masses[49] - masses[0]).abs() < 1e-9);
/// ```
pub struct EulerStepper<'a> {
    scenario: &'a Scenario,
    dt: f64,
    state: PhysicalState,
    step: usize,
    started: bool,
}

impl<'a> EulerStepper<'a> {
    /// Start from the scenario's initial state
    ///
    /// # Errors
    ///
    /// - [`DiffusionError::InvalidConfiguration`] when `dt` is not a positive finite number
    /// - Any error of [`Scenario::validate`]
    pub fn new(scenario: &'a Scenario, dt: f64) -> Result<Self> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(DiffusionError::InvalidConfiguration(format!(
                "time step must be positive and finite, got {}",
                dt
            )));
        }
        scenario.validate()?;

        Ok(Self {
            scenario,
            dt,
            state: scenario.initial_state.clone(),
            step: 0,
            started: false,
        })
    }

    /// Updates performed so far
    pub fn step(&self) -> usize {
        self.step
    }

    /// Time of the current state
    pub fn time(&self) -> f64 {
        self.step as f64 * self.dt
    }

    /// Current state on the padded grid, guard cells included
    pub fn state(&self) -> &PhysicalState {
        &self.state
    }

    /// Perform one update of the current state
    fn advance(&mut self) {
        let rate = self.scenario.model.compute_physics(&self.state);

        for (quantity, field) in self.state.iter_mut() {
            if let Some(derivative) = rate.get(*quantity) {
                euler_update(field, derivative, self.dt);
            }
            self.scenario.boundary.apply(field);
        }

        self.step += 1;
    }

    fn snapshot(&self) -> Snapshot {
        let concentration = self
            .state
            .concentration()
            .map(SpatialGrid::strip)
            .unwrap_or_else(|| DVector::zeros(0));

        Snapshot {
            step: self.step,
            time: self.time(),
            concentration,
        }
    }
}

impl Iterator for EulerStepper<'_> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            self.advance();
        } else {
            self.started = true;
        }
        Some(self.snapshot())
    }
}

/// `field += dt · rate`, element-wise
///
/// With the `parallel` feature, fields of at least
/// [`parallel_threshold()`](crate::solver::parallel_threshold) cells are
/// updated on the rayon pool. Every element is computed by the same
/// expression, so both paths give identical results.
pub(crate) fn euler_update(field: &mut DVector<f64>, rate: &DVector<f64>, dt: f64) {
    #[cfg(feature = "parallel")]
    {
        if field.len() >= crate::solver::parallel_threshold() {
            use rayon::prelude::*;

            field
                .as_mut_slice()
                .par_iter_mut()
                .zip(rate.as_slice().par_iter())
                .for_each(|(c, r)| *c += dt * r);
            return;
        }
    }

    for (c, r) in field.iter_mut().zip(rate.iter()) {
        *c += dt * r;
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhysicalParameters;
    use crate::solver::GhostCellPolicy;

    fn scenario(boundary: GhostCellPolicy) -> Scenario {
        let params = PhysicalParameters::new(1.0, 0.0, 0.0, 0.5);
        Scenario::reaction_diffusion(params, 0.1, 1.0, boundary)
            .unwrap()
            .with_initial_profile(|x| if x.abs() <= 0.95 && x >= 0.75 { 1.0 } else { 0.0 })
    }

    #[test]
    fn test_first_snapshot_is_initial_condition() {
        let scenario = scenario(GhostCellPolicy::Reflect);
        let mut stepper = EulerStepper::new(&scenario, 0.001).unwrap();

        let first = stepper.next().unwrap();
        assert_eq!(first.step, 0);
        assert_eq!(first.time, 0.0);

        let initial = scenario.initial_state.concentration().unwrap();
        assert_eq!(first.concentration, SpatialGrid::strip(initial));
        assert_eq!(first.concentration.len(), 21);
    }

    #[test]
    fn test_time_is_computed_from_index() {
        let scenario = scenario(GhostCellPolicy::Periodic);
        let last = EulerStepper::new(&scenario, 0.1).unwrap().nth(30).unwrap();

        assert_eq!(last.step, 30);
        assert_eq!(last.time, 30.0 * 0.1);
    }

    #[test]
    fn test_single_update_matches_formula() {
        let params = PhysicalParameters::new(0.5, 0.2, 1.0, 1.0);
        let scenario = Scenario::reaction_diffusion(params, 0.5, 2.0, GhostCellPolicy::Periodic)
            .unwrap()
            .with_initial_profile(|x| 1.0 + 0.1 * x);

        let dt = 0.01;
        let c0 = scenario.initial_state.concentration().unwrap().clone();
        let x = scenario.grid.coordinates().to_vec();
        let n = c0.len();

        let mut stepper = EulerStepper::new(&scenario, dt).unwrap();
        stepper.next();
        stepper.next();
        let c1 = stepper.state().concentration().unwrap();

        for i in 0..n {
            let lap = (c0[(i + 1) % n] + c0[(i + n - 1) % n] - 2.0 * c0[i]) / 0.25;
            let source = if x[i].abs() <= 0.5 { 1.0 } else { 0.0 };
            let expected = c0[i] + dt * (0.5 * lap - 0.2 * c0[i] + source);
            assert!((c1[i] - expected).abs() < 1e-12, "cell {}: {} vs {}", i, c1[i], expected);
        }
    }

    #[test]
    fn test_reflect_keeps_guard_cells_empty() {
        let scenario = scenario(GhostCellPolicy::Reflect);
        let mut stepper = EulerStepper::new(&scenario, 0.001).unwrap();

        for _ in 0..200 {
            stepper.next();
            let c = stepper.state().concentration().unwrap();
            assert_eq!(c[0], 0.0);
            assert_eq!(c[c.len() - 1], 0.0);
        }
    }

    #[test]
    fn test_absorb_clears_two_cells_per_side() {
        let scenario = scenario(GhostCellPolicy::Absorb);
        let mut stepper = EulerStepper::new(&scenario, 0.001).unwrap();
        stepper.next();
        stepper.next();

        let c = stepper.state().concentration().unwrap();
        let n = c.len();
        assert_eq!([c[0], c[1], c[n - 2], c[n - 1]], [0.0; 4]);
    }

    #[test]
    fn test_rejects_bad_time_step() {
        let scenario = scenario(GhostCellPolicy::Reflect);
        assert!(EulerStepper::new(&scenario, 0.0).is_err());
        assert!(EulerStepper::new(&scenario, f64::INFINITY).is_err());
    }

    #[test]
    fn test_euler_update() {
        let mut field = DVector::from_row_slice(&[1.0, 2.0]);
        euler_update(&mut field, &DVector::from_row_slice(&[10.0, -10.0]), 0.1);
        assert_eq!(field.as_slice(), &[2.0, 1.0]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_update_is_identical() {
        let rate = DVector::from_fn(5000, |i, _| (i as f64).sin());
        let start = DVector::from_fn(5000, |i, _| (i as f64).cos());

        let mut sequential = start.clone();
        {
            let _guard = crate::solver::ThresholdGuard::save(usize::MAX);
            euler_update(&mut sequential, &rate, 0.003);
        }

        let mut parallel = start;
        {
            let _guard = crate::solver::ThresholdGuard::save(1);
            euler_update(&mut parallel, &rate, 0.003);
        }

        assert_eq!(sequential, parallel);
    }
}
