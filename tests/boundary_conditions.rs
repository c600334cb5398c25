//! Integration tests: ghost-cell policies seen through whole runs

use diffusion_rs::DiffusionError;
use diffusion_rs::models::PhysicalParameters;
use diffusion_rs::solver::{
    EulerSolver, EulerStepper, GhostCellPolicy, Scenario, SimulationResult, Solver,
    SolverConfiguration, euler_scheme,
};

mod common;
use common::grid_mass;

fn run(policy: GhostCellPolicy, profile: impl Fn(f64) -> f64, steps: usize) -> SimulationResult {
    let params = PhysicalParameters::free_diffusion(1.0);
    let scenario = Scenario::reaction_diffusion(params, 0.1, 5.0, policy)
        .unwrap()
        .with_initial_profile(profile);

    EulerSolver::new()
        .solve(&scenario, &SolverConfiguration::time_evolution(0.001, steps))
        .unwrap()
}

/// Unit block just inside the right wall
fn block_near_right_wall(x: f64) -> f64 {
    if (x - 4.8).abs() <= 0.15 { 1.0 } else { 0.0 }
}

#[test]
fn test_reflect_conserves_mass_of_gaussian() {
    let result = run(GhostCellPolicy::Reflect, |x| (-x * x).exp(), 1000);

    assert_eq!(result.x.len(), 101);
    let masses = result.masses();
    for mass in &masses {
        assert!((mass - masses[0]).abs() < 1e-9);
    }
}

#[test]
fn test_reflect_conserves_mass_at_the_wall() {
    let result = run(GhostCellPolicy::Reflect, block_near_right_wall, 2000);

    let masses = result.masses();
    let last = masses[masses.len() - 1];
    assert!((last - masses[0]).abs() < 1e-9, "{} vs {}", last, masses[0]);
}

#[test]
fn test_absorb_loses_mass_monotonically() {
    let result = run(GhostCellPolicy::Absorb, block_near_right_wall, 2000);

    let masses = result.masses();
    assert!(masses.windows(2).all(|w| w[1] <= w[0] + 1e-12));
    assert!(masses[masses.len() - 1] < 0.9 * masses[0]);

    // the wall cells are held at zero
    let last = &result.final_state;
    assert_eq!(last[0], 0.0);
    assert_eq!(last[last.len() - 1], 0.0);
}

#[test]
fn test_absorb_loses_mass_every_step_once_walls_are_reached() {
    let params = PhysicalParameters::free_diffusion(1.0);
    let scenario = Scenario::reaction_diffusion(params, 0.1, 5.0, GhostCellPolicy::Absorb)
        .unwrap()
        .with_initial_profile(block_near_right_wall);

    let mut stepper = EulerStepper::new(&scenario, 0.001).unwrap();
    let mut previous = stepper.next().unwrap().concentration.sum();
    let mut strict_steps = 0;

    for _ in 0..500 {
        // mass next to the wall cells feeds them during the next update
        let c = stepper.state().concentration().unwrap();
        let n = c.len();
        let feeding = c[2] + c[n - 3];

        let mass = stepper.next().unwrap().concentration.sum();
        if feeding > 1e-10 {
            assert!(mass < previous, "step {}: {} !< {}", stepper.step(), mass, previous);
            strict_steps += 1;
        } else {
            assert!(mass <= previous + 1e-12);
        }
        previous = mass;
    }

    assert_eq!(strict_steps, 500);
}

#[test]
fn test_periodic_wraps_around() {
    let steps = 40;
    let periodic = run(GhostCellPolicy::Periodic, block_near_right_wall, steps);
    let reflect = run(GhostCellPolicy::Reflect, block_near_right_wall, steps);

    // mass leaving at x = +L re-enters at x = -L
    assert!(periodic.final_state[0] > 0.0);
    assert_eq!(reflect.final_state[0], 0.0);
}

#[test]
fn test_unbounded_extends_domain() {
    let (x, ct) = euler_scheme(0.5, 1.0, 0.01, 3, 1.0, 1.0, 1.0, 1.0, None).unwrap();

    // 2·floor(20/0.5) + 1 physical cells over [-20, 20]
    assert_eq!(x.len(), 81);
    assert!((x[0] + 20.0).abs() < 1e-9);
    assert!((x[80] - 20.0).abs() < 1e-9);
    assert!(ct.iter().all(|c| c.len() == 81));

    let (x_none, _) = euler_scheme(0.5, 1.0, 0.01, 3, 1.0, 1.0, 1.0, 1.0, Some("none")).unwrap();
    assert_eq!(x, x_none);
}

#[test]
fn test_bounded_modes_keep_domain() {
    for mode in ["period", "periodic", "reflect", "absorb"] {
        let (x, _) = euler_scheme(0.5, 1.0, 0.01, 2, 1.0, 1.0, 1.0, 1.0, Some(mode)).unwrap();
        assert_eq!(x.len(), 5, "mode {}", mode);
    }
}

#[test]
fn test_unknown_mode_is_rejected() {
    let err = euler_scheme(0.1, 1.0, 0.01, 2, 1.0, 1.0, 1.0, 1.0, Some("mirror")).unwrap_err();
    assert_eq!(err, DiffusionError::UnknownBoundary("mirror".to_string()));
}

#[test]
fn test_production_accumulates_under_reflection() {
    // No degradation, closed box: mass grows by α·Σχdx per unit time
    let dx = 0.1;
    let dt = 0.001;
    let steps = 501;
    let params = PhysicalParameters::new(1.0, 0.0, 2.0, 1.0);
    let scenario = Scenario::reaction_diffusion(params, dx, 3.0, GhostCellPolicy::Reflect).unwrap();

    let result = EulerSolver::new()
        .solve(&scenario, &SolverConfiguration::time_evolution(dt, steps))
        .unwrap();

    let source = params.source().evaluate_series(&result.x);
    let rate = 2.0 * grid_mass(&source, dx);
    let expected = rate * (steps - 1) as f64 * dt;

    let produced = result.total_mass(steps - 1).unwrap() * dx;
    assert!((produced - expected).abs() < 1e-9, "{} vs {}", produced, expected);
}
