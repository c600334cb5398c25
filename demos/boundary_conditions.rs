//! The four ghost-cell policies on one problem
//!
//! A Gaussian released next to the right wall diffuses for one time unit
//! under each policy. Reflecting walls keep every particle, absorbing walls
//! lose them, periodic walls send them back in from the left.
//!
//! ```bash
//! RUST_LOG=warn cargo run --example boundary_conditions
//! ```

use diffusion_rs::{
    models::PhysicalParameters,
    output::visualization::{PlotConfig, plot_profiles},
    solver::{EulerSolver, GhostCellPolicy, Scenario, Solver, SolverConfiguration},
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== Ghost-cell policies ===\n");

    let params = PhysicalParameters::free_diffusion(1.0);
    let (dx, l_max, dt) = (0.1, 5.0, 0.001);
    let config = SolverConfiguration::time_evolution(dt, 1001);

    let mut finals = Vec::new();

    for mode in ["none", "period", "reflect", "absorb"] {
        let policy: GhostCellPolicy = mode.parse()?;
        let scenario = Scenario::reaction_diffusion(params, dx, l_max, policy)?
            .with_initial_profile(|x| (-(x - 4.0).powi(2) / 0.1).exp());

        let result = EulerSolver::new().solve(&scenario, &config)?;
        let masses = result.masses();

        println!(
            "{:>8}: {} cells, mass {:.6} → {:.6}",
            mode,
            result.x.len(),
            masses[0] * dx,
            masses[masses.len() - 1] * dx
        );

        // Only the bounded domain is comparable on one plot
        if policy != GhostCellPolicy::Unbounded {
            finals.push((mode, result.x, result.final_state.as_slice().to_vec()));
        }
    }

    let x = finals[0].1.clone();
    let profiles: Vec<(&str, &[f64])> = finals
        .iter()
        .map(|(mode, _, values)| (*mode, values.as_slice()))
        .collect();

    let path = std::env::temp_dir().join("boundary_conditions.png");
    let plot_config = PlotConfig::profile("Profiles at t = 1");
    plot_profiles(&x, &profiles, &path.to_string_lossy(), Some(&plot_config))?;
    println!("\n✓ {}", path.display());

    Ok(())
}
