//! Steady state of a localized source
//!
//! ∂c/∂t = D·∂²c/∂x² − β·c + α·χ(x)
//!
//! Runs on the ×20 extended domain until the transient has decayed, then
//! compares the profile with the Green's function steady state.
//!
//! ```bash
//! RUST_LOG=info cargo run --example reaction_diffusion
//! ```

use diffusion_rs::{
    models::PhysicalParameters,
    output::{
        export::{CsvConfig, CsvMetadata, export_profiles_csv, export_result_csv},
        visualization::{PlotConfig, plot_against_reference, plot_profile_evolution},
    },
    solver::{EulerSolver, GhostCellPolicy, GreensSteadyState, LogProgress, Scenario, SolverConfiguration},
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== Reaction-Diffusion: approach to steady state ===\n");

    // Physical parameters
    let params = PhysicalParameters::new(1.0, 1.0, 1.0, 1.0);
    let dx = 0.1;
    let l_max = 2.0;

    // Time stepping: well inside the stability limit
    let limit = params.stability_limit(dx);
    let dt: f64 = 0.004;
    let final_time: f64 = 15.0;
    let ndt = (final_time / dt).round() as usize + 1;

    println!("Physical Parameters:");
    println!("  D = {}, β = {}, α = {}, w = {}", params.diffusion, params.degradation, params.production, params.width);
    println!("  Decay length λ = {:.3}", params.decay_length());
    println!("\nSimulation:");
    println!("  dx = {}, dt = {} (limit {:.5})", dx, dt, limit);
    println!("  {} snapshots up to t = {}\n", ndt, final_time);

    let scenario = Scenario::reaction_diffusion(params, dx, l_max, GhostCellPolicy::Unbounded)?;
    let config = SolverConfiguration::time_evolution(dt, ndt);

    let start = std::time::Instant::now();
    let result = EulerSolver::new().solve_with_progress(&scenario, &config, &mut LogProgress::new(20))?;
    println!("✓ Euler completed in {:.3}s", start.elapsed().as_secs_f64());

    // Analysis
    let reference = GreensSteadyState::new(params).evaluate(&result.x, dx);
    let max_error = result
        .final_state
        .iter()
        .zip(reference.iter())
        .map(|(c, r)| (c - r).abs())
        .fold(0.0, f64::max);

    let center = result.x.len() / 2;
    println!("\nAnalysis:");
    println!("  c(0) numerical  = {:.6}", result.final_state[center]);
    println!("  c(0) analytical = {:.6}", reference[center]);
    println!("  max |error|     = {:.3e}\n", max_error);

    // Output
    let tmp_dir = std::env::temp_dir();
    let path = |name: &str| tmp_dir.join(name).to_string_lossy().into_owned();

    let metadata = CsvMetadata::from_result(&result).with_parameters(params);
    let csv_config = CsvConfig::default().with_metadata(metadata);
    export_result_csv(&result, Some(6), &path("rd_history.csv"), Some(&csv_config))?;
    println!("✓ rd_history.csv");

    export_profiles_csv(
        &result.x,
        &[result.final_state.as_slice().to_vec(), reference.clone()],
        &["euler", "steady"],
        &path("rd_steady.csv"),
        None,
    )?;
    println!("✓ rd_steady.csv");

    plot_profile_evolution(&result, 6, &path("rd_evolution.png"), None)?;
    println!("✓ rd_evolution.png");

    let plot_config = PlotConfig::profile("Euler vs Green's function");
    plot_against_reference(
        &result.x,
        result.final_state.as_slice(),
        &reference,
        &path("rd_steady.svg"),
        Some(&plot_config),
    )?;
    println!("✓ rd_steady.svg");

    println!("\n=== Simulation Complete ===");

    Ok(())
}
