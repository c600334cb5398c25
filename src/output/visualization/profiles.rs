//! Spatial profile plotting
//!
//! Every function draws one or more curves `c(x)` on shared axes. The output
//! format follows the file extension: `.svg` gives an SVG file, anything else
//! a bitmap (PNG).
//!
//! # Usage
//!
//! ```rust,ignore
//! use diffusion_rs::output::visualization::{plot_against_reference, plot_profile_evolution};
//!
//! let result = EulerSolver::new().solve(&scenario, &config)?;
//! plot_profile_evolution(&result, 6, "evolution.png", None)?;
//!
//! let reference = steady(&result.x, 1.0, 1.0, 1.0, 0.5, dx);
//! plot_against_reference(&result.x, result.final_state.as_slice(), &reference, "check.svg", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{NO_TITLE, PlotConfig};
use crate::output::snapshot_indices;
use crate::solver::SimulationResult;

/// One labelled curve
pub type Profile<'a> = (&'a str, &'a [f64]);

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Overlay several profiles sampled on the same coordinates
///
/// # Errors
///
/// - Empty `x` or no profile
/// - A profile whose length differs from `x`
/// - Drawing or file errors from the backend
pub fn plot_profiles(
    x: &[f64],
    profiles: &[Profile<'_>],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    validate_profiles(x, profiles)?;

    let default_config = PlotConfig::profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_profiles_impl(backend, x, profiles, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_profiles_impl(backend, x, profiles, config)
        }
    }
}

/// Plot `n_snapshots` evenly spaced snapshots of a run, labelled by time
pub fn plot_profile_evolution(
    result: &SimulationResult,
    n_snapshots: usize,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if result.is_empty() {
        return Err("Empty trajectory".into());
    }

    let indices = snapshot_indices(result.len(), n_snapshots);
    let labels: Vec<String> = indices
        .iter()
        .map(|&n| format!("t = {:.3}", result.time_points[n]))
        .collect();

    let profiles: Vec<Profile<'_>> = indices
        .iter()
        .zip(labels.iter())
        .map(|(&n, label)| (label.as_str(), result.state_trajectory[n].as_slice()))
        .collect();

    let default_config = PlotConfig::evolution(NO_TITLE);
    plot_profiles(&result.x, &profiles, output_path, Some(config.unwrap_or(&default_config)))
}

/// Numerical profile against a closed-form reference
pub fn plot_against_reference(
    x: &[f64],
    numerical: &[f64],
    reference: &[f64],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let profiles = [("numerical", numerical), ("analytical", reference)];
    plot_profiles(x, &profiles, output_path, config)
}

// =================================================================================================
// Helpers
// =================================================================================================

fn validate_profiles(x: &[f64], profiles: &[Profile<'_>]) -> Result<(), Box<dyn Error>> {
    if x.is_empty() {
        return Err("No coordinates provided".into());
    }
    if profiles.is_empty() {
        return Err("No profiles provided".into());
    }
    for (label, values) in profiles {
        if values.len() != x.len() {
            return Err(format!(
                "Profile '{}' has {} values for {} coordinates",
                label,
                values.len(),
                x.len()
            )
            .into());
        }
    }
    Ok(())
}

/// Axis ranges covering every finite value, with 10 % headroom on top
fn plot_ranges(x: &[f64], profiles: &[Profile<'_>]) -> ((f64, f64), (f64, f64)) {
    let x_min = x.first().copied().unwrap_or(0.0);
    let mut x_max = x.last().copied().unwrap_or(1.0);
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }

    let finite = profiles
        .iter()
        .flat_map(|(_, values)| values.iter())
        .copied()
        .filter(|v| v.is_finite());

    let (c_min, c_max) = finite.fold((0.0_f64, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let c_max = c_max.max(1e-10);

    ((x_min, x_max), (c_min, c_max * 1.1))
}

fn plot_profiles_impl<DB: DrawingBackend>(
    backend: DB,
    x: &[f64],
    profiles: &[Profile<'_>],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let ((x_min, x_max), (c_min, c_max)) = plot_ranges(x, profiles);
    let style = &config.style;

    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            &config.title,
            (style.font_family.as_str(), f64::from(config.font_px(style.title_size))).into_font(),
        )
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, c_min..c_max)?;

    let tick_font = (style.font_family.as_str(), f64::from(config.font_px(style.tick_size)));
    let label_font = (style.font_family.as_str(), f64::from(config.font_px(style.label_size)));

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .axis_desc_style(label_font)
        .label_style(tick_font)
        .x_label_formatter(&|v| format!("{:.2}", v))
        .y_label_formatter(&|v| format!("{:.3}", v));
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    for (idx, (label, values)) in profiles.iter().enumerate() {
        let color = config.series_color(idx);

        chart
            .draw_series(LineSeries::new(
                x.iter().zip(values.iter()).map(|(xi, ci)| (*xi, *ci)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(lx, ly)| PathElement::new(vec![(lx, ly), (lx + 20, ly)], color));
    }

    chart
        .configure_series_labels()
        .label_font((style.font_family.as_str(), f64::from(config.font_px(style.legend_size))))
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
