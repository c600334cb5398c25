//! Output module for simulation results
//!
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← snapshot selection
//! ├── visualization/      ← Plots
//! │   ├── config.rs
//! │   └── profiles.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use diffusion_rs::output::{export_result_csv, plot_profile_evolution};
//!
//! plot_profile_evolution(&result, 6, "evolution.png", None)?;
//! export_result_csv(&result, Some(6), "evolution.csv", None)?;
//! ```
//!
//! Both sub-modules pick snapshots the same way, see [`snapshot_indices`].

pub mod export;
pub mod visualization;

pub use visualization::{
    PlotConfig, plot_against_reference, plot_profile_evolution, plot_profiles,
};

pub use export::{CsvConfig, CsvError, CsvExporter, Exporter, export_profiles_csv, export_result_csv};

/// Indices of `n` snapshots spread evenly over a trajectory of length `len`
///
/// The first and the last snapshot are always part of the selection when
/// `n >= 2`. A single snapshot means the final one. Asking for at least `len`
/// snapshots returns them all.
///
/// # Example
///
/// ```rust
/// use diffusion_rs::output::snapshot_indices;
///
/// assert_eq!(snapshot_indices(11, 3), vec![0, 5, 10]);
/// assert_eq!(snapshot_indices(11, 1), vec![10]);
/// assert_eq!(snapshot_indices(3, 10), vec![0, 1, 2]);
/// ```
pub fn snapshot_indices(len: usize, n: usize) -> Vec<usize> {
    if len == 0 || n == 0 {
        return Vec::new();
    }
    if n >= len {
        return (0..len).collect();
    }
    if n == 1 {
        return vec![len - 1];
    }

    let mut indices: Vec<usize> = (0..n).map(|k| k * (len - 1) / (n - 1)).collect();
    indices.dedup();
    indices
}
