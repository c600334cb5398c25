//! Export module for simulation results.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format means a new file and no change to existing code.
//!
//! # Available formats
//!
//! | Format | Module  |
//! |--------|---------|
//! | CSV    | [`csv`] |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use diffusion_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//!
//! // Every snapshot
//! exporter.export_result(&result, None, "history.csv")?;
//!
//! // Eleven evenly spaced snapshots, first and last included
//! exporter.export_result(&result, Some(11), "history_light.csv")?;
//!
//! // Numerical against analytical
//! exporter.export_profiles(&result.x, &[numerical, reference], &["euler", "steady"], "check.csv")?;
//! ```

pub mod csv;

pub use csv::{CsvConfig, CsvError, CsvExporter, CsvMetadata, export_profiles_csv, export_result_csv};

use crate::solver::SimulationResult;

/// Abstraction trait for all export formats.
///
/// Each format reports its own error type, so callers can react to the
/// precise failure without downcasting a boxed error.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Export the snapshots of a run
    ///
    /// - `None`: every snapshot
    /// - `Some(n)`: `n` evenly spaced snapshots, the first and the last included
    fn export_result(
        &self,
        result: &SimulationResult,
        n_snapshots: Option<usize>,
        path: &str,
    ) -> Result<(), Self::Error>;

    /// Export arbitrary named profiles sampled on `x`
    fn export_profiles(
        &self,
        x: &[f64],
        profiles: &[Vec<f64>],
        names: &[&str],
        path: &str,
    ) -> Result<(), Self::Error>;
}
