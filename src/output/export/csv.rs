//! CSV export of concentration profiles
//!
//! Profiles are written column-wise: the first column holds the coordinate
//! `x`, every following column one concentration profile sampled on it.
//! The format is read directly by spreadsheets, pandas or gnuplot.
//!
//! # Features
//!
//! - **Simple interface**: export with `&[f64]` slices
//! - **Metadata support**: optional `#` header with run parameters and a timestamp
//! - **Customizable**: delimiter, decimal separator, precision
//! - **Validation**: empty data, mismatched lengths, NaN/Inf
//!
//! # Quick Example
//!
//! ```rust,ignore
//! use diffusion_rs::output::export::export_profiles_csv;
//!
//! let x = vec![-1.0, 0.0, 1.0];
//! let numerical = vec![0.1, 0.8, 0.1];
//! let analytical = vec![0.1, 0.79, 0.1];
//!
//! export_profiles_csv(&x, &[numerical, analytical], &["euler", "steady"], "profiles.csv", None)?;
//! ```
//!
//! **Output** (`profiles.csv`):
//! ```csv
//! x,euler,steady
//! -1.000000,0.100000,0.100000
//! 0.000000,0.800000,0.790000
//! 1.000000,0.100000,0.100000
//! ```
//!
//! With [`CsvConfig::with_metadata`] the table is preceded by:
//!
//! ```csv
//! # Reaction-Diffusion Simulation Data
//! # Generated: 2026-10-16T09:12:44+00:00
//! # Model: Reaction-Diffusion
//! # Solver: Forward Euler
//! # Boundary: reflect
//! # dt: 0.001
//! #
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use thiserror::Error;

use crate::models::PhysicalParameters;
use crate::output::snapshot_indices;
use crate::solver::SimulationResult;

use super::Exporter;

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while writing a CSV file
#[derive(Error, Debug)]
pub enum CsvError {
    /// Nothing to write
    #[error("empty data: {0}")]
    EmptyData(&'static str),

    /// A column does not have as many rows as `x`
    #[error("column '{column}' has {actual} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Number of names differs from number of profiles
    #[error("{profiles} profiles but {names} column names")]
    NameCount { profiles: usize, names: usize },

    /// NaN or Inf in a column
    #[error("invalid data: NaN or Inf detected in column '{0}'")]
    NonFinite(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use diffusion_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::european().precision(10);
/// assert_eq!(config.delimiter, ';');
/// assert_eq!(config.decimal_separator, ',');
/// assert_eq!(config.precision, 10);
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header of the coordinate column (default: "x")
    pub x_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            x_header: "x".to_string(),
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only the fields that are set are written.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    pub model_name: Option<String>,
    pub solver_name: Option<String>,
    pub boundary: Option<String>,
    pub dt: Option<f64>,
    pub dx: Option<f64>,
    pub time_steps: Option<usize>,

    /// D, β, α, w, x0
    pub parameters: Option<PhysicalParameters>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Collect what the solver recorded in a result
    pub fn from_result(result: &SimulationResult) -> Self {
        let get = |key: &str| result.metadata.get(key).cloned();
        let number = |key: &str| result.metadata.get(key).and_then(|v| v.parse::<f64>().ok());

        Self {
            model_name: get("model"),
            solver_name: get("solver"),
            boundary: get("boundary"),
            dt: number("dt"),
            dx: number("dx"),
            time_steps: result.metadata.get("time steps").and_then(|v| v.parse().ok()),
            ..Default::default()
        }
    }

    /// Builder pattern: record the physical parameters
    pub fn with_parameters(mut self, parameters: PhysicalParameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> std::io::Result<()> {
    writeln!(out, "# Reaction-Diffusion Simulation Data")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(out, "# Model: {}", model)?;
    }
    if let Some(solver) = &metadata.solver_name {
        writeln!(out, "# Solver: {}", solver)?;
    }
    if let Some(boundary) = &metadata.boundary {
        writeln!(out, "# Boundary: {}", boundary)?;
    }
    if let Some(dt) = metadata.dt {
        writeln!(out, "# dt: {}", dt)?;
    }
    if let Some(dx) = metadata.dx {
        writeln!(out, "# dx: {}", dx)?;
    }
    if let Some(time_steps) = metadata.time_steps {
        writeln!(out, "# Time Steps: {}", time_steps)?;
    }

    if let Some(p) = &metadata.parameters {
        writeln!(out, "# D: {}", p.diffusion)?;
        writeln!(out, "# beta: {}", p.degradation)?;
        writeln!(out, "# alpha: {}", p.production)?;
        writeln!(out, "# w: {}", p.width)?;
        if let Some(x0) = p.offset {
            writeln!(out, "# x0: {}", x0)?;
        }
    }

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn validate_columns(x: &[f64], profiles: &[Vec<f64>], names: &[&str]) -> Result<(), CsvError> {
    if x.is_empty() {
        return Err(CsvError::EmptyData("coordinate column is empty"));
    }
    if profiles.is_empty() {
        return Err(CsvError::EmptyData("no profile to export"));
    }
    if profiles.len() != names.len() {
        return Err(CsvError::NameCount {
            profiles: profiles.len(),
            names: names.len(),
        });
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(CsvError::NonFinite("x".to_string()));
    }

    for (profile, name) in profiles.iter().zip(names) {
        if profile.len() != x.len() {
            return Err(CsvError::LengthMismatch {
                column: name.to_string(),
                expected: x.len(),
                actual: profile.len(),
            });
        }
        if profile.iter().any(|v| !v.is_finite()) {
            return Err(CsvError::NonFinite(name.to_string()));
        }
    }

    Ok(())
}

/// Write the table to any writer
fn write_profiles<W: Write>(
    out: &mut W,
    x: &[f64],
    profiles: &[Vec<f64>],
    names: &[&str],
    config: &CsvConfig,
) -> std::io::Result<()> {
    if config.include_metadata
        && let Some(metadata) = &config.metadata
    {
        write_metadata_header(out, metadata)?;
    }

    write!(out, "{}", config.x_header)?;
    for name in names {
        write!(out, "{}{}", config.delimiter, name)?;
    }
    writeln!(out)?;

    for (i, xi) in x.iter().enumerate() {
        write!(out, "{}", format_number(*xi, config))?;
        for profile in profiles {
            write!(out, "{}{}", config.delimiter, format_number(profile[i], config))?;
        }
        writeln!(out)?;
    }

    out.flush()
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export profiles sampled on `x`, one column per profile
///
/// # Errors
///
/// - Empty `x` or no profile
/// - `names` not matching `profiles`
/// - A profile whose length differs from `x`
/// - NaN or Inf anywhere
/// - File creation errors
pub fn export_profiles_csv(
    x: &[f64],
    profiles: &[Vec<f64>],
    names: &[&str],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    validate_columns(x, profiles, names)?;

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let mut file = BufWriter::new(File::create(output_path)?);
    write_profiles(&mut file, x, profiles, names, configuration)?;

    Ok(())
}

/// Export snapshots of a run, columns named `t=<time>`
///
/// `n_snapshots = None` exports every snapshot. `Some(n)` keeps `n` evenly
/// spaced ones, always including the first and the last.
pub fn export_result_csv(
    result: &SimulationResult,
    n_snapshots: Option<usize>,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    if result.is_empty() {
        return Err(CsvError::EmptyData("simulation result has no snapshot"));
    }

    let indices = snapshot_indices(result.len(), n_snapshots.unwrap_or(result.len()));

    let profiles: Vec<Vec<f64>> = indices
        .iter()
        .map(|&n| result.state_trajectory[n].as_slice().to_vec())
        .collect();
    let names: Vec<String> = indices
        .iter()
        .map(|&n| format!("t={}", result.time_points[n]))
        .collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();

    export_profiles_csv(&result.x, &profiles, &names, output_path, configuration)
}

// =============================================================================
// Exporter implementation
// =============================================================================

/// CSV implementation of [`Exporter`]
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export_result(
        &self,
        result: &SimulationResult,
        n_snapshots: Option<usize>,
        path: &str,
    ) -> Result<(), Self::Error> {
        export_result_csv(result, n_snapshots, path, Some(&self.config))
    }

    fn export_profiles(
        &self,
        x: &[f64],
        profiles: &[Vec<f64>],
        names: &[&str],
        path: &str,
    ) -> Result<(), Self::Error> {
        export_profiles_csv(x, profiles, names, path, Some(&self.config))
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DVector;
    use std::fs;
    use tempfile::NamedTempFile;

    fn path_of(file: &NamedTempFile) -> &str {
        file.path().to_str().unwrap()
    }

    fn sample_result() -> SimulationResult {
        let mut result = SimulationResult::new(
            vec![-0.5, 0.0, 0.5],
            vec![0.0, 0.1, 0.2],
            vec![
                DVector::from_row_slice(&[0.0, 1.0, 0.0]),
                DVector::from_row_slice(&[0.25, 0.5, 0.25]),
                DVector::from_row_slice(&[0.3, 0.4, 0.3]),
            ],
        );
        result.add_metadata("solver", "Forward Euler");
        result.add_metadata("model", "Reaction-Diffusion");
        result.add_metadata("boundary", "reflect");
        result.add_metadata("dt", "0.1");
        result.add_metadata("time steps", "3");
        result
    }

    #[test]
    fn test_export_profiles_basic() {
        let file = NamedTempFile::new().unwrap();
        export_profiles_csv(
            &[0.0, 1.0],
            &[vec![1.0, 2.0], vec![3.0, 4.0]],
            &["a", "b"],
            path_of(&file),
            None,
        )
        .unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "x,a,b");
        assert_eq!(lines[1], "0.000000,1.000000,3.000000");
        assert_eq!(lines[2], "1.000000,2.000000,4.000000");
    }

    #[test]
    fn test_export_european_format() {
        let file = NamedTempFile::new().unwrap();
        let config = CsvConfig::european().precision(2);
        export_profiles_csv(&[0.5], &[vec![1.25]], &["c"], path_of(&file), Some(&config)).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content.lines().nth(1), Some("0,50;1,25"));
    }

    #[test]
    fn test_export_with_metadata() {
        let file = NamedTempFile::new().unwrap();
        let result = sample_result();
        let metadata = CsvMetadata::from_result(&result)
            .with_parameters(PhysicalParameters::new(1.0, 0.5, 2.0, 0.5).with_offset(1.0));
        let config = CsvConfig::default().with_metadata(metadata);

        export_result_csv(&result, None, path_of(&file), Some(&config)).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.starts_with("# Reaction-Diffusion Simulation Data"));
        assert!(content.contains("# Generated: "));
        assert!(content.contains("# Solver: Forward Euler"));
        assert!(content.contains("# Boundary: reflect"));
        assert!(content.contains("# dt: 0.1"));
        assert!(content.contains("# Time Steps: 3"));
        assert!(content.contains("# x0: 1"));
        assert!(content.contains("x,t=0,t=0.1,t=0.2"));
    }

    #[test]
    fn test_export_result_downsampled() {
        let file = NamedTempFile::new().unwrap();
        export_result_csv(&sample_result(), Some(2), path_of(&file), None).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "x,t=0,t=0.2");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "0.000000,1.000000,0.400000");
    }

    #[test]
    fn test_exporter_trait() {
        let file = NamedTempFile::new().unwrap();
        let exporter = CsvExporter::new(CsvConfig::default().delimiter('\t'));
        exporter.export_result(&sample_result(), Some(1), path_of(&file)).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content.lines().next(), Some("x\tt=0.2"));
    }

    #[test]
    fn test_validation_errors() {
        let file = NamedTempFile::new().unwrap();
        let path = path_of(&file);

        assert!(matches!(
            export_profiles_csv(&[], &[vec![]], &["a"], path, None),
            Err(CsvError::EmptyData(_))
        ));
        assert!(matches!(
            export_profiles_csv(&[0.0], &[vec![1.0]], &["a", "b"], path, None),
            Err(CsvError::NameCount { profiles: 1, names: 2 })
        ));
        assert!(matches!(
            export_profiles_csv(&[0.0, 1.0], &[vec![1.0]], &["a"], path, None),
            Err(CsvError::LengthMismatch { expected: 2, actual: 1, .. })
        ));
        assert!(matches!(
            export_profiles_csv(&[0.0], &[vec![f64::NAN]], &["a"], path, None),
            Err(CsvError::NonFinite(_))
        ));
    }

    #[test]
    fn test_invalid_path() {
        let result = export_profiles_csv(
            &[0.0],
            &[vec![1.0]],
            &["a"],
            "/nonexistent/directory/out.csv",
            None,
        );
        assert!(matches!(result, Err(CsvError::Io(_))));
    }
}
