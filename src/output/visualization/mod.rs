//! Visualization of concentration profiles
//!
//! This module draws spatial profiles `c(x)` with the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`, `PlotStyle`, `FigureLayout`)
//! - **profiles**: Spatial plots (one or several profiles against position)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use diffusion_rs::output::visualization::{plot_profile_evolution, PlotConfig};
//!
//! let result = solver.solve(&scenario, &config)?;
//!
//! // Six snapshots, first and last included
//! plot_profile_evolution(&result, 6, "evolution.png", None)?;
//!
//! // Or with a custom title
//! let config = PlotConfig::evolution("Reflecting walls");
//! plot_profile_evolution(&result, 6, "reflect.svg", Some(&config))?;
//! ```
//!
//! # Which Function
//!
//! | Use Case | Function |
//! |----------|----------|
//! | Arbitrary labelled profiles | `plot_profiles` |
//! | Snapshots of one run | `plot_profile_evolution` |
//! | Numerical against closed form | `plot_against_reference` |

pub mod config;
pub mod profiles;

pub use config::{FigureLayout, NO_TITLE, PlotConfig, PlotStyle};

pub use profiles::{Profile, plot_against_reference, plot_profile_evolution, plot_profiles};
