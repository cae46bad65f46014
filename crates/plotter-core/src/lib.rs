//! Plotter Core
//!
//! Ambient services shared by every plotter crate: logging setup, profiling
//! scopes, the plotter configuration and the configuration error type.

pub mod config;
pub mod error;
pub mod logging;
pub mod profiling;

pub use config::{PlotGeometry, PlotterConfig};
pub use error::ConfigurationError;
