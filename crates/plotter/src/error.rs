use plotter_core::ConfigurationError;
use plotter_geometry::RasterError;

/// Errors surfaced by the plotter.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotterError {
    /// Rejected geometry or configuration.
    Configuration(ConfigurationError),

    /// Software surface creation or export failed.
    Raster(RasterError),
}

impl std::fmt::Display for PlotterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotterError::Configuration(err) => write!(f, "Invalid plotter configuration: {}", err),
            PlotterError::Raster(err) => write!(f, "Raster surface error: {}", err),
        }
    }
}

impl std::error::Error for PlotterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotterError::Configuration(err) => Some(err),
            PlotterError::Raster(err) => Some(err),
        }
    }
}

impl From<ConfigurationError> for PlotterError {
    fn from(err: ConfigurationError) -> Self {
        PlotterError::Configuration(err)
    }
}

impl From<RasterError> for PlotterError {
    fn from(err: RasterError) -> Self {
        PlotterError::Raster(err)
    }
}

/// Result type for plotter operations.
pub type PlotterResult<T> = Result<T, PlotterError>;
