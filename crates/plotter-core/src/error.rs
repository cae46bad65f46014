/// Rejected plotter or coordinate-system configuration.
///
/// These are raised before any canvas operation is attempted: a coordinate
/// system with a non-positive unit would divide by zero or flip orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigurationError {
    /// The unit (pixels per plot unit) was zero or negative.
    NonPositiveUnit(f64),

    /// The unit was NaN or infinite.
    NonFiniteUnit(f64),

    /// The viewport width or height was not a positive finite number.
    InvalidDimensions { width: f64, height: f64 },

    /// The device resolution factor was not a positive finite number.
    InvalidResolutionFactor(f64),
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::NonPositiveUnit(unit) => {
                write!(f, "Coordinate system unit must be > 0, got {}", unit)
            }
            ConfigurationError::NonFiniteUnit(unit) => {
                write!(f, "Coordinate system unit must be finite, got {}", unit)
            }
            ConfigurationError::InvalidDimensions { width, height } => write!(
                f,
                "Viewport dimensions must be positive and finite, got {}x{}",
                width, height
            ),
            ConfigurationError::InvalidResolutionFactor(factor) => {
                write!(f, "Resolution factor must be > 0, got {}", factor)
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Validate a coordinate-system unit.
pub fn check_unit(unit: f64) -> Result<f64, ConfigurationError> {
    if !unit.is_finite() {
        return Err(ConfigurationError::NonFiniteUnit(unit));
    }
    if unit <= 0.0 {
        return Err(ConfigurationError::NonPositiveUnit(unit));
    }
    Ok(unit)
}
