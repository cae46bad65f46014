//! Configuration for a plotter surface.

use crate::error::{ConfigurationError, check_unit};

/// The default plotter width, in CSS pixels.
pub const DEFAULT_WIDTH: f64 = 700.0;

/// The default plotter height, in CSS pixels.
pub const DEFAULT_HEIGHT: f64 = 430.0;

/// The default number of pixels per plot unit.
pub const DEFAULT_UNIT: f64 = 20.0;

/// The default ratio of device pixels to CSS pixels.
pub const DEFAULT_RESOLUTION_FACTOR: f64 = 4.0;

/// The geometry-affecting inputs of a plotter.
///
/// Any change to these replaces the plotter's coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotGeometry {
    pub width: f64,
    pub height: f64,
    pub unit: f64,
    /// Plot-space x shown at the center of the viewport.
    pub center_x: f64,
    /// Plot-space y shown at the center of the viewport.
    pub center_y: f64,
}

impl Default for PlotGeometry {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            unit: DEFAULT_UNIT,
            center_x: 0.0,
            center_y: 0.0,
        }
    }
}

impl PlotGeometry {
    /// Check dimensions and unit.
    ///
    /// A non-finite center is not an error; it is treated as 0 when the
    /// coordinate system is built.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(ConfigurationError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        check_unit(self.unit)?;
        Ok(())
    }
}

/// Configuration for a plotter surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotterConfig {
    pub geometry: PlotGeometry,
    /// Device pixels per CSS pixel; the draw pass is scaled by this factor.
    pub resolution_factor: f64,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        PlotterConfig {
            geometry: PlotGeometry::default(),
            resolution_factor: DEFAULT_RESOLUTION_FACTOR,
        }
    }
}

impl PlotterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.geometry.width = width;
        self.geometry.height = height;
        self
    }

    pub fn with_unit(mut self, unit: f64) -> Self {
        self.geometry.unit = unit;
        self
    }

    pub fn with_center(mut self, center_x: f64, center_y: f64) -> Self {
        self.geometry.center_x = center_x;
        self.geometry.center_y = center_y;
        self
    }

    pub fn with_resolution_factor(mut self, factor: f64) -> Self {
        self.resolution_factor = factor;
        self
    }

    /// Validate the whole configuration.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.geometry.validate()?;
        if !(self.resolution_factor.is_finite() && self.resolution_factor > 0.0) {
            return Err(ConfigurationError::InvalidResolutionFactor(
                self.resolution_factor,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PlotterConfig::default();
        assert_eq!(config.geometry.width, 700.0);
        assert_eq!(config.geometry.height, 430.0);
        assert_eq!(config.geometry.unit, 20.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_unit() {
        let config = PlotterConfig::new().with_unit(0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::NonPositiveUnit(0.0))
        );
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let config = PlotterConfig::new().with_size(-1.0, 100.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_resolution_factor() {
        let config = PlotterConfig::new().with_resolution_factor(0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::InvalidResolutionFactor(0.0))
        );
    }

    #[test]
    fn test_nan_center_is_accepted() {
        let config = PlotterConfig::new().with_center(f64::NAN, 1.0);
        assert!(config.validate().is_ok());
    }
}
