//! Mapping between plot coordinates and screen coordinates.
//!
//! Plot space is continuous with y growing upward. Screen space is measured
//! in pixels with y growing downward. A [`CoordinateSystem`] is immutable:
//! when the viewport, unit or center changes a new one is built.

use crate::DrawSurface;
use glam::DVec2;
use plotter_core::error::check_unit;
use plotter_core::{ConfigurationError, PlotGeometry};

/// Affine map between plot space and screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateSystem {
    /// Screen x of the plot origin.
    origin_x: f64,
    /// Screen y of the plot origin.
    origin_y: f64,
    /// Screen pixels per plot unit, always > 0.
    unit: f64,
}

impl CoordinateSystem {
    /// Create a coordinate system from its screen-space origin and unit.
    ///
    /// Fails if `unit` is not a positive finite number.
    pub fn new(origin_x: f64, origin_y: f64, unit: f64) -> Result<Self, ConfigurationError> {
        let unit = check_unit(unit)?;
        Ok(Self {
            origin_x,
            origin_y,
            unit,
        })
    }

    /// Create a coordinate system that shows `(center_x, center_y)` at the
    /// middle of a `width` x `height` viewport.
    ///
    /// A non-finite center coordinate is treated as 0.
    pub fn centered(
        center_x: f64,
        center_y: f64,
        width: f64,
        height: f64,
        unit: f64,
    ) -> Result<Self, ConfigurationError> {
        let unit = check_unit(unit)?;
        let cx = if center_x.is_finite() { center_x } else { 0.0 };
        let cy = if center_y.is_finite() { center_y } else { 0.0 };
        Ok(Self {
            origin_x: width / 2.0 - cx * unit,
            origin_y: height / 2.0 + cy * unit,
            unit,
        })
    }

    /// Build the centered coordinate system for a validated plot geometry.
    pub fn from_geometry(geometry: &PlotGeometry) -> Result<Self, ConfigurationError> {
        geometry.validate()?;
        Self::centered(
            geometry.center_x,
            geometry.center_y,
            geometry.width,
            geometry.height,
            geometry.unit,
        )
    }

    pub fn origin_x(&self) -> f64 {
        self.origin_x
    }

    pub fn origin_y(&self) -> f64 {
        self.origin_y
    }

    pub fn unit(&self) -> f64 {
        self.unit
    }

    /// Plot x to screen x.
    #[inline]
    pub fn to_screen_x(&self, plot_x: f64) -> f64 {
        plot_x * self.unit + self.origin_x
    }

    /// Plot y to screen y.
    #[inline]
    pub fn to_screen_y(&self, plot_y: f64) -> f64 {
        self.origin_y - plot_y * self.unit
    }

    /// Screen x to plot x.
    #[inline]
    pub fn to_plot_x(&self, screen_x: f64) -> f64 {
        (screen_x - self.origin_x) / self.unit
    }

    /// Screen y to plot y.
    #[inline]
    pub fn to_plot_y(&self, screen_y: f64) -> f64 {
        (self.origin_y - screen_y) / self.unit
    }

    /// Plot point to screen point.
    pub fn to_screen(&self, plot: DVec2) -> DVec2 {
        DVec2::new(self.to_screen_x(plot.x), self.to_screen_y(plot.y))
    }

    /// Screen point to plot point.
    pub fn to_plot(&self, screen: DVec2) -> DVec2 {
        DVec2::new(self.to_plot_x(screen.x), self.to_plot_y(screen.y))
    }

    /// Scale a plot-space length to pixels.
    #[inline]
    pub fn scale(&self, plot_length: f64) -> f64 {
        plot_length * self.unit
    }

    /// Scale a pixel length to plot space.
    #[inline]
    pub fn inv_scale(&self, screen_length: f64) -> f64 {
        screen_length / self.unit
    }

    /// Plot-space bounds of a `width` x `height` viewport.
    pub fn visible_plot_rect(&self, width: f64, height: f64) -> PlotRect {
        PlotRect {
            min_x: self.to_plot_x(0.0),
            max_x: self.to_plot_x(width),
            min_y: self.to_plot_y(height),
            max_y: self.to_plot_y(0.0),
        }
    }

    /// Fill a rectangle given in plot coordinates.
    ///
    /// `(x, y)` is the bottom-left corner; `width` and `height` are plot lengths.
    pub fn fill_rect(&self, surface: &mut dyn DrawSurface, x: f64, y: f64, width: f64, height: f64) {
        surface.fill_rect(
            self.to_screen_x(x),
            self.to_screen_y(y) - self.scale(height),
            self.scale(width),
            self.scale(height),
        );
    }
}

/// Axis-aligned rectangle in plot space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRect {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl PlotRect {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}
