use super::POINT_RADIUS;
use crate::{Color, CoordinateSystem, Draw, DrawSurface};
use glam::DVec2;
use std::f64::consts::TAU;

/// A filled disc marking a plot-space point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Fill color; `None` uses the ambient fill style (black unless a
    /// style scope overrides it).
    pub color: Option<Color>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, color: None }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl Draw for Point {
    fn draw(&self, surface: &mut dyn DrawSurface, cs: &CoordinateSystem, _width: f64, _height: f64) {
        if !(self.x.is_finite() && self.y.is_finite()) {
            return;
        }
        let center = cs.to_screen(DVec2::new(self.x, self.y));

        surface.begin_path();
        surface.arc(center, POINT_RADIUS, 0.0, TAU);
        match self.color {
            Some(color) => {
                surface.save();
                surface.set_fill_style(color);
                surface.fill();
                surface.restore();
            }
            None => surface.fill(),
        }
    }
}
