//! The drawing surface capability.

use crate::Color;
use glam::DVec2;

/// A 2D immediate-mode drawing surface.
///
/// Modelled on an HTML canvas context: a current path built with
/// `move_to`/`line_to`/`arc` and painted with `stroke`/`fill`, plus mutable
/// style attributes guarded by a `save`/`restore` state stack. Coordinates are
/// screen pixels, y growing downward, before the current scale is applied.
///
/// The trait is object safe; drawables receive `&mut dyn DrawSurface`.
pub trait DrawSurface {
    /// Reset a rectangle to transparent.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Fill a rectangle with the current fill style.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Push the current drawing state (styles, line width, scale).
    fn save(&mut self);

    /// Pop the most recently saved drawing state. No-op on an empty stack.
    fn restore(&mut self);

    /// Multiply the current scale.
    fn scale(&mut self, sx: f64, sy: f64);

    /// Discard the current path.
    fn begin_path(&mut self);

    /// Start a new subpath at `point`.
    fn move_to(&mut self, point: DVec2);

    /// Extend the current subpath with a straight line.
    fn line_to(&mut self, point: DVec2);

    /// Add a circular arc to the current path (angles in radians, clockwise on screen).
    fn arc(&mut self, center: DVec2, radius: f64, start_angle: f64, end_angle: f64);

    /// Stroke the current path with the stroke style and line width.
    fn stroke(&mut self);

    /// Fill the current path with the fill style.
    fn fill(&mut self);

    fn set_stroke_style(&mut self, color: Color);

    fn set_fill_style(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);

    fn stroke_style(&self) -> Color;

    fn fill_style(&self) -> Color;

    fn line_width(&self) -> f64;
}
