//! Pointer events and host callbacks.

use plotter_geometry::CoordinateSystem;

/// A raw pointer event over the plot, in screen pixels relative to its
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    Click { x: f64, y: f64 },
    Leave,
}

/// Host callbacks for pointer interaction.
///
/// Coordinates are already converted to plot space; the coordinate system
/// in effect is passed along so the host can convert back (e.g. to size a
/// hit tolerance in pixels). Every method defaults to a no-op.
pub trait PlotterHandler {
    fn on_mouse_move(&mut self, _x: f64, _y: f64, _cs: &CoordinateSystem) {}

    fn on_click(&mut self, _x: f64, _y: f64, _cs: &CoordinateSystem) {}

    fn on_mouse_leave(&mut self, _cs: &CoordinateSystem) {}
}
