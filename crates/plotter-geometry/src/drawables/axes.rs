use super::{AXES_COLOR, AXES_LINE_WIDTH};
use crate::{CoordinateSystem, Draw, DrawSurface};
use glam::DVec2;

/// The x and y axes, drawn across the whole viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Axes;

impl Draw for Axes {
    fn draw(&self, surface: &mut dyn DrawSurface, cs: &CoordinateSystem, width: f64, height: f64) {
        let x0 = cs.to_screen_x(0.0);
        let y0 = cs.to_screen_y(0.0);

        surface.save();
        surface.set_stroke_style(AXES_COLOR);
        surface.set_line_width(AXES_LINE_WIDTH);

        surface.begin_path();
        surface.move_to(DVec2::new(0.0, y0));
        surface.line_to(DVec2::new(width, y0));
        surface.stroke();

        surface.begin_path();
        surface.move_to(DVec2::new(x0, 0.0));
        surface.line_to(DVec2::new(x0, height));
        surface.stroke();

        surface.restore();
    }
}
