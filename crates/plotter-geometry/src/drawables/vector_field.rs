use super::FIELD_DENSITY;
use crate::{CoordinateSystem, Draw, DrawSurface};
use glam::DVec2;
use plotter_core::profiling::profile_scope;
use plotter_field::{Vector2D, VectorField2D};

/// A vector field drawn as line segments on a regular screen grid.
#[derive(Debug, Clone)]
pub struct VectorField {
    pub field: VectorField2D,
    /// Arrow scaling. A positive factor draws `vector / length_factor` in
    /// plot units; zero (or any non-positive value) draws every arrow with the
    /// same on-screen length [`FIELD_DENSITY`], showing direction only.
    pub length_factor: f64,
}

impl VectorField {
    /// Direction-only arrows of constant screen length.
    pub fn normalized(field: VectorField2D) -> Self {
        Self {
            field,
            length_factor: 0.0,
        }
    }

    /// Arrows proportional to the field magnitude.
    pub fn scaled(field: VectorField2D, length_factor: f64) -> Self {
        Self {
            field,
            length_factor,
        }
    }

    /// Arrow to draw for `vector`, in plot units, or `None` if the sample
    /// cannot be drawn.
    pub fn arrow(&self, vector: Vector2D, cs: &CoordinateSystem) -> Option<Vector2D> {
        if !vector.is_finite() {
            return None;
        }
        let scaled = if self.length_factor > 0.0 {
            vector.times(1.0 / self.length_factor)
        } else {
            let magnitude = vector.magnitude();
            if magnitude == 0.0 {
                return None;
            }
            vector.times(cs.inv_scale(FIELD_DENSITY) / magnitude)
        };
        scaled.is_finite().then_some(scaled)
    }
}

impl Draw for VectorField {
    fn draw(&self, surface: &mut dyn DrawSurface, cs: &CoordinateSystem, width: f64, height: f64) {
        if !(width.is_finite() && height.is_finite()) {
            tracing::warn!("Vector field skipped: viewport {}x{}", width, height);
            return;
        }
        profile_scope!("vector_field_draw");

        let columns = (width / FIELD_DENSITY).ceil().max(0.0) as usize;
        let rows = (height / FIELD_DENSITY).ceil().max(0.0) as usize;
        let mut skipped = 0usize;

        surface.begin_path();
        for i in 0..columns {
            let x = cs.to_plot_x(i as f64 * FIELD_DENSITY);
            for j in 0..rows {
                let y = cs.to_plot_y(j as f64 * FIELD_DENSITY);

                let Some(arrow) = self.arrow(self.field.at(x, y), cs) else {
                    skipped += 1;
                    continue;
                };

                surface.move_to(cs.to_screen(DVec2::new(x, y)));
                surface.line_to(cs.to_screen(DVec2::new(x + arrow.x, y + arrow.y)));
            }
        }
        surface.stroke();

        if skipped > 0 {
            tracing::trace!("Vector field skipped {} non-drawable samples", skipped);
        }
    }
}
