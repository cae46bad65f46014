use crate::{CoordinateSystem, Draw, DrawSurface};
use glam::DVec2;
use plotter_core::profiling::profile_scope;
use std::sync::Arc;

type ExplicitFn = dyn Fn(f64) -> f64 + Send + Sync;

/// The graph of `y = f(x)` across the visible plot-x range.
///
/// `f` is sampled once per horizontal screen pixel. Non-finite samples break
/// the path. A sample above or below the viewport extends the path to that
/// edge, and the next visible sample starts a new subpath, so the curve never
/// draws a vertical streak between the clip edge and its re-entry point.
#[derive(Clone)]
pub struct FunctionCurve {
    func: Arc<ExplicitFn>,
}

impl FunctionCurve {
    pub fn new(func: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            func: Arc::new(func),
        }
    }

    /// Evaluate the function at `x`.
    pub fn at(&self, x: f64) -> f64 {
        (self.func)(x)
    }
}

impl std::fmt::Debug for FunctionCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionCurve").finish_non_exhaustive()
    }
}

impl Draw for FunctionCurve {
    fn draw(&self, surface: &mut dyn DrawSurface, cs: &CoordinateSystem, width: f64, height: f64) {
        if !(width.is_finite() && height.is_finite()) {
            tracing::warn!("Function curve skipped: viewport {}x{}", width, height);
            return;
        }
        profile_scope!("function_curve_draw");

        let visible = cs.visible_plot_rect(width, height);
        let columns = width.max(0.0).ceil() as usize;

        surface.begin_path();
        let mut pen_down = false;
        for column in 0..=columns {
            let screen_x = column as f64;
            let y = self.at(cs.to_plot_x(screen_x));

            if !y.is_finite() {
                pen_down = false;
                continue;
            }

            if y > visible.max_y || y < visible.min_y {
                if pen_down {
                    let edge = if y > visible.max_y { 0.0 } else { height };
                    surface.line_to(DVec2::new(screen_x, edge));
                    pen_down = false;
                }
                continue;
            }

            let point = DVec2::new(screen_x, cs.to_screen_y(y));
            if pen_down {
                surface.line_to(point);
            } else {
                surface.move_to(point);
                pen_down = true;
            }
        }
        surface.stroke();
    }
}
