use crate::{CoordinateSystem, Draw, DrawSurface};
use glam::DVec2;
use plotter_core::profiling::profile_scope;
use std::sync::Arc;

type ParametricFn = dyn Fn(f64) -> DVec2 + Send + Sync;

/// Upper bound on samples per parametric curve.
pub const MAX_PARAMETRIC_SAMPLES: usize = 1 << 20;

/// A curve `t -> (x, y)` in plot space, sampled from `start` to `end`.
#[derive(Clone)]
pub struct ParametricCurve {
    func: Arc<ParametricFn>,
    pub start: f64,
    pub end: f64,
    pub step_size: f64,
}

impl ParametricCurve {
    pub fn new(
        func: impl Fn(f64) -> DVec2 + Send + Sync + 'static,
        start: f64,
        end: f64,
        step_size: f64,
    ) -> Self {
        Self {
            func: Arc::new(func),
            start,
            end,
            step_size,
        }
    }

    /// Evaluate the curve at `t`.
    pub fn at(&self, t: f64) -> DVec2 {
        (self.func)(t)
    }

    /// True when there is nothing to draw: zero, negative or non-finite step,
    /// or `start >= end`.
    pub fn is_degenerate(&self) -> bool {
        !(self.step_size.is_finite() && self.step_size > 0.0)
            || !(self.start.is_finite() && self.end.is_finite())
            || self.start >= self.end
    }

    /// Spacing between samples: `step_size`, widened so that the whole
    /// range fits in [`MAX_PARAMETRIC_SAMPLES`] steps.
    pub fn sample_step(&self) -> f64 {
        let span = self.end - self.start;
        let cap = MAX_PARAMETRIC_SAMPLES as f64;
        if span / self.step_size > cap {
            span / cap
        } else {
            self.step_size
        }
    }

    /// Parameter values to sample: `start, start + step, ...` and finally `end`.
    pub fn parameters(&self) -> Vec<f64> {
        if self.is_degenerate() {
            return Vec::new();
        }

        let step = self.sample_step();
        if step != self.step_size {
            tracing::warn!(
                "Parametric curve step {} needs more than {} samples, widening to {}",
                self.step_size,
                MAX_PARAMETRIC_SAMPLES,
                step
            );
        }

        let count = ((self.end - self.start) / step)
            .floor()
            .min(MAX_PARAMETRIC_SAMPLES as f64) as usize;
        let mut params: Vec<f64> = (0..=count)
            .map(|i| (self.start + i as f64 * step).min(self.end))
            .collect();
        let last = params.last().copied().unwrap_or(self.start);
        if self.end - last > step * 1e-9 {
            params.push(self.end);
        }
        params
    }
}

impl std::fmt::Debug for ParametricCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParametricCurve")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("step_size", &self.step_size)
            .finish_non_exhaustive()
    }
}

impl Draw for ParametricCurve {
    fn draw(&self, surface: &mut dyn DrawSurface, cs: &CoordinateSystem, _width: f64, _height: f64) {
        if self.is_degenerate() {
            return;
        }
        profile_scope!("parametric_curve_draw");

        surface.begin_path();
        let mut pen_down = false;
        for t in self.parameters() {
            let p = self.at(t);
            if !(p.x.is_finite() && p.y.is_finite()) {
                pen_down = false;
                continue;
            }
            let screen = cs.to_screen(p);
            if pen_down {
                surface.line_to(screen);
            } else {
                surface.move_to(screen);
                pen_down = true;
            }
        }
        surface.stroke();
    }
}
