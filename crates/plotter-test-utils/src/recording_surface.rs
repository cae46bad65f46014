//! Recording implementation of DrawSurface for testing.
//!
//! Calls are stored in user-space coordinates exactly as the drawable issued
//! them; the current scale is tracked but never applied.

use glam::DVec2;
use plotter_geometry::{Color, DrawSurface};

/// A stroke or fill, with the style and path in effect when it was issued.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintRecord {
    pub color: Color,
    pub line_width: f64,
    /// Subpaths of the painted path, in issue order.
    pub path: Vec<Vec<DVec2>>,
}

impl PaintRecord {
    pub fn subpath_count(&self) -> usize {
        self.path.len()
    }

    /// Total number of points across all subpaths.
    pub fn point_count(&self) -> usize {
        self.path.iter().map(Vec::len).sum()
    }
}

/// Records a surface call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    Save,
    Restore,
    Scale {
        sx: f64,
        sy: f64,
    },
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    Arc {
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Stroke(PaintRecord),
    Fill(PaintRecord),
    SetStrokeStyle(Color),
    SetFillStyle(Color),
    SetLineWidth(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SurfaceState {
    fill: Color,
    stroke: Color,
    line_width: f64,
    scale: DVec2,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_width: 1.0,
            scale: DVec2::ONE,
        }
    }
}

/// A drawing surface that records calls and tracks canvas-like state.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use plotter_geometry::DrawSurface;
/// use plotter_test_utils::RecordingSurface;
///
/// let mut surface = RecordingSurface::new();
/// surface.begin_path();
/// surface.move_to(DVec2::new(0.0, 0.0));
/// surface.line_to(DVec2::new(10.0, 0.0));
/// surface.stroke();
///
/// assert_eq!(surface.count_strokes(), 1);
/// assert_eq!(surface.strokes()[0].point_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    state: SurfaceState,
    stack: Vec<SurfaceState>,
    max_depth: usize,
    unbalanced_restores: usize,
    path: Vec<Vec<DVec2>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Clear recorded calls (useful between test steps). State is kept.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    pub fn strokes(&self) -> Vec<&PaintRecord> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Stroke(record) => Some(record),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self) -> Vec<&PaintRecord> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Fill(record) => Some(record),
                _ => None,
            })
            .collect()
    }

    pub fn count_strokes(&self) -> usize {
        self.count(|c| matches!(c, SurfaceCall::Stroke(_)))
    }

    pub fn count_fills(&self) -> usize {
        self.count(|c| matches!(c, SurfaceCall::Fill(_)))
    }

    pub fn count_fill_rects(&self) -> usize {
        self.count(|c| matches!(c, SurfaceCall::FillRect { .. }))
    }

    pub fn count_move_tos(&self) -> usize {
        self.count(|c| matches!(c, SurfaceCall::MoveTo(_)))
    }

    pub fn count_line_tos(&self) -> usize {
        self.count(|c| matches!(c, SurfaceCall::LineTo(_)))
    }

    pub fn count_arcs(&self) -> usize {
        self.count(|c| matches!(c, SurfaceCall::Arc { .. }))
    }

    pub fn count_saves(&self) -> usize {
        self.count(|c| matches!(c, SurfaceCall::Save))
    }

    pub fn count_restores(&self) -> usize {
        self.count(|c| matches!(c, SurfaceCall::Restore))
    }

    /// Calls that put paint on the surface: strokes, fills and filled rects.
    pub fn draw_call_count(&self) -> usize {
        self.count_strokes() + self.count_fills() + self.count_fill_rects()
    }

    /// Path-building or painting calls of any kind.
    pub fn path_call_count(&self) -> usize {
        self.count(|c| {
            matches!(
                c,
                SurfaceCall::BeginPath
                    | SurfaceCall::MoveTo(_)
                    | SurfaceCall::LineTo(_)
                    | SurfaceCall::Arc { .. }
                    | SurfaceCall::Stroke(_)
                    | SurfaceCall::Fill(_)
            )
        })
    }

    /// Current number of saved states.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Deepest save stack seen so far.
    pub fn max_save_depth(&self) -> usize {
        self.max_depth
    }

    /// Restores issued against an empty stack.
    pub fn unbalanced_restores(&self) -> usize {
        self.unbalanced_restores
    }

    /// Accumulated scale of the current state.
    pub fn current_scale(&self) -> DVec2 {
        self.state.scale
    }

    /// Subpaths of the current (unpainted or last painted) path.
    pub fn current_path(&self) -> &[Vec<DVec2>] {
        &self.path
    }

    fn count(&self, pred: impl Fn(&SurfaceCall) -> bool) -> usize {
        self.calls.iter().filter(|&c| pred(c)).count()
    }

    fn record_paint(&self, color: Color) -> PaintRecord {
        PaintRecord {
            color,
            line_width: self.state.line_width,
            path: self.path.clone(),
        }
    }
}

impl DrawSurface for RecordingSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(SurfaceCall::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(SurfaceCall::FillRect {
            x,
            y,
            width,
            height,
            color: self.state.fill,
        });
    }

    fn save(&mut self) {
        self.stack.push(self.state);
        self.max_depth = self.max_depth.max(self.stack.len());
        self.calls.push(SurfaceCall::Save);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => self.unbalanced_restores += 1,
        }
        self.calls.push(SurfaceCall::Restore);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.state.scale *= DVec2::new(sx, sy);
        self.calls.push(SurfaceCall::Scale { sx, sy });
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.calls.push(SurfaceCall::BeginPath);
    }

    fn move_to(&mut self, point: DVec2) {
        self.path.push(vec![point]);
        self.calls.push(SurfaceCall::MoveTo(point));
    }

    fn line_to(&mut self, point: DVec2) {
        match self.path.last_mut() {
            Some(subpath) => subpath.push(point),
            None => self.path.push(vec![point]),
        }
        self.calls.push(SurfaceCall::LineTo(point));
    }

    fn arc(&mut self, center: DVec2, radius: f64, start_angle: f64, end_angle: f64) {
        let start = center + DVec2::new(start_angle.cos(), start_angle.sin()) * radius;
        let end = center + DVec2::new(end_angle.cos(), end_angle.sin()) * radius;
        match self.path.last_mut() {
            Some(subpath) => subpath.extend([start, end]),
            None => self.path.push(vec![start, end]),
        }
        self.calls.push(SurfaceCall::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn stroke(&mut self) {
        let record = self.record_paint(self.state.stroke);
        self.calls.push(SurfaceCall::Stroke(record));
    }

    fn fill(&mut self) {
        let record = self.record_paint(self.state.fill);
        self.calls.push(SurfaceCall::Fill(record));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.state.stroke = color;
        self.calls.push(SurfaceCall::SetStrokeStyle(color));
    }

    fn set_fill_style(&mut self, color: Color) {
        self.state.fill = color;
        self.calls.push(SurfaceCall::SetFillStyle(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
        self.calls.push(SurfaceCall::SetLineWidth(width));
    }

    fn stroke_style(&self) -> Color {
        self.state.stroke
    }

    fn fill_style(&self) -> Color {
        self.state.fill
    }

    fn line_width(&self) -> f64 {
        self.state.line_width
    }
}
