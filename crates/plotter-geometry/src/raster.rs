//! Software RGBA surface.
//!
//! [`RasterSurface`] implements [`DrawSurface`] on a CPU pixel buffer. The
//! current path is kept in device pixels; `fill` and `stroke` tessellate it
//! with lyon and the resulting triangles are rasterized by pixel-center
//! coverage, each covered pixel blended once per paint call. Optional PNG
//! export is available with the `image` feature.
//!
//! # Example
//!
//! ```ignore
//! use plotter_geometry::*;
//!
//! let mut surface = RasterSurface::new(700, 430)?;
//! scene.register().execute(&mut surface, &cs, 700.0, 430.0);
//! surface.save_png("plot.png")?;
//! ```

use crate::{Color, DrawSurface};
use glam::DVec2;
use lyon::geom::Arc;
use lyon::lyon_tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, StrokeOptions,
    StrokeTessellator, StrokeVertex, VertexBuffers,
};
use lyon::math::{Angle, Point, point, vector};
use lyon::path::Path;

/// Largest surface accepted by [`RasterSurface::new`], in pixels.
pub const MAX_RASTER_PIXELS: u64 = 1 << 26;

/// Curve flattening tolerance, in device pixels.
const TOLERANCE: f32 = 0.1;

/// Software surface error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Zero-sized or oversized surface
    InvalidDimensions { width: u32, height: u32 },
    /// Image encoding failed
    EncodeFailed(String),
    /// IO error
    IoError(String),
}

impl std::fmt::Display for RasterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid raster dimensions: {}x{}", width, height)
            }
            Self::EncodeFailed(msg) => write!(f, "Image encoding failed: {}", msg),
            Self::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for RasterError {}

#[derive(Debug, Clone, Copy, PartialEq)]
struct RasterState {
    fill: Color,
    stroke: Color,
    line_width: f64,
    scale: DVec2,
}

impl Default for RasterState {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_width: 1.0,
            scale: DVec2::ONE,
        }
    }
}

/// A CPU-side RGBA8 drawing surface.
#[derive(Clone)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
    state: RasterState,
    stack: Vec<RasterState>,
    /// Subpaths of the current path, already in device pixels.
    path: Vec<Vec<Point>>,
    /// Pixels covered by the paint call in progress.
    coverage: Vec<bool>,
    touched: Vec<usize>,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("state", &self.state)
            .field("saved_states", &self.stack.len())
            .finish_non_exhaustive()
    }
}

impl RasterSurface {
    /// Create a transparent surface of `width` x `height` device pixels.
    ///
    /// Fails for an empty surface or one larger than [`MAX_RASTER_PIXELS`].
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let area = width as u64 * height as u64;
        if area == 0 || area > MAX_RASTER_PIXELS {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![[0; 4]; area as usize],
            state: RasterState::default(),
            stack: Vec::new(),
            path: Vec::new(),
            coverage: vec![false; area as usize],
            touched: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA value of a device pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.width && y < self.height)
            .then(|| self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Raw RGBA8 bytes, row major.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of saved states not yet restored.
    pub fn saved_states(&self) -> usize {
        self.stack.len()
    }

    /// Save the surface as a PNG file.
    #[cfg(feature = "image")]
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<(), RasterError> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.as_bytes().to_vec())
            .ok_or(RasterError::EncodeFailed(
                "Failed to create image from raw data".to_string(),
            ))?;
        img.save(path)
            .map_err(|e| RasterError::IoError(format!("{}", e)))?;
        Ok(())
    }

    /// Map a user-space point to device pixels; `None` if it leaves `f32` range.
    fn to_device(&self, p: DVec2) -> Option<Point> {
        let device = p * self.state.scale;
        let (x, y) = (device.x as f32, device.y as f32);
        (x.is_finite() && y.is_finite()).then(|| point(x, y))
    }

    /// Pixels whose centers fall in `[min, max)` on an axis of `limit` pixels.
    fn center_span(min: f64, max: f64, limit: u32) -> Option<(u32, u32)> {
        if !(min.is_finite() && max.is_finite()) {
            return None;
        }
        let start = (min - 0.5).ceil().clamp(0.0, limit as f64) as u32;
        let end = (max - 0.5).ceil().clamp(0.0, limit as f64) as u32;
        (start < end).then_some((start, end))
    }

    /// Device pixel ranges whose centers lie inside a user-space rectangle.
    fn rect_span(&self, x: f64, y: f64, width: f64, height: f64) -> Option<(u32, u32, u32, u32)> {
        let origin = DVec2::new(x, y) * self.state.scale;
        let size = DVec2::new(width, height) * self.state.scale;
        let min = origin.min(origin + size);
        let max = origin.max(origin + size);
        let (x0, x1) = Self::center_span(min.x, max.x, self.width)?;
        let (y0, y1) = Self::center_span(min.y, max.y, self.height)?;
        Some((x0, x1, y0, y1))
    }

    fn blend(&mut self, idx: usize, color: Color) {
        let dst = self.pixels[idx];
        let src = color.to_rgba_u8();
        let sa = src[3] as f32 / 255.0;
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);

        let mut out = [0u8; 4];
        if out_a > 0.0 {
            for c in 0..3 {
                let value = (src[c] as f32 * sa + dst[c] as f32 * da * (1.0 - sa)) / out_a;
                out[c] = value.round().clamp(0.0, 255.0) as u8;
            }
        }
        out[3] = (out_a * 255.0).round() as u8;
        self.pixels[idx] = out;
    }

    fn build_path(&self) -> Path {
        let mut builder = Path::builder();
        for subpath in &self.path {
            if let Some((first, rest)) = subpath.split_first() {
                builder.begin(*first);
                for p in rest {
                    builder.line_to(*p);
                }
                builder.end(false);
            }
        }
        builder.build()
    }

    /// Mark the pixels whose centers lie inside the triangle `a b c`.
    fn cover_triangle(&mut self, a: Point, b: Point, c: Point) {
        let area = edge(a, b, c);
        if area == 0.0 {
            return;
        }
        let min = a.min(b).min(c);
        let max = a.max(b).max(c);
        let (Some((x0, x1)), Some((y0, y1))) = (
            Self::center_span(min.x as f64, max.x as f64 + 1.0, self.width),
            Self::center_span(min.y as f64, max.y as f64 + 1.0, self.height),
        ) else {
            return;
        };

        for py in y0..y1 {
            for px in x0..x1 {
                let p = point(px as f32 + 0.5, py as f32 + 0.5);
                let w = [edge(b, c, p), edge(c, a, p), edge(a, b, p)];
                let inside = if area > 0.0 {
                    w.iter().all(|&v| v >= 0.0)
                } else {
                    w.iter().all(|&v| v <= 0.0)
                };
                if inside {
                    let idx = py as usize * self.width as usize + px as usize;
                    if !self.coverage[idx] {
                        self.coverage[idx] = true;
                        self.touched.push(idx);
                    }
                }
            }
        }
    }

    /// Rasterize a tessellated mesh and blend every covered pixel once.
    fn paint_mesh(&mut self, mesh: &VertexBuffers<Point, u32>, color: Color) {
        for tri in mesh.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
            self.cover_triangle(a, b, c);
        }

        let touched = std::mem::take(&mut self.touched);
        for &idx in &touched {
            self.coverage[idx] = false;
            self.blend(idx, color);
        }
        self.touched = touched;
        self.touched.clear();
    }
}

/// Twice the signed area of the triangle `a b p`.
#[inline]
fn edge(a: Point, b: Point, p: Point) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

impl DrawSurface for RasterSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let Some((x0, x1, y0, y1)) = self.rect_span(x, y, width, height) else {
            return;
        };
        for py in y0..y1 {
            let row = py as usize * self.width as usize;
            self.pixels[row + x0 as usize..row + x1 as usize].fill([0; 4]);
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let Some((x0, x1, y0, y1)) = self.rect_span(x, y, width, height) else {
            return;
        };
        let color = self.state.fill;
        for py in y0..y1 {
            let row = py as usize * self.width as usize;
            for px in x0..x1 {
                self.blend(row + px as usize, color);
            }
        }
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.state.scale *= DVec2::new(sx, sy);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: DVec2) {
        if let Some(device) = self.to_device(p) {
            self.path.push(vec![device]);
        }
    }

    fn line_to(&mut self, p: DVec2) {
        let Some(device) = self.to_device(p) else {
            return;
        };
        match self.path.last_mut() {
            Some(subpath) => subpath.push(device),
            None => self.path.push(vec![device]),
        }
    }

    fn arc(&mut self, center: DVec2, radius: f64, start_angle: f64, end_angle: f64) {
        let sweep = end_angle - start_angle;
        if !(sweep.is_finite() && start_angle.is_finite() && radius.is_finite()) || radius < 0.0 {
            return;
        }
        let Some(device_center) = self.to_device(center) else {
            return;
        };
        let radii = DVec2::splat(radius) * self.state.scale;
        let arc = Arc {
            center: device_center,
            radii: vector(radii.x as f32, radii.y as f32),
            start_angle: Angle::radians(start_angle as f32),
            sweep_angle: Angle::radians(sweep as f32),
            x_rotation: Angle::radians(0.0),
        };

        if self.path.is_empty() {
            self.path.push(Vec::new());
        }
        if let Some(subpath) = self.path.last_mut() {
            subpath.push(arc.from());
            subpath.extend(arc.flattened(TOLERANCE));
        }
    }

    fn stroke(&mut self) {
        let color = self.state.stroke;
        let scale = (self.state.scale.x.abs() + self.state.scale.y.abs()) / 2.0;
        let width = (self.state.line_width * scale).max(1.0) as f32;

        let options = StrokeOptions::default()
            .with_tolerance(TOLERANCE)
            .with_line_width(width);
        let mut mesh: VertexBuffers<Point, u32> = VertexBuffers::new();
        let result = StrokeTessellator::new().tessellate_path(
            &self.build_path(),
            &options,
            &mut BuffersBuilder::new(&mut mesh, |vertex: StrokeVertex| vertex.position()),
        );
        if result.is_err() {
            tracing::warn!("Stroke tessellation failed");
            return;
        }
        self.paint_mesh(&mesh, color);
    }

    fn fill(&mut self) {
        let color = self.state.fill;
        let options = FillOptions::default()
            .with_tolerance(TOLERANCE)
            .with_fill_rule(FillRule::NonZero);
        let mut mesh: VertexBuffers<Point, u32> = VertexBuffers::new();
        let result = FillTessellator::new().tessellate_path(
            &self.build_path(),
            &options,
            &mut BuffersBuilder::new(&mut mesh, |vertex: FillVertex| vertex.position()),
        );
        if result.is_err() {
            tracing::warn!("Fill tessellation failed");
            return;
        }
        self.paint_mesh(&mesh, color);
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn set_fill_style(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
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
