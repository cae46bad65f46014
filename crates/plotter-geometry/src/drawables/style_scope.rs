use crate::{Color, CoordinateSystem, Draw, DrawSurface, Drawable, StyleOverrides};

/// Scopes fill, stroke and line width overrides to its children.
///
/// Drawing a scope saves the surface state, applies the overrides, draws the
/// children in order and restores the state, so nothing leaks to siblings or
/// to the parent.
#[derive(Debug, Clone, Default)]
pub struct StyleScope {
    pub style: StyleOverrides,
    pub children: Vec<Drawable>,
}

impl StyleScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.style.fill = Some(color);
        self
    }

    pub fn stroke(mut self, color: Color) -> Self {
        self.style.stroke = Some(color);
        self
    }

    pub fn line_width(mut self, width: f64) -> Self {
        self.style.line_width = Some(width);
        self
    }

    /// Append a child.
    pub fn with(mut self, child: impl Into<Drawable>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child in place.
    pub fn push(&mut self, child: impl Into<Drawable>) {
        self.children.push(child.into());
    }
}

impl Draw for StyleScope {
    fn draw(&self, surface: &mut dyn DrawSurface, cs: &CoordinateSystem, width: f64, height: f64) {
        surface.save();
        self.style.apply(surface);
        for child in &self.children {
            child.draw(surface, cs, width, height);
        }
        surface.restore();
    }
}
