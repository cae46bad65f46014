//! Style overrides applied by style scopes.

use crate::{Color, DrawSurface};

/// Optional overrides of the surface's drawing state.
///
/// Unset fields leave the ambient value untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleOverrides {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub line_width: Option<f64>,
}

impl StyleOverrides {
    /// No overrides.
    pub const fn new() -> Self {
        Self {
            fill: None,
            stroke: None,
            line_width: None,
        }
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke = Some(color);
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    /// Check if no field is overridden.
    pub fn is_empty(&self) -> bool {
        self.fill.is_none() && self.stroke.is_none() && self.line_width.is_none()
    }

    /// Write the set fields to the surface.
    pub fn apply(&self, surface: &mut dyn DrawSurface) {
        if let Some(fill) = self.fill {
            surface.set_fill_style(fill);
        }
        if let Some(stroke) = self.stroke {
            surface.set_stroke_style(stroke);
        }
        if let Some(width) = self.line_width {
            surface.set_line_width(width);
        }
    }

    /// Layer `self` on top of `base`: set fields of `self` win.
    pub fn over(&self, base: &StyleOverrides) -> StyleOverrides {
        StyleOverrides {
            fill: self.fill.or(base.fill),
            stroke: self.stroke.or(base.stroke),
            line_width: self.line_width.or(base.line_width),
        }
    }
}

/// Stack of nested style scopes, tracked while a scene is registered.
#[derive(Debug, Clone, Default)]
pub struct StyleStack {
    /// Effective overrides at each depth, outermost first.
    layers: Vec<StyleOverrides>,
}

impl StyleStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a scope.
    pub fn push(&mut self, overrides: &StyleOverrides) {
        let effective = overrides.over(&self.effective());
        self.layers.push(effective);
    }

    /// Leave the innermost scope.
    pub fn pop(&mut self) -> Option<StyleOverrides> {
        self.layers.pop()
    }

    /// Combined overrides of every open scope.
    pub fn effective(&self) -> StyleOverrides {
        self.layers.last().copied().unwrap_or_default()
    }

    /// Number of open scopes.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overrides() {
        assert!(StyleOverrides::new().is_empty());
        assert!(!StyleOverrides::new().with_line_width(2.0).is_empty());
    }

    #[test]
    fn test_over_prefers_inner() {
        let outer = StyleOverrides::new()
            .with_stroke(Color::RED)
            .with_line_width(3.0);
        let inner = StyleOverrides::new().with_stroke(Color::BLUE);
        let merged = inner.over(&outer);
        assert_eq!(merged.stroke, Some(Color::BLUE));
        assert_eq!(merged.line_width, Some(3.0));
        assert_eq!(merged.fill, None);
    }

    #[test]
    fn test_stack_push_pop() {
        let mut stack = StyleStack::new();
        assert_eq!(stack.effective(), StyleOverrides::default());

        stack.push(&StyleOverrides::new().with_fill(Color::RED));
        stack.push(&StyleOverrides::new().with_line_width(4.0));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.effective().fill, Some(Color::RED));
        assert_eq!(stack.effective().line_width, Some(4.0));

        stack.pop();
        assert_eq!(stack.effective().line_width, None);
        stack.pop();
        assert_eq!(stack.depth(), 0);
        assert!(stack.pop().is_none());
    }
}
