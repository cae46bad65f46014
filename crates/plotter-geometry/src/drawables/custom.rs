use crate::{CoordinateSystem, Draw, DrawSurface};
use std::sync::Arc;

type CustomFn = dyn Fn(&mut dyn DrawSurface, &CoordinateSystem) + Send + Sync;

/// Escape hatch for bespoke overlays such as tool cursors.
///
/// The callback is responsible for pairing its own `save`/`restore` calls.
#[derive(Clone)]
pub struct Custom {
    draw_fn: Arc<CustomFn>,
}

impl Custom {
    pub fn new(draw_fn: impl Fn(&mut dyn DrawSurface, &CoordinateSystem) + Send + Sync + 'static) -> Self {
        Self {
            draw_fn: Arc::new(draw_fn),
        }
    }
}

impl std::fmt::Debug for Custom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Custom").finish_non_exhaustive()
    }
}

impl Draw for Custom {
    fn draw(&self, surface: &mut dyn DrawSurface, cs: &CoordinateSystem, _width: f64, _height: f64) {
        (self.draw_fn)(surface, cs);
    }
}
