//! The plotter surface: geometry ownership, commits and pointer dispatch.

use crate::{PlotterError, PlotterHandler, PlotterResult, PointerEvent};
use glam::DVec2;
use plotter_core::profiling::{new_frame, profile_scope};
use plotter_core::{PlotGeometry, PlotterConfig};
use plotter_geometry::{CoordinateSystem, DrawSurface, RasterError, RasterSurface, Scene};

/// Counters reported by [`Plotter::commit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitStats {
    /// Commands in the registered draw list, scope pushes and pops included.
    pub entries: usize,
    /// Leaf drawables drawn.
    pub drawables: usize,
    /// Style scopes entered.
    pub style_scopes: usize,
}

/// Orchestrates commits of a scene onto a drawing surface.
///
/// The coordinate system is derived from the geometry and replaced whole
/// whenever the geometry changes; it is never mutated in place.
pub struct Plotter {
    config: PlotterConfig,
    cs: CoordinateSystem,
    handler: Option<Box<dyn PlotterHandler>>,
}

impl std::fmt::Debug for Plotter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plotter")
            .field("config", &self.config)
            .field("cs", &self.cs)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

impl Plotter {
    /// Create a plotter, rejecting an invalid configuration before any
    /// surface is touched.
    pub fn new(config: PlotterConfig) -> PlotterResult<Self> {
        config.validate()?;
        let cs = CoordinateSystem::from_geometry(&config.geometry)?;
        tracing::debug!(
            "Plotter created: {}x{} unit {} (resolution x{})",
            config.geometry.width,
            config.geometry.height,
            config.geometry.unit,
            config.resolution_factor
        );
        Ok(Self {
            config,
            cs,
            handler: None,
        })
    }

    pub fn with_handler(mut self, handler: impl PlotterHandler + 'static) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    pub fn set_handler(&mut self, handler: impl PlotterHandler + 'static) {
        self.handler = Some(Box::new(handler));
    }

    /// Remove the handler; pointer events are then dropped.
    pub fn clear_handler(&mut self) {
        self.handler = None;
    }

    pub fn config(&self) -> &PlotterConfig {
        &self.config
    }

    pub fn geometry(&self) -> &PlotGeometry {
        &self.config.geometry
    }

    pub fn coordinate_system(&self) -> &CoordinateSystem {
        &self.cs
    }

    pub fn width(&self) -> f64 {
        self.config.geometry.width
    }

    pub fn height(&self) -> f64 {
        self.config.geometry.height
    }

    pub fn resolution_factor(&self) -> f64 {
        self.config.resolution_factor
    }

    /// Size of the backing surface in device pixels.
    ///
    /// Fails with [`RasterError::InvalidDimensions`] when either side does
    /// not fit in a `u32`.
    pub fn device_size(&self) -> PlotterResult<(u32, u32)> {
        let rf = self.config.resolution_factor;
        let width = (self.width() * rf).ceil();
        let height = (self.height() * rf).ceil();
        let fits = |v: f64| v.is_finite() && (0.0..=u32::MAX as f64).contains(&v);
        if !(fits(width) && fits(height)) {
            tracing::warn!("Device size {}x{} does not fit a raster surface", width, height);
            // `as` saturates, which is what the error reports.
            return Err(RasterError::InvalidDimensions {
                width: width as u32,
                height: height as u32,
            }
            .into());
        }
        Ok((width as u32, height as u32))
    }

    /// Replace the geometry.
    ///
    /// Returns `Ok(true)` if a new coordinate system was built, `Ok(false)`
    /// if nothing changed. Invalid geometry is rejected and the current
    /// geometry and coordinate system are kept.
    pub fn set_geometry(&mut self, geometry: PlotGeometry) -> PlotterResult<bool> {
        if geometry == self.config.geometry {
            return Ok(false);
        }

        let cs = CoordinateSystem::from_geometry(&geometry).map_err(|err| {
            tracing::warn!("Rejected plot geometry {:?}: {}", geometry, err);
            PlotterError::from(err)
        })?;

        tracing::debug!(
            "Coordinate system replaced: origin ({}, {}) unit {}",
            cs.origin_x(),
            cs.origin_y(),
            cs.unit()
        );
        self.config.geometry = geometry;
        self.cs = cs;
        Ok(true)
    }

    pub fn set_size(&mut self, width: f64, height: f64) -> PlotterResult<bool> {
        self.set_geometry(PlotGeometry {
            width,
            height,
            ..self.config.geometry
        })
    }

    pub fn set_unit(&mut self, unit: f64) -> PlotterResult<bool> {
        self.set_geometry(PlotGeometry {
            unit,
            ..self.config.geometry
        })
    }

    pub fn set_center(&mut self, center_x: f64, center_y: f64) -> PlotterResult<bool> {
        self.set_geometry(PlotGeometry {
            center_x,
            center_y,
            ..self.config.geometry
        })
    }

    pub fn set_resolution_factor(&mut self, factor: f64) -> PlotterResult<()> {
        let config = PlotterConfig {
            resolution_factor: factor,
            ..self.config
        };
        config.validate().map_err(|err| {
            tracing::warn!("Rejected resolution factor {}: {}", factor, err);
            PlotterError::from(err)
        })?;
        self.config = config;
        Ok(())
    }

    /// A transparent software surface sized for this plotter.
    pub fn raster_surface(&self) -> PlotterResult<RasterSurface> {
        let (width, height) = self.device_size()?;
        Ok(RasterSurface::new(width, height)?)
    }

    /// Run one full commit: register the scene, clear the viewport and draw
    /// every entry in order.
    ///
    /// The draw pass runs inside a `save`/`restore` pair with the surface
    /// scaled by the resolution factor, so drawables work in CSS pixels.
    pub fn commit(&self, surface: &mut dyn DrawSurface, scene: &Scene) -> CommitStats {
        new_frame();
        profile_scope!("plotter_commit");

        let list = scene.register();
        let (width, height) = (self.width(), self.height());
        let rf = self.config.resolution_factor;

        surface.save();
        surface.scale(rf, rf);
        surface.clear_rect(0.0, 0.0, width, height);
        let stats = list.execute(surface, &self.cs, width, height);
        surface.restore();

        let stats = CommitStats {
            entries: list.len(),
            drawables: stats.drawables,
            style_scopes: stats.style_scopes,
        };
        tracing::trace!(
            "Committed {} entries ({} drawables, {} style scopes)",
            stats.entries,
            stats.drawables,
            stats.style_scopes
        );
        stats
    }

    /// Render a scene to a fresh software surface.
    pub fn render(&self, scene: &Scene) -> PlotterResult<RasterSurface> {
        let mut surface = self.raster_surface()?;
        self.commit(&mut surface, scene);
        Ok(surface)
    }

    /// Convert a pointer event to plot space and forward it to the handler.
    ///
    /// Returns the plot position of move and click events.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<DVec2> {
        let cs = self.cs;
        match event {
            PointerEvent::Move { x, y } => {
                let p = cs.to_plot(DVec2::new(x, y));
                if let Some(handler) = self.handler.as_mut() {
                    handler.on_mouse_move(p.x, p.y, &cs);
                }
                Some(p)
            }
            PointerEvent::Click { x, y } => {
                let p = cs.to_plot(DVec2::new(x, y));
                if let Some(handler) = self.handler.as_mut() {
                    handler.on_click(p.x, p.y, &cs);
                }
                Some(p)
            }
            PointerEvent::Leave => {
                if let Some(handler) = self.handler.as_mut() {
                    handler.on_mouse_leave(&cs);
                }
                None
            }
        }
    }
}
