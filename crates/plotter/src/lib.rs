//! Plotter - interactive 2D math plots
//!
//! A [`Plotter`] owns the plot geometry and its [`CoordinateSystem`]. Each
//! commit takes a declarative [`Scene`] built by the host, registers it into
//! an ordered draw list and paints it onto any [`DrawSurface`]. Pointer
//! events in screen pixels are converted to plot coordinates and forwarded
//! to a [`PlotterHandler`].
//!
//! - **Geometry**: coordinate system, drawables, scene registration and a
//!   software raster surface (`plotter-geometry`)
//! - **Fields**: vector fields, point and line charge generators, presets
//!   (`plotter-field`)
//! - **Core**: logging, profiling and configuration (`plotter-core`)
//!
//! # Quick Start
//!
//! ```
//! use plotter::prelude::*;
//!
//! let plotter = Plotter::new(PlotterConfig::new().with_size(200.0, 100.0).with_resolution_factor(1.0))?;
//! let scene = Scene::new()
//!     .with(Axes)
//!     .with(VectorField::normalized(electric_point_field(0.0, 0.0, 1.0)))
//!     .with(Point::new(0.0, 0.0).with_color(Color::RED));
//!
//! let mut surface = plotter.raster_surface()?;
//! let stats = plotter.commit(&mut surface, &scene);
//! assert_eq!(stats.drawables, 3);
//! # Ok::<(), plotter::PlotterError>(())
//! ```

mod error;
mod event;
mod plotter;

pub use plotter_core as core;
pub use plotter_field as field;
pub use plotter_geometry as geometry;

pub use error::{PlotterError, PlotterResult};
pub use event::{PlotterHandler, PointerEvent};
pub use plotter::{CommitStats, Plotter};

pub use plotter_core::{ConfigurationError, PlotGeometry, PlotterConfig};
pub use plotter_geometry::{CoordinateSystem, DrawSurface, Scene};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlotterError, PlotterResult};
    pub use crate::event::{PlotterHandler, PointerEvent};
    pub use crate::plotter::{CommitStats, Plotter};

    pub use plotter_core::{ConfigurationError, PlotGeometry, PlotterConfig};

    // Geometry and drawables
    pub use plotter_geometry::{
        Axes, Color, CoordinateSystem, Custom, Draw, DrawSurface, Drawable, FunctionCurve,
        ParametricCurve, Point, RasterSurface, Scene, StyleScope, VectorField, nearest_point,
    };

    // Field model
    pub use plotter_field::{
        FieldPreset, PointCharge, Vector2D, VectorField2D, electric_line_field,
        electric_point_field, magnetic_line_field, magnetic_point_field, superpose,
    };

    pub use glam::DVec2;
}
