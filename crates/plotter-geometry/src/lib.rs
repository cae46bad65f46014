//! Plotter Geometry - rendering core for 2D math plots
//!
//! This crate provides:
//! - [`CoordinateSystem`], the affine map between plot space (y-up) and
//!   screen space (y-down)
//! - The [`DrawSurface`] capability drawables paint onto
//! - Drawable variants: axes, points, parametric and explicit curves,
//!   vector fields, custom overlays and style scopes
//! - Scene registration: flattening a declarative [`Scene`] tree into an
//!   ordered, style-scoped [`DrawList`]
//! - [`RasterSurface`], a software RGBA surface
//!
//! # Example
//!
//! ```
//! use plotter_geometry::*;
//!
//! let cs = CoordinateSystem::centered(0.0, 0.0, 500.0, 500.0, 20.0).unwrap();
//! let scene = Scene::new()
//!     .with(Axes)
//!     .with(StyleScope::new().stroke(Color::from_hex(0xAB47BC)).line_width(5.0)
//!         .with(FunctionCurve::new(|x| x * x)))
//!     .with(Point::new(1.0, 1.0));
//!
//! let mut surface = RasterSurface::new(500, 500).unwrap();
//! scene.register().execute(&mut surface, &cs, 500.0, 500.0);
//! ```

// Core primitives
mod color;
mod coordinate_system;
mod query;
mod surface;

// Styling
mod style;

// Drawables and registration
mod drawable;
pub mod drawables;
mod scene;

// Software rendering
mod raster;

pub use plotter_core::ConfigurationError;

pub use color::*;
pub use coordinate_system::*;
pub use query::*;
pub use surface::*;

pub use style::*;

pub use drawable::*;
pub use drawables::*;
pub use scene::*;

pub use raster::*;
