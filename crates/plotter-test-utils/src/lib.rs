//! Test utilities for plotter crates.
//!
//! The main component is `RecordingSurface` (requires the `mock` feature), a
//! [`DrawSurface`](plotter_geometry::DrawSurface) that records every call
//! instead of painting pixels, so tests can assert on the exact drawing
//! sequence a drawable or scene produced.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use plotter_geometry::*;
//! use plotter_test_utils::RecordingSurface;
//!
//! let cs = CoordinateSystem::centered(0.0, 0.0, 100.0, 100.0, 10.0).unwrap();
//! let mut surface = RecordingSurface::new();
//! Axes.draw(&mut surface, &cs, 100.0, 100.0);
//!
//! assert_eq!(surface.count_strokes(), 1);
//! assert_eq!(surface.save_depth(), 0);
//! # }
//! ```

#[cfg(feature = "mock")]
pub mod recording_surface;

#[cfg(feature = "mock")]
pub use recording_surface::*;
