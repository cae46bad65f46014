//! Drawable variants.
//!
//! Every variant implements [`Draw`](crate::Draw). They are collected into the
//! [`Drawable`](crate::Drawable) enum for scene trees.

mod axes;
mod custom;
mod function;
mod parametric;
mod point;
mod style_scope;
mod vector_field;

pub use axes::*;
pub use custom::*;
pub use function::*;
pub use parametric::*;
pub use point::*;
pub use style_scope::*;
pub use vector_field::*;

use crate::Color;

/// Radius, in pixels, of plotted points.
pub const POINT_RADIUS: f64 = 5.0;

/// Stroke color of the coordinate axes (`#AAAAAA`).
pub const AXES_COLOR: Color = Color::rgb(170.0 / 255.0, 170.0 / 255.0, 170.0 / 255.0);

/// Stroke width of the coordinate axes.
pub const AXES_LINE_WIDTH: f64 = 1.5;

/// Spacing, in pixels, of vector field samples; also the on-screen length
/// of normalized field arrows.
pub const FIELD_DENSITY: f64 = 10.0;
