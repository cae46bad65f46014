//! Plotter Field - 2D vector fields
//!
//! This crate provides:
//! - [`Vector2D`], an immutable 2D vector value
//! - [`VectorField2D`], a pure mapping from a plot point to a vector, composable
//!   with pointwise [`add`](VectorField2D::add) and [`multiply`](VectorField2D::multiply)
//! - Field generators for point and line charges
//! - Named preset fields
//!
//! # Example
//!
//! ```
//! use plotter_field::*;
//!
//! let dipole = electric_point_field(-1.0, 0.0, 1.0).add(&electric_point_field(1.0, 0.0, -1.0));
//! let v = dipole.at(0.0, 2.0);
//! assert!(v.x > 0.0);
//! ```
//!
//! Generators never fail: evaluating a charge's field at the charge itself
//! yields non-finite components, and filtering is left to the drawing code.

mod field;
mod generators;
mod presets;
mod vector;

pub use field::*;
pub use generators::*;
pub use presets::*;
pub use vector::*;
