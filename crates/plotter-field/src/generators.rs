//! Field generators for point and line charges.
//!
//! Every generator is a pure factory: it captures its parameters by value and
//! returns a new [`VectorField2D`]. Evaluating a point field exactly at its
//! charge divides zero by zero and yields NaN components; callers that draw
//! fields skip such samples.

use crate::{Vector2D, VectorField2D};
use glam::DVec2;

/// A point charge in plot space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCharge {
    pub x: f64,
    pub y: f64,
    /// Signed charge magnitude.
    pub q: f64,
}

impl PointCharge {
    pub const fn new(x: f64, y: f64, q: f64) -> Self {
        Self { x, y, q }
    }

    /// Coulomb field of this charge.
    pub fn electric_field(&self) -> VectorField2D {
        electric_point_field(self.x, self.y, self.q)
    }
}

/// Coulomb contribution of a charge `q` at `source` measured at `target`.
#[inline]
fn coulomb(source: DVec2, q: f64, target: DVec2) -> Vector2D {
    let delta = target - source;
    let distance = delta.length();
    Vector2D::from(delta).times(q / distance.powi(3))
}

/// Transverse counterpart of [`coulomb`]: same falloff, direction `(Δy, -Δx)`.
#[inline]
fn transverse(source: DVec2, q: f64, target: DVec2) -> Vector2D {
    let delta = target - source;
    let distance = delta.length();
    Vector2D::new(delta.y, -delta.x).times(q / distance.powi(3))
}

/// Radial field of a point charge `q` at `(x, y)`.
///
/// The value at `(xa, ya)` is `q * Δ / |Δ|³` with `Δ = (xa - x, ya - y)`, so the
/// magnitude falls off as `1/r²`.
pub fn electric_point_field(x: f64, y: f64, q: f64) -> VectorField2D {
    let source = DVec2::new(x, y);
    VectorField2D::new(move |xa, ya| coulomb(source, q, DVec2::new(xa, ya)))
}

/// Vortex-like field around `(x, y)`.
///
/// Same inverse-cube scaling as [`electric_point_field`] but the direction is
/// `(Δy, -Δx)`, perpendicular to the displacement; positive `q` circulates
/// clockwise in plot space.
pub fn magnetic_point_field(x: f64, y: f64, q: f64) -> VectorField2D {
    let source = DVec2::new(x, y);
    VectorField2D::new(move |xa, ya| transverse(source, q, DVec2::new(xa, ya)))
}

/// Positions of `precision` equal sub-charges along a segment.
///
/// Each sub-charge sits at the midpoint of its slice of the segment.
fn segment_sources(start: DVec2, end: DVec2, precision: u32) -> Vec<DVec2> {
    let n = precision as f64;
    (0..precision)
        .map(|i| start.lerp(end, (i as f64 + 0.5) / n))
        .collect()
}

fn segment_field(
    start: DVec2,
    end: DVec2,
    q: f64,
    precision: u32,
    contribution: fn(DVec2, f64, DVec2) -> Vector2D,
) -> VectorField2D {
    if precision == 0 {
        tracing::trace!("Line field with zero precision, using zero field");
        return VectorField2D::zero();
    }

    let sources = segment_sources(start, end, precision);
    let sub_charge = q / precision as f64;

    VectorField2D::new(move |xa, ya| {
        let target = DVec2::new(xa, ya);
        sources.iter().fold(Vector2D::ZERO, |acc, &source| {
            acc.plus(contribution(source, sub_charge, target))
        })
    })
}

/// Field of a uniformly charged segment.
///
/// The segment is approximated by `precision` equally spaced point charges of
/// `q / precision` each; the result is the sum of their Coulomb fields. Higher
/// precision is more accurate and proportionally more expensive to evaluate.
/// A precision of zero yields the zero field.
pub fn electric_line_field(
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    q: f64,
    precision: u32,
) -> VectorField2D {
    segment_field(
        DVec2::new(start_x, start_y),
        DVec2::new(end_x, end_y),
        q,
        precision,
        coulomb,
    )
}

/// Transverse field of a segment, built like [`electric_line_field`] from
/// [`magnetic_point_field`] contributions.
pub fn magnetic_line_field(
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    q: f64,
    precision: u32,
) -> VectorField2D {
    segment_field(
        DVec2::new(start_x, start_y),
        DVec2::new(end_x, end_y),
        q,
        precision,
        transverse,
    )
}

/// Superpose the Coulomb fields of a set of charges.
///
/// An empty set yields the zero field.
pub fn superpose(charges: &[PointCharge]) -> VectorField2D {
    let charges = charges.to_vec();
    VectorField2D::new(move |xa, ya| {
        let target = DVec2::new(xa, ya);
        charges.iter().fold(Vector2D::ZERO, |acc, c| {
            acc.plus(coulomb(DVec2::new(c.x, c.y), c.q, target))
        })
    })
}
