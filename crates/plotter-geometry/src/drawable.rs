//! The drawable capability and the tagged drawable descriptor.

use crate::drawables::{
    Axes, Custom, FunctionCurve, ParametricCurve, Point, StyleScope, VectorField,
};
use crate::{CoordinateSystem, DrawSurface};

/// Something that can paint itself onto a [`DrawSurface`].
///
/// `width` and `height` are the viewport size in screen pixels.
pub trait Draw {
    fn draw(&self, surface: &mut dyn DrawSurface, cs: &CoordinateSystem, width: f64, height: f64);
}

/// A value describing one renderable element of a scene.
///
/// Drawables are plain descriptors rebuilt by the host for every commit.
#[derive(Debug, Clone)]
pub enum Drawable {
    Axes(Axes),
    Point(Point),
    ParametricCurve(ParametricCurve),
    FunctionCurve(FunctionCurve),
    Custom(Custom),
    VectorField(VectorField),
    StyleScope(StyleScope),
}

impl Drawable {
    /// Short name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Drawable::Axes(_) => "axes",
            Drawable::Point(_) => "point",
            Drawable::ParametricCurve(_) => "parametric_curve",
            Drawable::FunctionCurve(_) => "function_curve",
            Drawable::Custom(_) => "custom",
            Drawable::VectorField(_) => "vector_field",
            Drawable::StyleScope(_) => "style_scope",
        }
    }
}

impl Draw for Drawable {
    fn draw(&self, surface: &mut dyn DrawSurface, cs: &CoordinateSystem, width: f64, height: f64) {
        match self {
            Drawable::Axes(d) => d.draw(surface, cs, width, height),
            Drawable::Point(d) => d.draw(surface, cs, width, height),
            Drawable::ParametricCurve(d) => d.draw(surface, cs, width, height),
            Drawable::FunctionCurve(d) => d.draw(surface, cs, width, height),
            Drawable::Custom(d) => d.draw(surface, cs, width, height),
            Drawable::VectorField(d) => d.draw(surface, cs, width, height),
            Drawable::StyleScope(d) => d.draw(surface, cs, width, height),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Drawable {
                fn from(value: $variant) -> Self {
                    Drawable::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(
    Axes,
    Point,
    ParametricCurve,
    FunctionCurve,
    Custom,
    VectorField,
    StyleScope,
);
