//! Named preset fields offered to hosts.

use crate::{Vector2D, VectorField2D, electric_point_field};

/// A selectable preset vector field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPreset {
    None,
    Uniform,
    ElectricMonopole,
    EqualElectricDipole,
    UnequalElectricDipole,
    Circular,
}

impl FieldPreset {
    /// All presets in display order.
    pub const ALL: [FieldPreset; 6] = [
        FieldPreset::None,
        FieldPreset::Uniform,
        FieldPreset::ElectricMonopole,
        FieldPreset::EqualElectricDipole,
        FieldPreset::UnequalElectricDipole,
        FieldPreset::Circular,
    ];

    /// Display name of the preset.
    pub fn name(self) -> &'static str {
        match self {
            FieldPreset::None => "NONE",
            FieldPreset::Uniform => "UNIFORM FIELD",
            FieldPreset::ElectricMonopole => "ELECTRIC MONOPOLE",
            FieldPreset::EqualElectricDipole => "EQUAL ELECTRIC DIPOLE",
            FieldPreset::UnequalElectricDipole => "UNEQUAL ELECTRIC DIPOLE",
            FieldPreset::Circular => "CIRCULAR FIELD",
        }
    }

    /// Look a preset up by display name; unknown names map to `None` the
    /// preset, mirroring how a selector falls back to its first entry.
    pub fn from_name(name: &str) -> FieldPreset {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == name)
            .unwrap_or(FieldPreset::None)
    }

    /// Build the field, or `None` for [`FieldPreset::None`].
    pub fn field(self) -> Option<VectorField2D> {
        match self {
            FieldPreset::None => None,
            FieldPreset::Uniform => Some(VectorField2D::uniform(Vector2D::new(1.0, 1.0))),
            FieldPreset::ElectricMonopole => Some(electric_point_field(0.5, 0.5, 1.2)),
            FieldPreset::EqualElectricDipole => Some(
                electric_point_field(-1.0, 0.5, 0.6).add(&electric_point_field(2.0, -0.1, -0.6)),
            ),
            FieldPreset::UnequalElectricDipole => Some(
                electric_point_field(-0.8, 0.3, -0.5).add(&electric_point_field(2.0, -0.1, 1.1)),
            ),
            FieldPreset::Circular => Some(VectorField2D::new(|x, y| Vector2D::new(y, -x))),
        }
    }
}

impl std::fmt::Display for FieldPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_roundtrip() {
        for preset in FieldPreset::ALL {
            assert_eq!(FieldPreset::from_name(preset.name()), preset);
        }
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(FieldPreset::from_name("QUADRUPOLE"), FieldPreset::None);
        assert!(FieldPreset::None.field().is_none());
    }

    #[test]
    fn test_circular_field() {
        let field = FieldPreset::Circular.field().unwrap();
        assert_eq!(field.at(1.0, 0.0), Vector2D::new(0.0, -1.0));
        assert_eq!(field.at(0.0, 2.0), Vector2D::new(2.0, 0.0));
    }

    #[test]
    fn test_uniform_field() {
        let field = FieldPreset::Uniform.field().unwrap();
        assert_eq!(field.at(-40.0, 3.0), Vector2D::new(1.0, 1.0));
    }

    #[test]
    fn test_monopole_is_singular_at_charge() {
        let field = FieldPreset::ElectricMonopole.field().unwrap();
        assert!(!field.at(0.5, 0.5).is_finite());
        assert!(field.at(0.0, 0.0).is_finite());
    }
}
