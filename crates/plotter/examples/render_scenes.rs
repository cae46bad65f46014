//! Render a few demo scenes to PNG files.
//!
//! This example shows:
//! - Building scenes from axes, curves, points and vector fields
//! - Scoping stroke styles to groups of drawables
//! - Superposing point charges into one field
//! - Rendering at device resolution and exporting PNGs
//!
//! Run with `cargo run -p plotter --example render_scenes --features image [out_dir]`.

use plotter::prelude::*;
use std::f64::consts::TAU;
use std::path::PathBuf;

const PURPLE: u32 = 0xAB47BC;
const TEAL: u32 = 0x26A69A;

fn functions_scene() -> Scene {
    Scene::new()
        .with(Axes)
        .with(
            StyleScope::new()
                .stroke(Color::from_hex(PURPLE))
                .line_width(3.0)
                .with(FunctionCurve::new(|x| x * x / 4.0))
                .with(
                    StyleScope::new()
                        .stroke(Color::from_hex(TEAL))
                        .with(FunctionCurve::new(|x| 1.0 / x)),
                ),
        )
        .with(Point::new(2.0, 1.0))
}

fn parametric_scene() -> Scene {
    Scene::new()
        .with(Axes)
        .with(
            StyleScope::new()
                .stroke(Color::from_hex(PURPLE))
                .line_width(2.0)
                .with(ParametricCurve::new(
                    |t| DVec2::new(5.0 * (3.0 * t).sin(), 5.0 * (2.0 * t).sin()),
                    0.0,
                    TAU,
                    0.005,
                )),
        )
}

fn charges_scene() -> Scene {
    let charges = [
        PointCharge::new(-4.0, 1.0, 1.0),
        PointCharge::new(4.0, -1.0, -1.0),
    ];
    let mut scene = Scene::new()
        .with(Axes)
        .with(VectorField::normalized(superpose(&charges)));
    scene.extend(charges.iter().map(|charge| {
        let color = if charge.q > 0.0 { Color::RED } else { Color::BLUE };
        Point::new(charge.x, charge.y).with_color(color)
    }));
    scene
}

fn preset_scene(preset: FieldPreset) -> Scene {
    let mut scene = Scene::new().with(Axes);
    if let Some(field) = preset.field() {
        scene.push(VectorField::normalized(field));
    }
    scene
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    plotter::core::logging::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)?;

    let plotter = Plotter::new(PlotterConfig::default().with_resolution_factor(2.0))?;

    let mut scenes = vec![
        ("functions".to_string(), functions_scene()),
        ("parametric".to_string(), parametric_scene()),
        ("charges".to_string(), charges_scene()),
    ];
    for preset in FieldPreset::ALL {
        if preset != FieldPreset::None {
            let name = preset.name().to_lowercase().replace(' ', "_");
            scenes.push((name, preset_scene(preset)));
        }
    }

    for (name, scene) in &scenes {
        let surface = plotter.render(scene)?;
        let path = out_dir.join(format!("{}.png", name));
        surface.save_png(&path)?;
        tracing::info!("Wrote {}", path.display());
    }

    Ok(())
}
