use glam::DVec2;
use plotter_geometry::*;
use plotter_test_utils::{RecordingSurface, SurfaceCall};

const SIZE: f64 = 100.0;

fn cs() -> CoordinateSystem {
    CoordinateSystem::centered(0.0, 0.0, SIZE, SIZE, 10.0).unwrap()
}

fn segment() -> ParametricCurve {
    ParametricCurve::new(|t| DVec2::new(t, 0.0), 0.0, 1.0, 0.5)
}

fn kinds(list: &DrawList<'_>) -> Vec<&'static str> {
    list.drawables().map(Drawable::kind).collect()
}

#[test]
fn test_registration_follows_declaration_order() {
    let scene = Scene::new()
        .with(Axes)
        .with(StyleScope::new().with(FunctionCurve::new(|x| x)).with(Point::new(0.0, 0.0)))
        .with(Point::new(1.0, 1.0));

    let list = scene.register();
    assert_eq!(
        kinds(&list),
        vec!["axes", "function_curve", "point", "point"]
    );
    assert_eq!(list.len(), 6);
    assert!(matches!(list.commands()[1], DrawCommand::PushStyle(_)));
    assert!(matches!(list.commands()[4], DrawCommand::PopStyle));
}

#[test]
fn test_registration_tracks_effective_style() {
    let scene = Scene::new().with(
        StyleScope::new()
            .stroke(Color::RED)
            .line_width(3.0)
            .with(StyleScope::new().line_width(7.0).with(segment()))
            .with(segment()),
    );

    let list = scene.register();
    assert_eq!(list.max_depth(), 2);

    let draws: Vec<_> = list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Draw { style, depth, .. } => Some((*style, *depth)),
            _ => None,
        })
        .collect();
    assert_eq!(draws.len(), 2);
    assert_eq!(
        draws[0],
        (
            StyleOverrides::new()
                .with_stroke(Color::RED)
                .with_line_width(7.0),
            2
        )
    );
    assert_eq!(
        draws[1],
        (
            StyleOverrides::new()
                .with_stroke(Color::RED)
                .with_line_width(3.0),
            1
        )
    );
}

#[test]
fn test_push_and_pop_are_balanced() {
    let scene = Scene::new()
        .with(StyleScope::new().with(StyleScope::new().with(StyleScope::new())))
        .with(StyleScope::new().fill(Color::BLUE));

    let list = scene.register();
    let pushes = list
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::PushStyle(_)))
        .count();
    let pops = list
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::PopStyle))
        .count();
    assert_eq!(pushes, 4);
    assert_eq!(pops, 4);
    assert_eq!(list.drawables().count(), 0);
}

#[test]
fn test_empty_scene_registers_nothing() {
    let scene = Scene::new();
    assert!(scene.is_empty());
    assert!(scene.register().is_empty());

    let mut surface = RecordingSurface::new();
    let stats = scene.register().execute(&mut surface, &cs(), SIZE, SIZE);
    assert_eq!(stats, DrawStats::default());
    assert_eq!(surface.call_count(), 0);
}

#[test]
fn test_unplaced_drawable_is_never_drawn() {
    let _orphan = Point::new(3.0, 3.0).with_color(Color::RED);
    let scene = Scene::new().with(Point::new(0.0, 0.0));

    let mut surface = RecordingSurface::new();
    scene.register().execute(&mut surface, &cs(), SIZE, SIZE);
    assert_eq!(surface.count_fills(), 1);
    assert_eq!(surface.fills()[0].color, Color::BLACK);
}

#[test]
fn test_sibling_scopes_do_not_leak() {
    let scene = Scene::new()
        .with(StyleScope::new().stroke(Color::RED).with(segment()))
        .with(StyleScope::new().stroke(Color::GREEN).with(segment()))
        .with(segment());

    let mut surface = RecordingSurface::new();
    surface.set_stroke_style(Color::BLUE);
    let stats = scene.register().execute(&mut surface, &cs(), SIZE, SIZE);

    let colors: Vec<Color> = surface.strokes().iter().map(|s| s.color).collect();
    assert_eq!(colors, vec![Color::RED, Color::GREEN, Color::BLUE]);
    assert_eq!(surface.stroke_style(), Color::BLUE);
    assert_eq!(surface.save_depth(), 0);
    assert_eq!(surface.unbalanced_restores(), 0);
    assert_eq!(
        stats,
        DrawStats {
            drawables: 3,
            style_scopes: 2
        }
    );
}

#[test]
fn test_sibling_scopes_do_not_leak_when_drawn_directly() {
    let first = StyleScope::new().stroke(Color::RED).with(segment());
    let second = StyleScope::new().with(segment());

    let mut surface = RecordingSurface::new();
    first.draw(&mut surface, &cs(), SIZE, SIZE);
    second.draw(&mut surface, &cs(), SIZE, SIZE);

    let strokes = surface.strokes();
    assert_eq!(strokes[0].color, Color::RED);
    assert_eq!(strokes[1].color, Color::BLACK);
    assert_eq!(surface.stroke_style(), Color::BLACK);
}

#[test]
fn test_nested_scope_overrides_and_restores() {
    let scene = Scene::new().with(
        StyleScope::new()
            .stroke(Color::RED)
            .line_width(3.0)
            .with(StyleScope::new().line_width(7.0).with(segment()))
            .with(segment()),
    );

    let mut surface = RecordingSurface::new();
    scene.register().execute(&mut surface, &cs(), SIZE, SIZE);

    let strokes = surface.strokes();
    assert_eq!((strokes[0].color, strokes[0].line_width), (Color::RED, 7.0));
    assert_eq!((strokes[1].color, strokes[1].line_width), (Color::RED, 3.0));
    assert_eq!(surface.max_save_depth(), 2);
    assert_eq!(surface.line_width(), 1.0);
}

#[test]
fn test_execute_matches_direct_draw() {
    let scene = Scene::new()
        .with(Axes)
        .with(
            StyleScope::new()
                .fill(Color::RED)
                .with(Point::new(1.0, 1.0))
                .with(FunctionCurve::new(|x| x.sin())),
        );

    let mut via_list = RecordingSurface::new();
    scene.register().execute(&mut via_list, &cs(), SIZE, SIZE);

    let mut direct = RecordingSurface::new();
    for root in scene.roots() {
        root.draw(&mut direct, &cs(), SIZE, SIZE);
    }

    assert_eq!(via_list.calls(), direct.calls());
}

#[test]
fn test_empty_scope_still_saves_and_restores() {
    let scene = Scene::new().with(StyleScope::new());
    let mut surface = RecordingSurface::new();
    scene.register().execute(&mut surface, &cs(), SIZE, SIZE);
    assert_eq!(surface.calls(), &[SurfaceCall::Save, SurfaceCall::Restore]);
}

#[test]
fn test_scene_from_iterator() {
    let scene: Scene = (0..3).map(|i| Point::new(i as f64, 0.0)).collect();
    assert_eq!(scene.roots().len(), 3);
    assert_eq!(scene.register().drawables().count(), 3);
}
