use plotter::geometry::{POINT_RADIUS, RasterError};
use plotter::prelude::*;
use plotter_test_utils::{RecordingSurface, SurfaceCall};
use std::cell::RefCell;
use std::rc::Rc;

fn small_config() -> PlotterConfig {
    PlotterConfig::new()
        .with_size(100.0, 100.0)
        .with_unit(10.0)
        .with_resolution_factor(2.0)
}

#[derive(Debug, Clone, PartialEq)]
enum Callback {
    Move(f64, f64),
    Click(f64, f64),
    Leave(f64),
}

#[derive(Clone, Default)]
struct Recorder {
    log: Rc<RefCell<Vec<Callback>>>,
}

impl PlotterHandler for Recorder {
    fn on_mouse_move(&mut self, x: f64, y: f64, _cs: &CoordinateSystem) {
        self.log.borrow_mut().push(Callback::Move(x, y));
    }

    fn on_click(&mut self, x: f64, y: f64, _cs: &CoordinateSystem) {
        self.log.borrow_mut().push(Callback::Click(x, y));
    }

    fn on_mouse_leave(&mut self, cs: &CoordinateSystem) {
        self.log.borrow_mut().push(Callback::Leave(cs.unit()));
    }
}

#[test]
fn test_default_plotter_is_centered() {
    let plotter = Plotter::new(PlotterConfig::default()).unwrap();
    let cs = plotter.coordinate_system();
    assert_eq!(cs.origin_x(), 350.0);
    assert_eq!(cs.origin_y(), 215.0);
    assert_eq!(cs.unit(), 20.0);
    assert_eq!(plotter.device_size(), Ok((2800, 1720)));
}

#[test]
fn test_device_size_overflow_is_rejected() {
    let plotter = Plotter::new(PlotterConfig::new().with_size(1e10, 100.0)).unwrap();
    assert_eq!(
        plotter.device_size(),
        Err(PlotterError::Raster(RasterError::InvalidDimensions {
            width: u32::MAX,
            height: 400
        }))
    );
    assert!(plotter.raster_surface().is_err());
}

#[test]
fn test_oversized_raster_surface_is_rejected() {
    // Fits a u32 per side, but not the pixel budget.
    let plotter = Plotter::new(PlotterConfig::new().with_size(1e6, 1e6)).unwrap();
    assert_eq!(plotter.device_size(), Ok((4_000_000, 4_000_000)));
    assert!(matches!(
        plotter.raster_surface(),
        Err(PlotterError::Raster(RasterError::InvalidDimensions { .. }))
    ));
}

#[test]
fn test_invalid_unit_is_rejected_up_front() {
    let err = Plotter::new(PlotterConfig::new().with_unit(0.0)).unwrap_err();
    assert_eq!(
        err,
        PlotterError::Configuration(ConfigurationError::NonPositiveUnit(0.0))
    );

    let err = Plotter::new(PlotterConfig::new().with_unit(-5.0)).unwrap_err();
    assert!(matches!(err, PlotterError::Configuration(_)));
}

#[test]
fn test_commit_wraps_draw_pass() {
    let plotter = Plotter::new(small_config()).unwrap();
    let scene = Scene::new().with(Axes);

    let mut surface = RecordingSurface::new();
    let stats = plotter.commit(&mut surface, &scene);

    let calls = surface.calls();
    assert_eq!(calls[0], SurfaceCall::Save);
    assert_eq!(calls[1], SurfaceCall::Scale { sx: 2.0, sy: 2.0 });
    assert_eq!(
        calls[2],
        SurfaceCall::ClearRect {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0
        }
    );
    assert_eq!(calls.last(), Some(&SurfaceCall::Restore));
    assert_eq!(surface.save_depth(), 0);
    assert_eq!(surface.count_strokes(), 2);
    assert_eq!(
        stats,
        CommitStats {
            entries: 1,
            drawables: 1,
            style_scopes: 0
        }
    );
}

#[test]
fn test_each_commit_draws_only_its_scene() {
    let plotter = Plotter::new(small_config()).unwrap();
    let mut surface = RecordingSurface::new();

    let first = Scene::new().with(Point::new(0.0, 0.0)).with(Point::new(1.0, 1.0));
    plotter.commit(&mut surface, &first);
    assert_eq!(surface.count_fills(), 2);

    surface.clear_calls();
    let second = Scene::new().with(StyleScope::new().fill(Color::RED).with(Point::new(2.0, 2.0)));
    let stats = plotter.commit(&mut surface, &second);
    assert_eq!(surface.count_fills(), 1);
    assert_eq!(surface.fills()[0].color, Color::RED);
    assert_eq!(stats.entries, 3);
    assert_eq!(stats.style_scopes, 1);
    assert_eq!(surface.fill_style(), Color::BLACK);
}

#[test]
fn test_set_geometry_replaces_coordinate_system() {
    let mut plotter = Plotter::new(small_config()).unwrap();
    let before = *plotter.coordinate_system();

    assert_eq!(plotter.set_center(1.0, 2.0), Ok(true));
    let after = *plotter.coordinate_system();
    assert_ne!(before, after);
    assert_eq!(after.origin_x(), 40.0);
    assert_eq!(after.origin_y(), 70.0);

    assert_eq!(plotter.set_center(1.0, 2.0), Ok(false));
}

#[test]
fn test_invalid_geometry_keeps_previous_state() {
    let mut plotter = Plotter::new(small_config()).unwrap();
    let before = *plotter.coordinate_system();

    assert!(plotter.set_unit(0.0).is_err());
    assert!(plotter.set_size(f64::NAN, 10.0).is_err());
    assert_eq!(*plotter.coordinate_system(), before);
    assert_eq!(plotter.geometry().unit, 10.0);
    assert_eq!(plotter.width(), 100.0);

    assert!(plotter.set_resolution_factor(-1.0).is_err());
    assert_eq!(plotter.resolution_factor(), 2.0);
}

#[test]
fn test_pointer_events_are_reported_in_plot_space() {
    let recorder = Recorder::default();
    let mut plotter = Plotter::new(small_config())
        .unwrap()
        .with_handler(recorder.clone());

    assert_eq!(
        plotter.handle_pointer(PointerEvent::Move { x: 50.0, y: 50.0 }),
        Some(DVec2::new(0.0, 0.0))
    );
    plotter.handle_pointer(PointerEvent::Click { x: 60.0, y: 30.0 });
    assert_eq!(plotter.handle_pointer(PointerEvent::Leave), None);

    assert_eq!(
        *recorder.log.borrow(),
        vec![
            Callback::Move(0.0, 0.0),
            Callback::Click(1.0, 2.0),
            Callback::Leave(10.0)
        ]
    );
}

#[test]
fn test_pointer_events_follow_geometry_changes() {
    let recorder = Recorder::default();
    let mut plotter = Plotter::new(small_config()).unwrap();
    plotter.set_handler(recorder.clone());
    plotter.set_unit(20.0).unwrap();

    plotter.handle_pointer(PointerEvent::Click { x: 70.0, y: 50.0 });
    assert_eq!(*recorder.log.borrow(), vec![Callback::Click(1.0, 0.0)]);

    plotter.clear_handler();
    plotter.handle_pointer(PointerEvent::Leave);
    assert_eq!(recorder.log.borrow().len(), 1);
}

#[test]
fn test_render_scales_to_device_pixels() {
    let plotter = Plotter::new(small_config()).unwrap();
    let surface = plotter.render(&Scene::new().with(Axes)).unwrap();

    assert_eq!((surface.width(), surface.height()), (200, 200));
    // The x axis sits at CSS row 50, device row 100.
    assert_eq!(surface.pixel(20, 100), Some([170, 170, 170, 255]));
    assert_eq!(surface.pixel(20, 20), Some([0, 0, 0, 0]));
}

#[test]
fn test_commit_preset_field() {
    let plotter = Plotter::new(small_config()).unwrap();
    let field = FieldPreset::from_name("UNIFORM FIELD").field().unwrap();

    let mut surface = RecordingSurface::new();
    plotter.commit(&mut surface, &Scene::new().with(VectorField::normalized(field)));
    assert_eq!(surface.strokes()[0].subpath_count(), 100);
}

#[test]
fn test_hover_hit_test_with_nearest_point() {
    let points = [DVec2::new(0.0, 0.0), DVec2::new(2.0, 2.0)];
    let mut plotter = Plotter::new(small_config()).unwrap();

    let p = plotter
        .handle_pointer(PointerEvent::Move { x: 68.0, y: 31.0 })
        .unwrap();
    let (index, distance) = nearest_point(&points, p.x, p.y).unwrap();
    assert_eq!(index, 1);
    assert!(distance < plotter.coordinate_system().inv_scale(POINT_RADIUS));
}
