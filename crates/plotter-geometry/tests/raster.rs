use plotter_geometry::*;

const WIDTH: u32 = 100;
const HEIGHT: u32 = 100;

fn cs() -> CoordinateSystem {
    CoordinateSystem::centered(0.0, 0.0, WIDTH as f64, HEIGHT as f64, 10.0).unwrap()
}

fn render(scene: &Scene) -> RasterSurface {
    let mut surface = RasterSurface::new(WIDTH, HEIGHT).unwrap();
    scene
        .register()
        .execute(&mut surface, &cs(), WIDTH as f64, HEIGHT as f64);
    surface
}

#[test]
fn test_axes_pixels() {
    let surface = render(&Scene::new().with(Axes));
    let [r, g, b, a] = surface.pixel(10, 50).unwrap();
    assert_eq!((r, g, b, a), (170, 170, 170, 255));
    assert_eq!(surface.pixel(50, 10), Some([170, 170, 170, 255]));
    assert_eq!(surface.pixel(10, 10), Some([0, 0, 0, 0]));
}

#[test]
fn test_point_pixels() {
    let surface = render(&Scene::new().with(Point::new(2.0, 2.0).with_color(Color::RED)));
    // (2, 2) maps to screen (70, 30).
    assert_eq!(surface.pixel(70, 30), Some([255, 0, 0, 255]));
    assert_eq!(surface.pixel(70, 40), Some([0, 0, 0, 0]));
}

#[test]
fn test_style_scope_colors_curve() {
    let scene = Scene::new().with(
        StyleScope::new()
            .stroke(Color::BLUE)
            .line_width(3.0)
            .with(FunctionCurve::new(|_| 2.0)),
    );
    let surface = render(&scene);
    // y = 2 is screen row 30.
    assert_eq!(surface.pixel(20, 30), Some([0, 0, 255, 255]));
    assert_eq!(surface.pixel(20, 60), Some([0, 0, 0, 0]));
}

#[test]
fn test_plot_space_fill_rect() {
    let mut surface = RasterSurface::new(WIDTH, HEIGHT).unwrap();
    surface.set_fill_style(Color::GREEN);
    cs().fill_rect(&mut surface, 0.0, 0.0, 1.0, 1.0);
    // Unit square above and right of the origin: screen x 50..60, y 40..50.
    assert_eq!(surface.pixel(55, 45), Some([0, 255, 0, 255]));
    assert_eq!(surface.pixel(55, 55), Some([0, 0, 0, 0]));
}

#[test]
fn test_bytes_layout() {
    let surface = render(&Scene::new().with(Axes));
    let bytes = surface.as_bytes();
    assert_eq!(bytes.len(), (WIDTH * HEIGHT * 4) as usize);
    let idx = (50 * WIDTH as usize + 10) * 4;
    assert_eq!(&bytes[idx..idx + 4], &[170, 170, 170, 255]);
}

#[cfg(feature = "image")]
#[test]
fn test_save_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("axes.png");

    let surface = render(&Scene::new().with(Axes));
    surface.save_png(&path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (WIDTH, HEIGHT));
    assert_eq!(decoded.get_pixel(10, 50).0, [170, 170, 170, 255]);
}
