use glam::DVec2;

/// Index of the point nearest to `(x, y)` and its plot-space distance.
///
/// Ties resolve to the earliest point. Returns `None` for an empty slice.
pub fn nearest_point(points: &[DVec2], x: f64, y: f64) -> Option<(usize, f64)> {
    let target = DVec2::new(x, y);
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.distance(target)))
        .fold(None, |best, (i, d)| match best {
            Some((_, best_d)) if best_d <= d => best,
            _ => Some((i, d)),
        })
}
