use crate::geometry::Point;

/// Returns `value` wrapped into `[0, range)`, as opposed to `%`'s behavior of
/// returning a result with the same sign as `value`.
pub fn positive_modulo(value: f64, range: f64) -> f64 {
    let result = value % range;

    if result < 0.0 { result + range } else { result }
}

/// Shortest distance between two points on a circle of circumference 1, both
/// given as progress values in `[0, 1)`.
pub fn progress_distance(p1: f64, p2: f64) -> f64 {
    let value = (p1 - p2).abs();

    value.min(1.0 - value)
}

/// Whether `progress` lies in the cyclic interval `[from, to]` on a circle of
/// circumference 1, accounting for `to < from` (the interval wraps past 0).
pub fn progress_in_range(progress: f64, progress_from: f64, progress_to: f64) -> bool {
    if progress_to >= progress_from {
        (progress_from..=progress_to).contains(&progress)
    } else {
        progress >= progress_from || progress <= progress_to
    }
}

/// Clamps `value` into `[min, max]`.
///
/// # Panics
///
/// Panics if `min > max`.
pub fn coerce_in(value: f64, min: f64, max: f64) -> f64 {
    assert!(min <= max, "coerce_in: invalid range [{min}, {max}]");

    value.clamp(min, max)
}

/// Converts polar coordinates (`radius`, `angle` in radians, measured from the
/// positive x axis) into a cartesian [`Point`] relative to the origin.
pub fn radial_to_cartesian(radius: f64, angle: f64) -> Point {
    Point::new(angle.cos(), angle.sin()) * radius
}
