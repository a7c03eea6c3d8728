//! Polar/Cartesian conversion and SVG path construction for annulus segments.
//!
//! Angles are in degrees, measured clockwise from 12 o'clock, so angle 0
//! points straight up. All functions are pure; identical inputs produce
//! byte-identical path strings.

/// A point in SVG user-space coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Convert degrees to radians.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Convert polar coordinates to Cartesian around `(cx, cy)`.
///
/// The angle is offset by -90 degrees before the standard trig convention
/// applies, so `angle_deg = 0` yields the point directly above the center.
pub fn polar_to_cartesian(radius: f64, angle_deg: f64, cx: f64, cy: f64) -> Point {
    let angle_rad = deg_to_rad(angle_deg - 90.0);
    Point {
        x: cx + radius * angle_rad.cos(),
        y: cy + radius * angle_rad.sin(),
    }
}

/// Build a closed SVG path for one annulus segment (wedge).
///
/// The path arcs clockwise (sweep = 1) along the outer radius from
/// `start_deg` to `end_deg`, cuts inward, then arcs counter-clockwise
/// (sweep = 0) back along the inner radius, and closes. The large-arc flag
/// switches on for spans over 180 degrees, so the function stays correct for
/// uses beyond equal partitioning.
pub fn wedge_path(
    cx: f64,
    cy: f64,
    r_outer: f64,
    r_inner: f64,
    start_deg: f64,
    end_deg: f64,
) -> String {
    let outer_start = polar_to_cartesian(r_outer, start_deg, cx, cy);
    let outer_end = polar_to_cartesian(r_outer, end_deg, cx, cy);
    let inner_start = polar_to_cartesian(r_inner, start_deg, cx, cy);
    let inner_end = polar_to_cartesian(r_inner, end_deg, cx, cy);

    let large_arc = if end_deg - start_deg > 180.0 { 1 } else { 0 };

    format!(
        "M {},{} A {} {} 0 {} 1 {},{} L {},{} A {} {} 0 {} 0 {},{} Z",
        outer_start.x,
        outer_start.y,
        r_outer,
        r_outer,
        large_arc,
        outer_end.x,
        outer_end.y,
        inner_end.x,
        inner_end.y,
        r_inner,
        r_inner,
        large_arc,
        inner_start.x,
        inner_start.y,
    )
}
