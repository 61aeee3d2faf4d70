//! Ellipses and Arcs
//!
//! Curves are approximated by polygons. The number of vertices follows the
//!   radius so the distance between the curve and each chord stays near
//!   1/8 of a pixel.

use crate::geometry::Point;

use std::f64::consts::PI;

/// Minimum number of vertices of a full ellipse
pub const ELLIPSE_MIN_STEPS : usize = 8;

/// Angle between consecutive vertices for radii `rx`, `ry`
fn step_angle(rx: f64, ry: f64) -> f64 {
    let ra = (rx.abs() + ry.abs()) / 2.0;
    (ra / (ra + 0.125)).acos() * 2.0
}

/// Number of vertices used for a full ellipse with radii `rx`, `ry`
///
///     assert_eq!(mapraster::num_steps(0.0, 0.0), 8);
///     assert!(mapraster::num_steps(50.0, 50.0) > mapraster::num_steps(5.0, 5.0));
///
pub fn num_steps(rx: f64, ry: f64) -> usize {
    let n = (2.0 * PI / step_angle(rx, ry)).round();
    if n.is_finite() && n > ELLIPSE_MIN_STEPS as f64 {
        n as usize
    } else {
        ELLIPSE_MIN_STEPS
    }
}

/// Closed polygon approximating an ellipse centered at (`cx`,`cy`)
///
/// The axes are rotated by `angle` radians (x towards y). The first point
///   is not repeated at the end.
pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64, angle: f64) -> Vec<Point> {
    let n = num_steps(rx, ry);
    let (sa, ca) = angle.sin_cos();
    (0 .. n).map(|k| {
        let a = k as f64 / n as f64 * 2.0 * PI;
        let x = a.cos() * rx;
        let y = a.sin() * ry;
        Point::new(cx + x * ca - y * sa, cy + x * sa + y * ca)
    }).collect()
}

/// Open polyline along an ellipse from angle `start` to `end`, radians
///
/// Angles increase from the x axis towards the y axis; both end points are
///   included. If `end` is smaller than `start` the arc runs backwards.
pub fn arc(cx: f64, cy: f64, rx: f64, ry: f64, start: f64, end: f64) -> Vec<Point> {
    let sweep = end - start;
    let n = (sweep.abs() / step_angle(rx, ry)).ceil();
    let n = if n.is_finite() && n >= 1.0 { n as usize } else { 1 };
    (0 ..= n).map(|k| {
        let a = start + sweep * k as f64 / n as f64;
        Point::new(cx + a.cos() * rx, cy + a.sin() * ry)
    }).collect()
}
