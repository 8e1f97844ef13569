//! 2D vector primitives.
//!
//! Thin layer over `kurbo::Vec2` that adds the epsilon-guarded operations
//! the simplifier and fitter rely on: a unit vector that never divides by
//! zero, and axis/sweep angles in degrees.

use kurbo::{Point, Vec2};

/// Vector from `p1` to `p2`.
pub fn between(p1: Point, p2: Point) -> Vec2 {
    p2 - p1
}

/// Euclidean norm.
pub fn magnitude(v: Vec2) -> f64 {
    v.hypot()
}

/// `v` scaled to length 1, or the zero vector when `|v| <= epsilon`.
pub fn unit(v: Vec2, epsilon: f64) -> Vec2 {
    let m = magnitude(v);
    if m <= epsilon {
        return Vec2::ZERO;
    }
    v / m
}

/// Componentwise sum.
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    a + b
}

/// `a - b`.
pub fn subtract(a: Vec2, b: Vec2) -> Vec2 {
    a - b
}

/// `v` scaled by `k`.
pub fn scale(v: Vec2, k: f64) -> Vec2 {
    v * k
}

/// Dot product.
pub fn dot(a: Vec2, b: Vec2) -> f64 {
    a.dot(b)
}

/// Z component of the 3D cross product. Positive when `b` is counter-clockwise
/// from `a`.
pub fn cross(a: Vec2, b: Vec2) -> f64 {
    a.cross(b)
}

/// Signed angle from the positive x-axis, in degrees, within (-180, 180].
///
/// A vector no longer than `epsilon` has no direction and maps to 0.
pub fn angle_from_axis(v: Vec2, epsilon: f64) -> f64 {
    if magnitude(v) <= epsilon {
        return 0.0;
    }
    let degrees = v.atan2().to_degrees();
    // atan2 gives -180 for (-x, -0.0)
    if degrees <= -180.0 {
        180.0
    } else {
        degrees
    }
}

/// Counter-clockwise rotation from `v1` to `v2`, in degrees, within [0, 360).
pub fn sweep_angle(v1: Vec2, v2: Vec2, epsilon: f64) -> f64 {
    let delta = angle_from_axis(v2, epsilon) - angle_from_axis(v1, epsilon);
    let sweep = delta.rem_euclid(360.0);
    if sweep >= 360.0 {
        0.0
    } else {
        sweep
    }
}
