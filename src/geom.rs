//! Shared geometry utilities.

use kurbo::{Point, Vec2};

use crate::vector::{between, cross, dot, magnitude};

/// Perpendicular distance from `p` to the line through `a` and `b`.
///
/// `|AB × AP| / |AB|`. When `a` and `b` are within `epsilon` of each other
/// the line degenerates to a point and the distance from `a` is returned.
pub fn distance_point_to_line(a: Point, b: Point, p: Point, epsilon: f64) -> f64 {
    let ab = between(a, b);
    let ap = between(a, p);
    let len = magnitude(ab);
    if len <= epsilon {
        return magnitude(ap);
    }
    cross(ab, ap).abs() / len
}

/// Turn angle at `p2`: angle between `p1→p2` and `p2→p3`, in degrees [0, 180].
///
/// Zero-length segments count as no turn.
pub fn angle_between_segments(p1: Point, p2: Point, p3: Point, epsilon: f64) -> f64 {
    angle_between_vectors(between(p1, p2), between(p2, p3), epsilon)
}

/// Angle between two independent segments `p1→p2` and `p3→p4`, in degrees [0, 180].
pub fn angle_between_lines(p1: Point, p2: Point, p3: Point, p4: Point, epsilon: f64) -> f64 {
    angle_between_vectors(between(p1, p2), between(p3, p4), epsilon)
}

fn angle_between_vectors(u: Vec2, v: Vec2, epsilon: f64) -> f64 {
    let mu = magnitude(u);
    let mv = magnitude(v);
    if mu <= epsilon || mv <= epsilon {
        return 0.0;
    }
    // Rounding can push the cosine just past ±1.
    let cos = (dot(u, v) / (mu * mv)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}
