//! Curve fitting: ordered points → quadratic BezPaths.
//!
//! Two strategies share one control point construction:
//! - Sequential: one quadratic per non-overlapping window of three points
//! - Adaptive: grow a span while the stroke keeps turning gently, then fit
//!   one quadratic through the span's convex point
//!
//! Neither strategy fails. Too few points degrade to `MoveTo` or a single
//! `LineTo`, zero-length segments to the nearer endpoint.

use kurbo::{BezPath, Point};

use crate::config::{ErrorConfig, FitStrategy};
use crate::geom::{angle_between_lines, angle_between_segments, distance_point_to_line};
use crate::vector::{add, between, magnitude, scale, unit};

/// Leading points this close to the first point are dropped by the
/// adaptive fitter before scanning.
pub const LEADING_DUPLICATE_TOLERANCE: f64 = 0.1;

/// Fit a path using the strategy selected in `config`.
pub fn fit(points: &[Point], config: &ErrorConfig) -> BezPath {
    match config.strategy {
        FitStrategy::Sequential => fit_sequential(points, config),
        FitStrategy::Adaptive => fit_adaptive(points, config),
    }
}

/// Control point of the quadratic from `p1` to `p3` bending through `p2`.
///
/// `Pc = P2 + ½·√(|P2−P1|·|P2−P3|)·(unit(P2−P1) + unit(P2−P3))`, rounded to
/// whole units. For a symmetric bend the quadratic passes exactly through
/// `p2` at t = 0.5; for collinear input the control point is `p2` itself.
pub fn control_point(p1: Point, p2: Point, p3: Point, epsilon: f64) -> Point {
    let v12 = between(p1, p2);
    let v32 = between(p3, p2);
    let m12 = magnitude(v12);
    let m32 = magnitude(v32);

    let pc = if m12 <= epsilon {
        p1
    } else if m32 <= epsilon {
        p3
    } else {
        let ratio = 0.5 * (m12 * m32).sqrt();
        p2 + scale(add(unit(v12, epsilon), unit(v32, epsilon)), ratio)
    };
    pc.round()
}

// ── Sequential ───────────────────────────────────────────

/// One quadratic per window (0,1,2), (2,3,4), …
///
/// Each point is used once as a window end. A point left over after the
/// last window is joined with a `LineTo`.
pub fn fit_sequential(points: &[Point], config: &ErrorConfig) -> BezPath {
    let mut path = BezPath::new();
    let Some(&first) = points.first() else {
        return path;
    };
    path.move_to(first);

    let mut end = 0;
    for start in (0..points.len().saturating_sub(2)).step_by(2) {
        let c = control_point(
            points[start],
            points[start + 1],
            points[start + 2],
            config.epsilon,
        );
        path.quad_to(c, points[start + 2]);
        end = start + 2;
    }
    if let Some(&dangling) = points.get(end + 1) {
        path.line_to(dangling);
    }
    path
}

// ── Adaptive ─────────────────────────────────────────────

/// Angle-filtered fitting.
///
/// Keeps an anchor and extends the span to point `i` while both the local
/// turn at `i` and the turn relative to the anchor's first segment stay
/// under `max_angle_error`. A span is closed at the first point that breaks
/// either limit, and always at the final point. Worst case O(n²) from the
/// convex point scans.
pub fn fit_adaptive(points: &[Point], config: &ErrorConfig) -> BezPath {
    let points = drop_leading_duplicates(points);
    let mut path = BezPath::new();
    let Some(&first) = points.first() else {
        return path;
    };
    path.move_to(first);

    let n = points.len();
    let mut stop = 0;
    for i in 1..n {
        if i + 1 < n && span_continues(&points, stop, i, config) {
            continue;
        }
        push_span(&mut path, &points[stop..=i], config.epsilon);
        stop = i;
    }
    path
}

/// Index of the interior point farthest from the chord joining the span's
/// ends. The first maximum wins; `None` if the span has no interior.
pub fn convex_point(span: &[Point], epsilon: f64) -> Option<usize> {
    if span.len() < 3 {
        return None;
    }
    let first = span[0];
    let last = span[span.len() - 1];

    let mut best = 1;
    let mut best_dist = 0.0;
    for (i, &p) in span.iter().enumerate().take(span.len() - 1).skip(1) {
        let d = distance_point_to_line(first, last, p, epsilon);
        if d > best_dist {
            best_dist = d;
            best = i;
        }
    }
    Some(best)
}

fn span_continues(points: &[Point], stop: usize, i: usize, config: &ErrorConfig) -> bool {
    let eps = config.epsilon;
    let anchor_turn = angle_between_lines(
        points[stop],
        points[stop + 1],
        points[i],
        points[i + 1],
        eps,
    );
    let local_turn = angle_between_segments(points[i - 1], points[i], points[i + 1], eps);
    anchor_turn < config.max_angle_error && local_turn < config.max_angle_error
}

fn push_span(path: &mut BezPath, span: &[Point], epsilon: f64) {
    let start = span[0];
    let end = span[span.len() - 1];
    match convex_point(span, epsilon) {
        Some(k) => path.quad_to(control_point(start, span[k], end, epsilon), end),
        None => path.line_to(end),
    }
}

fn drop_leading_duplicates(points: &[Point]) -> Vec<Point> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };
    let skip = rest
        .iter()
        .take_while(|p| first.distance(**p) <= LEADING_DUPLICATE_TOLERANCE)
        .count();

    let mut out = Vec::with_capacity(points.len() - skip);
    out.push(first);
    out.extend_from_slice(&rest[skip..]);
    out
}
