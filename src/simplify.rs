//! Point simplification: greedy single-pass anchor selection.
//!
//! Per stroke:
//! 1. Seed: the first point is the anchor; points within the distance
//!    error of it are merged away, the first one clear of it is tentative
//! 2. Extend: each following point tests the tentative point against the
//!    anchor and the previously scanned point
//! 3. Anchor or replace: a failed test confirms the tentative point as an
//!    anchor, a passed test replaces it with the current point
//! 4. Finalize: make sure the true endpoint is represented
//!
//! Decisions are never revisited, so the output depends on scan order.

use kurbo::Point;

use crate::config::{ErrorConfig, ErrorMode};
use crate::geom::{angle_between_segments, distance_point_to_line};

/// Simplify a stroke, returning the kept points in input order.
pub fn simplify(points: &[Point], config: &ErrorConfig) -> Vec<Point> {
    simplify_indices(points, config)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Simplify a stroke, returning the indices of the kept points.
///
/// Indices are strictly increasing and always start at 0.
pub fn simplify_indices(points: &[Point], config: &ErrorConfig) -> Vec<usize> {
    let n = points.len();
    if n < 2 {
        return (0..n).collect();
    }

    // ── Seed ─────────────────────────────────────────────
    let start = points[0];
    let seed = (1..n).find(|&i| start.distance(points[i]) >= config.max_distance_error);

    let mut kept = vec![0];
    let Some(seed) = seed else {
        finalize(points, &mut kept, config);
        return kept;
    };
    kept.push(seed);

    // ── Extend ───────────────────────────────────────────
    let mut anchor = 0;
    let mut previous = 0;
    let mut tentative = seed;

    for current in seed + 1..n {
        let fails = fails_error_test(
            points[anchor],
            points[previous],
            points[tentative],
            points[current],
            config,
        );
        if fails {
            // Tentative point becomes permanent; `current` is the new tentative.
            anchor = tentative;
            previous = tentative;
            kept.push(current);
        } else {
            previous = tentative;
            if let Some(last) = kept.last_mut() {
                *last = current;
            }
        }
        tentative = current;
    }

    finalize(points, &mut kept, config);
    kept
}

/// True if `tentative` cannot be dropped in favour of `current`.
fn fails_error_test(
    anchor: Point,
    previous: Point,
    tentative: Point,
    current: Point,
    config: &ErrorConfig,
) -> bool {
    let eps = config.epsilon;
    let angle_fails = || {
        angle_between_segments(previous, tentative, current, eps) > config.max_angle_error
            || angle_between_segments(anchor, tentative, current, eps) > config.max_angle_error
    };
    let distance_fails =
        || distance_point_to_line(anchor, current, tentative, eps) > config.max_distance_error;

    match config.mode {
        ErrorMode::Angle => angle_fails(),
        ErrorMode::Distance => distance_fails(),
        ErrorMode::Both => distance_fails() || angle_fails(),
    }
}

/// Append the final point if the kept sequence stops short of it.
///
/// A stroke whose every point fell inside the seed radius would otherwise
/// collapse to its first point; keep the endpoint as long as it is not a
/// duplicate of the start.
fn finalize(points: &[Point], kept: &mut Vec<usize>, config: &ErrorConfig) {
    let last_index = points.len() - 1;
    let Some(&last_kept) = kept.last() else {
        return;
    };
    if last_kept == last_index {
        return;
    }
    let gap = points[last_kept].distance(points[last_index]);
    if gap > config.max_distance_error || (kept.len() == 1 && gap > config.epsilon) {
        kept.push(last_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn with_mode(mode: ErrorMode) -> ErrorConfig {
        ErrorConfig {
            mode,
            ..ErrorConfig::default()
        }
    }

    #[test]
    fn collinear_middle_point_is_removed() {
        let input = pts(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
        for mode in [ErrorMode::Angle, ErrorMode::Distance, ErrorMode::Both] {
            let out = simplify(&input, &with_mode(mode));
            assert_eq!(out, pts(&[(0.0, 0.0), (10.0, 0.0)]), "mode {:?}", mode);
        }
    }

    #[test]
    fn right_angle_corner_is_kept() {
        let input = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let out = simplify(&input, &ErrorConfig::default());
        assert_eq!(out, input);
    }

    #[test]
    fn corners_of_a_dense_polyline_survive() {
        let input = pts(&[
            (0.0, 0.0),
            (5.0, 0.0),
            (10.0, 0.0),
            (10.0, 5.0),
            (10.0, 10.0),
            (5.0, 10.0),
            (0.0, 10.0),
        ]);
        let out = simplify(&input, &ErrorConfig::default());
        assert_eq!(
            out,
            pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
        );
    }

    #[test]
    fn near_duplicate_leading_points_are_merged() {
        let input = pts(&[
            (0.0, 0.0),
            (0.2, 0.1),
            (0.5, 0.0),
            (5.0, 0.0),
            (10.0, 0.0),
        ]);
        let indices = simplify_indices(&input, &ErrorConfig::default());
        assert_eq!(indices, vec![0, 4]);
    }

    #[test]
    fn short_stroke_keeps_both_ends() {
        let config = ErrorConfig::default();
        let input = pts(&[(0.0, 0.0), (0.5, 0.0), (1.0, 0.0)]);
        assert_eq!(simplify_indices(&input, &config), vec![0, 2]);

        let dot = pts(&[(3.0, 3.0), (3.0, 3.0)]);
        assert_eq!(simplify_indices(&dot, &config), vec![0]);
    }

    #[test]
    fn distance_mode_keeps_a_corner() {
        let input = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let out = simplify(&input, &with_mode(ErrorMode::Distance));
        assert_eq!(out, input);
    }

    #[test]
    fn both_mode_anchors_on_distance_alone() {
        // Turn at the middle point is about 1.15 degrees, under the angle
        // limit, but it sits about 4 units off the end-to-end chord.
        let input = pts(&[(0.0, 0.0), (400.0, 0.0), (800.0, 8.0)]);

        let by_angle = simplify_indices(&input, &with_mode(ErrorMode::Angle));
        assert_eq!(by_angle, vec![0, 2]);

        let by_distance = simplify_indices(&input, &with_mode(ErrorMode::Distance));
        assert_eq!(by_distance, vec![0, 1, 2]);

        let by_both = simplify_indices(&input, &with_mode(ErrorMode::Both));
        assert_eq!(by_both, vec![0, 1, 2]);
    }

    #[test]
    fn trivial_inputs() {
        let config = ErrorConfig::default();
        assert!(simplify(&[], &config).is_empty());
        let single = pts(&[(1.0, 2.0)]);
        assert_eq!(simplify(&single, &config), single);
    }

    #[test]
    fn distance_mode_ignores_small_jitter() {
        let input: Vec<Point> = (0..40)
            .map(|i| {
                let jitter = if i % 2 == 0 { 0.3 } else { -0.3 };
                Point::new(i as f64, jitter)
            })
            .collect();
        let by_distance = simplify_indices(&input, &with_mode(ErrorMode::Distance));
        assert_eq!(by_distance, vec![0, 39]);

        let by_both = simplify_indices(&input, &with_mode(ErrorMode::Both));
        assert!(
            by_both.len() > by_distance.len(),
            "angle test should react to jitter, got {:?}",
            by_both
        );
    }

    #[test]
    fn arc_is_reduced_but_keeps_endpoints() {
        let input: Vec<Point> = (0..=90)
            .map(|deg| {
                let t = (deg as f64).to_radians();
                Point::new(100.0 * t.cos(), 100.0 * t.sin())
            })
            .collect();
        let config = ErrorConfig::default();
        let indices = simplify_indices(&input, &config);

        assert!(
            indices.len() > 2 && indices.len() < input.len(),
            "got {} points",
            indices.len()
        );
        assert_eq!(indices[0], 0);
        assert_eq!(*indices.last().unwrap(), input.len() - 1);
        assert!(indices.windows(2).all(|w| w[0] < w[1]), "indices must increase");
    }

    #[test]
    fn output_is_a_subsequence_and_never_longer() {
        let input: Vec<Point> = (0..200)
            .map(|i| {
                let t = i as f64 * 0.1;
                Point::new(t * 10.0, 20.0 * t.sin() + (i % 3) as f64 * 0.4)
            })
            .collect();
        for mode in [ErrorMode::Angle, ErrorMode::Distance, ErrorMode::Both] {
            let config = with_mode(mode);
            let indices = simplify_indices(&input, &config);
            assert!(indices.len() <= input.len());
            assert!(indices.windows(2).all(|w| w[0] < w[1]), "mode {:?}", mode);

            let out = simplify(&input, &config);
            let first = out[0];
            let last = *out.last().unwrap();
            assert_eq!(first, input[0]);
            assert!(last.distance(input[input.len() - 1]) <= config.max_distance_error);
        }
    }

    #[test]
    fn simplifying_clean_strokes_twice_changes_nothing() {
        let config = ErrorConfig::default();
        let cases = [
            pts(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]),
            pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]),
            pts(&[
                (0.0, 0.0),
                (5.0, 0.0),
                (10.0, 0.0),
                (10.0, 5.0),
                (10.0, 10.0),
                (5.0, 10.0),
                (0.0, 10.0),
            ]),
        ];
        for input in cases {
            let once = simplify(&input, &config);
            let twice = simplify(&once, &config);
            assert_eq!(once, twice);
        }
    }
}
