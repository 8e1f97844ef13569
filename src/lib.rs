//! stroke2bez: freehand stroke → compact quadratic bezier path.
//!
//! Thins a dense pointer trace down to the points that carry its shape,
//! then fits quadratic segments through them.
//!
//! # Example
//!
//! ```
//! use stroke2bez::{kurbo::Point, stroke_to_path, to_path_data, ErrorConfig};
//!
//! let stroke = [
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//! ];
//! let path = stroke_to_path(&stroke, &ErrorConfig::default());
//! assert_eq!(to_path_data(&path), "M0 0 Q15 -5, 10 10");
//! ```

#![forbid(unsafe_code)]

mod config;

pub mod error;
pub mod fit;
pub mod geom;
pub mod path_data;
pub mod points;
pub mod simplify;
pub mod vector;

// Re-export kurbo so callers build points and read paths with the same
// version the pipeline uses.
pub use kurbo;

pub use config::{
    ErrorConfig, ErrorMode, FitStrategy, DEFAULT_EPSILON, DEFAULT_MAX_ANGLE_ERROR,
    DEFAULT_MAX_DISTANCE_ERROR,
};
pub use error::StrokeError;
pub use path_data::to_path_data;
pub use points::{parse_points, points_from_flat};

use kurbo::{BezPath, PathEl, Point};
use tracing::{debug, info};

/// The result of tracing a stroke.
#[derive(Debug, Clone)]
pub struct StrokeResult {
    /// Points kept by the simplifier, in input order.
    pub points: Vec<Point>,
    /// Fitted path: one `MoveTo`, then lines and quadratics.
    pub path: BezPath,
}

/// Simplify then fit, without validating the config.
pub fn stroke_to_path(points: &[Point], config: &ErrorConfig) -> BezPath {
    let reduced = simplify::simplify(points, config);
    fit::fit(&reduced, config)
}

/// Full pipeline: raw stroke → simplified points → fitted path.
///
/// Fails only on an invalid config; every point sequence, including an
/// empty one, yields a result.
pub fn trace_stroke(
    points: &[Point],
    config: &ErrorConfig,
) -> Result<StrokeResult, StrokeError> {
    config.validate()?;

    let reduced = simplify::simplify(points, config);
    debug!(
        input = points.len(),
        kept = reduced.len(),
        mode = ?config.mode,
        "simplified stroke"
    );

    let path = fit::fit(&reduced, config);
    let (quads, lines) = count_segments(&path);
    debug!(quads, lines, strategy = ?config.strategy, "fitted path");

    info!(
        "{} points \u{2192} {} kept \u{2192} {} quadratics + {} lines",
        points.len(),
        reduced.len(),
        quads,
        lines,
    );

    Ok(StrokeResult {
        points: reduced,
        path,
    })
}

/// Count (quadratics, lines) segments in a path.
fn count_segments(path: &BezPath) -> (usize, usize) {
    let mut quads = 0;
    let mut lines = 0;
    for el in path.elements() {
        match el {
            PathEl::QuadTo(..) => quads += 1,
            PathEl::LineTo(_) => lines += 1,
            _ => {}
        }
    }
    (quads, lines)
}
