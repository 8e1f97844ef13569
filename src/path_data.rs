//! Textual path output.
//!
//! `M x y` starts the path, followed by `L x y` lines and `Q cx cy, ex ey`
//! quadratics, separated by single spaces. Cubic and close commands are
//! written too, so any BezPath can be serialized.

use kurbo::{BezPath, PathEl, Point};

/// Serialize a path as path data.
pub fn to_path_data(path: &BezPath) -> String {
    path.elements()
        .iter()
        .map(|el| match *el {
            PathEl::MoveTo(p) => format!("M{}", xy(p)),
            PathEl::LineTo(p) => format!("L{}", xy(p)),
            PathEl::QuadTo(c, p) => format!("Q{}, {}", xy(c), xy(p)),
            PathEl::CurveTo(a, b, p) => format!("C{}, {}, {}", xy(a), xy(b), xy(p)),
            PathEl::ClosePath => "Z".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn xy(p: Point) -> String {
    format!("{} {}", coord(p.x), coord(p.y))
}

/// Rounded control points can come out as -0.0, which prints as "-0".
fn coord(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// Straight segments through `points`: `MoveTo` the first, `LineTo` the rest.
pub fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((&first, rest)) = points.split_first() {
        path.move_to(first);
        for &p in rest {
            path.line_to(p);
        }
    }
    path
}
