//! Input adapters: coordinate buffers → points.

use kurbo::Point;

use crate::error::StrokeError;

/// Pair up a flat `[x0, y0, x1, y1, …]` buffer.
///
/// An odd-length buffer is rejected rather than truncated, since dropping the
/// stray value would shift every following pair.
pub fn points_from_flat(coords: &[f64]) -> Result<Vec<Point>, StrokeError> {
    if coords.len() % 2 != 0 {
        return Err(StrokeError::InvalidInput(format!(
            "odd number of coordinates ({}); expected x, y pairs",
            coords.len()
        )));
    }
    if let Some(i) = coords.iter().position(|c| !c.is_finite()) {
        return Err(StrokeError::InvalidInput(format!(
            "coordinate {} of point {} is not finite: {}",
            if i % 2 == 0 { "x" } else { "y" },
            i / 2,
            coords[i]
        )));
    }
    Ok(coords
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect())
}

/// Parse numbers separated by whitespace and/or commas into points.
///
/// Accepts `1 2 3 4`, `1,2 3,4` and one `x, y` pair per line alike.
pub fn parse_points(text: &str) -> Result<Vec<Point>, StrokeError> {
    let coords = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            tok.parse::<f64>()
                .map_err(|e| StrokeError::InvalidInput(format!("bad number '{}': {}", tok, e)))
        })
        .collect::<Result<Vec<f64>, StrokeError>>()?;
    points_from_flat(&coords)
}
