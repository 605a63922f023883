//! Lenient coordinate input.
//!
//! Coordinate fields must stay usable while being edited, so malformed
//! entries coerce to 0 instead of failing.

use nalgebra::Vector2;
use tracing::debug;

/// Parse one coordinate; anything non-numeric or non-finite becomes 0.
pub fn parse_coord(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            debug!(input = s, "coordinate coerced to 0");
            0.0
        }
    }
}

/// Parse `"x,y"`. A missing `y` is 0, like an empty field.
pub fn parse_point(s: &str) -> Vector2<f64> {
    let (x, y) = s.split_once(',').unwrap_or((s, ""));
    Vector2::new(parse_coord(x), parse_coord(y))
}
