//! Anchor points for angle values and vertex names.

use nalgebra::Vector2;

use crate::tri::{Label, Triangle};

/// Unit direction from `from` to `to`; a zero vector stays zero.
fn direction(from: Vector2<f64>, to: Vector2<f64>) -> Vector2<f64> {
    let d = to - from;
    let len = d.norm();
    if len > 0.0 {
        d / len
    } else {
        d
    }
}

/// Where the angle value of `l` goes: `distance` from the vertex toward the centroid.
pub fn angle_label_anchor(tri: &Triangle, l: Label, distance: f64) -> Vector2<f64> {
    let v = tri.vertex(l);
    v + direction(v, tri.centroid()) * distance
}

/// Where the name of `l` goes: `distance` from the vertex away from the centroid.
pub fn vertex_label_anchor(tri: &Triangle, l: Label, distance: f64) -> Vector2<f64> {
    let v = tri.vertex(l);
    v - direction(v, tri.centroid()) * distance
}
