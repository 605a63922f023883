//! Arc direction resolver for drawing interior angles.
//!
//! Angles follow the atan2 convention (math orientation, Y up). Every arc runs
//! in the positive direction from `start_angle` to `end_angle`, and its sweep
//! is the minor one between the two rays, i.e. the interior angle.
//!
//! The start/end swap is decided from the signed ray difference alone, the
//! same way for every vertex, so either winding of the input gives the
//! interior arc.

use std::f64::consts::{PI, TAU};

use nalgebra::Vector2;

use super::types::{Label, Triangle};

/// Presentation parameters for angle arcs.
#[derive(Clone, Copy, Debug)]
pub struct ArcCfg {
    pub radius: f64,
}

impl Default for ArcCfg {
    fn default() -> Self {
        Self { radius: 35.0 }
    }
}

/// Circular arc around a vertex, swept counter-clockwise from start to end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpec {
    pub center: Vector2<f64>,
    pub radius: f64,
    /// Radians, in (−π, π].
    pub start_angle: f64,
    /// `start_angle + sweep`; not wrapped, so it may exceed π.
    pub end_angle: f64,
}

impl ArcSpec {
    /// Swept angle in radians, in [0, π].
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    #[inline]
    pub fn sweep_degrees(&self) -> f64 {
        self.sweep().to_degrees()
    }

    /// Direction of the angle bisector.
    #[inline]
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + 0.5 * self.sweep()
    }

    /// Point on the arc at parameter `t` (0 = start, 1 = end).
    pub fn point_at(&self, t: f64) -> Vector2<f64> {
        let th = self.start_angle + t * self.sweep();
        self.center + Vector2::new(th.cos(), th.sin()) * self.radius
    }

    /// The same arc after the display mirror `y ↦ axis − y`.
    ///
    /// A mirror reverses orientation, so the positive sweep now starts at the
    /// mirrored end angle. Use `axis = 0` for a plain reflection.
    pub fn flipped_y(&self, axis: f64) -> ArcSpec {
        let start = normalize_angle(-self.end_angle);
        ArcSpec {
            center: Vector2::new(self.center.x, axis - self.center.y),
            radius: self.radius,
            start_angle: start,
            end_angle: start + self.sweep(),
        }
    }
}

/// Map an angle into (−π, π].
#[inline]
pub fn normalize_angle(theta: f64) -> f64 {
    let t = theta.rem_euclid(TAU);
    if t > PI {
        t - TAU
    } else {
        t
    }
}

/// Minor arc at `vertex` between the rays towards `n1` and `n2`.
pub fn resolve_arc(vertex: Vector2<f64>, n1: Vector2<f64>, n2: Vector2<f64>, radius: f64) -> ArcSpec {
    let d1 = n1 - vertex;
    let d2 = n2 - vertex;
    let th1 = d1.y.atan2(d1.x);
    let th2 = d2.y.atan2(d2.x);
    let diff = normalize_angle(th2 - th1);
    let (start, sweep) = if diff >= 0.0 {
        (th1, diff)
    } else {
        (th2, -diff)
    };
    ArcSpec {
        center: vertex,
        radius,
        start_angle: start,
        end_angle: start + sweep,
    }
}

/// Arcs for A, B, C in label order.
pub fn resolve_arcs(tri: &Triangle, cfg: &ArcCfg) -> [ArcSpec; 3] {
    Label::ALL.map(|l| {
        let (n1, n2) = tri.neighbors(l);
        resolve_arc(tri.vertex(l), n1, n2, cfg.radius)
    })
}
