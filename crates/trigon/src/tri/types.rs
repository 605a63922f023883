//! Labeled triangle types and tolerances.
//!
//! - `Label`: vertex names `A`, `B`, `C` (array index order).
//! - `Triangle`: three labeled points in the plane, math orientation (Y up).
//! - `GeomCfg`: centralizes the degeneracy and classification tolerances.
//!
//! Code cross-refs: `angles::interior_angles`, `arc::resolve_arcs`

use std::fmt;
use std::ops::Index;

use nalgebra::Vector2;

use crate::parallelogram_area;

/// Vertex label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    A,
    B,
    C,
}

impl Label {
    pub const ALL: [Label; 3] = [Label::A, Label::B, Label::C];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The two other labels in cyclic order: A → (B, C), B → (C, A), C → (A, B).
    #[inline]
    pub fn others(self) -> (Label, Label) {
        match self {
            Label::A => (Label::B, Label::C),
            Label::B => (Label::C, Label::A),
            Label::C => (Label::A, Label::B),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::A => "A",
            Label::B => "B",
            Label::C => "C",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tolerances for degeneracy detection and classification.
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Shortest side below `eps_len * longest` counts as coincident points.
    pub eps_len: f64,
    /// `|2·area| / longest²` below this counts as collinear.
    pub eps_area: f64,
    /// Slack a raw cosine may exceed [-1, 1] by before clamping is refused.
    pub eps_cos: f64,
    /// Distance from 90° (degrees) still classified as a right angle.
    pub right_tol_deg: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_len: 1e-12,
            eps_area: 1e-10,
            eps_cos: 1e-9,
            right_tol_deg: 0.01,
        }
    }
}

/// Rotational order of the vertices A → B → C.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    Degenerate,
}

impl Winding {
    pub fn as_str(self) -> &'static str {
        match self {
            Winding::CounterClockwise => "ccw",
            Winding::Clockwise => "cw",
            Winding::Degenerate => "degenerate",
        }
    }
}

/// Three labeled points. No invariant is enforced on construction; degeneracy
/// is reported by the operations that need a proper triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub pts: [Vector2<f64>; 3],
}

/// `A(100,100) B(700,100) C(400,600)`.
pub const DEFAULT_POINTS: [(f64, f64); 3] = [(100.0, 100.0), (700.0, 100.0), (400.0, 600.0)];

impl Default for Triangle {
    fn default() -> Self {
        let [a, b, c] = DEFAULT_POINTS;
        Self::from_xy(a, b, c)
    }
}

impl Triangle {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Self {
        Self { pts: [a, b, c] }
    }

    pub fn from_xy(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Self {
        Self::new(
            Vector2::new(a.0, a.1),
            Vector2::new(b.0, b.1),
            Vector2::new(c.0, c.1),
        )
    }

    #[inline]
    pub fn vertex(&self, l: Label) -> Vector2<f64> {
        self.pts[l.index()]
    }

    /// Positions of the two other vertices, in `Label::others` order.
    #[inline]
    pub fn neighbors(&self, l: Label) -> (Vector2<f64>, Vector2<f64>) {
        let (p, q) = l.others();
        (self.vertex(p), self.vertex(q))
    }

    /// Length of the side opposite `l` (distance between the other two vertices).
    #[inline]
    pub fn side_opposite(&self, l: Label) -> f64 {
        let (p, q) = self.neighbors(l);
        (q - p).norm()
    }

    pub fn side_lengths(&self) -> [f64; 3] {
        Label::ALL.map(|l| self.side_opposite(l))
    }

    /// Signed area; positive for counter-clockwise A → B → C.
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.pts;
        0.5 * parallelogram_area(b - a, c - a)
    }

    /// Same shape divided by its largest |coordinate|, so side lengths and the
    /// area neither overflow nor underflow. Returns `self` when all points sit
    /// at the origin or a coordinate is non-finite.
    pub fn unit_scaled(&self) -> Self {
        let m = self
            .pts
            .iter()
            .map(|p| p.amax())
            .fold(0.0_f64, f64::max);
        if m > 0.0 && m.is_finite() {
            self.map_points(|p| p / m)
        } else {
            *self
        }
    }

    pub fn winding(&self) -> Winding {
        let s = self.unit_scaled().signed_area();
        if s > 0.0 {
            Winding::CounterClockwise
        } else if s < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }

    pub fn centroid(&self) -> Vector2<f64> {
        let [a, b, c] = self.pts;
        (a + b + c) / 3.0
    }

    /// First label with a NaN/inf coordinate, if any.
    pub fn first_non_finite(&self) -> Option<Label> {
        Label::ALL
            .into_iter()
            .find(|&l| !self.vertex(l).iter().all(|v| v.is_finite()))
    }

    /// Relabel: new label `i` receives the point previously labeled `perm[i]`.
    pub fn relabeled(&self, perm: [Label; 3]) -> Self {
        Self {
            pts: perm.map(|l| self.vertex(l)),
        }
    }

    /// Same points with B and C swapped (opposite winding).
    pub fn reversed(&self) -> Self {
        self.relabeled([Label::A, Label::C, Label::B])
    }

    pub fn map_points<F: Fn(Vector2<f64>) -> Vector2<f64>>(&self, f: F) -> Self {
        Self {
            pts: self.pts.map(f),
        }
    }
}

impl Index<Label> for Triangle {
    type Output = Vector2<f64>;
    #[inline]
    fn index(&self, l: Label) -> &Self::Output {
        &self.pts[l.index()]
    }
}
