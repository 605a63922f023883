//! Triangle angle engine.
//!
//! Takes three labeled points and produces the interior angles, the triangle
//! kind, and the arc each angle is drawn with. Helpers fit the triangle into a
//! drawing surface and place labels; rendering itself belongs to callers.
//!
//! Layout
//! - `tri`: labeled triangle, angles, classification, arc resolution, sampler.
//! - `layout`: viewport fitting and label anchors.
//! - `input`: lenient coordinate parsing.
//! - `analysis`: the one-call pipeline used by front ends.

pub mod analysis;
pub mod error;
pub mod input;
pub mod layout;
pub mod tri;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use analysis::{analyze, Analysis, AnalysisCfg};
pub use error::{DegenerateReason, GeometryError};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::analysis::{analyze, Analysis, AnalysisCfg};
    pub use crate::error::{DegenerateReason, GeometryError};
    pub use crate::input::{parse_coord, parse_point};
    pub use crate::layout::{
        angle_label_anchor, fit_transform, scale_to_fit, vertex_label_anchor, Fit, Viewport,
    };
    pub use crate::tri::{
        classify, interior_angles, resolve_arc, resolve_arcs, AngleSet, ArcCfg, ArcSpec, GeomCfg,
        Label, Triangle, TriangleKind, Winding,
    };
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
