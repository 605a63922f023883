//! Triangle geometry: angles, classification and arc resolution.
//!
//! Purpose
//! - Compute the interior angles of three labeled points, classify the
//!   triangle, and resolve the arc each angle is drawn with.
//! - Everything is a pure function of the input triangle; callers recompute
//!   on every input change.
//!
//! Conventions
//! - Math orientation (Y up, atan2 angles). Display adapters flip Y once at
//!   output time (`ArcSpec::flipped_y`).
//! - Tolerances live in `GeomCfg`.

mod angles;
mod arc;
mod classify;
pub mod rand;
mod types;

pub use angles::{checked_sides, interior_angles, round2, AngleSet};
pub use arc::{normalize_angle, resolve_arc, resolve_arcs, ArcCfg, ArcSpec};
pub use classify::{classify, TriangleKind};
pub use types::{GeomCfg, Label, Triangle, Winding, DEFAULT_POINTS};
