//! Right / obtuse / acute classification from the displayed (2-decimal) angles.

use std::fmt;

use super::angles::AngleSet;
use super::types::{GeomCfg, Label};

/// Triangle category by its largest angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriangleKind {
    Right,
    Obtuse,
    Acute,
}

impl TriangleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TriangleKind::Right => "right",
            TriangleKind::Obtuse => "obtuse",
            TriangleKind::Acute => "acute",
        }
    }
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify by the rounded display angles, so the kind always agrees with the
/// values shown next to it: 89.99° is acute, 90.01° is obtuse, 90.00° is right.
/// Right beats obtuse.
pub fn classify(angles: &AngleSet, cfg: &GeomCfg) -> TriangleKind {
    let shown = Label::ALL.map(|l| angles.rounded(l));
    if shown.iter().any(|a| (a - 90.0).abs() < cfg.right_tol_deg) {
        TriangleKind::Right
    } else if shown.iter().any(|&a| a > 90.0) {
        TriangleKind::Obtuse
    } else {
        TriangleKind::Acute
    }
}
