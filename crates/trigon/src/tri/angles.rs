//! Interior angles via the law of cosines.
//!
//! For vertex V with opposite side `v` and adjacent sides `p`, `q`:
//! `angle(V) = acos((p² + q² − v²) / (2·p·q))`.
//!
//! The cosine is clamped to [-1, 1] before `acos`, but a triangle whose
//! sides cannot form a proper angle is reported as degenerate rather than
//! returning a clamped (and misleading) angle set.

use tracing::debug;

use super::types::{GeomCfg, Label, Triangle};
use crate::error::{DegenerateReason, GeometryError, Result};

/// Interior angles in degrees, indexed by label.
///
/// Values are kept unrounded; `rounded` gives the two-decimal display value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleSet {
    deg: [f64; 3],
}

impl AngleSet {
    #[inline]
    pub fn degrees(&self, l: Label) -> f64 {
        self.deg[l.index()]
    }

    /// Display value rounded to 2 decimals.
    #[inline]
    pub fn rounded(&self, l: Label) -> f64 {
        round2(self.deg[l.index()])
    }

    pub fn sum(&self) -> f64 {
        self.deg.iter().sum()
    }

    /// Sum of the rounded display values (what a user adds up on screen).
    pub fn rounded_sum(&self) -> f64 {
        Label::ALL.iter().map(|&l| self.rounded(l)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Label, f64)> + '_ {
        Label::ALL.into_iter().map(move |l| (l, self.degrees(l)))
    }

    /// Largest angle and its label; ties resolve to the earlier label.
    pub fn largest(&self) -> (Label, f64) {
        self.iter()
            .fold((Label::A, f64::NEG_INFINITY), |best, cur| {
                if cur.1 > best.1 {
                    cur
                } else {
                    best
                }
            })
    }
}

#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Side lengths (opposite A, B, C) of a proper triangle, or why there is none.
///
/// Lengths are those of `tri.unit_scaled()`: angles and the relative checks
/// below do not depend on scale, and coordinates near 1e±300 stay finite.
pub fn checked_sides(tri: &Triangle, cfg: &GeomCfg) -> Result<[f64; 3]> {
    if let Some(label) = tri.first_non_finite() {
        return Err(GeometryError::NonFinite { label });
    }
    let tri = tri.unit_scaled();
    let sides = tri.side_lengths();
    let longest = sides.iter().copied().fold(0.0_f64, f64::max);
    let shortest = sides.iter().copied().fold(f64::INFINITY, f64::min);
    if longest <= 0.0 || shortest <= cfg.eps_len * longest {
        debug!(?sides, "coincident vertices");
        return Err(GeometryError::Degenerate {
            reason: DegenerateReason::CoincidentPoints,
        });
    }
    let rel_area = (2.0 * tri.signed_area()).abs() / (longest * longest);
    if rel_area <= cfg.eps_area {
        debug!(rel_area, "collinear vertices");
        return Err(GeometryError::Degenerate {
            reason: DegenerateReason::Collinear,
        });
    }
    Ok(sides)
}

/// Interior angles of `tri` in degrees.
pub fn interior_angles(tri: &Triangle, cfg: &GeomCfg) -> Result<AngleSet> {
    let sides = checked_sides(tri, cfg)?;
    let mut deg = [0.0; 3];
    for l in Label::ALL {
        let (pl, ql) = l.others();
        let v = sides[l.index()];
        let p = sides[pl.index()];
        let q = sides[ql.index()];
        let cos = (p * p + q * q - v * v) / (2.0 * p * q);
        // NaN fails the range check as well.
        if !(-1.0 - cfg.eps_cos..=1.0 + cfg.eps_cos).contains(&cos) {
            debug!(vertex = %l, cos, "cosine out of range");
            return Err(GeometryError::Degenerate {
                reason: DegenerateReason::CosineOutOfRange,
            });
        }
        deg[l.index()] = cos.clamp(-1.0, 1.0).acos().to_degrees();
    }
    Ok(AngleSet { deg })
}
