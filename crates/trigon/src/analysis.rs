//! One-pass triangle analysis: angles, kind, winding and arcs.

use tracing::debug;

use crate::error::Result;
use crate::tri::{
    classify, interior_angles, resolve_arcs, AngleSet, ArcCfg, ArcSpec, GeomCfg, Label, Triangle,
    TriangleKind, Winding,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct AnalysisCfg {
    pub geom: GeomCfg,
    pub arc: ArcCfg,
}

/// Everything a renderer needs to draw a triangle with its angles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Analysis {
    pub triangle: Triangle,
    pub winding: Winding,
    pub angles: AngleSet,
    pub kind: TriangleKind,
    /// Indexed by `Label::index`.
    pub arcs: [ArcSpec; 3],
}

impl Analysis {
    #[inline]
    pub fn arc(&self, l: Label) -> &ArcSpec {
        &self.arcs[l.index()]
    }

    /// Display line, e.g. `right triangle, angle sum 180.00°`.
    pub fn summary(&self) -> String {
        format!(
            "{} triangle, angle sum {:.2}°",
            self.kind,
            self.angles.rounded_sum()
        )
    }
}

/// Analyze `tri`; degenerate input is an error, never a NaN angle set.
pub fn analyze(tri: &Triangle, cfg: &AnalysisCfg) -> Result<Analysis> {
    let angles = interior_angles(tri, &cfg.geom)?;
    let kind = classify(&angles, &cfg.geom);
    let arcs = resolve_arcs(tri, &cfg.arc);
    let winding = tri.winding();
    debug!(%kind, winding = winding.as_str(), sum = angles.sum(), "analyzed triangle");
    Ok(Analysis {
        triangle: *tri,
        winding,
        angles,
        kind,
        arcs,
    })
}
