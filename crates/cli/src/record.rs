//! JSON record written next to a rendered figure.
//!
//! Holds what is needed to map the picture back to the input: raw and drawn
//! vertex positions, the fit transform between them, and the angles and arcs
//! that were drawn.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use trigon::layout::{Fit, Viewport};
use trigon::tri::{round2, Label, Triangle};
use trigon::Analysis;

#[derive(Debug, Serialize)]
pub struct FitRecord {
    pub scale: f64,
    pub origin: [f64; 2],
    pub offset: [f64; 2],
}

#[derive(Debug, Serialize)]
pub struct ArcRecord {
    pub start_angle: f64,
    pub end_angle: f64,
    pub radius: f64,
}

#[derive(Debug, Serialize)]
pub struct VertexRecord {
    pub label: &'static str,
    pub input: [f64; 2],
    pub drawn: [f64; 2],
    pub angle_deg: f64,
    pub arc: ArcRecord,
}

#[derive(Debug, Serialize)]
pub struct FigureRecord {
    pub viewport: [f64; 3],
    /// `None` when raw coordinates were drawn.
    pub fit: Option<FitRecord>,
    pub vertices: Vec<VertexRecord>,
    pub kind: &'static str,
    pub winding: &'static str,
    pub angle_sum: f64,
}

impl FigureRecord {
    /// `an` is the analysis of the drawn triangle; `raw` the triangle as entered.
    pub fn new(raw: &Triangle, fit: Option<&Fit>, an: &Analysis, vp: &Viewport) -> Self {
        let xy = |p: nalgebra::Vector2<f64>| [p.x, p.y];
        let vertices = Label::ALL
            .into_iter()
            .map(|l| {
                let arc = an.arc(l);
                VertexRecord {
                    label: l.as_str(),
                    input: xy(raw.vertex(l)),
                    drawn: xy(an.triangle.vertex(l)),
                    angle_deg: an.angles.rounded(l),
                    arc: ArcRecord {
                        start_angle: arc.start_angle,
                        end_angle: arc.end_angle,
                        radius: arc.radius,
                    },
                }
            })
            .collect();
        Self {
            viewport: [vp.width, vp.height, vp.margin],
            fit: fit.map(|f| FitRecord {
                scale: f.scale,
                origin: xy(f.origin),
                offset: xy(f.offset),
            }),
            vertices,
            kind: an.kind.as_str(),
            winding: an.winding.as_str(),
            angle_sum: round2(an.angles.rounded_sum()),
        }
    }
}

/// `figs/tri.svg` → `figs/tri.figure.json`.
pub fn record_path(svg: &Path) -> PathBuf {
    let mut name = svg
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "figure".into());
    name.push(".figure.json");
    svg.with_file_name(name)
}

pub fn write_record(svg: &Path, record: &FigureRecord) -> Result<PathBuf> {
    let path = record_path(svg);
    fs::write(&path, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trigon::layout::fit_transform;
    use trigon::{analyze, AnalysisCfg};

    fn fitted_record() -> (FigureRecord, Fit) {
        let raw = Triangle::from_xy((0.0, 0.0), (4.0, 0.0), (0.0, 3.0));
        let vp = Viewport::default();
        let fit = fit_transform(&raw, &vp).unwrap();
        let drawn = raw.map_points(|p| fit.apply(p));
        let an = analyze(&drawn, &AnalysisCfg::default()).unwrap();
        (FigureRecord::new(&raw, Some(&fit), &an, &vp), fit)
    }

    #[test]
    fn record_path_uses_figure_suffix() {
        assert_eq!(
            record_path(Path::new("/tmp/figs/tri.svg")),
            Path::new("/tmp/figs/tri.figure.json")
        );
    }

    #[test]
    fn drawn_points_follow_the_fit() {
        let (rec, fit) = fitted_record();
        for v in &rec.vertices {
            let p = fit.apply(nalgebra::Vector2::new(v.input[0], v.input[1]));
            assert!((p.x - v.drawn[0]).abs() < 1e-9 && (p.y - v.drawn[1]).abs() < 1e-9);
        }
        assert_eq!(rec.kind, "right");
        assert_eq!(rec.vertices[0].angle_deg, 90.0);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["fit"]["scale"], fit.scale);
        assert_eq!(json["viewport"][2], 60.0);
    }

    #[test]
    fn unscaled_record_has_null_fit() {
        let raw = Triangle::default();
        let an = analyze(&raw, &AnalysisCfg::default()).unwrap();
        let rec = FigureRecord::new(&raw, None, &an, &Viewport::default());
        assert_eq!(rec.vertices[2].input, rec.vertices[2].drawn);
        assert!(serde_json::to_value(&rec).unwrap()["fit"].is_null());
    }

    #[test]
    fn write_record_creates_json() {
        let dir = tempfile::tempdir().unwrap();
        let svg = dir.path().join("tri.svg");
        let (rec, _) = fitted_record();
        let path = write_record(&svg, &rec).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["vertices"][1]["label"], "B");
        assert_eq!(parsed["winding"], "ccw");
    }
}
