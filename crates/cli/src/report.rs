//! Analysis report printed by `trigon analyze` (text or JSON).

use serde::Serialize;
use trigon::tri::{Label, Triangle};
use trigon::{Analysis, GeometryError};

#[derive(Debug, Serialize)]
pub struct ArcReport {
    pub start_angle: f64,
    pub end_angle: f64,
    pub radius: f64,
    pub sweep_deg: f64,
}

#[derive(Debug, Serialize)]
pub struct VertexReport {
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle_deg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc: Option<ArcReport>,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub status: &'static str,
    pub version: &'static str,
    pub vertices: Vec<VertexReport>,
    pub winding: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle_sum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    pub fn from_analysis(an: &Analysis) -> Self {
        let vertices = Label::ALL
            .into_iter()
            .map(|l| {
                let p = an.triangle.vertex(l);
                let arc = an.arc(l);
                VertexReport {
                    label: l.as_str(),
                    x: p.x,
                    y: p.y,
                    angle_deg: Some(an.angles.rounded(l)),
                    arc: Some(ArcReport {
                        start_angle: arc.start_angle,
                        end_angle: arc.end_angle,
                        radius: arc.radius,
                        sweep_deg: trigon::tri::round2(arc.sweep_degrees()),
                    }),
                }
            })
            .collect();
        Self {
            status: "ok",
            version: trigon::VERSION,
            vertices,
            winding: an.winding.as_str(),
            kind: Some(an.kind.as_str()),
            angle_sum: Some(trigon::tri::round2(an.angles.rounded_sum())),
            error: None,
        }
    }

    pub fn from_error(tri: &Triangle, err: &GeometryError) -> Self {
        let vertices = Label::ALL
            .into_iter()
            .map(|l| {
                let p = tri.vertex(l);
                VertexReport {
                    label: l.as_str(),
                    x: p.x,
                    y: p.y,
                    angle_deg: None,
                    arc: None,
                }
            })
            .collect();
        Self {
            status: if err.is_degenerate() {
                "degenerate"
            } else {
                "invalid"
            },
            version: trigon::VERSION,
            vertices,
            winding: tri.winding().as_str(),
            kind: None,
            angle_sum: None,
            error: Some(err.to_string()),
        }
    }

    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.vertices.len() + 1);
        for v in &self.vertices {
            let mut line = format!("{}({}, {})", v.label, v.x, v.y);
            if let Some(a) = v.angle_deg {
                line.push_str(&format!("  angle {a:.2}°"));
            }
            if let Some(arc) = &v.arc {
                line.push_str(&format!(
                    "  arc {:.4} → {:.4} rad (r={})",
                    arc.start_angle, arc.end_angle, arc.radius
                ));
            }
            lines.push(line);
        }
        match (self.kind, self.angle_sum, &self.error) {
            (Some(kind), Some(sum), _) => {
                lines.push(format!("type: {kind} ({}), angle sum {sum:.2}°", self.winding))
            }
            (_, _, Some(err)) => lines.push(format!("{}: {err}", self.status)),
            _ => {}
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trigon::{analyze, AnalysisCfg};

    #[test]
    fn ok_report_carries_angles_and_kind() {
        let tri = Triangle::from_xy((0.0, 0.0), (4.0, 0.0), (0.0, 3.0));
        let an = analyze(&tri, &AnalysisCfg::default()).unwrap();
        let report = Report::from_analysis(&an);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["kind"], "right");
        assert_eq!(json["winding"], "ccw");
        assert_eq!(json["vertices"][1]["angle_deg"], 36.87);
        assert_eq!(json["vertices"][0]["arc"]["sweep_deg"], 90.0);
        assert!(json.get("error").is_none());
        assert!(report.to_text().contains("type: right"));
    }

    #[test]
    fn degenerate_report_has_no_angles() {
        let tri = Triangle::from_xy((0.0, 0.0), (1.0, 1.0), (2.0, 2.0));
        let err = analyze(&tri, &AnalysisCfg::default()).unwrap_err();
        let report = Report::from_error(&tri, &err);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "degenerate");
        assert!(json["vertices"][0].get("angle_deg").is_none());
        assert!(json.get("kind").is_none());
        assert!(report.to_text().contains("collinear"));
    }
}
