//! SVG rendering of an analyzed triangle.
//!
//! Geometry arrives in math orientation (Y up); the only Y flip happens here,
//! at output time: `y_svg = height − y`.

use std::fmt::{self, Write};

use nalgebra::Vector2;
use trigon::layout::{angle_label_anchor, vertex_label_anchor, Viewport};
use trigon::tri::Label;
use trigon::Analysis;

const OUTLINE: &str = "#667eea";
const ARC_COLORS: [&str; 3] = ["#ff6b6b", "#4ecdc4", "#45b7d1"];

/// Distances (drawing units) used for markers and labels.
#[derive(Clone, Copy, Debug)]
pub struct Style {
    pub vertex_radius: f64,
    pub vertex_label_distance: f64,
    pub angle_label_distance: f64,
    pub angle_badge_radius: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            vertex_radius: 10.0,
            vertex_label_distance: 28.0,
            angle_label_distance: 60.0,
            angle_badge_radius: 25.0,
        }
    }
}

/// Render `an` (already in drawing coordinates) onto a `vp`-sized canvas.
pub fn render(an: &Analysis, vp: &Viewport, style: &Style) -> Result<String, fmt::Error> {
    let h = vp.height;
    let flip = |p: Vector2<f64>| Vector2::new(p.x, h - p.y);
    let tri = &an.triangle;
    let mut out = String::new();

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = vp.width,
    )?;
    writeln!(out, r#"  <rect width="100%" height="100%" fill="white"/>"#)?;

    let outline: Vec<String> = tri
        .pts
        .iter()
        .map(|&p| {
            let q = flip(p);
            format!("{:.3},{:.3}", q.x, q.y)
        })
        .collect();
    writeln!(
        out,
        r#"  <polygon points="{}" fill="rgba(102,126,234,0.15)" stroke="{OUTLINE}" stroke-width="4"/>"#,
        outline.join(" ")
    )?;

    for l in Label::ALL {
        let arc = an.arc(l).flipped_y(h);
        let s = arc.point_at(0.0);
        let e = arc.point_at(1.0);
        writeln!(
            out,
            r#"  <path class="arc" data-vertex="{l}" d="M {:.3} {:.3} A {r:.3} {r:.3} 0 0 1 {:.3} {:.3}" fill="none" stroke="{}" stroke-width="3"/>"#,
            s.x,
            s.y,
            e.x,
            e.y,
            ARC_COLORS[l.index()],
            r = arc.radius,
        )?;
    }

    for l in Label::ALL {
        let c = flip(angle_label_anchor(tri, l, style.angle_label_distance));
        writeln!(
            out,
            r##"  <circle cx="{:.3}" cy="{:.3}" r="{}" fill="rgba(255,255,255,0.95)" stroke="#ddd" stroke-width="2"/>"##,
            c.x, c.y, style.angle_badge_radius
        )?;
        writeln!(
            out,
            r##"  <text class="angle" x="{:.3}" y="{:.3}" text-anchor="middle" font-family="Arial" font-weight="bold" font-size="16" fill="#333">{:.2}°</text>"##,
            c.x,
            c.y + 6.0,
            an.angles.rounded(l)
        )?;
    }

    for l in Label::ALL {
        let v = flip(tri.vertex(l));
        writeln!(
            out,
            r#"  <circle cx="{:.3}" cy="{:.3}" r="{}" fill="{OUTLINE}" stroke="white" stroke-width="3"/>"#,
            v.x, v.y, style.vertex_radius
        )?;
        let t = flip(vertex_label_anchor(tri, l, style.vertex_label_distance));
        writeln!(
            out,
            r##"  <text class="vertex" x="{:.3}" y="{:.3}" text-anchor="middle" dominant-baseline="middle" font-family="Arial" font-weight="bold" font-size="20" fill="#333">{l}</text>"##,
            t.x, t.y
        )?;
    }

    writeln!(
        out,
        r##"  <text class="summary" x="{:.3}" y="{:.3}" text-anchor="middle" font-family="Arial" font-size="14" fill="#333">{}</text>"##,
        vp.width / 2.0,
        vp.height - 12.0,
        an.summary()
    )?;
    writeln!(out, "</svg>")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trigon::layout::scale_to_fit;
    use trigon::tri::Triangle;
    use trigon::{analyze, AnalysisCfg};

    fn default_figure() -> String {
        let vp = Viewport::default();
        let tri = scale_to_fit(&Triangle::default(), &vp).unwrap();
        let an = analyze(&tri, &AnalysisCfg::default()).unwrap();
        render(&an, &vp, &Style::default()).unwrap()
    }

    #[test]
    fn figure_has_outline_arcs_and_labels() {
        let svg = default_figure();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polygon").count(), 1);
        assert_eq!(svg.matches(r#"class="arc""#).count(), 3);
        assert_eq!(svg.matches(r#"class="angle""#).count(), 3);
        assert_eq!(svg.matches(r#"class="vertex""#).count(), 3);
        assert!(svg.contains("acute triangle"));
    }

    #[test]
    fn arcs_use_minor_positive_sweep() {
        let svg = default_figure();
        for line in svg.lines().filter(|l| l.contains(r#"class="arc""#)) {
            assert!(line.contains(" 0 0 1 "), "{line}");
        }
    }

    #[test]
    fn y_axis_is_flipped_once() {
        let vp = Viewport::default();
        let tri = Triangle::from_xy((100.0, 100.0), (700.0, 100.0), (400.0, 600.0));
        let an = analyze(&tri, &AnalysisCfg::default()).unwrap();
        let svg = render(&an, &vp, &Style::default()).unwrap();
        // Apex C(400, 600) is drawn near the top of the canvas.
        assert!(svg.contains(r#"cx="400.000" cy="200.000""#));
    }
}
