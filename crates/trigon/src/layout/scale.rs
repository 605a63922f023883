//! Fit a triangle into a bounded drawing surface.
//!
//! One uniform scale factor (the smaller of the X and Y ratios) keeps the
//! aspect ratio; the fitted triangle touches the margins on the tighter axis
//! and is centered on the other. A zero coordinate range on an axis is
//! treated as 1.

use nalgebra::Vector2;

use crate::error::{GeometryError, Result};
use crate::tri::Triangle;

/// Target drawing box; coordinates land in `[margin, dim − margin]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            margin: 60.0,
        }
    }
}

impl Viewport {
    /// Drawable extent `(width − 2·margin, height − 2·margin)`.
    pub fn drawable(&self) -> Result<(f64, f64)> {
        let w = self.width - 2.0 * self.margin;
        let h = self.height - 2.0 * self.margin;
        let finite = [self.width, self.height, self.margin]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.margin < 0.0 || w <= 0.0 || h <= 0.0 {
            return Err(GeometryError::InvalidViewport {
                width: self.width,
                height: self.height,
                margin: self.margin,
            });
        }
        Ok((w, h))
    }

    /// Whether `p` lies inside the drawable box, up to `eps`.
    pub fn contains(&self, p: Vector2<f64>, eps: f64) -> bool {
        p.x >= self.margin - eps
            && p.x <= self.width - self.margin + eps
            && p.y >= self.margin - eps
            && p.y <= self.height - self.margin + eps
    }
}

/// Uniform scale plus translation: `p ↦ scale·(p − origin) + offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    pub scale: f64,
    pub origin: Vector2<f64>,
    pub offset: Vector2<f64>,
}

impl Fit {
    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        (p - self.origin) * self.scale + self.offset
    }

    /// Lengths (e.g. an arc radius in input units) scale without translation.
    #[inline]
    pub fn apply_len(&self, len: f64) -> f64 {
        len * self.scale
    }
}

/// Transform that maps `tri` into `vp`.
pub fn fit_transform(tri: &Triangle, vp: &Viewport) -> Result<Fit> {
    let (avail_w, avail_h) = vp.drawable()?;
    if let Some(label) = tri.first_non_finite() {
        return Err(GeometryError::NonFinite { label });
    }
    let min = tri.pts.iter().fold(
        Vector2::new(f64::INFINITY, f64::INFINITY),
        |m, p| m.inf(p),
    );
    let max = tri.pts.iter().fold(
        Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        |m, p| m.sup(p),
    );
    let extent = max - min;
    let range_x = if extent.x == 0.0 { 1.0 } else { extent.x };
    let range_y = if extent.y == 0.0 { 1.0 } else { extent.y };
    let scale = (avail_w / range_x).min(avail_h / range_y);
    let slack = Vector2::new(avail_w - extent.x * scale, avail_h - extent.y * scale);
    let offset = Vector2::new(vp.margin, vp.margin) + slack * 0.5;
    Ok(Fit {
        scale,
        origin: min,
        offset,
    })
}

pub fn scale_to_fit(tri: &Triangle, vp: &Viewport) -> Result<Triangle> {
    let fit = fit_transform(tri, vp)?;
    Ok(tri.map_points(|p| fit.apply(p)))
}
