//! Random triangles for sweeps and benches (replay tokens).
//!
//! Model
//! - Draw three vertices uniformly in the square `[-extent, extent]²` and
//!   reject draws whose relative area is below `min_rel_area`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so draw `k` of a sweep can be reproduced on its own.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Triangle, Winding};

/// Which winding the sampler should return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindingChoice {
    /// Keep whatever was drawn.
    Any,
    CounterClockwise,
    Clockwise,
}

#[derive(Clone, Copy, Debug)]
pub struct TriangleCfg {
    /// Half-width of the sampling square.
    pub extent: f64,
    /// Minimum `|2·area| / longest²`; keeps every angle away from 0°.
    pub min_rel_area: f64,
    pub winding: WindingChoice,
    pub max_attempts: usize,
}

impl Default for TriangleCfg {
    fn default() -> Self {
        Self {
            extent: 1000.0,
            min_rel_area: 0.05,
            winding: WindingChoice::Any,
            max_attempts: 64,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a non-degenerate triangle, or `None` after `max_attempts` rejections.
pub fn draw_triangle(cfg: TriangleCfg, tok: ReplayToken) -> Option<Triangle> {
    let mut rng = tok.to_std_rng();
    let r = cfg.extent.abs().max(1e-9);
    for _ in 0..cfg.max_attempts.max(1) {
        let mut pt = || Vector2::new(rng.gen_range(-r..r), rng.gen_range(-r..r));
        let tri = Triangle::new(pt(), pt(), pt());
        let longest = tri.side_lengths().into_iter().fold(0.0_f64, f64::max);
        if longest <= 0.0 {
            continue;
        }
        let rel_area = (2.0 * tri.signed_area()).abs() / (longest * longest);
        if rel_area < cfg.min_rel_area {
            continue;
        }
        let tri = match (cfg.winding, tri.winding()) {
            (WindingChoice::CounterClockwise, Winding::Clockwise)
            | (WindingChoice::Clockwise, Winding::CounterClockwise) => tri.reversed(),
            _ => tri,
        };
        return Some(tri);
    }
    None
}
