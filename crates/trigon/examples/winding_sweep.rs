//! Print the angles and arc sweeps of a few sampled triangles in both windings.
//!
//! Usage:
//!   cargo run -p trigon --example winding_sweep -- [count]

use trigon::tri::rand::{draw_triangle, ReplayToken, TriangleCfg, WindingChoice};
use trigon::tri::Label;
use trigon::{analyze, AnalysisCfg};

fn main() {
    let count: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(4);
    let cfg = AnalysisCfg::default();
    for winding in [WindingChoice::CounterClockwise, WindingChoice::Clockwise] {
        let sampler = TriangleCfg {
            winding,
            ..TriangleCfg::default()
        };
        for index in 0..count {
            let Some(tri) = draw_triangle(sampler, ReplayToken { seed: 2025, index }) else {
                eprintln!("sample {index}: rejected");
                continue;
            };
            match analyze(&tri, &cfg) {
                Ok(an) => {
                    print!("{:?} sample {index}:", winding);
                    for l in Label::ALL {
                        print!(
                            " {l}={:.2}° (arc {:.2}°)",
                            an.angles.degrees(l),
                            an.arc(l).sweep_degrees()
                        );
                    }
                    println!(" -> {}", an.summary());
                }
                Err(e) => println!("{:?} sample {index}: {e}", winding),
            }
        }
    }
}
