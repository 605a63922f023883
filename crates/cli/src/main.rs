use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use nalgebra::Vector2;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use trigon::input::parse_point;
use trigon::layout::{fit_transform, Viewport};
use trigon::tri::{ArcCfg, Triangle};
use trigon::{analyze, AnalysisCfg};

mod record;
mod report;
mod svg;

use record::{write_record, FigureRecord};
use report::Report;

#[derive(Parser)]
#[command(name = "trigon")]
#[command(about = "Interior angles, classification and angle arcs of a triangle")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Vertex coordinates as "x,y"; non-numeric parts read as 0.
#[derive(Args, Clone, Debug)]
struct PointArgs {
    #[arg(long, default_value = "100,100", value_parser = parse_vertex, allow_hyphen_values = true)]
    a: Vector2<f64>,
    #[arg(long, default_value = "700,100", value_parser = parse_vertex, allow_hyphen_values = true)]
    b: Vector2<f64>,
    #[arg(long, default_value = "400,600", value_parser = parse_vertex, allow_hyphen_values = true)]
    c: Vector2<f64>,
}

impl PointArgs {
    fn triangle(&self) -> Triangle {
        Triangle::new(self.a, self.b, self.c)
    }
}

fn parse_vertex(s: &str) -> Result<Vector2<f64>, String> {
    Ok(parse_point(s))
}

#[derive(Subcommand)]
enum Action {
    /// Print angles, arcs and triangle type
    Analyze {
        #[command(flatten)]
        points: PointArgs,
        /// Arc radius in input units
        #[arg(long, default_value_t = 35.0)]
        radius: f64,
        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Render the triangle with its angle arcs to an SVG file
    Figure {
        #[command(flatten)]
        points: PointArgs,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        #[arg(long, default_value_t = 800.0)]
        height: f64,
        #[arg(long, default_value_t = 60.0)]
        margin: f64,
        /// Arc radius in drawing units
        #[arg(long, default_value_t = 35.0)]
        radius: f64,
        /// Draw raw coordinates instead of fitting them to the canvas
        #[arg(long)]
        no_scale: bool,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Analyze {
            points,
            radius,
            json,
        } => run_analyze(&points, radius, json),
        Action::Figure {
            points,
            out,
            width,
            height,
            margin,
            radius,
            no_scale,
        } => {
            let vp = Viewport {
                width,
                height,
                margin,
            };
            run_figure(&points, &out, vp, radius, no_scale)
        }
    }
}

fn analysis_cfg(radius: f64) -> AnalysisCfg {
    AnalysisCfg {
        arc: ArcCfg { radius },
        ..AnalysisCfg::default()
    }
}

fn run_analyze(points: &PointArgs, radius: f64, as_json: bool) -> Result<()> {
    let tri = points.triangle();
    tracing::info!(a = ?tri.pts[0], b = ?tri.pts[1], c = ?tri.pts[2], "analyze");
    let result = analyze(&tri, &analysis_cfg(radius));
    let report = match &result {
        Ok(an) => Report::from_analysis(an),
        Err(err) => Report::from_error(&tri, err),
    };
    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_text());
    }
    if let Err(err) = result {
        bail!(err);
    }
    Ok(())
}

fn run_figure(
    points: &PointArgs,
    out: &Path,
    vp: Viewport,
    radius: f64,
    no_scale: bool,
) -> Result<()> {
    let raw = points.triangle();
    tracing::info!(out = %out.display(), no_scale, "figure");
    let fit = if no_scale {
        None
    } else {
        Some(fit_transform(&raw, &vp)?)
    };
    let drawn = match &fit {
        Some(f) => raw.map_points(|p| f.apply(p)),
        None => raw,
    };
    let an = analyze(&drawn, &analysis_cfg(radius))?;
    let doc = svg::render(&an, &vp, &svg::Style::default())?;

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, doc).with_context(|| format!("writing {}", out.display()))?;

    let rec = write_record(out, &FigureRecord::new(&raw, fit.as_ref(), &an, &vp))?;
    tracing::info!(record = %rec.display(), "wrote figure");
    Ok(())
}
