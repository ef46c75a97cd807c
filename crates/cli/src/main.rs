use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use figure::api::{
    report_from_pairs, EdgePolicy, FigureGenCfg, FigureGenerator, GridCfg, VertexCount,
};
use figure::figure::ClassifyCfg;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod provenance;

#[derive(Parser)]
#[command(name = "figure-cli")]
#[command(about = "Classify and generate small grid figures")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify one figure and print its label
    Classify {
        /// Points as `x,y` pairs separated by spaces, in drawing order
        #[arg(long, allow_hyphen_values = true)]
        points: String,
        /// Edges as `a-b` index pairs; defaults to the closed drawing loop
        #[arg(long)]
        edges: Option<String>,
        /// How edges are resolved once duplicate/collinear points are dropped
        #[arg(long, value_enum, default_value_t = EdgeMode::AsGiven)]
        edge_policy: EdgeMode,
        /// Print the full JSON report instead of the label
        #[arg(long)]
        json: bool,
    },
    /// Generate random figures as JSON
    Generate {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        count: u64,
        #[arg(long, default_value_t = 1)]
        min_points: usize,
        #[arg(long, default_value_t = 6)]
        max_points: usize,
        /// Write a JSON array here (plus a provenance sidecar) instead of JSON lines on stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum EdgeMode {
    AsGiven,
    Loop,
}

impl From<EdgeMode> for EdgePolicy {
    fn from(m: EdgeMode) -> Self {
        match m {
            EdgeMode::AsGiven => EdgePolicy::AsGiven,
            EdgeMode::Loop => EdgePolicy::Loop,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Classify {
            points,
            edges,
            edge_policy,
            json,
        } => classify(&points, edges.as_deref(), edge_policy, json),
        Action::Generate {
            seed,
            count,
            min_points,
            max_points,
            out,
        } => generate(seed, count, min_points, max_points, out.as_deref()),
        Action::Report => report(),
    }
}

fn classify(points: &str, edges: Option<&str>, mode: EdgeMode, json: bool) -> Result<()> {
    tracing::info!(points, edges, mode = ?mode, "classify");
    let coords = parse_points(points)?;
    let pairs = edges.map(parse_edges).transpose()?;
    let cfg = ClassifyCfg {
        edges: mode.into(),
        ..ClassifyCfg::default()
    };
    let report = report_from_pairs(&coords, pairs.as_deref(), &cfg)
        .with_context(|| format!("classifying {points:?}"))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.label);
    }
    Ok(())
}

fn generate(
    seed: u64,
    count: u64,
    min_points: usize,
    max_points: usize,
    out: Option<&Path>,
) -> Result<()> {
    tracing::info!(seed, count, min_points, max_points, out = ?out, "generate");
    let cfg = FigureGenCfg {
        grid: GridCfg {
            vertex_count: VertexCount::Uniform {
                min: min_points,
                max: max_points,
            },
            ..GridCfg::default()
        },
        ..FigureGenCfg::default()
    };
    let mut stream = FigureGenerator::new(cfg, seed)?;

    let Some(out) = out else {
        for _ in 0..count {
            let sample = stream.generate_next()?;
            println!("{}", serde_json::to_string(&sample.report)?);
        }
        return Ok(());
    };

    let mut reports = Vec::new();
    let mut replays = Vec::new();
    for _ in 0..count {
        let sample = stream.generate_next()?;
        reports.push(sample.report);
        replays.push(sample.replay);
    }
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&reports)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = provenance::Payload::new(serde_json::json!({
        "seed": seed,
        "count": count,
        "min_points": min_points,
        "max_points": max_points,
    }))
    .with_replays(&replays);
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(figures = reports.len(), sidecar = %sidecar.display(), "wrote");
    Ok(())
}

#[derive(Serialize)]
struct BuildInfo {
    version: &'static str,
    code_rev: String,
}

fn report() -> Result<()> {
    let info = BuildInfo {
        version: figure::VERSION,
        code_rev: provenance::current_git_rev(),
    };
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

/// Parse `"x,y x,y ..."` into coordinate pairs.
fn parse_points(s: &str) -> Result<Vec<(f64, f64)>> {
    let mut out = Vec::new();
    for tok in s.split_whitespace() {
        let Some((x, y)) = tok.split_once(',') else {
            bail!("point {tok:?} is not of the form x,y");
        };
        let x: f64 = x.trim().parse().with_context(|| format!("bad x in {tok:?}"))?;
        let y: f64 = y.trim().parse().with_context(|| format!("bad y in {tok:?}"))?;
        out.push((x, y));
    }
    if out.is_empty() {
        bail!("no points given");
    }
    Ok(out)
}

/// Parse `"a-b a-b ..."` into index pairs.
fn parse_edges(s: &str) -> Result<Vec<(usize, usize)>> {
    s.split_whitespace()
        .map(|tok| {
            let (a, b) = tok
                .split_once('-')
                .with_context(|| format!("edge {tok:?} is not of the form a-b"))?;
            let a: usize = a.parse().with_context(|| format!("bad index in {tok:?}"))?;
            let b: usize = b.parse().with_context(|| format!("bad index in {tok:?}"))?;
            Ok((a, b))
        })
        .collect()
}
