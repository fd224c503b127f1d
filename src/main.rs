use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use encircle::dataset;
use encircle::encircle2d::Circle2D;
use encircle::strategy::{PairDiameters, Strategy, TripleCircumcircles};

#[derive(Parser, Debug)]
#[command(about = "Brute-force smallest enclosing circle over point datasets")]
struct Cli {
    /// Dataset files or directories; a directory expands to its *.txt files
    /// in sorted order
    #[arg(required = true)]
    datasets: Vec<PathBuf>,

    /// Skip the O(n^4) three-point engine (useful on large datasets)
    #[arg(long)]
    skip_triples: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("encircle=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("encircle=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Expand the dataset arguments into a flat list of files
fn collect_datasets(args: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for arg in args {
        if arg.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(arg)
                .with_context(|| format!("reading dataset directory {}", arg.display()))?
                .filter_map(|e| e.ok().map(|e| e.path()))
                .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
                .collect();
            entries.sort();
            files.extend(entries);
        } else {
            files.push(arg.clone());
        }
    }
    Ok(files)
}

fn report(label: &str, circle: &Circle2D, elapsed: std::time::Duration) {
    if circle.is_unbounded() {
        println!("  {label}: no enclosing circle (not enough points)");
    } else {
        println!(
            "  {label}: center ({}, {}), radius {}",
            circle.center.x, circle.center.y, circle.radius
        );
    }
    tracing::debug!(label, ?elapsed, "engine finished");
}

fn process(path: &Path, skip_triples: bool) -> anyhow::Result<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let points = dataset::read_points(path)
        .with_context(|| format!("loading dataset {}", path.display()))?;

    println!("Processing {} with {} points...", name, points.len());

    let start = Instant::now();
    let by_pairs = PairDiameters.smallest_circle(&points);
    report("two-point approach", &by_pairs, start.elapsed());

    if skip_triples {
        tracing::info!(dataset = %name, "three-point engine skipped");
    } else {
        let start = Instant::now();
        let by_triples = TripleCircumcircles.smallest_circle(&points);
        report("three-point approach", &by_triples, start.elapsed());
    }

    println!();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let files = collect_datasets(&cli.datasets)?;
    anyhow::ensure!(!files.is_empty(), "no dataset files found");

    let mut failed = 0usize;
    for file in &files {
        if let Err(e) = process(file, cli.skip_triples) {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            failed += 1;
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} datasets failed", files.len());
    }
    Ok(())
}
