//! Area point-count report.
//!
//! Reads an area collection and a point collection, counts the points falling
//! inside each area and prints the area collection with `count` (and, where
//! applicable, `total`) added to every feature's properties.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use areacount::pip::AggregateOptions;
use areacount::report::{generate_report, read_input, ReportOptions};

#[derive(Parser, Debug)]
#[command(name = "areacount")]
#[command(about = "Count the points falling inside each area of a GeoJSON collection")]
struct Args {
    /// Area GeoJSON file (FeatureCollection of MultiPolygons)
    #[arg(long)]
    areas: PathBuf,

    /// Points GeoJSON file (FeatureCollection of Points)
    #[arg(long)]
    points: PathBuf,

    /// Scan points on all cores
    #[arg(long)]
    parallel: bool,

    /// Reject areas by bounding box before the ring tests
    #[arg(long)]
    bbox_prefilter: bool,

    /// Pretty-print the output collection
    #[arg(long)]
    pretty: bool,

    /// Show a progress bar on stderr while scanning
    #[arg(long)]
    progress: bool,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout carries the report
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Areas: {}", args.areas.display());
    info!("Points: {}", args.points.display());

    let areas = read_input(&args.areas)?;
    let points = read_input(&args.points)?;

    let progress = if args.progress {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let options = ReportOptions {
        aggregate: AggregateOptions {
            parallel: args.parallel,
            bbox_prefilter: args.bbox_prefilter,
        },
        pretty: args.pretty,
        progress,
    };

    let report = generate_report(&areas, &points, &options).context("Failed to generate report")?;
    println!("{}", report);

    Ok(())
}
