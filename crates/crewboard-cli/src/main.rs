//! Crewboard CLI - compute and inspect technician board layouts.

use clap::{Parser, Subcommand};
use crewboard_core::{Interval, LayoutConfig, Resource, Window, MIN_WINDOW_SECONDS};
use crewboard_layout::{BoardLayout, LayoutEngine};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "crewboard")]
#[command(about = "Technician timeline layout tools")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute board geometry from a day feed
    Layout {
        /// Path to the day feed JSON
        feed: PathBuf,

        /// Output format (json, summary)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Validate a day feed and report what the layout would repair
    Check {
        /// Path to the day feed JSON
        feed: PathBuf,
    },
}

/// One day of board input, as exported by the scheduling backend.
#[derive(Debug, Deserialize)]
struct DayFeed {
    window: Window,
    resources: Vec<Resource>,
    intervals: Vec<Interval>,
    /// Board tuning; defaults apply when absent.
    #[serde(default)]
    config: Option<LayoutConfig>,
}

/// Errors loading a day feed from disk.
#[derive(Debug, Error)]
enum FeedError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid feed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Layout {
            feed,
            format,
            pretty,
        } => {
            run_layout(&feed, &format, pretty);
        }
        Commands::Check { feed } => {
            check_feed(&feed);
        }
    }
}

fn run_layout(path: &Path, format: &str, pretty: bool) {
    let feed = load_feed(path);
    let engine = LayoutEngine::new(feed.config.unwrap_or_default());
    let layout = engine.compute(&feed.resources, &feed.intervals, &feed.window);

    match format {
        "json" => {
            let encoded = if pretty {
                serde_json::to_string_pretty(&layout)
            } else {
                serde_json::to_string(&layout)
            };
            match encoded {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Failed to encode layout: {e}");
                    std::process::exit(1);
                }
            }
        }
        "summary" => print_summary(&feed, &layout),
        other => {
            eprintln!("Unknown format: {other}");
            eprintln!("Supported formats: json, summary");
            std::process::exit(1);
        }
    }
}

fn print_summary(feed: &DayFeed, layout: &BoardLayout) {
    println!(
        "Window: {} to {} ({} columns)",
        feed.window.start,
        feed.window.end,
        feed.window.column_count()
    );
    println!(
        "Rows: {} at {:.1}px each",
        layout.rows.len(),
        layout.row_height_px
    );
    for row in &layout.rows {
        let name = feed
            .resources
            .get(row.index)
            .map_or("?", |r| r.name.as_str());
        println!(
            "  {:<20} lanes {:>2}  overflow {:>2}  top {:>8.1}px",
            name, row.lanes_used, row.overflow_count, row.top_px
        );
    }
    println!(
        "Placed {} of {} intervals",
        layout.geometry.len(),
        feed.intervals.len()
    );
}

fn check_feed(path: &Path) {
    println!("Checking feed: {}", path.display());
    let feed = load_feed(path);

    let roster: HashSet<&str> = feed.resources.iter().map(|r| r.id.as_str()).collect();
    let span = feed.window.normalized_range();

    let malformed = feed.intervals.iter().filter(|iv| iv.is_malformed()).count();
    let orphaned = feed
        .intervals
        .iter()
        .filter(|iv| !roster.contains(iv.resource_id.as_str()))
        .count();
    let outside = feed
        .intervals
        .iter()
        .filter(|iv| !iv.normalized_range().overlaps(&span))
        .count();
    let mut seen = HashSet::new();
    let duplicates = feed
        .intervals
        .iter()
        .filter(|iv| !seen.insert(iv.id.as_str()))
        .count();

    println!("Feed OK");
    println!("  Resources: {}", feed.resources.len());
    println!("  Intervals: {}", feed.intervals.len());
    println!("  Malformed (repaired to 60s): {malformed}");
    println!("  Orphaned resource ids: {orphaned}");
    println!("  Outside window: {outside}");
    println!("  Duplicate interval ids: {duplicates}");
    if feed.window.range().is_empty() {
        println!("  Degenerate window; repaired to a {MIN_WINDOW_SECONDS}s span");
    }
}

fn load_feed(path: &Path) -> DayFeed {
    match read_feed(path) {
        Ok(feed) => feed,
        Err(e) => {
            eprintln!("Failed to load feed: {e}");
            std::process::exit(1);
        }
    }
}

fn read_feed(path: &Path) -> Result<DayFeed, FeedError> {
    let content = fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}
