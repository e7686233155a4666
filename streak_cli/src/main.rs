mod data;
mod report;

use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};
use streak_core::analyzer::analyzer::Analyzer;
use streak_core::config::streak_config::StreakConfig;
use streak_core::series::price_series::tail_window;
use tracing_subscriber::EnvFilter;

use report::ScanRow;

#[derive(Parser)]
#[command(name = "streak")]
#[command(about = "Consecutive up/down move probability analysis over candle CSV files")]
#[command(version)]
struct Cli {
    /// Keep only the most recent N closes (0 = use the whole file)
    #[arg(long, default_value_t = 1000)]
    lookback: usize,

    /// Minimum closes required before a series is analyzed
    #[arg(long, default_value_t = 10)]
    min_days: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single candle CSV file
    Analyze {
        file: PathBuf,

        /// Emit the report as JSON instead of the text sections
        #[arg(long)]
        json: bool,
    },

    /// Analyze every CSV in a directory and rank by upside probability
    Scan { dir: PathBuf },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let analyzer = Analyzer::new(StreakConfig::new(cli.min_days, 10)?);

    match cli.command {
        Commands::Analyze { file, json } => analyze_file(&analyzer, &file, cli.lookback, json),
        Commands::Scan { dir } => scan_dir(&analyzer, &dir, cli.lookback),
    }
}

fn analyze_file(
    analyzer: &Analyzer,
    path: &Path,
    lookback: usize,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let closes = data::load_closes(path)?;
    let report = analyzer.analyze(tail_window(&closes, lookback))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report::print_report(&symbol_of(path), &report);
    }
    Ok(())
}

fn scan_dir(analyzer: &Analyzer, dir: &Path, lookback: usize) -> Result<(), Box<dyn Error>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("csv"))
        .collect();
    paths.sort();

    let mut rows = Vec::new();
    for path in &paths {
        let symbol = symbol_of(path);
        tracing::debug!(%symbol, "scanning");

        let closes = match data::load_closes(path) {
            Ok(closes) => closes,
            Err(err) => {
                tracing::warn!(%symbol, %err, "skipping file");
                continue;
            }
        };

        match analyzer.analyze(tail_window(&closes, lookback)) {
            Ok(report) => rows.push(ScanRow::from_report(symbol, &report)),
            Err(err) => tracing::warn!(%symbol, %err, "skipping symbol"),
        }
    }

    rows.sort_by(|a, b| b.upside.total_cmp(&a.upside));
    report::print_ranking(&rows);
    tracing::info!(scanned = paths.len(), ranked = rows.len(), "scan finished");
    Ok(())
}

fn symbol_of(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_uppercase()
}
