//! Materna command-line tool
//!
//! Thin operational shell over the core library: reads a JSON array of
//! vitals snapshots (chronologically ordered) from a file and prints the
//! requested derivation as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use materna::{evaluate, generate_alerts, generate_recommendations, health_score, VitalsSnapshot};

#[derive(Parser)]
#[command(name = "materna", about = "Vital-sign scoring, alerts, and recommendations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the health score and status tier for the latest reading
    Score { input: PathBuf },
    /// Generate alerts for the latest reading (with trend detection when a
    /// previous reading is available)
    Alerts { input: PathBuf },
    /// Generate recommendations for the latest reading
    Recommend { input: PathBuf },
    /// Run the full pipeline: score, alerts, and recommendations
    Evaluate { input: PathBuf },
}

fn load_readings(path: &PathBuf) -> Result<Vec<VitalsSnapshot>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let readings: Vec<VitalsSnapshot> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {} as a snapshot array", path.display()))?;
    if readings.is_empty() {
        bail!("{} contains no readings", path.display());
    }
    Ok(readings)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Score { input } => {
            let readings = load_readings(&input)?;
            let latest = readings.last().expect("load_readings rejects empty input");
            serde_json::to_string_pretty(&health_score(latest))?
        }
        Commands::Alerts { input } => {
            let readings = load_readings(&input)?;
            let latest = readings.last().expect("load_readings rejects empty input");
            let previous = readings.len().checked_sub(2).map(|i| &readings[i]);
            serde_json::to_string_pretty(&generate_alerts(latest, previous))?
        }
        Commands::Recommend { input } => {
            let readings = load_readings(&input)?;
            let latest = readings.last().expect("load_readings rejects empty input");
            serde_json::to_string_pretty(&generate_recommendations(latest))?
        }
        Commands::Evaluate { input } => {
            let readings = load_readings(&input)?;
            serde_json::to_string_pretty(&evaluate(&readings)?)?
        }
    };

    println!("{output}");
    Ok(())
}
