//! Score the crop catalog against a soil test from the command line.
//!
//! Reads a soil sample JSON file (camelCase fields, as produced by the
//! soil test form), pairs it with either a weather snapshot file or the
//! built-in sample report, and prints the ranked recommendations.

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;

use crop_scorer::{
    analyze_crop_suitability, season_for_month_index, weather, Season, SoilSample, WeatherSnapshot,
};

#[derive(Parser)]
#[command(
    name = "analyze",
    version,
    about = "Rank garden crops against a soil test and current weather"
)]
struct Cli {
    /// Path to a soil sample JSON file
    soil: PathBuf,

    /// Weather snapshot JSON file; defaults to the built-in sample report
    #[arg(long)]
    weather: Option<PathBuf>,

    /// Override the season (spring, summer, fall, winter)
    #[arg(long, value_parser = Season::from_str)]
    season: Option<Season>,

    /// Emit the full recommendation list as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.soil)
        .with_context(|| format!("reading soil sample {}", cli.soil.display()))?;
    let soil: SoilSample = serde_json::from_str(&raw).context("parsing soil sample")?;

    let mut snapshot = match &cli.weather {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading weather snapshot {}", path.display()))?;
            serde_json::from_str::<WeatherSnapshot>(&raw).context("parsing weather snapshot")?
        }
        None => {
            let report = weather::sample_report();
            log::info!(
                "no weather file given, using sample report for {}",
                report.location
            );
            report.snapshot(season_for_month_index(chrono::Local::now().month0()))
        }
    };
    if let Some(season) = cli.season {
        snapshot.season = season;
    }
    log::debug!("scoring against {snapshot:?}");

    let recommendations = analyze_crop_suitability(&soil, &snapshot);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    println!("Season: {}", snapshot.season);
    for rec in &recommendations {
        println!(
            "\n{} ({}% confidence, score {:.2})",
            rec.crop, rec.confidence, rec.suitability_score
        );
        for reason in &rec.reasons {
            println!("  + {reason}");
        }
        for warning in &rec.warnings {
            println!("  ! {warning}");
        }
        let npk = &rec.npk_recommendations;
        for (label, advice) in [
            ("N", &npk.nitrogen),
            ("P", &npk.phosphorus),
            ("K", &npk.potassium),
        ] {
            println!("  {label}: {}", advice.recommendation);
        }
        for tip in &rec.planting_tips {
            println!("  * {tip}");
        }
    }
    Ok(())
}
