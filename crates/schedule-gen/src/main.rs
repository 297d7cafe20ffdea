//! Lumen Emission Schedule Generator
//!
//! Offline tool producing the reward table embedded in the Lumen runtime.
//! One run derives the full schedule, reports its statistics, and writes
//! the artifact plus a manifest recording the parameters and table hash.

use anyhow::{Context, Result};
use clap::Parser;
use lumen_emission::{
    as_tokens, build_schedule, EmissionTable, ScheduleParams, ScheduleSummary,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "schedule-gen")]
#[command(author = "Lumen Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Deterministic emission-table generator for the Lumen ledger", long_about = None)]
struct Args {
    /// Output directory for the table and manifest
    #[arg(short, long, default_value = "generated")]
    output: PathBuf,

    /// Emission duration in years
    #[arg(long, default_value = "20")]
    total_years: u64,

    /// Blocks produced per year
    #[arg(long, default_value = "5256000")]
    blocks_per_year: u64,

    /// Target block time in seconds
    #[arg(long, default_value = "6")]
    block_time_seconds: u32,

    /// Era length in blocks
    #[arg(long, default_value = "14400")]
    blocks_per_era: u32,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Generation record written next to the artifact.
#[derive(Serialize)]
struct Manifest {
    params: ScheduleParams,
    summary: ScheduleSummary,
    /// BLAKE3 hex hash of the rendered table.
    table_hash: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Lumen emission schedule generator v{}", env!("CARGO_PKG_VERSION"));

    let params = ScheduleParams {
        total_years: args.total_years,
        blocks_per_year: args.blocks_per_year,
        block_time_seconds: args.block_time_seconds,
        blocks_per_era: args.blocks_per_era,
        ..ScheduleParams::default()
    };

    info!("Schedule parameters:");
    info!("  Max supply: {:.2}M LUM", as_tokens(params.max_supply_plancks) / 1e6);
    info!(
        "  Duration: {} years ({} blocks at {}s)",
        params.total_years,
        params.total_blocks(),
        params.block_time_seconds
    );
    info!("  Era length: {} blocks", params.blocks_per_era);
    info!("  Growth rate (k): {:.10e}", params.growth_rate());

    let schedule = build_schedule(&params).context("Schedule generation failed")?;
    let table = EmissionTable::new(&params, &schedule);
    let summary = ScheduleSummary::new(&params, &schedule);

    info!("Schedule statistics:");
    info!("  Eras: {}", summary.total_eras);
    info!(
        "  Peak reward: {:.6} LUM/block (era {})",
        as_tokens(summary.peak_reward),
        summary.peak_era
    );
    info!(
        "  Era 1 reward: {:.10} LUM/block",
        as_tokens(summary.first_era_reward)
    );
    info!(
        "  Final era reward: {:.10} LUM/block",
        as_tokens(summary.final_era_reward)
    );
    info!(
        "  Total emission: {:.2} LUM ({:.4}% of cap)",
        as_tokens(summary.total_emitted),
        summary.coverage_percent
    );

    // Render and serialize everything before touching the filesystem, so a
    // failure leaves no partial artifact behind.
    let source = table.render_rust_source();
    let table_hash = table.content_hash();
    info!("  Table hash: {}", table_hash);

    let manifest = Manifest {
        params,
        summary,
        table_hash,
    };
    let manifest_json =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;

    let (table_path, manifest_path) =
        write_artifacts(&args.output, &source, &manifest_json)?;

    info!("Emission table written to: {}", table_path.display());
    info!("Manifest written to: {}", manifest_path.display());

    Ok(())
}

/// Write the rendered table and manifest into `output`.
fn write_artifacts(
    output: &Path,
    source: &str,
    manifest_json: &str,
) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(output).context("Failed to create output directory")?;

    let table_path = output.join("emission_table.rs");
    std::fs::write(&table_path, source)
        .with_context(|| format!("Failed to write {}", table_path.display()))?;

    let manifest_path = output.join("manifest.json");
    std::fs::write(&manifest_path, manifest_json)
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

    Ok((table_path, manifest_path))
}
