//! Run projections for every scenario in a CSV file
//!
//! Outputs one row per (scenario, year) with the full yearly breakdown

use anyhow::{Context, Result};
use asset_simulator::params::load_parameters;
use asset_simulator::{ScenarioRunner, SimulationParameters, YearRow};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Run asset projections for a CSV of scenarios")]
struct Args {
    /// Scenarios CSV (see params::loader for the expected header)
    #[arg(long, default_value = "scenarios.csv")]
    input: PathBuf,
    /// Destination CSV for yearly results
    #[arg(long, default_value = "batch_projection_output.csv")]
    output: PathBuf,
}

/// Scenario name followed by the yearly breakdown
fn output_record(scenario: &str, row: &YearRow) -> Vec<String> {
    vec![
        scenario.to_string(),
        row.year_index.to_string(),
        format!("{:.2}", row.salary),
        format!("{:.2}", row.income_tax),
        format!("{:.2}", row.resident_tax),
        format!("{:.2}", row.health_insurance),
        format!("{:.2}", row.pension),
        format!("{:.2}", row.after_tax_income),
        format!("{:.2}", row.invested_contribution),
        format!("{:.2}", row.deferred_contribution),
        format!("{:.2}", row.stock_option_payout),
        format!("{:.2}", row.invested_asset),
        format!("{:.2}", row.deferred_income),
        format!("{:.2}", row.total_asset),
    ]
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.input.display());
    let scenarios = load_parameters(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::new();
    let params: Vec<SimulationParameters> = scenarios.iter().map(|s| s.params.clone()).collect();

    println!("Running projections...");
    let proj_start = Instant::now();
    let results = runner.run_batch(&params);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    writer.write_record([
        "scenario",
        "year_index",
        "salary",
        "income_tax",
        "resident_tax",
        "health_insurance",
        "pension",
        "after_tax_income",
        "invested_contribution",
        "deferred_contribution",
        "stock_option_payout",
        "invested_asset",
        "deferred_income",
        "total_asset",
    ])?;

    println!("\nScenario Summary:");
    for (scenario, result) in scenarios.iter().zip(&results) {
        let result = result
            .as_ref()
            .map_err(|e| anyhow::anyhow!("scenario {}: {e}", scenario.name))?;

        for year in &result.years {
            writer.write_record(output_record(&scenario.name, year))?;
        }

        let summary = result.summary();
        println!(
            "  {:<20} years={:>3} final_total={:>16.0} stock_options={:>14.0}",
            scenario.name,
            summary.total_years,
            summary.final_total_asset,
            summary.total_stock_option_payout
        );
    }
    writer.flush()?;

    println!("\nOutput written to {}", args.output.display());
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
