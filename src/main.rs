//! Asset Simulator CLI
//!
//! Command-line interface for running a single asset projection

use anyhow::{Context, Result};
use asset_simulator::params::{DEFAULT_INVESTMENT_YIELD, DEFAULT_SAVINGS_RATE};
use asset_simulator::{AssetProjector, ProjectionResult, SimulationParameters, StockOptionGrant};
use clap::{Parser, ValueEnum};
use std::io::Write;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(
    name = "asset_simulator",
    about = "Project cumulative assets over a working career"
)]
struct Cli {
    #[arg(long, help = "Gross salary in the first working year")]
    start_salary: f64,
    #[arg(long, help = "Salary ceiling")]
    max_salary: f64,
    #[arg(long, help = "Number of working years to simulate")]
    work_years: u32,
    #[arg(
        long,
        default_value_t = 0.0,
        allow_negative_numbers = true,
        help = "Flat raise applied after each year"
    )]
    annual_increase: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_SAVINGS_RATE,
        help = "Fraction of after-tax income invested, 0 to 1"
    )]
    savings_rate: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INVESTMENT_YIELD,
        allow_negative_numbers = true,
        help = "Annual yield on the invested asset, e.g. 0.03"
    )]
    investment_yield: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    start_asset: f64,
    #[arg(long, help = "Share of the company covered by stock options")]
    stock_option_rate: Option<f64>,
    #[arg(long, help = "Total exercise price of the stock options")]
    stock_option_strike: Option<f64>,
    #[arg(long, help = "Estimated company valuation at exercise")]
    estimated_valuation: Option<f64>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl Cli {
    fn to_parameters(&self) -> Result<SimulationParameters> {
        let mut params = SimulationParameters::new(
            self.start_salary,
            self.max_salary,
            self.work_years,
            self.annual_increase,
        )
        .with_savings_rate(self.savings_rate)
        .with_investment_yield(self.investment_yield)
        .with_start_asset(self.start_asset);

        params.stock_option = StockOptionGrant::from_parts(
            self.stock_option_rate,
            self.stock_option_strike,
            self.estimated_valuation,
        )?;
        Ok(params)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let params = cli.to_parameters()?;
    let projector = AssetProjector::new(params).context("invalid simulation parameters")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Table => write_table(&mut out, projector.result())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, projector.result())?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for row in &projector.result().years {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
    }

    Ok(())
}

fn write_table<W: Write>(out: &mut W, result: &ProjectionResult) -> Result<()> {
    writeln!(
        out,
        "{:>4} {:>14} {:>14} {:>14} {:>14} {:>14} {:>16}",
        "Year", "Salary", "Deductions", "AfterTax", "Invested", "Deferred", "TotalAsset"
    )?;
    writeln!(out, "{}", "-".repeat(96))?;

    for row in &result.years {
        writeln!(
            out,
            "{:>4} {:>14.0} {:>14.0} {:>14.0} {:>14.0} {:>14.0} {:>16.0}",
            row.year_index + 1,
            row.salary,
            row.total_deductions(),
            row.after_tax_income,
            row.invested_asset,
            row.deferred_income,
            row.total_asset,
        )?;
    }

    let summary = result.summary();
    writeln!(out, "\nSummary:")?;
    writeln!(out, "  Years:                 {}", summary.total_years)?;
    writeln!(out, "  Final total asset:     {:.0}", summary.final_total_asset)?;
    writeln!(out, "  After-tax income:      {:.0}", summary.total_after_tax_income)?;
    writeln!(out, "  Taxes and deductions:  {:.0}", summary.total_deductions)?;
    writeln!(out, "  Stock option payout:   {:.0}", summary.total_stock_option_payout)?;
    writeln!(out, "  Investment growth:     {:.0}", summary.total_investment_growth)?;
    Ok(())
}
