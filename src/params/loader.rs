//! Load named parameter sets from a scenarios CSV
//!
//! Expected header:
//! `name,start_salary,max_salary,work_years,annual_increase,savings_rate,`
//! `investment_yield,start_asset,stock_option_rate,stock_option_strike,estimated_valuation`
//!
//! Empty cells in the optional columns fall back to the usual defaults.

use csv::Reader;
use serde::Deserialize;
use std::path::Path;

use super::{SimulationParameters, StockOptionGrant};
use crate::error::{Result, SimulationError};

/// Raw CSV row matching the scenarios file columns
#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    start_salary: f64,
    max_salary: f64,
    // Signed so a negative count is a validation error, not a parse error
    work_years: i64,
    annual_increase: f64,
    savings_rate: Option<f64>,
    investment_yield: Option<f64>,
    start_asset: Option<f64>,
    stock_option_rate: Option<f64>,
    stock_option_strike: Option<f64>,
    estimated_valuation: Option<f64>,
}

impl CsvRow {
    fn into_named(self) -> Result<NamedParameters> {
        let work_years = u32::try_from(self.work_years)
            .ok()
            .filter(|years| *years > 0)
            .ok_or_else(|| {
                SimulationError::invalid(
                    "work_years",
                    format!("must be a positive whole number, got {}", self.work_years),
                )
            })?;

        let mut params = SimulationParameters::new(
            self.start_salary,
            self.max_salary,
            work_years,
            self.annual_increase,
        );
        if let Some(rate) = self.savings_rate {
            params = params.with_savings_rate(rate);
        }
        if let Some(yield_rate) = self.investment_yield {
            params = params.with_investment_yield(yield_rate);
        }
        if let Some(asset) = self.start_asset {
            params = params.with_start_asset(asset);
        }
        params.stock_option = StockOptionGrant::from_parts(
            self.stock_option_rate,
            self.stock_option_strike,
            self.estimated_valuation,
        )?;
        params.validate()?;

        Ok(NamedParameters {
            name: self.name,
            params,
        })
    }
}

/// A parameter set labelled with its scenario name
#[derive(Debug, Clone, PartialEq)]
pub struct NamedParameters {
    pub name: String,
    pub params: SimulationParameters,
}

/// Load all scenarios from a CSV file
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<Vec<NamedParameters>> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_parameters_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedParameters>> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<NamedParameters>> {
    let mut scenarios = Vec::new();

    // Row numbers are 1-based and exclude the header
    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        let named = row.into_named().map_err(|e| SimulationError::InvalidRow {
            row: idx + 1,
            source: Box::new(e),
        })?;
        scenarios.push(named);
    }

    Ok(scenarios)
}
