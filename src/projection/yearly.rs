//! Per-year output structures for asset projections

use serde::{Deserialize, Serialize};

use crate::tax::TaxBreakdown;

/// One row of projection output for one working year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    /// 0-based index of the working year
    pub year_index: u32,

    // Income
    pub salary: f64,
    pub income_tax: f64,
    pub resident_tax: f64,
    pub health_insurance: f64,
    pub pension: f64,
    pub after_tax_income: f64,

    // Allocation of take-home pay
    pub invested_contribution: f64,
    pub deferred_contribution: f64,
    pub stock_option_payout: f64,

    // Balances as recorded for the year, before this year's yield
    pub invested_asset: f64,
    pub deferred_income: f64,
    pub total_asset: f64,
}

impl YearRow {
    /// Start a row from the year's salary and its tax breakdown
    pub fn new(year_index: u32, tax: &TaxBreakdown) -> Self {
        Self {
            year_index,
            salary: tax.gross,
            income_tax: tax.income_tax,
            resident_tax: tax.resident_tax,
            health_insurance: tax.health_insurance,
            pension: tax.pension,
            after_tax_income: tax.after_tax,
            invested_contribution: 0.0,
            deferred_contribution: 0.0,
            stock_option_payout: 0.0,
            invested_asset: 0.0,
            deferred_income: 0.0,
            total_asset: 0.0,
        }
    }

    /// Income tax plus payroll deductions
    pub fn total_deductions(&self) -> f64 {
        self.income_tax + self.resident_tax + self.health_insurance + self.pension
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Invested asset before the first year
    pub start_asset: f64,

    /// One row per working year, in year order
    pub years: Vec<YearRow>,
}

impl ProjectionResult {
    pub fn new(start_asset: f64, work_years: u32) -> Self {
        Self {
            start_asset,
            years: Vec::with_capacity(work_years as usize),
        }
    }

    /// Add a year row
    pub fn add_row(&mut self, row: YearRow) {
        self.years.push(row);
    }

    /// Cumulative total asset per year
    pub fn assets(&self) -> Vec<f64> {
        self.years.iter().map(|r| r.total_asset).collect()
    }

    /// Invested asset per year, before that year's yield
    pub fn invested_assets(&self) -> Vec<f64> {
        self.years.iter().map(|r| r.invested_asset).collect()
    }

    /// Running total of uninvested take-home pay per year
    pub fn deferred_income(&self) -> Vec<f64> {
        self.years.iter().map(|r| r.deferred_income).collect()
    }

    /// Gross salary in effect per year
    pub fn salaries(&self) -> Vec<f64> {
        self.years.iter().map(|r| r.salary).collect()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_after_tax_income: f64 = self.years.iter().map(|r| r.after_tax_income).sum();
        let total_deductions: f64 = self.years.iter().map(|r| r.total_deductions()).sum();
        let total_stock_option_payout: f64 = self.years.iter().map(|r| r.stock_option_payout).sum();

        let final_total_asset = self
            .years
            .last()
            .map(|r| r.total_asset)
            .unwrap_or(self.start_asset);
        let total_investment_growth = final_total_asset
            - self.start_asset
            - total_after_tax_income
            - total_stock_option_payout;

        ProjectionSummary {
            total_years: self.years.len() as u32,
            final_total_asset,
            total_after_tax_income,
            total_deductions,
            total_stock_option_payout,
            total_investment_growth,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_years: u32,
    pub final_total_asset: f64,
    pub total_after_tax_income: f64,
    pub total_deductions: f64,
    pub total_stock_option_payout: f64,
    /// Yield earned on the invested asset up to the final recorded year
    pub total_investment_growth: f64,
}
