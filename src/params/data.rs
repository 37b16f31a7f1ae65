//! Simulation parameter structures

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Default share of after-tax income routed into investment
pub const DEFAULT_SAVINGS_RATE: f64 = 0.15;

/// Default annual yield on the invested asset
pub const DEFAULT_INVESTMENT_YIELD: f64 = 0.03;

fn default_savings_rate() -> f64 {
    DEFAULT_SAVINGS_RATE
}

fn default_investment_yield() -> f64 {
    DEFAULT_INVESTMENT_YIELD
}

/// Stock option grant paid out once during the projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockOptionGrant {
    /// Share of the company covered by the options
    pub rate: f64,

    /// Total exercise price
    pub strike: f64,

    /// Estimated company valuation at exercise
    pub estimated_valuation: f64,
}

impl StockOptionGrant {
    pub fn new(rate: f64, strike: f64, estimated_valuation: f64) -> Self {
        Self {
            rate,
            strike,
            estimated_valuation,
        }
    }

    /// Build a grant from three optional fields.
    ///
    /// All absent gives `Ok(None)`; all present gives a grant; anything in
    /// between is an [`SimulationError::IncompleteStockOption`].
    pub fn from_parts(
        rate: Option<f64>,
        strike: Option<f64>,
        estimated_valuation: Option<f64>,
    ) -> Result<Option<Self>> {
        match (rate, strike, estimated_valuation) {
            (None, None, None) => Ok(None),
            (Some(rate), Some(strike), Some(valuation)) => {
                Ok(Some(Self::new(rate, strike, valuation)))
            }
            _ => {
                let mut missing = Vec::new();
                if rate.is_none() {
                    missing.push("stock_option_rate");
                }
                if strike.is_none() {
                    missing.push("stock_option_strike");
                }
                if estimated_valuation.is_none() {
                    missing.push("estimated_valuation");
                }
                Err(SimulationError::IncompleteStockOption { missing })
            }
        }
    }

    /// Gross value of the grant before tax
    pub fn gross_value(&self) -> f64 {
        self.estimated_valuation * self.rate - self.strike
    }

    /// Whether the grant pays anything out (a zero rate means no options)
    pub fn is_active(&self) -> bool {
        self.rate != 0.0
    }
}

/// Inputs for one asset projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Gross salary in the first working year
    pub start_salary: f64,

    /// Salary ceiling; raises never push past it
    pub max_salary: f64,

    /// Number of simulated working years
    pub work_years: u32,

    /// Flat raise applied after each year
    pub annual_increase: f64,

    /// Fraction of after-tax income that gets invested
    #[serde(default = "default_savings_rate")]
    pub savings_rate: f64,

    /// Annual compounding rate of the invested asset
    #[serde(default = "default_investment_yield")]
    pub investment_yield: f64,

    /// Invested asset at the start of the projection
    #[serde(default)]
    pub start_asset: f64,

    /// Optional one-time stock option payout
    #[serde(default)]
    pub stock_option: Option<StockOptionGrant>,
}

impl SimulationParameters {
    /// Create parameters with the default savings rate, yield and no starting asset
    pub fn new(start_salary: f64, max_salary: f64, work_years: u32, annual_increase: f64) -> Self {
        Self {
            start_salary,
            max_salary,
            work_years,
            annual_increase,
            savings_rate: DEFAULT_SAVINGS_RATE,
            investment_yield: DEFAULT_INVESTMENT_YIELD,
            start_asset: 0.0,
            stock_option: None,
        }
    }

    pub fn with_savings_rate(mut self, savings_rate: f64) -> Self {
        self.savings_rate = savings_rate;
        self
    }

    pub fn with_investment_yield(mut self, investment_yield: f64) -> Self {
        self.investment_yield = investment_yield;
        self
    }

    pub fn with_start_asset(mut self, start_asset: f64) -> Self {
        self.start_asset = start_asset;
        self
    }

    pub fn with_stock_option(mut self, grant: StockOptionGrant) -> Self {
        self.stock_option = Some(grant);
        self
    }

    /// Check ranges and consistency before a projection is run
    pub fn validate(&self) -> Result<()> {
        ensure_finite("start_salary", self.start_salary)?;
        ensure_finite("max_salary", self.max_salary)?;
        ensure_finite("annual_increase", self.annual_increase)?;
        ensure_finite("savings_rate", self.savings_rate)?;
        ensure_finite("investment_yield", self.investment_yield)?;
        ensure_finite("start_asset", self.start_asset)?;

        if self.start_salary < 0.0 {
            return Err(SimulationError::invalid(
                "start_salary",
                format!("must be non-negative, got {}", self.start_salary),
            ));
        }
        if self.max_salary < self.start_salary {
            return Err(SimulationError::invalid(
                "max_salary",
                format!(
                    "must be at least start_salary ({}), got {}",
                    self.start_salary, self.max_salary
                ),
            ));
        }
        if self.work_years == 0 {
            return Err(SimulationError::invalid("work_years", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.savings_rate) {
            return Err(SimulationError::invalid(
                "savings_rate",
                format!("must be within [0, 1], got {}", self.savings_rate),
            ));
        }

        if let Some(grant) = &self.stock_option {
            ensure_finite("stock_option_rate", grant.rate)?;
            ensure_finite("stock_option_strike", grant.strike)?;
            ensure_finite("estimated_valuation", grant.estimated_valuation)?;
        }

        Ok(())
    }
}

fn ensure_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimulationError::invalid(field, format!("must be finite, got {value}")))
    }
}
