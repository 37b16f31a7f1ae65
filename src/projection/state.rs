//! Running state of one asset projection

use crate::params::SimulationParameters;

/// State carried from one simulated year to the next
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Index of the year about to be simulated (0-based)
    pub year_index: u32,

    /// Gross salary in effect for the current year
    pub current_salary: f64,

    /// Asset held in the investment vehicle
    pub invested_asset: f64,

    /// Running total of after-tax income kept outside the investment vehicle
    pub deferred_income: f64,
}

impl SimulationState {
    /// Initialize state at the start of the first working year
    pub fn from_parameters(params: &SimulationParameters) -> Self {
        Self {
            year_index: 0,
            current_salary: params.start_salary,
            invested_asset: params.start_asset,
            deferred_income: 0.0,
        }
    }

    /// Split this year's take-home pay between investment and the deferred total
    pub fn allocate_income(&mut self, after_tax: f64, savings_rate: f64) -> (f64, f64) {
        let invested = after_tax * savings_rate;
        let deferred = after_tax * (1.0 - savings_rate);
        self.invested_asset += invested;
        self.deferred_income += deferred;
        (invested, deferred)
    }

    /// Apply the annual raise, capped at `max_salary`
    pub fn apply_raise(&mut self, annual_increase: f64, max_salary: f64) {
        self.current_salary += annual_increase;
        if self.current_salary > max_salary {
            self.current_salary = max_salary;
        }
    }

    /// Invested plus deferred, as recorded for the year
    pub fn total_asset(&self) -> f64 {
        self.invested_asset + self.deferred_income
    }

    /// Grow the invested asset by one year of yield and move to the next year.
    /// The deferred total is never compounded.
    pub fn compound_and_advance(&mut self, investment_yield: f64) {
        self.invested_asset *= 1.0 + investment_yield;
        self.year_index += 1;
    }
}
