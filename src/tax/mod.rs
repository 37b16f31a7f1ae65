//! Income tax and payroll deduction assumptions

mod brackets;
mod deductions;

pub use brackets::{ProgressiveTaxTable, TaxBracket};
pub use deductions::PayrollDeductions;

use serde::{Deserialize, Serialize};

/// Container for everything needed to turn gross salary into take-home pay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxAssumptions {
    pub income_tax: ProgressiveTaxTable,
    pub deductions: PayrollDeductions,
}

/// Every component of the gross-to-net calculation for one salary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub gross: f64,
    pub income_tax: f64,
    pub resident_tax: f64,
    pub health_insurance: f64,
    pub pension: f64,
    pub after_tax: f64,
}

impl TaxBreakdown {
    /// Income tax plus all payroll deductions
    pub fn total_deductions(&self) -> f64 {
        self.income_tax + self.resident_tax + self.health_insurance + self.pension
    }
}

impl TaxAssumptions {
    /// Default bracket table and deduction rates
    pub fn default_schedule() -> Self {
        Self {
            income_tax: ProgressiveTaxTable::default_schedule(),
            deductions: PayrollDeductions::default_rates(),
        }
    }

    /// Full breakdown for a gross salary.
    ///
    /// Every component is computed from the same `salary` value.
    pub fn breakdown(&self, salary: f64) -> TaxBreakdown {
        let income_tax = self.income_tax.income_tax(salary);
        let resident_tax = self.deductions.resident_tax(salary);
        let health_insurance = self.deductions.health_insurance(salary);
        let pension = self.deductions.pension(salary);
        let total = income_tax + resident_tax + health_insurance + pension;

        TaxBreakdown {
            gross: salary,
            income_tax,
            resident_tax,
            health_insurance,
            pension,
            after_tax: salary - total,
        }
    }

    pub fn after_tax_income(&self, salary: f64) -> f64 {
        self.breakdown(salary).after_tax
    }
}

impl Default for TaxAssumptions {
    fn default() -> Self {
        Self::default_schedule()
    }
}
