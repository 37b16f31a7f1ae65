//! Payroll deductions charged on top of income tax

use serde::{Deserialize, Serialize};

/// Flat-rate resident tax, health insurance and pension contributions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayrollDeductions {
    /// Share of salary assessed for resident tax (the rest is treated as bonus)
    pub resident_tax_base_share: f64,

    /// Resident tax rate on the assessed share
    pub resident_tax_rate: f64,

    /// Per-capita resident tax levy
    pub resident_tax_flat: f64,

    /// Health insurance premium rate
    pub health_insurance_rate: f64,

    /// Public pension contribution rate
    pub pension_rate: f64,
}

impl PayrollDeductions {
    /// Fixed rates used by the default tax schedule
    pub fn default_rates() -> Self {
        Self {
            resident_tax_base_share: 0.7,
            resident_tax_rate: 0.1,
            resident_tax_flat: 4_500.0,
            health_insurance_rate: 0.05,
            pension_rate: 0.0915,
        }
    }

    pub fn resident_tax(&self, salary: f64) -> f64 {
        salary * self.resident_tax_base_share * self.resident_tax_rate + self.resident_tax_flat
    }

    pub fn health_insurance(&self, salary: f64) -> f64 {
        salary * self.health_insurance_rate
    }

    pub fn pension(&self, salary: f64) -> f64 {
        salary * self.pension_rate
    }
}

impl Default for PayrollDeductions {
    fn default() -> Self {
        Self::default_rates()
    }
}
