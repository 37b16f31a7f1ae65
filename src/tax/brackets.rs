//! Progressive income tax table

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// One row of the progressive table: `salary * rate - deduction` for
/// salaries up to and including `upper_bound`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper salary bound; `None` for the top bracket
    pub upper_bound: Option<f64>,

    /// Marginal rate
    pub rate: f64,

    /// Quick-calculation deduction subtracted from `salary * rate`
    pub deduction: f64,
}

impl TaxBracket {
    pub const fn new(upper_bound: Option<f64>, rate: f64, deduction: f64) -> Self {
        Self {
            upper_bound,
            rate,
            deduction,
        }
    }

    pub fn contains(&self, salary: f64) -> bool {
        self.upper_bound.map_or(true, |bound| salary <= bound)
    }

    pub fn tax(&self, salary: f64) -> f64 {
        salary * self.rate - self.deduction
    }
}

/// Brackets ordered by ascending upper bound, ending in an unbounded bracket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaxBracket>", into = "Vec<TaxBracket>")]
pub struct ProgressiveTaxTable {
    brackets: Vec<TaxBracket>,
}

impl ProgressiveTaxTable {
    /// Build a table, checking that values are finite, bounds ascend and
    /// only the last bracket is open
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self> {
        let Some(last) = brackets.last() else {
            return Err(SimulationError::InvalidTaxTable(
                "at least one bracket is required".to_string(),
            ));
        };
        if last.upper_bound.is_some() {
            return Err(SimulationError::InvalidTaxTable(
                "last bracket must be unbounded".to_string(),
            ));
        }
        for (idx, bracket) in brackets.iter().enumerate() {
            if !bracket.rate.is_finite() || !bracket.deduction.is_finite() {
                return Err(SimulationError::InvalidTaxTable(format!(
                    "bracket {idx} has a non-finite rate or deduction"
                )));
            }
        }

        let mut previous: Option<f64> = None;
        for (idx, bracket) in brackets[..brackets.len() - 1].iter().enumerate() {
            let Some(bound) = bracket.upper_bound else {
                return Err(SimulationError::InvalidTaxTable(format!(
                    "bracket {idx} is unbounded but is not the last bracket"
                )));
            };
            if !bound.is_finite() {
                return Err(SimulationError::InvalidTaxTable(format!(
                    "bracket {idx} upper bound {bound} is not finite"
                )));
            }
            if let Some(prev) = previous {
                if bound <= prev {
                    return Err(SimulationError::InvalidTaxTable(format!(
                        "bracket {idx} upper bound {bound} does not exceed {prev}"
                    )));
                }
            }
            previous = Some(bound);
        }

        Ok(Self { brackets })
    }

    /// Seven-bracket national income tax schedule
    pub fn default_schedule() -> Self {
        Self {
            brackets: vec![
                TaxBracket::new(Some(1_950_000.0), 0.05, 0.0),
                TaxBracket::new(Some(3_300_000.0), 0.10, 97_500.0),
                TaxBracket::new(Some(6_950_000.0), 0.20, 427_500.0),
                TaxBracket::new(Some(9_000_000.0), 0.23, 636_000.0),
                TaxBracket::new(Some(18_000_000.0), 0.33, 1_536_000.0),
                TaxBracket::new(Some(40_000_000.0), 0.40, 2_796_000.0),
                TaxBracket::new(None, 0.45, 4_796_000.0),
            ],
        }
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// First bracket whose bound covers the salary
    pub fn bracket_for(&self, salary: f64) -> &TaxBracket {
        let last = &self.brackets[self.brackets.len() - 1];
        self.brackets
            .iter()
            .find(|b| b.contains(salary))
            .unwrap_or(last)
    }

    /// Income tax owed on a gross salary
    pub fn income_tax(&self, salary: f64) -> f64 {
        self.bracket_for(salary).tax(salary)
    }
}

impl TryFrom<Vec<TaxBracket>> for ProgressiveTaxTable {
    type Error = SimulationError;

    fn try_from(brackets: Vec<TaxBracket>) -> Result<Self> {
        Self::new(brackets)
    }
}

impl From<ProgressiveTaxTable> for Vec<TaxBracket> {
    fn from(table: ProgressiveTaxTable) -> Self {
        table.brackets
    }
}

impl Default for ProgressiveTaxTable {
    fn default() -> Self {
        Self::default_schedule()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bracket_values() {
        let table = ProgressiveTaxTable::default_schedule();
        assert_abs_diff_eq!(table.income_tax(1_000_000.0), 50_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(table.income_tax(3_000_000.0), 202_500.0, epsilon = 1e-6);
        assert_abs_diff_eq!(table.income_tax(4_000_000.0), 372_500.0, epsilon = 1e-6);
        assert_abs_diff_eq!(table.income_tax(8_000_000.0), 1_204_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(table.income_tax(10_000_000.0), 1_764_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(table.income_tax(20_000_000.0), 5_204_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(table.income_tax(50_000_000.0), 17_704_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let table = ProgressiveTaxTable::default_schedule();
        assert_eq!(table.bracket_for(1_950_000.0).rate, 0.05);
        assert_eq!(table.bracket_for(1_950_000.01).rate, 0.10);
        assert_eq!(table.bracket_for(40_000_000.0).rate, 0.40);
        assert_eq!(table.bracket_for(40_000_001.0).rate, 0.45);
    }

    #[test]
    fn test_continuity_at_thresholds() {
        let table = ProgressiveTaxTable::default_schedule();
        for bracket in table.brackets() {
            let Some(bound) = bracket.upper_bound else { continue };
            let below = table.income_tax(bound - 1.0);
            let at = table.income_tax(bound);
            let above = table.income_tax(bound + 1.0);
            // One unit of salary moves tax by at most the top marginal rate
            assert!((at - below).abs() <= 0.45 + 1e-6, "jump below {bound}: {below} -> {at}");
            assert!((above - at).abs() <= 0.45 + 1e-6, "jump above {bound}: {at} -> {above}");
        }
    }

    #[test]
    fn test_zero_salary() {
        let table = ProgressiveTaxTable::default_schedule();
        assert_eq!(table.income_tax(0.0), 0.0);
    }

    #[test]
    fn test_custom_table_validation() {
        let ok = ProgressiveTaxTable::new(vec![
            TaxBracket::new(Some(1_000.0), 0.1, 0.0),
            TaxBracket::new(None, 0.2, 100.0),
        ]);
        assert!(ok.is_ok());

        assert!(ProgressiveTaxTable::new(vec![]).is_err());
        assert!(ProgressiveTaxTable::new(vec![TaxBracket::new(Some(1_000.0), 0.1, 0.0)]).is_err());
        assert!(ProgressiveTaxTable::new(vec![
            TaxBracket::new(Some(2_000.0), 0.1, 0.0),
            TaxBracket::new(Some(1_000.0), 0.2, 0.0),
            TaxBracket::new(None, 0.3, 0.0),
        ])
        .is_err());
        assert!(ProgressiveTaxTable::new(vec![
            TaxBracket::new(None, 0.1, 0.0),
            TaxBracket::new(None, 0.2, 0.0),
        ])
        .is_err());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let tables = [
            vec![
                TaxBracket::new(Some(f64::NAN), 0.1, 0.0),
                TaxBracket::new(None, 0.2, 100.0),
            ],
            vec![
                TaxBracket::new(Some(1_000.0), 0.1, 0.0),
                TaxBracket::new(Some(f64::INFINITY), 0.2, 100.0),
                TaxBracket::new(None, 0.3, 200.0),
            ],
            vec![
                TaxBracket::new(Some(1_000.0), f64::NAN, 0.0),
                TaxBracket::new(None, 0.2, 100.0),
            ],
            vec![
                TaxBracket::new(Some(1_000.0), 0.1, 0.0),
                TaxBracket::new(None, 0.2, f64::NAN),
            ],
            vec![TaxBracket::new(None, f64::NEG_INFINITY, 0.0)],
        ];
        for brackets in tables {
            let err = ProgressiveTaxTable::new(brackets).unwrap_err();
            assert!(matches!(err, SimulationError::InvalidTaxTable(_)));
        }
    }
}
