//! Year-by-year asset projection engine

use log::{debug, info, warn};

use super::state::SimulationState;
use super::yearly::{ProjectionResult, YearRow};
use crate::error::Result;
use crate::params::SimulationParameters;
use crate::tax::TaxAssumptions;

/// Year index (0-based) at which the stock option payout is credited,
/// i.e. once six full years have elapsed
pub const STOCK_OPTION_YEAR_INDEX: u32 = 6;

/// Approximate combined tax rate applied to the stock option payout
pub const STOCK_OPTION_TAX_RATE: f64 = 0.2315;

/// Projects cumulative assets over a working career.
///
/// The whole trajectory is computed when the projector is built; accessors
/// only read the stored result.
///
/// # Example
/// ```
/// use asset_simulator::{AssetProjector, SimulationParameters};
///
/// let params = SimulationParameters::new(4_000_000.0, 8_000_000.0, 30, 100_000.0);
/// let projector = AssetProjector::new(params)?;
/// assert_eq!(projector.assets().len(), 30);
/// # Ok::<(), asset_simulator::SimulationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AssetProjector {
    params: SimulationParameters,
    assumptions: TaxAssumptions,
    result: ProjectionResult,
    assets: Vec<f64>,
}

impl AssetProjector {
    /// Validate parameters and run the projection with the default tax schedule
    pub fn new(params: SimulationParameters) -> Result<Self> {
        Self::with_assumptions(params, TaxAssumptions::default_schedule())
    }

    /// Validate parameters and run the projection with custom tax assumptions
    pub fn with_assumptions(
        params: SimulationParameters,
        assumptions: TaxAssumptions,
    ) -> Result<Self> {
        params.validate()?;

        let result = project(&params, &assumptions);
        let assets = result.assets();

        Ok(Self {
            params,
            assumptions,
            result,
            assets,
        })
    }

    /// Cumulative total asset for each working year
    pub fn assets(&self) -> &[f64] {
        &self.assets
    }

    /// Per-year breakdown behind [`assets`](Self::assets)
    pub fn result(&self) -> &ProjectionResult {
        &self.result
    }

    pub fn into_result(self) -> ProjectionResult {
        self.result
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn assumptions(&self) -> &TaxAssumptions {
        &self.assumptions
    }
}

/// Run the recurrence for already-validated parameters
fn project(params: &SimulationParameters, assumptions: &TaxAssumptions) -> ProjectionResult {
    let mut result = ProjectionResult::new(params.start_asset, params.work_years);
    let mut state = SimulationState::from_parameters(params);

    for _ in 0..params.work_years {
        let row = simulate_year(params, assumptions, &mut state);
        result.add_row(row);
    }

    // Every year is written exactly once, in order
    debug_assert_eq!(result.years.len(), params.work_years as usize);
    debug_assert!(result
        .years
        .iter()
        .enumerate()
        .all(|(i, row)| row.year_index as usize == i));

    if let Some(last) = result.years.last() {
        info!(
            "Projected {} years: final total asset {:.0} (invested {:.0}, deferred {:.0})",
            params.work_years, last.total_asset, last.invested_asset, last.deferred_income
        );
    }

    result
}

/// Simulate a single working year and record its row
fn simulate_year(
    params: &SimulationParameters,
    assumptions: &TaxAssumptions,
    state: &mut SimulationState,
) -> YearRow {
    // Tax uses the salary in effect before this year's raise
    let tax = assumptions.breakdown(state.current_salary);
    let mut row = YearRow::new(state.year_index, &tax);

    let (invested, deferred) = state.allocate_income(tax.after_tax, params.savings_rate);
    row.invested_contribution = invested;
    row.deferred_contribution = deferred;

    state.apply_raise(params.annual_increase, params.max_salary);

    row.stock_option_payout = stock_option_payout(params, state);

    row.invested_asset = state.invested_asset;
    row.deferred_income = state.deferred_income;
    row.total_asset = state.total_asset();

    debug!(
        "Year {}: salary {:.0}, after tax {:.0}, total asset {:.0}",
        row.year_index, row.salary, row.after_tax_income, row.total_asset
    );
    if !row.total_asset.is_finite() {
        warn!("Year {}: total asset is not finite ({})", row.year_index, row.total_asset);
    }

    state.compound_and_advance(params.investment_yield);

    row
}

/// Credit the one-time stock option payout when its year comes up
///
/// `year_index` advances exactly once per simulated year, so the index check
/// alone keeps the payout to a single year.
fn stock_option_payout(params: &SimulationParameters, state: &mut SimulationState) -> f64 {
    if state.year_index != STOCK_OPTION_YEAR_INDEX {
        return 0.0;
    }
    let Some(grant) = params.stock_option.filter(|g| g.is_active()) else {
        return 0.0;
    };

    let payout = grant.gross_value() * (1.0 - STOCK_OPTION_TAX_RATE);
    state.invested_asset += payout;

    debug!("Year {}: stock option payout {:.0}", state.year_index, payout);
    payout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;
    use crate::params::StockOptionGrant;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn flat_params(salary: f64, years: u32) -> SimulationParameters {
        SimulationParameters::new(salary, salary, years, 0.0).with_investment_yield(0.0)
    }

    fn grant() -> StockOptionGrant {
        StockOptionGrant::new(0.001, 1_000_000.0, 10_000_000_000.0)
    }

    #[test]
    fn test_single_year_equals_after_tax() {
        let projector = AssetProjector::new(flat_params(4_000_000.0, 1)).unwrap();
        let assets = projector.assets();

        assert_eq!(assets.len(), 1);
        let after_tax = TaxAssumptions::default().after_tax_income(4_000_000.0);
        assert_relative_eq!(assets[0], after_tax * 0.15 + after_tax * 0.85, max_relative = 1e-12);
        assert_relative_eq!(assets[0], 2_777_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_salary_clamped_from_second_year() {
        let params = SimulationParameters::new(3_000_000.0, 3_500_000.0, 3, 10_000_000.0);
        let projector = AssetProjector::new(params).unwrap();

        assert_eq!(projector.result().salaries(), vec![3_000_000.0, 3_500_000.0, 3_500_000.0]);

        let tax = TaxAssumptions::default();
        let row = &projector.result().years[2];
        assert_eq!(row.after_tax_income, tax.after_tax_income(3_500_000.0));
    }

    #[test]
    fn test_contribution_recorded_before_growth() {
        // Yield only shows up from the following year's total
        let params = SimulationParameters::new(4_000_000.0, 4_000_000.0, 2, 0.0)
            .with_savings_rate(1.0)
            .with_investment_yield(0.10);
        let projector = AssetProjector::new(params).unwrap();
        let assets = projector.assets();

        let after_tax = 2_777_000.0;
        assert_abs_diff_eq!(assets[0], after_tax, epsilon = 1e-6);
        assert_abs_diff_eq!(assets[1], after_tax * 1.1 + after_tax, epsilon = 1e-6);
    }

    #[test]
    fn test_start_asset_compounds() {
        let params = flat_params(0.0, 2)
            .with_start_asset(1_000_000.0)
            .with_investment_yield(0.05);
        let projector = AssetProjector::new(params).unwrap();
        let rows = &projector.result().years;

        // Zero salary still owes the flat resident tax levy
        let after_tax = -4_500.0;
        assert_abs_diff_eq!(rows[0].invested_asset, 1_000_000.0 + after_tax * 0.15, epsilon = 1e-6);
        assert_abs_diff_eq!(
            rows[1].invested_asset,
            (1_000_000.0 + after_tax * 0.15) * 1.05 + after_tax * 0.15,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_stock_option_fires_once_at_year_index_six() {
        let base = flat_params(4_000_000.0, 10);
        let with_options = AssetProjector::new(base.clone().with_stock_option(grant())).unwrap();
        let without = AssetProjector::new(base).unwrap();

        let expected = (10_000_000_000.0 * 0.001 - 1_000_000.0) * (1.0 - 0.2315);
        for (i, (a, b)) in with_options.assets().iter().zip(without.assets()).enumerate() {
            if i < STOCK_OPTION_YEAR_INDEX as usize {
                assert_eq!(a, b, "year {i} should be unaffected");
            } else {
                assert_relative_eq!(a - b, expected, max_relative = 1e-9);
            }
        }

        let payouts: Vec<f64> = with_options
            .result()
            .years
            .iter()
            .map(|r| r.stock_option_payout)
            .collect();
        assert_eq!(payouts.iter().filter(|p| **p != 0.0).count(), 1);
        assert_relative_eq!(payouts[6], expected, max_relative = 1e-12);
    }

    #[test]
    fn test_stock_option_payout_compounds_afterwards() {
        let params = flat_params(4_000_000.0, 8)
            .with_investment_yield(0.03)
            .with_stock_option(grant());
        let projector = AssetProjector::new(params.clone()).unwrap();
        let baseline = AssetProjector::new(SimulationParameters {
            stock_option: None,
            ..params
        })
        .unwrap();

        let payout = projector.result().years[6].stock_option_payout;
        let diff_7 = projector.assets()[7] - baseline.assets()[7];
        assert_relative_eq!(diff_7, payout * 1.03, max_relative = 1e-9);
    }

    #[test]
    fn test_stock_option_ignored_for_short_careers() {
        let params = flat_params(4_000_000.0, 6).with_stock_option(grant());
        let projector = AssetProjector::new(params).unwrap();
        assert!(projector.result().years.iter().all(|r| r.stock_option_payout == 0.0));
    }

    #[test]
    fn test_zero_rate_grant_pays_nothing() {
        let params = flat_params(4_000_000.0, 8)
            .with_stock_option(StockOptionGrant::new(0.0, 1_000_000.0, 1e10));
        let projector = AssetProjector::new(params).unwrap();
        assert_eq!(projector.result().years[6].stock_option_payout, 0.0);
    }

    #[test]
    fn test_invalid_parameters_fail_construction() {
        let params = flat_params(4_000_000.0, 0);
        assert!(matches!(
            AssetProjector::new(params),
            Err(SimulationError::InvalidParameter { field: "work_years", .. })
        ));

        let params = flat_params(4_000_000.0, 5).with_savings_rate(2.0);
        assert!(AssetProjector::new(params).is_err());
    }

    #[test]
    fn test_assets_idempotent() {
        let params = SimulationParameters::new(4_000_000.0, 9_000_000.0, 20, 150_000.0);
        let projector = AssetProjector::new(params).unwrap();
        let first = projector.assets().to_vec();
        let second = projector.assets().to_vec();
        assert_eq!(first, second);
        assert_eq!(projector.result().assets(), first);
    }

    #[test]
    fn test_full_savings_leaves_no_deferred_income() {
        let params = flat_params(4_000_000.0, 3).with_savings_rate(1.0);
        let projector = AssetProjector::new(params).unwrap();
        assert!(projector.result().deferred_income().iter().all(|d| *d == 0.0));
    }

    #[test]
    fn test_summary_growth() {
        let params = SimulationParameters::new(4_000_000.0, 4_000_000.0, 3, 0.0)
            .with_savings_rate(1.0)
            .with_investment_yield(0.10);
        let summary = AssetProjector::new(params).unwrap().result().summary();

        let after_tax = 2_777_000.0;
        assert_eq!(summary.total_years, 3);
        assert_abs_diff_eq!(summary.total_after_tax_income, after_tax * 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(summary.total_deductions, 1_223_000.0 * 3.0, epsilon = 1e-6);
        // Year 1 contribution grew twice, year 2 once, year 3 not yet
        let growth = after_tax * (1.1 * 1.1 - 1.0) + after_tax * 0.1;
        assert_abs_diff_eq!(summary.total_investment_growth, growth, epsilon = 1e-4);
    }
}
