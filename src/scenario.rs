//! Scenario runner for batch projections
//!
//! Holds one set of tax assumptions and runs many parameter sets against it.
//! Each projection owns its state, so batches run in parallel without locking.

use rayon::prelude::*;

use crate::error::Result;
use crate::params::SimulationParameters;
use crate::projection::{AssetProjector, ProjectionResult};
use crate::tax::TaxAssumptions;

/// Pre-configured runner for many projections
///
/// # Example
/// ```
/// use asset_simulator::{ScenarioRunner, SimulationParameters};
///
/// let runner = ScenarioRunner::new();
/// let base = SimulationParameters::new(4_000_000.0, 8_000_000.0, 30, 100_000.0);
/// let results = runner.run_savings_rates(&base, &[0.1, 0.2, 0.3]);
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    assumptions: TaxAssumptions,
}

impl ScenarioRunner {
    /// Create runner with the default tax schedule
    pub fn new() -> Self {
        Self {
            assumptions: TaxAssumptions::default_schedule(),
        }
    }

    /// Create runner with custom tax assumptions
    pub fn with_assumptions(assumptions: TaxAssumptions) -> Self {
        Self { assumptions }
    }

    /// Run a single projection
    pub fn run(&self, params: &SimulationParameters) -> Result<ProjectionResult> {
        AssetProjector::with_assumptions(params.clone(), self.assumptions.clone())
            .map(AssetProjector::into_result)
    }

    /// Run projections for many parameter sets in parallel, preserving input order
    pub fn run_batch(&self, params: &[SimulationParameters]) -> Vec<Result<ProjectionResult>> {
        params.par_iter().map(|p| self.run(p)).collect()
    }

    /// Run one parameter set under several savings rates
    pub fn run_savings_rates(
        &self,
        params: &SimulationParameters,
        savings_rates: &[f64],
    ) -> Vec<Result<ProjectionResult>> {
        savings_rates
            .par_iter()
            .map(|&rate| self.run(&params.clone().with_savings_rate(rate)))
            .collect()
    }

    /// Get reference to the tax assumptions
    pub fn assumptions(&self) -> &TaxAssumptions {
        &self.assumptions
    }

    /// Get mutable reference to the tax assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut TaxAssumptions {
        &mut self.assumptions
    }
}
