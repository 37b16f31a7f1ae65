//! Asset Simulator - Year-by-year projection of personal assets over a working career
//!
//! This library provides:
//! - Progressive income tax and payroll deduction calculations
//! - Salary growth with a ceiling, split of take-home pay into invested and kept income
//! - Annual compounding of the invested asset and a one-time stock option payout
//! - Batch and sweep runs over many parameter sets
//!
//! The `loader` feature (on by default) adds CSV scenario loading in
//! [`params::loader`] and is required by the binaries. Without it the crate
//! does no I/O.

pub mod error;
pub mod params;
pub mod tax;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{Result, SimulationError};
pub use params::{SimulationParameters, StockOptionGrant};
pub use tax::{TaxAssumptions, TaxBreakdown};
pub use projection::{AssetProjector, ProjectionResult, YearRow};
pub use scenario::ScenarioRunner;
