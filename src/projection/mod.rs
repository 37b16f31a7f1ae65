//! Projection engine for year-by-year asset projections

mod state;
mod engine;
mod yearly;

pub use state::SimulationState;
pub use engine::{AssetProjector, STOCK_OPTION_TAX_RATE, STOCK_OPTION_YEAR_INDEX};
pub use yearly::{ProjectionResult, ProjectionSummary, YearRow};
