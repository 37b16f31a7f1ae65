//! Simulation parameters and scenario loading

mod data;
#[cfg(feature = "loader")]
pub mod loader;

pub use data::{
    SimulationParameters, StockOptionGrant, DEFAULT_INVESTMENT_YIELD, DEFAULT_SAVINGS_RATE,
};
#[cfg(feature = "loader")]
pub use loader::{load_parameters, load_parameters_from_reader, NamedParameters};
