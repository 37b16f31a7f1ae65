//! Error types for parameter validation and scenario loading

use thiserror::Error;

/// Errors raised while building or loading a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid parameter: {field} - {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    #[error("Incomplete stock option grant: missing {}", .missing.join(", "))]
    IncompleteStockOption { missing: Vec<&'static str> },

    #[error("Invalid tax table: {0}")]
    InvalidTaxTable(String),

    #[cfg(feature = "loader")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "loader")]
    #[error("Invalid scenario row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: Box<SimulationError>,
    },
}

impl SimulationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SimulationError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
