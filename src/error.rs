//! Error types shared by the calculators and loaders

use thiserror::Error;

/// Errors raised by the calculation engines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// State code is not present in the transfer-tax table
    #[error("unknown state code: {0}")]
    UnknownState(String),

    /// Input record failed a range or shape check
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Scenario comparison needs between 2 and 4 scenarios
    #[error("scenario comparison needs 2 to 4 scenarios, got {0}")]
    ScenarioCount(usize),
}

impl EngineError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading rate tables or scenario files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A row parsed but carried a value the tables cannot accept
    #[error("row {row}: {message}")]
    InvalidRow { row: usize, message: String },

    #[error("table is empty: {0}")]
    Empty(String),
}
