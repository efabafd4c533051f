//! Error types for loading, configuration and export

use thiserror::Error;

use crate::formulas::CalculationKind;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown calculation kind: {0}")]
    UnknownKind(String),

    /// Input rejected by a formula. Formulas never return this to callers,
    /// it only carries the reason into the debug log.
    #[error("{kind} skipped: {reason}")]
    InvalidInput {
        kind: CalculationKind,
        reason: &'static str,
    },
}

impl CalcError {
    pub fn invalid(kind: CalculationKind, reason: &'static str) -> Self {
        CalcError::InvalidInput { kind, reason }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
