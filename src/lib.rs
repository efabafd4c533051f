//! Financial calculator engine
//!
//! This library provides:
//! - Compound interest and fixed-deposit maturity
//! - Amortizing loan payments and schedules
//! - Investment / savings growth with monthly contributions
//! - APR to APY conversion
//! - CD ladder breakdowns
//! - A bounded session history with CSV export

pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod formulas;
pub mod inputs;
pub mod session;

// Re-export commonly used types
pub use config::CalculatorConfig;
pub use error::{CalcError, Result};
pub use formulas::{ApyResult, CalculationKind, CalculationResult, MAX_LADDER_RUNGS, MAX_TERM_YEARS};
pub use inputs::{
    ApyInput, CalculationRequest, CompoundInput, CompoundingFrequency, ContributionInput,
    DepositInput, LadderInput, LoanInput, TenureUnit,
};
pub use session::{Calculator, SessionHistory};
