//! Calculation inputs, form parsing and batch loading

mod data;
pub mod loader;
pub mod parse;

pub use data::{
    ApyInput, CompoundInput, CompoundingFrequency, ContributionInput, DepositInput, LadderInput,
    LoanInput, TenureUnit,
};
pub use loader::{load_requests, load_requests_from_reader, CalculationRequest};
