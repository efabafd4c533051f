//! Session state: a calculator façade over the formula engine
//!
//! Holds the configuration and a short most-recent-first history of
//! results, which is what the CSV export covers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;

use crate::config::CalculatorConfig;
use crate::error::Result;
use crate::export;
use crate::formulas::{self, ApyResult, CalculationResult};
use crate::inputs::{
    ApyInput, CalculationRequest, CompoundInput, ContributionInput, DepositInput, LadderInput,
    LoanInput,
};

/// A result as recorded in the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub recorded_at: DateTime<Utc>,
    pub result: CalculationResult,
}

/// Bounded history, newest first; the oldest entry falls off when full
#[derive(Debug, Clone)]
pub struct SessionHistory {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl SessionHistory {
    /// A capacity of zero is treated as one
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, result: CalculationResult) {
        self.entries.push_front(HistoryEntry {
            recorded_at: Utc::now(),
            result,
        });
        self.entries.truncate(self.capacity);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn results(&self) -> impl Iterator<Item = &CalculationResult> {
        self.entries.iter().map(|entry| &entry.result)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// CSV of the whole history, or `None` when there is nothing to export
    pub fn export_csv(&self) -> Result<Option<String>> {
        if self.is_empty() {
            return Ok(None);
        }
        export::results_to_csv(self.results()).map(Some)
    }
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::with_capacity(crate::config::DEFAULT_HISTORY_CAPACITY)
    }
}

/// Runs calculations and records every produced result
///
/// # Example
/// ```
/// use fincalc::{Calculator, CompoundInput, CompoundingFrequency, LoanInput};
///
/// # fn main() -> fincalc::Result<()> {
/// let mut calc = Calculator::new();
/// calc.compound_interest(&CompoundInput {
///     principal: 10_000.0,
///     annual_rate_pct: 5.0,
///     years: 10.0,
///     frequency: CompoundingFrequency::Monthly,
/// });
/// calc.loan_payment(&LoanInput {
///     principal: 250_000.0,
///     annual_rate_pct: 4.5,
///     term_years: 30.0,
/// });
/// assert_eq!(calc.history().len(), 2);
///
/// let csv = calc.export_csv()?.unwrap_or_default();
/// assert!(csv.starts_with("Type,Principal"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    config: CalculatorConfig,
    history: SessionHistory,
}

impl Calculator {
    /// Calculator with default configuration
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        let history = SessionHistory::with_capacity(config.history_capacity);
        Self { config, history }
    }

    /// Load configuration from a JSON file
    pub fn from_config_path(path: &Path) -> Result<Self> {
        Ok(Self::with_config(CalculatorConfig::from_json_path(path)?))
    }

    fn record(&mut self, result: Option<CalculationResult>) -> Option<CalculationResult> {
        let result = result?;
        self.history.push(result.clone());
        Some(result)
    }

    pub fn compound_interest(&mut self, input: &CompoundInput) -> Option<CalculationResult> {
        self.record(formulas::compound_interest(input))
    }

    pub fn loan_payment(&mut self, input: &LoanInput) -> Option<CalculationResult> {
        let periods = self.config.schedule_display_periods;
        self.record(formulas::amortizing_loan_payment_with_limit(input, periods))
    }

    pub fn investment_growth(&mut self, input: &ContributionInput) -> Option<CalculationResult> {
        self.record(formulas::future_value_with_contributions(input))
    }

    pub fn savings_growth(&mut self, input: &ContributionInput) -> Option<CalculationResult> {
        self.record(formulas::savings_growth(input))
    }

    pub fn fixed_deposit(&mut self, input: &DepositInput) -> Option<CalculationResult> {
        self.record(formulas::fixed_deposit(input))
    }

    pub fn cd_ladder(&mut self, input: &LadderInput) -> Option<CalculationResult> {
        self.record(formulas::cd_ladder(input))
    }

    /// Live APR/APY conversion; not recorded in the history
    pub fn apy(&self, input: &ApyInput) -> ApyResult {
        formulas::apr_to_apy(input)
    }

    /// Run any tagged request
    pub fn run(&mut self, request: &CalculationRequest) -> Option<CalculationResult> {
        let periods = self.config.schedule_display_periods;
        self.record(formulas::evaluate(request, periods))
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn export_csv(&self) -> Result<Option<String>> {
        self.history.export_csv()
    }

    /// Write the history to `path`, or to the configured file name when
    /// `path` is `None`. Returns `false` when the history is empty.
    pub fn export_to(&self, path: Option<&Path>) -> Result<bool> {
        if self.history.is_empty() {
            log::info!("No calculations to export");
            return Ok(false);
        }
        let path = path.unwrap_or_else(|| Path::new(&self.config.export_file_name));
        export::export_to_path(path, self.history.results())?;
        Ok(true)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
