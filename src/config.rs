//! Calculator configuration
//!
//! Display limits and session sizing. Everything has a default, so a config
//! file only needs the keys it overrides.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{CalcError, Result};

/// Results kept in the session history
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Loan schedule periods shown with a payment result
pub const DEFAULT_SCHEDULE_DISPLAY_PERIODS: usize = 12;

/// Quarters of a fixed-deposit growth timeline shown in tables
pub const DEFAULT_GROWTH_TIMELINE_DISPLAY_ROWS: usize = 6;

pub const DEFAULT_EXPORT_FILE_NAME: &str = "financial_calculations.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Maximum number of results kept, most recent first
    pub history_capacity: usize,

    /// Periods of the amortization schedule attached to a loan result
    pub schedule_display_periods: usize,

    /// Rows of the fixed-deposit timeline rendered in text tables
    pub growth_timeline_display_rows: usize,

    /// File name used when exporting the session without an explicit path
    pub export_file_name: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            schedule_display_periods: DEFAULT_SCHEDULE_DISPLAY_PERIODS,
            growth_timeline_display_rows: DEFAULT_GROWTH_TIMELINE_DISPLAY_ROWS,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Load a config from a JSON file, filling missing keys with defaults
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(CalcError::Config(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(CalcError::Config(
                "export_file_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
