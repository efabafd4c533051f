//! Input records for each calculation

use serde::{Deserialize, Serialize};

/// How often interest is compounded per year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    Annually,
    SemiAnnually,
    Quarterly,
    Monthly,
    Daily,
    /// Any other number of periods per year (0 is invalid)
    Custom(u32),
}

impl CompoundingFrequency {
    /// Map a period count onto a named frequency where one exists
    pub fn from_periods(periods: u32) -> Self {
        match periods {
            1 => CompoundingFrequency::Annually,
            2 => CompoundingFrequency::SemiAnnually,
            4 => CompoundingFrequency::Quarterly,
            12 => CompoundingFrequency::Monthly,
            365 => CompoundingFrequency::Daily,
            other => CompoundingFrequency::Custom(other),
        }
    }

    /// Look up a dropdown label ("monthly", "semi-annually", ...)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "annually" | "annual" | "yearly" => Some(CompoundingFrequency::Annually),
            "semi-annually" | "semiannually" | "semi_annually" => {
                Some(CompoundingFrequency::SemiAnnually)
            }
            "quarterly" => Some(CompoundingFrequency::Quarterly),
            "monthly" => Some(CompoundingFrequency::Monthly),
            "daily" => Some(CompoundingFrequency::Daily),
            _ => None,
        }
    }

    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::SemiAnnually => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
            CompoundingFrequency::Custom(n) => *n,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "Annually",
            CompoundingFrequency::SemiAnnually => "Semi-annually",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Daily => "Daily",
            CompoundingFrequency::Custom(_) => "Custom",
        }
    }
}

impl Default for CompoundingFrequency {
    fn default() -> Self {
        CompoundingFrequency::Monthly
    }
}

/// Unit of a fixed-deposit tenure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TenureUnit {
    Months,
    Years,
}

impl TenureUnit {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "months" | "month" | "m" => Some(TenureUnit::Months),
            "years" | "year" | "y" => Some(TenureUnit::Years),
            _ => None,
        }
    }

    /// Convert a tenure in this unit to years
    pub fn to_years(&self, tenure: f64) -> f64 {
        match self {
            TenureUnit::Months => tenure / 12.0,
            TenureUnit::Years => tenure,
        }
    }
}

impl Default for TenureUnit {
    fn default() -> Self {
        TenureUnit::Months
    }
}

/// Lump sum compounded at a fixed nominal rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInput {
    pub principal: f64,
    /// Nominal annual rate in percent (5.0 = 5%)
    pub annual_rate_pct: f64,
    pub years: f64,
    pub frequency: CompoundingFrequency,
}

/// Level-payment loan, paid monthly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: f64,
    pub annual_rate_pct: f64,
    pub term_years: f64,
}

impl LoanInput {
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 100.0 / 12.0
    }

    /// Number of monthly payments (may be fractional)
    pub fn months(&self) -> f64 {
        self.term_years * 12.0
    }
}

/// Starting balance plus a monthly contribution, compounded monthly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionInput {
    pub initial: f64,
    pub monthly_contribution: f64,
    pub annual_rate_pct: f64,
    pub years: f64,
}

/// Nominal rate to convert to an effective annual yield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApyInput {
    pub nominal_rate_pct: f64,
    pub frequency: CompoundingFrequency,
}

/// Fixed deposit / certificate of deposit held to maturity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepositInput {
    pub principal: f64,
    pub annual_rate_pct: f64,
    pub tenure: f64,
    pub tenure_unit: TenureUnit,
    pub frequency: CompoundingFrequency,
}

impl DepositInput {
    pub fn tenure_years(&self) -> f64 {
        self.tenure_unit.to_years(self.tenure)
    }
}

/// Total split evenly across CDs whose rates step from start to end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LadderInput {
    pub total_amount: f64,
    pub rungs: u32,
    pub start_rate_pct: f64,
    pub end_rate_pct: f64,
}
