//! Output structures for calculations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which calculator produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationKind {
    CompoundInterest,
    LoanPayment,
    InvestmentGrowth,
    SavingsGrowth,
    FixedDeposit,
    CdLadder,
}

impl CalculationKind {
    /// Display label, also used as the `Type` column of the CSV export
    pub fn label(&self) -> &'static str {
        match self {
            CalculationKind::CompoundInterest => "Compound Interest",
            CalculationKind::LoanPayment => "Loan Payment",
            CalculationKind::InvestmentGrowth => "Investment Growth",
            CalculationKind::SavingsGrowth => "Savings Account Growth",
            CalculationKind::FixedDeposit => "Fixed Deposit",
            CalculationKind::CdLadder => "CD Ladder Strategy",
        }
    }

    /// Parse a short name ("loan", "cd-ladder") or a display label
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "compound" | "compound-interest" => Some(CalculationKind::CompoundInterest),
            "loan" | "loan-payment" | "mortgage" => Some(CalculationKind::LoanPayment),
            "investment" | "invest" | "investment-growth" => Some(CalculationKind::InvestmentGrowth),
            "savings" | "savings-growth" | "savings-account-growth" => {
                Some(CalculationKind::SavingsGrowth)
            }
            "deposit" | "fd" | "fixed-deposit" => Some(CalculationKind::FixedDeposit),
            "ladder" | "cd-ladder" | "cd-ladder-strategy" => Some(CalculationKind::CdLadder),
            _ => None,
        }
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One month of a loan amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Payment number (1-indexed)
    pub period: u32,
    pub payment: f64,
    pub principal_portion: f64,
    pub interest_portion: f64,
    pub remaining_balance: f64,
}

/// Value of a fixed deposit at a quarter end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// Months since deposit (3, 6, 9, ...)
    pub month: u32,
    pub amount: f64,
    pub interest: f64,
}

impl GrowthPoint {
    /// Quarter number for display (month 3 is Q1)
    pub fn quarter(&self) -> u32 {
        self.month.div_ceil(3)
    }
}

/// One CD of a ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LadderRung {
    /// Rung number (1-indexed)
    pub rung: u32,
    pub amount: f64,
    pub rate_pct: f64,
    pub maturity_value: f64,
    pub years: u32,
}

/// Result of any calculation except the APY conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub kind: CalculationKind,

    /// Total amount put in (initial plus contributions)
    pub principal: f64,

    /// Annual rate in percent as reported to the user
    pub rate_pct: f64,

    pub time_years: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compound_frequency: Option<u32>,

    /// Maturity value; for loans, the sum of all payments
    pub future_value: f64,

    pub total_interest: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_payments: Option<f64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schedule: Vec<ScheduleRow>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub growth_timeline: Vec<GrowthPoint>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ladder: Vec<LadderRung>,
}

impl CalculationResult {
    /// Create a result with no optional sections
    pub fn new(
        kind: CalculationKind,
        principal: f64,
        rate_pct: f64,
        time_years: f64,
        future_value: f64,
    ) -> Self {
        Self {
            kind,
            principal,
            rate_pct,
            time_years,
            compound_frequency: None,
            future_value,
            total_interest: future_value - principal,
            monthly_payment: None,
            total_payments: None,
            schedule: Vec::new(),
            growth_timeline: Vec::new(),
            ladder: Vec::new(),
        }
    }

    pub fn with_frequency(mut self, periods_per_year: u32) -> Self {
        self.compound_frequency = Some(periods_per_year);
        self
    }
}

/// Nominal and effective annual rates, both in percent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ApyResult {
    pub apr_pct: f64,
    pub apy_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(CalculationKind::from_name("loan"), Some(CalculationKind::LoanPayment));
        assert_eq!(CalculationKind::from_name("CD Ladder"), Some(CalculationKind::CdLadder));
        assert_eq!(
            CalculationKind::from_name("savings_growth"),
            Some(CalculationKind::SavingsGrowth)
        );
        assert_eq!(CalculationKind::from_name("bond"), None);
        assert_eq!(CalculationKind::SavingsGrowth.to_string(), "Savings Account Growth");
    }

    #[test]
    fn test_new_result_interest() {
        let result = CalculationResult::new(CalculationKind::CompoundInterest, 100.0, 5.0, 1.0, 105.0);
        assert!((result.total_interest - 5.0).abs() < 1e-12);
        assert!(result.schedule.is_empty());
    }

    #[test]
    fn test_quarter_numbering() {
        let point = GrowthPoint { month: 9, amount: 0.0, interest: 0.0 };
        assert_eq!(point.quarter(), 3);
    }
}
