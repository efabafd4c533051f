//! Growth of a balance with level monthly contributions

use super::{non_negative, positive, skip, CalculationKind, CalculationResult};
use crate::error::{CalcError, Result};
use crate::inputs::ContributionInput;

fn validate(kind: CalculationKind, input: &ContributionInput) -> Result<()> {
    if !non_negative(input.initial) {
        return Err(CalcError::invalid(kind, "initial amount must not be negative"));
    }
    if !non_negative(input.monthly_contribution) {
        return Err(CalcError::invalid(kind, "monthly contribution must not be negative"));
    }
    if !non_negative(input.annual_rate_pct) {
        return Err(CalcError::invalid(kind, "rate must not be negative"));
    }
    if !positive(input.years) {
        return Err(CalcError::invalid(kind, "years must be positive"));
    }
    Ok(())
}

/// Future value of an ordinary annuity: `PMT·((1+r)^n − 1)/r`, `PMT·n` at r = 0
///
/// Evaluated as `n · expm1(x)/x · ln(1+r)/r` with `x = n·ln(1+r)`; both
/// ratios tend to 1 as `r → 0`, so tiny rates never lose the contributions.
pub fn annuity_future_value(payment: f64, periodic_rate: f64, periods: f64) -> f64 {
    if periodic_rate == 0.0 {
        return payment * periods;
    }
    let log_growth = periodic_rate.ln_1p();
    let exponent = periods * log_growth;
    if exponent == 0.0 {
        return payment * periods;
    }
    payment * periods * (exponent.exp_m1() / exponent) * (log_growth / periodic_rate)
}

fn grow(kind: CalculationKind, input: &ContributionInput) -> Option<CalculationResult> {
    if let Err(err) = validate(kind, input) {
        return skip(err);
    }

    let monthly_rate = input.annual_rate_pct / 100.0 / 12.0;
    let months = input.years * 12.0;

    let initial_value = input.initial * (1.0 + monthly_rate).powf(months);
    let contribution_value = annuity_future_value(input.monthly_contribution, monthly_rate, months);
    let contributed = input.initial + input.monthly_contribution * months;

    Some(CalculationResult::new(
        kind,
        contributed,
        input.annual_rate_pct,
        input.years,
        initial_value + contribution_value,
    ))
}

/// Investment growth with monthly compounding and monthly contributions
///
/// `principal` on the result is the total contributed and `total_interest`
/// the growth above it.
pub fn future_value_with_contributions(input: &ContributionInput) -> Option<CalculationResult> {
    grow(CalculationKind::InvestmentGrowth, input)
}

/// Savings account growth; same arithmetic, reported as a savings result
pub fn savings_growth(input: &ContributionInput) -> Option<CalculationResult> {
    grow(CalculationKind::SavingsGrowth, input)
}
