//! Level-payment loan amortization

use super::{
    non_negative, positive, skip, CalculationKind, CalculationResult, ScheduleRow, MAX_TERM_YEARS,
};
use crate::config::DEFAULT_SCHEDULE_DISPLAY_PERIODS;
use crate::error::{CalcError, Result};
use crate::inputs::LoanInput;

fn validate(input: &LoanInput) -> Result<()> {
    let kind = CalculationKind::LoanPayment;
    if !positive(input.principal) {
        return Err(CalcError::invalid(kind, "loan amount must be positive"));
    }
    if !non_negative(input.annual_rate_pct) {
        return Err(CalcError::invalid(kind, "rate must not be negative"));
    }
    if !positive(input.months()) {
        return Err(CalcError::invalid(kind, "term must be positive"));
    }
    if input.term_years > MAX_TERM_YEARS {
        return Err(CalcError::invalid(kind, "term exceeds the maximum number of years"));
    }
    Ok(())
}

/// Monthly payment `P·r(1+r)^n / ((1+r)^n − 1)`, or `P/n` at a zero rate
///
/// `(1+r)^n − 1` is evaluated as `expm1(n·ln(1+r))` so rates too small to
/// move `1 + r` still give a finite payment.
pub fn level_payment(principal: f64, monthly_rate: f64, months: f64) -> f64 {
    let growth_less_one = (months * monthly_rate.ln_1p()).exp_m1();
    if monthly_rate == 0.0 || growth_less_one == 0.0 {
        return principal / months;
    }
    principal * monthly_rate * (growth_less_one + 1.0) / growth_less_one
}

/// Walk the balance down for up to `periods` payments
fn schedule_rows(principal: f64, monthly_rate: f64, payment: f64, periods: u32) -> Vec<ScheduleRow> {
    let mut balance = principal;
    (1..=periods)
        .map(|period| {
            let interest_portion = balance * monthly_rate;
            let principal_portion = payment - interest_portion;
            balance -= principal_portion;
            ScheduleRow {
                period,
                payment,
                principal_portion,
                interest_portion,
                remaining_balance: balance,
            }
        })
        .collect()
}

/// Whole payments in the term; a fractional final month is not scheduled
fn whole_periods(months: f64) -> u32 {
    months.floor() as u32
}

/// Monthly payment, total cost and the opening months of the schedule
///
/// The schedule holds the first 12 payments (fewer for shorter loans); use
/// [`amortization_schedule`] for the full term.
pub fn amortizing_loan_payment(input: &LoanInput) -> Option<CalculationResult> {
    amortizing_loan_payment_with_limit(input, DEFAULT_SCHEDULE_DISPLAY_PERIODS)
}

/// As [`amortizing_loan_payment`] with a custom schedule length
pub fn amortizing_loan_payment_with_limit(
    input: &LoanInput,
    schedule_periods: usize,
) -> Option<CalculationResult> {
    if let Err(err) = validate(input) {
        return skip(err);
    }

    let monthly_rate = input.monthly_rate();
    let months = input.months();
    let payment = level_payment(input.principal, monthly_rate, months);
    let total_payments = payment * months;

    let shown = whole_periods(months).min(u32::try_from(schedule_periods).unwrap_or(u32::MAX));

    let mut result = CalculationResult::new(
        CalculationKind::LoanPayment,
        input.principal,
        input.annual_rate_pct,
        input.term_years,
        total_payments,
    );
    result.monthly_payment = Some(payment);
    result.total_payments = Some(total_payments);
    result.schedule = schedule_rows(input.principal, monthly_rate, payment, shown);

    Some(result)
}

/// Every payment of the loan; empty when the input is invalid
pub fn amortization_schedule(input: &LoanInput) -> Vec<ScheduleRow> {
    if let Err(err) = validate(input) {
        log::debug!("{}", err);
        return Vec::new();
    }

    let monthly_rate = input.monthly_rate();
    let months = input.months();
    let payment = level_payment(input.principal, monthly_rate, months);
    schedule_rows(input.principal, monthly_rate, payment, whole_periods(months))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn loan(principal: f64, rate: f64, years: f64) -> LoanInput {
        LoanInput {
            principal,
            annual_rate_pct: rate,
            term_years: years,
        }
    }

    #[test]
    fn test_reference_mortgage() {
        let result = amortizing_loan_payment(&loan(250_000.0, 4.5, 30.0)).unwrap();
        let payment = result.monthly_payment.unwrap();
        assert_abs_diff_eq!(payment, 1_266.71, epsilon = 0.01);
        assert_eq!(result.schedule.len(), 12);
        assert_relative_eq!(result.total_payments.unwrap(), payment * 360.0, max_relative = 1e-12);
        assert_relative_eq!(result.total_interest, payment * 360.0 - 250_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_first_period_split() {
        let result = amortizing_loan_payment(&loan(250_000.0, 4.5, 30.0)).unwrap();
        let first = result.schedule[0];
        assert_eq!(first.period, 1);
        // 250000 * 0.045 / 12
        assert_abs_diff_eq!(first.interest_portion, 937.50, epsilon = 1e-9);
        assert_abs_diff_eq!(
            first.remaining_balance,
            250_000.0 - first.principal_portion,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_short_loan_schedule_truncates_to_term() {
        let result = amortizing_loan_payment(&loan(1_200.0, 6.0, 0.5)).unwrap();
        assert_eq!(result.schedule.len(), 6);
        assert_abs_diff_eq!(result.schedule[5].remaining_balance, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_custom_display_limit() {
        let result = amortizing_loan_payment_with_limit(&loan(10_000.0, 5.0, 5.0), 24).unwrap();
        assert_eq!(result.schedule.len(), 24);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let result = amortizing_loan_payment(&loan(12_000.0, 0.0, 1.0)).unwrap();
        assert_eq!(result.monthly_payment, Some(1_000.0));
        assert_eq!(result.total_interest, 0.0);
        assert!(result.schedule.iter().all(|row| row.interest_portion == 0.0));
        assert_abs_diff_eq!(result.schedule[11].remaining_balance, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_full_schedule_repays_principal() {
        let input = loan(250_000.0, 4.5, 30.0);
        let schedule = amortization_schedule(&input);
        assert_eq!(schedule.len(), 360);

        let repaid: f64 = schedule.iter().map(|row| row.principal_portion).sum();
        assert_relative_eq!(repaid, 250_000.0, max_relative = 1e-9);
        assert_abs_diff_eq!(schedule.last().unwrap().remaining_balance, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_display_schedule_matches_full_schedule_prefix() {
        let input = loan(80_000.0, 7.25, 15.0);
        let result = amortizing_loan_payment(&input).unwrap();
        let full = amortization_schedule(&input);
        assert_eq!(result.schedule[..], full[..12]);
    }

    #[test]
    fn test_tiny_rate_payment_is_finite() {
        let result = amortizing_loan_payment(&loan(12_000.0, 1e-14, 1.0)).unwrap();
        let payment = result.monthly_payment.unwrap();
        assert!(payment.is_finite());
        assert_relative_eq!(payment, 1_000.0, max_relative = 1e-9);
        assert!(result.total_interest.is_finite());
        assert_abs_diff_eq!(result.total_interest, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_term_longer_than_limit_rejected() {
        assert!(amortizing_loan_payment(&loan(10_000.0, 5.0, MAX_TERM_YEARS + 1.0)).is_none());
        assert!(amortization_schedule(&loan(10_000.0, 5.0, 1e8)).is_empty());
        assert_eq!(amortization_schedule(&loan(10_000.0, 5.0, MAX_TERM_YEARS)).len(), 1_200);
    }

    #[test]
    fn test_invalid_loans() {
        assert!(amortizing_loan_payment(&loan(0.0, 4.5, 30.0)).is_none());
        assert!(amortizing_loan_payment(&loan(1_000.0, -0.5, 30.0)).is_none());
        assert!(amortizing_loan_payment(&loan(1_000.0, 4.5, 0.0)).is_none());
        assert!(amortization_schedule(&loan(1_000.0, 4.5, -1.0)).is_empty());
    }
}
