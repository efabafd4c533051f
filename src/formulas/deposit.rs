//! Fixed deposit maturity with a quarterly growth timeline

use super::compound::growth_factor;
use super::{
    non_negative, positive, skip, CalculationKind, CalculationResult, GrowthPoint, MAX_TERM_YEARS,
};
use crate::error::{CalcError, Result};
use crate::inputs::DepositInput;

/// Months between timeline points
const TIMELINE_STEP_MONTHS: u32 = 3;

fn validate(input: &DepositInput) -> Result<()> {
    let kind = CalculationKind::FixedDeposit;
    if !positive(input.principal) {
        return Err(CalcError::invalid(kind, "deposit amount must be positive"));
    }
    if !non_negative(input.annual_rate_pct) {
        return Err(CalcError::invalid(kind, "rate must not be negative"));
    }
    if !positive(input.tenure_years()) {
        return Err(CalcError::invalid(kind, "tenure must be positive"));
    }
    if input.tenure_years() > MAX_TERM_YEARS {
        return Err(CalcError::invalid(kind, "tenure exceeds the maximum number of years"));
    }
    if input.frequency.periods_per_year() == 0 {
        return Err(CalcError::invalid(kind, "compounding frequency must be positive"));
    }
    Ok(())
}

/// Value at every quarter end up to the tenure; empty for tenures under a year
fn quarterly_timeline(principal: f64, rate: f64, periods: u32, years: f64) -> Vec<GrowthPoint> {
    if years < 1.0 {
        return Vec::new();
    }

    let steps = (years * 12.0 / TIMELINE_STEP_MONTHS as f64).floor() as u32;
    (1..=steps)
        .map(|step| step * TIMELINE_STEP_MONTHS)
        .map(|month| {
            let amount = principal * growth_factor(rate, periods, month as f64 / 12.0);
            GrowthPoint {
                month,
                amount,
                interest: amount - principal,
            }
        })
        .collect()
}

/// Maturity amount of a fixed deposit: `P·(1 + r/n)^(n·t)`
pub fn fixed_deposit(input: &DepositInput) -> Option<CalculationResult> {
    if let Err(err) = validate(input) {
        return skip(err);
    }

    let periods = input.frequency.periods_per_year();
    let rate = input.annual_rate_pct / 100.0;
    let years = input.tenure_years();
    let maturity = input.principal * growth_factor(rate, periods, years);

    let mut result = CalculationResult::new(
        CalculationKind::FixedDeposit,
        input.principal,
        input.annual_rate_pct,
        years,
        maturity,
    )
    .with_frequency(periods);
    result.growth_timeline = quarterly_timeline(input.principal, rate, periods, years);

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{CompoundingFrequency, TenureUnit};
    use approx::assert_relative_eq;

    fn deposit(principal: f64, rate: f64, tenure: f64, unit: TenureUnit) -> DepositInput {
        DepositInput {
            principal,
            annual_rate_pct: rate,
            tenure,
            tenure_unit: unit,
            frequency: CompoundingFrequency::Quarterly,
        }
    }

    #[test]
    fn test_one_year_quarterly() {
        let result = fixed_deposit(&deposit(50_000.0, 6.5, 12.0, TenureUnit::Months)).unwrap();
        let expected = 50_000.0 * (1.0_f64 + 0.065 / 4.0).powi(4);

        assert_relative_eq!(result.future_value, expected, max_relative = 1e-12);
        assert_eq!(result.time_years, 1.0);
        assert_eq!(result.compound_frequency, Some(4));

        let months: Vec<u32> = result.growth_timeline.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![3, 6, 9, 12]);
        let last = result.growth_timeline.last().unwrap();
        assert_relative_eq!(last.amount, result.future_value, max_relative = 1e-12);
        assert_relative_eq!(last.interest, result.total_interest, max_relative = 1e-9);
    }

    #[test]
    fn test_timeline_is_increasing() {
        let result = fixed_deposit(&deposit(10_000.0, 5.0, 3.0, TenureUnit::Years)).unwrap();
        assert_eq!(result.growth_timeline.len(), 12);
        assert!(result
            .growth_timeline
            .windows(2)
            .all(|pair| pair[1].amount > pair[0].amount));
    }

    #[test]
    fn test_short_tenure_has_no_timeline() {
        let result = fixed_deposit(&deposit(10_000.0, 5.0, 9.0, TenureUnit::Months)).unwrap();
        assert!(result.growth_timeline.is_empty());
        assert!(result.future_value > 10_000.0);
    }

    #[test]
    fn test_partial_final_quarter_excluded() {
        let result = fixed_deposit(&deposit(10_000.0, 5.0, 14.0, TenureUnit::Months)).unwrap();
        assert_eq!(result.growth_timeline.last().map(|p| p.month), Some(12));
    }

    #[test]
    fn test_tenure_longer_than_limit_rejected() {
        assert!(fixed_deposit(&deposit(1_000.0, 5.0, MAX_TERM_YEARS + 1.0, TenureUnit::Years)).is_none());
        assert!(fixed_deposit(&deposit(1_000.0, 5.0, 2e9, TenureUnit::Years)).is_none());

        let longest = fixed_deposit(&deposit(1_000.0, 5.0, MAX_TERM_YEARS, TenureUnit::Years)).unwrap();
        assert_eq!(longest.growth_timeline.len(), 400);
        assert_eq!(longest.growth_timeline.last().map(|p| p.month), Some(1_200));
    }

    #[test]
    fn test_invalid_deposits() {
        assert!(fixed_deposit(&deposit(0.0, 5.0, 12.0, TenureUnit::Months)).is_none());
        assert!(fixed_deposit(&deposit(100.0, -2.0, 12.0, TenureUnit::Months)).is_none());
        assert!(fixed_deposit(&deposit(100.0, 5.0, 0.0, TenureUnit::Years)).is_none());
    }
}
