//! Lump-sum compounding and APR/APY conversion

use super::{non_negative, positive, skip, ApyResult, CalculationKind, CalculationResult};
use crate::error::{CalcError, Result};
use crate::inputs::{ApyInput, CompoundInput};

/// Growth factor `(1 + r/n)^(n·t)` for a decimal annual rate
pub fn growth_factor(annual_rate: f64, periods_per_year: u32, years: f64) -> f64 {
    let n = periods_per_year as f64;
    (1.0 + annual_rate / n).powf(n * years)
}

fn validate(input: &CompoundInput) -> Result<()> {
    let kind = CalculationKind::CompoundInterest;
    if !positive(input.principal) {
        return Err(CalcError::invalid(kind, "principal must be positive"));
    }
    if !non_negative(input.annual_rate_pct) {
        return Err(CalcError::invalid(kind, "rate must not be negative"));
    }
    if !positive(input.years) {
        return Err(CalcError::invalid(kind, "years must be positive"));
    }
    if input.frequency.periods_per_year() == 0 {
        return Err(CalcError::invalid(kind, "compounding frequency must be positive"));
    }
    Ok(())
}

/// Future value of a lump sum: `P·(1 + r/n)^(n·t)`
///
/// Returns `None` for a non-positive principal, term or frequency, or a
/// negative rate.
pub fn compound_interest(input: &CompoundInput) -> Option<CalculationResult> {
    if let Err(err) = validate(input) {
        return skip(err);
    }

    let periods = input.frequency.periods_per_year();
    let rate = input.annual_rate_pct / 100.0;
    let future_value = input.principal * growth_factor(rate, periods, input.years);

    Some(
        CalculationResult::new(
            CalculationKind::CompoundInterest,
            input.principal,
            input.annual_rate_pct,
            input.years,
            future_value,
        )
        .with_frequency(periods),
    )
}

/// Effective annual yield of a nominal rate: `(1 + r/n)^n − 1`
///
/// Unlike the other calculations this never yields "no result"; invalid
/// input produces a zero APR/APY pair.
pub fn apr_to_apy(input: &ApyInput) -> ApyResult {
    let periods = input.frequency.periods_per_year();
    if !positive(input.nominal_rate_pct) || periods == 0 {
        log::debug!(
            "APY conversion skipped: rate {} with {} periods per year",
            input.nominal_rate_pct,
            periods
        );
        return ApyResult::default();
    }

    // expm1 form keeps tiny rates from cancelling to zero
    let rate = input.nominal_rate_pct / 100.0;
    let n = periods as f64;
    let apy = (n * (rate / n).ln_1p()).exp_m1();

    ApyResult {
        apr_pct: input.nominal_rate_pct,
        apy_pct: apy * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::CompoundingFrequency;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn input(principal: f64, rate: f64, years: f64, frequency: CompoundingFrequency) -> CompoundInput {
        CompoundInput {
            principal,
            annual_rate_pct: rate,
            years,
            frequency,
        }
    }

    #[test]
    fn test_reference_monthly_compounding() {
        let result = compound_interest(&input(10_000.0, 5.0, 10.0, CompoundingFrequency::Monthly)).unwrap();
        assert_abs_diff_eq!(result.future_value, 16_470.09, epsilon = 0.01);
        assert_abs_diff_eq!(result.total_interest, 6_470.09, epsilon = 0.01);
        assert_eq!(result.compound_frequency, Some(12));
        assert_eq!(result.kind, CalculationKind::CompoundInterest);
    }

    #[test]
    fn test_zero_rate_returns_principal() {
        let result = compound_interest(&input(2_500.0, 0.0, 7.0, CompoundingFrequency::Daily)).unwrap();
        assert_eq!(result.future_value, 2_500.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_future_value_never_below_principal() {
        for &rate in &[0.0, 0.5, 3.0, 12.0, 45.0] {
            for &years in &[0.25, 1.0, 5.0, 30.0] {
                for freq in [
                    CompoundingFrequency::Annually,
                    CompoundingFrequency::Quarterly,
                    CompoundingFrequency::Daily,
                    CompoundingFrequency::Custom(52),
                ] {
                    let result = compound_interest(&input(1_000.0, rate, years, freq)).unwrap();
                    assert!(result.future_value >= 1_000.0);
                }
            }
        }
    }

    #[test]
    fn test_more_frequent_compounding_grows_faster() {
        let annual = compound_interest(&input(1_000.0, 6.0, 5.0, CompoundingFrequency::Annually)).unwrap();
        let daily = compound_interest(&input(1_000.0, 6.0, 5.0, CompoundingFrequency::Daily)).unwrap();
        assert!(daily.future_value > annual.future_value);
    }

    #[test]
    fn test_invalid_inputs_produce_no_result() {
        let monthly = CompoundingFrequency::Monthly;
        assert!(compound_interest(&input(0.0, 5.0, 10.0, monthly)).is_none());
        assert!(compound_interest(&input(-100.0, 5.0, 10.0, monthly)).is_none());
        assert!(compound_interest(&input(100.0, -1.0, 10.0, monthly)).is_none());
        assert!(compound_interest(&input(100.0, 5.0, 0.0, monthly)).is_none());
        assert!(compound_interest(&input(100.0, 5.0, 10.0, CompoundingFrequency::Custom(0))).is_none());
        assert!(compound_interest(&input(f64::NAN, 5.0, 10.0, monthly)).is_none());
    }

    #[test]
    fn test_apy_reference() {
        let result = apr_to_apy(&ApyInput {
            nominal_rate_pct: 5.0,
            frequency: CompoundingFrequency::Monthly,
        });
        assert_abs_diff_eq!(result.apy_pct, 5.1162, epsilon = 0.0001);
        assert_eq!(result.apr_pct, 5.0);
    }

    #[test]
    fn test_apy_at_least_nominal() {
        for &rate in &[0.1, 2.0, 5.0, 20.0] {
            for periods in [2, 4, 12, 365] {
                let result = apr_to_apy(&ApyInput {
                    nominal_rate_pct: rate,
                    frequency: CompoundingFrequency::from_periods(periods),
                });
                assert!(result.apy_pct >= rate);
            }
        }
    }

    #[test]
    fn test_apy_tiny_rate_not_lost() {
        let result = apr_to_apy(&ApyInput {
            nominal_rate_pct: 1e-14,
            frequency: CompoundingFrequency::Monthly,
        });
        assert!(result.apy_pct > 0.0);
        assert_relative_eq!(result.apy_pct, 1e-14, max_relative = 1e-9);
    }

    #[test]
    fn test_apy_annual_equals_nominal() {
        let result = apr_to_apy(&ApyInput {
            nominal_rate_pct: 4.0,
            frequency: CompoundingFrequency::Annually,
        });
        assert_abs_diff_eq!(result.apy_pct, 4.0, epsilon = 1e-10);
    }

    #[test]
    fn test_apy_invalid_is_zero() {
        let zero = apr_to_apy(&ApyInput {
            nominal_rate_pct: 0.0,
            frequency: CompoundingFrequency::Monthly,
        });
        assert_eq!(zero, ApyResult::default());

        let no_periods = apr_to_apy(&ApyInput {
            nominal_rate_pct: 5.0,
            frequency: CompoundingFrequency::Custom(0),
        });
        assert_eq!(no_periods, ApyResult { apr_pct: 0.0, apy_pct: 0.0 });
    }
}
