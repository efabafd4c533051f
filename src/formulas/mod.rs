//! Financial formula engine
//!
//! Every calculation is a pure function of its input. Invalid input never
//! panics or errors: the calculation yields `None` ("no result") and the
//! reason is logged at debug level. Rates come in as percentages and are
//! converted to decimals internally; results keep full precision and are
//! only rounded when formatted.

mod compound;
mod contributions;
mod deposit;
mod ladder;
mod loan;
mod result;

pub use compound::{apr_to_apy, compound_interest, growth_factor};
pub use contributions::{annuity_future_value, future_value_with_contributions, savings_growth};
pub use deposit::fixed_deposit;
pub use ladder::cd_ladder;
pub use loan::{
    amortization_schedule, amortizing_loan_payment, amortizing_loan_payment_with_limit,
    level_payment,
};
pub use result::{ApyResult, CalculationKind, CalculationResult, GrowthPoint, LadderRung, ScheduleRow};

use crate::error::CalcError;
use crate::inputs::CalculationRequest;

/// Longest loan term or deposit tenure accepted, in years
pub const MAX_TERM_YEARS: f64 = 100.0;

/// Most CDs accepted in one ladder
pub const MAX_LADDER_RUNGS: u32 = 100;

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn skip<T>(err: CalcError) -> Option<T> {
    log::debug!("{}", err);
    None
}

/// Run a tagged request; loans attach `schedule_periods` schedule rows
pub fn evaluate(request: &CalculationRequest, schedule_periods: usize) -> Option<CalculationResult> {
    match request {
        CalculationRequest::Compound(input) => compound_interest(input),
        CalculationRequest::Loan(input) => amortizing_loan_payment_with_limit(input, schedule_periods),
        CalculationRequest::Investment(input) => future_value_with_contributions(input),
        CalculationRequest::Savings(input) => savings_growth(input),
        CalculationRequest::Deposit(input) => fixed_deposit(input),
        CalculationRequest::Ladder(input) => cd_ladder(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{LadderInput, LoanInput};

    #[test]
    fn test_evaluate_dispatches_by_kind() {
        let loan = CalculationRequest::Loan(LoanInput {
            principal: 10_000.0,
            annual_rate_pct: 5.0,
            term_years: 3.0,
        });
        let result = evaluate(&loan, 6).unwrap();
        assert_eq!(result.kind, CalculationKind::LoanPayment);
        assert_eq!(result.schedule.len(), 6);

        let ladder = CalculationRequest::Ladder(LadderInput {
            total_amount: 0.0,
            rungs: 3,
            start_rate_pct: 1.0,
            end_rate_pct: 2.0,
        });
        assert!(evaluate(&ladder, 12).is_none());
    }

    #[test]
    fn test_value_guards() {
        assert!(positive(1.0));
        assert!(!positive(0.0));
        assert!(!positive(f64::INFINITY));
        assert!(non_negative(0.0));
        assert!(!non_negative(-0.01));
        assert!(!non_negative(f64::NAN));
    }
}
