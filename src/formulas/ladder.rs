//! CD ladder: equal deposits across rungs with linearly stepped rates

use super::{
    non_negative, positive, skip, CalculationKind, CalculationResult, LadderRung, MAX_LADDER_RUNGS,
};
use crate::error::{CalcError, Result};
use crate::inputs::LadderInput;

fn validate(input: &LadderInput) -> Result<()> {
    let kind = CalculationKind::CdLadder;
    if !positive(input.total_amount) {
        return Err(CalcError::invalid(kind, "total amount must be positive"));
    }
    if input.rungs == 0 {
        return Err(CalcError::invalid(kind, "ladder needs at least one rung"));
    }
    if input.rungs > MAX_LADDER_RUNGS {
        return Err(CalcError::invalid(kind, "ladder has more rungs than allowed"));
    }
    if !non_negative(input.start_rate_pct) || !non_negative(input.end_rate_pct) {
        return Err(CalcError::invalid(kind, "rates must not be negative"));
    }
    Ok(())
}

/// Rate increment between consecutive rungs; zero for a single rung
fn rate_step(start: f64, end: f64, rungs: u32) -> f64 {
    if rungs <= 1 {
        0.0
    } else {
        (end - start) / (rungs - 1) as f64
    }
}

/// Split `total_amount` evenly across `rungs` CDs
///
/// Rung `i` earns `start + step·i` and every rung compounds annually over
/// `rungs` years. The result's rate is the midpoint of the two end rates.
pub fn cd_ladder(input: &LadderInput) -> Option<CalculationResult> {
    if let Err(err) = validate(input) {
        return skip(err);
    }

    let rungs = input.rungs;
    let amount = input.total_amount / rungs as f64;
    let start = input.start_rate_pct / 100.0;
    let step = rate_step(start, input.end_rate_pct / 100.0, rungs);

    let ladder: Vec<LadderRung> = (0..rungs)
        .map(|i| {
            let rate = start + step * i as f64;
            LadderRung {
                rung: i + 1,
                amount,
                rate_pct: rate * 100.0,
                maturity_value: amount * (1.0 + rate).powi(rungs as i32),
                years: rungs,
            }
        })
        .collect();

    let total_maturity: f64 = ladder.iter().map(|rung| rung.maturity_value).sum();

    let mut result = CalculationResult::new(
        CalculationKind::CdLadder,
        input.total_amount,
        (input.start_rate_pct + input.end_rate_pct) / 2.0,
        rungs as f64,
        total_maturity,
    );
    result.ladder = ladder;

    Some(result)
}
