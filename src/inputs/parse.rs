//! Lenient parsing of form text into calculation inputs
//!
//! Form fields follow browser `parseFloat` rules: the longest numeric prefix
//! wins and anything unparseable reads as zero. Fields with a fallback
//! (compounding frequency, ladder rungs) substitute it when the parse is zero.

use super::{
    ApyInput, CompoundInput, CompoundingFrequency, ContributionInput, DepositInput, LadderInput,
    LoanInput, TenureUnit,
};

/// Frequency used when the frequency field is blank or zero
const FALLBACK_PERIODS_PER_YEAR: f64 = 1.0;

/// Rung count used when the ladder field is blank or zero
const FALLBACK_LADDER_RUNGS: i64 = 5;

/// Length of the longest prefix of `s` that reads as a decimal number
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when followed by at least one digit
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

/// Parse a numeric form field; non-numeric text reads as 0
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let len = numeric_prefix_len(trimmed);
    trimmed[..len]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse a numeric field, substituting `default` for zero or garbage
pub fn number_or(text: &str, default: f64) -> f64 {
    let value = parse_number(text);
    if value == 0.0 {
        default
    } else {
        value
    }
}

/// Integer parse with `parseInt` rules: sign and leading digits only
pub fn parse_integer(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digit_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digit_start {
        return 0;
    }
    trimmed[..end].parse::<i64>().unwrap_or(0)
}

pub fn integer_or(text: &str, default: i64) -> i64 {
    match parse_integer(text) {
        0 => default,
        value => value,
    }
}

/// Read a frequency field holding either a period count ("12") or a label
pub fn parse_frequency(text: &str) -> Option<CompoundingFrequency> {
    if let Some(freq) = CompoundingFrequency::from_label(text) {
        return Some(freq);
    }
    let trimmed = text.trim_start();
    if numeric_prefix_len(trimmed) == 0 {
        return None;
    }
    Some(periods_from_number(parse_number(trimmed)))
}

/// Compounding is per whole period, so counts round to the nearest integer
///
/// Anything that rounds below one collapses to the invalid `Custom(0)`.
pub(crate) fn periods_from_number(periods: f64) -> CompoundingFrequency {
    let rounded = periods.round();
    if rounded < 1.0 {
        CompoundingFrequency::Custom(0)
    } else {
        CompoundingFrequency::from_periods(rounded as u32)
    }
}

impl CompoundInput {
    pub fn from_form(principal: &str, rate: &str, years: &str, frequency: &str) -> Self {
        let frequency = CompoundingFrequency::from_label(frequency).unwrap_or_else(|| {
            periods_from_number(number_or(frequency, FALLBACK_PERIODS_PER_YEAR))
        });
        Self {
            principal: parse_number(principal),
            annual_rate_pct: parse_number(rate),
            years: parse_number(years),
            frequency,
        }
    }
}

impl LoanInput {
    pub fn from_form(principal: &str, rate: &str, term_years: &str) -> Self {
        Self {
            principal: parse_number(principal),
            annual_rate_pct: parse_number(rate),
            term_years: parse_number(term_years),
        }
    }
}

impl ContributionInput {
    pub fn from_form(initial: &str, monthly: &str, rate: &str, years: &str) -> Self {
        Self {
            initial: parse_number(initial),
            monthly_contribution: parse_number(monthly),
            annual_rate_pct: parse_number(rate),
            years: parse_number(years),
        }
    }
}

impl ApyInput {
    pub fn from_form(nominal_rate: &str, frequency: &str) -> Self {
        let frequency = CompoundingFrequency::from_label(frequency).unwrap_or_else(|| {
            periods_from_number(number_or(frequency, FALLBACK_PERIODS_PER_YEAR))
        });
        Self {
            nominal_rate_pct: parse_number(nominal_rate),
            frequency,
        }
    }
}

impl DepositInput {
    /// Unknown tenure units read as months and unknown compounding as quarterly
    pub fn from_form(
        principal: &str,
        rate: &str,
        tenure: &str,
        tenure_unit: &str,
        compounding: &str,
    ) -> Self {
        Self {
            principal: parse_number(principal),
            annual_rate_pct: parse_number(rate),
            tenure: parse_number(tenure),
            tenure_unit: TenureUnit::from_label(tenure_unit).unwrap_or_default(),
            frequency: CompoundingFrequency::from_label(compounding)
                .unwrap_or(CompoundingFrequency::Quarterly),
        }
    }
}

impl LadderInput {
    pub fn from_form(total: &str, rungs: &str, start_rate: &str, end_rate: &str) -> Self {
        let rungs = integer_or(rungs, FALLBACK_LADDER_RUNGS);
        Self {
            total_amount: parse_number(total),
            rungs: u32::try_from(rungs).unwrap_or(0),
            start_rate_pct: parse_number(start_rate),
            end_rate_pct: parse_number(end_rate),
        }
    }
}
