//! Display formatting for amounts, rates and result tables

use std::fmt::Write as _;

use crate::formulas::{CalculationResult, GrowthPoint, LadderRung, ScheduleRow};

/// US-dollar amount with thousands separators: `$16,470.09`, `-$5.00`
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${}", amount);
    }

    let cents = format!("{:.2}", amount.abs());
    let (whole, fraction) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = amount < 0.0 && cents.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction}")
}

/// Percentage with two decimals: `5.12%`
pub fn format_percent(rate_pct: f64) -> String {
    format!("{:.2}%", rate_pct)
}

/// Shortest decimal form of a term (`10`, `2.5`)
pub fn format_years(years: f64) -> String {
    format!("{}", years)
}

/// Headline figures of a result, one per line
pub fn render_summary(result: &CalculationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} Result", result.kind);
    let _ = writeln!(out, "  Principal:      {}", format_currency(result.principal));
    let _ = writeln!(out, "  Rate:           {}", format_percent(result.rate_pct));
    let _ = writeln!(out, "  Time:           {} years", format_years(result.time_years));
    if let Some(periods) = result.compound_frequency {
        let _ = writeln!(out, "  Compounding:    {} per year", periods);
    }
    if let Some(payment) = result.monthly_payment {
        let _ = writeln!(out, "  Monthly Payment: {}", format_currency(payment));
    }
    let _ = writeln!(out, "  Future Value:   {}", format_currency(result.future_value));
    let _ = writeln!(out, "  Total Interest: {}", format_currency(result.total_interest));
    out
}

pub fn render_schedule(rows: &[ScheduleRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>6} {:>14} {:>14} {:>14} {:>16}",
        "Month", "Payment", "Principal", "Interest", "Balance"
    );
    let _ = writeln!(out, "{}", "-".repeat(68));
    for row in rows {
        let _ = writeln!(
            out,
            "{:>6} {:>14} {:>14} {:>14} {:>16}",
            row.period,
            format_currency(row.payment),
            format_currency(row.principal_portion),
            format_currency(row.interest_portion),
            format_currency(row.remaining_balance),
        );
    }
    out
}

/// Quarterly growth table, limited to the first `max_rows` quarters
pub fn render_growth_timeline(points: &[GrowthPoint], max_rows: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Growth Timeline (Quarterly)");
    let _ = writeln!(out, "{:>8} {:>7} {:>16} {:>14}", "Quarter", "Months", "Amount", "Interest");
    for point in points.iter().take(max_rows) {
        let _ = writeln!(
            out,
            "{:>8} {:>7} {:>16} {:>14}",
            format!("Q{}", point.quarter()),
            point.month,
            format_currency(point.amount),
            format_currency(point.interest),
        );
    }
    if points.len() > max_rows {
        let _ = writeln!(out, "... ({} more quarters)", points.len() - max_rows);
    }
    out
}

pub fn render_ladder(rungs: &[LadderRung]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>6} {:>14} {:>8} {:>16}", "CD", "Amount", "Rate", "Maturity");
    for rung in rungs {
        let _ = writeln!(
            out,
            "{:>6} {:>14} {:>8} {:>16}",
            format!("CD {}", rung.rung),
            format_currency(rung.amount),
            format_percent(rung.rate_pct),
            format_currency(rung.maturity_value),
        );
    }
    out
}
