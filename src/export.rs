//! CSV export and clipboard text for calculation results

use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::format::{format_currency, format_years};
use crate::formulas::CalculationResult;

pub const EXPORT_HEADER: [&str; 7] = [
    "Type",
    "Principal",
    "Rate (%)",
    "Time (Years)",
    "Future Value",
    "Total Interest",
    "Monthly Payment",
];

/// Cells of one export row; the payment column is left off when there is none
fn export_record(result: &CalculationResult) -> Vec<String> {
    let mut record = vec![
        result.kind.label().to_string(),
        format!("{:.2}", result.principal),
        format!("{:.2}", result.rate_pct),
        format_years(result.time_years),
        format!("{:.2}", result.future_value),
        format!("{:.2}", result.total_interest),
    ];
    if let Some(payment) = result.monthly_payment.filter(|p| *p != 0.0) {
        record.push(format!("{:.2}", payment));
    }
    record
}

/// Write the header and one row per result
pub fn write_results<'a, W, I>(writer: W, results: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a CalculationResult>,
{
    let mut csv_writer = WriterBuilder::new().flexible(true).from_writer(writer);
    csv_writer.write_record(EXPORT_HEADER)?;
    for result in results {
        csv_writer.write_record(export_record(result))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render results as CSV text
pub fn results_to_csv<'a, I>(results: I) -> Result<String>
where
    I: IntoIterator<Item = &'a CalculationResult>,
{
    let mut buffer = Vec::new();
    write_results(&mut buffer, results)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write results to a CSV file, replacing any existing file
pub fn export_to_path<'a, P, I>(path: P, results: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a CalculationResult>,
{
    let file = File::create(path.as_ref())?;
    write_results(file, results)?;
    log::info!("Exported calculations to {}", path.as_ref().display());
    Ok(())
}

/// One-line summary suitable for copying: `Loan Payment: Future Value: $1.00, Interest: $0.50`
pub fn clipboard_summary(result: &CalculationResult) -> String {
    format!(
        "{}: Future Value: {}, Interest: {}",
        result.kind.label(),
        format_currency(result.future_value),
        format_currency(result.total_interest)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::{amortizing_loan_payment, compound_interest, CalculationKind};
    use crate::inputs::{CompoundInput, CompoundingFrequency, LoanInput};

    fn compound() -> CalculationResult {
        compound_interest(&CompoundInput {
            principal: 10_000.0,
            annual_rate_pct: 5.0,
            years: 10.0,
            frequency: CompoundingFrequency::Monthly,
        })
        .unwrap()
    }

    fn loan() -> CalculationResult {
        amortizing_loan_payment(&LoanInput {
            principal: 250_000.0,
            annual_rate_pct: 4.5,
            term_years: 30.0,
        })
        .unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let results = vec![loan(), compound()];
        let csv = results_to_csv(&results).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "Type,Principal,Rate (%),Time (Years),Future Value,Total Interest,Monthly Payment"
        );
        assert!(lines[1].starts_with("Loan Payment,250000.00,4.50,30,"));
        assert!(lines[1].ends_with(",1266.71"));
        assert_eq!(lines[2], "Compound Interest,10000.00,5.00,10,16470.09,6470.09");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_zero_payment_omitted() {
        let mut result = CalculationResult::new(CalculationKind::LoanPayment, 1.0, 0.0, 1.0, 1.0);
        result.monthly_payment = Some(0.0);
        assert_eq!(export_record(&result).len(), 6);
    }

    #[test]
    fn test_fractional_time() {
        let mut result = compound();
        result.time_years = 2.5;
        assert_eq!(export_record(&result)[3], "2.5");
    }

    #[test]
    fn test_clipboard_summary() {
        assert_eq!(
            clipboard_summary(&compound()),
            "Compound Interest: Future Value: $16,470.09, Interest: $6,470.09"
        );
    }
}
