//! Load batches of calculation requests from CSV
//!
//! Expected columns (all optional except `kind`):
//! `kind,principal,rate,years,frequency,contribution,rungs,end_rate,tenure_unit`
//!
//! Numeric cells go through the same lenient parsing as form fields, so a
//! blank or malformed cell reads as zero rather than failing the whole file.

use csv::{Reader, Trim};
use std::path::Path;

use super::parse::{integer_or, number_or, parse_number, periods_from_number};
use super::{
    CompoundInput, CompoundingFrequency, ContributionInput, DepositInput, LadderInput, LoanInput,
    TenureUnit,
};
use crate::error::{CalcError, Result};
use crate::formulas::CalculationKind;

/// Raw CSV row; every cell is kept as text until the kind is known
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct CsvRow {
    kind: String,
    principal: String,
    rate: String,
    years: String,
    frequency: String,
    contribution: String,
    rungs: String,
    end_rate: String,
    tenure_unit: String,
}

/// A single calculation to run, tagged by kind
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum CalculationRequest {
    Compound(CompoundInput),
    Loan(LoanInput),
    Investment(ContributionInput),
    Savings(ContributionInput),
    Deposit(DepositInput),
    Ladder(LadderInput),
}

impl CalculationRequest {
    pub fn kind(&self) -> CalculationKind {
        match self {
            CalculationRequest::Compound(_) => CalculationKind::CompoundInterest,
            CalculationRequest::Loan(_) => CalculationKind::LoanPayment,
            CalculationRequest::Investment(_) => CalculationKind::InvestmentGrowth,
            CalculationRequest::Savings(_) => CalculationKind::SavingsGrowth,
            CalculationRequest::Deposit(_) => CalculationKind::FixedDeposit,
            CalculationRequest::Ladder(_) => CalculationKind::CdLadder,
        }
    }
}

impl CsvRow {
    fn to_request(self) -> Result<CalculationRequest> {
        let kind = CalculationKind::from_name(&self.kind)
            .ok_or_else(|| CalcError::UnknownKind(self.kind.clone()))?;

        let principal = parse_number(&self.principal);
        let rate = parse_number(&self.rate);
        let years = parse_number(&self.years);

        let request = match kind {
            CalculationKind::CompoundInterest => CalculationRequest::Compound(CompoundInput {
                principal,
                annual_rate_pct: rate,
                years,
                frequency: self.frequency(CompoundingFrequency::Annually),
            }),
            CalculationKind::LoanPayment => CalculationRequest::Loan(LoanInput {
                principal,
                annual_rate_pct: rate,
                term_years: years,
            }),
            CalculationKind::InvestmentGrowth | CalculationKind::SavingsGrowth => {
                let input = ContributionInput {
                    initial: principal,
                    monthly_contribution: parse_number(&self.contribution),
                    annual_rate_pct: rate,
                    years,
                };
                if kind == CalculationKind::SavingsGrowth {
                    CalculationRequest::Savings(input)
                } else {
                    CalculationRequest::Investment(input)
                }
            }
            CalculationKind::FixedDeposit => CalculationRequest::Deposit(DepositInput {
                principal,
                annual_rate_pct: rate,
                tenure: years,
                tenure_unit: TenureUnit::from_label(&self.tenure_unit).unwrap_or(TenureUnit::Years),
                frequency: self.frequency(CompoundingFrequency::Quarterly),
            }),
            CalculationKind::CdLadder => CalculationRequest::Ladder(LadderInput {
                total_amount: principal,
                rungs: u32::try_from(integer_or(&self.rungs, 5)).unwrap_or(0),
                start_rate_pct: rate,
                end_rate_pct: parse_number(&self.end_rate),
            }),
        };

        Ok(request)
    }

    fn frequency(&self, fallback: CompoundingFrequency) -> CompoundingFrequency {
        if self.frequency.trim().is_empty() {
            return fallback;
        }
        CompoundingFrequency::from_label(&self.frequency).unwrap_or_else(|| {
            periods_from_number(number_or(&self.frequency, fallback.periods_per_year() as f64))
        })
    }
}

/// Load all requests from a CSV file
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<CalculationRequest>> {
    let reader = csv::ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)?;
    collect_requests(reader)
}

/// Load requests from any reader (e.g., string buffer, stdin)
pub fn load_requests_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<CalculationRequest>> {
    let csv_reader = csv::ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    collect_requests(csv_reader)
}

fn collect_requests<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<CalculationRequest>> {
    let mut requests = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        requests.push(row.to_request()?);
    }

    log::info!("Loaded {} calculation requests", requests.len());
    Ok(requests)
}
