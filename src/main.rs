//! Financial calculator CLI
//!
//! Runs one calculation per invocation and prints the result as text or JSON.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use fincalc::format::{
    format_percent, render_growth_timeline, render_ladder, render_schedule, render_summary,
};
use fincalc::export::clipboard_summary;
use fincalc::{
    ApyInput, CalculationResult, Calculator, CompoundInput, ContributionInput, DepositInput,
    LadderInput, LoanInput,
};

#[derive(Parser, Debug)]
#[command(name = "fincalc", version, about = "Compound interest, loan, savings and CD ladder calculator")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Write the calculation to a CSV file
    #[arg(long, global = true, value_name = "PATH")]
    export: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Values are read like form fields: anything non-numeric counts as zero.
#[derive(Subcommand, Debug)]
enum Command {
    /// Future value of a lump sum
    Compound {
        #[arg(long, default_value = "10000")]
        principal: String,
        /// Annual rate in percent
        #[arg(long, default_value = "5")]
        rate: String,
        #[arg(long, default_value = "10")]
        years: String,
        /// Periods per year (1, 2, 4, 12, 365) or a label such as "monthly"
        #[arg(long, default_value = "12")]
        frequency: String,
    },
    /// Monthly payment and opening schedule of a loan
    Loan {
        #[arg(long, default_value = "250000")]
        amount: String,
        #[arg(long, default_value = "4.5")]
        rate: String,
        #[arg(long, default_value = "30")]
        years: String,
    },
    /// Investment growth with monthly contributions
    Invest(ContributionArgs),
    /// Savings account growth with monthly deposits
    Savings(ContributionArgs),
    /// Fixed deposit maturity
    Deposit {
        #[arg(long, default_value = "50000")]
        amount: String,
        #[arg(long, default_value = "6.5")]
        rate: String,
        #[arg(long, default_value = "12")]
        tenure: String,
        /// "months" or "years"
        #[arg(long, default_value = "months")]
        unit: String,
        #[arg(long, default_value = "quarterly")]
        compounding: String,
    },
    /// Effective annual yield of a nominal rate
    Apy {
        #[arg(long, default_value = "5")]
        rate: String,
        #[arg(long, default_value = "12")]
        frequency: String,
    },
    /// CD ladder breakdown
    Ladder {
        #[arg(long, default_value = "100000")]
        amount: String,
        #[arg(long, default_value = "5")]
        rungs: String,
        #[arg(long, default_value = "4")]
        start_rate: String,
        #[arg(long, default_value = "6")]
        end_rate: String,
    },
}

#[derive(Args, Debug)]
struct ContributionArgs {
    #[arg(long, default_value = "5000")]
    initial: String,
    #[arg(long, default_value = "500")]
    monthly: String,
    #[arg(long, default_value = "7")]
    rate: String,
    #[arg(long, default_value = "20")]
    years: String,
}

impl ContributionArgs {
    fn input(&self) -> ContributionInput {
        ContributionInput::from_form(&self.initial, &self.monthly, &self.rate, &self.years)
    }
}

fn print_result(calc: &Calculator, result: &CalculationResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    print!("{}", render_summary(result));
    if !result.schedule.is_empty() {
        println!("\nPayment Schedule (first {} months):", result.schedule.len());
        print!("{}", render_schedule(&result.schedule));
    }
    if !result.growth_timeline.is_empty() {
        println!();
        print!(
            "{}",
            render_growth_timeline(
                &result.growth_timeline,
                calc.config().growth_timeline_display_rows
            )
        );
    }
    if !result.ladder.is_empty() {
        println!("\nLadder Breakdown:");
        print!("{}", render_ladder(&result.ladder));
    }
    println!("\n{}", clipboard_summary(result));
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut calc = match &cli.config {
        Some(path) => Calculator::from_config_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Calculator::new(),
    };

    let result = match &cli.command {
        Command::Apy { rate, frequency } => {
            let apy = calc.apy(&ApyInput::from_form(rate, frequency));
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&apy)?);
            } else {
                println!("APR: {}", format_percent(apy.apr_pct));
                println!("APY: {}", format_percent(apy.apy_pct));
            }
            return Ok(());
        }
        Command::Compound { principal, rate, years, frequency } => {
            calc.compound_interest(&CompoundInput::from_form(principal, rate, years, frequency))
        }
        Command::Loan { amount, rate, years } => {
            calc.loan_payment(&LoanInput::from_form(amount, rate, years))
        }
        Command::Invest(args) => calc.investment_growth(&args.input()),
        Command::Savings(args) => calc.savings_growth(&args.input()),
        Command::Deposit { amount, rate, tenure, unit, compounding } => {
            calc.fixed_deposit(&DepositInput::from_form(amount, rate, tenure, unit, compounding))
        }
        Command::Ladder { amount, rungs, start_rate, end_rate } => {
            calc.cd_ladder(&LadderInput::from_form(amount, rungs, start_rate, end_rate))
        }
    };

    let Some(result) = result else {
        eprintln!("No result: check that amounts, rates and terms are valid");
        return Ok(());
    };

    print_result(&calc, &result, cli.json)?;

    if let Some(path) = &cli.export {
        calc.export_to(Some(path))
            .with_context(|| format!("failed to export to {}", path.display()))?;
        if !cli.json {
            println!("Results written to: {}", path.display());
        }
    }

    Ok(())
}
