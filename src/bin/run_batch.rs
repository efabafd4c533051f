//! Evaluate a CSV file of calculation requests
//!
//! Usage: run_batch <requests.csv> [output.csv]
//!
//! Requests are independent, so they are evaluated in parallel. Rows whose
//! input is invalid produce no result and are reported, not exported.

use anyhow::{Context, Result};
use fincalc::config::DEFAULT_SCHEDULE_DISPLAY_PERIODS;
use fincalc::export::export_to_path;
use fincalc::formulas::evaluate;
use fincalc::inputs::load_requests;
use fincalc::CalculationResult;
use rayon::prelude::*;
use std::env;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(input_path) = args.get(1) else {
        eprintln!("Usage: run_batch <requests.csv> [output.csv]");
        std::process::exit(2);
    };
    let output_path = args
        .get(2)
        .map(String::as_str)
        .unwrap_or(fincalc::config::DEFAULT_EXPORT_FILE_NAME);

    let start = Instant::now();
    println!("Loading requests from {}...", input_path);
    let requests = load_requests(input_path)
        .with_context(|| format!("failed to load requests from {}", input_path))?;
    println!("Loaded {} requests in {:?}", requests.len(), start.elapsed());

    let calc_start = Instant::now();
    let outcomes: Vec<Option<CalculationResult>> = requests
        .par_iter()
        .map(|request| evaluate(request, DEFAULT_SCHEDULE_DISPLAY_PERIODS))
        .collect();
    println!("Calculations complete in {:?}", calc_start.elapsed());

    let mut results = Vec::with_capacity(outcomes.len());
    for (row, (request, outcome)) in requests.iter().zip(outcomes).enumerate() {
        match outcome {
            Some(result) => results.push(result),
            // Row numbers count the header as line 1
            None => log::warn!("Row {}: {} produced no result", row + 2, request.kind()),
        }
    }

    export_to_path(output_path, &results)
        .with_context(|| format!("failed to write {}", output_path))?;

    println!("\nSummary:");
    println!("  Requests:  {}", requests.len());
    println!("  Results:   {}", results.len());
    println!("  Skipped:   {}", requests.len() - results.len());
    println!("  Output:    {}", output_path);

    Ok(())
}
