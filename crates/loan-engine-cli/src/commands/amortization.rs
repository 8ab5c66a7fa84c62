use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_engine_core::amortization::emi;
use loan_engine_core::amortization::schedule::{self, ScheduleInput};
use loan_engine_core::types::LoanTerms;

use crate::input;

/// Arguments for a quick EMI calculation
#[derive(Args)]
pub struct InstallmentArgs {
    /// Path to JSON input file with loan terms (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a percentage (e.g. 10.5)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in months
    #[arg(long)]
    pub term_months: Option<u32>,
}

/// Arguments for amortisation schedule generation
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a percentage
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Due date of the first EMI (ISO date, e.g. 2026-09-05)
    #[arg(long)]
    pub first_payment_date: Option<NaiveDate>,
}

fn terms_from_flags(
    principal: Option<Decimal>,
    rate: Option<Decimal>,
    term_months: Option<u32>,
) -> Result<LoanTerms, Box<dyn std::error::Error>> {
    Ok(LoanTerms::new(
        principal.ok_or("--principal is required (or provide --input)")?,
        rate.ok_or("--rate is required (or provide --input)")?,
        term_months.ok_or("--term-months is required (or provide --input)")?,
    ))
}

pub fn run_installment(args: InstallmentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms: LoanTerms = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        terms_from_flags(args.principal, args.rate, args.term_months)?
    };

    Ok(serde_json::json!({
        "installment": emi::calculate_installment(&terms),
        "total_payment": emi::total_payment(&terms),
        "total_interest": emi::total_interest(&terms),
    }))
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: ScheduleInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ScheduleInput {
            terms: terms_from_flags(args.principal, args.rate, args.term_months)?,
            first_payment_date: args.first_payment_date,
        }
    };

    let result = schedule::generate_schedule(&schedule_input)?;
    Ok(serde_json::to_value(result)?)
}
