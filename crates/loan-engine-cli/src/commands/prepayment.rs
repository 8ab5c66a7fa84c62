use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_engine_core::prepayment::analyze::{self, PrepaymentRequest};
use loan_engine_core::types::LoanTerms;

use crate::input;

/// Arguments for prepayment analysis
#[derive(Args)]
pub struct PrepaymentArgs {
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

    /// Lump sum paid over and above the scheduled EMI
    #[arg(long, alias = "extra")]
    pub extra_payment: Option<Decimal>,

    /// 1-based month after whose EMI the lump sum is applied
    #[arg(long)]
    pub after_month: Option<u32>,
}

pub fn run_prepayment(args: PrepaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: PrepaymentRequest = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        PrepaymentRequest {
            terms: LoanTerms::new(
                args.principal
                    .ok_or("--principal is required (or provide --input)")?,
                args.rate.ok_or("--rate is required (or provide --input)")?,
                args.term_months
                    .ok_or("--term-months is required (or provide --input)")?,
            ),
            extra_payment: args
                .extra_payment
                .ok_or("--extra-payment is required (or provide --input)")?,
            after_month: args
                .after_month
                .ok_or("--after-month is required (or provide --input)")?,
        }
    };

    let result = analyze::analyze(&request)?;
    Ok(serde_json::to_value(result)?)
}
