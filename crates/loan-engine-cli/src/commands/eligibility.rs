use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_engine_core::eligibility::capacity::{
    self, EligibilityInput, DEFAULT_MAX_DEBT_SERVICE_RATIO,
};
use loan_engine_core::eligibility::classify;

use crate::input;

/// Arguments for an eligibility check
#[derive(Args)]
pub struct EligibilityArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Net monthly income
    #[arg(long)]
    pub monthly_income: Option<Decimal>,

    /// Existing monthly obligations (EMIs, rent commitments)
    #[arg(long, alias = "obligations")]
    pub existing_obligations: Option<Decimal>,

    /// Annual rate (percentage) of the proposed loan
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Proposed tenure in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// FOIR cap as a fraction in (0, 1]
    #[arg(long, default_value_t = DEFAULT_MAX_DEBT_SERVICE_RATIO)]
    pub foir: Decimal,

    /// Requested principal to classify; omit to report capacity only
    #[arg(long)]
    pub requested: Option<Decimal>,
}

pub fn run_eligibility(args: EligibilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let eligibility_input: EligibilityInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        EligibilityInput {
            monthly_income: args
                .monthly_income
                .ok_or("--monthly-income is required (or provide --input)")?,
            existing_monthly_obligations: args
                .existing_obligations
                .ok_or("--existing-obligations is required (or provide --input)")?,
            proposed_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            proposed_term_months: args
                .term_months
                .ok_or("--term-months is required (or provide --input)")?,
            max_debt_service_ratio: args.foir,
        }
    };

    match args.requested {
        Some(requested) => {
            let result = classify::classify(&eligibility_input, requested)?;
            Ok(serde_json::to_value(result)?)
        }
        None => Ok(serde_json::json!({
            "max_principal": capacity::max_serviceable_principal(&eligibility_input),
            "available_monthly_capacity":
                capacity::available_monthly_capacity(&eligibility_input),
        })),
    }
}
