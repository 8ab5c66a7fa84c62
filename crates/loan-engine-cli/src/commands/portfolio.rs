use clap::Args;
use serde_json::Value;

use loan_engine_core::portfolio::{self, LoanSnapshot};

use crate::input;

/// Arguments for portfolio metrics
#[derive(Args)]
pub struct PortfolioArgs {
    /// Path to a JSON file holding an array of loan snapshots
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_portfolio(args: PortfolioArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let snapshots: Vec<LoanSnapshot> = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input file (or piped JSON) is required for portfolio metrics".into());
    };

    let result = portfolio::summarize(&snapshots)?;
    Ok(serde_json::to_value(result)?)
}
