mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::amortization::{InstallmentArgs, ScheduleArgs};
use commands::eligibility::EligibilityArgs;
use commands::portfolio::PortfolioArgs;
use commands::prepayment::PrepaymentArgs;

/// Loan EMI, eligibility, and prepayment calculations
#[derive(Parser)]
#[command(
    name = "emi",
    version,
    about = "Loan EMI, eligibility, and prepayment calculations",
    long_about = "A CLI for loan back-office calculations with decimal precision. \
                  Supports EMI and amortisation schedules, FOIR-based eligibility \
                  checks, one-time prepayment analysis, and portfolio metrics."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the equated monthly installment and totals for a loan
    Installment(InstallmentArgs),
    /// Generate the full month-by-month amortisation schedule
    Schedule(ScheduleArgs),
    /// Check loan eligibility against income and obligations
    Eligibility(EligibilityArgs),
    /// Analyse a one-time prepayment (tenure or EMI reduction)
    Prepayment(PrepaymentArgs),
    /// Reduce a book of loan snapshots to portfolio metrics
    Portfolio(PortfolioArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Installment(args) => commands::amortization::run_installment(args),
        Commands::Schedule(args) => commands::amortization::run_schedule(args),
        Commands::Eligibility(args) => commands::eligibility::run_eligibility(args),
        Commands::Prepayment(args) => commands::prepayment::run_prepayment(args),
        Commands::Portfolio(args) => commands::portfolio::run_portfolio(args),
        Commands::Version => {
            println!("emi {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
