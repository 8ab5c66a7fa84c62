use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates in this engine are annual percentages as captured on loan
/// application forms (10.5 = 10.5% p.a.). Conversion to a monthly
/// fraction happens in exactly one place: [`LoanTerms::monthly_rate`].
pub type Rate = Decimal;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Immutable input to every amortisation calculation. Derived schedules
/// are recomputed on demand; nothing here is mutated mid-term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    /// Annual interest rate as a percentage (e.g. 10.5).
    pub annual_rate_percent: Rate,
    /// Tenure in months.
    pub term_months: u32,
}

impl LoanTerms {
    pub fn new(principal: Money, annual_rate_percent: Rate, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
        }
    }

    /// Monthly fractional rate: annual percentage / 100 / 12.
    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate_percent / PERCENT / MONTHS_PER_YEAR
    }
}

/// Loan lifecycle states as tracked by the surrounding book of record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    Pending,
    Approved,
    Disbursed,
    Active,
    Closed,
    Defaulted,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
