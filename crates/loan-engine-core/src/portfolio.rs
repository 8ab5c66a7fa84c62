//! Book-level metrics behind the dashboard: pure reduction over loan
//! snapshots supplied by the caller. Persistence-layer aggregation (SQL,
//! caching, push updates) stays with the caller.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, LoanStatus, Money, Rate};
use crate::{LoanEngineError, LoanEngineResult};

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Point-in-time view of one loan on the book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSnapshot {
    pub status: LoanStatus,
    pub principal: Money,
    pub outstanding_balance: Money,
    pub disbursed_amount: Money,
    /// Whether the loan currently has an EMI past due.
    #[serde(default)]
    pub overdue: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    pub total_loans: usize,
    pub active_loans: usize,
    pub total_principal: Money,
    pub total_outstanding: Money,
    pub total_disbursed: Money,
    /// Share of disbursed money already recovered, as a percentage.
    pub collection_efficiency: Rate,
    pub overdue_loans: usize,
    /// Overdue share of active loans, as a percentage.
    pub overdue_percentage: Rate,
    pub average_loan_size: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reduce a book of loan snapshots to dashboard metrics.
pub fn summarize(loans: &[LoanSnapshot]) -> LoanEngineResult<ComputationOutput<PortfolioMetrics>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    if loans.is_empty() {
        return Err(LoanEngineError::InsufficientData(
            "Portfolio metrics require at least one loan snapshot.".into(),
        ));
    }

    let total_principal: Money = loans.iter().map(|l| l.principal).sum();
    let total_outstanding: Money = loans.iter().map(|l| l.outstanding_balance).sum();
    let total_disbursed: Money = loans.iter().map(|l| l.disbursed_amount).sum();

    let active: Vec<&LoanSnapshot> = loans
        .iter()
        .filter(|l| l.status == LoanStatus::Active)
        .collect();
    let overdue_count = active.iter().filter(|l| l.overdue).count();

    let collection_efficiency = if total_disbursed.is_zero() {
        Decimal::ZERO
    } else {
        (total_disbursed - total_outstanding) / total_disbursed * dec!(100)
    };

    let overdue_percentage = if active.is_empty() {
        Decimal::ZERO
    } else {
        Decimal::from(overdue_count) / Decimal::from(active.len()) * dec!(100)
    };

    let metrics = PortfolioMetrics {
        total_loans: loans.len(),
        active_loans: active.len(),
        total_principal,
        total_outstanding,
        total_disbursed,
        collection_efficiency,
        overdue_loans: overdue_count,
        overdue_percentage,
        average_loan_size: total_principal / Decimal::from(loans.len()),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "active_definition": "status == active",
        "overdue_definition": "active loans flagged overdue by the book of record",
    });

    Ok(with_metadata(
        "Portfolio snapshot reduction",
        &assumptions,
        warnings,
        elapsed,
        metrics,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
