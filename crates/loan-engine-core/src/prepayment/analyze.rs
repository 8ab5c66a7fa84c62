//! One-time prepayment analysis.
//!
//! An extra payment after a given month either closes the loan outright
//! (tenure reduction) or reduces the outstanding principal, in which case
//! a fresh installment is computed for the remaining term. Tenure is held
//! fixed in the partial branch: the borrower keeps the original end date
//! and pays less per month. The original schedule is never mutated; the
//! analysis derives a new one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::emi;
use crate::amortization::schedule::{self, ScheduleInput};
use crate::types::{with_metadata, ComputationOutput, LoanTerms, Money};
use crate::{LoanEngineError, LoanEngineResult};

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepaymentRequest {
    pub terms: LoanTerms,
    /// Lump sum paid over and above the scheduled EMI.
    pub extra_payment: Money,
    /// 1-based month after whose EMI the lump sum is applied.
    pub after_month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrepaymentOutcome {
    /// The lump sum cleared the balance; remaining EMIs are eliminated.
    TenureReduction {
        months_saved: u32,
        new_tenure_months: u32,
    },
    /// The lump sum reduced principal; the EMI drops, tenure unchanged.
    ReducedInstallment {
        revised_installment: Money,
        new_tenure_months: u32,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepaymentOutput {
    pub original_installment: Money,
    pub balance_before_prepayment: Money,
    pub balance_after_prepayment: Money,
    pub remaining_months: u32,
    pub total_savings: Money,
    pub outcome: PrepaymentOutcome,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Analyse a one-time prepayment against an existing loan.
pub fn analyze(request: &PrepaymentRequest) -> LoanEngineResult<ComputationOutput<PrepaymentOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_request(request)?;

    let terms = &request.terms;
    let original_installment = emi::calculate_installment(terms);
    if original_installment.is_zero() {
        return Err(LoanEngineError::InvalidInput {
            field: "terms".into(),
            reason: "Degenerate loan terms produce no schedule to prepay against.".into(),
        });
    }

    let original = schedule::generate_schedule(&ScheduleInput {
        terms: terms.clone(),
        first_payment_date: None,
    })?;

    let balance_before = original
        .result
        .rows
        .get(request.after_month as usize - 1)
        .map(|row| row.remaining_balance)
        .ok_or(LoanEngineError::InvalidMonth {
            month: request.after_month,
            term_months: terms.term_months,
        })?;

    let balance_after = (balance_before - request.extra_payment).max(Decimal::ZERO);
    let remaining_months = terms.term_months - request.after_month;

    let (total_savings, outcome) = if balance_after.is_zero() {
        let savings = original_installment * Decimal::from(remaining_months);
        (
            savings,
            PrepaymentOutcome::TenureReduction {
                months_saved: remaining_months,
                new_tenure_months: request.after_month,
            },
        )
    } else {
        let revised_installment = emi::calculate_installment(&LoanTerms::new(
            balance_after,
            terms.annual_rate_percent,
            remaining_months,
        ));
        let savings =
            (original_installment - revised_installment) * Decimal::from(remaining_months);
        (
            savings,
            PrepaymentOutcome::ReducedInstallment {
                revised_installment,
                new_tenure_months: terms.term_months,
            },
        )
    };

    let output = PrepaymentOutput {
        original_installment,
        balance_before_prepayment: balance_before,
        balance_after_prepayment: balance_after,
        remaining_months,
        total_savings,
        outcome,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "partial_prepayment_policy": "tenure fixed, installment reduced",
        "prepayment_applied": "after the scheduled EMI of the given month",
    });

    Ok(with_metadata(
        "One-time prepayment analysis",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

fn validate_request(request: &PrepaymentRequest) -> LoanEngineResult<()> {
    if request.after_month == 0 || request.after_month > request.terms.term_months {
        return Err(LoanEngineError::InvalidMonth {
            month: request.after_month,
            term_months: request.terms.term_months,
        });
    }
    if request.extra_payment <= Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "extra_payment".into(),
            reason: "Extra payment must be positive.".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
