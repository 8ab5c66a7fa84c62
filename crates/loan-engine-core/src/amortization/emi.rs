//! Equated Monthly Installment arithmetic.
//!
//! The EMI on a reducing-balance loan is the standard annuity payment
//! `P * r * (1+r)^n / ((1+r)^n - 1)` with `r` the monthly fractional rate.
//! All math in `rust_decimal::Decimal`; installments are quantized to two
//! decimal places, half-up, the way the book of record stores them.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

use crate::types::{LoanTerms, Money};

/// Decimal places for a stored installment amount.
const MONEY_DP: u32 = 2;

fn quantize(amount: Money) -> Money {
    amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Constant monthly installment for the life of the loan.
///
/// Degenerate terms (non-positive principal, zero tenure, negative rate)
/// return zero rather than an error: these are transient states of a
/// partially filled application form, not faults.
pub fn calculate_installment(terms: &LoanTerms) -> Money {
    if terms.principal <= Decimal::ZERO
        || terms.term_months == 0
        || terms.annual_rate_percent < Decimal::ZERO
    {
        return Decimal::ZERO;
    }

    let months = Decimal::from(terms.term_months);
    let r = terms.monthly_rate();

    let raw = if r.is_zero() {
        terms.principal / months
    } else {
        let factor = (Decimal::ONE + r).powi(terms.term_months as i64);
        terms.principal * r * factor / (factor - Decimal::ONE)
    };

    quantize(raw)
}

/// Total repayment over the tenure: installment * term_months.
pub fn total_payment(terms: &LoanTerms) -> Money {
    calculate_installment(terms) * Decimal::from(terms.term_months)
}

/// Total interest payable over the tenure.
///
/// Zero-rate loans accrue no interest by definition, so that branch
/// short-circuits to an exact zero instead of reporting the paise-level
/// drift left by installment quantization.
pub fn total_interest(terms: &LoanTerms) -> Money {
    if terms.monthly_rate() <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (total_payment(terms) - terms.principal).max(Decimal::ZERO)
}
