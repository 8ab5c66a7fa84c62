//! Income-based loan capacity: the largest principal whose EMI fits inside
//! the borrower's free monthly income under a FOIR (fixed obligations to
//! income ratio) cap.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate};

/// FOIR cap applied when the caller does not specify one.
pub const DEFAULT_MAX_DEBT_SERVICE_RATIO: Decimal = dec!(0.5);

fn default_debt_service_ratio() -> Decimal {
    DEFAULT_MAX_DEBT_SERVICE_RATIO
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityInput {
    pub monthly_income: Money,
    pub existing_monthly_obligations: Money,
    /// Annual rate (percentage) of the proposed loan.
    pub proposed_rate_percent: Rate,
    pub proposed_term_months: u32,
    /// FOIR cap as a fraction in (0, 1].
    #[serde(default = "default_debt_service_ratio")]
    pub max_debt_service_ratio: Decimal,
}

/// Free monthly repayment capacity: income * FOIR cap - existing EMIs.
/// Negative capacity is reported as-is; callers clamp where appropriate.
pub fn available_monthly_capacity(input: &EligibilityInput) -> Money {
    input.monthly_income * input.max_debt_service_ratio - input.existing_monthly_obligations
}

/// Largest principal whose EMI equals the available monthly capacity.
///
/// Algebraic inverse of the annuity installment formula:
/// `P = capacity * ((1+r)^n - 1) / (r * (1+r)^n)`. Round-trips with
/// `amortization::emi::calculate_installment` to within a paise.
pub fn max_serviceable_principal(input: &EligibilityInput) -> Money {
    let capacity = available_monthly_capacity(input);
    if capacity <= Decimal::ZERO || input.proposed_term_months == 0 {
        return Decimal::ZERO;
    }
    if input.proposed_rate_percent < Decimal::ZERO {
        return Decimal::ZERO;
    }

    let months = Decimal::from(input.proposed_term_months);
    let r = input.proposed_rate_percent / dec!(100) / dec!(12);

    let raw = if r.is_zero() {
        capacity * months
    } else {
        let factor = (Decimal::ONE + r).powi(input.proposed_term_months as i64);
        capacity * (factor - Decimal::ONE) / (r * factor)
    };

    raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Debt-to-income ratio as a percentage. Zero income is a guarded
/// degenerate case, not a division fault.
pub fn debt_to_income_ratio(monthly_income: Money, total_monthly_obligations: Money) -> Rate {
    if monthly_income.is_zero() {
        return Decimal::ZERO;
    }
    total_monthly_obligations / monthly_income * dec!(100)
}

/// Loan-to-value ratio as a percentage. Zero asset value yields zero.
pub fn loan_to_value_ratio(loan_amount: Money, asset_value: Money) -> Rate {
    if asset_value.is_zero() {
        return Decimal::ZERO;
    }
    loan_amount / asset_value * dec!(100)
}
