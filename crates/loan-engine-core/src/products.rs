//! Loan product policies.
//!
//! The product line is a closed enum rather than a string tag: each
//! variant carries its collateral policy, and secured products cap the
//! principal at a loan-to-value limit on the pledged asset in addition to
//! the income-based capacity.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::eligibility::capacity::{max_serviceable_principal, EligibilityInput};
use crate::types::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanProduct {
    Personal,
    Home,
    Vehicle,
    Business,
    Gold,
    FixedDepositBacked,
}

impl LoanProduct {
    /// Maximum loan-to-value fraction for secured products; `None` for
    /// unsecured lending.
    pub fn collateral_ltv_cap(&self) -> Option<Decimal> {
        match self {
            LoanProduct::Personal | LoanProduct::Business => None,
            LoanProduct::Home => Some(dec!(0.80)),
            LoanProduct::Vehicle => Some(dec!(0.85)),
            LoanProduct::Gold => Some(dec!(0.75)),
            LoanProduct::FixedDepositBacked => Some(dec!(0.90)),
        }
    }

    pub fn is_secured(&self) -> bool {
        self.collateral_ltv_cap().is_some()
    }
}

/// Product-aware maximum principal: the income-based capacity, further
/// capped by the product's LTV limit when collateral backs the loan.
/// Secured products with no collateral value supplied lend nothing.
pub fn max_principal_for_product(
    product: LoanProduct,
    input: &EligibilityInput,
    collateral_value: Option<Money>,
) -> Money {
    let by_income = max_serviceable_principal(input);

    match product.collateral_ltv_cap() {
        None => by_income,
        Some(cap) => {
            let by_collateral = collateral_value
                .map(|v| (v.max(Decimal::ZERO)) * cap)
                .unwrap_or(Decimal::ZERO);
            by_income.min(by_collateral)
        }
    }
}
