//! Categorical eligibility verdict for a requested principal.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::emi;
use crate::eligibility::capacity::{self, EligibilityInput};
use crate::types::{with_metadata, ComputationOutput, LoanTerms, Money, Rate};
use crate::{LoanEngineError, LoanEngineResult};

/// Post-loan FOIR above which an otherwise serviceable loan is flagged.
const CAUTION_RATIO_PERCENT: Decimal = dec!(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Eligible,
    Caution,
    NotEligible,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub max_principal: Money,
    /// FOIR after taking on the requested loan, as a percentage.
    pub debt_service_ratio_after_loan: Rate,
    pub verdict: Verdict,
}

/// Classify a requested principal against the borrower's capacity.
///
/// Rule order (first match wins): over capacity is never eligible; within
/// capacity but pushing post-loan FOIR past 60% earns a caution; anything
/// else is eligible.
pub fn classify(
    input: &EligibilityInput,
    requested_principal: Money,
) -> LoanEngineResult<ComputationOutput<EligibilityResult>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let max_principal = capacity::max_serviceable_principal(input);

    let proposed_installment = emi::calculate_installment(&LoanTerms::new(
        requested_principal,
        input.proposed_rate_percent,
        input.proposed_term_months,
    ));

    // Zero income is a guarded degenerate case: ratio defined as 0.
    let ratio_after_loan = capacity::debt_to_income_ratio(
        input.monthly_income,
        input.existing_monthly_obligations + proposed_installment,
    );

    let verdict = if requested_principal > max_principal {
        Verdict::NotEligible
    } else if ratio_after_loan > CAUTION_RATIO_PERCENT {
        Verdict::Caution
    } else {
        Verdict::Eligible
    };

    let result = EligibilityResult {
        max_principal,
        debt_service_ratio_after_loan: ratio_after_loan,
        verdict,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "foir_cap": input.max_debt_service_ratio.to_string(),
        "caution_threshold_percent": CAUTION_RATIO_PERCENT.to_string(),
        "proposed_installment": proposed_installment.to_string(),
    });

    Ok(with_metadata(
        "FOIR-capped eligibility classification",
        &assumptions,
        warnings,
        elapsed,
        result,
    ))
}

fn validate_input(input: &EligibilityInput) -> LoanEngineResult<()> {
    if input.max_debt_service_ratio <= Decimal::ZERO || input.max_debt_service_ratio > Decimal::ONE
    {
        return Err(LoanEngineError::InvalidInput {
            field: "max_debt_service_ratio".into(),
            reason: "FOIR cap must be a fraction in (0, 1].".into(),
        });
    }
    if input.monthly_income < Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "monthly_income".into(),
            reason: "Monthly income cannot be negative.".into(),
        });
    }
    if input.existing_monthly_obligations < Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "existing_monthly_obligations".into(),
            reason: "Existing obligations cannot be negative.".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn base_input() -> EligibilityInput {
        EligibilityInput {
            monthly_income: dec!(50_000),
            existing_monthly_obligations: dec!(10_000),
            proposed_rate_percent: dec!(10),
            proposed_term_months: 240,
            max_debt_service_ratio: dec!(0.5),
        }
    }

    #[test]
    fn test_over_capacity_is_not_eligible() {
        let out = classify(&base_input(), dec!(2_000_000)).unwrap();
        assert_eq!(out.result.verdict, Verdict::NotEligible);
    }

    #[test]
    fn test_comfortable_request_is_eligible() {
        let out = classify(&base_input(), dec!(500_000)).unwrap();
        assert_eq!(out.result.verdict, Verdict::Eligible);
        assert!(out.result.debt_service_ratio_after_loan < dec!(60));
    }

    #[test]
    fn test_high_foir_within_capacity_is_caution() {
        let mut input = base_input();
        input.existing_monthly_obligations = dec!(25_000);
        input.max_debt_service_ratio = dec!(0.9);
        // EMI on 830k at 10% x 240 is ~8_010 => post-loan FOIR ~66%
        let out = classify(&input, dec!(830_000)).unwrap();
        assert_eq!(out.result.verdict, Verdict::Caution);
        assert!(out.result.debt_service_ratio_after_loan > dec!(60));
    }

    #[test]
    fn test_zero_income_ratio_defined_as_zero() {
        let mut input = base_input();
        input.monthly_income = Decimal::ZERO;
        input.existing_monthly_obligations = Decimal::ZERO;
        let out = classify(&input, dec!(100_000)).unwrap();
        assert_eq!(out.result.debt_service_ratio_after_loan, Decimal::ZERO);
        // Zero income means zero capacity, so any positive request fails.
        assert_eq!(out.result.verdict, Verdict::NotEligible);
    }

    #[test]
    fn test_foir_cap_out_of_range_rejected() {
        let mut input = base_input();
        input.max_debt_service_ratio = dec!(1.5);
        let err = classify(&input, dec!(100_000)).unwrap_err();
        match err {
            LoanEngineError::InvalidInput { field, .. } => {
                assert_eq!(field, "max_debt_service_ratio")
            }
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_verdict_serializes_snake_case() {
        let json = serde_json::to_string(&Verdict::NotEligible).unwrap();
        assert_eq!(json, "\"not_eligible\"");
    }
}
