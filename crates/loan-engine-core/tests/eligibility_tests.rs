use loan_engine_core::amortization::emi;
use loan_engine_core::eligibility::capacity::{self, EligibilityInput};
use loan_engine_core::eligibility::classify::{classify, Verdict};
use loan_engine_core::types::LoanTerms;
use loan_engine_core::LoanEngineError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn salaried_borrower() -> EligibilityInput {
    EligibilityInput {
        monthly_income: dec!(50_000),
        existing_monthly_obligations: dec!(10_000),
        proposed_rate_percent: dec!(10),
        proposed_term_months: 240,
        max_debt_service_ratio: dec!(0.5),
    }
}

#[test]
fn test_max_principal_for_salaried_borrower() {
    let max = capacity::max_serviceable_principal(&salaried_borrower());
    // 15k/month capacity at 10% over 20 years => ~1.554M
    assert!(max > dec!(1_550_000) && max < dec!(1_560_000), "max was {max}");
}

#[test]
fn test_capacity_and_installment_are_inverse() {
    // The capacity formula must be the algebraic inverse of the EMI
    // formula across a spread of rates and tenures.
    let cases = [
        (dec!(8), 60u32),
        (dec!(10), 240),
        (dec!(12.5), 120),
        (Decimal::ZERO, 36),
    ];

    for (rate, months) in cases {
        let input = EligibilityInput {
            monthly_income: dec!(80_000),
            existing_monthly_obligations: dec!(12_000),
            proposed_rate_percent: rate,
            proposed_term_months: months,
            max_debt_service_ratio: dec!(0.4),
        };
        let free_capacity = dec!(80_000) * dec!(0.4) - dec!(12_000);
        let max = capacity::max_serviceable_principal(&input);
        let emi = emi::calculate_installment(&LoanTerms::new(max, rate, months));
        assert!(
            (emi - free_capacity).abs() <= dec!(0.02),
            "round trip drift at rate {rate}, {months}m: {emi} vs {free_capacity}"
        );
    }
}

#[test]
fn test_request_above_capacity_is_not_eligible() {
    let input = salaried_borrower();
    let max = capacity::max_serviceable_principal(&input);
    let out = classify(&input, max + dec!(1)).unwrap();
    assert_eq!(out.result.verdict, Verdict::NotEligible);
}

#[test]
fn test_request_at_capacity_is_not_rejected_by_rule_one() {
    let input = salaried_borrower();
    let max = capacity::max_serviceable_principal(&input);
    let out = classify(&input, max).unwrap();
    assert_ne!(out.result.verdict, Verdict::NotEligible);
}

#[test]
fn test_ratio_after_loan_reported_as_percentage() {
    let input = salaried_borrower();
    let out = classify(&input, dec!(500_000)).unwrap();
    let ratio = out.result.debt_service_ratio_after_loan;
    // 10k existing plus a ~4.8k EMI on 50k income => around 30%.
    assert!(ratio > dec!(25) && ratio < dec!(40), "ratio was {ratio}");
}

#[test]
fn test_zero_income_guarded() {
    let input = EligibilityInput {
        monthly_income: Decimal::ZERO,
        existing_monthly_obligations: Decimal::ZERO,
        proposed_rate_percent: dec!(10),
        proposed_term_months: 120,
        max_debt_service_ratio: dec!(0.5),
    };
    let out = classify(&input, dec!(50_000)).unwrap();
    assert_eq!(out.result.debt_service_ratio_after_loan, Decimal::ZERO);
    assert_eq!(out.result.max_principal, Decimal::ZERO);
    assert_eq!(out.result.verdict, Verdict::NotEligible);
}

#[test]
fn test_invalid_foir_cap_rejected() {
    let mut input = salaried_borrower();
    input.max_debt_service_ratio = Decimal::ZERO;
    assert!(matches!(
        classify(&input, dec!(100_000)),
        Err(LoanEngineError::InvalidInput { .. })
    ));
}

#[test]
fn test_default_foir_cap_deserializes() {
    let input: EligibilityInput = serde_json::from_str(
        r#"{
            "monthly_income": "50000",
            "existing_monthly_obligations": "10000",
            "proposed_rate_percent": "10",
            "proposed_term_months": 240
        }"#,
    )
    .unwrap();
    assert_eq!(input.max_debt_service_ratio, dec!(0.5));
}
