use loan_engine_core::amortization::emi;
use loan_engine_core::amortization::schedule::{generate_schedule, ScheduleInput};
use loan_engine_core::types::LoanTerms;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// EMI tests
// ===========================================================================

fn home_loan() -> LoanTerms {
    // 5 lakh at 10.5% over 10 years
    LoanTerms::new(dec!(500_000), dec!(10.5), 120)
}

#[test]
fn test_emi_home_loan() {
    let emi = emi::calculate_installment(&home_loan());
    // Annuity formula value for these terms is ~6_746.7
    assert!((emi - dec!(6746.73)).abs() < dec!(1), "EMI was {emi}");
}

#[test]
fn test_totals_reconcile() {
    let terms = home_loan();
    let emi_amount = emi::calculate_installment(&terms);
    assert_eq!(emi::total_payment(&terms), emi_amount * dec!(120));
    assert_eq!(
        emi::total_interest(&terms),
        emi::total_payment(&terms) - terms.principal
    );
}

#[test]
fn test_zero_rate_loan() {
    let terms = LoanTerms::new(dec!(100_000), Decimal::ZERO, 12);
    assert_eq!(emi::calculate_installment(&terms), dec!(8333.33));
    assert_eq!(emi::total_interest(&terms), Decimal::ZERO);
}

// ===========================================================================
// Schedule tests
// ===========================================================================

fn schedule_of(terms: LoanTerms) -> loan_engine_core::amortization::schedule::AmortizationScheduleOutput {
    generate_schedule(&ScheduleInput {
        terms,
        first_payment_date: None,
    })
    .unwrap()
    .result
}

#[test]
fn test_schedule_invariants_hold_across_terms() {
    let cases = [
        (dec!(500_000), dec!(10.5), 120u32),
        (dec!(1_200_000), dec!(8.75), 240),
        (dec!(50_000), dec!(18), 12),
        (dec!(10_000), dec!(12), 1),
    ];

    for (principal, rate, months) in cases {
        let terms = LoanTerms::new(principal, rate, months);
        let installment = emi::calculate_installment(&terms);
        let out = schedule_of(terms);

        assert_eq!(out.rows.len() as u32, months);
        assert_eq!(out.rows.last().unwrap().remaining_balance, Decimal::ZERO);

        for row in &out.rows {
            assert!(row.remaining_balance >= Decimal::ZERO);
            // Constant EMI for the life of the loan.
            assert_eq!(row.installment, installment);
        }
    }
}

#[test]
fn test_single_month_liquidates_principal() {
    let out = schedule_of(LoanTerms::new(dec!(10_000), dec!(12), 1));
    assert_eq!(out.rows.len(), 1);
    assert_eq!(out.rows[0].principal_component, dec!(10_000));
    assert_eq!(out.rows[0].remaining_balance, Decimal::ZERO);
}

#[test]
fn test_interest_principal_split_sums_to_balance_drawdown() {
    let terms = LoanTerms::new(dec!(300_000), dec!(11), 60);
    let out = schedule_of(terms.clone());

    let principal_total: Decimal = out.rows.iter().map(|r| r.principal_component).sum();
    assert_eq!(principal_total, terms.principal);
}

#[test]
fn test_degenerate_terms_produce_empty_schedule() {
    let out = generate_schedule(&ScheduleInput {
        terms: LoanTerms::new(dec!(-1), dec!(10), 12),
        first_payment_date: None,
    })
    .unwrap();
    assert!(out.result.rows.is_empty());
    assert!(!out.warnings.is_empty());
}
