//! Month-by-month amortisation schedule generation.
//!
//! The schedule splits the constant EMI into interest and principal
//! components against a running balance. The installment is quantized to
//! the paise, so the final month absorbs the rounding drift by liquidating
//! whatever balance remains; the closing balance is always exactly zero.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::emi;
use crate::types::{with_metadata, ComputationOutput, LoanTerms, Money};
use crate::LoanEngineResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub terms: LoanTerms,
    /// Due date of the first EMI. When present, each row carries its
    /// payment date (calendar-month steps).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_payment_date: Option<NaiveDate>,
}

/// One month of the amortisation schedule. `month` is 1-based.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    pub installment: Money,
    pub principal_component: Money,
    pub interest_component: Money,
    pub remaining_balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationScheduleOutput {
    pub installment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    /// Exactly `term_months` rows for valid terms; empty for degenerate
    /// input.
    pub rows: Vec<AmortizationRow>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate the full amortisation schedule for a loan.
///
/// Pure function of its input: identical terms produce an identical
/// schedule. Degenerate terms yield an empty schedule with a warning
/// rather than an error.
pub fn generate_schedule(
    input: &ScheduleInput,
) -> LoanEngineResult<ComputationOutput<AmortizationScheduleOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let terms = &input.terms;
    let installment = emi::calculate_installment(terms);

    let rows = if installment.is_zero() {
        warnings.push(
            "Degenerate loan terms (non-positive principal, zero tenure, or negative rate); \
             empty schedule returned."
                .to_string(),
        );
        Vec::new()
    } else {
        build_rows(terms, installment, input.first_payment_date)
    };

    let output = AmortizationScheduleOutput {
        installment,
        total_payment: emi::total_payment(terms),
        total_interest: emi::total_interest(terms),
        rows,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "rate_convention": "annual percentage, compounded monthly",
        "installment_rounding": "2dp half-up",
        "final_month": "liquidates remaining balance in full",
    });

    Ok(with_metadata(
        "Reducing-balance amortisation (constant EMI)",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn build_rows(
    terms: &LoanTerms,
    installment: Money,
    first_payment_date: Option<NaiveDate>,
) -> Vec<AmortizationRow> {
    let r = terms.monthly_rate();
    let mut balance = terms.principal;
    let mut rows = Vec::with_capacity(terms.term_months as usize);

    for month in 1..=terms.term_months {
        let interest_component = balance * r;

        let principal_component = if month == terms.term_months {
            // Final month clears the loan; installment rounding drift
            // lands here.
            balance
        } else {
            // Clamp so the running balance never goes negative.
            (installment - interest_component).min(balance)
        };

        balance -= principal_component;

        rows.push(AmortizationRow {
            month,
            payment_date: first_payment_date.and_then(|d| d.checked_add_months(Months::new(month - 1))),
            installment,
            principal_component,
            interest_component,
            remaining_balance: balance,
        });

        if balance.is_zero() && month < terms.term_months {
            // Balance exhausted early (large rounding-up on a tiny loan);
            // remaining rows are pure bookkeeping zeros.
            for tail_month in (month + 1)..=terms.term_months {
                rows.push(AmortizationRow {
                    month: tail_month,
                    payment_date: first_payment_date
                        .and_then(|d| d.checked_add_months(Months::new(tail_month - 1))),
                    installment,
                    principal_component: Decimal::ZERO,
                    interest_component: Decimal::ZERO,
                    remaining_balance: Decimal::ZERO,
                });
            }
            break;
        }
    }

    rows
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn schedule_for(principal: Money, rate: Money, months: u32) -> AmortizationScheduleOutput {
        let input = ScheduleInput {
            terms: LoanTerms::new(principal, rate, months),
            first_payment_date: None,
        };
        generate_schedule(&input).unwrap().result
    }

    #[test]
    fn test_schedule_length_and_final_balance() {
        let out = schedule_for(dec!(500_000), dec!(10.5), 120);
        assert_eq!(out.rows.len(), 120);
        assert_eq!(out.rows.last().unwrap().remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn test_balance_never_negative_and_decreasing() {
        let out = schedule_for(dec!(250_000), dec!(14), 36);
        let mut previous = dec!(250_000);
        for row in &out.rows {
            assert!(row.remaining_balance >= Decimal::ZERO);
            assert!(row.remaining_balance <= previous);
            previous = row.remaining_balance;
        }
    }

    #[test]
    fn test_components_reconcile_against_balance() {
        let out = schedule_for(dec!(100_000), dec!(12), 24);
        let mut balance = dec!(100_000);
        for row in &out.rows {
            assert_eq!(row.interest_component, balance * dec!(0.01));
            balance -= row.principal_component;
            assert_eq!(row.remaining_balance, balance);
        }
        assert_eq!(balance, Decimal::ZERO);
    }

    #[test]
    fn test_single_month_schedule() {
        let out = schedule_for(dec!(10_000), dec!(12), 1);
        assert_eq!(out.rows.len(), 1);
        let row = &out.rows[0];
        assert_eq!(row.principal_component, dec!(10_000));
        assert_eq!(row.interest_component, dec!(100));
        assert_eq!(row.remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn test_zero_rate_schedule_has_no_interest() {
        let out = schedule_for(dec!(100_000), Decimal::ZERO, 12);
        assert_eq!(out.rows.len(), 12);
        for row in &out.rows {
            assert_eq!(row.interest_component, Decimal::ZERO);
        }
        assert_eq!(out.total_interest, Decimal::ZERO);
        assert_eq!(out.rows.last().unwrap().remaining_balance, Decimal::ZERO);
    }

    #[test]
    fn test_degenerate_terms_empty_schedule_with_warning() {
        let input = ScheduleInput {
            terms: LoanTerms::new(Decimal::ZERO, dec!(10), 12),
            first_payment_date: None,
        };
        let out = generate_schedule(&input).unwrap();
        assert!(out.result.rows.is_empty());
        assert_eq!(out.result.installment, Decimal::ZERO);
        assert!(!out.warnings.is_empty());
    }

    #[test]
    fn test_payment_dates_step_by_calendar_month() {
        let input = ScheduleInput {
            terms: LoanTerms::new(dec!(60_000), dec!(12), 3),
            first_payment_date: NaiveDate::from_ymd_opt(2025, 1, 31),
        };
        let out = generate_schedule(&input).unwrap().result;
        let dates: Vec<NaiveDate> = out.rows.iter().filter_map(|r| r.payment_date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
                // Clamped to the end of February
                NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
                NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            ]
        );
    }

    #[test]
    fn test_determinism() {
        let a = schedule_for(dec!(750_000), dec!(9.25), 180);
        let b = schedule_for(dec!(750_000), dec!(9.25), 180);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
