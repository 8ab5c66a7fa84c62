//! Penalty and fee schedule for payment servicing: late fees, bounce
//! charges, and foreclosure charges.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::Money;

/// Late fee: 2% of the EMI per month overdue, pro-rated per day.
const LATE_FEE_MONTHLY_RATE: Decimal = dec!(0.02);
const DAYS_PER_MONTH: Decimal = dec!(30);

/// Flat charge for a failed (bounced) EMI collection.
const BOUNCE_CHARGE: Decimal = dec!(500);

/// Foreclosure charge: 4% of the outstanding balance.
const FORECLOSURE_RATE: Decimal = dec!(0.04);

/// Late fee for an overdue EMI. Zero when the payment is not yet late.
pub fn late_fee(emi_amount: Money, days_late: i64) -> Money {
    if days_late <= 0 {
        return Decimal::ZERO;
    }
    let monthly_fee = emi_amount * LATE_FEE_MONTHLY_RATE;
    monthly_fee / DAYS_PER_MONTH * Decimal::from(days_late)
}

/// Flat charge for a bounced EMI collection.
pub fn bounce_charge() -> Money {
    BOUNCE_CHARGE
}

/// Charge for closing the loan out of schedule.
pub fn foreclosure_charge(outstanding_balance: Money) -> Money {
    outstanding_balance.max(Decimal::ZERO) * FORECLOSURE_RATE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_late_fee_pro_rated_daily() {
        // 2% of 15k = 300/month => 10/day; 15 days late => 150
        assert_eq!(late_fee(dec!(15_000), 15), dec!(150));
    }

    #[test]
    fn test_no_late_fee_when_on_time() {
        assert_eq!(late_fee(dec!(15_000), 0), Decimal::ZERO);
        assert_eq!(late_fee(dec!(15_000), -3), Decimal::ZERO);
    }

    #[test]
    fn test_bounce_charge_is_flat() {
        assert_eq!(bounce_charge(), dec!(500));
    }

    #[test]
    fn test_foreclosure_charge() {
        assert_eq!(foreclosure_charge(dec!(250_000)), dec!(10_000));
        assert_eq!(foreclosure_charge(dec!(-100)), Decimal::ZERO);
    }
}
