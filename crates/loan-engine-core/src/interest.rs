//! Simple, compound, and daily interest helpers used by teller-facing
//! calculators. Rates are annual percentages, matching the rest of the
//! engine.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

const PERCENT: Decimal = dec!(100);
const DAYS_PER_YEAR: Decimal = dec!(365);

/// Simple interest: P * r * t.
pub fn simple_interest(principal: Money, annual_rate_percent: Rate, years: Decimal) -> Money {
    principal * annual_rate_percent / PERCENT * years
}

/// Compound interest earned (amount minus principal) at the given
/// compounding frequency per year.
pub fn compound_interest(
    principal: Money,
    annual_rate_percent: Rate,
    years: Decimal,
    compounding_per_year: u32,
) -> Money {
    if compounding_per_year == 0 {
        return Decimal::ZERO;
    }
    let frequency = Decimal::from(compounding_per_year);
    let rate = annual_rate_percent / PERCENT;
    let amount = principal * (Decimal::ONE + rate / frequency).powd(frequency * years);
    amount - principal
}

/// Interest accrued per day on an outstanding balance.
pub fn daily_interest(principal: Money, annual_rate_percent: Rate) -> Money {
    principal * annual_rate_percent / PERCENT / DAYS_PER_YEAR
}
