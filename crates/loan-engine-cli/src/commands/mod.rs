pub mod amortization;
pub mod eligibility;
pub mod portfolio;
pub mod prepayment;
