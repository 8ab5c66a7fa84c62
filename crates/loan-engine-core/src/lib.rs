pub mod error;
pub mod types;

#[cfg(feature = "amortization")]
pub mod amortization;

#[cfg(feature = "eligibility")]
pub mod eligibility;

#[cfg(feature = "prepayment")]
pub mod prepayment;

#[cfg(feature = "interest")]
pub mod interest;

#[cfg(feature = "charges")]
pub mod charges;

#[cfg(feature = "portfolio")]
pub mod portfolio;

#[cfg(feature = "products")]
pub mod products;

pub use error::LoanEngineError;
pub use types::*;

/// Standard result type for all loan-engine operations
pub type LoanEngineResult<T> = Result<T, LoanEngineError>;
