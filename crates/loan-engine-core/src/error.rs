use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanEngineError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid month: {month} is outside the loan tenure of {term_months} months")]
    InvalidMonth { month: u32, term_months: u32 },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LoanEngineError {
    fn from(e: serde_json::Error) -> Self {
        LoanEngineError::SerializationError(e.to_string())
    }
}
