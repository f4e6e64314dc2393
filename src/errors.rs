use thiserror::Error;

/// Error type that captures crate-level failures outside the store intents.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Reasons a transaction draft is rejected by the store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("amount `{0}` is not a number")]
    InvalidAmount(String),
    #[error("amount {0} must not be negative")]
    NegativeAmount(f64),
    #[error("category is required")]
    MissingCategory,
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
}
