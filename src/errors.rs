use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Reasons a new transaction is refused before it reaches the ledger.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RejectReason {
    #[error("transaction name must not be empty")]
    EmptyName,
    #[error("transaction amount must be greater than zero")]
    NonPositiveAmount,
    #[error("transaction amount must be a finite number")]
    NonFiniteAmount,
}
