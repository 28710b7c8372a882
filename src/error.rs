use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by the core stores.
/// Insufficient funds is the only business-level failure; Io/Json cover the
/// durable session slot and are degraded to "no session" on load.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
