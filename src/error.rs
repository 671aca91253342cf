//! Errors raised by the expense library.
//!
//! The only fallible operation is coercing an amount into `f64`
//! ([`InvalidAmount`]). Snapshot serialization failures surface as
//! [`Serialize`].
//!
//!  [`InvalidAmount`]: ExpenseError::InvalidAmount
//!  [`Serialize`]: ExpenseError::Serialize
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpenseError {
    #[error("Invalid amount: {input:?} is not a number")]
    InvalidAmount { input: String },
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

impl PartialEq for ExpenseError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount { input: a }, Self::InvalidAmount { input: b }) => a == b,
            (Self::Serialize(a), Self::Serialize(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExpenseError>;
