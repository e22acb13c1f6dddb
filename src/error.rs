//! Error and rejection types for the account manager.

use thiserror::Error;

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Fatal errors raised while driving a console session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Failed to read from or write to the console
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons an amount string cannot become an [`crate::Money`] value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    /// Input is not a number (or is out of the decimal range)
    #[error("amount is not a number")]
    Malformed,

    /// Input parsed to a value below zero
    #[error("amount is negative")]
    Negative,
}

/// A non-fatal outcome where validation fails and the ledger is untouched.
///
/// The `Display` output is the exact text shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Amount string unparseable or negative.
    #[error("Invalid amount. Please enter a positive number.")]
    InvalidInput,

    /// Credit would push the balance past `999999.99`.
    #[error("Error: Balance would exceed maximum allowed value of $999,999.99")]
    Overflow,

    /// Debit exceeds the current balance.
    #[error("Insufficient funds for this debit.")]
    InsufficientFunds,
}

impl From<AmountError> for Rejection {
    fn from(_: AmountError) -> Self {
        Rejection::InvalidInput
    }
}
