//! Operation requests and their outcomes.

use crate::decimal::Money;
use crate::error::Rejection;
use std::fmt;

/// An operation the session asks the core to perform.
///
/// Credit and debit carry the raw amount text exactly as the user typed it;
/// parsing and validation happen inside [`crate::AccountOperations`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Read the balance without changing it.
    View,

    /// Increase the balance by the given amount text.
    Credit(String),

    /// Decrease the balance by the given amount text, if funds allow.
    Debit(String),
}

/// Tagged outcome of an operation.
///
/// Only used to decide which message to display; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationResult {
    /// Balance was read.
    Viewed(Money),

    /// Credit applied; carries the new balance.
    Credited(Money),

    /// Debit applied; carries the new balance.
    Debited(Money),

    /// Validation failed and the ledger is unchanged.
    Rejected(Rejection),
}

impl OperationResult {
    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            OperationResult::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }

    /// The message shown to the user for this outcome.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OperationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationResult::Viewed(balance) => write!(f, "Current balance: {}", balance),
            OperationResult::Credited(balance) => {
                write!(f, "Amount credited. New balance: {}", balance)
            }
            OperationResult::Debited(balance) => {
                write!(f, "Amount debited. New balance: {}", balance)
            }
            OperationResult::Rejected(reason) => write!(f, "{}", reason),
        }
    }
}

impl From<Rejection> for OperationResult {
    fn from(reason: Rejection) -> Self {
        OperationResult::Rejected(reason)
    }
}
