//! Ledger store holding the single account balance.

use crate::decimal::Money;

/// The sole holder of the current balance value.
///
/// The store performs no range or precision checks of its own; every rule
/// about which values may be written lives in [`crate::AccountOperations`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    balance: Money,
}

impl Ledger {
    /// Creates a ledger holding the opening balance of `1000.00`.
    pub fn new() -> Self {
        Self::with_balance(Money::OPENING)
    }

    /// Creates a ledger seeded with an arbitrary balance.
    pub fn with_balance(balance: Money) -> Self {
        Ledger { balance }
    }

    /// Returns the stored balance.
    pub fn read(&self) -> Money {
        self.balance
    }

    /// Replaces the stored balance unconditionally.
    pub fn write(&mut self, new_balance: Money) {
        self.balance = new_balance;
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
