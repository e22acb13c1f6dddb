//! Account operations: the business rules for viewing, crediting and debiting.
//!
//! Every operation is atomic with respect to the ledger: the amount is parsed
//! and validated first, and the ledger is written only once all checks pass.

use crate::decimal::Money;
use crate::error::Rejection;
use crate::ledger::Ledger;
use crate::request::{OperationResult, Request};
use log::{debug, warn};

/// Applies credit and debit requests against a borrowed [`Ledger`].
///
/// Performs no I/O: callers hand in the raw amount text and print the
/// returned [`OperationResult`].
///
/// # Balance Range
///
/// Successful operations keep the balance within `0.00..=999999.99`.
/// A credit that would exceed the maximum and a debit larger than the
/// current balance are both rejected without touching the ledger.
pub struct AccountOperations<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> AccountOperations<'a> {
    /// Creates operations bound to the given ledger.
    pub fn new(ledger: &'a mut Ledger) -> Self {
        AccountOperations { ledger }
    }

    /// Dispatches a request to the matching operation.
    pub fn apply(&mut self, request: Request) -> OperationResult {
        match request {
            Request::View => self.view(),
            Request::Credit(raw) => self.credit(&raw),
            Request::Debit(raw) => self.debit(&raw),
        }
    }

    /// Reads the current balance. Never mutates the ledger.
    pub fn view(&self) -> OperationResult {
        OperationResult::Viewed(self.ledger.read())
    }

    /// Credits the parsed amount to the ledger.
    pub fn credit(&mut self, raw_input: &str) -> OperationResult {
        let amount = match parse_amount(raw_input) {
            Ok(amount) => amount,
            Err(reason) => return reason.into(),
        };

        let current = self.ledger.read();
        let new_balance = match current.checked_add(amount) {
            Some(sum) if sum <= Money::MAX => sum,
            _ => {
                debug!(
                    "Credit of {} rejected: balance {} would exceed {}",
                    amount,
                    current,
                    Money::MAX
                );
                return Rejection::Overflow.into();
            }
        };

        self.ledger.write(new_balance);
        debug!("Credited {}, balance {} -> {}", amount, current, new_balance);

        OperationResult::Credited(new_balance)
    }

    /// Debits the parsed amount from the ledger if funds allow.
    ///
    /// Debiting the entire balance is allowed and leaves exactly `0.00`.
    pub fn debit(&mut self, raw_input: &str) -> OperationResult {
        let amount = match parse_amount(raw_input) {
            Ok(amount) => amount,
            Err(reason) => return reason.into(),
        };

        let current = self.ledger.read();
        if current < amount {
            debug!(
                "Debit of {} rejected: insufficient funds (balance {})",
                amount, current
            );
            return Rejection::InsufficientFunds.into();
        }

        let new_balance = current - amount;
        self.ledger.write(new_balance);
        debug!("Debited {}, balance {} -> {}", amount, current, new_balance);

        OperationResult::Debited(new_balance)
    }
}

/// Parses amount text, logging and mapping any failure to `InvalidInput`.
fn parse_amount(raw_input: &str) -> Result<Money, Rejection> {
    Money::parse_amount(raw_input).map_err(|e| {
        warn!("Rejected amount {:?}: {}", raw_input.trim(), e);
        Rejection::from(e)
    })
}
