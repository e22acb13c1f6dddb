//! # Account Manager
//!
//! An interactive console application that tracks a single account balance
//! and supports viewing, crediting and debiting it through a text menu.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Uses 2 decimal places via `rust_decimal`
//! - **Owned state**: The [`Ledger`] is an explicit value, never a global
//! - **I/O-free core**: [`AccountOperations`] takes raw text and returns an [`OperationResult`]
//! - **Bounded balance**: `0.00 <= balance <= 999999.99` after every operation
//!
//! ## Example
//!
//! ```
//! use account_manager::{AccountOperations, Ledger};
//!
//! let mut ledger = Ledger::new();
//! let result = AccountOperations::new(&mut ledger).credit("50.00");
//! assert_eq!(result.to_string(), "Amount credited. New balance: 1050.00");
//! ```

pub mod decimal;
pub mod error;
pub mod ledger;
pub mod operations;
pub mod request;
pub mod session;

pub use decimal::Money;
pub use error::{AmountError, Rejection, Result, SessionError};
pub use ledger::Ledger;
pub use operations::AccountOperations;
pub use request::{OperationResult, Request};
pub use session::{MenuChoice, Session};
