#![doc(test(attr(deny(warnings))))]

//! Account Ledger models savings and checking accounts, their balance
//! operations, and the ledger that opens and tracks them.
//!
//! ```
//! use account_ledger::ledger::{AccountId, Ledger};
//!
//! let mut ledger = Ledger::default();
//! let id = ledger.open_savings(AccountId(1), "Alice", 0.05).unwrap();
//! ledger.deposit(id, 1000.0).unwrap();
//! assert_eq!(ledger.apply_interest(id).unwrap(), 1050.0);
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Account Ledger tracing initialized.");
    });
}
