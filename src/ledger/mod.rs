//! Account model, creation counter, and the ledger that groups accounts.

pub mod account;
pub mod counter;
pub mod identity;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use account::{Account, AccountKind};
pub use counter::AccountCounter;
pub use identity::{AccountId, AccountName, NAME_MAX_CHARS};
pub use ledger::{Ledger, RejectionPolicy};
