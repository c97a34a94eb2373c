use thiserror::Error;

use crate::ledger::AccountId;

/// Error type covering rejected account operations and ledger bookkeeping failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Invalid amount: {0} (amounts must be positive)")]
    InvalidAmount(f64),
    #[error("Insufficient funds: requested {requested:.2}, available {available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },
    #[error("Overdraft exceeded: requested {requested:.2}, available {available:.2}")]
    OverdraftExceeded { requested: f64, available: f64 },
    #[error("Balance overflow: result would not be finite (current balance {0})")]
    BalanceOverflow(f64),
    #[error("{operation} is not supported for {account_type} accounts")]
    UnsupportedOperation {
        operation: &'static str,
        account_type: &'static str,
    },
    #[error("Invalid interest rate: {0}")]
    InvalidRate(f64),
    #[error("Invalid overdraft limit: {0}")]
    InvalidOverdraftLimit(f64),
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),
    #[error("Duplicate account id: {0}")]
    DuplicateAccount(AccountId),
    #[error("Account id {id} must be greater than the last opened id {last}")]
    NonIncreasingId { id: AccountId, last: AccountId },
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LedgerError {
    /// Returns true for errors produced by a balance operation refusing its input,
    /// as opposed to lookup or configuration failures.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidAmount(_)
                | LedgerError::InsufficientFunds { .. }
                | LedgerError::OverdraftExceeded { .. }
                | LedgerError::UnsupportedOperation { .. }
                | LedgerError::BalanceOverflow(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Config(err.to_string())
    }
}

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Invalid input: {0}")]
    Input(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_are_distinguished_from_lookup_failures() {
        assert!(LedgerError::InvalidAmount(-5.0).is_rejection());
        assert!(LedgerError::OverdraftExceeded {
            requested: 600.0,
            available: 500.0
        }
        .is_rejection());
        assert!(LedgerError::BalanceOverflow(f64::MAX).is_rejection());
        assert!(!LedgerError::AccountNotFound(AccountId(3)).is_rejection());
        assert!(!LedgerError::Config("boom".into()).is_rejection());
    }

    #[test]
    fn messages_include_amounts() {
        let err = LedgerError::InsufficientFunds {
            requested: 20.0,
            available: 12.5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 20.00, available 12.50"
        );
    }
}
