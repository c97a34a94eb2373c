use serde::Serialize;

use super::{
    counter::AccountCounter,
    identity::{AccountId, AccountName, NAME_MAX_CHARS},
};
use crate::errors::{LedgerError, Result};

/// Represents a single account and its running balance.
///
/// The balance starts at zero and only moves through [`Account::deposit`],
/// [`Account::withdraw`] and [`Account::apply_interest`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Account {
    id: AccountId,
    name: AccountName,
    balance: f64,
    kind: AccountKind,
}

/// The closed set of account variants and their policy parameters.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum AccountKind {
    Savings { interest_rate: f64 },
    Checking { overdraft_limit: f64 },
}

impl AccountKind {
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Savings { .. } => "Savings",
            AccountKind::Checking { .. } => "Checking",
        }
    }
}

impl Account {
    /// Opens a savings account accruing `interest_rate` per interest application.
    pub fn savings(
        counter: &AccountCounter,
        id: AccountId,
        name: impl Into<String>,
        interest_rate: f64,
    ) -> Result<Self> {
        Self::savings_with_name_limit(counter, id, name, interest_rate, NAME_MAX_CHARS)
    }

    /// Opens a checking account allowed to go `overdraft_limit` below zero.
    pub fn checking(
        counter: &AccountCounter,
        id: AccountId,
        name: impl Into<String>,
        overdraft_limit: f64,
    ) -> Result<Self> {
        Self::checking_with_name_limit(counter, id, name, overdraft_limit, NAME_MAX_CHARS)
    }

    pub fn savings_with_name_limit(
        counter: &AccountCounter,
        id: AccountId,
        name: impl Into<String>,
        interest_rate: f64,
        name_max_chars: usize,
    ) -> Result<Self> {
        if !interest_rate.is_finite() || interest_rate < 0.0 {
            return Err(LedgerError::InvalidRate(interest_rate));
        }
        Ok(Self::open(
            counter,
            id,
            AccountName::with_limit(name, name_max_chars),
            AccountKind::Savings { interest_rate },
        ))
    }

    pub fn checking_with_name_limit(
        counter: &AccountCounter,
        id: AccountId,
        name: impl Into<String>,
        overdraft_limit: f64,
        name_max_chars: usize,
    ) -> Result<Self> {
        if !overdraft_limit.is_finite() || overdraft_limit < 0.0 {
            return Err(LedgerError::InvalidOverdraftLimit(overdraft_limit));
        }
        Ok(Self::open(
            counter,
            id,
            AccountName::with_limit(name, name_max_chars),
            AccountKind::Checking { overdraft_limit },
        ))
    }

    fn open(counter: &AccountCounter, id: AccountId, name: AccountName, kind: AccountKind) -> Self {
        counter.increment();
        tracing::debug!(%id, kind = kind.label(), "account created");
        Self {
            id,
            name,
            balance: 0.0,
            kind,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Variant discriminant: `"Savings"` or `"Checking"`.
    pub fn account_type(&self) -> &'static str {
        self.kind.label()
    }

    pub fn interest_rate(&self) -> Option<f64> {
        match self.kind {
            AccountKind::Savings { interest_rate } => Some(interest_rate),
            AccountKind::Checking { .. } => None,
        }
    }

    pub fn overdraft_limit(&self) -> Option<f64> {
        match self.kind {
            AccountKind::Checking { overdraft_limit } => Some(overdraft_limit),
            AccountKind::Savings { .. } => None,
        }
    }

    /// Largest amount a withdrawal may currently take.
    pub fn available_to_withdraw(&self) -> f64 {
        match self.kind {
            AccountKind::Savings { .. } => self.balance,
            AccountKind::Checking { overdraft_limit } => self.balance + overdraft_limit,
        }
    }

    /// Adds a positive amount and returns the new balance.
    pub fn deposit(&mut self, amount: f64) -> Result<f64> {
        ensure_positive(amount)?;
        self.balance = self.checked_balance(self.balance + amount)?;
        tracing::debug!(id = %self.id, amount, balance = self.balance, "deposit applied");
        Ok(self.balance)
    }

    /// Removes a positive amount if the variant's withdrawal policy allows it.
    pub fn withdraw(&mut self, amount: f64) -> Result<f64> {
        ensure_positive(amount)?;
        let available = self.available_to_withdraw();
        if available < amount {
            tracing::debug!(id = %self.id, amount, available, "withdrawal rejected");
            return Err(match self.kind {
                AccountKind::Savings { .. } => LedgerError::InsufficientFunds {
                    requested: amount,
                    available,
                },
                AccountKind::Checking { .. } => LedgerError::OverdraftExceeded {
                    requested: amount,
                    available,
                },
            });
        }
        self.balance = self.checked_balance(self.balance - amount)?;
        tracing::debug!(id = %self.id, amount, balance = self.balance, "withdrawal applied");
        Ok(self.balance)
    }

    /// Compounds one period of interest into a savings balance.
    ///
    /// Each call applies the rate again; calling twice compounds twice.
    pub fn apply_interest(&mut self) -> Result<f64> {
        match self.kind {
            AccountKind::Savings { interest_rate } => {
                let accrued = self.balance + self.balance * interest_rate;
                self.balance = self.checked_balance(accrued)?;
                tracing::debug!(
                    id = %self.id,
                    interest_rate,
                    balance = self.balance,
                    "interest applied"
                );
                Ok(self.balance)
            }
            AccountKind::Checking { .. } => Err(LedgerError::UnsupportedOperation {
                operation: "apply_interest",
                account_type: self.account_type(),
            }),
        }
    }

    /// Refuses a balance that is no longer a finite number.
    fn checked_balance(&self, candidate: f64) -> Result<f64> {
        if !candidate.is_finite() {
            tracing::debug!(id = %self.id, balance = self.balance, "balance overflow rejected");
            return Err(LedgerError::BalanceOverflow(self.balance));
        }
        Ok(candidate)
    }
}

fn ensure_positive(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(LedgerError::InvalidAmount(amount));
    }
    Ok(())
}
