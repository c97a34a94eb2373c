use serde::{Deserialize, Serialize};

use super::{
    account::Account,
    counter::AccountCounter,
    identity::{AccountId, NAME_MAX_CHARS},
};
use crate::{
    config::Config,
    errors::{LedgerError, Result},
};

/// How the ledger reports a balance operation that refuses its input.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RejectionPolicy {
    /// Rejections come back as errors.
    #[default]
    Strict,
    /// Rejections are logged and treated as no-ops returning the unchanged balance.
    Silent,
}

/// The set of accounts tracked together, in the order they were opened.
#[derive(Debug)]
pub struct Ledger {
    accounts: Vec<Account>,
    counter: AccountCounter,
    last_id: Option<AccountId>,
    name_max_chars: usize,
    policy: RejectionPolicy,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            accounts: Vec::new(),
            counter: AccountCounter::new(),
            last_id: None,
            name_max_chars: NAME_MAX_CHARS,
            policy: RejectionPolicy::default(),
        }
    }
}

impl Ledger {
    pub fn new(config: &Config) -> Self {
        Self {
            name_max_chars: config.name_max_chars,
            policy: config.rejection_policy,
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: RejectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> RejectionPolicy {
        self.policy
    }

    /// Smallest id the next opened account may use, or `None` once `u32::MAX` is taken.
    pub fn next_account_id(&self) -> Option<AccountId> {
        match self.last_id {
            None => Some(AccountId(1)),
            Some(last) => last.0.checked_add(1).map(AccountId),
        }
    }

    pub fn open_savings(
        &mut self,
        id: AccountId,
        name: impl Into<String>,
        interest_rate: f64,
    ) -> Result<AccountId> {
        self.check_new_id(id)?;
        let account = Account::savings_with_name_limit(
            &self.counter,
            id,
            name,
            interest_rate,
            self.name_max_chars,
        )?;
        Ok(self.insert(account))
    }

    pub fn open_checking(
        &mut self,
        id: AccountId,
        name: impl Into<String>,
        overdraft_limit: f64,
    ) -> Result<AccountId> {
        self.check_new_id(id)?;
        let account = Account::checking_with_name_limit(
            &self.counter,
            id,
            name,
            overdraft_limit,
            self.name_max_chars,
        )?;
        Ok(self.insert(account))
    }

    pub fn deposit(&mut self, id: AccountId, amount: f64) -> Result<f64> {
        self.mutate(id, |account| account.deposit(amount))
    }

    pub fn withdraw(&mut self, id: AccountId, amount: f64) -> Result<f64> {
        self.mutate(id, |account| account.withdraw(amount))
    }

    pub fn apply_interest(&mut self, id: AccountId) -> Result<f64> {
        self.mutate(id, Account::apply_interest)
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id() == id)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Value of the creation counter owned by this ledger.
    pub fn accounts_created(&self) -> u64 {
        self.counter.current()
    }

    pub fn total_balance(&self) -> f64 {
        self.accounts.iter().map(Account::balance).sum()
    }

    fn check_new_id(&self, id: AccountId) -> Result<()> {
        if self.account(id).is_some() {
            return Err(LedgerError::DuplicateAccount(id));
        }
        if let Some(last) = self.last_id {
            if id <= last {
                return Err(LedgerError::NonIncreasingId { id, last });
            }
        }
        Ok(())
    }

    fn insert(&mut self, account: Account) -> AccountId {
        let id = account.id();
        tracing::info!(%id, kind = account.account_type(), name = account.name(), "account opened");
        self.accounts.push(account);
        self.last_id = Some(id);
        id
    }

    fn mutate<F>(&mut self, id: AccountId, op: F) -> Result<f64>
    where
        F: FnOnce(&mut Account) -> Result<f64>,
    {
        let policy = self.policy;
        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.id() == id)
            .ok_or(LedgerError::AccountNotFound(id))?;
        match op(&mut *account) {
            Err(err) if policy == RejectionPolicy::Silent && err.is_rejection() => {
                tracing::debug!(%id, error = %err, "operation ignored");
                Ok(account.balance())
            }
            other => other,
        }
    }
}
