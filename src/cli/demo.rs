use crate::{
    config::Config,
    errors::Result,
    ledger::{AccountId, Ledger},
};

/// Result of replaying the sample account session.
#[derive(Debug)]
pub struct DemoRun {
    pub ledger: Ledger,
    /// Messages for operations the ledger refused.
    pub rejections: Vec<String>,
}

/// Replays the sample session: a 5% savings account for Alice and a checking
/// account with a 500 overdraft for Bob, one deposit each, one interest run,
/// and an oversized savings withdrawal.
pub fn run_demo(config: &Config) -> Result<DemoRun> {
    let mut ledger = Ledger::new(config);
    let mut rejections = Vec::new();

    let savings = ledger.open_savings(AccountId(1), "Alice Smith", 0.05)?;
    let checking = ledger.open_checking(AccountId(2), "Bob Jones", 500.0)?;

    ledger.deposit(savings, 1000.0)?;
    ledger.deposit(checking, 500.0)?;
    ledger.apply_interest(savings)?;

    match ledger.withdraw(savings, 5000.0) {
        Ok(_) => {}
        Err(err) if err.is_rejection() => rejections.push(format!("Withdrawal rejected: {err}")),
        Err(err) => return Err(err),
    }

    Ok(DemoRun { ledger, rejections })
}
