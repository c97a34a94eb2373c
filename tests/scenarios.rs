use account_ledger::ledger::{Account, AccountCounter, AccountId, Ledger, RejectionPolicy};

#[test]
fn savings_deposit_then_interest() {
    let counter = AccountCounter::new();
    let mut alice = Account::savings(&counter, AccountId(1), "Alice", 0.05).unwrap();

    assert_eq!(alice.deposit(1000.0).unwrap(), 1000.0);
    assert_eq!(alice.apply_interest().unwrap(), 1050.0);
}

#[test]
fn checking_withdraw_into_overdraft() {
    let counter = AccountCounter::new();
    let mut bob = Account::checking(&counter, AccountId(2), "Bob", 500.0).unwrap();

    bob.deposit(500.0).unwrap();
    assert_eq!(bob.withdraw(800.0).unwrap(), -300.0);
}

#[test]
fn checking_withdraw_beyond_overdraft_is_no_op() {
    let counter = AccountCounter::new();
    let mut account = Account::checking(&counter, AccountId(3), "Empty", 500.0).unwrap();

    assert!(account.withdraw(600.0).is_err());
    assert_eq!(account.balance(), 0.0);
}

#[test]
fn negative_withdrawal_is_no_op_for_every_variant() {
    let mut ledger = Ledger::default().with_policy(RejectionPolicy::Silent);
    let savings = ledger.open_savings(AccountId(1), "Alice", 0.05).unwrap();
    let checking = ledger.open_checking(AccountId(2), "Bob", 500.0).unwrap();
    ledger.deposit(savings, 20.0).unwrap();
    ledger.deposit(checking, 20.0).unwrap();

    assert_eq!(ledger.withdraw(savings, -5.0).unwrap(), 20.0);
    assert_eq!(ledger.withdraw(checking, -5.0).unwrap(), 20.0);
}

#[test]
fn counter_counts_created_accounts() {
    let counter = AccountCounter::new();
    let _first = Account::savings(&counter, AccountId(1), "Alice", 0.05).unwrap();
    let _second = Account::checking(&counter, AccountId(2), "Bob", 500.0).unwrap();

    assert_eq!(counter.current(), 2);
}

#[test]
fn separate_counters_do_not_interfere() {
    let mut first = Ledger::default();
    let second = Ledger::default();
    first.open_savings(AccountId(1), "Alice", 0.05).unwrap();

    assert_eq!(first.accounts_created(), 1);
    assert_eq!(second.accounts_created(), 0);
}
