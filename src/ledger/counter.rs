use std::sync::atomic::{AtomicU64, Ordering};

/// Counts how many accounts have been created.
///
/// The counter is owned by whoever creates accounts (usually a [`Ledger`](super::Ledger))
/// and handed to the constructors by reference. It never issues account ids.
#[derive(Debug, Default)]
pub struct AccountCounter {
    created: AtomicU64,
}

impl AccountCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more created account.
    pub fn increment(&self) {
        self.created.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of accounts created so far.
    pub fn current(&self) -> u64 {
        self.created.load(Ordering::Relaxed)
    }
}
