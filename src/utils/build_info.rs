/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub timestamp: &'static str,
    pub profile: &'static str,
}

impl BuildMetadata {
    /// Single-line summary, e.g. `account_ledger 0.0.1 (abc1234, release, 2026-01-01T00:00:00Z)`.
    pub fn summary(&self) -> String {
        format!(
            "account_ledger {} ({}, {}, {})",
            self.version, self.git_hash, self.profile, self.timestamp
        )
    }
}

/// Returns the statically-embedded build metadata.
pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("ACCOUNT_LEDGER_BUILD_HASH").unwrap_or("unknown"),
        timestamp: option_env!("ACCOUNT_LEDGER_BUILD_TIMESTAMP").unwrap_or("unknown"),
        profile: option_env!("ACCOUNT_LEDGER_BUILD_PROFILE").unwrap_or("unknown"),
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn summary_starts_with_crate_version() {
        let summary = super::current().summary();
        assert!(summary.starts_with(&format!("account_ledger {}", env!("CARGO_PKG_VERSION"))));
    }
}
