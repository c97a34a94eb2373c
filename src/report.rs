//! Plain-text rendering of account state.
//!
//! Reads accounts only through their public accessors.

use crate::{
    config::Config,
    ledger::{Account, Ledger},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Adds the `Type:` line.
    pub detailed: bool,
    pub currency_symbol: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            detailed: false,
            currency_symbol: "$".into(),
        }
    }
}

impl From<&Config> for ReportOptions {
    fn from(config: &Config) -> Self {
        Self {
            detailed: config.detailed_report,
            currency_symbol: config.currency_symbol.clone(),
        }
    }
}

/// Formats an amount with two decimals behind the currency symbol, e.g. `$-300.00`.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    // -0.0 would otherwise print as "-0.00"
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("{symbol}{amount:.2}")
}

pub fn render_account(account: &Account, options: &ReportOptions) -> String {
    let mut out = format!(
        "Account ID: {}\nName: {}\nBalance: {}\n",
        account.id(),
        account.name(),
        format_amount(account.balance(), &options.currency_symbol)
    );
    if options.detailed {
        out.push_str(&format!("Type: {}\n", account.account_type()));
    }
    out
}

/// Renders every account in opening order followed by the creation count.
pub fn render_ledger(ledger: &Ledger, options: &ReportOptions) -> String {
    let mut out = String::new();
    for account in ledger.accounts() {
        out.push_str(&render_account(account, options));
        out.push('\n');
    }
    out.push_str(&format!(
        "Total accounts created: {}\n",
        ledger.accounts_created()
    ));
    out
}
