use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept in an account name.
pub const NAME_MAX_CHARS: usize = 49;

/// Caller-assigned, non-negative account identifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct AccountId(pub u32);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name bounded to a fixed number of characters.
///
/// Longer input is cut at the bound without error. Truncation counts `char`s,
/// so a multi-byte code point is never split.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AccountName(String);

impl AccountName {
    /// Builds a name bounded to [`NAME_MAX_CHARS`].
    pub fn new(raw: impl Into<String>) -> Self {
        Self::with_limit(raw, NAME_MAX_CHARS)
    }

    /// Builds a name bounded to `max_chars` characters.
    pub fn with_limit(raw: impl Into<String>, max_chars: usize) -> Self {
        let mut value = raw.into();
        if let Some((cut, _)) = value.char_indices().nth(max_chars) {
            tracing::debug!(
                original_len = value.chars().count(),
                max_chars,
                "truncating account name"
            );
            value.truncate(cut);
        }
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AccountName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
