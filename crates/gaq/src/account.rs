//! Account identifier validation.

use crate::Error;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

static ACCOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(UA|MO)-[0-9]{4,10}-[0-9]{1,3}$").expect("account pattern is valid")
});

/// A validated Google Analytics account ID, always uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Validate and normalize a raw account ID.
    ///
    /// Returns `None` unless `raw` matches `(UA|MO)-<4-10 digits>-<1-3 digits>`,
    /// ignoring case.
    pub fn parse(raw: &str) -> Option<Self> {
        if ACCOUNT_PATTERN.is_match(raw) {
            Some(Self(raw.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Re-validate an already validated ID. Always returns an equal ID.
    pub fn validate(&self) -> Self {
        self.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::InvalidAccount(s.to_string()))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> String {
        id.0
    }
}
