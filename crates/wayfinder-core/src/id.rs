use crate::error::UriError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A record identifier.
///
/// Identifiers are non-negative integers naming exactly one record
/// across all data repositories. They carry no structure beyond their
/// numeric value; qualifier arguments travel alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Returns the directory tree for this identifier: the decimal form
    /// split into groups of three digits, left to right.
    ///
    /// `1360391327` becomes `136/039/132/7`.
    pub fn tree_path(&self) -> String {
        let digits = self.0.to_string();
        let mut groups = Vec::with_capacity(digits.len() / 3 + 1);

        let mut rest = digits.as_str();
        while rest.len() > 3 {
            let (head, tail) = rest.split_at(3);
            groups.push(head);
            rest = tail;
        }
        groups.push(rest);

        groups.join("/")
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for RecordId {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| UriError::MalformedIdentifier(s.to_string()))
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
