//! Raw commit type as retrieved from Git.

use serde::{Deserialize, Serialize};

/// A commit as retrieved from Git, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    /// The commit hash (SHA).
    pub hash: String,

    /// The commit subject line.
    pub header: String,

    /// The commit body (everything after the subject), possibly empty.
    pub body: String,
}

impl RawCommit {
    /// Creates a new raw commit.
    #[must_use]
    pub fn new(hash: impl Into<String>, header: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            header: header.into(),
            body: body.into(),
        }
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_hash(&self) -> &str {
        &self.hash[..7.min(self.hash.len())]
    }
}
