//! Revision range passed to the log query.

use std::fmt;

/// Upper bound used when only a lower bound is given.
pub const DEFAULT_UPPER_BOUND: &str = "HEAD";

/// A `from..to` revision range.
///
/// `from` is exclusive and `to` is inclusive, matching `git log from..to`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevisionRange {
    /// Exclusive lower bound.
    pub from: Option<String>,

    /// Inclusive upper bound.
    pub to: Option<String>,
}

impl RevisionRange {
    /// Creates a range, defaulting the upper bound to `HEAD` when only a
    /// lower bound is given.
    #[must_use]
    pub fn new(from: Option<String>, to: Option<String>) -> Self {
        let to = match (&from, to) {
            (Some(_), None) => Some(DEFAULT_UPPER_BOUND.to_string()),
            (_, to) => to,
        };
        Self { from, to }
    }

    /// The whole history reachable from `HEAD`.
    #[must_use]
    pub fn full() -> Self {
        Self::default()
    }

    /// Returns the revision the walk starts from.
    #[must_use]
    pub fn tip(&self) -> &str {
        self.to.as_deref().unwrap_or(DEFAULT_UPPER_BOUND)
    }
}

impl fmt::Display for RevisionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.from {
            Some(from) => write!(f, "{from}..{}", self.tip()),
            None => f.write_str(self.tip()),
        }
    }
}
