//! Classified commit type after header parsing and type resolution.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker placed in front of type codes that have no known label.
pub const UNFORMATTED_PREFIX: &str = "[UNFORMATTED TYPE]";

/// The changelog section a commit belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CommitType {
    /// A type code resolved to a heading label (e.g. `fix` -> "Bug fixes").
    Labeled(String),

    /// A type code with no known label, kept verbatim.
    Unformatted(String),
}

impl CommitType {
    /// Returns true if the type code could not be resolved to a label.
    #[must_use]
    pub fn is_unformatted(&self) -> bool {
        matches!(self, Self::Unformatted(_))
    }

    /// Returns the heading label shown in the changelog.
    #[must_use]
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Self::Labeled(label) => Cow::Borrowed(label),
            Self::Unformatted(code) => Cow::Owned(format!("{UNFORMATTED_PREFIX} {code}")),
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A commit after its header has been parsed and its type resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedCommit {
    /// The commit hash (SHA).
    pub hash: String,

    /// The resolved commit type.
    pub r#type: CommitType,

    /// The optional scope.
    pub scope: Option<String>,

    /// The commit message (without type and scope prefix).
    pub message: String,

    /// Issue references (`#123`) found in the header or body, deduplicated.
    pub closed_issues: Vec<String>,
}

impl ClassifiedCommit {
    /// Creates a new classified commit builder.
    #[must_use]
    pub fn builder(hash: impl Into<String>, r#type: CommitType) -> ClassifiedCommitBuilder {
        ClassifiedCommitBuilder::new(hash, r#type)
    }

    /// Returns the heading label of this commit's type.
    #[must_use]
    pub fn label(&self) -> Cow<'_, str> {
        self.r#type.label()
    }

    /// Returns true if this commit has a scope.
    #[must_use]
    pub fn has_scope(&self) -> bool {
        self.scope.is_some()
    }
}

/// Builder for [`ClassifiedCommit`].
#[derive(Debug)]
pub struct ClassifiedCommitBuilder {
    hash: String,
    r#type: CommitType,
    scope: Option<String>,
    message: String,
    closed_issues: Vec<String>,
}

impl ClassifiedCommitBuilder {
    fn new(hash: impl Into<String>, r#type: CommitType) -> Self {
        Self {
            hash: hash.into(),
            r#type,
            scope: None,
            message: String::new(),
            closed_issues: Vec::new(),
        }
    }

    /// Sets the scope.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the closed issue references.
    #[must_use]
    pub fn closed_issues(mut self, issues: Vec<String>) -> Self {
        self.closed_issues = issues;
        self
    }

    /// Builds the [`ClassifiedCommit`].
    #[must_use]
    pub fn build(self) -> ClassifiedCommit {
        ClassifiedCommit {
            hash: self.hash,
            r#type: self.r#type,
            scope: self.scope,
            message: self.message,
            closed_issues: self.closed_issues,
        }
    }
}
