//! Type code to heading label table.

use std::collections::HashMap;

use grouplog_commit::CommitType;
use grouplog_config::Config;

use crate::CoreResult;

const BUILTIN_LABELS: &[(&str, &str)] = &[
    ("fix", "Bug fixes"),
    ("revert", "Reverted commits"),
    ("refactor", "Refactorings"),
    ("config", "Configuration"),
    ("chore", "Maintenance"),
    ("feat", "Features"),
    ("docs", "Documentation"),
    ("perf", "Performance improvements"),
    ("test", "Testing"),
    ("ux", "UX"),
    ("build", "Build"),
];

// `rm` has no built-in label, so the deprecation aliases stay unformatted
// unless a configuration supplies one.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("deprecate", "rm"),
    ("deprecation", "rm"),
    ("ci", "build"),
    ("feature", "feat"),
    ("tests", "test"),
];

/// Immutable lookup from commit type codes to changelog heading labels.
///
/// Codes resolve through `labels` first and then through one level of
/// `aliases` (an alias names another code, never a label).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLabels {
    labels: HashMap<String, String>,
    aliases: HashMap<String, String>,
}

impl TypeLabels {
    /// Creates the built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            labels: owned_map(BUILTIN_LABELS),
            aliases: owned_map(BUILTIN_ALIASES),
        }
    }

    /// Creates the built-in table with the configured labels and aliases
    /// merged over it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &Config) -> CoreResult<Self> {
        config.validate()?;

        let mut table = Self::builtin();
        for (code, label) in &config.labels {
            table = table.with_label(code, label);
        }
        for (code, target) in &config.aliases {
            table = table.with_alias(code, target);
        }
        Ok(table)
    }

    /// Adds or replaces the label for a type code.
    #[must_use]
    pub fn with_label(mut self, code: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(code.into(), label.into());
        self
    }

    /// Adds or replaces an alias from one type code to another.
    #[must_use]
    pub fn with_alias(mut self, code: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.insert(code.into(), target.into());
        self
    }

    /// Returns the heading label for a type code, if one is known.
    #[must_use]
    pub fn label(&self, code: &str) -> Option<&str> {
        self.labels
            .get(code)
            .or_else(|| {
                self.aliases
                    .get(code)
                    .and_then(|target| self.labels.get(target))
            })
            .map(String::as_str)
    }

    /// Resolves a type code into a [`CommitType`].
    #[must_use]
    pub fn resolve(&self, code: &str) -> CommitType {
        match self.label(code) {
            Some(label) => CommitType::Labeled(label.to_string()),
            None => CommitType::Unformatted(code.to_string()),
        }
    }
}

fn owned_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

impl Default for TypeLabels {
    fn default() -> Self {
        Self::builtin()
    }
}
