//! Header parsing, type resolution and issue extraction.

use std::collections::HashSet;
use std::sync::LazyLock;

use grouplog_commit::{ClassifiedCommit, RawCommit};
use regex::Regex;
use tracing::debug;

use crate::TypeLabels;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[a-z]+)(?:\((?P<scope>[a-zA-Z0-9_\s-]+)\))?:\s*(?P<message>.+)")
        .expect("invalid regex")
});

static ISSUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)#(?P<number>[0-9]+)").expect("invalid regex"));

/// Classifies raw commits against a [`TypeLabels`] table.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    labels: &'a TypeLabels,
}

impl<'a> Classifier<'a> {
    /// Creates a classifier that resolves types through `labels`.
    #[must_use]
    pub fn new(labels: &'a TypeLabels) -> Self {
        Self { labels }
    }

    /// Classifies a single commit.
    ///
    /// Returns `None` if the header is not of the form `type(scope): message`.
    pub fn classify(&self, raw: &RawCommit) -> Option<ClassifiedCommit> {
        let captures = HEADER_RE.captures(&raw.header)?;

        let code = captures.name("type")?.as_str();
        let message = captures.name("message")?.as_str();

        let mut builder = ClassifiedCommit::builder(&raw.hash, self.labels.resolve(code))
            .message(message)
            .closed_issues(extract_issues(&raw.header, &raw.body));

        if let Some(scope) = captures.name("scope") {
            builder = builder.scope(scope.as_str());
        }

        Some(builder.build())
    }

    /// Classifies every commit, dropping the ones whose header does not match.
    pub fn classify_all(&self, raw_commits: &[RawCommit]) -> Vec<ClassifiedCommit> {
        raw_commits
            .iter()
            .filter_map(|raw| {
                let classified = self.classify(raw);
                if classified.is_none() {
                    debug!(
                        hash = %raw.short_hash(),
                        header = %raw.header,
                        "skipping unconventional commit"
                    );
                }
                classified
            })
            .collect()
    }
}

/// Collects `#<number>` references from the body, then the header.
///
/// Duplicates are dropped, keeping the first occurrence.
pub fn extract_issues(header: &str, body: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    [body, header]
        .into_iter()
        .flat_map(|text| ISSUE_RE.captures_iter(text))
        .filter_map(|captures| captures.name("number"))
        .map(|number| format!("#{}", number.as_str()))
        .filter(|issue| seen.insert(issue.clone()))
        .collect()
}
