//! Commit ordering and grouping into changelog sections.

use std::cmp::Ordering;
use std::collections::HashMap;

use grouplog_commit::ClassifiedCommit;

/// A changelog section: every commit sharing one heading label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The heading label.
    pub label: String,

    /// The commits under this heading, in display order.
    pub commits: Vec<ClassifiedCommit>,
}

/// Orders two commits for display.
///
/// Recognized types come before unformatted ones, then labels ascend, then
/// scoped commits precede unscoped ones, then scopes ascend. Anything else
/// compares equal so a stable sort keeps arrival order.
///
/// Labels and scopes compare by Unicode code point.
pub fn compare_commits(a: &ClassifiedCommit, b: &ClassifiedCommit) -> Ordering {
    a.r#type
        .is_unformatted()
        .cmp(&b.r#type.is_unformatted())
        .then_with(|| a.label().cmp(&b.label()))
        .then_with(|| b.has_scope().cmp(&a.has_scope()))
        .then_with(|| match (&a.scope, &b.scope) {
            (Some(a), Some(b)) => a.cmp(b),
            _ => Ordering::Equal,
        })
}

/// Sorts commits in place for display. The sort is stable.
pub fn sort_commits(commits: &mut [ClassifiedCommit]) {
    commits.sort_by(compare_commits);
}

/// Partitions commits into sections keyed by heading label.
///
/// Sections appear in the order their label is first seen; commits keep
/// their relative order inside a section.
pub fn group_by_type(commits: Vec<ClassifiedCommit>) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for commit in commits {
        let label = commit.label().into_owned();
        let position = *index.entry(label.clone()).or_insert_with(|| {
            sections.push(Section {
                label,
                commits: Vec::new(),
            });
            sections.len() - 1
        });
        sections[position].commits.push(commit);
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use grouplog_commit::CommitType;

    fn labeled(hash: &str, label: &str, scope: Option<&str>) -> ClassifiedCommit {
        build(hash, CommitType::Labeled(label.to_string()), scope)
    }

    fn unformatted(hash: &str, code: &str, scope: Option<&str>) -> ClassifiedCommit {
        build(hash, CommitType::Unformatted(code.to_string()), scope)
    }

    fn build(hash: &str, r#type: CommitType, scope: Option<&str>) -> ClassifiedCommit {
        let builder = ClassifiedCommit::builder(hash, r#type).message(hash);
        match scope {
            Some(scope) => builder.scope(scope).build(),
            None => builder.build(),
        }
    }

    fn sorted_hashes(mut commits: Vec<ClassifiedCommit>) -> Vec<String> {
        sort_commits(&mut commits);
        commits.into_iter().map(|c| c.hash).collect()
    }

    #[test]
    fn test_labels_ascend() {
        let commits = vec![
            labeled("1", "Features", None),
            labeled("2", "Bug fixes", None),
            labeled("3", "Documentation", None),
        ];
        assert_eq!(sorted_hashes(commits), ["2", "3", "1"]);
    }

    #[test]
    fn test_labels_compare_by_code_point() {
        let commits = vec![
            labeled("1", "\u{1f680} Deploys", None),
            labeled("2", "\u{ff21}PI", None),
            labeled("3", "\u{e9}tudes", None),
        ];
        assert_eq!(sorted_hashes(commits), ["3", "2", "1"]);
    }

    #[test]
    fn test_unformatted_after_recognized() {
        let commits = vec![
            unformatted("1", "aaa", None),
            labeled("2", "UX", None),
            labeled("3", "Bug fixes", None),
        ];
        assert_eq!(sorted_hashes(commits), ["3", "2", "1"]);
    }

    #[test]
    fn test_unformatted_sorted_among_themselves() {
        let commits = vec![
            unformatted("1", "wip", None),
            unformatted("2", "hack", None),
        ];
        assert_eq!(sorted_hashes(commits), ["2", "1"]);
    }

    #[test]
    fn test_scoped_before_unscoped() {
        let commits = vec![
            labeled("1", "Features", None),
            labeled("2", "Features", Some("zeta")),
            labeled("3", "Features", None),
            labeled("4", "Features", Some("alpha")),
        ];
        assert_eq!(sorted_hashes(commits), ["4", "2", "1", "3"]);
    }

    #[test]
    fn test_same_scope_keeps_arrival_order() {
        let commits = vec![
            labeled("1", "Bug fixes", Some("ui")),
            labeled("2", "Bug fixes", Some("api")),
            labeled("3", "Bug fixes", Some("ui")),
        ];
        assert_eq!(sorted_hashes(commits), ["2", "1", "3"]);
    }

    #[test]
    fn test_unscoped_keep_arrival_order() {
        let commits: Vec<_> = (0..10)
            .map(|i| labeled(&i.to_string(), "Testing", None))
            .collect();
        let expected: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        assert_eq!(sorted_hashes(commits), expected);
    }

    #[test]
    fn test_compare_is_equal_for_identical_keys() {
        let a = labeled("1", "Build", Some("ci"));
        let b = labeled("2", "Build", Some("ci"));
        assert_eq!(compare_commits(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_group_preserves_first_seen_order() {
        let commits = vec![
            labeled("1", "Features", None),
            labeled("2", "Bug fixes", None),
            labeled("3", "Features", None),
        ];
        let sections = group_by_type(commits);

        let labels: Vec<_> = sections.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Features", "Bug fixes"]);
        assert_eq!(sections[0].commits.len(), 2);
        assert_eq!(sections[0].commits[1].hash, "3");
    }

    #[test]
    fn test_group_unformatted_label() {
        let sections = group_by_type(vec![unformatted("1", "wip", None)]);
        assert_eq!(sections[0].label, "[UNFORMATTED TYPE] wip");
    }

    #[test]
    fn test_group_empty() {
        assert!(group_by_type(Vec::new()).is_empty());
    }
}
