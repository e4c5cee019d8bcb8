//! Changelog generation pipeline.

use grouplog_commit::{ClassifiedCommit, RawCommit};
use grouplog_git::{Repository, RevisionRange};
use tracing::info;

use crate::{
    Classifier, CoreResult, MarkdownRenderer, Section, TypeLabels, group_by_type, sort_commits,
};

/// Classifies, orders, groups and renders commits.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    labels: TypeLabels,
    renderer: MarkdownRenderer,
}

impl Pipeline {
    /// Creates a pipeline resolving types through `labels`.
    #[must_use]
    pub fn new(labels: TypeLabels) -> Self {
        Self {
            labels,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Classifies raw commits, dropping unconventional ones.
    pub fn classify(&self, raw_commits: &[RawCommit]) -> Vec<ClassifiedCommit> {
        Classifier::new(&self.labels).classify_all(raw_commits)
    }

    /// Classifies, sorts and groups raw commits into sections.
    pub fn sections(&self, raw_commits: &[RawCommit]) -> Vec<Section> {
        let mut commits = self.classify(raw_commits);
        sort_commits(&mut commits);
        group_by_type(commits)
    }

    /// Renders the changelog for `raw_commits`.
    ///
    /// Returns `None` when there are no commits at all. When commits exist but
    /// none is conventional, the result is an empty string.
    pub fn run(&self, raw_commits: &[RawCommit]) -> Option<String> {
        if raw_commits.is_empty() {
            return None;
        }

        let sections = self.sections(raw_commits);
        info!(
            commits = raw_commits.len(),
            sections = sections.len(),
            "rendering changelog"
        );

        Some(self.renderer.render(&sections))
    }

    /// Reads `range` from `repo` and renders its changelog.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit log cannot be read.
    pub fn generate(&self, repo: &Repository, range: &RevisionRange) -> CoreResult<Option<String>> {
        let raw_commits = repo.log(range)?;
        info!(%range, count = raw_commits.len(), "found commits");
        Ok(self.run(&raw_commits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository as Git2Repository, Signature, Time};
    use tempfile::TempDir;

    use crate::LINE_ENDING;

    fn raw(hash: &str, header: &str, body: &str) -> RawCommit {
        RawCommit::new(hash, header, body)
    }

    fn lines(text: &str) -> Vec<&str> {
        text.split(LINE_ENDING).collect()
    }

    #[test]
    fn test_empty_input_produces_nothing() {
        assert_eq!(Pipeline::default().run(&[]), None);
    }

    #[test]
    fn test_no_conventional_commits_produces_empty_text() {
        let output = Pipeline::default()
            .run(&[raw("h1", "Merge pull request #5", "")])
            .unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_fix_and_feature() {
        let output = Pipeline::default()
            .run(&[raw("h1", "fix: a", ""), raw("h2", "feat(ui): b", "closes #3")])
            .unwrap();

        assert_eq!(
            lines(&output),
            [
                "",
                "### Bug fixes",
                "",
                "- a [h1]",
                "",
                "### Features",
                "",
                "- **ui**: b [h2, #3]",
            ]
        );
    }

    #[test]
    fn test_malformed_commits_are_excluded() {
        let output = Pipeline::default()
            .run(&[
                raw("h1", "updated stuff", ""),
                raw("h2", "docs: readme", ""),
                raw("h3", "Fix: capitalised", ""),
            ])
            .unwrap();

        assert!(output.contains("- readme [h2]"));
        assert!(!output.contains("h1"));
        assert!(!output.contains("h3"));
    }

    #[test]
    fn test_unformatted_groups_last() {
        let output = Pipeline::default()
            .run(&[
                raw("h1", "aaa: first alphabetically", ""),
                raw("h2", "wip: stuff", ""),
                raw("h3", "ux: polish", ""),
            ])
            .unwrap();

        let headings: Vec<_> = lines(&output)
            .into_iter()
            .filter(|line| line.starts_with("### "))
            .collect();
        assert_eq!(
            headings,
            [
                "### UX",
                "### [UNFORMATTED TYPE] aaa",
                "### [UNFORMATTED TYPE] wip",
            ]
        );
    }

    #[test]
    fn test_scoped_entries_first_within_section() {
        let output = Pipeline::default()
            .run(&[
                raw("h1", "fix: unscoped one", ""),
                raw("h2", "fix(db): scoped", ""),
                raw("h3", "fix: unscoped two", ""),
                raw("h4", "fix(api): scoped", ""),
            ])
            .unwrap();

        assert_eq!(
            lines(&output)[3..],
            [
                "- **api**: scoped [h4]",
                "- **db**: scoped [h2]",
                "- unscoped one [h1]",
                "- unscoped two [h3]",
            ]
        );
    }

    #[test]
    fn test_issue_in_header_and_body_once() {
        let output = Pipeline::default()
            .run(&[raw("h1", "fix: crash #12", "Fixes #12 and #13")])
            .unwrap();
        assert!(output.contains("- crash #12 [h1, #12, #13]"));
    }

    #[test]
    fn test_configured_labels() {
        let labels = TypeLabels::builtin().with_label("rm", "Deprecations");
        let output = Pipeline::new(labels)
            .run(&[raw("h1", "deprecate: old cursor api", "")])
            .unwrap();
        assert!(output.contains("### Deprecations"));
    }

    #[test]
    fn test_deterministic() {
        let commits = [
            raw("h1", "perf(idx): faster", ""),
            raw("h2", "chore: bump", "#1"),
            raw("h3", "oops: x", ""),
            raw("h4", "perf: general", ""),
        ];
        let pipeline = Pipeline::default();
        assert_eq!(pipeline.run(&commits), pipeline.run(&commits));
    }

    #[test]
    fn test_generate_from_repository() {
        let temp_dir = TempDir::new().unwrap();
        let git2_repo = Git2Repository::init(temp_dir.path()).unwrap();
        let tree_id = git2_repo.index().unwrap().write_tree().unwrap();
        let tree = git2_repo.find_tree(tree_id).unwrap();

        let mut parent: Option<git2::Commit<'_>> = None;
        for (seconds, message) in [(1, "chore: init"), (2, "feat(api): add get_all\n\nCloses #8")] {
            let sig = Signature::new("Test", "test@example.com", &Time::new(seconds, 0)).unwrap();
            let oid = {
                let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
                git2_repo
                    .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
                    .unwrap()
            };
            parent = Some(git2_repo.find_commit(oid).unwrap());
        }
        let head = parent.unwrap().id().to_string();

        let repo = Repository::open(temp_dir.path()).unwrap();
        let range = RevisionRange::new(Some("HEAD~1".into()), None);
        let output = Pipeline::default().generate(&repo, &range).unwrap().unwrap();

        assert_eq!(
            lines(&output),
            [
                "",
                "### Features",
                "",
                format!("- **api**: add get_all [{head}, #8]").as_str(),
            ]
        );
    }

    #[test]
    fn test_generate_empty_range() {
        let temp_dir = TempDir::new().unwrap();
        Git2Repository::init(temp_dir.path()).unwrap();

        let repo = Repository::open(temp_dir.path()).unwrap();
        let output = Pipeline::default()
            .generate(&repo, &RevisionRange::full())
            .unwrap();
        assert!(output.is_none());
    }
}
