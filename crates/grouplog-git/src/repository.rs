//! Git repository wrapper.

use std::path::Path;

use git2::{Oid, Repository as Git2Repo, Sort};
use grouplog_commit::RawCommit;
use tracing::debug;

use crate::{GitError, GitResult, RevisionRange};

/// A Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Opens a repository at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a valid Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner = Git2Repo::open(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Discovers the repository from the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover() -> GitResult<Self> {
        Self::discover_from(".")
    }

    /// Discovers the repository from the given directory or its parents.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover_from(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner =
            Git2Repo::discover(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Returns the commits in `range`, newest first.
    ///
    /// Commits reachable from `range.from` are excluded; `range.to` (or
    /// `HEAD`) is included. A repository without commits yields an empty
    /// list when no explicit bounds are given.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound cannot be resolved or commits cannot be
    /// read.
    pub fn log(&self, range: &RevisionRange) -> GitResult<Vec<RawCommit>> {
        if range.from.is_none() && range.to.is_none() && self.inner.is_empty()? {
            debug!("repository has no commits");
            return Ok(Vec::new());
        }

        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push(self.resolve(range.tip())?)?;

        if let Some(from) = &range.from {
            revwalk.hide(self.resolve(from)?)?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.inner.find_commit(oid?)?;
            let latin1 = commit.message_encoding().is_some_and(is_latin1);
            let header = decode_message(commit.summary_bytes().unwrap_or_default(), latin1);
            let body = decode_message(commit.body_bytes().unwrap_or_default(), latin1);
            commits.push(RawCommit::new(
                commit.id().to_string(),
                header,
                body.trim_end(),
            ));
        }

        debug!(%range, count = commits.len(), "read commit log");
        Ok(commits)
    }

    /// Resolves a revision (tag, branch, hash, `HEAD~2`, ...) to a commit id.
    fn resolve(&self, revision: &str) -> GitResult<Oid> {
        self.inner
            .revparse_single(revision)
            .and_then(|object| object.peel_to_commit())
            .map(|commit| commit.id())
            .map_err(|_| GitError::RevisionNotFound(revision.to_string()))
    }
}

fn is_latin1(encoding: &str) -> bool {
    ["ISO-8859-1", "ISO8859-1", "LATIN1", "LATIN-1"]
        .iter()
        .any(|name| encoding.eq_ignore_ascii_case(name))
}

/// Decodes raw message bytes. Latin-1 maps each byte to its code point;
/// anything else is read as UTF-8 with invalid sequences replaced.
fn decode_message(bytes: &[u8], latin1: bool) -> String {
    if latin1 {
        bytes.iter().copied().map(char::from).collect()
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
