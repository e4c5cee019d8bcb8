//! Commit types for Grouplog.
//!
//! This crate provides the commit types shared by the workspace:
//! - [`RawCommit`]: A commit as retrieved from Git
//! - [`ClassifiedCommit`]: A commit after header parsing and type resolution
//! - [`CommitType`]: The resolved changelog section of a commit

mod classified;
mod raw;

pub use classified::{ClassifiedCommit, ClassifiedCommitBuilder, CommitType, UNFORMATTED_PREFIX};
pub use raw::RawCommit;
