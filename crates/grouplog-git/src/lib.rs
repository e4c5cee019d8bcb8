//! Git log retrieval for Grouplog.
//!
//! This crate provides Git operations:
//! - Repository discovery
//! - Revision range resolution
//! - Commit retrieval

mod error;
mod range;
mod repository;

pub use error::{GitError, GitResult};
pub use range::{DEFAULT_UPPER_BOUND, RevisionRange};
pub use repository::Repository;
