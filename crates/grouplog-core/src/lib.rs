//! Core library for Grouplog.
//!
//! This crate turns raw commits into a grouped markdown changelog:
//! - [`TypeLabels`]: the type code to heading label table
//! - [`Classifier`]: header parsing, type resolution and issue extraction
//! - [`sort_commits`] and [`group_by_type`]: section ordering
//! - [`MarkdownRenderer`]: markdown output
//! - [`Pipeline`]: the whole pass, from a revision range to text

mod classify;
mod error;
mod labels;
mod order;
mod pipeline;
mod render;

pub use classify::{Classifier, extract_issues};
pub use error::{CoreError, CoreResult};
pub use labels::TypeLabels;
pub use order::{Section, compare_commits, group_by_type, sort_commits};
pub use pipeline::Pipeline;
pub use render::{LINE_ENDING, MarkdownRenderer};
