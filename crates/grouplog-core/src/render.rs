//! Markdown rendering of changelog sections.

use std::fmt::Write;

use grouplog_commit::ClassifiedCommit;

use crate::Section;

/// Line terminator of the host platform.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Line terminator of the host platform.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Renders sections as markdown.
///
/// Each section is a blank line, a `###` heading and a blank line, followed
/// by one list item per commit:
///
/// ```text
/// - **scope**: message [hash, #1, #2]
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Creates a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Renders sections into output lines, without terminators.
    pub fn render_lines(&self, sections: &[Section]) -> Vec<String> {
        let mut lines = Vec::new();

        for section in sections {
            lines.push(String::new());
            lines.push(format!("### {}", section.label));
            lines.push(String::new());
            lines.extend(section.commits.iter().map(Self::entry));
        }

        lines
    }

    /// Renders sections into text joined by [`LINE_ENDING`].
    pub fn render(&self, sections: &[Section]) -> String {
        self.render_lines(sections).join(LINE_ENDING)
    }

    fn entry(commit: &ClassifiedCommit) -> String {
        let mut line = String::from("- ");

        if let Some(scope) = &commit.scope {
            _ = write!(line, "**{scope}**: ");
        }

        _ = write!(line, "{} [{}", commit.message, commit.hash);

        for issue in &commit.closed_issues {
            _ = write!(line, ", {issue}");
        }

        line.push(']');
        line
    }
}
