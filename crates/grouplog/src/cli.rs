//! CLI definition.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use grouplog_config::find_and_load_config;
use grouplog_core::{Pipeline, TypeLabels};
use grouplog_git::{Repository, RevisionRange};

/// Generate a grouped markdown changelog from conventional commits.
///
/// Prints the changelog for the commits after FROM (excluded) up to TO
/// (included). Redirect the output to write it to a file.
#[derive(Debug, Parser)]
#[command(name = "grouplog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Revision to start after (tag, branch or commit); excluded
    pub from: Option<String>,

    /// Revision to stop at (defaults to HEAD); included
    pub to: Option<String>,
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        let config = find_and_load_config()
            .context("failed to load configuration")?
            .unwrap_or_default();
        let labels = TypeLabels::from_config(&config).context("invalid type labels")?;
        debug!(?config, "loaded configuration");

        let repo = Repository::discover().context("failed to open git repository")?;
        let range = RevisionRange::new(self.from, self.to);
        info!(%range, path = %repo.path().display(), "generating changelog");

        let changelog = Pipeline::new(labels)
            .generate(&repo, &range)
            .with_context(|| format!("failed to generate changelog for {range}"))?;

        let Some(changelog) = changelog else {
            info!("no commits in range");
            return Ok(());
        };

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{changelog}").context("failed to write changelog")?;
        Ok(())
    }
}
