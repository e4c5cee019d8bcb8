//! Configuration schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
///
/// Both tables are merged over the built-in type table; an empty file keeps
/// the built-in behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Extra or overriding heading labels, keyed by type code.
    #[serde(default)]
    pub labels: BTreeMap<String, String>,

    /// Extra or overriding aliases, from type code to type code.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl Config {
    /// Checks values that TOML alone cannot constrain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for empty labels, empty alias targets
    /// or aliases pointing at themselves.
    pub fn validate(&self) -> ConfigResult<()> {
        for (code, label) in &self.labels {
            if label.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("label for `{code}` is empty")));
            }
        }

        for (code, target) in &self.aliases {
            if target.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "alias target for `{code}` is empty"
                )));
            }
            if code == target {
                return Err(ConfigError::Invalid(format!(
                    "alias `{code}` points at itself"
                )));
            }
        }

        Ok(())
    }
}
