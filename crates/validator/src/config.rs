//! Validator configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dispatch::{DEFAULT_LANG, UnknownRulePolicy};

/// Settings for building a [`Validator`](crate::Validator).
///
/// Every field has a default, so a partial document is valid:
///
/// ```json
/// { "default_lang": "tr", "unknown_rules": "strict" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Language used by [`Validator::validate`](crate::Validator::validate).
    pub default_lang: String,

    /// Language tried when the requested one has no templates, and used
    /// when the requested language is empty.
    pub fallback_lang: String,

    /// Handling of clauses naming unregistered rules.
    pub unknown_rules: UnknownRulePolicy,

    /// Directory of `<lang>.json` template files, consulted before the
    /// embedded templates.
    pub locales_dir: Option<PathBuf>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            default_lang: DEFAULT_LANG.to_string(),
            fallback_lang: DEFAULT_LANG.to_string(),
            unknown_rules: UnknownRulePolicy::default(),
            locales_dir: None,
        }
    }
}

impl ValidatorConfig {
    /// Parses a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON file.
    ///
    /// A relative `locales_dir` is resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_json_str(&contents)?;
        if let (Some(dir), Some(base)) = (&config.locales_dir, path.parent())
            && dir.is_relative()
        {
            config.locales_dir = Some(base.join(dir));
        }
        Ok(config)
    }
}

/// Errors raised while loading a [`ValidatorConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid configuration JSON.
    #[error("invalid validator config: {0}")]
    Parse(#[from] serde_json::Error),
}
