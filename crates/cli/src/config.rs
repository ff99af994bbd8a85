//! `wfgraph.toml` configuration.
//!
//! Settings resolve in order: command-line flag, environment variable,
//! configuration file, built-in default.

use crate::errors::CliError;
use crate::logging::{LogLevel, TracingFormat};
use crate::output::OutputFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "wfgraph.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default output format for `convert` and `validate`.
    pub format: Option<OutputFormat>,
    /// Default log level.
    pub level: Option<LogLevel>,
    /// Default log format.
    pub log_format: Option<TracingFormat>,
    /// Recipe every converted instance must belong to.
    pub recipe: Option<String>,
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, `wfgraph.toml` in the
    /// working directory is used when present and defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.is_file() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let contents = std::fs::read_to_string(&path)
            .map_err(|source| CliError::file_error("read configuration", &path, source))?;
        Self::parse(&path, &contents)
    }

    /// Parse configuration text; `path` is only used for diagnostics.
    pub fn parse(path: &Path, contents: &str) -> Result<Self, CliError> {
        toml::from_str(contents).map_err(|err| CliError::config_parse_error(path, contents, &err))
    }
}
