//! CLI error types with miette diagnostics
//!
//! Library errors keep their own diagnostic codes; this module adds the
//! failures that only exist at the command-line boundary.

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Instance(#[from] wfgraph_instance::Error),

    #[error("Configuration parsing failed: {message}")]
    #[diagnostic(
        code(wfgraph::cli::config_parse_error),
        help("Supported keys are format, level, log_format and recipe")
    )]
    ConfigParseError {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("error occurred here")]
        error_span: Option<SourceSpan>,
    },

    #[error("Failed to {operation} {}", path.display())]
    #[diagnostic(
        code(wfgraph::cli::file_error),
        help("Check file permissions and ensure the path exists")
    )]
    FileError {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize output")]
    #[diagnostic(code(wfgraph::cli::output_error))]
    OutputError {
        #[source]
        source: serde_json::Error,
    },

    #[error("Workflow graph failed validation: {problems}")]
    #[diagnostic(
        code(wfgraph::cli::validation_failed),
        help("Run without --strict to see the report without failing")
    )]
    ValidationFailed { problems: String },
}

impl CliError {
    pub fn file_error(
        operation: impl Into<String>,
        path: impl AsRef<Path>,
        source: std::io::Error,
    ) -> Self {
        Self::FileError {
            operation: operation.into(),
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn config_parse_error(path: &Path, contents: &str, err: &toml::de::Error) -> Self {
        Self::ConfigParseError {
            message: err.message().to_string(),
            src: NamedSource::new(path.display().to_string(), contents.to_string()),
            error_span: err.span().map(SourceSpan::from),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::OutputError { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_error_message() {
        let error = CliError::file_error(
            "write output to",
            "out/graph.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        );
        assert_eq!(error.to_string(), "Failed to write output to out/graph.json");
    }

    #[test]
    fn test_config_parse_error_has_span() {
        let contents = "format = [\n";
        let err = toml::from_str::<toml::Table>(contents).unwrap_err();
        let error = CliError::config_parse_error(Path::new("wfgraph.toml"), contents, &err);

        let CliError::ConfigParseError { error_span, .. } = &error else {
            panic!("Expected ConfigParseError");
        };
        assert!(error_span.is_some());
        assert!(error.to_string().starts_with("Configuration parsing failed"));
    }

    #[test]
    fn test_instance_error_keeps_diagnostic_code() {
        let error: CliError = "nope".parse::<wfgraph_instance::Recipe>().unwrap_err().into();
        let code = error.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("wfgraph::instance::unknown_recipe"));
    }
}
