//! Error types for instance loading.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for instance operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a workflow instance.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The instance file could not be read.
    #[error("Failed to read workflow instance at {}: {source}", path.display())]
    #[diagnostic(
        code(wfgraph::instance::io_error),
        help("Check that the path exists and that you have permission to read it")
    )]
    Io {
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
        /// The file being read.
        path: PathBuf,
    },

    /// The instance is not valid JSON or lacks `workflow.tasks`.
    #[error("Invalid workflow instance{}: {source}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    #[diagnostic(
        code(wfgraph::instance::json_error),
        help("A workflow instance is a WfCommons JSON document with a 'workflow.tasks' array")
    )]
    Json {
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
        /// The file being parsed, if any.
        path: Option<PathBuf>,
    },

    /// A recipe name that is not in the catalog.
    #[error("Invalid recipe '{name}'. Valid recipes are: {}", valid.join(", "))]
    #[diagnostic(code(wfgraph::instance::unknown_recipe))]
    UnknownRecipe {
        /// The requested name.
        name: String,
        /// Names in the catalog.
        valid: Vec<&'static str>,
    },

    /// The instance does not belong to the requested recipe.
    #[error("Workflow instance '{instance}' is not a '{expected}' workflow")]
    #[diagnostic(
        code(wfgraph::instance::recipe_mismatch),
        help("Drop the recipe option or pick the recipe the instance was generated from")
    )]
    RecipeMismatch {
        /// The requested recipe.
        expected: String,
        /// The instance name.
        instance: String,
    },

    /// The task list could not be converted.
    #[error(transparent)]
    #[diagnostic(code(wfgraph::instance::graph_error))]
    Graph(#[from] wfgraph_task_graph::Error),
}
