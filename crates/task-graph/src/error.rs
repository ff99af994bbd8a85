//! Error types for workflow graph construction.

use thiserror::Error;

/// Result type for workflow graph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or traversing a workflow graph.
///
/// Variants fall into two families: malformed input (a record is
/// structurally incomplete) and lookup failures (a record references a
/// task that does not exist). Use [`Error::is_malformed_input`] and
/// [`Error::is_lookup_failure`] to tell them apart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A task record lacks a required field.
    #[error("Task #{index}{} is missing required field '{field}'", display_name(.task.as_deref()))]
    MissingField {
        /// Position of the record in the input sequence.
        index: usize,
        /// Name of the task, when the name itself is present.
        task: Option<String>,
        /// The missing field.
        field: &'static str,
    },

    /// A file artifact record is incomplete or carries an unknown link tag.
    #[error("Task '{task}' has a malformed file at position {index}: {reason}")]
    MalformedFile {
        /// The task that declares the file.
        task: String,
        /// Position of the file within the task's file list.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// A task declares a negative or non-finite runtime.
    #[error("Task '{task}' has invalid runtime {runtime}")]
    InvalidRuntime {
        /// The offending task.
        task: String,
        /// The declared runtime.
        runtime: f64,
    },

    /// Two records share the same task name.
    #[error("Task name '{name}' is declared twice (records #{first} and #{second})")]
    DuplicateTask {
        /// The repeated name.
        name: String,
        /// Position of the first declaration.
        first: usize,
        /// Position of the repeated declaration.
        second: usize,
    },

    /// A task lists a child that doesn't exist.
    #[error("Task '{task}' lists unknown child task '{child}'")]
    MissingChild {
        /// The task declaring the child.
        task: String,
        /// The name that could not be resolved.
        child: String,
    },

    /// Several unresolvable child names were found.
    #[error("Unknown child tasks: {}", format_missing(.missing))]
    MissingChildren {
        /// List of (task, missing child) pairs.
        missing: Vec<(String, String)>,
    },

    /// The bytes a consumer reads from one producer don't fit in a `u64`.
    #[error("Data sent from task '{producer}' to task '{consumer}' exceeds {} bytes", u64::MAX)]
    WeightOverflow {
        /// The producing task.
        producer: String,
        /// The consuming task.
        consumer: String,
    },

    /// A dependency cycle was found where an ordering was requested.
    #[error("Cycle detected in workflow graph: {message}")]
    CycleDetected {
        /// Human-readable description of the cycle.
        message: String,
    },
}

impl Error {
    /// Whether this error signals a structurally incomplete description.
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::MalformedFile { .. }
                | Self::InvalidRuntime { .. }
                | Self::DuplicateTask { .. }
                | Self::WeightOverflow { .. }
        )
    }

    /// Whether this error signals a reference to a task that doesn't exist.
    #[must_use]
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::MissingChild { .. } | Self::MissingChildren { .. })
    }
}

fn display_name(task: Option<&str>) -> String {
    task.map(|name| format!(" ('{name}')")).unwrap_or_default()
}

fn format_missing(missing: &[(String, String)]) -> String {
    missing
        .iter()
        .map(|(task, child)| format!("Task '{task}' lists unknown child task '{child}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
