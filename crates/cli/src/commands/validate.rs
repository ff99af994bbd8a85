use crate::errors::CliError;
use crate::output::{OutputFormat, render_report};
use std::path::Path;
use tracing::instrument;
use wfgraph_instance::WorkflowInstance;
use wfgraph_task_graph::ValidationReport;

pub struct ValidateOutcome {
    pub report: ValidationReport,
    pub rendered: String,
}

impl ValidateOutcome {
    /// Fail if the report found a cycle or an undeclared data edge.
    pub fn ensure_clean(&self) -> Result<(), CliError> {
        let mut problems = Vec::new();
        if !self.report.is_acyclic() {
            problems.push("the children graph has a cycle".to_string());
        }
        if !self.report.is_consistent() {
            problems.push(format!(
                "{} data edge(s) are not declared as children",
                self.report.undeclared_data_edges.len()
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(CliError::ValidationFailed {
                problems: problems.join("; "),
            })
        }
    }
}

#[instrument(skip(format))]
pub fn execute_validate(
    instance: &Path,
    format: OutputFormat,
) -> Result<ValidateOutcome, CliError> {
    let graph = WorkflowInstance::from_path(instance)?.build_graph()?;
    let report = graph.validate();

    tracing::debug!(
        has_cycles = report.has_cycles,
        undeclared = report.undeclared_data_edges.len(),
        "Validated workflow graph"
    );

    let rendered = render_report(&graph, &report, format)?;
    Ok(ValidateOutcome { report, rendered })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(contents: &str) -> ValidateOutcome {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instance.json");
        std::fs::write(&path, contents).unwrap();
        execute_validate(&path, OutputFormat::Text).unwrap()
    }

    #[test]
    fn test_clean_workflow_passes_strict() {
        let outcome = validate(
            r#"{"workflow": {"tasks": [
                {"name": "a", "runtime": 1, "children": ["b"],
                 "files": [{"link": "output", "name": "x", "size": 1}]},
                {"name": "b", "runtime": 1, "children": [],
                 "files": [{"link": "input", "name": "x", "size": 1}]}
            ]}}"#,
        );

        assert!(outcome.ensure_clean().is_ok());
        assert!(outcome.rendered.contains("acyclic: yes"));
    }

    #[test]
    fn test_cycle_fails_strict() {
        let outcome = validate(
            r#"{"workflow": {"tasks": [
                {"name": "a", "runtime": 1, "children": ["b"], "files": []},
                {"name": "b", "runtime": 1, "children": ["a"], "files": []}
            ]}}"#,
        );

        let err = outcome.ensure_clean().unwrap_err();
        assert!(err.to_string().contains("cycle"));
    }

    #[test]
    fn test_lookup_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instance.json");
        std::fs::write(
            &path,
            r#"{"workflow": {"tasks": [
                {"name": "a", "runtime": 1, "children": ["ghost"], "files": []}
            ]}}"#,
        )
        .unwrap();

        let err = execute_validate(&path, OutputFormat::Text)
            .err()
            .expect("validation should fail");
        assert!(err.to_string().contains("unknown child task 'ghost'"));
    }
}
