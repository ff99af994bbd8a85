//! Rendering of conversion results.

use serde::{Deserialize, Serialize};
use wfgraph_instance::Recipe;
use wfgraph_task_graph::{ValidationReport, WorkflowGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Forward graph, cost vector and edge weights as plain text
    #[default]
    Text,
    /// A single JSON document
    Json,
}

#[derive(Serialize)]
struct ConvertDocument<'a> {
    instance: Option<&'a str>,
    recipe: Option<Recipe>,
    #[serde(flatten)]
    graph: &'a WorkflowGraph,
}

/// Render a converted workflow.
pub fn render_graph(
    graph: &WorkflowGraph,
    instance: Option<&str>,
    recipe: Option<Recipe>,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&ConvertDocument {
            instance,
            recipe,
            graph,
        })
        .map(|mut json| {
            json.push('\n');
            json
        }),
        OutputFormat::Text => Ok(graph_text(graph)),
    }
}

fn graph_text(graph: &WorkflowGraph) -> String {
    let forward = graph
        .forward_graph()
        .iter()
        .map(|(task, children)| format!("{task}: {children:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    let cost = graph
        .cost()
        .as_slice()
        .iter()
        .map(|runtime| format!("{runtime:.4}"))
        .collect::<Vec<_>>()
        .join(", ");
    let weights = graph
        .edge_weights()
        .iter()
        .map(|((parent, child), bytes)| format!("({parent}, {child}): {bytes}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "# forward graph: parent -> [children]\n\
         {{{forward}}}\n\
         # cost: runtime per task\n\
         [{cost}]\n\
         # edge weights: (parent, child) -> bytes\n\
         {{{weights}}}\n"
    )
}

#[derive(Serialize)]
struct ValidateDocument<'a> {
    tasks: usize,
    data_edges: usize,
    #[serde(flatten)]
    report: &'a ValidationReport,
}

/// Render a validation report.
pub fn render_report(
    graph: &WorkflowGraph,
    report: &ValidationReport,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&ValidateDocument {
            tasks: graph.task_count(),
            data_edges: graph.edge_weights().len(),
            report,
        })
        .map(|mut json| {
            json.push('\n');
            json
        }),
        OutputFormat::Text => Ok(report_text(graph, report)),
    }
}

fn report_text(graph: &WorkflowGraph, report: &ValidationReport) -> String {
    let name = |task| graph.task_name(task).unwrap_or("?");

    let mut out = format!(
        "tasks: {}\ndata edges: {}\nacyclic: {}\nundeclared data edges: {}\n",
        graph.task_count(),
        graph.edge_weights().len(),
        if report.is_acyclic() { "yes" } else { "no" },
        report.undeclared_data_edges.len()
    );
    for edge in &report.undeclared_data_edges {
        out.push_str(&format!(
            "  {} ({}) -> {} ({}): {} bytes\n",
            edge.producer,
            name(edge.producer),
            edge.consumer,
            name(edge.consumer),
            edge.bytes
        ));
    }
    out
}
