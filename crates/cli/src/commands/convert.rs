use crate::errors::CliError;
use crate::output::{OutputFormat, render_graph};
use std::path::Path;
use tracing::instrument;
use wfgraph_instance::{Recipe, WorkflowInstance};

/// Load `instance`, convert it and render the result.
///
/// When `recipe` is given it must name a catalog recipe and match the
/// instance name.
#[instrument(skip(format))]
pub fn execute_convert(
    instance: &Path,
    recipe: Option<&str>,
    format: OutputFormat,
) -> Result<String, CliError> {
    let required = recipe.map(str::parse::<Recipe>).transpose()?;

    let workflow = WorkflowInstance::from_path(instance)?;
    if let Some(recipe) = required {
        workflow.ensure_recipe(recipe)?;
    }

    let graph = workflow.build_graph()?;
    tracing::info!(
        tasks = graph.task_count(),
        children = graph.forward_graph().edge_count(),
        data_edges = graph.edge_weights().len(),
        bytes = graph.edge_weights().total_bytes(),
        "Converted workflow instance"
    );

    let recipe = required.or_else(|| workflow.recipe());
    Ok(render_graph(
        &graph,
        workflow.name.as_deref(),
        recipe,
        format,
    )?)
}
