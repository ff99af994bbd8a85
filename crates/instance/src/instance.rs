//! WfCommons workflow instance documents.

use crate::{Error, Recipe, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, instrument};
use wfgraph_task_graph::{TaskRecord, WorkflowGraph};

/// The `workflow` section of an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSection {
    /// Task entries in document order.
    pub tasks: Vec<TaskRecord>,
}

/// A workflow instance as written by WfCommons.
///
/// Only `workflow.tasks` is required; the remaining metadata is kept when
/// present and otherwise ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowInstance {
    /// Instance name, usually prefixed with the recipe name.
    #[serde(default)]
    pub name: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// WfCommons schema version.
    #[serde(default)]
    pub schema_version: Option<String>,
    /// The task list.
    pub workflow: WorkflowSection,
}

impl WorkflowInstance {
    /// Read an instance from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file can't be read and [`Error::Json`]
    /// if it isn't a workflow instance.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let instance: Self = serde_json::from_str(&contents).map_err(|source| Error::Json {
            source,
            path: Some(path.to_path_buf()),
        })?;

        debug!(
            name = instance.name.as_deref().unwrap_or("<unnamed>"),
            tasks = instance.workflow.tasks.len(),
            "Loaded workflow instance"
        );
        Ok(instance)
    }

    /// Read an instance from any JSON reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the input isn't a workflow instance.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|source| Error::Json { source, path: None })
    }

    /// Task entries in document order.
    #[must_use]
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.workflow.tasks
    }

    /// Recipe inferred from the instance name.
    #[must_use]
    pub fn recipe(&self) -> Option<Recipe> {
        self.name.as_deref().and_then(Recipe::detect)
    }

    /// Fail unless the instance name identifies `recipe`.
    ///
    /// Unnamed instances are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecipeMismatch`] when the name points at another
    /// recipe or at none.
    pub fn ensure_recipe(&self, recipe: Recipe) -> Result<()> {
        match self.name.as_deref() {
            Some(name) if Recipe::detect(name) != Some(recipe) => Err(Error::RecipeMismatch {
                expected: recipe.to_string(),
                instance: name.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Convert the task list into a [`WorkflowGraph`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Graph`] if the task list is malformed or references
    /// unknown tasks.
    pub fn build_graph(&self) -> Result<WorkflowGraph> {
        Ok(wfgraph_task_graph::build(self.tasks())?)
    }
}

impl FromStr for WorkflowInstance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|source| Error::Json { source, path: None })
    }
}
