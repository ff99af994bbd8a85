//! Raw task records and their validated form.
//!
//! [`TaskRecord`] mirrors a task entry of a workflow description as it
//! arrives from the outside world: every field is optional so that a missing
//! field surfaces as a typed [`Error`] from the builder instead of an opaque
//! deserialization failure. [`Task`] is the checked form produced by the
//! assignment pass.

use crate::{Error, Result, TaskId};
use serde::{Deserialize, Serialize};

/// Direction of a file artifact relative to the task that declares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileLink {
    /// The task consumes the file.
    Input,
    /// The task produces the file.
    Output,
}

impl FileLink {
    fn parse(tag: &str) -> Option<Self> {
        match tag {
            "input" => Some(Self::Input),
            "output" => Some(Self::Output),
            _ => None,
        }
    }
}

/// A file artifact as declared in a task record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Artifact name, used to match producers with consumers.
    #[serde(default)]
    pub name: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
    /// Direction tag, `"input"` or `"output"`.
    #[serde(default)]
    pub link: Option<String>,
}

impl FileRecord {
    /// Create a complete file record.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, link: FileLink) -> Self {
        let tag = match link {
            FileLink::Input => "input",
            FileLink::Output => "output",
        };
        Self {
            name: Some(name.into()),
            size: Some(size),
            link: Some(tag.to_string()),
        }
    }
}

/// A task entry as declared in a workflow description.
///
/// Fields other than the four below (`type`, `parents`, `cores`, ...) are
/// accepted and ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Unique task name.
    #[serde(default)]
    pub name: Option<String>,
    /// Execution cost.
    #[serde(default)]
    pub runtime: Option<f64>,
    /// Names of tasks that run after this one.
    #[serde(default)]
    pub children: Option<Vec<String>>,
    /// Declared file artifacts.
    #[serde(default)]
    pub files: Option<Vec<FileRecord>>,
}

impl TaskRecord {
    /// Create a complete record with no children and no files.
    #[must_use]
    pub fn new(name: impl Into<String>, runtime: f64) -> Self {
        Self {
            name: Some(name.into()),
            runtime: Some(runtime),
            children: Some(Vec::new()),
            files: Some(Vec::new()),
        }
    }

    /// Append a child task name.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<String>) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child.into());
        self
    }

    /// Append an input artifact.
    #[must_use]
    pub fn with_input(self, name: impl Into<String>, size: u64) -> Self {
        self.with_file(FileRecord::new(name, size, FileLink::Input))
    }

    /// Append an output artifact.
    #[must_use]
    pub fn with_output(self, name: impl Into<String>, size: u64) -> Self {
        self.with_file(FileRecord::new(name, size, FileLink::Output))
    }

    /// Append an arbitrary file record.
    #[must_use]
    pub fn with_file(mut self, file: FileRecord) -> Self {
        self.files.get_or_insert_with(Vec::new).push(file);
        self
    }
}

/// A (name, size in bytes) pair.
pub type Artifact = (String, u64);

/// A validated task with its dense id assigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    /// Dense id in `[0, N)`, equal to the record's position.
    pub task_id: TaskId,
    /// Unique task name.
    pub name: String,
    /// Names of tasks that run after this one, in declaration order.
    pub children: Vec<String>,
    /// Execution cost.
    pub runtime: f64,
    /// Artifacts this task produces, in declaration order.
    pub outputs: Vec<Artifact>,
    /// Artifacts this task consumes, in declaration order.
    pub inputs: Vec<Artifact>,
}

impl Task {
    /// Check a raw record and assign it `task_id`.
    ///
    /// # Errors
    ///
    /// Returns a malformed-input error if a required field is absent, a file
    /// record is incomplete or the runtime is negative or non-finite.
    pub fn from_record(task_id: TaskId, record: &TaskRecord) -> Result<Self> {
        let missing = |field| Error::MissingField {
            index: task_id,
            task: record.name.clone(),
            field,
        };

        let name = record.name.clone().ok_or_else(|| missing("name"))?;
        let runtime = record.runtime.ok_or_else(|| missing("runtime"))?;
        let children = record.children.clone().ok_or_else(|| missing("children"))?;
        let files = record.files.as_ref().ok_or_else(|| missing("files"))?;

        if !runtime.is_finite() || runtime < 0.0 {
            return Err(Error::InvalidRuntime {
                task: name,
                runtime,
            });
        }

        let mut inputs = Vec::new();
        let mut outputs = Vec::new();
        for (index, file) in files.iter().enumerate() {
            let malformed = |reason: String| Error::MalformedFile {
                task: name.clone(),
                index,
                reason,
            };

            let file_name = file
                .name
                .clone()
                .ok_or_else(|| malformed("missing 'name'".to_string()))?;
            let size = file
                .size
                .ok_or_else(|| malformed(format!("'{file_name}' is missing 'size'")))?;
            let tag = file
                .link
                .as_deref()
                .ok_or_else(|| malformed(format!("'{file_name}' is missing 'link'")))?;

            match FileLink::parse(tag) {
                Some(FileLink::Input) => inputs.push((file_name, size)),
                Some(FileLink::Output) => outputs.push((file_name, size)),
                None => {
                    return Err(malformed(format!(
                        "'{file_name}' has unknown link '{tag}' (expected 'input' or 'output')"
                    )));
                }
            }
        }

        Ok(Self {
            task_id,
            name,
            children,
            runtime,
            outputs,
            inputs,
        })
    }
}
