//! Two-pass conversion from task records to a [`WorkflowGraph`].
//!
//! The assignment pass ([`GraphBuilder::index`]) validates every record,
//! assigns dense ids and indexes task names and artifact producers. The
//! resolution pass ([`IndexedWorkflow::resolve`]) needs both indexes to be
//! complete, so it can only run once the first pass has seen every record.

use crate::graph::{CostVector, EdgeWeights, ForwardGraph, WorkflowGraph};
use crate::{Error, Result, Task, TaskId, TaskRecord};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Entry point for the assignment pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct GraphBuilder;

impl GraphBuilder {
    /// Validate `records`, assign ids and index names and producers.
    ///
    /// When several tasks output the same artifact name, the one seen last
    /// becomes its producer.
    ///
    /// # Errors
    ///
    /// Returns a malformed-input error for incomplete records and
    /// [`Error::DuplicateTask`] when two records share a name.
    pub fn index(records: &[TaskRecord]) -> Result<IndexedWorkflow> {
        let mut tasks = Vec::with_capacity(records.len());
        let mut name_to_id: HashMap<String, TaskId> = HashMap::with_capacity(records.len());
        let mut producers: HashMap<String, TaskId> = HashMap::new();

        for (task_id, record) in records.iter().enumerate() {
            let task = Task::from_record(task_id, record)?;

            if let Some(&first) = name_to_id.get(&task.name) {
                return Err(Error::DuplicateTask {
                    name: task.name,
                    first,
                    second: task_id,
                });
            }
            name_to_id.insert(task.name.clone(), task_id);

            for (artifact, _) in &task.outputs {
                if let Some(previous) = producers.insert(artifact.clone(), task_id) {
                    trace!(
                        artifact = %artifact,
                        previous,
                        producer = task_id,
                        "Artifact has several producers; keeping the latest"
                    );
                }
            }

            tasks.push(task);
        }

        debug!(
            tasks = tasks.len(),
            artifacts = producers.len(),
            "Indexed workflow tasks"
        );

        Ok(IndexedWorkflow {
            tasks,
            name_to_id,
            producers,
        })
    }
}

/// Tasks with ids assigned and name/producer indexes built.
#[derive(Debug, Clone)]
pub struct IndexedWorkflow {
    tasks: Vec<Task>,
    name_to_id: HashMap<String, TaskId>,
    producers: HashMap<String, TaskId>,
}

impl IndexedWorkflow {
    /// Validated tasks in id order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Id of the task called `name`.
    #[must_use]
    pub fn task_id(&self, name: &str) -> Option<TaskId> {
        self.name_to_id.get(name).copied()
    }

    /// Id of the task that produces `artifact`, if any task does.
    #[must_use]
    pub fn producer(&self, artifact: &str) -> Option<TaskId> {
        self.producers.get(artifact).copied()
    }

    /// Resolve children and data dependencies into a [`WorkflowGraph`].
    ///
    /// Inputs that no task produces are treated as external and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingChild`] (or [`Error::MissingChildren`] when
    /// there are several) if a task lists a child that doesn't exist, and
    /// [`Error::WeightOverflow`] if the bytes on one edge exceed `u64::MAX`.
    pub fn resolve(&self) -> Result<WorkflowGraph> {
        let mut costs = vec![0.0; self.tasks.len()];
        let mut adjacency = Vec::with_capacity(self.tasks.len());
        let mut edge_weights = EdgeWeights::default();
        let mut missing = Vec::new();
        let mut external_inputs = 0_usize;

        for task in &self.tasks {
            costs[task.task_id] = task.runtime;

            let mut children = Vec::with_capacity(task.children.len());
            for child in &task.children {
                match self.task_id(child) {
                    Some(child_id) => children.push(child_id),
                    None => missing.push((task.name.clone(), child.clone())),
                }
            }
            adjacency.push(children);

            for (input, size) in &task.inputs {
                let Some(producer) = self.producer(input) else {
                    trace!(task = %task.name, input = %input, "Skipping external input");
                    external_inputs += 1;
                    continue;
                };
                if edge_weights.add(producer, task.task_id, *size).is_none() {
                    return Err(Error::WeightOverflow {
                        producer: self.tasks[producer].name.clone(),
                        consumer: task.name.clone(),
                    });
                }
            }
        }

        if !missing.is_empty() {
            return Err(if missing.len() == 1 {
                let (task, child) = missing.remove(0);
                Error::MissingChild { task, child }
            } else {
                Error::MissingChildren { missing }
            });
        }

        debug!(
            tasks = self.tasks.len(),
            data_edges = edge_weights.len(),
            external_inputs,
            "Resolved workflow graph"
        );

        Ok(WorkflowGraph {
            tasks: self.tasks.iter().map(|task| task.name.clone()).collect(),
            forward_graph: ForwardGraph::from_adjacency(adjacency),
            cost: CostVector::from_costs(costs),
            edge_weights,
        })
    }
}

/// Convert task records into a forward graph, cost vector and edge weights.
///
/// # Errors
///
/// Returns a malformed-input error for incomplete or duplicate records, and
/// a lookup failure for children that name no task.
pub fn build(records: &[TaskRecord]) -> Result<WorkflowGraph> {
    GraphBuilder::index(records)?.resolve()
}
