//! Workflow-to-graph conversion for wfgraph.
//!
//! This crate turns the task list of a scientific workflow (tasks with a
//! runtime, declared children and input/output file artifacts) into the
//! compact numeric form used by schedulers and graph models:
//!
//! - a forward graph from each task id to its children's ids,
//! - a cost vector holding each task's runtime,
//! - an edge-weight map holding the bytes sent along each data dependency.
//!
//! # Key Types
//!
//! - [`TaskRecord`]: a task as declared in a workflow description
//! - [`GraphBuilder`] / [`IndexedWorkflow`]: the two conversion passes
//! - [`WorkflowGraph`]: the conversion result
//!
//! # Example
//!
//! ```
//! use wfgraph_task_graph::{TaskRecord, build};
//!
//! let records = vec![
//!     TaskRecord::new("A", 2.0).with_output("f1", 100).with_child("B"),
//!     TaskRecord::new("B", 3.0).with_input("f1", 100),
//! ];
//!
//! let graph = build(&records)?;
//! assert_eq!(graph.forward_graph().successors(0), Some(&[1][..]));
//! assert_eq!(graph.cost().as_slice(), &[2.0, 3.0]);
//! assert_eq!(graph.edge_weights().get(0, 1), Some(100));
//! # Ok::<(), wfgraph_task_graph::Error>(())
//! ```

mod builder;
mod error;
mod graph;
mod records;
mod traversal;
mod validation;

pub use builder::{GraphBuilder, IndexedWorkflow, build};
pub use error::{Error, Result};
pub use graph::{CostVector, EdgeWeights, ForwardGraph, TaskId, WorkflowGraph};
pub use records::{Artifact, FileLink, FileRecord, Task, TaskRecord};
pub use traversal::{Levels, TopologicalOrder};
pub use validation::{UndeclaredEdge, ValidationReport};
