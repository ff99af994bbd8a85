//! Workflow instance loading for wfgraph.
//!
//! Workflow instances are WfCommons JSON documents whose task list lives at
//! `workflow.tasks`. This crate reads them, identifies the recipe they were
//! generated from, and hands the task list to
//! [`wfgraph_task_graph::build`].
//!
//! ```no_run
//! use wfgraph_instance::WorkflowInstance;
//!
//! let instance = WorkflowInstance::from_path("montage-200.json")?;
//! let graph = instance.build_graph()?;
//! println!("{} tasks", graph.task_count());
//! # Ok::<(), wfgraph_instance::Error>(())
//! ```

mod error;
mod instance;
mod recipe;

pub use error::{Error, Result};
pub use instance::{WorkflowInstance, WorkflowSection};
pub use recipe::Recipe;
