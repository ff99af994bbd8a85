//! Traversal algorithms over the forward graph.
//!
//! The builder accepts cyclic workflows; ordering a workflow is where a
//! cycle becomes an error.

use crate::{Error, Result, TaskId, WorkflowGraph};
use petgraph::algo::toposort;

/// Task ids in an order where every parent precedes its children.
pub type TopologicalOrder = Vec<TaskId>;

/// Tasks grouped by depth. Every task in level N has at least one parent in
/// level N-1 and none in a later level.
pub type Levels = Vec<Vec<TaskId>>;

impl WorkflowGraph {
    /// Order tasks so that every declared child follows its parent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] if the forward graph has a cycle.
    pub fn topological_order(&self) -> Result<TopologicalOrder> {
        let graph = self.to_forward_digraph();
        toposort(&graph, None)
            .map(|sorted| sorted.into_iter().map(|idx| graph[idx]).collect())
            .map_err(|cycle| {
                let task = graph[cycle.node_id()];
                Error::CycleDetected {
                    message: format!(
                        "task '{}' is reachable from itself",
                        self.task_name(task).unwrap_or_default()
                    ),
                }
            })
    }

    /// Group tasks by longest distance from a root, each group in id order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] if the forward graph has a cycle.
    pub fn levels(&self) -> Result<Levels> {
        let order = self.topological_order()?;
        let mut depth = vec![0_usize; self.task_count()];
        let mut levels: Levels = Vec::new();

        for task in order {
            let level = depth[task];
            if level >= levels.len() {
                levels.resize(level + 1, Vec::new());
            }
            levels[level].push(task);

            for &child in self.forward_graph.successors(task).unwrap_or_default() {
                depth[child] = depth[child].max(level + 1);
            }
        }

        for group in &mut levels {
            group.sort_unstable();
        }
        Ok(levels)
    }
}
