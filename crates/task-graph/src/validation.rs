//! Diagnostics for a converted workflow.
//!
//! None of these checks are part of the conversion itself. They report
//! properties callers may care about before feeding the graph to a
//! scheduler.

use crate::{TaskId, WorkflowGraph};
use petgraph::algo::is_cyclic_directed;
use serde::Serialize;

/// A data dependency whose consumer is not a declared child of its producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UndeclaredEdge {
    /// Producing task.
    pub producer: TaskId,
    /// Consuming task.
    pub consumer: TaskId,
    /// Bytes transferred.
    pub bytes: u64,
}

/// Result of [`WorkflowGraph::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Whether the forward graph contains a cycle.
    pub has_cycles: bool,
    /// Data edges not mirrored by a `children` entry.
    pub undeclared_data_edges: Vec<UndeclaredEdge>,
}

impl ValidationReport {
    /// Whether the forward graph can be ordered.
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        !self.has_cycles
    }

    /// Whether every data edge is also a declared parent/child edge.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.undeclared_data_edges.is_empty()
    }
}

impl WorkflowGraph {
    /// Whether the declared children form a cycle.
    #[must_use]
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.to_forward_digraph())
    }

    /// Check the forward graph for cycles and compare it to the data flow.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let undeclared_data_edges = self
            .edge_weights
            .iter()
            .filter(|&((producer, consumer), _)| {
                !self
                    .forward_graph
                    .successors(producer)
                    .is_some_and(|children| children.contains(&consumer))
            })
            .map(|((producer, consumer), bytes)| UndeclaredEdge {
                producer,
                consumer,
                bytes,
            })
            .collect();

        ValidationReport {
            has_cycles: self.has_cycles(),
            undeclared_data_edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TaskRecord, build};

    #[test]
    fn test_consistent_workflow() {
        let records = vec![
            TaskRecord::new("a", 1.0).with_output("x", 5).with_child("b"),
            TaskRecord::new("b", 1.0).with_input("x", 5),
        ];
        let report = build(&records).unwrap().validate();

        assert!(report.is_acyclic());
        assert!(report.is_consistent());
    }

    #[test]
    fn test_reports_undeclared_data_edge() {
        let records = vec![
            TaskRecord::new("a", 1.0).with_output("x", 5),
            TaskRecord::new("b", 1.0).with_input("x", 5),
        ];
        let report = build(&records).unwrap().validate();

        assert_eq!(
            report.undeclared_data_edges,
            vec![UndeclaredEdge {
                producer: 0,
                consumer: 1,
                bytes: 5,
            }]
        );
    }

    #[test]
    fn test_reports_cycle() {
        let records = vec![TaskRecord::new("a", 1.0).with_child("a")];
        let report = build(&records).unwrap().validate();

        assert!(report.has_cycles);
        assert!(!report.is_acyclic());
    }
}
