//! Output structures of a workflow conversion.
//!
//! A [`WorkflowGraph`] bundles the forward graph, the cost vector and the
//! edge-weight map of one workflow instance. All three are indexed by the
//! dense [`TaskId`] assigned during the build.

use petgraph::graph::{DiGraph, NodeIndex};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Dense task index in `[0, N)`.
pub type TaskId = usize;

/// Adjacency from each task to the children it declares.
///
/// Every task has an entry, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardGraph {
    successors: Vec<Vec<TaskId>>,
}

impl ForwardGraph {
    pub(crate) fn from_adjacency(successors: Vec<Vec<TaskId>>) -> Self {
        Self { successors }
    }

    /// Children of `task`, or `None` if the id is out of range.
    #[must_use]
    pub fn successors(&self, task: TaskId) -> Option<&[TaskId]> {
        self.successors.get(task).map(Vec::as_slice)
    }

    /// Number of tasks (keys).
    #[must_use]
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    /// Whether the graph has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Total number of declared parent → child edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    /// Iterate over `(task, children)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskId, &[TaskId])> {
        self.successors
            .iter()
            .enumerate()
            .map(|(id, children)| (id, children.as_slice()))
    }
}

impl Serialize for ForwardGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (id, children) in self.iter() {
            map.serialize_entry(&id.to_string(), children)?;
        }
        map.end()
    }
}

/// Runtime of each task, indexed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CostVector(Vec<f64>);

impl CostVector {
    pub(crate) fn from_costs(costs: Vec<f64>) -> Self {
        Self(costs)
    }

    /// Runtime of `task`.
    #[must_use]
    pub fn get(&self, task: TaskId) -> Option<f64> {
        self.0.get(task).copied()
    }

    /// The costs as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all runtimes.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl From<CostVector> for Vec<f64> {
    fn from(costs: CostVector) -> Self {
        costs.0
    }
}

/// Bytes transferred along each (producer, consumer) data dependency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeWeights {
    weights: BTreeMap<(TaskId, TaskId), u64>,
}

impl EdgeWeights {
    /// Add `bytes` to the edge, returning the new weight or `None` if it
    /// would exceed `u64::MAX`. The edge is left unchanged on overflow.
    pub(crate) fn add(&mut self, producer: TaskId, consumer: TaskId, bytes: u64) -> Option<u64> {
        let entry = self.weights.entry((producer, consumer)).or_insert(0);
        *entry = entry.checked_add(bytes)?;
        Some(*entry)
    }

    /// Bytes sent from `producer` to `consumer`, if they share data.
    #[must_use]
    pub fn get(&self, producer: TaskId, consumer: TaskId) -> Option<u64> {
        self.weights.get(&(producer, consumer)).copied()
    }

    /// Number of distinct data edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether no data dependency was matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterate over `((producer, consumer), bytes)` ordered by edge.
    pub fn iter(&self) -> impl Iterator<Item = ((TaskId, TaskId), u64)> + '_ {
        self.weights.iter().map(|(&edge, &bytes)| (edge, bytes))
    }

    /// Sum of all edge weights.
    #[must_use]
    pub fn total_bytes(&self) -> u128 {
        self.weights.values().map(|&bytes| u128::from(bytes)).sum()
    }

    /// Bytes received by `consumer` from all producers.
    #[must_use]
    pub fn incoming_bytes(&self, consumer: TaskId) -> u128 {
        self.weights
            .iter()
            .filter(|((_, to), _)| *to == consumer)
            .map(|(_, &bytes)| u128::from(bytes))
            .sum()
    }
}

#[derive(Serialize)]
struct EdgeEntry {
    parent: TaskId,
    child: TaskId,
    bytes: u64,
}

impl Serialize for EdgeWeights {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for ((parent, child), bytes) in self.iter() {
            seq.serialize_element(&EdgeEntry {
                parent,
                child,
                bytes,
            })?;
        }
        seq.end()
    }
}

/// Result of converting one workflow instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkflowGraph {
    /// Task names by id.
    pub(crate) tasks: Vec<String>,
    pub(crate) forward_graph: ForwardGraph,
    pub(crate) cost: CostVector,
    pub(crate) edge_weights: EdgeWeights,
}

impl WorkflowGraph {
    /// Number of tasks.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Name of the task with id `task`.
    #[must_use]
    pub fn task_name(&self, task: TaskId) -> Option<&str> {
        self.tasks.get(task).map(String::as_str)
    }

    /// Task names in id order.
    #[must_use]
    pub fn task_names(&self) -> &[String] {
        &self.tasks
    }

    /// Declared parent → children adjacency.
    #[must_use]
    pub fn forward_graph(&self) -> &ForwardGraph {
        &self.forward_graph
    }

    /// Runtime per task.
    #[must_use]
    pub fn cost(&self) -> &CostVector {
        &self.cost
    }

    /// Bytes per data dependency.
    #[must_use]
    pub fn edge_weights(&self) -> &EdgeWeights {
        &self.edge_weights
    }

    /// Split into the forward graph, cost vector and edge-weight map.
    #[must_use]
    pub fn into_parts(self) -> (ForwardGraph, CostVector, EdgeWeights) {
        (self.forward_graph, self.cost, self.edge_weights)
    }

    /// The forward graph as a petgraph digraph. Node index `i` is task `i`.
    #[must_use]
    pub fn to_forward_digraph(&self) -> DiGraph<TaskId, ()> {
        let mut graph = self.empty_digraph();
        for (parent, children) in self.forward_graph.iter() {
            for &child in children {
                graph.add_edge(NodeIndex::new(parent), NodeIndex::new(child), ());
            }
        }
        graph
    }

    /// The data-flow edges as a petgraph digraph weighted by bytes.
    /// Node index `i` is task `i`.
    #[must_use]
    pub fn to_data_flow_digraph(&self) -> DiGraph<TaskId, u64> {
        let mut graph = self.empty_digraph();
        for ((producer, consumer), bytes) in self.edge_weights.iter() {
            graph.add_edge(NodeIndex::new(producer), NodeIndex::new(consumer), bytes);
        }
        graph
    }

    fn empty_digraph<E>(&self) -> DiGraph<TaskId, E> {
        let mut graph = DiGraph::with_capacity(self.task_count(), 0);
        for id in 0..self.task_count() {
            graph.add_node(id);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WorkflowGraph {
        let mut edge_weights = EdgeWeights::default();
        edge_weights.add(0, 1, 100).unwrap();
        edge_weights.add(0, 2, 50).unwrap();
        edge_weights.add(1, 2, 25).unwrap();
        edge_weights.add(0, 2, 5).unwrap();

        WorkflowGraph {
            tasks: vec!["a".into(), "b".into(), "c".into()],
            forward_graph: ForwardGraph::from_adjacency(vec![vec![1, 2], vec![2], vec![]]),
            cost: CostVector::from_costs(vec![1.0, 2.0, 3.5]),
            edge_weights,
        }
    }

    #[test]
    fn test_edge_weights_accumulate() {
        let graph = sample();
        assert_eq!(graph.edge_weights().get(0, 2), Some(55));
        assert_eq!(graph.edge_weights().get(2, 0), None);
        assert_eq!(graph.edge_weights().len(), 3);
        assert_eq!(graph.edge_weights().total_bytes(), 180);
        assert_eq!(graph.edge_weights().incoming_bytes(2), 80);
    }

    #[test]
    fn test_edge_weight_overflow_leaves_edge_unchanged() {
        let mut weights = EdgeWeights::default();
        assert_eq!(weights.add(0, 1, u64::MAX - 1), Some(u64::MAX - 1));
        assert_eq!(weights.add(0, 1, 2), None);
        assert_eq!(weights.get(0, 1), Some(u64::MAX - 1));

        weights.add(2, 1, u64::MAX).unwrap();
        assert_eq!(weights.incoming_bytes(1), u128::from(u64::MAX) * 2 - 1);
        assert_eq!(weights.total_bytes(), u128::from(u64::MAX) * 2 - 1);
    }

    #[test]
    fn test_forward_graph_accessors() {
        let graph = sample();
        let forward = graph.forward_graph();
        assert_eq!(forward.len(), 3);
        assert_eq!(forward.edge_count(), 3);
        assert_eq!(forward.successors(2), Some(&[][..]));
        assert_eq!(forward.successors(3), None);
    }

    #[test]
    fn test_digraph_views_keep_ids() {
        let graph = sample();

        let forward = graph.to_forward_digraph();
        assert_eq!(forward.node_count(), 3);
        assert_eq!(forward.edge_count(), 3);
        assert_eq!(forward[NodeIndex::new(2)], 2);

        let data = graph.to_data_flow_digraph();
        let edge = data
            .find_edge(NodeIndex::new(0), NodeIndex::new(2))
            .unwrap();
        assert_eq!(data[edge], 55);
    }

    #[test]
    fn test_serialize_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["forward_graph"]["0"], serde_json::json!([1, 2]));
        assert_eq!(value["forward_graph"]["2"], serde_json::json!([]));
        assert_eq!(value["cost"], serde_json::json!([1.0, 2.0, 3.5]));
        assert_eq!(
            value["edge_weights"][0],
            serde_json::json!({"parent": 0, "child": 1, "bytes": 100})
        );
        assert_eq!(value["tasks"][1], "b");
    }
}
