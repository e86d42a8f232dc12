//! dag.rs
//! Wraps petgraph's stable graph with the operations graph transformers need.
//!
//! Edges point from a consumer to its prerequisite: `connect(a, b)` means `a`
//! may not start until `b` has completed.

use super::error::GraphError;
use super::node::GraphNode;
use petgraph::algo::toposort;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::Direction;
use std::fmt;
use std::sync::Arc;

/// A stable identifier for a vertex. Indices are never reused after removal.
pub type NodeId = NodeIndex;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) graph: StableDiGraph<Arc<dyn GraphNode>, ()>,
}

impl Graph {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, node: impl GraphNode + 'static) -> NodeId {
        self.graph.add_node(Arc::new(node))
    }

    /// Makes `source` depend on `target`. Connecting the same pair twice
    /// leaves a single edge.
    pub fn connect(&mut self, source: NodeId, target: NodeId) -> Result<(), GraphError> {
        if source == target {
            let name = self.node(source).map(|n| n.name()).unwrap_or_default();
            return Err(GraphError::SelfEdge(name));
        }
        self.graph.update_edge(source, target, ());
        Ok(())
    }

    /// Snapshots the current vertex set. Vertices added afterwards are not
    /// part of the returned list.
    pub fn vertices(&self) -> Vec<NodeId> {
        self.graph.node_indices().collect()
    }

    pub fn node(&self, id: NodeId) -> Option<&dyn GraphNode> {
        self.graph.node_weight(id).map(|n| n.as_ref())
    }

    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.graph.contains_edge(source, target)
    }

    pub fn node_count(&self) -> usize { self.graph.node_count() }

    pub fn edge_count(&self) -> usize { self.graph.edge_count() }

    /// All vertices of concrete type `T`, with their ids.
    pub fn nodes_of<T: GraphNode + 'static>(&self) -> Vec<(NodeId, &T)> {
        self.graph
            .node_indices()
            .filter_map(|id| self.graph[id].as_any().downcast_ref::<T>().map(|n| (id, n)))
            .collect()
    }

    /// The vertices `id` depends on.
    pub fn dependencies_of(&self, id: NodeId) -> Vec<NodeId> {
        self.graph.neighbors_directed(id, Direction::Outgoing).collect()
    }

    /// The vertices that depend on `id`.
    pub fn dependents_of(&self, id: NodeId) -> Vec<NodeId> {
        self.graph.neighbors_directed(id, Direction::Incoming).collect()
    }

    /// Returns an order in which every prerequisite appears before the
    /// vertices depending on it.
    pub fn topological_order(&self) -> Result<Vec<NodeId>, GraphError> {
        let mut order = toposort(&self.graph, None).map_err(|cycle| {
            GraphError::Cycle(self.graph[cycle.node_id()].name())
        })?;
        // toposort yields sources first; our sources are consumers.
        order.reverse();
        Ok(order)
    }
}

/// Lists every vertex by name with its dependencies indented beneath it,
/// sorted so the output is stable across runs.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<(String, Vec<String>)> = self
            .graph
            .node_indices()
            .map(|id| {
                let mut deps: Vec<String> =
                    self.dependencies_of(id).into_iter().map(|d| self.graph[d].name()).collect();
                deps.sort();
                (self.graph[id].name(), deps)
            })
            .collect();
        lines.sort();

        for (name, deps) in lines {
            writeln!(f, "{}", name)?;
            for dep in deps {
                writeln!(f, "  {}", dep)?;
            }
        }
        Ok(())
    }
}
