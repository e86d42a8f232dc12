//! Defines the dependency graph that plan and apply operations walk, and the
//! transformer interface used to populate it.
pub mod dag;
pub mod error;
pub mod node;

// Re-export key types for convenient access
pub use dag::{Graph, NodeId};
pub use error::GraphError;
pub use node::{GraphNode, GraphNodeConfigResource, NodeResource};

/// A pass that adds vertices and edges to a graph under construction.
///
/// Transformers run in sequence, once each, over the same graph.
pub trait GraphTransformer {
    fn transform(&self, graph: &mut Graph) -> Result<(), GraphError>;
}
