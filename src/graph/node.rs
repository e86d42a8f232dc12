//! Defines the `GraphNode` trait implemented by every vertex, and the
//! capabilities a transformer can query a vertex for.

use crate::addrs::ConfigResource;
use std::any::Any;
use std::fmt::Debug;

/// A vertex in the dependency graph.
///
/// Vertices are produced by many unrelated transformers, so consumers never
/// match on concrete types. Instead they ask a vertex for a capability (such
/// as `as_config_resource`) and skip vertices that don't offer it.
pub trait GraphNode: Debug + Send + Sync {
    /// A human-readable name, used for display and stable ordering.
    fn name(&self) -> String;

    fn as_any(&self) -> &dyn Any;

    /// Returns `Some` if this vertex represents a resource block.
    fn as_config_resource(&self) -> Option<&dyn GraphNodeConfigResource> {
        None
    }
}

/// Implemented by vertices that can report the resource they belong to.
pub trait GraphNodeConfigResource {
    fn resource_addr(&self) -> ConfigResource;
}

/// A vertex standing for one resource block, prior to expansion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeResource {
    pub addr: ConfigResource,
}

impl NodeResource {
    pub fn new(addr: ConfigResource) -> Self { Self { addr } }
}

impl GraphNode for NodeResource {
    fn name(&self) -> String { self.addr.to_string() }

    fn as_any(&self) -> &dyn Any { self }

    fn as_config_resource(&self) -> Option<&dyn GraphNodeConfigResource> {
        Some(self)
    }
}

impl GraphNodeConfigResource for NodeResource {
    fn resource_addr(&self) -> ConfigResource { self.addr.clone() }
}
