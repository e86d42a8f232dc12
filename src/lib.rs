//! Execution-graph construction for check blocks.
//!
//! Given a module configuration tree and a graph already populated with
//! resource vertices, the `CheckTransformer` adds the vertices and ordering
//! edges that let check outcomes be reported before the resources embedded
//! in those checks are read.

pub mod addrs;
pub mod checks;
pub mod config;
pub mod graph;

pub use checks::{CheckTransformer, WalkOperation};
pub use config::Config;
pub use graph::{Graph, GraphError, GraphTransformer};
