//! Address types that identify modules, checks and resources inside the
//! configuration tree and the graph built from it.
pub mod check;
pub mod module;
pub mod resource;

// Re-export key types for convenient access
pub use check::{AbsCheck, CheckAddr, ConfigCheck};
pub use module::{InstanceKey, ModuleAddr, ModuleInstance};
pub use resource::{ConfigResource, ResourceAddr, ResourceMode};
