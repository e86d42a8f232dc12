//! The vertices the check transformer adds.
//!
//! Each node's identity is its check address: equality, hashing and ordering
//! ignore everything else.

use crate::addrs::{AbsCheck, ConfigCheck};
use crate::config::Check;
use crate::graph::GraphNode;
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Builds the assertion node for one instance of a check.
pub type MakeInstance = Arc<dyn Fn(AbsCheck, Arc<Check>) -> NodeCheckAssert + Send + Sync>;

/// A check declaration that has not yet been expanded over the instances of
/// its module.
#[derive(Clone)]
pub struct NodeExpandCheck {
    addr: ConfigCheck,
    config: Arc<Check>,
    make_instance: MakeInstance,
}

impl NodeExpandCheck {
    pub fn new(addr: ConfigCheck, config: Arc<Check>, make_instance: MakeInstance) -> Self {
        Self { addr, config, make_instance }
    }

    pub fn addr(&self) -> &ConfigCheck { &self.addr }

    pub fn config(&self) -> &Arc<Check> { &self.config }

    /// Builds the assertion node for the instance of this check at `addr`.
    pub fn make_instance(&self, addr: AbsCheck) -> NodeCheckAssert {
        (self.make_instance)(addr, Arc::clone(&self.config))
    }
}

impl fmt::Debug for NodeExpandCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeExpandCheck")
            .field("addr", &self.addr)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GraphNode for NodeExpandCheck {
    fn name(&self) -> String { format!("{} (expand)", self.addr) }

    fn as_any(&self) -> &dyn Any { self }
}

/// Evaluates the assertions of one check instance.
#[derive(Debug, Clone)]
pub struct NodeCheckAssert {
    pub addr: AbsCheck,
    pub config: Arc<Check>,
    /// When false the assertions are recorded as skipped instead of run.
    pub execute_checks: bool,
}

impl NodeCheckAssert {
    pub fn execute_checks(&self) -> bool { self.execute_checks }
}

impl GraphNode for NodeCheckAssert {
    fn name(&self) -> String { self.addr.to_string() }

    fn as_any(&self) -> &dyn Any { self }
}

/// Marks that the outcome of a check has been recorded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeReportCheck {
    pub addr: ConfigCheck,
}

impl GraphNode for NodeReportCheck {
    fn name(&self) -> String { format!("{} (report)", self.addr) }

    fn as_any(&self) -> &dyn Any { self }
}

macro_rules! identity_by_addr {
    ($($node:ty),*) => {$(
        impl PartialEq for $node {
            fn eq(&self, other: &Self) -> bool { self.addr == other.addr }
        }
        impl Eq for $node {}
        impl Hash for $node {
            fn hash<H: Hasher>(&self, state: &mut H) { self.addr.hash(state) }
        }
        impl PartialOrd for $node {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
        }
        impl Ord for $node {
            fn cmp(&self, other: &Self) -> Ordering { self.addr.cmp(&other.addr) }
        }
    )*};
}

identity_by_addr!(NodeExpandCheck, NodeCheckAssert);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addrs::{CheckAddr, InstanceKey, ModuleAddr, ModuleInstance};
    use std::collections::HashSet;

    fn expand(name: &str, execute: bool) -> NodeExpandCheck {
        let check = Arc::new(Check::new(name));
        let make: MakeInstance = Arc::new(move |addr: AbsCheck, config: Arc<Check>| NodeCheckAssert {
            addr,
            config,
            execute_checks: execute,
        });
        NodeExpandCheck::new(check.addr.in_module(&ModuleAddr::root().child("app")), check, make)
    }

    #[test]
    fn test_make_instance_stamps_address() {
        let node = expand("health", false);
        let inst = ModuleInstance::root().child("app", Some(InstanceKey::Str("eu".into())));
        let assert = node.make_instance(CheckAddr::new("health").absolute(&inst));

        assert_eq!(assert.addr.to_string(), "module.app[\"eu\"].check.health");
        assert_eq!(assert.addr.config_check(), *node.addr());
        assert!(Arc::ptr_eq(&assert.config, node.config()));
        assert!(!assert.execute_checks());
    }

    #[test]
    fn test_identity_is_the_address() {
        // Two expansion nodes for the same check collapse regardless of factory
        let mut set = HashSet::new();
        set.insert(expand("health", true));
        set.insert(expand("health", false));
        set.insert(expand("cidr", true));
        assert_eq!(set.len(), 2);

        let report = |name: &str| NodeReportCheck {
            addr: CheckAddr::new(name).in_module(&ModuleAddr::root()),
        };
        assert_eq!(report("a"), report("a"));
        assert!(report("a") < report("b"));
    }

    #[test]
    fn test_names() {
        let node = expand("health", true);
        assert_eq!(node.name(), "module.app.check.health (expand)");
        let report = NodeReportCheck { addr: node.addr().clone() };
        assert_eq!(report.name(), "module.app.check.health (report)");
    }
}
