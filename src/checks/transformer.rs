//! The transformer that wires check blocks into the graph.
use super::nodes::{MakeInstance, NodeCheckAssert, NodeExpandCheck, NodeReportCheck};
use crate::addrs::AbsCheck;
use crate::config::{Check, Config};
use crate::graph::{Graph, GraphError, GraphTransformer, NodeId};
use std::sync::Arc;
use tracing::{debug, trace};

/// The kind of walk a graph is being built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkOperation {
    Validate,
    Plan,
    PlanDestroy,
    Apply,
    Eval,
    Import,
}

impl WalkOperation {
    /// Checks are reported only while planning; apply remembers the results
    /// from its plan.
    pub fn reports_checks(self) -> bool {
        matches!(self, WalkOperation::Plan)
    }

    /// Assertions only run for operations that act on real infrastructure.
    pub fn executes_checks(self) -> bool {
        matches!(self, WalkOperation::Plan | WalkOperation::Apply)
    }
}

/// Adds a `NodeExpandCheck` for every check block in the configuration tree.
///
/// When both reporting and execution are enabled it also adds a
/// `NodeReportCheck` per check, and makes every resource embedded in that
/// check (in the same module) depend on it.
///
/// This transformer is not idempotent: running it twice over one graph adds
/// every node and edge a second time. Run it exactly once per graph build.
#[derive(Debug, Clone)]
pub struct CheckTransformer {
    config: Arc<Config>,
    report_checks: bool,
    execute_checks: bool,
}

impl CheckTransformer {
    /// A transformer with reporting and execution both disabled.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config, report_checks: false, execute_checks: false }
    }

    pub fn for_operation(config: Arc<Config>, op: WalkOperation) -> Self {
        Self::new(config)
            .report_checks(op.reports_checks())
            .execute_checks(op.executes_checks())
    }

    pub fn report_checks(mut self, enabled: bool) -> Self {
        self.report_checks = enabled;
        self
    }

    pub fn execute_checks(mut self, enabled: bool) -> Self {
        self.execute_checks = enabled;
        self
    }

    /// Handles one module, then recurses into its children.
    ///
    /// `all_nodes` is the vertex set from before the transform began. Nodes
    /// added here are never considered as embedded resources.
    fn transform_module(&self, graph: &mut Graph, cfg: &Config, all_nodes: &[NodeId]) -> Result<(), GraphError> {
        let module_addr = &cfg.path;
        let module = cfg.module()?;
        debug!(module = %module_addr, checks = module.checks.len(), "Adding check nodes for module");

        for check in &module.checks {
            let config_addr = check.addr.in_module(module_addr);
            trace!(addr = %config_addr, "Nodes and edges for check");

            let execute_checks = self.execute_checks;
            let make_instance: MakeInstance = Arc::new(move |addr: AbsCheck, config: Arc<Check>| NodeCheckAssert {
                addr,
                config,
                execute_checks,
            });
            graph.add(NodeExpandCheck::new(config_addr.clone(), Arc::clone(check), make_instance));

            if !(self.report_checks && self.execute_checks) {
                continue;
            }

            let report = graph.add(NodeReportCheck { addr: config_addr.clone() });

            for &other in all_nodes {
                let Some(resource_addr) = graph
                    .node(other)
                    .and_then(|node| node.as_config_resource())
                    .map(|resource| resource.resource_addr())
                else {
                    continue;
                };

                // Containment only holds within a single module.
                if resource_addr.module != *module_addr {
                    continue;
                }

                let embedded = module
                    .resource_by_addr(&resource_addr.resource)
                    .and_then(|resource| resource.container.as_ref())
                    .is_some_and(|container| container.accessible(&check.addr));

                if embedded {
                    // The check must be reported before the embedded resource runs.
                    // `report` was added after the snapshot, so `other` is never
                    // the same vertex and this connect cannot fail.
                    debug!(resource = %resource_addr, check = %config_addr, "Resource waits for check report");
                    graph.connect(other, report)?;
                }
            }
        }

        for child in cfg.children.values() {
            self.transform_module(graph, child, all_nodes)?;
        }

        Ok(())
    }
}

impl GraphTransformer for CheckTransformer {
    fn transform(&self, graph: &mut Graph) -> Result<(), GraphError> {
        let all_nodes = graph.vertices();
        self.transform_module(graph, &self.config, &all_nodes)
    }
}
