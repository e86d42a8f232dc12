//! The module configuration tree consumed by graph transformers.
//!
//! A `Config` node pairs a static module path with the module's declarations
//! and the configurations of the modules it calls.
pub mod check;
pub mod error;
pub mod load;
pub mod resource;

pub use check::{Check, CheckRule, Container};
pub use error::ConfigError;
pub use resource::Resource;

use crate::addrs::{ModuleAddr, ResourceAddr};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;

/// The declarations of a single module.
#[derive(Debug, Clone, Default)]
pub struct Module {
    /// Check blocks, in declaration order.
    pub checks: Vec<Arc<Check>>,
    pub resources: BTreeMap<ResourceAddr, Resource>,
}

impl Module {
    pub fn new() -> Self { Self::default() }

    pub fn resource_by_addr(&self, addr: &ResourceAddr) -> Option<&Resource> {
        self.resources.get(addr)
    }

    pub fn check_by_name(&self, name: &str) -> Option<&Arc<Check>> {
        self.checks.iter().find(|c| c.addr.name == name)
    }

    pub fn add_check(&mut self, check: Check) -> Result<Arc<Check>, ConfigError> {
        if self.check_by_name(&check.addr.name).is_some() {
            return Err(ConfigError::DuplicateCheck(check.addr.name));
        }
        let check = Arc::new(check);
        self.checks.push(Arc::clone(&check));
        Ok(check)
    }

    pub fn add_resource(&mut self, resource: Resource) -> Result<(), ConfigError> {
        if self.resources.contains_key(&resource.addr) {
            return Err(ConfigError::DuplicateResource(resource.addr.to_string()));
        }
        self.resources.insert(resource.addr.clone(), resource);
        Ok(())
    }
}

/// One node of the configuration tree.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub path: ModuleAddr,
    /// `None` when the module body could not be loaded.
    pub module: Option<Module>,
    /// Child module configurations, keyed by call name.
    pub children: BTreeMap<String, Config>,
}

impl Config {
    pub fn root(module: Module) -> Self {
        Self { path: ModuleAddr::root(), module: Some(module), children: BTreeMap::new() }
    }

    /// Attaches a child module call and returns it for further nesting.
    pub fn add_child(&mut self, name: impl Into<String>, module: Option<Module>) -> Result<&mut Config, ConfigError> {
        let name = name.into();
        validate_call_name(&name)?;
        match self.children.entry(name) {
            Entry::Occupied(existing) => Err(ConfigError::DuplicateModuleCall(existing.get().path.to_string())),
            Entry::Vacant(slot) => {
                let path = self.path.child(slot.key().clone());
                Ok(slot.insert(Config { path, module, children: BTreeMap::new() }))
            }
        }
    }

    pub fn module(&self) -> Result<&Module, ConfigError> {
        self.module.as_ref().ok_or_else(|| ConfigError::ModuleNotLoaded(self.path.to_string()))
    }

    /// Visits this node and every descendant, parents before children.
    pub fn descendants(&self) -> Vec<&Config> {
        let mut out = vec![self];
        for child in self.children.values() {
            out.extend(child.descendants());
        }
        out
    }

    pub fn descendant(&self, path: &ModuleAddr) -> Option<&Config> {
        path.steps().try_fold(self, |cfg, step| cfg.children.get(step))
    }
}

/// Call names become single steps of a module path, so they may not be empty
/// or contain the `.` separator.
pub(crate) fn validate_call_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() || name.contains('.') {
        return Err(ConfigError::InvalidModuleName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_tree_paths_follow_nesting() {
        let mut root = Config::root(Module::new());
        root.add_child("network", Some(Module::new())).unwrap().add_child("subnet", None).unwrap();
        root.add_child("app", Some(Module::new())).unwrap();

        let paths: Vec<String> = root.descendants().iter().map(|c| c.path.to_string()).collect();
        assert_eq!(paths, vec!["", "module.app", "module.network", "module.network.module.subnet"]);

        let subnet = root.descendant(&ModuleAddr::root().child("network").child("subnet")).unwrap();
        assert!(matches!(subnet.module(), Err(ConfigError::ModuleNotLoaded(p)) if p == "module.network.module.subnet"));
    }

    #[test]
    fn test_duplicate_declarations_rejected() {
        let mut module = Module::new();
        module.add_check(Check::new("a")).unwrap();
        assert!(matches!(module.add_check(Check::new("a")), Err(ConfigError::DuplicateCheck(n)) if n == "a"));

        let addr = ResourceAddr::data("http", "x");
        module.add_resource(Resource::new(addr.clone())).unwrap();
        assert!(module.add_resource(Resource::new(addr)).is_err());
    }

    #[test]
    fn test_duplicate_module_call_keeps_first() {
        let mut root = Config::root(Module::new());
        root.add_child("app", None).unwrap();

        let mut app = Module::new();
        app.add_check(Check::new("health")).unwrap();
        let err = root.add_child("app", Some(app)).unwrap_err();

        assert!(matches!(err, ConfigError::DuplicateModuleCall(ref p) if p == "module.app"));
        assert!(root.children["app"].module.is_none());
        assert_eq!(root.children.len(), 1);
    }

    #[rstest]
    #[case("")]
    #[case("a.module.b")]
    #[case(".")]
    fn test_call_names_cannot_fake_nesting(#[case] name: &str) {
        let mut root = Config::root(Module::new());
        let err = root.add_child(name, Some(Module::new())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidModuleName(ref n) if n == name));
        assert!(root.children.is_empty());
    }
}
