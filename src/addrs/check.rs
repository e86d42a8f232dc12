//! Check addresses at the three levels the graph cares about: local to a
//! module, scoped into a static module path, and scoped into an expanded
//! module instance.

use super::module::{ModuleAddr, ModuleInstance};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The name of a check block, relative to the module declaring it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CheckAddr {
    pub name: String,
}

impl CheckAddr {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn in_module(&self, module: &ModuleAddr) -> ConfigCheck {
        ConfigCheck { module: module.clone(), check: self.clone() }
    }

    pub fn absolute(&self, module: &ModuleInstance) -> AbsCheck {
        AbsCheck { module: module.clone(), check: self.clone() }
    }
}

impl fmt::Display for CheckAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "check.{}", self.name)
    }
}

/// A check declaration within the whole configuration tree.
///
/// There is exactly one `ConfigCheck` for each declared check block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConfigCheck {
    pub module: ModuleAddr,
    pub check: CheckAddr,
}

impl fmt::Display for ConfigCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_scoped(f, &self.module.to_string(), &self.check)
    }
}

/// A single instance of a check, inside one expanded module instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AbsCheck {
    pub module: ModuleInstance,
    pub check: CheckAddr,
}

impl AbsCheck {
    /// The declaration this instance was expanded from.
    pub fn config_check(&self) -> ConfigCheck {
        self.check.in_module(&self.module.module())
    }
}

impl fmt::Display for AbsCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_scoped(f, &self.module.to_string(), &self.check)
    }
}

fn fmt_scoped(f: &mut fmt::Formatter<'_>, module: &str, check: &CheckAddr) -> fmt::Result {
    if module.is_empty() {
        write!(f, "{}", check)
    } else {
        write!(f, "{}.{}", module, check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addrs::InstanceKey;
    use rstest::rstest;

    #[test]
    fn test_scoping_into_module() {
        let check = CheckAddr::new("health");
        assert_eq!(check.in_module(&ModuleAddr::root()).to_string(), "check.health");

        let module = ModuleAddr::root().child("app");
        let scoped = check.in_module(&module);
        assert_eq!(scoped.to_string(), "module.app.check.health");
        assert_eq!(scoped, check.in_module(&module));
    }

    #[test]
    fn test_instance_maps_back_to_declaration() {
        let check = CheckAddr::new("health");
        let inst = ModuleInstance::root().child("app", Some(InstanceKey::Int(2)));
        let abs = check.absolute(&inst);

        assert_eq!(abs.to_string(), "module.app[2].check.health");
        assert_eq!(abs.config_check(), check.in_module(&ModuleAddr::root().child("app")));
    }

    #[rstest]
    #[case(ModuleInstance::root())]
    #[case(ModuleInstance::root().child("app", Some(InstanceKey::Int(3))))]
    #[case(ModuleInstance::root().child("app", None).child("db", Some(InstanceKey::Str("eu".into()))))]
    fn test_addresses_survive_json(#[case] module: ModuleInstance) {
        let abs = CheckAddr::new("health").absolute(&module);
        let decoded: AbsCheck = serde_json::from_str(&serde_json::to_string(&abs).unwrap()).unwrap();
        assert_eq!(decoded, abs);
        assert_eq!(decoded.to_string(), abs.to_string());

        let config = abs.config_check();
        let decoded: ConfigCheck = serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(decoded, config);
    }
}
