//! Resource addresses.

use super::module::ModuleAddr;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a resource is managed by the tool or only read (a data source).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceMode {
    Managed,
    Data,
}

/// A resource block, relative to the module declaring it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceAddr {
    pub mode: ResourceMode,
    pub type_name: String,
    pub name: String,
}

impl ResourceAddr {
    pub fn managed(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self { mode: ResourceMode::Managed, type_name: type_name.into(), name: name.into() }
    }

    pub fn data(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self { mode: ResourceMode::Data, type_name: type_name.into(), name: name.into() }
    }

    pub fn in_module(&self, module: &ModuleAddr) -> ConfigResource {
        ConfigResource { module: module.clone(), resource: self.clone() }
    }
}

impl fmt::Display for ResourceAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode == ResourceMode::Data {
            f.write_str("data.")?;
        }
        write!(f, "{}.{}", self.type_name, self.name)
    }
}

/// Parses `type.name` or `data.type.name`.
impl FromStr for ResourceAddr {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        match parts.as_slice() {
            ["data", type_name, name] if !type_name.is_empty() && !name.is_empty() => {
                Ok(Self::data(*type_name, *name))
            }
            [type_name, name] if *type_name != "data" && !type_name.is_empty() && !name.is_empty() => {
                Ok(Self::managed(*type_name, *name))
            }
            _ => Err(format!("'{}' is not a valid resource address", s)),
        }
    }
}

/// A resource block within the whole configuration tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConfigResource {
    pub module: ModuleAddr,
    pub resource: ResourceAddr,
}

impl fmt::Display for ConfigResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.module.is_root() {
            write!(f, "{}", self.resource)
        } else {
            write!(f, "{}.{}", self.module, self.resource)
        }
    }
}
