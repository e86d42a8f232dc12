//! Static module paths and their expanded instances.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Most configurations nest only a few modules deep.
type Steps<T> = SmallVec<[T; 4]>;

/// The position of a module call in the static configuration tree.
///
/// The root module has an empty path. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ModuleAddr(Steps<String>);

impl ModuleAddr {
    pub fn root() -> Self { Self::default() }

    pub fn is_root(&self) -> bool { self.0.is_empty() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Returns the address of a module called `name` from this module.
    ///
    /// `name` is taken as one step; configuration builders reject names
    /// containing `.` before they get here.
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut steps = self.0.clone();
        steps.push(name.into());
        Self(steps)
    }

    /// Returns the calling module, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.iter().cloned().collect()))
    }

    pub fn steps(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ModuleAddr {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for ModuleAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "module.{}", step)?;
        }
        Ok(())
    }
}

/// A repetition key assigned by `count` (integer) or `for_each` (string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InstanceKey {
    Int(i64),
    Str(String),
}

impl fmt::Display for InstanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceKey::Int(i) => write!(f, "[{}]", i),
            InstanceKey::Str(s) => write!(f, "[{:?}]", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleInstanceStep {
    pub name: String,
    pub key: Option<InstanceKey>,
}

/// A module path where every step may carry the instance key chosen during
/// expansion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ModuleInstance(Steps<ModuleInstanceStep>);

impl ModuleInstance {
    pub fn root() -> Self { Self::default() }

    pub fn child(&self, name: impl Into<String>, key: Option<InstanceKey>) -> Self {
        let mut steps = self.0.clone();
        steps.push(ModuleInstanceStep { name: name.into(), key });
        Self(steps)
    }

    /// Drops the instance keys, leaving the static module path.
    pub fn module(&self) -> ModuleAddr {
        self.0.iter().map(|step| step.name.clone()).collect()
    }
}

impl fmt::Display for ModuleInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "module.{}", step.name)?;
            if let Some(key) = &step.key {
                write!(f, "{}", key)?;
            }
        }
        Ok(())
    }
}
