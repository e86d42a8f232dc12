//! Check blocks and the containment relation between checks and the
//! resources embedded in them.

use crate::addrs::CheckAddr;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// One assertion of a check block. Both fields are opaque expressions here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRule {
    pub condition: String,
    pub error_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub addr: CheckAddr,
    pub asserts: Vec<CheckRule>,
}

impl Check {
    pub fn new(name: impl Into<String>) -> Self {
        Self { addr: CheckAddr::new(name), asserts: Vec::new() }
    }

    pub fn with_assert(mut self, condition: impl Into<String>, error_message: impl Into<String>) -> Self {
        self.asserts.push(CheckRule { condition: condition.into(), error_message: error_message.into() });
        self
    }
}

/// A block that other blocks can be embedded in.
///
/// `accessible` answers whether something declared inside this container may
/// be seen from the given check.
pub trait Container: Debug + Send + Sync {
    fn accessible(&self, addr: &CheckAddr) -> bool;
}

/// A check contains only what is declared directly inside it.
impl Container for Check {
    fn accessible(&self, addr: &CheckAddr) -> bool {
        &self.addr == addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_accepts_only_itself() {
        let check = Check::new("b").with_assert("status == 200", "endpoint down");
        assert!(check.accessible(&CheckAddr::new("b")));
        assert!(!check.accessible(&CheckAddr::new("c")));
        assert_eq!(check.asserts.len(), 1);
    }
}
