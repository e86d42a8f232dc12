//! Graph construction for check blocks.
//!
//! This module provides the `CheckTransformer`, which adds an expansion node
//! for every declared check and, when checks are reported, a report node that
//! resources embedded in the check must wait for. That ordering lets check
//! outcomes be recorded before the lookups inside them run.

// Publicly export the primary components for use by other modules.
pub use self::nodes::{MakeInstance, NodeCheckAssert, NodeExpandCheck, NodeReportCheck};
pub use self::transformer::{CheckTransformer, WalkOperation};

// --- MODULE DECLARATIONS ---
mod nodes;
mod transformer;
