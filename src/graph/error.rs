//! Defines the error types for graph construction.
use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Cannot connect '{0}' to itself")]
    SelfEdge(String),
    #[error("Cycle detected involving '{0}'")]
    Cycle(String),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
