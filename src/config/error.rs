//! Defines the error types for the configuration tree.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Module '{0}' has no loaded configuration")]
    ModuleNotLoaded(String),
    #[error("Resource '{resource}' is contained by unknown check '{check}'")]
    UnknownContainer { resource: String, check: String },
    #[error("Duplicate check block '{0}'")]
    DuplicateCheck(String),
    #[error("Duplicate resource block '{0}'")]
    DuplicateResource(String),
    #[error("Duplicate module call '{0}'")]
    DuplicateModuleCall(String),
    #[error("Invalid module call name '{0}'")]
    InvalidModuleName(String),
    #[error("Invalid resource address: {0}")]
    InvalidResourceAddr(String),
    #[error("Malformed configuration document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}
