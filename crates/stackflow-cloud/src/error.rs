//! Provisioning error types

use thiserror::Error;

/// Provisioning errors
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Provisioning failed: {0}")]
    ProvisionFailed(String),

    #[error("Stack not found: {0}")]
    StackNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
