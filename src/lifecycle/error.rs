//! Error types for configuration and system lifecycle.

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The channel buffer size was zero or not a number.
    #[error("Invalid buffer size: {0}")]
    InvalidBufferSize(String),
}

/// Errors raised while starting or stopping the system.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The controller task panicked or was cancelled.
    #[error("Controller task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
