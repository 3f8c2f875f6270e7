//! Error types for cloud controller requests.

use thiserror::Error;

/// Errors returned by a [`CloudControllerClient`](super::CloudControllerClient).
///
/// `Clone + PartialEq` so that layers forwarding these errors can be checked for
/// forwarding the exact value they received.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CcError {
    /// No resource with the given GUID exists.
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// The controller understood the request but refused to apply it.
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    /// Any other error reported by the API.
    #[error("{0}")]
    Api(String),

    /// The controller is no longer accepting requests.
    #[error("Cloud controller closed")]
    ActorClosed,

    /// The controller dropped the request before answering.
    #[error("Cloud controller dropped response channel")]
    ActorDropped,
}

impl From<String> for CcError {
    fn from(msg: String) -> Self {
        CcError::Api(msg)
    }
}

impl From<&str> for CcError {
    fn from(msg: &str) -> Self {
        CcError::Api(msg.to_string())
    }
}
