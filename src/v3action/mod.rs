//! # V3 Actions
//!
//! The façade the rest of an application calls. An [`Actor`] owns nothing but a
//! [`CloudControllerClient`](crate::ccv3::CloudControllerClient). Each of its
//! operations makes exactly one client call and hands back the client's outcome in
//! the actor's own shape:
//!
//! - the payload, untouched, on success
//! - the client's error value itself (same type, not wrapped) on failure
//! - the client's warnings in both cases
//!
//! ## Structure
//!
//! - [`actor`] - the [`Actor`] type and its constructor
//! - [`sharing`] - share / unshare / list operations
//! - [`warnings`] - the actor-side [`Warnings`] collection

pub mod actor;
pub mod sharing;
pub mod warnings;

pub use actor::*;
pub use warnings::*;

/// Outcome of an actor operation: the payload or the client's error, plus warnings.
pub type ActorResponse<T, E> = (Result<T, E>, Warnings);
