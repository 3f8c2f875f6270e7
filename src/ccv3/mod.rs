//! # Cloud Controller V3 Client Contract
//!
//! The actor layer never talks to the network itself. Everything it needs from the
//! cloud controller goes through the [`CloudControllerClient`] trait defined here.
//!
//! Every operation returns its payload (or error) together with the [`Warnings`] the
//! controller produced while serving the request. Warnings are not errors: they come
//! back on success *and* on failure, so callers can always display them.
//!
//! ## Implementations
//!
//! - [`LocalControllerClient`](crate::controller::LocalControllerClient) - an in-memory
//!   controller running as a Tokio task.
//! - [`FakeCloudControllerClient`](fake::FakeCloudControllerClient) - a recording test
//!   double with stubbed responses. See the [`fake`] module.

pub mod client;
pub mod error;
pub mod fake;
pub mod warnings;

pub use client::*;
pub use error::*;
pub use warnings::*;
