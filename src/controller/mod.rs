//! # Local Cloud Controller
//!
//! An in-memory cloud controller that serves the [`CloudControllerClient`](crate::ccv3::CloudControllerClient)
//! contract from a single Tokio task.
//!
//! ## Structure
//!
//! - [`message`] - [`ControllerRequest`], the messages sent to the task
//! - [`actor`] - [`ControllerActor`], the task owning the sharing state
//! - [`client`] - [`LocalControllerClient`], the cloneable handle used by callers
//!
//! ## Concurrency Model
//!
//! The actor owns its state outright and handles one request at a time, so the store
//! needs no locks. Any number of clients can send requests concurrently. When every
//! client is dropped the channel closes and the task exits.
//!
//! ## Usage
//!
//! ```rust
//! use space_share::ccv3::CloudControllerClient;
//! use space_share::controller::ControllerActor;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ControllerActor::new(8);
//!     let handle = tokio::spawn(actor.run());
//!
//!     client.register_resource("si-1").await.0.unwrap();
//!     client.register_target("space-1").await.0.unwrap();
//!
//!     let (result, warnings) = client
//!         .share_resource_to_targets("si-1", &["space-1".to_string()])
//!         .await;
//!     assert_eq!(result.unwrap().guids, vec!["space-1".to_string()]);
//!     assert!(warnings.is_empty());
//!
//!     drop(client);
//!     handle.await.unwrap();
//! }
//! ```

pub mod actor;
pub mod client;
pub mod message;

pub use actor::ControllerActor;
pub use client::LocalControllerClient;
pub use message::{ControllerRequest, Response};
