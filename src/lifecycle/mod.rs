//! # System Lifecycle
//!
//! Starting, wiring, and shutting down the local cloud controller and the [`Actor`](crate::v3action::Actor)
//! that fronts it.
//!
//! ## The ControllerSystem Pattern
//!
//! ```rust,ignore
//! let config = ControllerConfig::from_env()?;
//! let system = ControllerSystem::new(&config)?;
//!
//! system.client.register_resource("si-1").await;
//! let (result, warnings) = system.actor.share_resource_to_targets("si-1", &targets).await;
//!
//! system.shutdown().await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the actor and client** - closes the sender side of the channel
//! 2. **Controller detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for the controller task to finish
//!
//! Any clone of the client still alive elsewhere keeps the controller running, so
//! drop those before calling [`ControllerSystem::shutdown`].
//!
//! ## Configuration & Tracing
//!
//! [`ControllerConfig`] holds the tunables. [`setup_tracing`] installs the log
//! subscriber, filtered by `RUST_LOG`.

pub mod config;
pub mod controller_system;
pub mod error;
pub mod tracing;

pub use config::*;
pub use controller_system::*;
pub use error::*;
pub use self::tracing::*;
