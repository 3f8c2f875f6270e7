//! # space-share
//!
//! > **Sharing a service instance with spaces, with warnings that always make it back.**
//!
//! This crate implements the actor layer of a cloud-controller client: a thin façade
//! that calls the API client once per operation and hands the outcome back in a
//! stable shape.
//!
//! ## The Outcome Contract
//!
//! Every operation returns `(Result<T, E>, Warnings)`:
//!
//! - **Warnings** are non-fatal diagnostics. They are forwarded on success *and* on
//!   failure, so a presentation layer can always show them.
//! - **Errors** are the client's own error values, forwarded verbatim. The actor never
//!   wraps, translates, or retries.
//! - **Payloads** are passed through untouched. On failure there is no payload at all.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`resources`])
//! - **Key items**: [`RelationshipList`](resources::RelationshipList).
//!
//! ### 2. The Contract ([`ccv3`])
//! The seam between the actor and whatever talks to the cloud controller.
//! - **Key items**: [`CloudControllerClient`](ccv3::CloudControllerClient),
//!   [`CcError`](ccv3::CcError), [`FakeCloudControllerClient`](ccv3::fake::FakeCloudControllerClient).
//!
//! ### 3. The Façade ([`v3action`])
//! - **Key items**: [`Actor`](v3action::Actor),
//!   [`share_resource_to_targets`](v3action::Actor::share_resource_to_targets).
//!
//! ### 4. The Local Controller ([`controller`])
//! An in-memory cloud controller running as a Tokio task, for demos and integration tests.
//! - **Key items**: [`ControllerActor`](controller::ControllerActor),
//!   [`LocalControllerClient`](controller::LocalControllerClient).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! - **Key items**: [`ControllerSystem`](lifecycle::ControllerSystem),
//!   [`setup_tracing`](lifecycle::setup_tracing), [`ControllerConfig`](lifecycle::ControllerConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod ccv3;
pub mod controller;
pub mod lifecycle;
pub mod resources;
pub mod v3action;
