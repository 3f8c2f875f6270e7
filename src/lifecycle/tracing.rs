//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by the
//! `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Controller lifecycle**: startup and shutdown with final resource counts
//! - **Sharing operations**: one span per actor call, with GUIDs as fields
//! - **Outcomes**: `info` on success, `warn` on failure, both with the warning count
//!
//! ## Usage Examples
//!
//! ```bash
//! # Outcomes only
//! RUST_LOG=info cargo run
//!
//! # Full request payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the controller task
//! RUST_LOG=space_share::controller=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a share through the demo binary looks like:
//!
//! ```text
//! INFO Cloud controller started
//! INFO Shared resource_guid="some-service-instance-guid" size=2
//! INFO sharing:share_resource_to_targets: Shared shared=2 warnings=0
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
