//! # space-share demo
//!
//! Starts the local cloud controller, shares a service instance with two spaces through
//! the [`Actor`](space_share::v3action::Actor), shares again to surface warnings, unshares
//! one space, and shuts down.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use space_share::lifecycle::{setup_tracing, ControllerConfig, ControllerSystem, LifecycleError};
use space_share::v3action::Warnings;
use tracing::{error, info, warn, Instrument};

const SERVICE_INSTANCE_GUID: &str = "some-service-instance-guid";
const SPACE_GUIDS: [&str; 2] = ["some-space-guid", "other-space-guid"];

fn report(warnings: &Warnings) {
    for warning in warnings.iter() {
        warn!(%warning, "Controller warning");
    }
}

#[tokio::main]
async fn main() -> Result<(), LifecycleError> {
    setup_tracing();

    let config = ControllerConfig::from_env()?;
    let system = ControllerSystem::new(&config)?;

    let span = tracing::info_span!("seeding");
    async {
        info!("Registering service instance and spaces");
        let _ = system.client.register_resource(SERVICE_INSTANCE_GUID).await;
        for space in SPACE_GUIDS {
            let _ = system.client.register_target(space).await;
        }
    }
    .instrument(span)
    .await;

    let targets: Vec<String> = SPACE_GUIDS.iter().map(|s| s.to_string()).collect();

    let span = tracing::info_span!("sharing");
    async {
        // The second share hits spaces that are already shared and comes back with warnings.
        for attempt in 1..=2 {
            let (result, warnings) = system
                .actor
                .share_resource_to_targets(SERVICE_INSTANCE_GUID, &targets)
                .await;
            report(&warnings);
            match result {
                Ok(list) => info!(attempt, spaces = ?list.guids, "Service instance shared"),
                Err(e) => error!(attempt, error = %e, "Sharing failed"),
            }
        }

        let (result, warnings) = system
            .actor
            .unshare_resource_from_target(SERVICE_INSTANCE_GUID, SPACE_GUIDS[1])
            .await;
        report(&warnings);
        if let Err(e) = result {
            error!(error = %e, "Unsharing failed");
        }

        let (result, warnings) = system.actor.get_shared_targets(SERVICE_INSTANCE_GUID).await;
        report(&warnings);
        match result {
            Ok(list) => info!(spaces = ?list.guids, "Currently shared"),
            Err(e) => error!(error = %e, "Listing shared spaces failed"),
        }
    }
    .instrument(span)
    .await;

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
