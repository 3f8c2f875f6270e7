use crate::controller::{ControllerActor, LocalControllerClient};
use crate::lifecycle::{ControllerConfig, LifecycleError};
use crate::v3action::Actor;
use tracing::{error, info};

/// Runs the local cloud controller and exposes an [`Actor`] wired to it.
///
/// # Example
///
/// ```ignore
/// let system = ControllerSystem::new(&ControllerConfig::default())?;
///
/// // Seed the controller, then go through the actor
/// system.client.register_resource("si-1").await;
/// system.client.register_target("space-1").await;
/// let (result, warnings) = system
///     .actor
///     .share_resource_to_targets("si-1", &["space-1".to_string()])
///     .await;
///
/// system.shutdown().await?;
/// ```
pub struct ControllerSystem {
    /// Façade over the controller, for application code.
    pub actor: Actor<LocalControllerClient>,

    /// Direct handle on the controller, for seeding resources and targets.
    pub client: LocalControllerClient,

    handle: tokio::task::JoinHandle<()>,
}

impl ControllerSystem {
    /// Validates `config`, spawns the controller task, and wires the actor to it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &ControllerConfig) -> Result<Self, LifecycleError> {
        config.validate()?;

        let (controller, client) = ControllerActor::new(config.buffer_size);
        let handle = tokio::spawn(controller.run());
        let actor = Actor::new(client.clone());

        info!(buffer_size = config.buffer_size, "Controller system started");
        Ok(Self {
            actor,
            client,
            handle,
        })
    }

    /// Drops the actor and client, then waits for the controller task to exit.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the controller shut down cleanly
    /// - `Err(LifecycleError::TaskFailed)` if the task panicked
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");

        // Dropping every sender closes the channel, which ends the run loop.
        drop(self.actor);
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Controller task failed: {:?}", e);
            return Err(e.into());
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
