//! # Controller Actor
//!
//! The server half of the local cloud controller. It owns the sharing state and the
//! receiving end of the request channel.

use crate::ccv3::{CcError, ClientResponse, Warnings};
use crate::controller::client::LocalControllerClient;
use crate::controller::message::ControllerRequest;
use crate::resources::RelationshipList;
use std::collections::{HashMap, HashSet};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The task that answers sharing requests.
///
/// ## State
///
/// * `shared` maps each registered resource GUID to the ordered list of target GUIDs
///   it is shared with.
/// * `targets` is the set of registered target GUIDs. Sharing with an unregistered
///   target is rejected.
///
/// ## Operations
///
/// * **Share**:
///     1. Fails with [`CcError::ResourceNotFound`] if the resource is unknown.
///     2. Fails with [`CcError::UnprocessableEntity`] if any target is unknown. Nothing
///        is applied in that case.
///     3. Appends each new target in request order. A target that is already shared
///        produces a warning instead of a duplicate entry.
///     4. Returns the full shared list.
///
/// * **Unshare**: removes the target. A target that was not shared produces a warning.
///
/// * **GetShared**: returns the current shared list.
pub struct ControllerActor {
    receiver: mpsc::Receiver<ControllerRequest>,
    shared: HashMap<String, Vec<String>>,
    targets: HashSet<String>,
}

impl ControllerActor {
    /// Creates the actor and a client connected to it.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. Must be greater than zero.
    ///   When the channel is full, client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, LocalControllerClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            shared: HashMap::new(),
            targets: HashSet::new(),
        };
        (actor, LocalControllerClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self) {
        info!("Cloud controller started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ControllerRequest::RegisterResource { guid, respond_to } => {
                    let _ = respond_to.send(self.register_resource(guid));
                }
                ControllerRequest::RegisterTarget { guid, respond_to } => {
                    let _ = respond_to.send(self.register_target(guid));
                }
                ControllerRequest::Share {
                    resource_guid,
                    target_guids,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.share(&resource_guid, target_guids));
                }
                ControllerRequest::Unshare {
                    resource_guid,
                    target_guid,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.unshare(&resource_guid, &target_guid));
                }
                ControllerRequest::GetShared {
                    resource_guid,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.get_shared(&resource_guid));
                }
            }
        }

        info!(
            resources = self.shared.len(),
            targets = self.targets.len(),
            "Cloud controller shutdown"
        );
    }

    fn register_resource(&mut self, guid: String) -> ClientResponse<(), CcError> {
        let mut warnings = Warnings::new();
        if self.shared.contains_key(&guid) {
            warnings.push(format!("Resource {} is already registered", guid));
        } else {
            debug!(resource_guid = %guid, "Registered resource");
            self.shared.insert(guid, Vec::new());
        }
        (Ok(()), warnings)
    }

    fn register_target(&mut self, guid: String) -> ClientResponse<(), CcError> {
        let mut warnings = Warnings::new();
        if self.targets.contains(&guid) {
            warnings.push(format!("Target {} is already registered", guid));
        } else {
            debug!(target_guid = %guid, "Registered target");
            self.targets.insert(guid);
        }
        (Ok(()), warnings)
    }

    fn share(
        &mut self,
        resource_guid: &str,
        target_guids: Vec<String>,
    ) -> ClientResponse<RelationshipList, CcError> {
        debug!(resource_guid, ?target_guids, "Share");
        let mut warnings = Warnings::new();

        let unknown: Vec<&str> = target_guids
            .iter()
            .filter(|guid| !self.targets.contains(guid.as_str()))
            .map(String::as_str)
            .collect();
        if !unknown.is_empty() && self.shared.contains_key(resource_guid) {
            warn!(resource_guid, ?unknown, "Share rejected");
            let err = CcError::UnprocessableEntity(format!(
                "Unable to share with unknown targets: {}",
                unknown.join(", ")
            ));
            return (Err(err), warnings);
        }

        let Some(shared) = self.shared.get_mut(resource_guid) else {
            warn!(resource_guid, "Not found");
            return (
                Err(CcError::ResourceNotFound(resource_guid.to_string())),
                warnings,
            );
        };

        for guid in target_guids {
            if shared.contains(&guid) {
                warnings.push(format!(
                    "Resource {} is already shared with target {}",
                    resource_guid, guid
                ));
            } else {
                shared.push(guid);
            }
        }

        info!(resource_guid, size = shared.len(), "Shared");
        (Ok(RelationshipList::new(shared.iter().cloned())), warnings)
    }

    fn unshare(&mut self, resource_guid: &str, target_guid: &str) -> ClientResponse<(), CcError> {
        debug!(resource_guid, target_guid, "Unshare");
        let mut warnings = Warnings::new();

        let Some(shared) = self.shared.get_mut(resource_guid) else {
            warn!(resource_guid, "Not found");
            return (
                Err(CcError::ResourceNotFound(resource_guid.to_string())),
                warnings,
            );
        };

        match shared.iter().position(|guid| guid == target_guid) {
            Some(index) => {
                shared.remove(index);
                info!(resource_guid, target_guid, size = shared.len(), "Unshared");
            }
            None => warnings.push(format!(
                "Resource {} is not shared with target {}",
                resource_guid, target_guid
            )),
        }
        (Ok(()), warnings)
    }

    fn get_shared(&self, resource_guid: &str) -> ClientResponse<RelationshipList, CcError> {
        let result = self
            .shared
            .get(resource_guid)
            .map(|shared| RelationshipList::new(shared.iter().cloned()))
            .ok_or_else(|| CcError::ResourceNotFound(resource_guid.to_string()));
        debug!(resource_guid, found = result.is_ok(), "GetShared");
        (result, Warnings::new())
    }
}
