//! # Local Controller Client
//!
//! The cloneable handle for talking to a [`ControllerActor`](super::ControllerActor).

use crate::ccv3::{CcError, ClientResponse, CloudControllerClient, Warnings};
use crate::controller::message::{ControllerRequest, Response};
use crate::resources::RelationshipList;
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Sends requests to the local controller and awaits its answers.
///
/// * **Cloneable** - holds only a sender, so cloning is inexpensive.
/// * **Transport failures** - a closed channel maps to [`CcError::ActorClosed`], a
///   dropped response to [`CcError::ActorDropped`]. Both come back with no warnings.
#[derive(Clone)]
pub struct LocalControllerClient {
    sender: mpsc::Sender<ControllerRequest>,
}

impl LocalControllerClient {
    pub fn new(sender: mpsc::Sender<ControllerRequest>) -> Self {
        Self { sender }
    }

    /// Registers a resource that targets can be shared with.
    #[instrument(skip(self, guid))]
    pub async fn register_resource(&self, guid: impl Into<String>) -> ClientResponse<(), CcError> {
        let guid = guid.into();
        debug!(resource_guid = %guid, "Sending request");
        self.request(|respond_to| ControllerRequest::RegisterResource { guid, respond_to })
            .await
    }

    /// Registers a target that resources can be shared to.
    #[instrument(skip(self, guid))]
    pub async fn register_target(&self, guid: impl Into<String>) -> ClientResponse<(), CcError> {
        let guid = guid.into();
        debug!(target_guid = %guid, "Sending request");
        self.request(|respond_to| ControllerRequest::RegisterTarget { guid, respond_to })
            .await
    }

    async fn request<T: Send>(
        &self,
        build: impl FnOnce(Response<T>) -> ControllerRequest,
    ) -> ClientResponse<T, CcError> {
        let (respond_to, response) = oneshot::channel();
        if self.sender.send(build(respond_to)).await.is_err() {
            return (Err(CcError::ActorClosed), Warnings::new());
        }
        match response.await {
            Ok(answer) => answer,
            Err(_) => (Err(CcError::ActorDropped), Warnings::new()),
        }
    }
}

#[async_trait]
impl CloudControllerClient for LocalControllerClient {
    type Error = CcError;

    #[instrument(skip(self))]
    async fn share_resource_to_targets(
        &self,
        resource_guid: &str,
        target_guids: &[String],
    ) -> ClientResponse<RelationshipList, CcError> {
        debug!("Sending request");
        self.request(|respond_to| ControllerRequest::Share {
            resource_guid: resource_guid.to_string(),
            target_guids: target_guids.to_vec(),
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    async fn unshare_resource_from_target(
        &self,
        resource_guid: &str,
        target_guid: &str,
    ) -> ClientResponse<(), CcError> {
        debug!("Sending request");
        self.request(|respond_to| ControllerRequest::Unshare {
            resource_guid: resource_guid.to_string(),
            target_guid: target_guid.to_string(),
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    async fn get_shared_targets(
        &self,
        resource_guid: &str,
    ) -> ClientResponse<RelationshipList, CcError> {
        debug!("Sending request");
        self.request(|respond_to| ControllerRequest::GetShared {
            resource_guid: resource_guid.to_string(),
            respond_to,
        })
        .await
    }
}
