//! # Controller Messages
//!
//! Requests sent from [`LocalControllerClient`](super::LocalControllerClient) to
//! [`ControllerActor`](super::ControllerActor).

use crate::ccv3::{CcError, ClientResponse};
use crate::resources::RelationshipList;
use tokio::sync::oneshot;

/// One-shot channel the actor answers on. Warnings travel with the result.
pub type Response<T> = oneshot::Sender<ClientResponse<T, CcError>>;

/// A request handled by the controller task.
///
/// The `Register*` variants seed state. The remaining variants map 1:1 onto the
/// [`CloudControllerClient`](crate::ccv3::CloudControllerClient) operations.
#[derive(Debug)]
pub enum ControllerRequest {
    RegisterResource {
        guid: String,
        respond_to: Response<()>,
    },
    RegisterTarget {
        guid: String,
        respond_to: Response<()>,
    },
    Share {
        resource_guid: String,
        target_guids: Vec<String>,
        respond_to: Response<RelationshipList>,
    },
    Unshare {
        resource_guid: String,
        target_guid: String,
        respond_to: Response<()>,
    },
    GetShared {
        resource_guid: String,
        respond_to: Response<RelationshipList>,
    },
}
