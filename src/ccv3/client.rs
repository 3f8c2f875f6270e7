//! # CloudControllerClient Trait
//!
//! The call contract between the actor layer and whatever performs the request
//! against the cloud controller.
use crate::ccv3::Warnings;
use crate::resources::RelationshipList;
use async_trait::async_trait;

/// Outcome of a client call: the payload or error, plus warnings that are always present.
pub type ClientResponse<T, E> = (Result<T, E>, Warnings);

/// Operations the cloud controller exposes for sharing a resource (a service
/// instance) with targets (spaces).
///
/// Implementations treat each call as a single request. They never retry.
#[async_trait]
pub trait CloudControllerClient: Send + Sync {
    /// The error type produced by this client.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Shares `resource_guid` with every GUID in `target_guids`.
    ///
    /// On success returns the resource's shared-target relationship list.
    async fn share_resource_to_targets(
        &self,
        resource_guid: &str,
        target_guids: &[String],
    ) -> ClientResponse<RelationshipList, Self::Error>;

    /// Stops sharing `resource_guid` with `target_guid`.
    async fn unshare_resource_from_target(
        &self,
        resource_guid: &str,
        target_guid: &str,
    ) -> ClientResponse<(), Self::Error>;

    /// Lists the targets `resource_guid` is currently shared with.
    async fn get_shared_targets(
        &self,
        resource_guid: &str,
    ) -> ClientResponse<RelationshipList, Self::Error>;
}
