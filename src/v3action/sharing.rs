//! Sharing a resource (a service instance) with targets (spaces).

use crate::ccv3::CloudControllerClient;
use crate::resources::RelationshipList;
use crate::v3action::{Actor, ActorResponse, Warnings};
use tracing::{debug, info, instrument, warn};

impl<C: CloudControllerClient> Actor<C> {
    /// Shares `resource_guid` with `target_guids`.
    ///
    /// The targets are passed to the client as given: not reordered, not
    /// de-duplicated. The client is called exactly once.
    ///
    /// # Returns
    ///
    /// - `(Ok(list), warnings)` with the client's relationship list unchanged
    /// - `(Err(e), warnings)` where `e` is the client's error value
    #[instrument(skip(self, target_guids), fields(targets = target_guids.len()))]
    pub async fn share_resource_to_targets(
        &self,
        resource_guid: &str,
        target_guids: &[String],
    ) -> ActorResponse<RelationshipList, C::Error> {
        debug!(?target_guids, "share_resource_to_targets called");
        let (result, warnings) = self
            .client()
            .share_resource_to_targets(resource_guid, target_guids)
            .await;
        let warnings = Warnings::from(warnings);

        match &result {
            Ok(list) => info!(shared = list.len(), warnings = warnings.len(), "Shared"),
            Err(e) => warn!(error = %e, warnings = warnings.len(), "Share failed"),
        }
        (result, warnings)
    }

    /// Stops sharing `resource_guid` with `target_guid`.
    #[instrument(skip(self))]
    pub async fn unshare_resource_from_target(
        &self,
        resource_guid: &str,
        target_guid: &str,
    ) -> ActorResponse<(), C::Error> {
        let (result, warnings) = self
            .client()
            .unshare_resource_from_target(resource_guid, target_guid)
            .await;
        let warnings = Warnings::from(warnings);

        if let Err(e) = &result {
            warn!(error = %e, warnings = warnings.len(), "Unshare failed");
        }
        (result, warnings)
    }

    /// Lists the targets `resource_guid` is shared with.
    #[instrument(skip(self))]
    pub async fn get_shared_targets(
        &self,
        resource_guid: &str,
    ) -> ActorResponse<RelationshipList, C::Error> {
        let (result, warnings) = self.client().get_shared_targets(resource_guid).await;
        (result, Warnings::from(warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ccv3::fake::FakeCloudControllerClient;
    use crate::ccv3::{CcError, Warnings as ClientWarnings};

    const SERVICE_INSTANCE_GUID: &str = "some-service-instance-guid";
    const SPACE_GUID: &str = "some-space-guid";

    fn setup() -> (Actor<FakeCloudControllerClient>, FakeCloudControllerClient) {
        let fake = FakeCloudControllerClient::new();
        (Actor::new(fake.clone()), fake)
    }

    #[tokio::test]
    async fn test_share_returns_list_and_warnings() {
        let (actor, fake) = setup();
        let returned = RelationshipList::new([SPACE_GUID]);
        fake.stub_share()
            .return_ok(returned.clone(), ["share-service-instance-warning"]);

        let (result, warnings) = actor
            .share_resource_to_targets(SERVICE_INSTANCE_GUID, &[SPACE_GUID.to_string()])
            .await;

        assert_eq!(result, Ok(returned));
        assert_eq!(warnings, Warnings::from(["share-service-instance-warning"]));

        assert_eq!(fake.share_call_count(), 1);
        let (resource_arg, targets_arg) = fake.share_args_for_call(0);
        assert_eq!(resource_arg, SERVICE_INSTANCE_GUID);
        assert_eq!(targets_arg, vec![SPACE_GUID.to_string()]);
        fake.verify();
    }

    #[tokio::test]
    async fn test_share_returns_error_and_warnings() {
        let (actor, fake) = setup();
        let expected = CcError::Api("share service instance error".to_string());
        fake.stub_share()
            .return_err(expected.clone(), ["share-service-instance-warning"]);

        let (result, warnings) = actor
            .share_resource_to_targets(SERVICE_INSTANCE_GUID, &[SPACE_GUID.to_string()])
            .await;

        let err = result.unwrap_err();
        assert_eq!(err, expected);
        assert_eq!(err.to_string(), "share service instance error");
        assert_eq!(warnings, Warnings::from(["share-service-instance-warning"]));
        assert_eq!(fake.share_call_count(), 1);
    }

    #[tokio::test]
    async fn test_share_passes_targets_through_unchanged() {
        let (actor, fake) = setup();
        fake.stub_share()
            .return_ok(RelationshipList::new(["space-c", "space-a"]), ClientWarnings::new());

        // Duplicates and ordering are the caller's business.
        let targets: Vec<String> = ["space-c", "space-a", "space-c"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (result, warnings) = actor
            .share_resource_to_targets(SERVICE_INSTANCE_GUID, &targets)
            .await;

        assert_eq!(result, Ok(RelationshipList::new(["space-c", "space-a"])));
        assert!(warnings.is_empty());
        assert_eq!(fake.share_args_for_call(0).1, targets);
    }

    #[tokio::test]
    async fn test_share_forwards_multiple_warnings_in_order() {
        let (actor, fake) = setup();
        fake.stub_share().return_err(
            CcError::ResourceNotFound(SERVICE_INSTANCE_GUID.to_string()),
            ["warning-two", "warning-one"],
        );

        let (result, warnings) = actor
            .share_resource_to_targets(SERVICE_INSTANCE_GUID, &[SPACE_GUID.to_string()])
            .await;

        assert!(matches!(result, Err(CcError::ResourceNotFound(guid)) if guid == SERVICE_INSTANCE_GUID));
        assert_eq!(warnings, Warnings::from(["warning-two", "warning-one"]));
    }

    #[tokio::test]
    async fn test_each_share_makes_exactly_one_call() {
        let (actor, fake) = setup();
        fake.stub_share()
            .return_err(CcError::ActorClosed, ClientWarnings::new());
        fake.stub_share()
            .return_ok(RelationshipList::new([SPACE_GUID]), ClientWarnings::new());

        let targets = [SPACE_GUID.to_string()];
        let (first, _) = actor.share_resource_to_targets("first-guid", &targets).await;
        assert_eq!(first, Err(CcError::ActorClosed));
        assert_eq!(fake.share_call_count(), 1);

        let (second, _) = actor.share_resource_to_targets("second-guid", &targets).await;
        assert!(second.is_ok());
        assert_eq!(fake.share_call_count(), 2);
        assert_eq!(fake.share_args_for_call(1).0, "second-guid");
        fake.verify();
    }

    #[tokio::test]
    async fn test_unshare_forwards_outcome() {
        let (actor, fake) = setup();
        fake.stub_unshare().return_ok(["unshare-warning"]);
        fake.stub_unshare().return_err(
            CcError::UnprocessableEntity("nope".to_string()),
            ["unshare-warning"],
        );

        let (ok, ok_warnings) = actor
            .unshare_resource_from_target(SERVICE_INSTANCE_GUID, SPACE_GUID)
            .await;
        let (err, err_warnings) = actor
            .unshare_resource_from_target(SERVICE_INSTANCE_GUID, SPACE_GUID)
            .await;

        assert!(ok.is_ok());
        assert_eq!(err, Err(CcError::UnprocessableEntity("nope".to_string())));
        assert_eq!(ok_warnings, Warnings::from(["unshare-warning"]));
        assert_eq!(err_warnings, ok_warnings);

        assert_eq!(fake.unshare_call_count(), 2);
        assert_eq!(
            fake.unshare_args_for_call(0),
            (SERVICE_INSTANCE_GUID.to_string(), SPACE_GUID.to_string())
        );
        fake.verify();
    }

    #[tokio::test]
    async fn test_get_shared_targets_forwards_outcome() {
        let (actor, fake) = setup();
        fake.stub_get_shared_targets()
            .return_ok(RelationshipList::new(["space-1", "space-2"]), ["get-warning"]);

        let (result, warnings) = actor.get_shared_targets(SERVICE_INSTANCE_GUID).await;

        assert_eq!(result, Ok(RelationshipList::new(["space-1", "space-2"])));
        assert_eq!(warnings, Warnings::from(["get-warning"]));
        assert_eq!(fake.get_shared_targets_call_count(), 1);
        assert_eq!(fake.get_shared_targets_args_for_call(0), SERVICE_INSTANCE_GUID);
    }
}
