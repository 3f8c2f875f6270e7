use space_share::ccv3::fake::FakeCloudControllerClient;
use space_share::ccv3::CcError;
use space_share::resources::RelationshipList;
use space_share::v3action::{Actor, Warnings};

/// Actor + Fake: the façade against a stubbed client.
/// Each test builds its own fake and actor.
#[tokio::test]
async fn test_share_service_instance_to_spaces_success() {
    let fake = FakeCloudControllerClient::new();
    let actor = Actor::new(fake.clone());

    let returned = RelationshipList::new(["some-space-guid"]);
    fake.stub_share()
        .return_ok(returned.clone(), ["share-service-instance-warning"]);

    let (result, warnings) = actor
        .share_resource_to_targets("some-service-instance-guid", &["some-space-guid".to_string()])
        .await;

    assert_eq!(result.expect("share should succeed"), returned);
    assert_eq!(warnings, Warnings::from(["share-service-instance-warning"]));

    assert_eq!(fake.share_call_count(), 1);
    let (instance_arg, spaces_arg) = fake.share_args_for_call(0);
    assert_eq!(instance_arg, "some-service-instance-guid");
    assert_eq!(spaces_arg, vec!["some-space-guid".to_string()]);
    fake.verify();
}

#[tokio::test]
async fn test_share_service_instance_to_spaces_failure() {
    let fake = FakeCloudControllerClient::new();
    let actor = Actor::new(fake.clone());

    let expected = CcError::from("share service instance error");
    fake.stub_share().return_err(
        expected.clone(),
        ["share-service-instance-warning"],
    );

    let (result, warnings) = actor
        .share_resource_to_targets("some-service-instance-guid", &["some-space-guid".to_string()])
        .await;

    match result {
        Err(e) => {
            assert_eq!(e, expected);
            assert_eq!(e.to_string(), "share service instance error");
        }
        Ok(list) => panic!("Expected an error, got {:?}", list),
    }
    assert_eq!(warnings, Warnings::from(["share-service-instance-warning"]));
    assert_eq!(fake.share_call_count(), 1);
    fake.verify();
}
