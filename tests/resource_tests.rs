//! Integration tests for the method family wrappers.

use vk_api::api::{GroupFilter, NameCase, GROUP_DEFAULT_FIELDS};
use vk_api::{
    AccessToken, ApplicationId, ApplicationSecret, AuthorizationError, BaseUrl, Client,
    PermissionMask, VkConfig, VkError,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_config(server_uri: &str) -> VkConfig {
    VkConfig::builder()
        .application_id(ApplicationId::new("42").unwrap())
        .secret(ApplicationSecret::new("app-secret").unwrap())
        .api_base_url(BaseUrl::new(format!("{server_uri}/method")).unwrap())
        .build()
        .unwrap()
}

async fn blocking<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

fn authorized_client(config: VkConfig) -> Client {
    Client::with_access_token(config, AccessToken::new("tok").unwrap()).unwrap()
}

async fn mount_permissions(mock_server: &MockServer, bits: u32) {
    Mock::given(method("GET"))
        .and(path("/method/users.get.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": [{"id": 1}]})),
        )
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/method/account.getAppPermissions.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "response": bits })),
        )
        .mount(mock_server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_users_get_sends_sanitized_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/method/users.get.json"))
        .and(query_param("user_ids", "1,2"))
        .and(query_param("fields", "city,sex"))
        .and(query_param("name_case", "gen"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": [{"id": 1}, {"id": 2}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let value = blocking(move || {
        authorized_client(config)
            .users()
            .get(&[1, 2], &["city", "not_a_field", "sex"], NameCase::Genitive)
    })
    .await
    .unwrap();

    assert_eq!(value.as_array().map(Vec::len), Some(2));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_groups_before_authenticate_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/method/groups.get.json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let result = blocking(move || {
        authorized_client(config)
            .groups()
            .get(1, false, None, GROUP_DEFAULT_FIELDS)
    })
    .await;

    assert!(matches!(
        result,
        Err(VkError::Authorization(AuthorizationError::PermissionsNotLoaded))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_groups_without_permission_is_refused() {
    let mock_server = MockServer::start().await;
    mount_permissions(&mock_server, PermissionMask::FRIENDS.bits()).await;

    Mock::given(method("GET"))
        .and(path("/method/groups.leave.json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let result = blocking(move || {
        let mut client = authorized_client(config);
        client.authenticate().unwrap();
        client.groups().leave(5)
    })
    .await;

    match result {
        Err(VkError::Authorization(AuthorizationError::InsufficientPermissions {
            required,
            granted,
        })) => {
            assert_eq!(required, PermissionMask::GROUPS);
            assert_eq!(granted, PermissionMask::FRIENDS);
        }
        other => panic!("expected InsufficientPermissions, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_groups_with_permission_dispatches() {
    let mock_server = MockServer::start().await;
    mount_permissions(&mock_server, PermissionMask::GROUPS.bits()).await;

    Mock::given(method("GET"))
        .and(path("/method/groups.get.json"))
        .and(query_param("user_id", "1"))
        .and(query_param("filter", "admin"))
        .and(query_param("extended", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": {"count": 1, "items": [{"id": 1, "name": "Club"}]}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let value = blocking(move || {
        let mut client = authorized_client(config);
        client.authenticate().unwrap();
        client
            .groups()
            .get(1, true, Some(GroupFilter::Admin), GROUP_DEFAULT_FIELDS)
    })
    .await
    .unwrap();

    assert_eq!(value["count"], 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_storage_and_account_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/method/storage.set.json"))
        .and(query_param("key", "score"))
        .and(query_param("value", "100"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": 1})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/method/account.getCounters.json"))
        .and(query_param("filter", "friends,messages,groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": {"friends": 3}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let (stored, counters) = blocking(move || {
        let client = authorized_client(config);
        let stored = client.storage().set("score", "100", None, false).unwrap();
        let counters = client
            .account()
            .get_counters(vk_api::api::DEFAULT_COUNTER_FILTERS)
            .unwrap();
        (stored, counters)
    })
    .await;

    assert_eq!(stored, serde_json::json!(1));
    assert_eq!(counters["friends"], 3);
}
