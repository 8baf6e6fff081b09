//! Entity resource lifecycle tests against a mock server.

use bmlt_client::{ApiAuth, ApiClient, Credentials};
use bmlt_provider::resource::{
    ManagedResource, ServiceBodyModel, ServiceBodyResource, UserModel, UserResource,
};
use bmlt_provider::ProviderError;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> ApiClient {
    let http_client = reqwest::Client::new();
    let auth = ApiAuth::new(
        Credentials::Bearer {
            token: "t".to_string(),
        },
        http_client.clone(),
    );
    ApiClient::with_http_client(base_url.to_string(), auth, http_client)
}

fn service_body_json(id: i32, name: &str, email: &str) -> serde_json::Value {
    json!({
        "id": id,
        "parentId": null,
        "name": name,
        "description": "a region",
        "type": "RS",
        "adminUserId": 1,
        "assignedUserIds": [1, 2],
        "url": "https://example.org",
        "helpline": "",
        "email": email,
        "worldId": ""
    })
}

#[tokio::test]
async fn create_stores_the_assigned_id_and_normalizes_empty_strings() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/servicebodies"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(service_body_json(7, "Region", "")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resource = ServiceBodyResource::new(test_client(&server.uri()));
    let model = ServiceBodyModel {
        name: "Region".to_string(),
        description: "a region".to_string(),
        body_type: "RS".to_string(),
        admin_user_id: 1,
        assigned_user_ids: vec![1, 2],
        url: Some("https://example.org".to_string()),
        ..ServiceBodyModel::default()
    };
    let state = resource.create(&model).await.unwrap();
    assert_eq!(state.id.as_deref(), Some("7"));
    assert_eq!(state.assigned_user_ids, vec![1, 2]);
    // Server-side "" comes back as absent.
    assert_eq!(state.helpline, None);
    assert_eq!(state.email, None);
    assert_eq!(state.world_id, None);
    assert_eq!(state.url.as_deref(), Some("https://example.org"));
}

#[tokio::test]
async fn update_is_followed_by_a_re_read() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/servicebodies/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/servicebodies/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(service_body_json(7, "Renamed", "region@example.org")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resource = ServiceBodyResource::new(test_client(&server.uri()));
    let model = ServiceBodyModel {
        id: Some("7".to_string()),
        name: "Renamed".to_string(),
        description: "a region".to_string(),
        body_type: "RS".to_string(),
        admin_user_id: 1,
        ..ServiceBodyModel::default()
    };
    let state = resource.update(&model).await.unwrap();
    assert_eq!(state.name, "Renamed");
    assert_eq!(state.email.as_deref(), Some("region@example.org"));
}

#[tokio::test]
async fn reading_a_vanished_entity_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/servicebodies/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let resource = ServiceBodyResource::new(test_client(&server.uri()));
    let model = ServiceBodyModel {
        id: Some("9".to_string()),
        ..ServiceBodyModel::default()
    };
    assert!(resource.read(&model).await.unwrap().is_none());
}

#[tokio::test]
async fn reading_without_an_id_is_a_parse_error() {
    let server = MockServer::start().await;
    let resource = ServiceBodyResource::new(test_client(&server.uri()));
    let err = resource
        .read(&ServiceBodyModel::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::InvalidId { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn force_delete_flag_controls_the_force_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/servicebodies/5"))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/servicebodies/6"))
        .and(query_param_is_missing("force"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let resource = ServiceBodyResource::new(test_client(&server.uri()));
    let forced = ServiceBodyModel {
        id: Some("5".to_string()),
        force_delete: true,
        ..ServiceBodyModel::default()
    };
    resource.delete(&forced).await.unwrap();
    let plain = ServiceBodyModel {
        id: Some("6".to_string()),
        ..ServiceBodyModel::default()
    };
    resource.delete(&plain).await.unwrap();
}

#[tokio::test]
async fn import_seeds_an_id_and_read_fills_the_rest() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/servicebodies/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(service_body_json(7, "Region", "region@example.org")),
        )
        .mount(&server)
        .await;

    let resource = ServiceBodyResource::new(test_client(&server.uri()));
    let imported = resource.import("7");
    assert_eq!(imported.id.as_deref(), Some("7"));
    let state = resource.read(&imported).await.unwrap().unwrap();
    assert_eq!(state.name, "Region");
    assert_eq!(state.body_type, "RS");
}

#[tokio::test]
async fn user_password_is_sent_but_never_read_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3,
            "username": "bob",
            "type": "admin",
            "displayName": "Bob",
            "description": "",
            "email": null,
            "ownerId": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resource = UserResource::new(test_client(&server.uri()));
    let model = UserModel {
        username: "bob".to_string(),
        password: Some("secret".to_string()),
        user_type: "admin".to_string(),
        display_name: "Bob".to_string(),
        owner_id: Some(1),
        ..UserModel::default()
    };
    let state = resource.create(&model).await.unwrap();
    assert_eq!(state.id.as_deref(), Some("3"));
    // The configured password survives untouched.
    assert_eq!(state.password.as_deref(), Some("secret"));
    assert_eq!(state.description, None);
    assert_eq!(state.owner_id, Some(1));

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["password"], "secret");
}
