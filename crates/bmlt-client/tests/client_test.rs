//! Integration tests against a mock root server.

use bmlt_client::models::{ServiceBodyCreate, UserCreate};
use bmlt_client::{ApiAuth, ApiClient, ApiError, Credentials, MeetingsQuery};
use serde_json::json;
use wiremock::matchers::{
    body_string_contains, header, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn bearer_client(base_url: &str, token: &str) -> ApiClient {
    let http_client = reqwest::Client::new();
    let auth = ApiAuth::new(
        Credentials::Bearer {
            token: token.to_string(),
        },
        http_client.clone(),
    );
    ApiClient::with_http_client(base_url.to_string(), auth, http_client)
}

fn password_client(base_url: &str, username: &str, password: &str) -> ApiClient {
    let http_client = reqwest::Client::new();
    let auth = ApiAuth::new(
        Credentials::Password {
            username: username.to_string(),
            password: password.to_string(),
            token_url: format!("{base_url}/api/v1/auth/token"),
        },
        http_client.clone(),
    );
    ApiClient::with_http_client(base_url.to_string(), auth, http_client)
}

fn service_body_json(id: i32, name: &str) -> serde_json::Value {
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
        "email": "region@example.org",
        "worldId": ""
    })
}

#[tokio::test]
async fn sends_static_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/servicebodies"))
        .and(header("authorization", "Bearer static-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([service_body_json(1, "Region")])))
        .expect(1)
        .mount(&server)
        .await;

    let client = bearer_client(&server.uri(), "static-token");
    let bodies = client.get_service_bodies().await.unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].name, "Region");
    assert_eq!(bodies[0].parent_id, None);
}

#[tokio::test]
async fn password_grant_fetches_token_once_and_caches_it() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token"))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("username=admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "granted-token",
            "token_type": "bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/servicebodies"))
        .and(header("authorization", "Bearer granted-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let client = password_client(&server.uri(), "admin", "hunter2");
    client.get_service_bodies().await.unwrap();
    client.get_service_bodies().await.unwrap();
}

#[tokio::test]
async fn token_endpoint_failure_is_an_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&server)
        .await;

    let client = password_client(&server.uri(), "admin", "wrong");
    let err = client.get_service_bodies().await.unwrap_err();
    assert!(matches!(err, ApiError::Auth(_)));
}

#[tokio::test]
async fn unauthorized_response_invalidates_the_cached_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "token",
            "expires_in": 3600
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/settings"))
        .respond_with(ResponseTemplate::new(401).set_body_string("expired"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = password_client(&server.uri(), "admin", "hunter2");
    let err = client.get_settings().await.unwrap_err();
    assert!(matches!(err, ApiError::Auth(_)));
    // The cache was dropped, so the retry fetches a fresh token.
    client.get_settings().await.unwrap();
}

#[tokio::test]
async fn create_requires_exactly_201() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/servicebodies"))
        .respond_with(ResponseTemplate::new(201).set_body_json(service_body_json(7, "Area")))
        .mount(&server)
        .await;

    let client = bearer_client(&server.uri(), "t");
    let body = ServiceBodyCreate {
        parent_id: None,
        name: "Area".to_string(),
        description: "an area".to_string(),
        body_type: "AS".to_string(),
        admin_user_id: 1,
        assigned_user_ids: vec![1],
        url: None,
        helpline: None,
        email: None,
        world_id: None,
    };
    let created = client.create_service_body(&body).await.unwrap();
    assert_eq!(created.id, 7);
}

#[tokio::test]
async fn create_with_wrong_status_reports_the_literal_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = bearer_client(&server.uri(), "t");
    let body = UserCreate {
        username: "bob".to_string(),
        password: "secret".to_string(),
        user_type: "admin".to_string(),
        display_name: "Bob".to_string(),
        description: None,
        email: None,
        owner_id: None,
    };
    let err = client.create_user(&body).await.unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedStatus { status: 200 }));
    assert_eq!(err.to_string(), "API returned status 200");
}

#[tokio::test]
async fn create_omits_unset_optionals() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/servicebodies"))
        .respond_with(ResponseTemplate::new(201).set_body_json(service_body_json(3, "Area")))
        .mount(&server)
        .await;

    let client = bearer_client(&server.uri(), "t");
    let body = ServiceBodyCreate {
        parent_id: None,
        name: "Area".to_string(),
        description: "d".to_string(),
        body_type: "AS".to_string(),
        admin_user_id: 1,
        assigned_user_ids: vec![],
        url: None,
        helpline: None,
        email: None,
        world_id: None,
    };
    client.create_service_body(&body).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(sent.get("parentId").is_none());
    assert!(sent.get("url").is_none());
    assert_eq!(sent["name"], "Area");
}

#[tokio::test]
async fn update_and_delete_require_204() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/formats/9"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/formats/9"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = bearer_client(&server.uri(), "t");
    let body = bmlt_client::models::FormatCreate {
        world_id: None,
        format_type: None,
        translations: vec![],
    };
    client.update_format(9, &body).await.unwrap();
    let err = client.delete_format(9).await.unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedStatus { status: 200 }));
}

#[tokio::test]
async fn missing_entity_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/meetings/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = bearer_client(&server.uri(), "t");
    let err = client.get_meeting(404).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[tokio::test]
async fn force_delete_sends_the_force_parameter() {
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

    let client = bearer_client(&server.uri(), "t");
    client.delete_service_body(5, true).await.unwrap();
    client.delete_service_body(6, false).await.unwrap();
}

#[tokio::test]
async fn meetings_query_parameters_are_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/meetings"))
        .and(query_param("days", "0,6"))
        .and(query_param("serviceBodyIds", "5"))
        .and(query_param_is_missing("meetingIds"))
        .and(query_param_is_missing("searchString"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = bearer_client(&server.uri(), "t");
    let query = MeetingsQuery {
        meeting_ids: None,
        days: Some("0,6".to_string()),
        service_body_ids: Some("5".to_string()),
        search_string: None,
    };
    let meetings = client.get_meetings(&query).await.unwrap();
    assert!(meetings.is_empty());
}
