//! Root server HTTP client (reqwest-based).
//!
//! One method per API operation, each enforcing the server's status
//! contract: 200 for reads and lists, 201 for creates, 204 for updates
//! and deletes. A 404 maps to [`ApiError::NotFound`]; anything else
//! outside the contract maps to [`ApiError::UnexpectedStatus`] carrying
//! the literal status code.

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::auth::ApiAuth;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Format, FormatCreate, FormatUpdate, Meeting, MeetingCreate, MeetingUpdate, ServiceBody,
    ServiceBodyCreate, ServiceBodyUpdate, Settings, User, UserCreate, UserUpdate,
};

/// Optional filters for the meetings list endpoint.
///
/// Id lists are comma-delimited strings as the server expects them.
/// Callers should only set a filter when it is non-empty; a `Some` value
/// is forwarded verbatim.
#[derive(Debug, Clone, Default)]
pub struct MeetingsQuery {
    pub meeting_ids: Option<String>,
    pub days: Option<String>,
    pub service_body_ids: Option<String>,
    pub search_string: Option<String>,
}

/// Authenticated client for one root server.
///
/// Cheap to clone; immutable after construction, so clones can be handed
/// to any number of concurrent callers without coordination.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Server base URL including any installation path,
    /// e.g. `https://example.com/main_server`.
    base_url: String,
    auth: ApiAuth,
    http_client: Client,
}

impl ApiClient {
    /// Create a new client. No request timeout is configured; the
    /// transport default governs.
    pub fn new(base_url: String, auth: ApiAuth) -> ApiResult<Self> {
        let http_client = Client::builder()
            .user_agent("bmlt-client/0.1")
            .build()
            .map_err(|e| ApiError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_http_client(base_url, auth, http_client))
    }

    /// Create a client with a pre-built `reqwest::Client` (for testing).
    #[must_use]
    pub fn with_http_client(base_url: String, auth: ApiAuth, http_client: Client) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            auth,
            http_client,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Service body operations ───────────────────────────────────

    pub async fn get_service_bodies(&self) -> ApiResult<Vec<ServiceBody>> {
        let url = format!("{}/api/v1/servicebodies", self.base_url);
        self.get(&url).await
    }

    pub async fn get_service_body(&self, id: i64) -> ApiResult<ServiceBody> {
        let url = format!("{}/api/v1/servicebodies/{}", self.base_url, id);
        self.get(&url).await
    }

    pub async fn create_service_body(&self, body: &ServiceBodyCreate) -> ApiResult<ServiceBody> {
        let url = format!("{}/api/v1/servicebodies", self.base_url);
        self.post(&url, body).await
    }

    pub async fn update_service_body(&self, id: i64, body: &ServiceBodyUpdate) -> ApiResult<()> {
        let url = format!("{}/api/v1/servicebodies/{}", self.base_url, id);
        self.put(&url, body).await
    }

    /// Delete a service body. `force` adds the server's override
    /// parameter, permitting deletion despite dependent meetings.
    pub async fn delete_service_body(&self, id: i64, force: bool) -> ApiResult<()> {
        let url = format!("{}/api/v1/servicebodies/{}", self.base_url, id);
        debug!("DELETE {} (force={})", url, force);
        let mut builder = self.http_client.delete(&url);
        if force {
            builder = builder.query(&[("force", "true")]);
        }
        let builder = self.auth.apply(builder).await?;
        let response = builder.send().await?;
        self.expect_no_content(response).await
    }

    // ── Meeting operations ────────────────────────────────────────

    pub async fn get_meetings(&self, query: &MeetingsQuery) -> ApiResult<Vec<Meeting>> {
        let url = format!("{}/api/v1/meetings", self.base_url);
        debug!("GET {} (query={:?})", url, query);
        let mut builder = self.http_client.get(&url);
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(ids) = query.meeting_ids.as_deref() {
            params.push(("meetingIds", ids));
        }
        if let Some(days) = query.days.as_deref() {
            params.push(("days", days));
        }
        if let Some(ids) = query.service_body_ids.as_deref() {
            params.push(("serviceBodyIds", ids));
        }
        if let Some(search) = query.search_string.as_deref() {
            params.push(("searchString", search));
        }
        if !params.is_empty() {
            builder = builder.query(&params);
        }
        let builder = self.auth.apply(builder).await?;
        let response = builder.send().await?;
        self.expect_json(response, StatusCode::OK).await
    }

    pub async fn get_meeting(&self, id: i64) -> ApiResult<Meeting> {
        let url = format!("{}/api/v1/meetings/{}", self.base_url, id);
        self.get(&url).await
    }

    pub async fn create_meeting(&self, body: &MeetingCreate) -> ApiResult<Meeting> {
        let url = format!("{}/api/v1/meetings", self.base_url);
        self.post(&url, body).await
    }

    pub async fn update_meeting(&self, id: i64, body: &MeetingUpdate) -> ApiResult<()> {
        let url = format!("{}/api/v1/meetings/{}", self.base_url, id);
        self.put(&url, body).await
    }

    pub async fn delete_meeting(&self, id: i64) -> ApiResult<()> {
        let url = format!("{}/api/v1/meetings/{}", self.base_url, id);
        self.delete(&url).await
    }

    // ── Format operations ─────────────────────────────────────────

    pub async fn get_formats(&self) -> ApiResult<Vec<Format>> {
        let url = format!("{}/api/v1/formats", self.base_url);
        self.get(&url).await
    }

    pub async fn get_format(&self, id: i64) -> ApiResult<Format> {
        let url = format!("{}/api/v1/formats/{}", self.base_url, id);
        self.get(&url).await
    }

    pub async fn create_format(&self, body: &FormatCreate) -> ApiResult<Format> {
        let url = format!("{}/api/v1/formats", self.base_url);
        self.post(&url, body).await
    }

    pub async fn update_format(&self, id: i64, body: &FormatUpdate) -> ApiResult<()> {
        let url = format!("{}/api/v1/formats/{}", self.base_url, id);
        self.put(&url, body).await
    }

    pub async fn delete_format(&self, id: i64) -> ApiResult<()> {
        let url = format!("{}/api/v1/formats/{}", self.base_url, id);
        self.delete(&url).await
    }

    // ── User operations ───────────────────────────────────────────

    pub async fn get_users(&self) -> ApiResult<Vec<User>> {
        let url = format!("{}/api/v1/users", self.base_url);
        self.get(&url).await
    }

    pub async fn get_user(&self, id: i64) -> ApiResult<User> {
        let url = format!("{}/api/v1/users/{}", self.base_url, id);
        self.get(&url).await
    }

    pub async fn create_user(&self, body: &UserCreate) -> ApiResult<User> {
        let url = format!("{}/api/v1/users", self.base_url);
        self.post(&url, body).await
    }

    pub async fn update_user(&self, id: i64, body: &UserUpdate) -> ApiResult<()> {
        let url = format!("{}/api/v1/users/{}", self.base_url, id);
        self.put(&url, body).await
    }

    pub async fn delete_user(&self, id: i64) -> ApiResult<()> {
        let url = format!("{}/api/v1/users/{}", self.base_url, id);
        self.delete(&url).await
    }

    // ── Settings ──────────────────────────────────────────────────

    pub async fn get_settings(&self) -> ApiResult<Settings> {
        let url = format!("{}/api/v1/settings", self.base_url);
        self.get(&url).await
    }

    // ── Internal HTTP methods ─────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        debug!("GET {}", url);
        let builder = self.http_client.get(url);
        let builder = self.auth.apply(builder).await?;
        let response = builder.send().await?;
        self.expect_json(response, StatusCode::OK).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, url: &str, body: &B) -> ApiResult<T> {
        debug!("POST {}", url);
        let builder = self.http_client.post(url);
        let builder = self.auth.apply(builder).await?;
        let response = builder.json(body).send().await?;
        self.expect_json(response, StatusCode::CREATED).await
    }

    async fn put<B: Serialize>(&self, url: &str, body: &B) -> ApiResult<()> {
        debug!("PUT {}", url);
        let builder = self.http_client.put(url);
        let builder = self.auth.apply(builder).await?;
        let response = builder.json(body).send().await?;
        self.expect_no_content(response).await
    }

    async fn delete(&self, url: &str) -> ApiResult<()> {
        debug!("DELETE {}", url);
        let builder = self.http_client.delete(url);
        let builder = self.auth.apply(builder).await?;
        let response = builder.send().await?;
        self.expect_no_content(response).await
    }

    // ── Response handling ─────────────────────────────────────────

    async fn expect_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        expected: StatusCode,
    ) -> ApiResult<T> {
        let status = response.status();
        if status == expected {
            let body = response.text().await?;
            serde_json::from_str(&body)
                .map_err(|e| ApiError::Parse(format!("failed to parse response: {e}")))
        } else {
            self.error_for(response).await
        }
    }

    async fn expect_no_content(&self, response: reqwest::Response) -> ApiResult<()> {
        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            Ok(())
        } else {
            self.error_for(response).await
        }
    }

    async fn error_for<T>(&self, response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            StatusCode::UNAUTHORIZED => {
                // Drop the cached token so the next call re-authenticates.
                self.auth.invalidate_cache().await;
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<no body>".to_string());
                Err(ApiError::Auth(format!(
                    "authentication failed (401): {body}"
                )))
            }
            _ => Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
            }),
        }
    }
}
