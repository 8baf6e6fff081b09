//! Root server authentication — static bearer token or password grant.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::RequestBuilder;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{ApiError, ApiResult};

/// Credentials for the root server.
///
/// The [`Debug`] impl redacts tokens and passwords to prevent accidental
/// credential exposure in log output.
#[derive(Clone)]
pub enum Credentials {
    /// Pre-supplied bearer token, used as-is on every request.
    Bearer { token: String },

    /// Resource-owner password grant against the server's own token
    /// endpoint (`{base}/api/v1/auth/token`).
    Password {
        username: String,
        password: String,
        token_url: String,
    },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"[REDACTED]")
                .finish(),
            Self::Password {
                username,
                token_url,
                ..
            } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .field("token_url", token_url)
                .finish(),
        }
    }
}

/// Token response from the server's token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Cached access token with expiry.
#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Option<Instant>,
}

impl CachedToken {
    fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(exp) => Instant::now() >= exp,
            None => false,
        }
    }
}

/// Authentication handler shared by every request.
///
/// Bearer credentials are static; password credentials fetch an access
/// token on first use and re-fetch transparently when the cached token
/// expires, giving the behavior of a refreshing token source.
#[derive(Debug, Clone)]
pub struct ApiAuth {
    credentials: Credentials,
    /// Cached access token (shared across clones).
    cached_token: Arc<RwLock<Option<CachedToken>>>,
    /// HTTP client used for token requests.
    http_client: reqwest::Client,
}

impl ApiAuth {
    #[must_use]
    pub fn new(credentials: Credentials, http_client: reqwest::Client) -> Self {
        Self {
            credentials,
            cached_token: Arc::new(RwLock::new(None)),
            http_client,
        }
    }

    /// Get the bearer token to send with requests.
    ///
    /// For bearer credentials, returns the static token. For the password
    /// grant, returns the cached access token or fetches a fresh one.
    pub async fn get_bearer_token(&self) -> ApiResult<String> {
        match &self.credentials {
            Credentials::Bearer { token } => Ok(token.clone()),
            Credentials::Password {
                username,
                password,
                token_url,
            } => {
                {
                    let cache = self.cached_token.read().await;
                    if let Some(cached) = cache.as_ref() {
                        if !cached.is_expired() {
                            return Ok(cached.access_token.clone());
                        }
                    }
                }

                debug!("fetching access token from {}", token_url);
                let form = [
                    ("grant_type", "password"),
                    ("username", username.as_str()),
                    ("password", password.as_str()),
                ];

                let response = self
                    .http_client
                    .post(token_url)
                    .form(&form)
                    .send()
                    .await
                    .map_err(|e| ApiError::Auth(format!("token request failed: {e}")))?;

                if !response.status().is_success() {
                    let status = response.status();
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "<no body>".to_string());
                    return Err(ApiError::Auth(format!(
                        "token endpoint returned {status}: {body}"
                    )));
                }

                let token_response: TokenResponse = response
                    .json()
                    .await
                    .map_err(|e| ApiError::Auth(format!("failed to parse token response: {e}")))?;

                let expires_at = token_response.expires_in.map(|secs| {
                    // Expire 30 seconds early to avoid sending stale tokens.
                    Instant::now() + Duration::from_secs(secs.saturating_sub(30))
                });

                let access_token = token_response.access_token.clone();

                {
                    let mut cache = self.cached_token.write().await;
                    *cache = Some(CachedToken {
                        access_token: token_response.access_token,
                        expires_at,
                    });
                }

                Ok(access_token)
            }
        }
    }

    /// Apply authentication to a request builder.
    pub async fn apply(&self, builder: RequestBuilder) -> ApiResult<RequestBuilder> {
        let token = self.get_bearer_token().await?;
        Ok(builder.bearer_auth(token))
    }

    /// Invalidate the cached token (e.g. on a 401 response).
    pub async fn invalidate_cache(&self) {
        let mut cache = self.cached_token.write().await;
        *cache = None;
    }
}
