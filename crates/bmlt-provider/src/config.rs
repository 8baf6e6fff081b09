//! Provider configuration and the client factory.
//!
//! Runs once at startup: resolves connection settings from configuration
//! or the environment, validates the authentication mode, parses the
//! host URL, authenticates, and yields the shared [`ApiClient`] handed
//! to every resource and data source.

use bmlt_client::{ApiAuth, ApiClient, Credentials};
use tracing::debug;

use crate::error::ConfigError;
use crate::value::ConfigValue;

pub const ENV_HOST: &str = "BMLT_HOST";
pub const ENV_USERNAME: &str = "BMLT_USERNAME";
pub const ENV_PASSWORD: &str = "BMLT_PASSWORD";
pub const ENV_ACCESS_TOKEN: &str = "BMLT_ACCESS_TOKEN";

/// Provider-level configuration. Every setting may also come from the
/// environment variable of the corresponding name when left null.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    /// Server host URL, e.g. `https://example.com/main_server`.
    pub host: ConfigValue<String>,
    pub username: ConfigValue<String>,
    pub password: ConfigValue<String>,
    /// Pre-supplied bearer token, mutually exclusive with
    /// username/password.
    pub access_token: ConfigValue<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

/// A host URL decomposed into scheme, network host and base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostParts {
    pub scheme: Scheme,
    pub host: String,
    /// Normalized to a leading slash and no trailing slash; empty when
    /// the server lives at the root.
    pub base_path: String,
}

impl HostParts {
    /// Reassemble the full base URL.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}://{}{}", self.scheme.as_str(), self.host, self.base_path)
    }

    /// The server's own token endpoint for the password grant.
    #[must_use]
    pub fn token_url(&self) -> String {
        format!("{}/api/v1/auth/token", self.base_url())
    }
}

/// Split a host URL into scheme, host and base path. A missing scheme
/// prefix defaults to https.
#[must_use]
pub fn parse_host(host: &str) -> HostParts {
    let (scheme, remaining) = if let Some(rest) = host.strip_prefix("http://") {
        (Scheme::Http, rest)
    } else if let Some(rest) = host.strip_prefix("https://") {
        (Scheme::Https, rest)
    } else {
        (Scheme::Https, host)
    };

    let (host_only, base_path) = match remaining.find('/') {
        Some(idx) => (&remaining[..idx], &remaining[idx..]),
        None => (remaining, ""),
    };

    let mut base_path = base_path.to_string();
    if !base_path.is_empty() {
        if !base_path.starts_with('/') {
            base_path.insert(0, '/');
        }
        while base_path.ends_with('/') {
            base_path.pop();
        }
    }

    HostParts {
        scheme,
        host: host_only.to_string(),
        base_path,
    }
}

impl ProviderConfig {
    /// Validate configuration, authenticate, and build the shared
    /// client. Called once; the returned client is cloned into every
    /// resource and data source.
    pub async fn configure(&self) -> Result<ApiClient, ConfigError> {
        let mut unknown = Vec::new();
        if self.host.is_unknown() {
            unknown.push("host");
        }
        if self.username.is_unknown() {
            unknown.push("username");
        }
        if self.password.is_unknown() {
            unknown.push("password");
        }
        if self.access_token.is_unknown() {
            unknown.push("access_token");
        }
        if !unknown.is_empty() {
            return Err(ConfigError::UnknownValues { fields: unknown });
        }

        let host = resolve(&self.host, ENV_HOST);
        let username = resolve(&self.username, ENV_USERNAME);
        let password = resolve(&self.password, ENV_PASSWORD);
        let access_token = resolve(&self.access_token, ENV_ACCESS_TOKEN);

        if host.is_empty() {
            return Err(ConfigError::MissingHost);
        }

        let has_user_password = !username.is_empty() && !password.is_empty();
        let has_access_token = !access_token.is_empty();

        if !has_user_password && !has_access_token {
            return Err(ConfigError::MissingAuth);
        }
        if has_user_password && has_access_token {
            return Err(ConfigError::ConflictingAuth);
        }

        let parts = parse_host(&host);
        debug!(
            "configuring client for {}://{}{}",
            parts.scheme.as_str(),
            parts.host,
            parts.base_path
        );

        let http_client = reqwest::Client::builder()
            .user_agent("bmlt-provider/0.1")
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        let credentials = if has_access_token {
            Credentials::Bearer {
                token: access_token,
            }
        } else {
            Credentials::Password {
                username,
                password,
                token_url: parts.token_url(),
            }
        };

        let auth = ApiAuth::new(credentials, http_client.clone());

        // The password grant is performed eagerly so an authentication
        // failure surfaces as a configuration error, not on the first
        // entity operation.
        if !has_access_token {
            auth.get_bearer_token()
                .await
                .map_err(|e| ConfigError::Authentication(e.to_string()))?;
        }

        Ok(ApiClient::with_http_client(
            parts.base_url(),
            auth,
            http_client,
        ))
    }
}

/// Resolve one setting: the configuration value when set, otherwise the
/// named environment variable, otherwise empty.
fn resolve(value: &ConfigValue<String>, env_key: &str) -> String {
    match value.as_option() {
        Some(v) => v.clone(),
        None => std::env::var(env_key).unwrap_or_default(),
    }
}
