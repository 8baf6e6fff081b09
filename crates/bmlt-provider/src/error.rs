//! Provider error types.

use thiserror::Error;

/// Error raised while building the shared client from provider
/// configuration. Fatal to the whole configure step; nothing has been
/// sent to the server yet except, for the password grant, the token
/// request itself.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more configuration values are still unknown (unresolved
    /// cross-resource references). One entry per offending field.
    #[error("unknown configuration value(s) for: {}", fields.join(", "))]
    UnknownValues { fields: Vec<&'static str> },

    /// No host in configuration and no `BMLT_HOST` in the environment.
    #[error("missing host: set the host in configuration or the BMLT_HOST environment variable")]
    MissingHost,

    /// Neither username/password nor an access token was supplied.
    #[error(
        "missing authentication: provide either username and password \
         (BMLT_USERNAME/BMLT_PASSWORD) or an access token (BMLT_ACCESS_TOKEN)"
    )]
    MissingAuth,

    /// Both username/password and an access token were supplied.
    #[error(
        "conflicting authentication: username/password and access_token \
         are mutually exclusive"
    )]
    ConflictingAuth,

    /// The password grant against the token endpoint failed.
    #[error("unable to authenticate against the server: {0}")]
    Authentication(String),

    /// The underlying HTTP client could not be constructed.
    #[error("unable to create API client: {0}")]
    Client(String),
}

/// Error raised by a single resource or data source operation.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The stored identifier is absent or not a valid integer.
    #[error("unable to parse identifier {value:?}")]
    InvalidId { value: String },

    /// The remote call failed or returned an unexpected status; the
    /// message carries the literal status code where applicable.
    #[error(transparent)]
    Api(#[from] bmlt_client::ApiError),

    /// A singleton lookup was given neither of its selector fields.
    #[error("either '{first}' or '{second}' must be provided")]
    MissingLookupArgument {
        first: &'static str,
        second: &'static str,
    },

    /// A singleton lookup was given both selector fields.
    #[error("cannot specify both '{first}' and '{second}'; provide only one")]
    ConflictingLookupArguments {
        first: &'static str,
        second: &'static str,
    },

    /// A singleton lookup found nothing; names the requested key,
    /// e.g. `user with username 'bob' not found`.
    #[error("{entity} with {key} not found")]
    LookupNotFound { entity: &'static str, key: String },
}

pub type ProviderResult<T> = Result<T, ProviderError>;
