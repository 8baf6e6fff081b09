//! Entity resources: create/read/update/delete translators keyed by a
//! server-assigned identifier.
//!
//! Every resource follows the same discipline: requests are built from
//! the configuration model with optionals passed through as-is, the
//! status contract is enforced by the client, and every server-echoed
//! field is copied back into state so the orchestrator sees the
//! authoritative values. Updates return no body, so an update is always
//! followed by an immediate re-read.

pub mod format;
pub mod meeting;
pub mod service_body;
pub mod user;

use async_trait::async_trait;

use crate::error::{ProviderError, ProviderResult};

pub use format::{FormatModel, FormatResource};
pub use meeting::{MeetingModel, MeetingResource};
pub use service_body::{ServiceBodyModel, ServiceBodyResource};
pub use user::{UserModel, UserResource};

/// The lifecycle contract shared by every entity resource.
#[async_trait]
pub trait ManagedResource {
    /// Configuration-and-state model: user-settable fields plus the
    /// server-assigned identifier, absent until first create.
    type Model: Send + Sync;

    /// Create the entity upstream and return state with the assigned
    /// identifier and every server-echoed field.
    async fn create(&self, model: &Self::Model) -> ProviderResult<Self::Model>;

    /// Refresh state from the server. `Ok(None)` means the entity no
    /// longer exists upstream and the record should be discarded.
    async fn read(&self, model: &Self::Model) -> ProviderResult<Option<Self::Model>>;

    /// Overwrite the entity upstream, then re-read it so the returned
    /// state matches the server's post-update values.
    async fn update(&self, model: &Self::Model) -> ProviderResult<Self::Model>;

    /// Delete the entity upstream.
    async fn delete(&self, model: &Self::Model) -> ProviderResult<()>;

    /// Seed state with only an identifier; a subsequent read populates
    /// the rest.
    fn import(&self, id: &str) -> Self::Model;
}

/// Parse the stored identifier. An absent or non-numeric identifier is
/// a distinct parse error, never silently defaulted.
pub(crate) fn parse_entity_id(id: Option<&str>) -> ProviderResult<i64> {
    let raw = id.unwrap_or("");
    raw.parse::<i64>().map_err(|_| ProviderError::InvalidId {
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(parse_entity_id(Some("42")).unwrap(), 42);
    }

    #[test]
    fn rejects_missing_and_non_numeric_ids() {
        assert!(matches!(
            parse_entity_id(None),
            Err(ProviderError::InvalidId { value }) if value.is_empty()
        ));
        assert!(matches!(
            parse_entity_id(Some("abc")),
            Err(ProviderError::InvalidId { value }) if value == "abc"
        ));
    }
}
