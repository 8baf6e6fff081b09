//! Single user lookup data source.

use bmlt_client::{ApiClient, ApiError};

use super::require_exactly_one;
use super::users::{map_user, UserRecord};
use crate::error::{ProviderError, ProviderResult};

/// Selector for the lookup: exactly one field must be set.
#[derive(Debug, Clone, Default)]
pub struct UserLookup {
    pub user_id: Option<i64>,
    pub username: Option<String>,
}

pub struct UserDataSource {
    client: ApiClient,
}

impl UserDataSource {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn read(&self, lookup: &UserLookup) -> ProviderResult<UserRecord> {
        require_exactly_one(
            "user_id",
            lookup.user_id.is_some(),
            "username",
            lookup.username.is_some(),
        )?;

        if let Some(id) = lookup.user_id {
            return match self.client.get_user(id).await {
                Ok(user) => Ok(map_user(&user)),
                Err(ApiError::NotFound) => Err(ProviderError::LookupNotFound {
                    entity: "user",
                    key: format!("id {id}"),
                }),
                Err(e) => Err(e.into()),
            };
        }

        // Username lookup: the server has no filter for it, so list and
        // scan for the first exact match.
        let username = lookup.username.as_deref().unwrap_or("");
        let users = self.client.get_users().await?;
        users
            .iter()
            .find(|u| u.username == username)
            .map(map_user)
            .ok_or_else(|| ProviderError::LookupNotFound {
                entity: "user",
                key: format!("username '{username}'"),
            })
    }
}
