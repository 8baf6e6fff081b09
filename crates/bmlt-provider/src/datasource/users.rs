//! Users list data source.

use bmlt_client::models::User;
use bmlt_client::ApiClient;

use super::LIST_PLACEHOLDER_ID;
use crate::error::ProviderResult;
use crate::value::optional_string_opt;

/// One flattened user as exposed to the orchestrator. Passwords are
/// never returned by the server and so never appear here.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub user_type: String,
    pub display_name: String,
    pub description: Option<String>,
    pub email: Option<String>,
    pub owner_id: Option<i64>,
    pub last_login_at: Option<String>,
}

pub(crate) fn map_user(user: &User) -> UserRecord {
    UserRecord {
        id: i64::from(user.id),
        username: user.username.clone(),
        user_type: user.user_type.clone(),
        display_name: user.display_name.clone(),
        description: optional_string_opt(user.description.clone()),
        email: optional_string_opt(user.email.clone()),
        owner_id: user.owner_id.map(i64::from),
        last_login_at: optional_string_opt(user.last_login_at.clone()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsersList {
    /// Synthetic instance id; the list is unfiltered.
    pub id: String,
    pub users: Vec<UserRecord>,
}

pub struct UsersDataSource {
    client: ApiClient,
}

impl UsersDataSource {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn read(&self) -> ProviderResult<UsersList> {
        let users = self.client.get_users().await?;
        Ok(UsersList {
            id: LIST_PLACEHOLDER_ID.to_string(),
            users: users.iter().map(map_user).collect(),
        })
    }
}
