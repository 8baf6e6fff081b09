//! User resource.

use async_trait::async_trait;
use bmlt_client::models::{User, UserCreate, UserUpdate};
use bmlt_client::{ApiClient, ApiError};

use super::{parse_entity_id, ManagedResource};
use crate::error::ProviderResult;
use crate::value::{clamp_to_i32, optional_string_opt};

/// Configuration/state model for a user.
#[derive(Clone, Default, PartialEq)]
pub struct UserModel {
    /// Server-assigned identifier, absent until created.
    pub id: Option<String>,
    pub username: String,
    /// Write-only: never echoed by the server, never read back.
    pub password: Option<String>,
    pub user_type: String,
    pub display_name: String,
    pub description: Option<String>,
    pub email: Option<String>,
    pub owner_id: Option<i64>,
}

impl std::fmt::Debug for UserModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserModel")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("user_type", &self.user_type)
            .field("display_name", &self.display_name)
            .field("description", &self.description)
            .field("email", &self.email)
            .field("owner_id", &self.owner_id)
            .finish()
    }
}

pub struct UserResource {
    client: ApiClient,
}

impl UserResource {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn build_create(model: &UserModel) -> UserCreate {
    UserCreate {
        username: model.username.clone(),
        password: model.password.clone().unwrap_or_default(),
        user_type: model.user_type.clone(),
        display_name: model.display_name.clone(),
        description: model.description.clone(),
        email: model.email.clone(),
        owner_id: model.owner_id.map(clamp_to_i32),
    }
}

fn build_update(model: &UserModel) -> UserUpdate {
    UserUpdate {
        username: model.username.clone(),
        password: model.password.clone(),
        user_type: model.user_type.clone(),
        display_name: model.display_name.clone(),
        description: model.description.clone(),
        email: model.email.clone(),
        owner_id: model.owner_id.map(clamp_to_i32),
    }
}

/// Copy server-echoed fields back into state. The password is
/// configuration-only and is never touched here.
fn apply_remote(model: &mut UserModel, remote: &User) {
    model.username = remote.username.clone();
    model.user_type = remote.user_type.clone();
    model.display_name = remote.display_name.clone();
    model.description = optional_string_opt(remote.description.clone());
    model.email = optional_string_opt(remote.email.clone());
    model.owner_id = remote.owner_id.map(i64::from);
}

#[async_trait]
impl ManagedResource for UserResource {
    type Model = UserModel;

    async fn create(&self, model: &UserModel) -> ProviderResult<UserModel> {
        let created = self.client.create_user(&build_create(model)).await?;
        let mut state = model.clone();
        state.id = Some(created.id.to_string());
        apply_remote(&mut state, &created);
        Ok(state)
    }

    async fn read(&self, model: &UserModel) -> ProviderResult<Option<UserModel>> {
        let id = parse_entity_id(model.id.as_deref())?;
        match self.client.get_user(id).await {
            Ok(remote) => {
                let mut state = model.clone();
                apply_remote(&mut state, &remote);
                Ok(Some(state))
            }
            Err(ApiError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, model: &UserModel) -> ProviderResult<UserModel> {
        let id = parse_entity_id(model.id.as_deref())?;
        self.client.update_user(id, &build_update(model)).await?;
        let remote = self.client.get_user(id).await?;
        let mut state = model.clone();
        apply_remote(&mut state, &remote);
        Ok(state)
    }

    async fn delete(&self, model: &UserModel) -> ProviderResult<()> {
        let id = parse_entity_id(model.id.as_deref())?;
        self.client.delete_user(id).await?;
        Ok(())
    }

    fn import(&self, id: &str) -> UserModel {
        UserModel {
            id: Some(id.to_string()),
            ..UserModel::default()
        }
    }
}
