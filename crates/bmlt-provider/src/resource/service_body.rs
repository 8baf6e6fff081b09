//! Service body resource.

use async_trait::async_trait;
use bmlt_client::models::{ServiceBody, ServiceBodyCreate};
use bmlt_client::{ApiClient, ApiError};

use super::{parse_entity_id, ManagedResource};
use crate::error::ProviderResult;
use crate::value::{clamp_to_i32, optional_string_opt};

/// Configuration/state model for a service body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceBodyModel {
    /// Server-assigned identifier, absent until created.
    pub id: Option<String>,
    pub parent_id: Option<i64>,
    pub name: String,
    pub description: String,
    pub body_type: String,
    pub admin_user_id: i64,
    /// Order-significant; fully replaced on every write.
    pub assigned_user_ids: Vec<i64>,
    pub url: Option<String>,
    pub helpline: Option<String>,
    pub email: Option<String>,
    pub world_id: Option<String>,
    /// Configuration-only: permit deletion despite dependent meetings.
    /// Never persisted remotely.
    pub force_delete: bool,
}

pub struct ServiceBodyResource {
    client: ApiClient,
}

impl ServiceBodyResource {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn build_request(model: &ServiceBodyModel) -> ServiceBodyCreate {
    ServiceBodyCreate {
        parent_id: model.parent_id.map(clamp_to_i32),
        name: model.name.clone(),
        description: model.description.clone(),
        body_type: model.body_type.clone(),
        admin_user_id: clamp_to_i32(model.admin_user_id),
        assigned_user_ids: model
            .assigned_user_ids
            .iter()
            .copied()
            .map(clamp_to_i32)
            .collect(),
        url: model.url.clone(),
        helpline: model.helpline.clone(),
        email: model.email.clone(),
        world_id: model.world_id.clone(),
    }
}

/// Copy every server-echoed field back into state. The identifier and
/// the configuration-only force flag are left untouched.
fn apply_remote(model: &mut ServiceBodyModel, remote: &ServiceBody) {
    model.parent_id = remote.parent_id.map(i64::from);
    model.name = remote.name.clone();
    model.description = remote.description.clone();
    model.body_type = remote.body_type.clone();
    model.admin_user_id = i64::from(remote.admin_user_id);
    model.assigned_user_ids = remote
        .assigned_user_ids
        .iter()
        .copied()
        .map(i64::from)
        .collect();
    model.url = optional_string_opt(remote.url.clone());
    model.helpline = optional_string_opt(remote.helpline.clone());
    model.email = optional_string_opt(remote.email.clone());
    model.world_id = optional_string_opt(remote.world_id.clone());
}

#[async_trait]
impl ManagedResource for ServiceBodyResource {
    type Model = ServiceBodyModel;

    async fn create(&self, model: &ServiceBodyModel) -> ProviderResult<ServiceBodyModel> {
        let created = self.client.create_service_body(&build_request(model)).await?;
        let mut state = model.clone();
        state.id = Some(created.id.to_string());
        apply_remote(&mut state, &created);
        Ok(state)
    }

    async fn read(&self, model: &ServiceBodyModel) -> ProviderResult<Option<ServiceBodyModel>> {
        let id = parse_entity_id(model.id.as_deref())?;
        match self.client.get_service_body(id).await {
            Ok(remote) => {
                let mut state = model.clone();
                apply_remote(&mut state, &remote);
                Ok(Some(state))
            }
            Err(ApiError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, model: &ServiceBodyModel) -> ProviderResult<ServiceBodyModel> {
        let id = parse_entity_id(model.id.as_deref())?;
        self.client
            .update_service_body(id, &build_request(model))
            .await?;
        // The update response carries no body; re-read so state matches
        // the server's authoritative post-update values.
        let remote = self.client.get_service_body(id).await?;
        let mut state = model.clone();
        apply_remote(&mut state, &remote);
        Ok(state)
    }

    async fn delete(&self, model: &ServiceBodyModel) -> ProviderResult<()> {
        let id = parse_entity_id(model.id.as_deref())?;
        self.client
            .delete_service_body(id, model.force_delete)
            .await?;
        Ok(())
    }

    fn import(&self, id: &str) -> ServiceBodyModel {
        ServiceBodyModel {
            id: Some(id.to_string()),
            ..ServiceBodyModel::default()
        }
    }
}
