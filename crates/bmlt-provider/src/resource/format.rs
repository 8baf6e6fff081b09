//! Format resource.

use async_trait::async_trait;
use bmlt_client::models::{Format, FormatCreate, FormatTranslation};
use bmlt_client::{ApiClient, ApiError};

use super::{parse_entity_id, ManagedResource};
use crate::error::ProviderResult;
use crate::value::optional_string_opt;

/// Configuration/state model for a format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatModel {
    /// Server-assigned identifier, absent until created.
    pub id: Option<String>,
    pub world_id: Option<String>,
    pub format_type: Option<String>,
    /// Translations carry no identity of their own; the full list is
    /// replaced on every write.
    pub translations: Vec<FormatTranslation>,
}

pub struct FormatResource {
    client: ApiClient,
}

impl FormatResource {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn build_request(model: &FormatModel) -> FormatCreate {
    FormatCreate {
        world_id: model.world_id.clone(),
        format_type: model.format_type.clone(),
        translations: model.translations.clone(),
    }
}

fn apply_remote(model: &mut FormatModel, remote: &Format) {
    model.world_id = optional_string_opt(remote.world_id.clone());
    model.format_type = optional_string_opt(remote.format_type.clone());
    model.translations = remote.translations.clone();
}

#[async_trait]
impl ManagedResource for FormatResource {
    type Model = FormatModel;

    async fn create(&self, model: &FormatModel) -> ProviderResult<FormatModel> {
        let created = self.client.create_format(&build_request(model)).await?;
        let mut state = model.clone();
        state.id = Some(created.id.to_string());
        apply_remote(&mut state, &created);
        Ok(state)
    }

    async fn read(&self, model: &FormatModel) -> ProviderResult<Option<FormatModel>> {
        let id = parse_entity_id(model.id.as_deref())?;
        match self.client.get_format(id).await {
            Ok(remote) => {
                let mut state = model.clone();
                apply_remote(&mut state, &remote);
                Ok(Some(state))
            }
            Err(ApiError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, model: &FormatModel) -> ProviderResult<FormatModel> {
        let id = parse_entity_id(model.id.as_deref())?;
        self.client.update_format(id, &build_request(model)).await?;
        let remote = self.client.get_format(id).await?;
        let mut state = model.clone();
        apply_remote(&mut state, &remote);
        Ok(state)
    }

    async fn delete(&self, model: &FormatModel) -> ProviderResult<()> {
        let id = parse_entity_id(model.id.as_deref())?;
        self.client.delete_format(id).await?;
        Ok(())
    }

    fn import(&self, id: &str) -> FormatModel {
        FormatModel {
            id: Some(id.to_string()),
            ..FormatModel::default()
        }
    }
}
