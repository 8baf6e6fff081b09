//! Single service body lookup data source.

use bmlt_client::{ApiClient, ApiError};

use super::service_bodies::{map_service_body, ServiceBodyRecord};
use super::require_exactly_one;
use crate::error::{ProviderError, ProviderResult};

/// Selector for the lookup: exactly one field must be set.
#[derive(Debug, Clone, Default)]
pub struct ServiceBodyLookup {
    pub service_body_id: Option<i64>,
    pub name: Option<String>,
}

pub struct ServiceBodyDataSource {
    client: ApiClient,
}

impl ServiceBodyDataSource {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn read(&self, lookup: &ServiceBodyLookup) -> ProviderResult<ServiceBodyRecord> {
        require_exactly_one(
            "service_body_id",
            lookup.service_body_id.is_some(),
            "name",
            lookup.name.is_some(),
        )?;

        if let Some(id) = lookup.service_body_id {
            return match self.client.get_service_body(id).await {
                Ok(body) => Ok(map_service_body(&body)),
                Err(ApiError::NotFound) => Err(ProviderError::LookupNotFound {
                    entity: "service body",
                    key: format!("id {id}"),
                }),
                Err(e) => Err(e.into()),
            };
        }

        // Name lookup: the server has no filter for it, so list and scan
        // for the first exact match.
        let name = lookup.name.as_deref().unwrap_or("");
        let bodies = self.client.get_service_bodies().await?;
        bodies
            .iter()
            .find(|b| b.name == name)
            .map(map_service_body)
            .ok_or_else(|| ProviderError::LookupNotFound {
                entity: "service body",
                key: format!("name '{name}'"),
            })
    }
}
