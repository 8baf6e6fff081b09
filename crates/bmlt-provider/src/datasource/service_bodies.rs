//! Service bodies list data source.

use bmlt_client::models::ServiceBody;
use bmlt_client::ApiClient;

use super::LIST_PLACEHOLDER_ID;
use crate::error::ProviderResult;
use crate::value::optional_string_opt;

/// One flattened service body as exposed to the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceBodyRecord {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub name: String,
    pub description: String,
    pub body_type: String,
    pub admin_user_id: i64,
    pub assigned_user_ids: Vec<i64>,
    pub url: Option<String>,
    pub helpline: Option<String>,
    pub email: Option<String>,
    pub world_id: Option<String>,
}

pub(crate) fn map_service_body(body: &ServiceBody) -> ServiceBodyRecord {
    ServiceBodyRecord {
        id: i64::from(body.id),
        parent_id: body.parent_id.map(i64::from),
        name: body.name.clone(),
        description: body.description.clone(),
        body_type: body.body_type.clone(),
        admin_user_id: i64::from(body.admin_user_id),
        assigned_user_ids: body.assigned_user_ids.iter().copied().map(i64::from).collect(),
        url: optional_string_opt(body.url.clone()),
        helpline: optional_string_opt(body.helpline.clone()),
        email: optional_string_opt(body.email.clone()),
        world_id: optional_string_opt(body.world_id.clone()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceBodiesList {
    /// Synthetic instance id; the list is unfiltered.
    pub id: String,
    pub service_bodies: Vec<ServiceBodyRecord>,
}

pub struct ServiceBodiesDataSource {
    client: ApiClient,
}

impl ServiceBodiesDataSource {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn read(&self) -> ProviderResult<ServiceBodiesList> {
        let bodies = self.client.get_service_bodies().await?;
        Ok(ServiceBodiesList {
            id: LIST_PLACEHOLDER_ID.to_string(),
            service_bodies: bodies.iter().map(map_service_body).collect(),
        })
    }
}
