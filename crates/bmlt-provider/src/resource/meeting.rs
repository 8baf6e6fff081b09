//! Meeting resource.

use async_trait::async_trait;
use bmlt_client::models::{Meeting, MeetingCreate};
use bmlt_client::{ApiClient, ApiError};

use super::{parse_entity_id, ManagedResource};
use crate::error::ProviderResult;
use crate::value::{clamp_to_i32, optional_string_opt};

/// Configuration/state model for a meeting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeetingModel {
    /// Server-assigned identifier, absent until created.
    pub id: Option<String>,
    pub service_body_id: i64,
    /// Ordered; fully replaced on every write.
    pub format_ids: Vec<i64>,
    /// Venue type: 1 = in-person, 2 = virtual, 3 = hybrid.
    pub venue_type: i64,
    pub temporarily_virtual: Option<bool>,
    /// Day of the week, 0 = Sunday.
    pub day: i64,
    /// HH:MM.
    pub start_time: String,
    /// HH:MM.
    pub duration: String,
    pub time_zone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub published: bool,
    pub email: Option<String>,
    pub world_id: Option<String>,
    pub name: String,
    pub location_text: Option<String>,
    pub location_info: Option<String>,
    pub location_street: Option<String>,
    pub location_municipality: Option<String>,
    pub location_province: Option<String>,
    pub location_postal_code_1: Option<String>,
    pub location_nation: Option<String>,
    pub virtual_meeting_link: Option<String>,
    pub contact_name_1: Option<String>,
    pub contact_phone_1: Option<String>,
    pub contact_email_1: Option<String>,
    pub comments: Option<String>,
}

pub struct MeetingResource {
    client: ApiClient,
}

impl MeetingResource {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn build_request(model: &MeetingModel) -> MeetingCreate {
    MeetingCreate {
        service_body_id: clamp_to_i32(model.service_body_id),
        format_ids: model.format_ids.iter().copied().map(clamp_to_i32).collect(),
        venue_type: clamp_to_i32(model.venue_type),
        temporarily_virtual: model.temporarily_virtual,
        day: clamp_to_i32(model.day),
        start_time: model.start_time.clone(),
        duration: model.duration.clone(),
        time_zone: model.time_zone.clone(),
        latitude: model.latitude,
        longitude: model.longitude,
        published: model.published,
        email: model.email.clone(),
        world_id: model.world_id.clone(),
        name: model.name.clone(),
        location_text: model.location_text.clone(),
        location_info: model.location_info.clone(),
        location_street: model.location_street.clone(),
        location_municipality: model.location_municipality.clone(),
        location_province: model.location_province.clone(),
        location_postal_code_1: model.location_postal_code_1.clone(),
        location_nation: model.location_nation.clone(),
        virtual_meeting_link: model.virtual_meeting_link.clone(),
        contact_name_1: model.contact_name_1.clone(),
        contact_phone_1: model.contact_phone_1.clone(),
        contact_email_1: model.contact_email_1.clone(),
        comments: model.comments.clone(),
    }
}

fn apply_remote(model: &mut MeetingModel, remote: &Meeting) {
    model.service_body_id = i64::from(remote.service_body_id);
    model.format_ids = remote.format_ids.iter().copied().map(i64::from).collect();
    model.venue_type = i64::from(remote.venue_type);
    model.temporarily_virtual = Some(remote.temporarily_virtual);
    model.day = i64::from(remote.day);
    model.start_time = remote.start_time.clone();
    model.duration = remote.duration.clone();
    model.time_zone = optional_string_opt(remote.time_zone.clone());
    model.latitude = remote.latitude;
    model.longitude = remote.longitude;
    model.published = remote.published;
    model.email = optional_string_opt(remote.email.clone());
    model.world_id = optional_string_opt(remote.world_id.clone());
    model.name = remote.name.clone();
    model.location_text = optional_string_opt(remote.location_text.clone());
    model.location_info = optional_string_opt(remote.location_info.clone());
    model.location_street = optional_string_opt(remote.location_street.clone());
    model.location_municipality = optional_string_opt(remote.location_municipality.clone());
    model.location_province = optional_string_opt(remote.location_province.clone());
    model.location_postal_code_1 = optional_string_opt(remote.location_postal_code_1.clone());
    model.location_nation = optional_string_opt(remote.location_nation.clone());
    model.virtual_meeting_link = optional_string_opt(remote.virtual_meeting_link.clone());
    model.contact_name_1 = optional_string_opt(remote.contact_name_1.clone());
    model.contact_phone_1 = optional_string_opt(remote.contact_phone_1.clone());
    model.contact_email_1 = optional_string_opt(remote.contact_email_1.clone());
    model.comments = optional_string_opt(remote.comments.clone());
}

#[async_trait]
impl ManagedResource for MeetingResource {
    type Model = MeetingModel;

    async fn create(&self, model: &MeetingModel) -> ProviderResult<MeetingModel> {
        let created = self.client.create_meeting(&build_request(model)).await?;
        let mut state = model.clone();
        state.id = Some(created.id.to_string());
        apply_remote(&mut state, &created);
        Ok(state)
    }

    async fn read(&self, model: &MeetingModel) -> ProviderResult<Option<MeetingModel>> {
        let id = parse_entity_id(model.id.as_deref())?;
        match self.client.get_meeting(id).await {
            Ok(remote) => {
                let mut state = model.clone();
                apply_remote(&mut state, &remote);
                Ok(Some(state))
            }
            Err(ApiError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, model: &MeetingModel) -> ProviderResult<MeetingModel> {
        let id = parse_entity_id(model.id.as_deref())?;
        self.client.update_meeting(id, &build_request(model)).await?;
        let remote = self.client.get_meeting(id).await?;
        let mut state = model.clone();
        apply_remote(&mut state, &remote);
        Ok(state)
    }

    async fn delete(&self, model: &MeetingModel) -> ProviderResult<()> {
        let id = parse_entity_id(model.id.as_deref())?;
        self.client.delete_meeting(id).await?;
        Ok(())
    }

    fn import(&self, id: &str) -> MeetingModel {
        MeetingModel {
            id: Some(id.to_string()),
            ..MeetingModel::default()
        }
    }
}
