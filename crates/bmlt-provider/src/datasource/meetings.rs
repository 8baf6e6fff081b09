//! Meetings list data source with server-side filters.

use bmlt_client::models::Meeting;
use bmlt_client::{ApiClient, MeetingsQuery};

use crate::error::ProviderResult;
use crate::value::optional_string_opt;

/// Optional filters; all are forwarded to the server. Id lists are
/// sent comma-delimited.
#[derive(Debug, Clone, Default)]
pub struct MeetingsFilter {
    pub meeting_ids: Option<Vec<i64>>,
    pub days: Option<Vec<i64>>,
    pub service_body_ids: Option<Vec<i64>>,
    pub search_string: Option<String>,
}

/// One flattened meeting as exposed to the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingRecord {
    pub id: i64,
    pub service_body_id: i64,
    pub format_ids: Vec<i64>,
    pub venue_type: i64,
    pub temporarily_virtual: bool,
    pub day: i64,
    pub start_time: String,
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
    pub location_neighborhood: Option<String>,
    pub location_city_subsection: Option<String>,
    pub location_municipality: Option<String>,
    pub location_sub_province: Option<String>,
    pub location_province: Option<String>,
    pub location_postal_code_1: Option<String>,
    pub location_nation: Option<String>,
    pub phone_meeting_number: Option<String>,
    pub virtual_meeting_link: Option<String>,
    pub virtual_meeting_additional_info: Option<String>,
    pub contact_name_1: Option<String>,
    pub contact_name_2: Option<String>,
    pub contact_phone_1: Option<String>,
    pub contact_phone_2: Option<String>,
    pub contact_email_1: Option<String>,
    pub contact_email_2: Option<String>,
    pub bus_lines: Option<String>,
    pub train_lines: Option<String>,
    pub comments: Option<String>,
}

fn map_meeting(meeting: &Meeting) -> MeetingRecord {
    MeetingRecord {
        id: i64::from(meeting.id),
        service_body_id: i64::from(meeting.service_body_id),
        format_ids: meeting.format_ids.iter().copied().map(i64::from).collect(),
        venue_type: i64::from(meeting.venue_type),
        temporarily_virtual: meeting.temporarily_virtual,
        day: i64::from(meeting.day),
        start_time: meeting.start_time.clone(),
        duration: meeting.duration.clone(),
        time_zone: optional_string_opt(meeting.time_zone.clone()),
        latitude: meeting.latitude,
        longitude: meeting.longitude,
        published: meeting.published,
        email: optional_string_opt(meeting.email.clone()),
        world_id: optional_string_opt(meeting.world_id.clone()),
        name: meeting.name.clone(),
        location_text: optional_string_opt(meeting.location_text.clone()),
        location_info: optional_string_opt(meeting.location_info.clone()),
        location_street: optional_string_opt(meeting.location_street.clone()),
        location_neighborhood: optional_string_opt(meeting.location_neighborhood.clone()),
        location_city_subsection: optional_string_opt(meeting.location_city_subsection.clone()),
        location_municipality: optional_string_opt(meeting.location_municipality.clone()),
        location_sub_province: optional_string_opt(meeting.location_sub_province.clone()),
        location_province: optional_string_opt(meeting.location_province.clone()),
        location_postal_code_1: optional_string_opt(meeting.location_postal_code_1.clone()),
        location_nation: optional_string_opt(meeting.location_nation.clone()),
        phone_meeting_number: optional_string_opt(meeting.phone_meeting_number.clone()),
        virtual_meeting_link: optional_string_opt(meeting.virtual_meeting_link.clone()),
        virtual_meeting_additional_info: optional_string_opt(
            meeting.virtual_meeting_additional_info.clone(),
        ),
        contact_name_1: optional_string_opt(meeting.contact_name_1.clone()),
        contact_name_2: optional_string_opt(meeting.contact_name_2.clone()),
        contact_phone_1: optional_string_opt(meeting.contact_phone_1.clone()),
        contact_phone_2: optional_string_opt(meeting.contact_phone_2.clone()),
        contact_email_1: optional_string_opt(meeting.contact_email_1.clone()),
        contact_email_2: optional_string_opt(meeting.contact_email_2.clone()),
        bus_lines: optional_string_opt(meeting.bus_lines.clone()),
        train_lines: optional_string_opt(meeting.train_lines.clone()),
        comments: optional_string_opt(meeting.comments.clone()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeetingsList {
    /// Synthetic instance id derived from the filters, `"all"` when
    /// none were given.
    pub id: String,
    pub meetings: Vec<MeetingRecord>,
}

fn csv(ids: &[i64]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Derive the synthetic instance id from the filters. Every filter
/// that was supplied contributes a fragment, even when empty, so two
/// reads with the same filters share an identity.
fn synthetic_id(filter: &MeetingsFilter) -> String {
    let mut fragments = Vec::new();
    if let Some(ids) = &filter.meeting_ids {
        fragments.push(format!("meeting_ids={}", csv(ids)));
    }
    if let Some(days) = &filter.days {
        fragments.push(format!("days={}", csv(days)));
    }
    if let Some(ids) = &filter.service_body_ids {
        fragments.push(format!("service_body_ids={}", csv(ids)));
    }
    if let Some(search) = &filter.search_string {
        fragments.push(format!("search_string={search}"));
    }
    if fragments.is_empty() {
        "all".to_string()
    } else {
        fragments.join("&")
    }
}

fn build_query(filter: &MeetingsFilter) -> MeetingsQuery {
    MeetingsQuery {
        meeting_ids: filter
            .meeting_ids
            .as_deref()
            .filter(|ids| !ids.is_empty())
            .map(csv),
        days: filter.days.as_deref().filter(|d| !d.is_empty()).map(csv),
        service_body_ids: filter
            .service_body_ids
            .as_deref()
            .filter(|ids| !ids.is_empty())
            .map(csv),
        search_string: filter
            .search_string
            .clone()
            .filter(|s| !s.is_empty()),
    }
}

pub struct MeetingsDataSource {
    client: ApiClient,
}

impl MeetingsDataSource {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn read(&self, filter: &MeetingsFilter) -> ProviderResult<MeetingsList> {
        let meetings = self.client.get_meetings(&build_query(filter)).await?;
        Ok(MeetingsList {
            id: synthetic_id(filter),
            meetings: meetings.iter().map(map_meeting).collect(),
        })
    }
}
