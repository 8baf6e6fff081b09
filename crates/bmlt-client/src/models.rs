//! Wire models for the root server REST API.
//!
//! Response models mark every server-optional field `#[serde(default)]`
//! so a JSON `null` and a missing key both decode to `None`. Request
//! models skip serializing unset optionals so "unset" reaches the server
//! as an absent field rather than a zero value.

use serde::{Deserialize, Serialize};

// ── Service bodies ─────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBody {
    pub id: i32,
    #[serde(default)]
    pub parent_id: Option<i32>,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub body_type: String,
    pub admin_user_id: i32,
    #[serde(default)]
    pub assigned_user_ids: Vec<i32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub helpline: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub world_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBodyCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i32>,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub body_type: String,
    pub admin_user_id: i32,
    pub assigned_user_ids: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helpline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world_id: Option<String>,
}

/// The update body is shape-identical to the create body; the server
/// replaces every field, including `assigned_user_ids`, wholesale.
pub type ServiceBodyUpdate = ServiceBodyCreate;

// ── Meetings ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: i32,
    pub service_body_id: i32,
    #[serde(default)]
    pub format_ids: Vec<i32>,
    pub venue_type: i32,
    #[serde(default)]
    pub temporarily_virtual: bool,
    pub day: i32,
    pub start_time: String,
    pub duration: String,
    #[serde(default)]
    pub time_zone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub published: bool,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub world_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub location_text: Option<String>,
    #[serde(default)]
    pub location_info: Option<String>,
    #[serde(default)]
    pub location_street: Option<String>,
    #[serde(default)]
    pub location_neighborhood: Option<String>,
    #[serde(default)]
    pub location_city_subsection: Option<String>,
    #[serde(default)]
    pub location_municipality: Option<String>,
    #[serde(default)]
    pub location_sub_province: Option<String>,
    #[serde(default)]
    pub location_province: Option<String>,
    #[serde(default)]
    pub location_postal_code_1: Option<String>,
    #[serde(default)]
    pub location_nation: Option<String>,
    #[serde(default)]
    pub phone_meeting_number: Option<String>,
    #[serde(default)]
    pub virtual_meeting_link: Option<String>,
    #[serde(default)]
    pub virtual_meeting_additional_info: Option<String>,
    #[serde(default)]
    pub contact_name_1: Option<String>,
    #[serde(default)]
    pub contact_name_2: Option<String>,
    #[serde(default)]
    pub contact_phone_1: Option<String>,
    #[serde(default)]
    pub contact_phone_2: Option<String>,
    #[serde(default)]
    pub contact_email_1: Option<String>,
    #[serde(default)]
    pub contact_email_2: Option<String>,
    #[serde(default)]
    pub bus_lines: Option<String>,
    #[serde(default)]
    pub train_lines: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingCreate {
    pub service_body_id: i32,
    pub format_ids: Vec<i32>,
    pub venue_type: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporarily_virtual: Option<bool>,
    pub day: i32,
    pub start_time: String,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world_id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_municipality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_postal_code_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_nation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_meeting_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

pub type MeetingUpdate = MeetingCreate;

// ── Formats ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatTranslation {
    pub key: String,
    pub name: String,
    pub description: String,
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Format {
    pub id: i32,
    #[serde(default)]
    pub world_id: Option<String>,
    #[serde(rename = "type", default)]
    pub format_type: Option<String>,
    #[serde(default)]
    pub translations: Vec<FormatTranslation>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub format_type: Option<String>,
    /// Translations have no identity of their own; the full list is
    /// replaced on every write.
    pub translations: Vec<FormatTranslation>,
}

pub type FormatUpdate = FormatCreate;

// ── Users ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i32>,
    /// Server-formatted timestamp of the last token grant; read-only.
    #[serde(default)]
    pub last_login_at: Option<String>,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i32>,
}

impl std::fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCreate")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("user_type", &self.user_type)
            .field("display_name", &self.display_name)
            .field("description", &self.description)
            .field("email", &self.email)
            .field("owner_id", &self.owner_id)
            .finish()
    }
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub username: String,
    /// Omitted when the caller does not want to rotate the password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "type")]
    pub user_type: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i32>,
}

impl std::fmt::Debug for UserUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserUpdate")
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

// ── Settings ───────────────────────────────────────────────────────

/// Global server settings singleton. Every field is independently
/// nullable; the server omits what it does not have configured.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub google_api_key: Option<String>,
    #[serde(default)]
    pub change_depth_for_meetings: Option<i32>,
    #[serde(default)]
    pub default_sort_key: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub default_duration_time: Option<String>,
    #[serde(default)]
    pub region_bias: Option<String>,
    #[serde(default)]
    pub distance_units: Option<String>,
    #[serde(default)]
    pub meeting_states_and_provinces: Option<Vec<String>>,
    #[serde(default)]
    pub meeting_counties_and_sub_provinces: Option<Vec<String>>,
    #[serde(default)]
    pub search_spec_map_center_longitude: Option<f64>,
    #[serde(default)]
    pub search_spec_map_center_latitude: Option<f64>,
    #[serde(default)]
    pub search_spec_map_center_zoom: Option<i32>,
    #[serde(default)]
    pub number_of_meetings_for_auto: Option<i32>,
    #[serde(default)]
    pub auto_geocoding_enabled: Option<bool>,
    #[serde(default)]
    pub county_auto_geocoding_enabled: Option<bool>,
    #[serde(default)]
    pub zip_auto_geocoding_enabled: Option<bool>,
    #[serde(default)]
    pub default_closed_status: Option<bool>,
    #[serde(default)]
    pub enable_language_selector: Option<bool>,
    #[serde(default)]
    pub include_service_body_email_in_semantic: Option<bool>,
    #[serde(default)]
    pub bmlt_title: Option<String>,
    #[serde(default)]
    pub bmlt_notice: Option<String>,
}
