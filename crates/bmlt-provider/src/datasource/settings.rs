//! Server settings singleton data source.

use bmlt_client::ApiClient;

use crate::error::ProviderResult;
use crate::value::optional_string_opt;

/// Fixed instance id; there is exactly one settings document per
/// server.
const SETTINGS_ID: &str = "settings";

/// The server's global configuration as exposed to the orchestrator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsRecord {
    pub id: String,
    pub google_api_key: Option<String>,
    pub change_depth_for_meetings: Option<i64>,
    pub default_sort_key: Option<String>,
    pub language: Option<String>,
    pub default_duration_time: Option<String>,
    pub region_bias: Option<String>,
    pub distance_units: Option<String>,
    pub meeting_states_and_provinces: Option<Vec<String>>,
    pub meeting_counties_and_sub_provinces: Option<Vec<String>>,
    pub search_spec_map_center_longitude: Option<f64>,
    pub search_spec_map_center_latitude: Option<f64>,
    pub search_spec_map_center_zoom: Option<i64>,
    pub number_of_meetings_for_auto: Option<i64>,
    pub auto_geocoding_enabled: Option<bool>,
    pub county_auto_geocoding_enabled: Option<bool>,
    pub zip_auto_geocoding_enabled: Option<bool>,
    pub default_closed_status: Option<bool>,
    pub enable_language_selector: Option<bool>,
    pub include_service_body_email_in_semantic: Option<bool>,
    pub bmlt_title: Option<String>,
    pub bmlt_notice: Option<String>,
}

pub struct SettingsDataSource {
    client: ApiClient,
}

impl SettingsDataSource {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn read(&self) -> ProviderResult<SettingsRecord> {
        let settings = self.client.get_settings().await?;
        Ok(SettingsRecord {
            id: SETTINGS_ID.to_string(),
            google_api_key: optional_string_opt(settings.google_api_key),
            change_depth_for_meetings: settings.change_depth_for_meetings.map(i64::from),
            default_sort_key: optional_string_opt(settings.default_sort_key),
            language: optional_string_opt(settings.language),
            default_duration_time: optional_string_opt(settings.default_duration_time),
            region_bias: optional_string_opt(settings.region_bias),
            distance_units: optional_string_opt(settings.distance_units),
            meeting_states_and_provinces: settings.meeting_states_and_provinces,
            meeting_counties_and_sub_provinces: settings.meeting_counties_and_sub_provinces,
            search_spec_map_center_longitude: settings.search_spec_map_center_longitude,
            search_spec_map_center_latitude: settings.search_spec_map_center_latitude,
            search_spec_map_center_zoom: settings.search_spec_map_center_zoom.map(i64::from),
            number_of_meetings_for_auto: settings.number_of_meetings_for_auto.map(i64::from),
            auto_geocoding_enabled: settings.auto_geocoding_enabled,
            county_auto_geocoding_enabled: settings.county_auto_geocoding_enabled,
            zip_auto_geocoding_enabled: settings.zip_auto_geocoding_enabled,
            default_closed_status: settings.default_closed_status,
            enable_language_selector: settings.enable_language_selector,
            include_service_body_email_in_semantic: settings
                .include_service_body_email_in_semantic,
            bmlt_title: optional_string_opt(settings.bmlt_title),
            bmlt_notice: optional_string_opt(settings.bmlt_notice),
        })
    }
}
