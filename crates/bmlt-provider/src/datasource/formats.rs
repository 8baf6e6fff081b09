//! Formats list data source with a language projection.

use std::collections::HashMap;

use bmlt_client::models::{Format, FormatTranslation};
use bmlt_client::ApiClient;

use super::LIST_PLACEHOLDER_ID;
use crate::error::ProviderResult;
use crate::value::optional_string_opt;

/// One format with all of its translations.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatRecord {
    pub id: i64,
    pub world_id: Option<String>,
    pub format_type: Option<String>,
    pub translations: Vec<FormatTranslation>,
}

/// One format projected onto a single language, addressable by its
/// translation key.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatByKey {
    pub id: i64,
    pub key: String,
    pub name: String,
    pub description: String,
    pub world_id: Option<String>,
    pub format_type: Option<String>,
}

fn map_format(format: &Format) -> FormatRecord {
    FormatRecord {
        id: i64::from(format.id),
        world_id: optional_string_opt(format.world_id.clone()),
        format_type: optional_string_opt(format.format_type.clone()),
        translations: format.translations.clone(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormatsList {
    /// Synthetic instance id; the list itself is unfiltered.
    pub id: String,
    pub formats: Vec<FormatRecord>,
    /// Keyed projection for the requested language; empty when no
    /// language was given.
    pub formats_by_key: HashMap<String, FormatByKey>,
}

/// Build the key projection from translations in the requested
/// language. The first format claiming a key wins; later duplicates
/// are ignored.
fn project_by_key(formats: &[Format], language: &str) -> HashMap<String, FormatByKey> {
    let mut by_key = HashMap::new();
    if language.is_empty() {
        return by_key;
    }
    for format in formats {
        for translation in &format.translations {
            if translation.language != language {
                continue;
            }
            by_key
                .entry(translation.key.clone())
                .or_insert_with(|| FormatByKey {
                    id: i64::from(format.id),
                    key: translation.key.clone(),
                    name: translation.name.clone(),
                    description: translation.description.clone(),
                    world_id: optional_string_opt(format.world_id.clone()),
                    format_type: optional_string_opt(format.format_type.clone()),
                });
        }
    }
    by_key
}

pub struct FormatsDataSource {
    client: ApiClient,
}

impl FormatsDataSource {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Read all formats. `language`, when given, additionally populates
    /// the by-key projection from translations in that language.
    pub async fn read(&self, language: Option<&str>) -> ProviderResult<FormatsList> {
        let formats = self.client.get_formats().await?;
        let language = language.unwrap_or("");
        Ok(FormatsList {
            id: LIST_PLACEHOLDER_ID.to_string(),
            formats_by_key: project_by_key(&formats, language),
            formats: formats.iter().map(map_format).collect(),
        })
    }
}
