//! Read-only data sources.
//!
//! List data sources fetch every entity of a kind and expose flattened
//! records with a synthetic instance id. Singleton lookups select one
//! entity by exactly one of two selector fields, validated before any
//! network call is made.

pub mod formats;
pub mod meetings;
pub mod service_bodies;
pub mod service_body;
pub mod settings;
pub mod user;
pub mod users;

pub use formats::{FormatByKey, FormatRecord, FormatsDataSource, FormatsList};
pub use meetings::{MeetingRecord, MeetingsDataSource, MeetingsFilter, MeetingsList};
pub use service_bodies::{ServiceBodiesDataSource, ServiceBodiesList, ServiceBodyRecord};
pub use service_body::{ServiceBodyDataSource, ServiceBodyLookup};
pub use settings::{SettingsDataSource, SettingsRecord};
pub use user::{UserDataSource, UserLookup};
pub use users::{UserRecord, UsersDataSource, UsersList};

use crate::error::{ProviderError, ProviderResult};

/// Synthetic instance id for unfiltered list data sources.
pub(crate) const LIST_PLACEHOLDER_ID: &str = "placeholder";

/// Enforce the exactly-one-selector rule shared by the singleton
/// lookups.
pub(crate) fn require_exactly_one(
    first: &'static str,
    first_set: bool,
    second: &'static str,
    second_set: bool,
) -> ProviderResult<()> {
    match (first_set, second_set) {
        (false, false) => Err(ProviderError::MissingLookupArgument { first, second }),
        (true, true) => Err(ProviderError::ConflictingLookupArguments { first, second }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_neither_selector() {
        assert!(matches!(
            require_exactly_one("id", false, "name", false),
            Err(ProviderError::MissingLookupArgument {
                first: "id",
                second: "name"
            })
        ));
    }

    #[test]
    fn rejects_both_selectors() {
        assert!(matches!(
            require_exactly_one("id", true, "name", true),
            Err(ProviderError::ConflictingLookupArguments { .. })
        ));
    }

    #[test]
    fn accepts_exactly_one_selector() {
        assert!(require_exactly_one("id", true, "name", false).is_ok());
        assert!(require_exactly_one("id", false, "name", true).is_ok());
    }
}
