//! Configuration value handling: the unknown/null/value tri-state and
//! the normalization helpers applied at every read/write boundary.

/// A configuration-supplied value.
///
/// Declarative engines distinguish a value that is not yet known (an
/// unresolved cross-resource reference), a value deliberately left
/// unset, and a concrete value. `Unknown` is only legal while planning;
/// the provider factory rejects it outright.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigValue<T> {
    Unknown,
    #[default]
    Null,
    Value(T),
}

impl<T> ConfigValue<T> {
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    #[must_use]
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for ConfigValue<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Self::Value(v),
            None => Self::Null,
        }
    }
}

/// Normalize a server string into the single "absent" representation:
/// the empty string becomes `None`.
#[must_use]
pub fn optional_string(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Normalize an optional server string: a missing value, a JSON null and
/// an empty string all become `None`.
#[must_use]
pub fn optional_string_opt(s: Option<String>) -> Option<String> {
    s.and_then(optional_string)
}

/// Narrow an i64 identifier to the API's i32 representation, saturating
/// at the 32-bit boundary instead of wrapping.
#[must_use]
pub fn clamp_to_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_value_defaults_to_null() {
        let v: ConfigValue<String> = ConfigValue::default();
        assert_eq!(v, ConfigValue::Null);
        assert!(!v.is_unknown());
        assert!(v.as_option().is_none());
    }

    #[test]
    fn empty_string_and_null_normalize_identically() {
        assert_eq!(optional_string(String::new()), None);
        assert_eq!(optional_string_opt(None), None);
        assert_eq!(optional_string_opt(Some(String::new())), None);
        assert_eq!(
            optional_string_opt(Some("x".to_string())),
            Some("x".to_string())
        );
    }

    #[test]
    fn clamp_saturates_at_i32_bounds() {
        assert_eq!(clamp_to_i32(42), 42);
        assert_eq!(clamp_to_i32(i64::from(i32::MAX)), i32::MAX);
        assert_eq!(clamp_to_i32(i64::from(i32::MAX) + 1), i32::MAX);
        assert_eq!(clamp_to_i32(i64::from(i32::MIN) - 1), i32::MIN);
        assert_eq!(clamp_to_i32(i64::MIN), i32::MIN);
    }
}
