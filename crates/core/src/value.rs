use crate::error::IssueKind;
use serde_json::Value as JsonValue;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

/// The declared type of a front-matter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Free-form text.
    Text,
    /// A point in time, coerced from date-like input.
    Date,
    /// A boolean flag.
    Bool,
    /// The identity key of an entry in another collection.
    Reference {
        /// Name of the collection the referenced entry belongs to.
        collection: String,
    },
}

impl FieldType {
    /// A reference field targeting the named collection.
    pub fn reference(collection: impl Into<String>) -> Self {
        Self::Reference {
            collection: collection.into(),
        }
    }

    /// Human-readable name used in type-mismatch messages.
    pub fn expected_name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::Bool => "boolean",
            Self::Reference { .. } => "reference slug",
        }
    }
}

/// A validated, typed front-matter value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text content.
    Text(String),
    /// A normalized UTC timestamp.
    Date(OffsetDateTime),
    /// A boolean flag.
    Bool(bool),
    /// The slug of a referenced entry; existence is checked later, by the
    /// resolution step, not here.
    Reference(String),
}

impl FieldValue {
    /// Coerces a raw JSON value into the declared field type.
    ///
    /// Explicit `null` is a type mismatch, never treated as absence.
    pub fn coerce(ty: &FieldType, raw: &JsonValue) -> Result<Self, IssueKind> {
        match ty {
            FieldType::Text => match raw.as_str() {
                Some(text) => Ok(Self::Text(text.to_string())),
                None => Err(mismatch(ty, raw)),
            },
            FieldType::Bool => match raw.as_bool() {
                Some(flag) => Ok(Self::Bool(flag)),
                None => Err(mismatch(ty, raw)),
            },
            FieldType::Date => match raw.as_str() {
                Some(text) => parse_date(text).map(Self::Date).ok_or(IssueKind::InvalidDate {
                    input: text.to_string(),
                }),
                None => Err(mismatch(ty, raw)),
            },
            FieldType::Reference { .. } => match raw.as_str() {
                Some("") => Err(IssueKind::EmptyReference),
                Some(slug) => Ok(Self::Reference(slug.to_string())),
                None => Err(mismatch(ty, raw)),
            },
        }
    }

    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The timestamp, if this is a date value.
    pub fn as_date(&self) -> Option<OffsetDateTime> {
        match self {
            Self::Date(at) => Some(*at),
            _ => None,
        }
    }

    /// The flag, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// The referenced slug, if this is a reference value.
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Self::Reference(slug) => Some(slug),
            _ => None,
        }
    }
}

fn mismatch(ty: &FieldType, raw: &JsonValue) -> IssueKind {
    IssueKind::TypeMismatch {
        expected: ty.expected_name(),
        found: json_type_name(raw),
    }
}

/// Short name of a JSON value's type, for error messages.
pub fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Accepts an RFC 3339 timestamp or a `YYYY-MM-DD` calendar date.
/// Both normalize to UTC; a bare date means midnight UTC.
fn parse_date(input: &str) -> Option<OffsetDateTime> {
    if let Ok(at) = OffsetDateTime::parse(input, &Rfc3339) {
        return Some(at.to_offset(UtcOffset::UTC));
    }
    let day_only = format_description!("[year]-[month]-[day]");
    Date::parse(input, &day_only)
        .ok()
        .map(|date| date.midnight().assume_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn text_accepts_strings_only() {
        let ok = FieldValue::coerce(&FieldType::Text, &json!("hello")).unwrap();
        assert_eq!(ok, FieldValue::Text("hello".into()));

        let err = FieldValue::coerce(&FieldType::Text, &json!(42)).unwrap_err();
        assert_eq!(
            err,
            IssueKind::TypeMismatch {
                expected: "text",
                found: "number"
            }
        );
    }

    #[test]
    fn explicit_null_is_a_mismatch() {
        let err = FieldValue::coerce(&FieldType::Text, &JsonValue::Null).unwrap_err();
        assert_eq!(
            err,
            IssueKind::TypeMismatch {
                expected: "text",
                found: "null"
            }
        );
    }

    #[test]
    fn bool_accepts_booleans_only() {
        let ok = FieldValue::coerce(&FieldType::Bool, &json!(true)).unwrap();
        assert_eq!(ok, FieldValue::Bool(true));
        assert!(FieldValue::coerce(&FieldType::Bool, &json!("true")).is_err());
    }

    #[test]
    fn bare_date_and_midnight_timestamp_normalize_equal() {
        let from_date = FieldValue::coerce(&FieldType::Date, &json!("2024-01-01")).unwrap();
        let from_stamp =
            FieldValue::coerce(&FieldType::Date, &json!("2024-01-01T00:00:00Z")).unwrap();
        assert_eq!(from_date, from_stamp);
        assert_eq!(from_date.as_date(), Some(datetime!(2024-01-01 00:00 UTC)));
    }

    #[test]
    fn offset_timestamps_normalize_to_utc() {
        let value =
            FieldValue::coerce(&FieldType::Date, &json!("2024-06-01T12:00:00+02:00")).unwrap();
        assert_eq!(value.as_date(), Some(datetime!(2024-06-01 10:00 UTC)));
    }

    #[test]
    fn garbage_dates_are_rejected() {
        for input in ["yesterday", "2024-13-01", "2024/01/01", ""] {
            let err = FieldValue::coerce(&FieldType::Date, &json!(input)).unwrap_err();
            assert!(
                matches!(err, IssueKind::InvalidDate { .. }),
                "{input:?}: {err:?}"
            );
        }
    }

    #[test]
    fn non_string_date_is_a_mismatch_not_invalid() {
        let err = FieldValue::coerce(&FieldType::Date, &json!(1704067200)).unwrap_err();
        assert!(matches!(err, IssueKind::TypeMismatch { .. }));
    }

    #[test]
    fn reference_keeps_the_slug() {
        let ty = FieldType::reference("categories");
        let ok = FieldValue::coerce(&ty, &json!("tutorials")).unwrap();
        assert_eq!(ok.as_reference(), Some("tutorials"));
    }

    #[test]
    fn empty_reference_is_rejected() {
        let ty = FieldType::reference("categories");
        let err = FieldValue::coerce(&ty, &json!("")).unwrap_err();
        assert_eq!(err, IssueKind::EmptyReference);
    }
}
