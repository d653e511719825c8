use crate::error::{FieldIssue, IssueKind, ValidationError};
use crate::value::{FieldType, FieldValue};
use serde_json::{Map, Value as JsonValue};
use time::OffsetDateTime;

/// Declares one front-matter field: its type, whether it must be present,
/// and the value substituted when it is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Declared type.
    pub ty: FieldType,
    /// Whether the field must appear in the front matter.
    pub required: bool,
    /// Raw default, coerced like any supplied value when applied.
    /// A field with a default is never required.
    pub default: Option<JsonValue>,
}

impl FieldSpec {
    /// A field that must be present.
    pub fn required(ty: FieldType) -> Self {
        Self {
            ty,
            required: true,
            default: None,
        }
    }

    /// A field that may be absent; absent means absent, not defaulted.
    pub fn optional(ty: FieldType) -> Self {
        Self {
            ty,
            required: false,
            default: None,
        }
    }

    /// A field that takes `default` when absent from the front matter.
    pub fn with_default(ty: FieldType, default: JsonValue) -> Self {
        Self {
            ty,
            required: false,
            default: Some(default),
        }
    }
}

/// An ordered set of field declarations for one collection.
///
/// Schemas are pure data, declared once at startup; redeclaring one
/// produces an identical value with no other observable effect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<(String, FieldSpec)>,
}

impl Schema {
    /// An empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field declaration. Redeclaring a name replaces the earlier
    /// spec so the last declaration wins.
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        let name = name.into();
        match self.fields.iter().position(|(existing, _)| *existing == name) {
            Some(index) => self.fields[index].1 = spec,
            None => self.fields.push((name, spec)),
        }
        self
    }

    /// Looks up a field declaration by name.
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, spec)| spec)
    }

    /// Iterates declarations in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates a raw front-matter map against this schema.
    ///
    /// Produces a populated, defaulted, type-coerced [`Record`], or an
    /// error listing every offending field. Unknown keys in `raw` are
    /// dropped. Defaults apply only to absent fields; a present value is
    /// never overwritten and explicit `null` is a type mismatch.
    pub fn validate(&self, raw: &Map<String, JsonValue>) -> Result<Record, ValidationError> {
        let mut values = Vec::new();
        let mut issues = Vec::new();

        for (name, spec) in &self.fields {
            let supplied = raw.get(name).or(spec.default.as_ref());
            match supplied {
                Some(value) => match FieldValue::coerce(&spec.ty, value) {
                    Ok(value) => values.push((name.clone(), value)),
                    Err(kind) => issues.push(FieldIssue::new(name, kind)),
                },
                None => {
                    if spec.required {
                        issues.push(FieldIssue::new(name, IssueKind::MissingField));
                    }
                }
            }
        }

        if issues.is_empty() {
            Ok(Record { values })
        } else {
            Err(ValidationError::new(issues))
        }
    }
}

/// A validated document's field values, in schema order.
///
/// Optional fields that were absent are absent here too; consumers never
/// see placeholder empty strings or nulls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: Vec<(String, FieldValue)>,
}

impl Record {
    /// Looks up a field value by name.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Whether the record holds a value for the field.
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Iterates values in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of populated fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no fields were populated.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Text content of the named field, if present and textual.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    /// Timestamp of the named field, if present and a date.
    pub fn date(&self, field: &str) -> Option<OffsetDateTime> {
        self.get(field).and_then(FieldValue::as_date)
    }

    /// Flag of the named field, if present and boolean.
    pub fn boolean(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(FieldValue::as_bool)
    }

    /// Referenced slug of the named field, if present and a reference.
    pub fn reference(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_reference)
    }
}
