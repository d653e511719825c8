use thiserror::Error;

/// Reasons a single front-matter field can fail validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueKind {
    /// A required field is absent from the front matter.
    #[error("missing required field")]
    MissingField,
    /// The field is present but not of the declared type. Explicit `null`
    /// lands here as well: defaults apply only to absent fields.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// The declared type's display name.
        expected: &'static str,
        /// The supplied value's JSON type name.
        found: &'static str,
    },
    /// A date field whose string form is neither RFC 3339 nor `YYYY-MM-DD`.
    #[error("`{input}` is not an RFC 3339 timestamp or a YYYY-MM-DD date")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },
    /// A reference field with an empty slug.
    #[error("reference slug must be a non-empty string")]
    EmptyReference,
}

/// One failed field, by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// The front-matter key that failed.
    pub field: String,
    /// Why it failed.
    pub kind: IssueKind,
}

impl FieldIssue {
    /// Creates an issue for the named field.
    pub fn new(field: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field `{}`: {}", self.field, self.kind)
    }
}

/// Validation failure for one document, naming every offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Source file the document came from, when known.
    pub file: Option<String>,
    /// Every field that failed, in schema order.
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// A validation failure not yet attributed to a file.
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { file: None, issues }
    }

    /// Attributes the failure to a source file.
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Whether the named field is among the failures.
    pub fn mentions(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(file) = &self.file {
            write!(f, "{file}: ")?;
        }
        let mut first = true;
        for issue in &self.issues {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{issue}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_file_and_fields() {
        let err = ValidationError::new(vec![
            FieldIssue::new("title", IssueKind::MissingField),
            FieldIssue::new(
                "draft",
                IssueKind::TypeMismatch {
                    expected: "boolean",
                    found: "string",
                },
            ),
        ])
        .in_file("intro.md");

        assert_eq!(
            err.to_string(),
            "intro.md: field `title`: missing required field; \
             field `draft`: expected boolean, found string"
        );
    }

    #[test]
    fn mentions_checks_field_names() {
        let err = ValidationError::new(vec![FieldIssue::new("title", IssueKind::MissingField)]);
        assert!(err.mentions("title"));
        assert!(!err.mentions("description"));
    }
}
