#![deny(missing_docs)]
//! sitekit core: front-matter extraction, schema declarations, and entry slugs.

/// Validation error and per-field issue types.
pub mod error;
/// YAML front-matter extraction helpers.
pub mod frontmatter;
/// Field and collection schema declarations plus validation.
pub mod schema;
/// Entry id derivation from source file names.
pub mod slug;
/// Typed field values and input coercion.
pub mod value;

pub use error::{FieldIssue, IssueKind, ValidationError};
pub use frontmatter::{Frontmatter, FrontmatterError, extract_frontmatter};
pub use schema::{FieldSpec, Record, Schema};
pub use slug::{file_stem, slugify};
pub use value::{FieldType, FieldValue, json_type_name};
