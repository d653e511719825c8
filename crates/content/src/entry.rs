use crate::collection::{CollectionDefinition, CollectionKind};
use crate::resolve::ReferenceErrors;
use log::debug;
use sitekit_core::{
    FrontmatterError, Record, ValidationError, extract_frontmatter, file_stem, slugify,
};
use thiserror::Error;

/// One validated content file: identity key, collection, typed front
/// matter, and the untouched document body.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    id: String,
    collection: String,
    data: Record,
    body: String,
}

impl Entry {
    /// Identity key, derived from the source file name.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the collection the entry belongs to.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Validated, defaulted front-matter values.
    pub fn data(&self) -> &Record {
        &self.data
    }

    /// Document body, carried verbatim.
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Errors surfaced while loading content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The front-matter block is malformed.
    #[error("{file}: {source}")]
    Frontmatter {
        /// Source file the block came from.
        file: String,
        /// The underlying syntax error.
        source: FrontmatterError,
    },
    /// The front matter does not satisfy the collection schema.
    #[error("{0}")]
    Validation(ValidationError),
    /// Two files in one collection produced the same identity key.
    #[error("collection `{collection}`: duplicate entry id `{id}` (from `{file}`)")]
    DuplicateId {
        /// Collection both files belong to.
        collection: String,
        /// The colliding identity key.
        id: String,
        /// The file whose id collided with an earlier entry.
        file: String,
    },
    /// A source file was handed in for a collection nobody declared.
    #[error("collection `{0}` is not declared")]
    UnknownCollection(String),
    /// Reference resolution found dangling cross-collection links.
    #[error(transparent)]
    UnresolvedReferences(#[from] ReferenceErrors),
}

/// Turns one source file into a validated [`Entry`].
///
/// The identity key is the slugified file stem; the body is everything
/// after the front-matter block, verbatim.
pub fn load_entry(
    def: &CollectionDefinition,
    file_name: &str,
    source: &str,
) -> Result<Entry, ContentError> {
    let frontmatter = extract_frontmatter(source).map_err(|err| ContentError::Frontmatter {
        file: file_name.to_string(),
        source: err,
    })?;
    let data = def
        .schema()
        .validate(&frontmatter.fields)
        .map_err(|err| ContentError::Validation(err.in_file(file_name)))?;

    let id = slugify(file_stem(file_name));
    debug!("loaded `{id}` into collection `{}`", def.name());

    let body = match def.kind() {
        CollectionKind::Content => source[frontmatter.body_start..].to_string(),
        CollectionKind::Data => String::new(),
    };

    Ok(Entry {
        id,
        collection: def.name().to_string(),
        data,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::CollectionKind;
    use crate::config::{blog_schema, categories_schema};
    use time::macros::datetime;

    fn categories() -> CollectionDefinition {
        CollectionDefinition::new("categories", CollectionKind::Content, categories_schema())
    }

    fn blog() -> CollectionDefinition {
        CollectionDefinition::new("blog", CollectionKind::Content, blog_schema())
    }

    #[test]
    fn category_file_without_color_validates() {
        let source = "---\nname: Tutorials\ndescription: How-to guides\n---\nAbout tutorials.\n";
        let entry = load_entry(&categories(), "tutorials.md", source).unwrap();

        assert_eq!(entry.id(), "tutorials");
        assert_eq!(entry.collection(), "categories");
        assert_eq!(entry.data().text("name"), Some("Tutorials"));
        assert_eq!(entry.data().text("description"), Some("How-to guides"));
        assert!(!entry.data().contains("color"));
        assert_eq!(entry.body(), "About tutorials.\n");
    }

    #[test]
    fn blog_file_gets_defaults_applied() {
        let source = "\
---
title: Intro
description: First post
pubDate: \"2024-01-01\"
category: tutorials
---
Welcome.
";
        let entry = load_entry(&blog(), "Intro Post.md", source).unwrap();

        assert_eq!(entry.id(), "intro-post");
        assert_eq!(entry.data().text("author"), Some("Admin"));
        assert_eq!(entry.data().boolean("draft"), Some(false));
        assert_eq!(
            entry.data().date("pubDate"),
            Some(datetime!(2024-01-01 00:00 UTC))
        );
        assert_eq!(entry.data().reference("category"), Some("tutorials"));
    }

    #[test]
    fn missing_title_names_the_field_and_file() {
        let source = "---\ndescription: No title\npubDate: \"2024-01-01\"\ncategory: misc\n---\n";
        let err = load_entry(&blog(), "untitled.md", source).unwrap_err();

        let validation = match err {
            ContentError::Validation(validation) => validation,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert!(validation.mentions("title"));
        assert_eq!(validation.file.as_deref(), Some("untitled.md"));
        assert!(validation.to_string().contains("untitled.md"));
        assert!(validation.to_string().contains("`title`"));
    }

    #[test]
    fn broken_front_matter_names_the_file() {
        let err = load_entry(&blog(), "broken.md", "---\ntitle: Oops").unwrap_err();
        assert!(matches!(err, ContentError::Frontmatter { .. }));
        assert!(err.to_string().starts_with("broken.md:"));
    }
}
