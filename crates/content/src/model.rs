use crate::config::{BLOG, CATEGORIES};
use crate::entry::Entry;
use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;

/// Identity key of a category, as stored in a blog post's `category` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CategoryRef(String);

impl CategoryRef {
    /// Wraps a category slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// The referenced category's slug.
    pub fn slug(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors turning a validated entry into a typed view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The entry belongs to a different collection.
    #[error("expected a `{expected}` entry, got `{found}`")]
    WrongCollection {
        /// Collection the view models.
        expected: &'static str,
        /// Collection the entry actually belongs to.
        found: String,
    },
    /// A field the view needs is absent or of the wrong shape. Cannot
    /// happen for entries produced by this crate's own validation.
    #[error("field `{0}` is missing from the validated record")]
    Missing(&'static str),
}

/// A validated `categories` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Identity key, derived from the file name.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Optional styling hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TryFrom<&Entry> for Category {
    type Error = ModelError;

    fn try_from(entry: &Entry) -> Result<Self, Self::Error> {
        expect_collection(entry, CATEGORIES)?;
        let data = entry.data();
        Ok(Self {
            slug: entry.id().to_string(),
            name: required_text(data.text("name"), "name")?,
            description: required_text(data.text("description"), "description")?,
            color: data.text("color").map(str::to_string),
        })
    }
}

/// A validated `blog` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Identity key, derived from the file name.
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Post description, used for summaries and SEO.
    pub description: String,
    /// Publication date, normalized to UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub pub_date: OffsetDateTime,
    /// Last-update date, when the post was revised.
    #[serde(with = "time::serde::rfc3339::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<OffsetDateTime>,
    /// Path or URL of the hero image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    /// The category this post belongs to.
    pub category: CategoryRef,
    /// Author attribution; `"Admin"` unless the front matter says otherwise.
    pub author: String,
    /// Whether the post is an unpublished draft.
    pub draft: bool,
}

impl TryFrom<&Entry> for BlogPost {
    type Error = ModelError;

    fn try_from(entry: &Entry) -> Result<Self, Self::Error> {
        expect_collection(entry, BLOG)?;
        let data = entry.data();
        Ok(Self {
            slug: entry.id().to_string(),
            title: required_text(data.text("title"), "title")?,
            description: required_text(data.text("description"), "description")?,
            pub_date: data.date("pubDate").ok_or(ModelError::Missing("pubDate"))?,
            updated_date: data.date("updatedDate"),
            hero_image: data.text("heroImage").map(str::to_string),
            category: data
                .reference("category")
                .map(CategoryRef::new)
                .ok_or(ModelError::Missing("category"))?,
            author: required_text(data.text("author"), "author")?,
            draft: data.boolean("draft").ok_or(ModelError::Missing("draft"))?,
        })
    }
}

fn expect_collection(entry: &Entry, expected: &'static str) -> Result<(), ModelError> {
    if entry.collection() == expected {
        Ok(())
    } else {
        Err(ModelError::WrongCollection {
            expected,
            found: entry.collection().to_string(),
        })
    }
}

fn required_text(value: Option<&str>, field: &'static str) -> Result<String, ModelError> {
    value.map(str::to_string).ok_or(ModelError::Missing(field))
}
