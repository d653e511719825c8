use crate::collection::{CollectionDefinition, CollectionKind, CollectionRegistry};
use serde_json::json;
use sitekit_core::{FieldSpec, FieldType, Schema};

/// Name of the blog-post collection. Part of the on-disk contract.
pub const BLOG: &str = "blog";
/// Name of the category collection. Part of the on-disk contract.
pub const CATEGORIES: &str = "categories";

/// Schema for `categories` entries.
///
/// A category's identity key is the slug of its file name, not a field.
pub fn categories_schema() -> Schema {
    Schema::new()
        .field("name", FieldSpec::required(FieldType::Text))
        .field("description", FieldSpec::required(FieldType::Text))
        .field("color", FieldSpec::optional(FieldType::Text))
}

/// Schema for `blog` entries.
pub fn blog_schema() -> Schema {
    Schema::new()
        .field("title", FieldSpec::required(FieldType::Text))
        .field("description", FieldSpec::required(FieldType::Text))
        .field("pubDate", FieldSpec::required(FieldType::Date))
        .field("updatedDate", FieldSpec::optional(FieldType::Date))
        .field("heroImage", FieldSpec::optional(FieldType::Text))
        .field("category", FieldSpec::required(FieldType::reference(CATEGORIES)))
        .field("author", FieldSpec::with_default(FieldType::Text, json!("Admin")))
        .field("draft", FieldSpec::with_default(FieldType::Bool, json!(false)))
}

/// Declares the site's content collections.
///
/// Pure and idempotent: calling it again yields an identical registry.
pub fn site_collections() -> CollectionRegistry {
    CollectionRegistry::from_distinct(vec![
        CollectionDefinition::new(BLOG, CollectionKind::Content, blog_schema()),
        CollectionDefinition::new(CATEGORIES, CollectionKind::Content, categories_schema()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_collections_are_declared() {
        let registry = site_collections();
        assert_eq!(registry.len(), 2);
        assert!(registry.is_defined(BLOG));
        assert!(registry.is_defined(CATEGORIES));
        assert_eq!(
            registry.get(BLOG).unwrap().kind(),
            CollectionKind::Content
        );
        assert_eq!(
            registry.get(CATEGORIES).unwrap().kind(),
            CollectionKind::Content
        );
    }

    #[test]
    fn blog_schema_matches_the_content_contract() {
        let schema = blog_schema();
        for required in ["title", "description", "pubDate", "category"] {
            assert!(schema.get(required).unwrap().required, "{required}");
        }
        for optional in ["updatedDate", "heroImage", "author", "draft"] {
            assert!(!schema.get(optional).unwrap().required, "{optional}");
        }
        assert_eq!(
            schema.get("category").unwrap().ty,
            FieldType::reference(CATEGORIES)
        );
        assert_eq!(schema.get("author").unwrap().default, Some(json!("Admin")));
        assert_eq!(schema.get("draft").unwrap().default, Some(json!(false)));
    }

    #[test]
    fn categories_schema_matches_the_content_contract() {
        let schema = categories_schema();
        assert!(schema.get("name").unwrap().required);
        assert!(schema.get("description").unwrap().required);
        let color = schema.get("color").unwrap();
        assert!(!color.required);
        assert!(color.default.is_none());
    }

    #[test]
    fn declaration_is_idempotent() {
        assert_eq!(site_collections(), site_collections());
    }
}
