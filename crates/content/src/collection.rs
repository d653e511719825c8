use serde::{Deserialize, Serialize};
use sitekit_core::Schema;
use thiserror::Error;

/// How a collection's source files are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    /// Validated front matter followed by a free-form document body.
    Content,
    /// Front matter only; the body, if any, is ignored.
    Data,
}

/// A named, schema-validated set of content files.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDefinition {
    name: String,
    kind: CollectionKind,
    schema: Schema,
}

impl CollectionDefinition {
    /// Declares a collection.
    pub fn new(name: impl Into<String>, kind: CollectionKind, schema: Schema) -> Self {
        Self {
            name: name.into(),
            kind,
            schema,
        }
    }

    /// The collection's stable name. Renaming it breaks every content
    /// file and consumer relying on it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How source files of this collection are interpreted.
    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    /// The schema its front matter must satisfy.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

/// Errors raised while assembling a collection registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two collections were declared under the same name.
    #[error("collection `{0}` is declared twice")]
    DuplicateCollection(String),
}

/// Every collection the site declares, addressable by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionRegistry {
    collections: Vec<CollectionDefinition>,
}

impl CollectionRegistry {
    /// Builds a registry, rejecting duplicate collection names.
    pub fn from_definitions(
        definitions: Vec<CollectionDefinition>,
    ) -> Result<Self, RegistryError> {
        for (index, def) in definitions.iter().enumerate() {
            if definitions[..index].iter().any(|d| d.name() == def.name()) {
                return Err(RegistryError::DuplicateCollection(def.name().to_string()));
            }
        }
        Ok(Self {
            collections: definitions,
        })
    }

    pub(crate) fn from_distinct(definitions: Vec<CollectionDefinition>) -> Self {
        Self {
            collections: definitions,
        }
    }

    /// Looks up a collection by name.
    pub fn get(&self, name: &str) -> Option<&CollectionDefinition> {
        self.collections.iter().find(|def| def.name() == name)
    }

    /// Whether a collection with this name is declared.
    pub fn is_defined(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Declared collection names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.collections.iter().map(CollectionDefinition::name)
    }

    /// Iterates declarations in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &CollectionDefinition> {
        self.collections.iter()
    }

    /// Number of declared collections.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Whether no collections are declared.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
