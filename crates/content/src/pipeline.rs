use crate::collection::CollectionRegistry;
use crate::entry::{ContentError, Entry, load_entry};
use crate::resolve::resolve_references;
use log::debug;

/// A content source file handed to the loader.
#[derive(Debug, Clone, Copy)]
pub struct SourceFile<'a> {
    /// Collection the file belongs to.
    pub collection: &'a str,
    /// File name, including extension; the entry id derives from it.
    pub file_name: &'a str,
    /// Raw file contents.
    pub text: &'a str,
}

/// Every entry the loader produced, queryable by collection and id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteContent {
    entries: Vec<Entry>,
}

impl SiteContent {
    /// All entries, in load order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries of one collection, in load order.
    pub fn collection<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Entry> {
        self.entries
            .iter()
            .filter(move |entry| entry.collection() == name)
    }

    /// Looks up one entry by collection and identity key.
    pub fn get(&self, collection: &str, id: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| entry.collection() == collection && entry.id() == id)
    }
}

/// Loads and validates every source file, then resolves references.
///
/// Each file is validated independently against its collection's schema;
/// duplicate identity keys within a collection are rejected. Reference
/// resolution runs last, once the full entry set is known. The first
/// failure aborts the load: static content either builds or it does not.
pub fn load_collections(
    registry: &CollectionRegistry,
    sources: &[SourceFile<'_>],
) -> Result<SiteContent, ContentError> {
    let mut entries: Vec<Entry> = Vec::new();

    for source in sources {
        let def = registry
            .get(source.collection)
            .ok_or_else(|| ContentError::UnknownCollection(source.collection.to_string()))?;
        let entry = load_entry(def, source.file_name, source.text)?;

        let duplicate = entries
            .iter()
            .any(|seen| seen.collection() == entry.collection() && seen.id() == entry.id());
        if duplicate {
            return Err(ContentError::DuplicateId {
                collection: entry.collection().to_string(),
                id: entry.id().to_string(),
                file: source.file_name.to_string(),
            });
        }
        entries.push(entry);
    }

    debug!("loaded {} entr(ies), resolving references", entries.len());
    resolve_references(registry, &entries)?;

    Ok(SiteContent { entries })
}
