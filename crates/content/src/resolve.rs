use crate::collection::CollectionRegistry;
use crate::entry::Entry;
use log::warn;
use sitekit_core::FieldType;
use std::collections::{HashMap, HashSet};

/// One cross-collection reference that names a nonexistent entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    /// Collection of the referring entry.
    pub collection: String,
    /// Identity key of the referring entry.
    pub entry: String,
    /// The reference-typed field.
    pub field: String,
    /// Collection the reference points into.
    pub target_collection: String,
    /// The slug that resolved to nothing.
    pub slug: String,
}

impl std::fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}: field `{}` references `{}` which is not in `{}`",
            self.collection, self.entry, self.field, self.slug, self.target_collection
        )
    }
}

/// All dangling references found in one resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceErrors {
    /// Every dangling reference, in entry order.
    pub dangling: Vec<DanglingReference>,
}

impl std::fmt::Display for ReferenceErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} unresolved reference(s)", self.dangling.len())?;
        for dangling in &self.dangling {
            write!(f, "; {dangling}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ReferenceErrors {}

/// Checks every reference-typed field against the loaded entry set.
///
/// Schema validation deliberately leaves existence unchecked: only here,
/// with the full entry set in hand, can a slug be declared dangling. The
/// caller must therefore pass all entries of every referenced collection;
/// there is no ordering requirement beyond that.
pub fn resolve_references(
    registry: &CollectionRegistry,
    entries: &[Entry],
) -> Result<(), ReferenceErrors> {
    let mut ids: HashMap<&str, HashSet<&str>> = HashMap::new();
    for entry in entries {
        ids.entry(entry.collection()).or_default().insert(entry.id());
    }

    let mut dangling = Vec::new();
    for entry in entries {
        let Some(def) = registry.get(entry.collection()) else {
            continue;
        };
        for (field, spec) in def.schema().fields() {
            let FieldType::Reference { collection: target } = &spec.ty else {
                continue;
            };
            let Some(slug) = entry.data().reference(field) else {
                continue;
            };
            let exists = ids
                .get(target.as_str())
                .is_some_and(|known| known.contains(slug));
            if !exists {
                warn!(
                    "entry `{}` references missing `{target}` entry `{slug}`",
                    entry.id()
                );
                dangling.push(DanglingReference {
                    collection: entry.collection().to_string(),
                    entry: entry.id().to_string(),
                    field: field.to_string(),
                    target_collection: target.clone(),
                    slug: slug.to_string(),
                });
            }
        }
    }

    if dangling.is_empty() {
        Ok(())
    } else {
        Err(ReferenceErrors { dangling })
    }
}
