//! Atoms are the smallest, most fundamental components; they cannot be
//! broken down further without losing their meaning.

use crate::registry::{ComponentExport, Tier};

fn atom(name: &str) -> ComponentExport {
    ComponentExport::new(name, format!("./{name}.astro"), Tier::Atom)
}

/// The atom-tier export list. All atoms have a single structural
/// implementation, so none carry a variant suffix.
pub fn atoms() -> Vec<ComponentExport> {
    ["Button", "Input", "Badge", "Text"]
        .into_iter()
        .map(atom)
        .collect()
}
