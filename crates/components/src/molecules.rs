//! Molecules are combinations of atoms that form simple, reusable
//! component groups with a single purpose: cards, form fields, nav links.

use crate::registry::{ComponentExport, Tier};

fn molecule(name: &str) -> ComponentExport {
    ComponentExport::new(name, format!("./{name}.astro"), Tier::Molecule)
}

/// The molecule-tier export list.
///
/// Suffixed names are structural variants of one conceptual component;
/// `FormField` kept its name across the surface rework because only one
/// implementation exists.
pub fn molecules() -> Vec<ComponentExport> {
    ["Card1", "Card2", "FormField", "NavLink1"]
        .into_iter()
        .map(molecule)
        .collect()
}
