//! Organisms are complex components composed of atoms and molecules;
//! they form distinct sections of an interface.

use crate::registry::{ComponentExport, Tier};

fn organism(name: &str) -> ComponentExport {
    ComponentExport::new(name, format!("./{name}.astro"), Tier::Organism)
}

/// The organism-tier export list.
pub fn organisms() -> Vec<ComponentExport> {
    ["Header1", "Header2", "Hero1", "Section1", "Section2", "Footer"]
        .into_iter()
        .map(organism)
        .collect()
}
