//! The assembled site-wide export surface.

use crate::atoms::atoms;
use crate::molecules::molecules;
use crate::organisms::organisms;
use crate::registry::{ComponentRegistry, ExportAlias};
use crate::templates::templates;

/// Earlier export names superseded by the numeric-suffix surface.
///
/// Kept importable so existing consumers don't break; new code should use
/// the canonical suffixed names.
pub fn legacy_aliases() -> Vec<ExportAlias> {
    vec![
        ExportAlias::new("Card", "Card1"),
        ExportAlias::new("NavLink", "NavLink1"),
        ExportAlias::new("Header", "Header1"),
        ExportAlias::new("Section", "Section1"),
    ]
}

/// The site's full component export surface: every tier's exports plus
/// the legacy aliases.
///
/// Pure and idempotent; tests pin its invariants via
/// [`ComponentRegistry::verify`].
pub fn site_component_registry() -> ComponentRegistry {
    let mut exports = atoms();
    exports.extend(molecules());
    exports.extend(organisms());
    exports.extend(templates());

    ComponentRegistry {
        exports,
        aliases: legacy_aliases(),
    }
}
