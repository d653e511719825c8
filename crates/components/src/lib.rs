#![deny(missing_docs)]
//! sitekit components: the site's component export surface, organized by
//! atomic-design tier.

/// Atom-tier exports, the smallest building blocks.
pub mod atoms;
/// Molecule-tier exports, simple component groups.
pub mod molecules;
/// Organism-tier exports, complex interface sections.
pub mod organisms;
/// Export registry types and accessors.
pub mod registry;
/// The assembled site-wide export surface.
pub mod surface;
/// Template-tier exports, page-level layouts.
pub mod templates;
/// Numeric-suffix variant naming support.
pub mod variant;

pub use atoms::atoms;
pub use molecules::molecules;
pub use organisms::organisms;
pub use registry::{ComponentExport, ComponentRegistry, ExportAlias, RegistryError, Tier};
pub use surface::{legacy_aliases, site_component_registry};
pub use templates::templates;
pub use variant::split_variant;
