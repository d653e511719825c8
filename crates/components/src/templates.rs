//! Templates are page-level components providing the overall structure
//! and layout for different types of pages.

use crate::registry::{ComponentExport, Tier};

/// The template-tier export list.
pub fn templates() -> Vec<ComponentExport> {
    vec![ComponentExport::new(
        "BaseLayout",
        "./BaseLayout.astro",
        Tier::Template,
    )]
}
