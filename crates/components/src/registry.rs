use crate::variant::split_variant;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Atomic-design tier a component export belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Smallest building blocks: buttons, inputs, badges.
    Atom,
    /// Simple groups of atoms with a single purpose: cards, form fields.
    Molecule,
    /// Complex sections composed of atoms and molecules: headers, heroes.
    Organism,
    /// Page-level layouts.
    Template,
}

impl Tier {
    /// Every tier, from least to most composite.
    pub const ALL: [Tier; 4] = [Tier::Atom, Tier::Molecule, Tier::Organism, Tier::Template];

    /// The tier's lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Atom => "atom",
            Tier::Molecule => "molecule",
            Tier::Organism => "organism",
            Tier::Template => "template",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named export aliasing a template file.
///
/// The Rust mirror of a single barrel-file line: a stable public name
/// bound to the template that implements it. An export name with a
/// numeric suffix (`Card1`, `Card2`) is one structural variant among
/// several; an unsuffixed name has a single implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentExport {
    /// Public import name. Renaming it breaks every importer.
    pub name: String,
    /// Path of the template file the name aliases.
    pub template_path: String,
    /// Tier the export is grouped under.
    pub tier: Tier,
}

impl ComponentExport {
    /// Declares an export.
    pub fn new(name: impl Into<String>, template_path: impl Into<String>, tier: Tier) -> Self {
        Self {
            name: name.into(),
            template_path: template_path.into(),
            tier,
        }
    }
}

/// A superseded export name kept importable for existing consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportAlias {
    /// The old name.
    pub alias: String,
    /// The current export it forwards to.
    pub target: String,
}

impl ExportAlias {
    /// Declares an alias.
    pub fn new(alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            target: target.into(),
        }
    }
}

/// Invariant violations in an export surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two exports share a name.
    #[error("component `{0}` is exported twice")]
    DuplicateExport(String),
    /// An alias uses a name that is also a real export.
    #[error("alias `{0}` shadows an export of the same name")]
    AliasShadowsExport(String),
    /// An alias forwards to a name nothing exports.
    #[error("alias `{alias}` targets unknown export `{target}`")]
    DanglingAlias {
        /// The alias at fault.
        alias: String,
        /// The missing target name.
        target: String,
    },
}

/// A component export surface: the full set of public names importers may
/// rely on, plus backward-compatible aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRegistry {
    /// Canonical exports.
    pub exports: Vec<ComponentExport>,
    /// Superseded names still importable.
    #[serde(default)]
    pub aliases: Vec<ExportAlias>,
}

impl ComponentRegistry {
    /// Looks up an export by its exact canonical name.
    pub fn get(&self, name: &str) -> Option<&ComponentExport> {
        self.exports.iter().find(|export| export.name == name)
    }

    /// Resolves a name to an export, following one alias hop.
    pub fn resolve(&self, name: &str) -> Option<&ComponentExport> {
        if let Some(export) = self.get(name) {
            return Some(export);
        }
        self.aliases
            .iter()
            .find(|alias| alias.alias == name)
            .and_then(|alias| self.get(&alias.target))
    }

    /// Whether the name is importable, canonically or via alias.
    pub fn is_exported(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Exports grouped under one tier, in declaration order.
    pub fn exports_in(&self, tier: Tier) -> impl Iterator<Item = &ComponentExport> {
        self.exports.iter().filter(move |export| export.tier == tier)
    }

    /// All structural variants of a base name, `Card` yielding `Card1`
    /// and `Card2`. An unsuffixed export of the base name counts as its
    /// only variant.
    pub fn variants_of(&self, base: &str) -> Vec<&ComponentExport> {
        self.exports
            .iter()
            .filter(|export| split_variant(&export.name).0 == base)
            .collect()
    }

    /// Checks the surface's invariants: no duplicate export names, no
    /// alias shadowing a real export, no alias to a missing target.
    pub fn verify(&self) -> Result<(), RegistryError> {
        for (index, export) in self.exports.iter().enumerate() {
            if self.exports[..index].iter().any(|e| e.name == export.name) {
                return Err(RegistryError::DuplicateExport(export.name.clone()));
            }
        }
        for alias in &self.aliases {
            if self.get(&alias.alias).is_some() {
                return Err(RegistryError::AliasShadowsExport(alias.alias.clone()));
            }
            if self.get(&alias.target).is_none() {
                return Err(RegistryError::DanglingAlias {
                    alias: alias.alias.clone(),
                    target: alias.target.clone(),
                });
            }
        }
        Ok(())
    }

    /// Number of canonical exports.
    pub fn len(&self) -> usize {
        self.exports.len()
    }

    /// Whether the surface exports nothing.
    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ComponentRegistry {
        ComponentRegistry {
            exports: vec![
                ComponentExport::new("Button", "./Button.astro", Tier::Atom),
                ComponentExport::new("Card1", "./Card1.astro", Tier::Molecule),
                ComponentExport::new("Card2", "./Card2.astro", Tier::Molecule),
            ],
            aliases: vec![ExportAlias::new("Card", "Card1")],
        }
    }

    #[test]
    fn get_is_exact_and_resolve_follows_aliases() {
        let registry = sample();
        assert_eq!(registry.get("Card1").unwrap().tier, Tier::Molecule);
        assert!(registry.get("Card").is_none());
        assert_eq!(registry.resolve("Card").unwrap().name, "Card1");
        assert!(registry.is_exported("Card"));
        assert!(!registry.is_exported("Modal"));
    }

    #[test]
    fn exports_in_filters_by_tier() {
        let registry = sample();
        assert_eq!(registry.exports_in(Tier::Molecule).count(), 2);
        assert_eq!(registry.exports_in(Tier::Template).count(), 0);
    }

    #[test]
    fn variants_group_by_base_name() {
        let registry = sample();
        let cards: Vec<_> = registry
            .variants_of("Card")
            .into_iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(cards, ["Card1", "Card2"]);
        assert_eq!(registry.variants_of("Button").len(), 1);
        assert!(registry.variants_of("Modal").is_empty());
    }

    #[test]
    fn verify_accepts_a_sound_surface() {
        assert!(sample().verify().is_ok());
    }

    #[test]
    fn verify_rejects_duplicate_exports() {
        let mut registry = sample();
        registry
            .exports
            .push(ComponentExport::new("Button", "./Button2.astro", Tier::Atom));
        assert_eq!(
            registry.verify().unwrap_err(),
            RegistryError::DuplicateExport("Button".into())
        );
    }

    #[test]
    fn verify_rejects_shadowing_aliases() {
        let mut registry = sample();
        registry.aliases.push(ExportAlias::new("Button", "Card1"));
        assert_eq!(
            registry.verify().unwrap_err(),
            RegistryError::AliasShadowsExport("Button".into())
        );
    }

    #[test]
    fn verify_rejects_dangling_aliases() {
        let mut registry = sample();
        registry.aliases.push(ExportAlias::new("NavLink", "NavLink1"));
        assert_eq!(
            registry.verify().unwrap_err(),
            RegistryError::DanglingAlias {
                alias: "NavLink".into(),
                target: "NavLink1".into()
            }
        );
    }

    #[test]
    fn tier_names_are_stable() {
        assert_eq!(Tier::Atom.to_string(), "atom");
        assert_eq!(Tier::ALL.len(), 4);
    }
}
