//! Registry of species treated as endangered.

#![forbid(unsafe_code)]

use std::collections::BTreeSet;

const DEFAULT_SPECIES: [&str; 14] = [
    "Panthera tigris",
    "Panthera leo",
    "Panthera onca",
    "Snow Leopard",
    "Elephas maximus",
    "Rhinoceros unicornis",
    "Gorilla beringei",
    "Pongo abelii",
    "Ailuropoda melanoleuca",
    "Vultur gryphus",
    "Aquila chrysaetos",
    "Crocodylus niloticus",
    "Python reticulatus",
    "Macaca fascicularis",
];

/// Set of species names that raise the endangered signal.
///
/// Membership is an exact, case-sensitive match on the name supplied by
/// the caller.
///
/// # Examples
/// ```
/// use biosentinel_scorer::EndangeredRegistry;
///
/// let registry = EndangeredRegistry::default();
/// assert!(registry.contains("Panthera tigris"));
/// assert!(!registry.contains("panthera tigris"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndangeredRegistry {
    names: BTreeSet<String>,
}

impl EndangeredRegistry {
    /// A registry with no species.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Add a species, returning `self` for chaining.
    #[must_use]
    pub fn with_species(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    /// Report whether `species` is registered.
    #[must_use]
    pub fn contains(&self, species: &str) -> bool {
        self.names.contains(species)
    }

    /// Registered names in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of registered species.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Report whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for EndangeredRegistry {
    fn default() -> Self {
        DEFAULT_SPECIES.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for EndangeredRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_registry_lists_fourteen_species() {
        let registry = EndangeredRegistry::default();
        assert_eq!(registry.len(), 14);
        assert!(registry.contains("Macaca fascicularis"));
        assert!(registry.contains("Snow Leopard"));
    }

    #[rstest]
    #[case("Vulpes vulpes")]
    #[case("Panthera tigris ")]
    #[case("")]
    fn non_members_are_rejected(#[case] species: &str) {
        assert!(!EndangeredRegistry::default().contains(species));
    }

    #[rstest]
    fn custom_registry_extends_empty() {
        let registry = EndangeredRegistry::empty().with_species("Lynx pardinus");
        assert!(registry.contains("Lynx pardinus"));
        assert_eq!(registry.iter().collect::<Vec<_>>(), ["Lynx pardinus"]);
        assert!(!EndangeredRegistry::empty().contains("Panthera tigris"));
        assert!(EndangeredRegistry::empty().is_empty());
    }
}
