//! How the build uses each required module.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The way the project's build reaches a dependency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DependencyUse {
    /// Imported by the project's own packages.
    Direct,
    /// Reached only through other dependencies.
    Transitive,
    /// Not needed by the build at all.
    Unused,
}

/// Per-module dependency facts for one snapshot.
///
/// A module path with no entry is unknown; analysis never infers a fact for
/// it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildGraphFacts {
    uses: HashMap<String, DependencyUse>,
}

impl BuildGraphFacts {
    /// Creates an empty fact set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fact, returning the updated set.
    #[must_use]
    pub fn with_use(mut self, path: impl Into<String>, usage: DependencyUse) -> Self {
        self.insert(path, usage);
        self
    }

    /// Records how `path` is used, replacing any previous fact.
    pub fn insert(&mut self, path: impl Into<String>, usage: DependencyUse) {
        self.uses.insert(path.into(), usage);
    }

    /// Looks up the fact for a module path.
    #[must_use]
    pub fn use_of(&self, path: &str) -> Option<DependencyUse> {
        self.uses.get(path).copied()
    }

    /// Number of modules with a known fact.
    #[must_use]
    pub fn len(&self) -> usize {
        self.uses.len()
    }

    /// Returns true when no facts are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uses.is_empty()
    }

    /// Iterates over all known facts in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, DependencyUse)> {
        self.uses.iter().map(|(path, usage)| (path.as_str(), *usage))
    }
}

impl<P: Into<String>> FromIterator<(P, DependencyUse)> for BuildGraphFacts {
    fn from_iter<I: IntoIterator<Item = (P, DependencyUse)>>(iter: I) -> Self {
        Self {
            uses: iter
                .into_iter()
                .map(|(path, usage)| (path.into(), usage))
                .collect(),
        }
    }
}
