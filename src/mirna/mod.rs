mod loader;
mod resolve;

use std::collections::HashSet;

pub use loader::{load_canonical_set, parse_canonical_set};
pub use resolve::{MatchRule, Resolved, resolve_name};

pub const HUMAN_PREFIX: &str = "hsa";

/// Canonical human miRNA identifiers. Only `hsa`-prefixed names are admitted.
#[derive(Debug, Clone, Default)]
pub struct CanonicalSet {
    names: HashSet<String>,
}

impl CanonicalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when `name` is not a human identifier or already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if !name.starts_with(HUMAN_PREFIX) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CanonicalSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = CanonicalSet::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}
