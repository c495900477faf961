mod loader;

use std::collections::HashMap;

pub use loader::{load_gene_map, parse_gene_map};

/// Lowercase gene symbol -> replacement symbol.
#[derive(Debug, Clone, Default)]
pub struct GeneMap {
    entries: HashMap<String, String>,
}

impl GeneMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: &str, replacement: &str) {
        self.entries.insert(symbol.to_lowercase(), replacement.to_string());
    }

    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.entries.get(symbol).map(String::as_str)
    }

    /// Translated symbol, or `gene` unchanged when it has no entry.
    pub fn resolve<'a>(&'a self, gene: &'a str) -> &'a str {
        self.get(gene).unwrap_or(gene)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
