use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};

use crate::io::{lossy_lines, open_input};
use crate::mirna::CanonicalSet;

pub fn load_canonical_set(path: &Path) -> Result<CanonicalSet> {
    let reader = open_input(path)?;
    parse_canonical_set(reader)
        .with_context(|| format!("failed to read miRNA reference {}", path.display()))
}

pub fn parse_canonical_set<R: BufRead>(reader: R) -> Result<CanonicalSet> {
    let mut set = CanonicalSet::new();
    for line in lossy_lines(reader) {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }
        if let Some(id) = line.trim().split('\t').next() {
            set.insert(id);
        }
    }
    Ok(set)
}
