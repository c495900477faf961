use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};

use crate::io::{lossy_lines, open_input};
use crate::mapping::GeneMap;

pub fn load_gene_map(path: &Path) -> Result<GeneMap> {
    let reader = open_input(path)?;
    parse_gene_map(reader)
        .with_context(|| format!("failed to read gene mapping {}", path.display()))
}

/// Lines with fewer than two whitespace-separated fields are ignored.
pub fn parse_gene_map<R: BufRead>(reader: R) -> Result<GeneMap> {
    let mut map = GeneMap::new();
    for line in lossy_lines(reader) {
        let line = line?;
        let mut fields = line.split_whitespace();
        if let (Some(symbol), Some(replacement)) = (fields.next(), fields.next()) {
            map.insert(symbol, replacement);
        }
    }
    Ok(map)
}
