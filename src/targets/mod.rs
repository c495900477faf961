mod normalize;

use std::fmt;
use std::str::FromStr;

use crate::error::MirmapError;

pub use normalize::{NormalizeOptions, RunStats, normalize_targets};

/// Column layout of the target-prediction file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetDb {
    /// Tab-separated, miRNA in column 0, gene in column 1.
    Mirdb,
    /// Comma-separated, miRNA in column 1, gene in column 3.
    Mirtarbase,
}

impl TargetDb {
    pub fn separator(self) -> char {
        match self {
            TargetDb::Mirdb => '\t',
            TargetDb::Mirtarbase => ',',
        }
    }

    /// (miRNA column, gene column)
    pub fn columns(self) -> (usize, usize) {
        match self {
            TargetDb::Mirdb => (0, 1),
            TargetDb::Mirtarbase => (1, 3),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TargetDb::Mirdb => "mirdb",
            TargetDb::Mirtarbase => "mirtarbase",
        }
    }
}

impl FromStr for TargetDb {
    type Err = MirmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mirdb" => Ok(TargetDb::Mirdb),
            "mirtarbase" => Ok(TargetDb::Mirtarbase),
            other => Err(MirmapError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for TargetDb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRecord {
    pub mirna: String,
    pub gene: String,
}

pub fn normalize_mirna(raw: &str) -> String {
    raw.replace("mir", "miR")
}

/// Parses one targets line. `line_no` is 1-based and only used in errors.
pub fn parse_record(
    line: &str,
    db: TargetDb,
    line_no: usize,
) -> Result<TargetRecord, MirmapError> {
    let cols: Vec<&str> = line.trim().split(db.separator()).collect();
    let (mirna_col, gene_col) = db.columns();
    let needed = mirna_col.max(gene_col) + 1;
    if cols.len() < needed {
        return Err(MirmapError::MalformedRecord {
            line: line_no,
            expected: needed,
            found: cols.len(),
        });
    }
    Ok(TargetRecord {
        mirna: normalize_mirna(cols[mirna_col]),
        gene: cols[gene_col].to_lowercase(),
    })
}
