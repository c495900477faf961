use std::collections::HashMap;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::warn;

use crate::error::MirmapError;
use crate::io::lossy_lines;
use crate::io::tsv_writer::write_pair;
use crate::mapping::GeneMap;
use crate::mirna::{CanonicalSet, HUMAN_PREFIX, MatchRule, resolve_name};
use crate::targets::{TargetDb, parse_record};

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    pub skip_malformed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lines: usize,
    pub blank: usize,
    pub non_human: usize,
    pub malformed: usize,
    pub emitted: usize,
    pub rules: HashMap<MatchRule, usize>,
}

impl RunStats {
    pub fn rule_count(&self, rule: MatchRule) -> usize {
        self.rules.get(&rule).copied().unwrap_or(0)
    }
}

/// Streams `reader`, writing one `<miRNA>\t<gene>` line per human record.
pub fn normalize_targets<R, W>(
    reader: R,
    writer: &mut W,
    db: TargetDb,
    gene_map: &GeneMap,
    mirnas: &CanonicalSet,
    opts: NormalizeOptions,
) -> Result<RunStats>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut stats = RunStats::default();

    for (idx, line) in lossy_lines(reader).enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("failed to read line {}", line_no))?;
        stats.lines += 1;
        if line.trim().is_empty() {
            stats.blank += 1;
            continue;
        }

        let record = match parse_record(&line, db, line_no) {
            Ok(record) => record,
            Err(err @ MirmapError::MalformedRecord { .. }) if opts.skip_malformed => {
                warn!(line = line_no, error = %err, "skipping malformed record");
                stats.malformed += 1;
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        if !record.mirna.starts_with(HUMAN_PREFIX) {
            stats.non_human += 1;
            continue;
        }

        let gene = gene_map.resolve(&record.gene);
        let resolved = resolve_name(&record.mirna, mirnas);
        write_pair(writer, &resolved.name, gene)?;

        *stats.rules.entry(resolved.rule).or_insert(0) += 1;
        stats.emitted += 1;
    }

    writer.flush()?;
    Ok(stats)
}
