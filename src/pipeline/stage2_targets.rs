use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::open_input;
use crate::io::tsv_writer::{is_broken_pipe, open_output};
use crate::mirna::MatchRule;
use crate::pipeline::Stage;
use crate::targets::{NormalizeOptions, normalize_targets};

pub struct Stage2Targets;

impl Stage2Targets {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Targets {
    fn name(&self) -> &'static str {
        "stage2_targets"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let reader = open_input(&ctx.inputs.targets)?;
        let mut writer = open_output(ctx.out.as_deref())?;
        let opts = NormalizeOptions {
            skip_malformed: ctx.skip_malformed,
        };
        let result = normalize_targets(
            reader,
            writer.as_mut(),
            ctx.db,
            &ctx.gene_map,
            &ctx.mirnas,
            opts,
        );
        let stats = match result {
            Ok(stats) => stats,
            Err(err) if ctx.out.is_none() && is_broken_pipe(&err) => {
                info!("stdout closed by reader, stopping early");
                return Ok(());
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("failed to map targets {}", ctx.inputs.targets.display())
                });
            }
        };

        info!(
            lines = stats.lines,
            emitted = stats.emitted,
            non_human = stats.non_human,
            malformed = stats.malformed,
            blank = stats.blank,
            "targets_mapped"
        );
        for rule in MatchRule::ALL {
            info!(rule = rule.name(), hits = stats.rule_count(rule), "match_rule");
        }
        ctx.stats = Some(stats);
        Ok(())
    }
}
