use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_mapping;
pub mod stage1_mirna;
pub mod stage2_targets;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

/// Runs its stages in order over one `Ctx`; the first error stops the run.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Gene map, canonical set, then the targets stream.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(stage0_mapping::Stage0Mapping::new()),
            Box::new(stage1_mirna::Stage1Mirna::new()),
            Box::new(stage2_targets::Stage2Targets::new()),
        ])
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        info!(
            db = %ctx.db,
            targets = %ctx.inputs.targets.display(),
            "mapping run started"
        );
        let run_start = Instant::now();
        for stage in &self.stages {
            let start = Instant::now();
            let outcome = stage.run(ctx);
            let elapsed_ms = start.elapsed().as_millis() as u64;
            let emitted = ctx.stats.as_ref().map_or(0, |s| s.emitted);
            match outcome {
                Ok(()) => info!(
                    stage = stage.name(),
                    elapsed_ms,
                    gene_map = ctx.gene_map.len(),
                    canonical = ctx.mirnas.len(),
                    emitted,
                    "stage finished"
                ),
                Err(err) => {
                    warn!(
                        stage = stage.name(),
                        elapsed_ms,
                        gene_map = ctx.gene_map.len(),
                        canonical = ctx.mirnas.len(),
                        "stage failed, no further output"
                    );
                    return Err(err);
                }
            }
        }
        info!(
            elapsed_ms = run_start.elapsed().as_millis() as u64,
            "mapping run finished"
        );
        Ok(())
    }
}
