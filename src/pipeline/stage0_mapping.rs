use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::mapping::load_gene_map;
use crate::pipeline::Stage;

pub struct Stage0Mapping;

impl Stage0Mapping {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Mapping {
    fn name(&self) -> &'static str {
        "stage0_mapping"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Some(path) = &ctx.inputs.mapping else {
            info!("no gene mapping given, gene names pass through");
            return Ok(());
        };
        ctx.gene_map = load_gene_map(path)?;
        info!(
            path = %path.display(),
            entries = ctx.gene_map.len(),
            "gene_map_loaded"
        );
        Ok(())
    }
}
