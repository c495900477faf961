use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::mirna::load_canonical_set;
use crate::pipeline::Stage;

pub struct Stage1Mirna;

impl Stage1Mirna {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Mirna {
    fn name(&self) -> &'static str {
        "stage1_mirna"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        ctx.mirnas = load_canonical_set(&ctx.inputs.mirna)?;
        if ctx.mirnas.is_empty() {
            warn!(
                path = %ctx.inputs.mirna.display(),
                "reference holds no hsa identifiers, every name will fall back"
            );
        }
        info!(canonical = ctx.mirnas.len(), "mirna_set_loaded");
        Ok(())
    }
}
