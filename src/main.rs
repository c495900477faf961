use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kira_mirmap::cli::Cli;
use kira_mirmap::ctx::{Ctx, InputPaths};
use kira_mirmap::pipeline::Pipeline;
use kira_mirmap::targets::TargetDb;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db: TargetDb = cli.db.parse()?;

    let mut ctx = Ctx::new(
        InputPaths {
            mirna: cli.mirna,
            targets: cli.targets,
            mapping: cli.mapping,
        },
        db,
    );
    ctx.out = cli.out;
    ctx.skip_malformed = cli.skip_malformed;

    Pipeline::standard().run(&mut ctx)?;
    Ok(())
}
