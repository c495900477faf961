use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kira-mirmap", version, about = "Map miRNA-mRNA targets onto canonical miRNA names")]
pub struct Cli {
    #[arg(long, help = "Reference miRNA TSV (first column is the identifier, '#' comments)")]
    pub mirna: PathBuf,

    #[arg(long, help = "Target-prediction file in the layout selected by --db")]
    pub targets: PathBuf,

    #[arg(long, help = "Target database layout: mirdb|mirtarbase")]
    pub db: String,

    #[arg(long, help = "Optional gene symbol translation file (whitespace-separated)")]
    pub mapping: Option<PathBuf>,

    #[arg(long, help = "Write the mapping here instead of stdout")]
    pub out: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = false,
        help = "Skip target lines with too few columns instead of failing"
    )]
    pub skip_malformed: bool,
}
