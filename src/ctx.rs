use std::path::PathBuf;

use crate::mapping::GeneMap;
use crate::mirna::CanonicalSet;
use crate::targets::{RunStats, TargetDb};

#[derive(Debug, Clone)]
pub struct InputPaths {
    pub mirna: PathBuf,
    pub targets: PathBuf,
    pub mapping: Option<PathBuf>,
}

#[derive(Debug)]
pub struct Ctx {
    pub inputs: InputPaths,
    pub db: TargetDb,
    pub out: Option<PathBuf>,
    pub skip_malformed: bool,
    pub gene_map: GeneMap,
    pub mirnas: CanonicalSet,
    pub stats: Option<RunStats>,
}

impl Ctx {
    pub fn new(inputs: InputPaths, db: TargetDb) -> Self {
        Self {
            inputs,
            db,
            out: None,
            skip_malformed: false,
            gene_map: GeneMap::new(),
            mirnas: CanonicalSet::new(),
            stats: None,
        }
    }
}
