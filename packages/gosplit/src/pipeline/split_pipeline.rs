//! Split pipeline: load → collect → scratch/format → commit
//!
//! Nothing in the package directory is touched until the formatter has
//! succeeded on every unit.

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::SplitConfig;
use crate::features::commit::{CommitReport, Committer, ScratchDir};
use crate::features::formatting::{resolve_formatter, ImportFormatter};
use crate::features::parsing::{GoParser, Module, PackageLoader};
use crate::features::splitting::{CollectionOrchestrator, UnitSet};
use crate::shared::models::Result;

/// One unit a run would write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedUnit {
    pub filename: String,
    /// Declaration that owns the file
    pub owner: String,
    pub bytes: usize,
}

/// Dry-run result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitPlan {
    pub package: String,
    pub sources: Vec<PathBuf>,
    pub units: Vec<PlannedUnit>,
}

/// Result of a committed run
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub package: String,
    pub formatter: String,
    pub commit: CommitReport,
    pub duration_ms: u64,
}

pub struct SplitPipeline {
    config: SplitConfig,
    formatter: Box<dyn ImportFormatter>,
    loader: PackageLoader<GoParser>,
}

impl SplitPipeline {
    /// Validate `config` and resolve its formatter
    ///
    /// A missing formatter fails here, before any file is parsed.
    pub fn new(config: SplitConfig) -> Result<Self> {
        config.validate()?;
        let formatter = resolve_formatter(&config)?;
        Ok(Self::assemble(config, formatter))
    }

    /// Use `formatter` instead of the configured one
    pub fn with_formatter(config: SplitConfig, formatter: Box<dyn ImportFormatter>) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, formatter))
    }

    fn assemble(config: SplitConfig, formatter: Box<dyn ImportFormatter>) -> Self {
        Self {
            config,
            formatter,
            loader: PackageLoader::new(GoParser::new()),
        }
    }

    /// Units a run would write; modifies nothing
    pub fn plan(&self) -> Result<SplitPlan> {
        let (module, units) = self.collect()?;
        Ok(SplitPlan {
            package: module.package_name,
            sources: module.files,
            units: units
                .iter()
                .map(|unit| PlannedUnit {
                    filename: unit.filename.clone(),
                    owner: unit.owner.clone(),
                    bytes: unit.contents().len(),
                })
                .collect(),
        })
    }

    /// Split the package and replace its files
    pub fn run(&self) -> Result<SplitReport> {
        let start = Instant::now();
        let (module, units) = self.collect()?;
        if units.is_empty() {
            warn!(
                "package {} has no declarations to split; originals are still replaced",
                module.package_name
            );
        }

        let scratch = ScratchDir::new()?;
        scratch.materialize(&units)?;
        self.formatter.format_dir(scratch.path())?;
        let outputs = scratch.collect_outputs(&units)?;

        let committer = if self.config.backup {
            Committer::with_backups(self.config.backup_suffix.as_str())
        } else {
            Committer::without_backups()
        };
        let commit = committer.commit(self.config.dir(), &module.files, &outputs)?;

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "split package {} into {} files in {}ms",
            module.package_name,
            commit.written.len(),
            duration_ms
        );
        Ok(SplitReport {
            package: module.package_name,
            formatter: self.formatter.name().to_string(),
            commit,
            duration_ms,
        })
    }

    fn collect(&self) -> Result<(Module, UnitSet)> {
        info!("loading package from {}", self.config.dir().display());
        let module = self.loader.load(self.config.dir())?;
        let units = CollectionOrchestrator::new(&self.config).collect(&module)?;
        Ok((module, units))
    }
}
