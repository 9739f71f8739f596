//! Scratch workspace

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use tracing::debug;

use crate::features::splitting::domain::UnitSet;
use crate::shared::models::{Result, SplitError};

const SCRATCH_PREFIX: &str = "gosplit-";

/// Final bytes of one unit, ready to commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub filename: String,
    pub contents: Vec<u8>,
}

/// Temporary directory holding the units while they are formatted
///
/// Removed on drop.
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempdir()
            .map_err(|e| SplitError::io(std::env::temp_dir(), e))?;
        debug!("scratch directory {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write every unit into the scratch directory
    pub fn materialize(&self, units: &UnitSet) -> Result<()> {
        for unit in units.iter() {
            let path = self.path().join(&unit.filename);
            fs::write(&path, unit.contents()).map_err(|e| SplitError::io(&path, e))?;
        }
        Ok(())
    }

    /// Read back the (possibly reformatted) units, in unit order
    pub fn collect_outputs(&self, units: &UnitSet) -> Result<Vec<GeneratedFile>> {
        units
            .iter()
            .map(|unit| {
                let path = self.path().join(&unit.filename);
                let contents = fs::read(&path).map_err(|e| SplitError::io(&path, e))?;
                Ok(GeneratedFile {
                    filename: unit.filename.clone(),
                    contents,
                })
            })
            .collect()
    }
}
