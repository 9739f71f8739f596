//! `goimports -w <dir>` subprocess

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::features::formatting::ports::ImportFormatter;
use crate::shared::models::{Result, SplitError};

/// goimports (or a compatible tool) resolved on PATH
#[derive(Debug, Clone)]
pub struct GoImports {
    program: String,
    path: PathBuf,
}

impl GoImports {
    /// Locate `program` on PATH
    pub fn resolve(program: &str) -> Result<Self> {
        let path = which::which(program).map_err(|_| SplitError::FormatterNotFound {
            program: program.to_string(),
        })?;
        debug!("resolved {} at {}", program, path.display());
        Ok(Self {
            program: program.to_string(),
            path,
        })
    }
}

impl ImportFormatter for GoImports {
    fn name(&self) -> &str {
        &self.program
    }

    fn format_dir(&self, dir: &Path) -> Result<()> {
        info!("running {} -w {}", self.program, dir.display());
        let output = Command::new(&self.path)
            .arg("-w")
            .arg(dir)
            .output()
            .map_err(|e| SplitError::io(&self.path, e))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(SplitError::Formatter {
                tool: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}
