//! Committer: swaps the original package files for the generated units
//!
//! Originals are moved aside (renamed to `<file><suffix>`) or, with backups
//! disabled, read into memory and removed. Units are written only once every
//! original is out of the way. A failure at any step undoes what was done
//! so far, best effort, and reports the step that failed.
//!
//! Before anything moves, every unit is checked against the directory: a
//! unit may replace an original but never another file, and never a name
//! that `go build` would treat as a test file. An existing backup is never
//! overwritten; the next free `<file><suffix>.N` is used instead.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use super::scratch::GeneratedFile;
use crate::features::splitting::infrastructure::{special_filename, SpecialFilename};
use crate::shared::models::{Result, SplitError};

/// What a commit changed in the package directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitReport {
    pub written: Vec<PathBuf>,
    pub backups: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

/// Where an original went, so it can be put back
enum Displaced {
    Renamed { original: PathBuf, backup: PathBuf },
    Removed { original: PathBuf, contents: Vec<u8> },
}

pub struct Committer {
    backup_suffix: Option<String>,
}

impl Committer {
    /// Keep originals as `<file><suffix>`
    pub fn with_backups(suffix: impl Into<String>) -> Self {
        Self {
            backup_suffix: Some(suffix.into()),
        }
    }

    /// Delete originals
    pub fn without_backups() -> Self {
        Self {
            backup_suffix: None,
        }
    }

    pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
        let mut name: OsString = path.as_os_str().to_owned();
        name.push(suffix);
        PathBuf::from(name)
    }

    /// First of `<file><suffix>`, `<file><suffix>.1`, ... that does not exist
    pub fn free_backup_path(path: &Path, suffix: &str) -> PathBuf {
        let base = Self::backup_path(path, suffix);
        if !base.exists() {
            return base;
        }
        let mut n = 1u32;
        loop {
            let candidate = Self::backup_path(&base, &format!(".{}", n));
            if !candidate.exists() {
                debug!("{} exists; backing up to {}", base.display(), candidate.display());
                return candidate;
            }
            n += 1;
        }
    }

    /// Reject outputs that would overwrite a non-original file or be
    /// compiled only by `go test`
    fn preflight(dir: &Path, originals: &[PathBuf], outputs: &[GeneratedFile]) -> Result<()> {
        for output in outputs {
            let path = dir.join(&output.filename);
            if let Some(SpecialFilename::Test) = special_filename(&output.filename) {
                return Err(SplitError::OutputConflict {
                    path,
                    reason: "the file would be compiled only by go test".to_string(),
                });
            }
            if path.exists() && !originals.contains(&path) {
                return Err(SplitError::OutputConflict {
                    path,
                    reason: "a file that is not part of the package already has this name"
                        .to_string(),
                });
            }
        }
        Ok(())
    }

    /// Replace `originals` with `outputs` inside `dir`
    pub fn commit(
        &self,
        dir: &Path,
        originals: &[PathBuf],
        outputs: &[GeneratedFile],
    ) -> Result<CommitReport> {
        Self::preflight(dir, originals, outputs)?;

        let mut displaced = Vec::with_capacity(originals.len());
        let mut written = Vec::with_capacity(outputs.len());

        if let Err((path, source)) = self.apply(dir, originals, outputs, &mut displaced, &mut written)
        {
            warn!("commit failed at {}: {}; rolling back", path.display(), source);
            rollback(&displaced, &written);
            return Err(SplitError::Commit { path, source });
        }

        let mut report = CommitReport {
            written,
            ..CommitReport::default()
        };
        for entry in displaced {
            match entry {
                Displaced::Renamed { backup, .. } => report.backups.push(backup),
                Displaced::Removed { original, .. } => report.removed.push(original),
            }
        }
        info!(
            "wrote {} units, {} backups, {} originals removed",
            report.written.len(),
            report.backups.len(),
            report.removed.len()
        );
        Ok(report)
    }

    fn apply(
        &self,
        dir: &Path,
        originals: &[PathBuf],
        outputs: &[GeneratedFile],
        displaced: &mut Vec<Displaced>,
        written: &mut Vec<PathBuf>,
    ) -> std::result::Result<(), (PathBuf, io::Error)> {
        for original in originals {
            match &self.backup_suffix {
                Some(suffix) => {
                    let backup = Self::free_backup_path(original, suffix);
                    fs::rename(original, &backup).map_err(|e| (original.clone(), e))?;
                    debug!("{} -> {}", original.display(), backup.display());
                    displaced.push(Displaced::Renamed {
                        original: original.clone(),
                        backup,
                    });
                }
                None => {
                    let contents = fs::read(original).map_err(|e| (original.clone(), e))?;
                    fs::remove_file(original).map_err(|e| (original.clone(), e))?;
                    debug!("removed {}", original.display());
                    displaced.push(Displaced::Removed {
                        original: original.clone(),
                        contents,
                    });
                }
            }
        }

        for output in outputs {
            let path = dir.join(&output.filename);
            fs::write(&path, &output.contents).map_err(|e| (path.clone(), e))?;
            debug!("wrote {}", path.display());
            written.push(path);
        }
        Ok(())
    }
}

fn rollback(displaced: &[Displaced], written: &[PathBuf]) {
    for path in written.iter().rev() {
        if let Err(e) = fs::remove_file(path) {
            warn!("rollback: cannot remove {}: {}", path.display(), e);
        }
    }
    for entry in displaced.iter().rev() {
        let (original, outcome) = match entry {
            Displaced::Renamed { original, backup } => (original, fs::rename(backup, original)),
            Displaced::Removed { original, contents } => (original, fs::write(original, contents)),
        };
        match outcome {
            Ok(()) => debug!("restored {}", original.display()),
            Err(e) => warn!("rollback: cannot restore {}: {}", original.display(), e),
        }
    }
}
