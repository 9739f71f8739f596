//! Load package use case

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::features::parsing::domain::Module;
use crate::features::parsing::ports::Parser;
use crate::shared::models::{Result, SplitError};

const TEST_SUFFIX: &str = "_test.go";

/// Non-test Go source file name
pub fn is_package_source(file_name: &str) -> bool {
    file_name.ends_with(".go") && !file_name.ends_with(TEST_SUFFIX)
}

/// Parses every package source file of a directory into one module
pub struct PackageLoader<P: Parser> {
    parser: P,
}

impl<P: Parser> PackageLoader<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Package source files of `dir`, sorted by name
    pub fn source_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| SplitError::io(dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SplitError::io(dir, e))?;
            let file_type = entry.file_type().map_err(|e| SplitError::io(entry.path(), e))?;
            if file_type.is_dir() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            let supported = Path::new(name)
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| self.parser.supports_extension(ext));
            if supported && is_package_source(name) {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }

    /// Parse the package in `dir`
    ///
    /// Fails on the first syntax error, then unless exactly one package
    /// is declared across the files.
    pub fn load(&self, dir: &Path) -> Result<Module> {
        let paths = self.source_files(dir)?;

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let source = fs::read_to_string(&path).map_err(|e| SplitError::io(&path, e))?;
            let file = self.parser.parse(&source, &path)?;
            debug!(
                "parsed {} as {} ({} declarations)",
                path.display(),
                self.parser.language_name(),
                file.decls.len()
            );
            files.push(file);
        }

        Module::from_files(dir, files)
    }
}
