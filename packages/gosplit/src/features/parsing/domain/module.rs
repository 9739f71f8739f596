//! Parsed files and the package-level module built from them

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use super::syntax::{GenKeyword, ImportSpec, Spec, TopLevelDecl};
use crate::shared::models::{Result, SplitError};

/// One parsed `.go` file
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub package: String,
    pub decls: Vec<TopLevelDecl>,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, package: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            package: package.into(),
            decls: Vec::new(),
        }
    }

    pub fn with_decls(mut self, decls: Vec<TopLevelDecl>) -> Self {
        self.decls = decls;
        self
    }
}

/// One package: every top-level declaration of its files, in file order
#[derive(Debug, Clone)]
pub struct Module {
    pub package_name: String,
    pub decls: Vec<TopLevelDecl>,
    /// Files the declarations came from
    pub files: Vec<PathBuf>,
}

impl Module {
    /// Merge parsed files of one directory
    ///
    /// Fails unless the files declare exactly one package.
    pub fn from_files(dir: &Path, files: Vec<SourceFile>) -> Result<Self> {
        let names: BTreeSet<&str> = files.iter().map(|f| f.package.as_str()).collect();
        if names.len() != 1 {
            return Err(SplitError::PackageCount {
                dir: dir.to_path_buf(),
                found: names.len(),
                names: names.into_iter().map(str::to_string).collect(),
            });
        }
        let package_name = files[0].package.clone();

        let mut module = Module {
            package_name,
            decls: Vec::new(),
            files: Vec::with_capacity(files.len()),
        };
        for file in files {
            module.files.push(file.path);
            module.decls.extend(file.decls);
        }
        Ok(module)
    }

    /// Import entries of every file, deduplicated in first-seen order
    pub fn imports(&self) -> Vec<&ImportSpec> {
        let mut seen = HashSet::new();
        let mut imports = Vec::new();
        for decl in &self.decls {
            let TopLevelDecl::Gen(group) = decl else {
                continue;
            };
            if group.keyword != GenKeyword::Import {
                continue;
            }
            for spec in &group.specs {
                if let Spec::Import(import) = spec {
                    if seen.insert(import) {
                        imports.push(import);
                    }
                }
            }
        }
        imports
    }
}
