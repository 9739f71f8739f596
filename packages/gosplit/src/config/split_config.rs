//! Split configuration
//!
//! Everything the pipeline would otherwise read from process-wide state
//! (module directory, formatter program) is resolved here, once, and
//! threaded into the pipeline at construction time.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};

/// Import formatter run over the generated units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    /// `goimports -w <dir>`
    GoImports,
    /// Leave generated units as rendered
    None,
}

impl FormatterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoImports => "goimports",
            Self::None => "none",
        }
    }
}

impl std::str::FromStr for FormatterKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "goimports" => Ok(Self::GoImports),
            "none" => Ok(Self::None),
            _ => Err(ConfigError::UnknownVariant {
                kind: "formatter",
                value: s.to_string(),
                valid: "goimports, none",
            }),
        }
    }
}

/// What to do when two declarations map to the same filename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Later declaration replaces the earlier unit (logged)
    #[default]
    Overwrite,
    /// Abort the run
    Reject,
}

impl std::str::FromStr for CollisionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "reject" => Ok(Self::Reject),
            _ => Err(ConfigError::UnknownVariant {
                kind: "collision policy",
                value: s.to_string(),
                valid: "overwrite, reject",
            }),
        }
    }
}

/// What to do with constants that rely on implicit repetition
///
/// In `const ( A = iota; B )` the constant `B` repeats the previous
/// expression list. The split unit for `B` cannot carry that meaning
/// (repeating `iota` textually would change its value), so the only
/// choices are to drop the initializer or to refuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImplicitRepetition {
    /// Emit the constant without an initializer (logged)
    #[default]
    Elide,
    /// Abort the run
    Reject,
}

impl std::str::FromStr for ImplicitRepetition {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "elide" => Ok(Self::Elide),
            "reject" => Ok(Self::Reject),
            _ => Err(ConfigError::UnknownVariant {
                kind: "implicit repetition policy",
                value: s.to_string(),
                valid: "elide, reject",
            }),
        }
    }
}

/// Complete configuration for one split run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Directory holding the package
    pub dir: PathBuf,
    pub formatter: FormatterKind,
    /// Program looked up on PATH when `formatter` is `goimports`
    pub formatter_program: String,
    /// Rename originals instead of deleting them
    pub backup: bool,
    pub backup_suffix: String,
    pub collision: CollisionPolicy,
    pub implicit_repetition: ImplicitRepetition,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            formatter: FormatterKind::GoImports,
            formatter_program: "goimports".to_string(),
            backup: true,
            backup_suffix: ".bak".to_string(),
            collision: CollisionPolicy::Overwrite,
            implicit_repetition: ImplicitRepetition::Elide,
        }
    }
}

impl SplitConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn formatter(mut self, formatter: FormatterKind) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn formatter_program(mut self, program: impl Into<String>) -> Self {
        self.formatter_program = program.into();
        self
    }

    pub fn backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn backup_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.backup_suffix = suffix.into();
        self
    }

    pub fn collision(mut self, policy: CollisionPolicy) -> Self {
        self.collision = policy;
        self
    }

    pub fn implicit_repetition(mut self, policy: ImplicitRepetition) -> Self {
        self.implicit_repetition = policy;
        self
    }

    /// Validate field values
    ///
    /// A backup suffix ending in `.go` would make the backups part of the
    /// package on the next run, so it is refused.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.backup {
            if self.backup_suffix.is_empty() {
                return Err(ConfigError::invalid("backup_suffix", "must not be empty"));
            }
            if self.backup_suffix.ends_with(".go") {
                return Err(ConfigError::invalid(
                    "backup_suffix",
                    "must not end with .go",
                ));
            }
            if self.backup_suffix.contains(std::path::MAIN_SEPARATOR) {
                return Err(ConfigError::invalid(
                    "backup_suffix",
                    "must not contain a path separator",
                ));
            }
        }
        if self.formatter == FormatterKind::GoImports && self.formatter_program.trim().is_empty()
        {
            return Err(ConfigError::invalid(
                "formatter_program",
                "must name an executable",
            ));
        }
        Ok(())
    }
}
