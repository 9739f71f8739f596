//! Error types for the gosplit crate
//!
//! Every failure is fatal: errors bubble up to the pipeline, which stops
//! before the module directory is touched. Variants are grouped into
//! categories so callers (and tests) can match on the kind of failure
//! instead of on message text.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Error categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing formatter, unusable working directory
    Environment,
    /// Not exactly one package, syntax errors
    Structural,
    /// Constructs the splitter has no placement rule for
    Unsupported,
    /// Filesystem and subprocess failures
    Io,
    /// Invalid configuration
    Config,
    /// Bugs
    Internal,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Environment => "environment",
            ErrorCategory::Structural => "structural",
            ErrorCategory::Unsupported => "unsupported",
            ErrorCategory::Io => "io",
            ErrorCategory::Config => "config",
            ErrorCategory::Internal => "internal",
        }
    }
}

/// Receiver type shapes that cannot be mapped to a unit filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiverShape {
    /// `func (l List[T]) ...`
    Generic,
    /// `func (p (T)) ...`
    Parenthesized,
    /// `func (p pkg.T) ...`
    Qualified,
    /// `func (p **T) ...`
    DoublePointer,
    /// Anything else, keyed by grammar node kind
    Other(String),
}

impl fmt::Display for ReceiverShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiverShape::Generic => write!(f, "generic type instantiation"),
            ReceiverShape::Parenthesized => write!(f, "parenthesized type"),
            ReceiverShape::Qualified => write!(f, "qualified type"),
            ReceiverShape::DoublePointer => write!(f, "pointer to pointer"),
            ReceiverShape::Other(kind) => write!(f, "{}", kind),
        }
    }
}

/// Main error type for gosplit operations
#[derive(Debug, Error)]
pub enum SplitError {
    /// Import formatter is not on PATH
    #[error("{program}: executable file not found in $PATH")]
    FormatterNotFound { program: String },

    /// Working directory could not be resolved or read
    #[error("cannot use working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    /// Directory does not hold exactly one package
    #[error("expected exactly one package to be defined in {}: found {found}", dir.display())]
    PackageCount {
        dir: PathBuf,
        found: usize,
        names: Vec<String>,
    },

    /// Syntax error reported by the parser
    #[error("{}:{line}:{column}: {message}", file.display())]
    Parse {
        file: PathBuf,
        line: u32,
        column: u32,
        message: String,
    },

    /// Method receiver shape outside {T, *T}
    #[error("unhandled receiver type for method {method}: {shape} `{text}`")]
    UnsupportedReceiver {
        method: String,
        shape: ReceiverShape,
        text: String,
    },

    /// Method whose receiver type has no unit
    #[error("method {method} has receiver type {receiver} which is not declared in this package")]
    MissingReceiverType { method: String, receiver: String },

    /// Constant relying on implicit repetition (reject policy)
    #[error("constant {name} relies on implicit repetition of the previous value")]
    ImplicitRepetition { name: String },

    /// Two declarations normalize to the same filename (reject policy)
    #[error("{current} and {previous} both map to {filename}")]
    FilenameCollision {
        filename: String,
        previous: String,
        current: String,
    },

    /// Unit that would clobber a file outside the package or become a test file
    #[error("{}: refusing to write unit: {reason}", path.display())]
    OutputConflict { path: PathBuf, reason: String },

    /// Filesystem error with the path that caused it
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Import formatter exited unsuccessfully
    #[error("{tool} failed ({status}): {stderr}")]
    Formatter {
        tool: String,
        status: String,
        stderr: String,
    },

    /// Failure while replacing the original files
    #[error("commit failed at {}: {source}", path.display())]
    Commit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Internal invariant violated
    #[error("internal error: {0}")]
    Internal(String),
}

impl SplitError {
    /// Create an I/O error bound to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SplitError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        SplitError::Internal(msg.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SplitError::FormatterNotFound { .. } | SplitError::WorkingDirectory(_) => {
                ErrorCategory::Environment
            }
            SplitError::PackageCount { .. } | SplitError::Parse { .. } => ErrorCategory::Structural,
            SplitError::UnsupportedReceiver { .. }
            | SplitError::MissingReceiverType { .. }
            | SplitError::ImplicitRepetition { .. }
            | SplitError::FilenameCollision { .. }
            | SplitError::OutputConflict { .. } => ErrorCategory::Unsupported,
            SplitError::Io { .. } | SplitError::Formatter { .. } | SplitError::Commit { .. } => {
                ErrorCategory::Io
            }
            SplitError::Config(_) => ErrorCategory::Config,
            SplitError::Internal(_) => ErrorCategory::Internal,
        }
    }
}

/// Result type alias for gosplit operations
pub type Result<T> = std::result::Result<T, SplitError>;
