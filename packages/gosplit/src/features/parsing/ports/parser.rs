//! Parser port (interface)
//!
//! Defines the contract for turning one source file into its top-level
//! declarations.

use std::path::Path;

use crate::features::parsing::domain::SourceFile;
use crate::shared::models::Result;

/// Parser trait - abstraction over parsing implementation
pub trait Parser {
    /// Parse one file's source text
    fn parse(&self, source: &str, file_path: &Path) -> Result<SourceFile>;

    /// Check if this parser supports the given file extension
    fn supports_extension(&self, ext: &str) -> bool;

    /// Get supported language name
    fn language_name(&self) -> &'static str;
}
