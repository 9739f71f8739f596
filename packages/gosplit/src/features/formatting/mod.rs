//! Formatting Feature
//!
//! Runs an import-resolving formatter over generated units.
//!
//! ## Structure
//! - `ports/` - ImportFormatter trait
//! - `infrastructure/` - goimports subprocess, no-op formatter

pub mod infrastructure;
pub mod ports;

// Re-exports
pub use infrastructure::{GoImports, NoopFormatter};
pub use ports::ImportFormatter;

use crate::config::{FormatterKind, SplitConfig};
use crate::shared::models::Result;

/// Formatter selected by `config`, resolved on PATH when external
pub fn resolve_formatter(config: &SplitConfig) -> Result<Box<dyn ImportFormatter>> {
    match config.formatter {
        FormatterKind::GoImports => Ok(Box::new(GoImports::resolve(&config.formatter_program)?)),
        FormatterKind::None => Ok(Box::new(NoopFormatter)),
    }
}
