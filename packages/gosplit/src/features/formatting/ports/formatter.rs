//! Import formatter port

use std::path::Path;

use crate::shared::models::Result;

/// Rewrites Go files in place, fixing their import blocks
///
/// Units carry the imports of the whole module; the formatter prunes the
/// unused ones and formats the result.
pub trait ImportFormatter {
    /// Tool name, used in logs and errors
    fn name(&self) -> &str;

    /// Format every `.go` file directly inside `dir`
    fn format_dir(&self, dir: &Path) -> Result<()>;
}
