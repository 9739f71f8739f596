//! Formatter that leaves files untouched

use std::path::Path;

use crate::features::formatting::ports::ImportFormatter;
use crate::shared::models::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFormatter;

impl ImportFormatter for NoopFormatter {
    fn name(&self) -> &str {
        "none"
    }

    fn format_dir(&self, _dir: &Path) -> Result<()> {
        Ok(())
    }
}
