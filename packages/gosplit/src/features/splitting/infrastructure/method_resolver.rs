//! Method resolver: second pass, appends methods to their receiver's unit

use super::naming::unit_filename;
use super::unit_writer::render_doc;
use crate::features::splitting::domain::{MethodDecl, UnitSet};
use crate::shared::models::{Result, SplitError};

#[derive(Debug, Default)]
pub struct MethodResolver;

impl MethodResolver {
    pub fn new() -> Self {
        Self
    }

    /// Append `method` after a blank line to its receiver type's unit
    ///
    /// Returns the filename it was appended to.
    pub fn append(&self, method: &MethodDecl, units: &mut UnitSet) -> Result<String> {
        let filename = unit_filename(&method.receiver_base);
        let unit = units
            .get_mut(&filename)
            .ok_or_else(|| SplitError::MissingReceiverType {
                method: method.name.clone(),
                receiver: method.receiver_base.clone(),
            })?;

        let mut fragment = String::from("\n");
        fragment.push_str(&render_doc(&method.doc));
        fragment.push_str(&method.text);
        fragment.push('\n');
        unit.push_fragment(fragment);

        Ok(filename)
    }
}
