//! Unit writer: renders one declaration into a fresh output unit

use super::naming::unit_filename;
use crate::features::splitting::domain::{Declaration, OutputUnit, TypeDecl, ValueDecl};
use crate::shared::models::{Result, SplitError};

pub struct UnitWriter<'h> {
    header: &'h str,
}

impl<'h> UnitWriter<'h> {
    pub fn new(header: &'h str) -> Self {
        Self { header }
    }

    /// New unit holding `decl`, keyed by its identifier
    ///
    /// Methods never create units.
    pub fn write(&self, decl: &Declaration) -> Result<OutputUnit> {
        let body = match decl {
            Declaration::Function(func) => func.text.clone(),
            Declaration::Type(ty) => render_type(ty),
            Declaration::Value(value) => render_value(value),
            Declaration::Method(method) => {
                return Err(SplitError::internal(format!(
                    "method {} reached the unit writer",
                    method.name
                )))
            }
        };

        let mut fragment = render_doc(decl.doc());
        fragment.push_str(&body);
        fragment.push('\n');

        Ok(
            OutputUnit::new(unit_filename(decl.name()), decl.name(), self.header)
                .with_fragment(fragment),
        )
    }
}

/// Doc lines, each newline-terminated
pub(crate) fn render_doc(doc: &[String]) -> String {
    let mut out = String::new();
    for line in doc {
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn render_type(ty: &TypeDecl) -> String {
    let mut out = format!("type {}", ty.name);
    if let Some(params) = &ty.type_params {
        out.push_str(params);
    }
    if ty.is_alias {
        out.push_str(" =");
    }
    out.push(' ');
    out.push_str(&ty.type_expr);
    push_comment(&mut out, ty.comment.as_deref());
    out
}

fn render_value(value: &ValueDecl) -> String {
    let mut out = format!("{} {}", value.keyword.as_str(), value.name);
    if let Some(ty) = &value.type_expr {
        out.push(' ');
        out.push_str(ty);
    }
    if let Some(init) = &value.value {
        out.push_str(" = ");
        out.push_str(init);
    }
    push_comment(&mut out, value.comment.as_deref());
    out
}

fn push_comment(out: &mut String, comment: Option<&str>) {
    if let Some(comment) = comment {
        out.push(' ');
        out.push_str(comment);
    }
}
