//! Splitting domain models

mod declaration;
mod output_unit;

pub use declaration::{
    Declaration, FunctionDecl, MethodDecl, TypeDecl, ValueDecl, ValueKeyword,
};
pub use output_unit::{OutputUnit, UnitSet};
