//! Parsing domain models

mod module;
mod syntax;

pub use module::{Module, SourceFile};
pub use syntax::{
    CommentGroup, FuncDecl, GenDecl, GenKeyword, ImportSpec, Receiver, Spec, TopLevelDecl,
    TypeExpr, TypeSpec, ValueSpec,
};
