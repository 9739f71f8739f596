//! Declaration classifier
//!
//! Flattens the syntax-level declarations of a module into one
//! `Declaration` per placeable name:
//! - `func` without receiver → Function
//! - `func` with receiver → Method, receiver resolved to a base type name
//! - each type spec → Type
//! - each name of a const/var spec → Value
//!
//! Imports are consumed by the header builder and produce nothing here.

use crate::features::parsing::domain::{
    CommentGroup, FuncDecl, GenDecl, GenKeyword, Module, Receiver, Spec, TopLevelDecl, TypeExpr,
};
use crate::features::splitting::domain::{
    Declaration, FunctionDecl, MethodDecl, TypeDecl, ValueDecl, ValueKeyword,
};
use crate::shared::models::{ReceiverShape, Result, SplitError};

#[derive(Debug, Default)]
pub struct DeclarationClassifier;

impl DeclarationClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify every top-level declaration, in module order
    ///
    /// Fails on the first method whose receiver is not `T` or `*T`.
    pub fn classify(&self, module: &Module) -> Result<Vec<Declaration>> {
        let mut out = Vec::with_capacity(module.decls.len());
        for decl in &module.decls {
            match decl {
                TopLevelDecl::Func(func) => out.push(self.classify_func(func)?),
                TopLevelDecl::Gen(group) => self.classify_gen(group, &mut out),
            }
        }
        Ok(out)
    }

    fn classify_func(&self, func: &FuncDecl) -> Result<Declaration> {
        let doc = doc_lines(&[func.doc.as_ref()]);
        match &func.receiver {
            None => Ok(Declaration::Function(FunctionDecl {
                name: func.name.clone(),
                doc,
                text: func.text.clone(),
                span: func.span,
            })),
            Some(receiver) => Ok(Declaration::Method(MethodDecl {
                name: func.name.clone(),
                receiver_base: receiver_base(&func.name, receiver)?,
                doc,
                text: func.text.clone(),
                span: func.span,
            })),
        }
    }

    fn classify_gen(&self, group: &GenDecl, out: &mut Vec<Declaration>) {
        let keyword = match group.keyword {
            GenKeyword::Import => return,
            GenKeyword::Const => Some(ValueKeyword::Const),
            GenKeyword::Var => Some(ValueKeyword::Var),
            GenKeyword::Type => None,
        };

        for spec in &group.specs {
            match (spec, keyword) {
                (Spec::Type(ts), _) => out.push(Declaration::Type(TypeDecl {
                    name: ts.name.clone(),
                    doc: doc_lines(&[group.doc.as_ref(), ts.doc.as_ref()]),
                    type_params: ts.type_params.clone(),
                    is_alias: ts.is_alias,
                    type_expr: ts.type_expr.clone(),
                    comment: ts.comment.as_ref().map(CommentGroup::inline),
                    span: ts.span,
                })),
                (Spec::Value(vs), Some(keyword)) => {
                    let doc = doc_lines(&[group.doc.as_ref(), vs.doc.as_ref()]);
                    let comment = vs.comment.as_ref().map(CommentGroup::inline);
                    // Names line up with values by position only
                    for (i, name) in vs.names.iter().enumerate() {
                        out.push(Declaration::Value(ValueDecl {
                            keyword,
                            name: name.clone(),
                            doc: doc.clone(),
                            type_expr: vs.type_expr.clone(),
                            value: vs.values.get(i).cloned(),
                            implicit_repetition: keyword == ValueKeyword::Const
                                && vs.values.is_empty(),
                            comment: comment.clone(),
                            span: vs.span,
                        }));
                    }
                }
                _ => {}
            }
        }
    }
}

/// Group doc first, then spec doc
fn doc_lines(groups: &[Option<&CommentGroup>]) -> Vec<String> {
    groups
        .iter()
        .flatten()
        .flat_map(|g| g.lines.iter().cloned())
        .collect()
}

/// Base type name of a receiver, unwrapping at most one pointer
fn receiver_base(method: &str, receiver: &Receiver) -> Result<String> {
    let inner = match &receiver.type_expr {
        TypeExpr::Pointer(inner) => inner.as_ref(),
        direct => direct,
    };
    let shape = match inner {
        TypeExpr::Ident(name) => return Ok(name.clone()),
        TypeExpr::Pointer(_) => ReceiverShape::DoublePointer,
        TypeExpr::Generic { .. } => ReceiverShape::Generic,
        TypeExpr::Parenthesized(_) => ReceiverShape::Parenthesized,
        TypeExpr::Qualified(_) => ReceiverShape::Qualified,
        TypeExpr::Other { kind, .. } => ReceiverShape::Other(kind.clone()),
    };
    Err(SplitError::UnsupportedReceiver {
        method: method.to_string(),
        shape,
        text: receiver.type_expr.text(),
    })
}
