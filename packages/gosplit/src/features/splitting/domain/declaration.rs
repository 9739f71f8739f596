//! Classified top-level declarations

use crate::shared::models::Span;

/// `const` or `var`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKeyword {
    Const,
    Var,
}

impl ValueKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKeyword::Const => "const",
            ValueKeyword::Var => "var",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: String,
    pub doc: Vec<String>,
    pub text: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    /// Receiver type name with one pointer level removed
    pub receiver_base: String,
    pub doc: Vec<String>,
    pub text: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub doc: Vec<String>,
    pub type_params: Option<String>,
    pub is_alias: bool,
    pub type_expr: String,
    pub comment: Option<String>,
    pub span: Span,
}

/// One name out of a `const` or `var` spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueDecl {
    pub keyword: ValueKeyword,
    pub name: String,
    pub doc: Vec<String>,
    pub type_expr: Option<String>,
    /// Initializer at this name's position, if the spec has one
    pub value: Option<String>,
    /// Constant whose spec has no value list at all
    pub implicit_repetition: bool,
    pub comment: Option<String>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Function(FunctionDecl),
    Method(MethodDecl),
    Type(TypeDecl),
    Value(ValueDecl),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Function(d) => &d.name,
            Declaration::Method(d) => &d.name,
            Declaration::Type(d) => &d.name,
            Declaration::Value(d) => &d.name,
        }
    }

    pub fn doc(&self) -> &[String] {
        match self {
            Declaration::Function(d) => &d.doc,
            Declaration::Method(d) => &d.doc,
            Declaration::Type(d) => &d.doc,
            Declaration::Value(d) => &d.doc,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Declaration::Function(d) => d.span,
            Declaration::Method(d) => d.span,
            Declaration::Type(d) => d.span,
            Declaration::Value(d) => d.span,
        }
    }

    pub fn kind_str(&self) -> &'static str {
        match self {
            Declaration::Function(_) => "function",
            Declaration::Method(_) => "method",
            Declaration::Type(_) => "type",
            Declaration::Value(d) => d.keyword.as_str(),
        }
    }

    pub fn is_method(&self) -> bool {
        matches!(self, Declaration::Method(_))
    }
}
