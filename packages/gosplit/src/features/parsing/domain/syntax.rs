//! Syntax-level view of Go top-level declarations
//!
//! Mirrors the shape of the grammar: a declaration is either a function
//! (with or without receiver) or a keyword-led group of specs. Expression
//! and type text is kept verbatim as written in the source.

use crate::shared::models::Span;

/// Consecutive comments attached to a node, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentGroup {
    /// Raw comment text, including `//` or `/* */` markers
    pub lines: Vec<String>,
}

impl CommentGroup {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Single-line rendering used for trailing comments
    pub fn inline(&self) -> String {
        self.lines.join(" ")
    }
}

/// Keyword that opens a grouped declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenKeyword {
    Import,
    Const,
    Var,
    Type,
}

/// Type reference as written in a method receiver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `T`
    Ident(String),
    /// `*X`
    Pointer(Box<TypeExpr>),
    /// `T[A, B]`
    Generic { base: Box<TypeExpr>, text: String },
    /// `(X)`
    Parenthesized(Box<TypeExpr>),
    /// `pkg.T`
    Qualified(String),
    /// Any other type node
    Other { kind: String, text: String },
}

impl TypeExpr {
    /// Source-like rendering, used in diagnostics
    pub fn text(&self) -> String {
        match self {
            TypeExpr::Ident(name) | TypeExpr::Qualified(name) => name.clone(),
            TypeExpr::Pointer(inner) => format!("*{}", inner.text()),
            TypeExpr::Generic { text, .. } | TypeExpr::Other { text, .. } => text.clone(),
            TypeExpr::Parenthesized(inner) => format!("({})", inner.text()),
        }
    }
}

/// Method receiver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receiver {
    pub name: Option<String>,
    pub type_expr: TypeExpr,
}

/// `func` declaration, with or without receiver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub doc: Option<CommentGroup>,
    pub name: String,
    pub receiver: Option<Receiver>,
    /// Full signature and body as written
    pub text: String,
    pub span: Span,
}

/// One entry of an import declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportSpec {
    /// `name`, `.` or `_`
    pub alias: Option<String>,
    /// Quoted import path as written
    pub path: String,
}

impl ImportSpec {
    pub fn render(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} {}", alias, self.path),
            None => self.path.clone(),
        }
    }
}

/// One `const` or `var` spec: parallel name and value lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpec {
    pub doc: Option<CommentGroup>,
    pub names: Vec<String>,
    pub type_expr: Option<String>,
    pub values: Vec<String>,
    pub comment: Option<CommentGroup>,
    pub span: Span,
}

/// One type definition or alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub doc: Option<CommentGroup>,
    pub name: String,
    /// `[T any]` for generic types
    pub type_params: Option<String>,
    /// `type A = B`
    pub is_alias: bool,
    pub type_expr: String,
    pub comment: Option<CommentGroup>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
    Type(TypeSpec),
}

/// Keyword-led declaration (`import`, `const`, `var`, `type`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenDecl {
    pub keyword: GenKeyword,
    pub doc: Option<CommentGroup>,
    pub specs: Vec<Spec>,
    pub span: Span,
}

/// Top-level declaration in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopLevelDecl {
    Func(FuncDecl),
    Gen(GenDecl),
}

impl TopLevelDecl {
    pub fn span(&self) -> Span {
        match self {
            TopLevelDecl::Func(func) => func.span,
            TopLevelDecl::Gen(group) => group.span,
        }
    }
}
