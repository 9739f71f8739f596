//! Tree-sitter Go parser implementation
//!
//! This is where the tree-sitter dependency lives. The grammar tree is
//! lowered to the syntax-level model in `parsing::domain`; nothing
//! outside this module sees tree-sitter nodes.

use std::path::Path;

use tree_sitter::{Node as TSNode, Parser as TSParser};

use super::comments::{leading_comments, node_text, trailing_comment};
use crate::features::parsing::domain::{
    FuncDecl, GenDecl, GenKeyword, ImportSpec, Receiver, SourceFile, Spec, TopLevelDecl,
    TypeExpr, TypeSpec, ValueSpec,
};
use crate::features::parsing::ports::Parser;
use crate::shared::models::{Result, Span, SplitError};

/// Tree-sitter based Go parser
pub struct GoParser {
    language: tree_sitter::Language,
}

impl GoParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_go::language(),
        }
    }

    fn lower_file(&self, root: &TSNode, source: &str, file_path: &Path) -> Result<SourceFile> {
        let mut package = None;
        let mut decls = Vec::new();

        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            match child.kind() {
                "package_clause" => {
                    package = child
                        .named_child(0)
                        .map(|name| node_text(&name, source).to_string());
                }
                "function_declaration" | "method_declaration" => {
                    decls.push(TopLevelDecl::Func(self.lower_func(&child, source)));
                }
                "import_declaration" => {
                    decls.push(TopLevelDecl::Gen(self.lower_gen(
                        &child,
                        source,
                        GenKeyword::Import,
                    )));
                }
                "const_declaration" => {
                    decls.push(TopLevelDecl::Gen(self.lower_gen(
                        &child,
                        source,
                        GenKeyword::Const,
                    )));
                }
                "var_declaration" => {
                    decls.push(TopLevelDecl::Gen(self.lower_gen(
                        &child,
                        source,
                        GenKeyword::Var,
                    )));
                }
                "type_declaration" => {
                    decls.push(TopLevelDecl::Gen(self.lower_gen(
                        &child,
                        source,
                        GenKeyword::Type,
                    )));
                }
                _ => {}
            }
        }

        let package = package.ok_or_else(|| SplitError::Parse {
            file: file_path.to_path_buf(),
            line: 1,
            column: 1,
            message: "expected 'package' clause".to_string(),
        })?;

        Ok(SourceFile::new(file_path, package).with_decls(decls))
    }

    fn lower_func(&self, node: &TSNode, source: &str) -> FuncDecl {
        let name = node
            .child_by_field_name("name")
            .map(|n| node_text(&n, source).to_string())
            .unwrap_or_default();

        let receiver = node
            .child_by_field_name("receiver")
            .and_then(|list| self.lower_receiver(&list, source));

        FuncDecl {
            doc: leading_comments(node, source),
            name,
            receiver,
            text: node_text(node, source).to_string(),
            span: node.to_span(),
        }
    }

    fn lower_receiver(&self, list: &TSNode, source: &str) -> Option<Receiver> {
        let mut cursor = list.walk();
        let param = list
            .named_children(&mut cursor)
            .find(|c| c.kind() == "parameter_declaration")?;

        let type_node = param.child_by_field_name("type")?;
        Some(Receiver {
            name: param
                .child_by_field_name("name")
                .map(|n| node_text(&n, source).to_string()),
            type_expr: lower_type_expr(&type_node, source),
        })
    }

    fn lower_gen(&self, node: &TSNode, source: &str, keyword: GenKeyword) -> GenDecl {
        let mut specs = Vec::new();
        collect_specs(node, source, keyword, &mut specs);

        GenDecl {
            keyword,
            doc: leading_comments(node, source),
            specs,
            span: node.to_span(),
        }
    }
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk a declaration body, descending into `(...)` spec lists
fn collect_specs(node: &TSNode, source: &str, keyword: GenKeyword, specs: &mut Vec<Spec>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "import_spec" => specs.push(Spec::Import(lower_import_spec(&child, source))),
            "const_spec" | "var_spec" => specs.push(Spec::Value(lower_value_spec(&child, source))),
            "type_spec" | "type_alias" => specs.push(Spec::Type(lower_type_spec(&child, source))),
            "import_spec_list" | "var_spec_list" => {
                collect_specs(&child, source, keyword, specs);
            }
            _ => {}
        }
    }
}

fn lower_import_spec(node: &TSNode, source: &str) -> ImportSpec {
    ImportSpec {
        alias: node
            .child_by_field_name("name")
            .map(|n| node_text(&n, source).to_string()),
        path: node
            .child_by_field_name("path")
            .map(|n| node_text(&n, source).to_string())
            .unwrap_or_default(),
    }
}

fn lower_value_spec(node: &TSNode, source: &str) -> ValueSpec {
    let mut cursor = node.walk();
    let names = node
        .children_by_field_name("name", &mut cursor)
        .map(|n| node_text(&n, source).to_string())
        .collect();

    let values = match node.child_by_field_name("value") {
        Some(list) if list.kind() == "expression_list" => {
            let mut list_cursor = list.walk();
            let values: Vec<String> = list
                .named_children(&mut list_cursor)
                .filter(|c| c.kind() != "comment")
                .map(|c| node_text(&c, source).to_string())
                .collect();
            values
        }
        Some(single) => vec![node_text(&single, source).to_string()],
        None => Vec::new(),
    };

    ValueSpec {
        doc: leading_comments(node, source),
        names,
        type_expr: node
            .child_by_field_name("type")
            .map(|n| node_text(&n, source).to_string()),
        values,
        comment: trailing_comment(node, source),
        span: node.to_span(),
    }
}

fn lower_type_spec(node: &TSNode, source: &str) -> TypeSpec {
    TypeSpec {
        doc: leading_comments(node, source),
        name: node
            .child_by_field_name("name")
            .map(|n| node_text(&n, source).to_string())
            .unwrap_or_default(),
        type_params: node
            .child_by_field_name("type_parameters")
            .map(|n| node_text(&n, source).to_string()),
        is_alias: node.kind() == "type_alias",
        type_expr: node
            .child_by_field_name("type")
            .map(|n| node_text(&n, source).to_string())
            .unwrap_or_default(),
        comment: trailing_comment(node, source),
        span: node.to_span(),
    }
}

fn lower_type_expr(node: &TSNode, source: &str) -> TypeExpr {
    match node.kind() {
        "type_identifier" => TypeExpr::Ident(node_text(node, source).to_string()),
        "pointer_type" => match node.named_child(0) {
            Some(inner) => TypeExpr::Pointer(Box::new(lower_type_expr(&inner, source))),
            None => other_type(node, source),
        },
        "generic_type" => match node.child_by_field_name("type") {
            Some(base) => TypeExpr::Generic {
                base: Box::new(lower_type_expr(&base, source)),
                text: node_text(node, source).to_string(),
            },
            None => other_type(node, source),
        },
        "parenthesized_type" => match node.named_child(0) {
            Some(inner) => TypeExpr::Parenthesized(Box::new(lower_type_expr(&inner, source))),
            None => other_type(node, source),
        },
        "qualified_type" => TypeExpr::Qualified(node_text(node, source).to_string()),
        _ => other_type(node, source),
    }
}

fn other_type(node: &TSNode, source: &str) -> TypeExpr {
    TypeExpr::Other {
        kind: node.kind().to_string(),
        text: node_text(node, source).to_string(),
    }
}

/// First `ERROR` or `MISSING` node in document order
fn first_error<'t>(node: &TSNode<'t>) -> Option<TSNode<'t>> {
    if node.is_error() || node.is_missing() {
        return Some(*node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<TSNode<'t>> = node.children(&mut cursor).collect();
    children.iter().find_map(first_error)
}

/// Span conversion for tree-sitter nodes
pub(crate) trait SpanExt {
    fn to_span(&self) -> Span;
}

impl SpanExt for TSNode<'_> {
    fn to_span(&self) -> Span {
        Span::new(
            self.start_position().row as u32 + 1,
            self.start_position().column as u32,
            self.end_position().row as u32 + 1,
            self.end_position().column as u32,
        )
    }
}

impl Parser for GoParser {
    fn parse(&self, source: &str, file_path: &Path) -> Result<SourceFile> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| SplitError::internal(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| SplitError::internal("tree-sitter returned no tree"))?;
        let root = tree.root_node();

        if let Some(error) = first_error(&root) {
            let position = error.start_position();
            let message = if error.is_missing() {
                format!("missing {}", error.kind())
            } else {
                let snippet: String = node_text(&error, source).chars().take(20).collect();
                format!("syntax error near {:?}", snippet)
            };
            return Err(SplitError::Parse {
                file: file_path.to_path_buf(),
                line: position.row as u32 + 1,
                column: position.column as u32 + 1,
                message,
            });
        }

        self.lower_file(&root, source, file_path)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        ext == "go"
    }

    fn language_name(&self) -> &'static str {
        "go"
    }
}
