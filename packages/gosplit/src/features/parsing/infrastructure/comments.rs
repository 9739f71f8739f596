//! Comment attachment
//!
//! Tree-sitter keeps comments as `extra` sibling nodes. Go attaches them
//! by line adjacency instead: a doc comment is the group of comments that
//! ends on the line right above a node and does not trail another token,
//! a line comment starts on the node's last line.

use tree_sitter::Node as TSNode;

use crate::features::parsing::domain::CommentGroup;

const COMMENT: &str = "comment";
const NEWLINE: &str = "\n";

fn is_terminator(node: &TSNode) -> bool {
    !node.is_named() && matches!(node.kind(), NEWLINE | ";")
}

/// Comment placed after another token on the same line
fn trails_previous_token(comment: &TSNode) -> bool {
    match comment.prev_sibling() {
        // a newline token ends on the comment's row but precedes it
        Some(prev) if prev.kind() != NEWLINE => {
            prev.end_position().row == comment.start_position().row
        }
        _ => false,
    }
}

/// Doc comment group directly above `node`
pub(crate) fn leading_comments(node: &TSNode, source: &str) -> Option<CommentGroup> {
    let mut lines = Vec::new();
    let mut expected_row = node.start_position().row;
    let mut cursor = node.prev_sibling();

    while let Some(prev) = cursor {
        if prev.kind() == COMMENT {
            if prev.end_position().row + 1 != expected_row || trails_previous_token(&prev) {
                break;
            }
            lines.push(node_text(&prev, source).to_string());
            expected_row = prev.start_position().row;
        } else if !is_terminator(&prev) {
            break;
        }
        cursor = prev.prev_sibling();
    }

    if lines.is_empty() {
        return None;
    }
    lines.reverse();
    Some(CommentGroup::new(lines))
}

/// Line comment starting on the last line of `node`
///
/// When `node` is the last child of its parent (an ungrouped spec), the
/// comment may sit after the parent instead.
pub(crate) fn trailing_comment(node: &TSNode, source: &str) -> Option<CommentGroup> {
    let row = node.end_position().row;
    let mut lines = Vec::new();
    let mut cursor = node.next_sibling();

    while let Some(next) = cursor {
        if next.start_position().row != row {
            break;
        }
        if next.kind() == COMMENT {
            lines.push(node_text(&next, source).to_string());
        } else if !is_terminator(&next) {
            break;
        }
        cursor = next.next_sibling();
    }

    if !lines.is_empty() {
        return Some(CommentGroup::new(lines));
    }

    match node.parent() {
        Some(parent)
            if parent.kind() != "source_file" && parent.end_byte() == node.end_byte() =>
        {
            trailing_comment(&parent, source)
        }
        _ => None,
    }
}

pub(crate) fn node_text<'s>(node: &TSNode, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or("")
}
