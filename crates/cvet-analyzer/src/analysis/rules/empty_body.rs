use cvet_common::Issue;

use crate::analysis::scope::ScopeStack;
use crate::ast::nodes::{AstNode, NodeKind};

use super::Rule;

pub const RULE_ID: &str = "EMPTY_BODY";

/// Flags `if`, `while`, and `for` statements with an empty braced body.
///
/// A bare `;` used as the body is treated as an intentional no-op: the first
/// null statement seen suppresses every finding for that statement node, not
/// just its own branch.
pub struct EmptyBody;

impl Rule for EmptyBody {
    fn rule_id(&self) -> &'static str {
        RULE_ID
    }

    fn visit(&mut self, node: &AstNode, _scopes: &mut ScopeStack<'_>) -> Vec<Issue> {
        let statement = match node.kind {
            NodeKind::IfStmt => "if",
            NodeKind::WhileStmt => "while",
            NodeKind::ForStmt => "for",
            _ => return Vec::new(),
        };

        let mut issues = Vec::new();
        for child in &node.children {
            match child.kind {
                NodeKind::CompoundStmt if child.children.is_empty() => {
                    issues.push(Issue::new(
                        RULE_ID,
                        format!("Empty body in {} statement", statement),
                        child.span.start.line,
                        child.span.start.column,
                    ));
                }
                // Intentional no-op body: drop everything found so far.
                NodeKind::NullStmt => return Vec::new(),
                _ => {}
            }
        }
        issues
    }
}
