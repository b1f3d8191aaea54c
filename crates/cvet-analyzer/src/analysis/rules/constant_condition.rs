use cvet_common::Issue;

use crate::analysis::scope::ScopeStack;
use crate::ast::nodes::{AstNode, NodeKind};

use super::Rule;

pub const RULE_ID: &str = "CONSTANT_CONDITION";

/// Flags `if` and `while` statements whose condition starts with a constant
/// truth value.
///
/// Only the first lexical token of the condition subtree is inspected. This
/// is a shallow heuristic, not a constant folder: `x && 0` and a
/// parenthesized `(0)` both pass silently.
pub struct ConstantCondition;

impl Rule for ConstantCondition {
    fn rule_id(&self) -> &'static str {
        RULE_ID
    }

    fn visit(&mut self, node: &AstNode, _scopes: &mut ScopeStack<'_>) -> Vec<Issue> {
        if !matches!(node.kind, NodeKind::IfStmt | NodeKind::WhileStmt) {
            return Vec::new();
        }
        let Some(condition) = node.children.first() else {
            return Vec::new();
        };
        let Some(token) = condition.first_token() else {
            return Vec::new();
        };
        let message = match token {
            "0" | "false" => "Condition always false",
            "1" | "true" => "Condition always true",
            _ => return Vec::new(),
        };
        vec![Issue::new(
            RULE_ID,
            message,
            node.span.start.line,
            node.span.start.column,
        )]
    }
}
