use std::collections::HashSet;

use cvet_common::Issue;

use crate::analysis::scope::ScopeStack;
use crate::ast::nodes::{AstNode, NodeKind};

use super::Rule;

pub const RULE_ID: &str = "UNINITIALIZED_VAR";

/// Flags reads of variables that have not been assigned yet.
///
/// Any binary operator with an identifier as its left operand marks that
/// identifier initialized, assignment and comparison alike. Implementation
/// note: the comparison case (`x == 1` marking `x` initialized) is an
/// over-approximation kept for compatibility; treat it as a candidate bug
/// when revisiting this rule.
pub struct UninitializedVar {
    reported: HashSet<(String, u32, u32)>,
}

impl UninitializedVar {
    pub fn new() -> Self {
        Self {
            reported: HashSet::new(),
        }
    }
}

impl Default for UninitializedVar {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for UninitializedVar {
    fn rule_id(&self) -> &'static str {
        RULE_ID
    }

    fn reset(&mut self) {
        self.reported.clear();
    }

    fn visit(&mut self, node: &AstNode, scopes: &mut ScopeStack<'_>) -> Vec<Issue> {
        match node.kind {
            NodeKind::IdentRef => {
                let Some(name) = node.name.as_deref() else {
                    return Vec::new();
                };
                let Some(symbol) = scopes.lookup(name) else {
                    return Vec::new();
                };
                if symbol.initialized {
                    return Vec::new();
                }
                let line = node.span.start.line;
                let column = node.span.start.column;
                if !self.reported.insert((name.to_string(), line, column)) {
                    return Vec::new();
                }
                vec![Issue::new(
                    RULE_ID,
                    format!("Variable '{}' used before initialization", name),
                    line,
                    column,
                )]
            }
            NodeKind::BinaryOp => {
                // An identifier on the left of any two-operand operator
                // counts as initialized from here on.
                if let [left, _right] = node.children.as_slice() {
                    if left.kind == NodeKind::IdentRef {
                        if let Some(name) = left.name.as_deref() {
                            scopes.initialize(name);
                        }
                    }
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }
}
