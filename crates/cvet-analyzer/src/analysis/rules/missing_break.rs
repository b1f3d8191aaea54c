use std::collections::HashSet;

use cvet_common::Issue;

use crate::analysis::scope::ScopeStack;
use crate::ast::nodes::{AstNode, NodeKind};

use super::Rule;

pub const RULE_ID: &str = "MISSING_BREAK";

/// Flags `case` labels whose last statement does not terminate the case.
///
/// Reported at most once per source position; the position set survives
/// between nodes within one run and is cleared by `reset`.
pub struct MissingBreak {
    reported: HashSet<(u32, u32)>,
}

impl MissingBreak {
    pub fn new() -> Self {
        Self {
            reported: HashSet::new(),
        }
    }
}

impl Default for MissingBreak {
    fn default() -> Self {
        Self::new()
    }
}

/// Statement kinds that end a case without falling through.
fn terminates_case(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::BreakStmt
            | NodeKind::ReturnStmt
            | NodeKind::GotoStmt
            | NodeKind::ContinueStmt
            | NodeKind::CaseStmt
            | NodeKind::DefaultStmt
    )
}

impl Rule for MissingBreak {
    fn rule_id(&self) -> &'static str {
        RULE_ID
    }

    fn reset(&mut self) {
        self.reported.clear();
    }

    fn visit(&mut self, node: &AstNode, _scopes: &mut ScopeStack<'_>) -> Vec<Issue> {
        if node.kind != NodeKind::CaseStmt {
            return Vec::new();
        }

        let position = (node.span.start.line, node.span.start.column);
        if self.reported.contains(&position) {
            return Vec::new();
        }

        // A label with no statements runs straight into the next case on
        // purpose; only a non-terminating last statement is suspicious.
        let Some(last) = node.children.last() else {
            return Vec::new();
        };
        if terminates_case(last.kind) {
            return Vec::new();
        }

        self.reported.insert(position);
        vec![Issue::new(
            RULE_ID,
            "case appears to fall through – add break?",
            position.0,
            position.1,
        )]
    }
}
