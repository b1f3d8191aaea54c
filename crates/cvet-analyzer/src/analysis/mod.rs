pub mod analyzer;
pub mod rules;
pub mod scope;

use cvet_common::Issue;

use crate::ast::nodes::AstNode;

/// Run the built-in rule set over an adapted syntax tree.
///
/// Findings come out in traversal order: rule findings as nodes are visited,
/// unused-symbol findings as their scope closes, and whole-unit findings
/// (top-level symbols, uncalled functions) last.
pub fn analyze(root: &AstNode) -> Vec<Issue> {
    analyzer::Analyzer::with_default_rules().analyze(root)
}
