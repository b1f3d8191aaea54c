pub mod constant_condition;
pub mod empty_body;
pub mod missing_break;
pub mod uninitialized_var;

pub use constant_condition::ConstantCondition;
pub use empty_body::EmptyBody;
pub use missing_break::MissingBreak;
pub use uninitialized_var::UninitializedVar;

use cvet_common::Issue;

use crate::ast::nodes::AstNode;

use super::scope::ScopeStack;

/// A single pluggable check.
///
/// `visit` is called once for every node of the tree, in traversal order,
/// with the scope stack positioned at the node's lexical scope. A rule may
/// update usage/initialization bookkeeping through the scope API but has no
/// way to restructure the scope chain. A rule that cannot make sense of a
/// node's shape returns no issues for it; rule failures never abort the pass.
pub trait Rule {
    /// Stable identifier used in reports and configuration.
    fn rule_id(&self) -> &'static str;

    /// Inspect one node and return any findings.
    fn visit(&mut self, node: &AstNode, scopes: &mut ScopeStack<'_>) -> Vec<Issue>;

    /// Clear per-run state; invoked before every analysis run.
    fn reset(&mut self) {}
}

/// The built-in rules in their default registration order.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ConstantCondition),
        Box::new(EmptyBody),
        Box::new(MissingBreak::new()),
        Box::new(UninitializedVar::new()),
    ]
}

/// Ids of the built-in rules, for configuration validation.
pub const BUILTIN_RULE_IDS: [&str; 4] = [
    constant_condition::RULE_ID,
    empty_body::RULE_ID,
    missing_break::RULE_ID,
    uninitialized_var::RULE_ID,
];
