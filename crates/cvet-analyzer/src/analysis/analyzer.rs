//! The traversal engine: one depth-first pass over an adapted syntax tree.
//!
//! Scope handling is an explicit enter/exit pair around the recursion:
//! function declarations and compound statements open a scope on entry, and
//! every exit path runs the unused-symbol sweep before the pop.

use std::collections::HashSet;

use indexmap::IndexMap;

use cvet_common::Issue;

use crate::ast::nodes::{AstNode, NodeKind};

use super::rules::Rule;
use super::scope::ScopeStack;

/// Whole-unit function bookkeeping, accumulated across the entire traversal
/// independently of lexical scoping. Owned by a single pass; never global.
#[derive(Debug, Default)]
struct FunctionRegistry<'a> {
    /// Declared functions by name; a redeclaration keeps only the newest
    /// node, so that is where an unused function gets reported.
    decls: IndexMap<String, &'a AstNode>,
    /// Names that appear as resolved call targets anywhere in the unit.
    calls: HashSet<String>,
}

/// The analyzer: an ordered set of rules plus one `analyze` entry point.
///
/// The same instance may analyze any number of trees; every run resets rule
/// state and builds fresh scope and registry state, so results match a
/// freshly constructed analyzer.
pub struct Analyzer {
    rules: Vec<Box<dyn Rule>>,
}

impl Analyzer {
    /// An analyzer with no rules registered. Declaration and use bookkeeping
    /// still runs, so unused-symbol checks work without any rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// An analyzer with the built-in rules in their default order.
    pub fn with_default_rules() -> Self {
        Self {
            rules: super::rules::default_rules(),
        }
    }

    /// Append a rule; rules run in registration order at every node.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Walk the tree once and return every finding in traversal order.
    pub fn analyze(&mut self, root: &AstNode) -> Vec<Issue> {
        for rule in &mut self.rules {
            rule.reset();
        }

        let mut pass = Pass {
            scopes: ScopeStack::new(),
            functions: FunctionRegistry::default(),
            issues: Vec::new(),
        };
        pass.walk(root, &mut self.rules);

        debug_assert_eq!(pass.scopes.depth(), 1, "scope stack must balance");
        pass.finish()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// State owned by one in-flight `analyze` call.
struct Pass<'a> {
    scopes: ScopeStack<'a>,
    functions: FunctionRegistry<'a>,
    issues: Vec<Issue>,
}

impl<'a> Pass<'a> {
    fn walk(&mut self, node: &'a AstNode, rules: &mut [Box<dyn Rule>]) {
        let opens_scope = matches!(node.kind, NodeKind::FunctionDecl | NodeKind::CompoundStmt);
        if opens_scope {
            self.scopes.push();
            if node.kind == NodeKind::FunctionDecl {
                // Parameters live in the function's own scope and start out
                // like ordinary declared-but-unassigned locals.
                for param in node
                    .children
                    .iter()
                    .filter(|child| child.kind == NodeKind::ParamDecl)
                {
                    if let Some(name) = param.name.as_deref() {
                        self.scopes
                            .declare(name, param, param.declared_type.as_deref().unwrap_or(""));
                    }
                }
            }
        }

        self.record(node);

        for rule in rules.iter_mut() {
            self.issues.extend(rule.visit(node, &mut self.scopes));
        }

        for child in &node.children {
            self.walk(child, rules);
        }

        if opens_scope {
            let idx = self.scopes.pop();
            self.report_unused(idx);
        }
    }

    /// Declaration and use bookkeeping for a single node, against the
    /// current scope and the whole-unit registry.
    fn record(&mut self, node: &'a AstNode) {
        match node.kind {
            NodeKind::VarDecl => {
                if let Some(name) = node.name.as_deref() {
                    self.scopes
                        .declare(name, node, node.declared_type.as_deref().unwrap_or(""));
                    // Any child that is not a bare type reference means the
                    // declaration carries an initializer.
                    if node
                        .children
                        .iter()
                        .any(|child| child.kind != NodeKind::TypeRef)
                    {
                        self.scopes.initialize(name);
                    }
                }
            }
            NodeKind::FunctionDecl => {
                if let Some(name) = node.name.as_deref() {
                    self.functions.decls.insert(name.to_string(), node);
                }
            }
            NodeKind::IdentRef => {
                if let Some(name) = node.name.as_deref() {
                    self.scopes.use_name(name);
                }
            }
            NodeKind::CallExpr => {
                // Prefer the provider's resolved callee; fall back to the
                // first identifier child. Unresolvable calls (function
                // pointers and the like) are silently not attributed.
                let callee = node.callee.clone().or_else(|| {
                    node.children
                        .iter()
                        .find(|child| child.kind == NodeKind::IdentRef)
                        .and_then(|child| child.name.clone())
                });
                if let Some(name) = callee {
                    self.functions.calls.insert(name);
                }
            }
            _ => {}
        }
    }

    /// Emit an issue for every never-used symbol of the given scope.
    fn report_unused(&mut self, scope_idx: usize) {
        let unused: Vec<Issue> = self
            .scopes
            .get_scope(scope_idx)
            .symbols
            .values()
            .filter(|symbol| symbol.use_count == 0)
            .map(|symbol| {
                let (rule_id, what) = if symbol.is_parameter() {
                    ("UNUSED_PARAM", "Parameter")
                } else {
                    ("UNUSED_VAR", "Variable")
                };
                Issue::new(
                    rule_id,
                    format!("{} '{}' declared but never used", what, symbol.name),
                    symbol.decl.span.start.line,
                    symbol.decl.span.start.column,
                )
            })
            .collect();
        self.issues.extend(unused);
    }

    /// Whole-unit checks after the traversal: unused top-level symbols, then
    /// functions that are never the target of any resolved call.
    fn finish(mut self) -> Vec<Issue> {
        let root_idx = self.scopes.current_index();
        self.report_unused(root_idx);

        for (name, node) in &self.functions.decls {
            if name == "main" || self.functions.calls.contains(name) {
                continue;
            }
            self.issues.push(Issue::new(
                "UNUSED_FUNC",
                format!("Function '{}' declared but never called", name),
                node.span.start.line,
                node.span.start.column,
            ));
        }

        self.issues
    }
}

// ========================================================================
// Tests
// ========================================================================
