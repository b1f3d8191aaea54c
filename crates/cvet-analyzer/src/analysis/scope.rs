use indexmap::IndexMap;

use crate::ast::nodes::{AstNode, NodeKind};

/// The analyzer's record of one declared identifier.
#[derive(Debug)]
pub struct Symbol<'a> {
    pub name: String,
    /// The declaring node, borrowed from the tree under analysis.
    pub decl: &'a AstNode,
    /// Declared type as an opaque display string.
    pub declared_type: String,
    pub use_count: u32,
    pub initialized: bool,
}

impl<'a> Symbol<'a> {
    /// Whether this symbol was declared as a function parameter.
    pub fn is_parameter(&self) -> bool {
        self.decl.kind == NodeKind::ParamDecl
    }
}

/// A lexical scope: declared names mapped to their symbols, linked to the
/// enclosing scope. Symbols are insertion-ordered so diagnostics come out in
/// declaration order.
#[derive(Debug)]
pub struct Scope<'a> {
    pub symbols: IndexMap<String, Symbol<'a>>,
    parent: Option<usize>,
}

/// Stack of nested scopes for lexical scoping.
///
/// Scopes are stored in a flat `Vec` and linked by parent indices. `push`
/// creates a child of the current scope; `pop` returns to the parent while
/// leaving the popped scope readable for the unused-symbol sweep.
#[derive(Debug)]
pub struct ScopeStack<'a> {
    scopes: Vec<Scope<'a>>,
    current: usize,
}

impl<'a> Default for ScopeStack<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ScopeStack<'a> {
    pub fn new() -> Self {
        let root = Scope {
            symbols: IndexMap::new(),
            parent: None,
        };
        Self {
            scopes: vec![root],
            current: 0,
        }
    }

    /// Push a new child scope of the current scope.
    pub fn push(&mut self) {
        let parent = self.current;
        let idx = self.scopes.len();
        self.scopes.push(Scope {
            symbols: IndexMap::new(),
            parent: Some(parent),
        });
        self.current = idx;
    }

    /// Pop the current scope, returning its index (for later inspection).
    pub fn pop(&mut self) -> usize {
        let old = self.current;
        self.current = self.scopes[old].parent.expect("cannot pop root scope");
        old
    }

    /// Get a scope by index (for reading after pop).
    pub fn get_scope(&self, idx: usize) -> &Scope<'a> {
        &self.scopes[idx]
    }

    /// Index of the current scope.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Nesting depth of the current scope (the root scope is depth 1).
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut idx = self.current;
        while let Some(parent) = self.scopes[idx].parent {
            depth += 1;
            idx = parent;
        }
        depth
    }

    /// Register a new symbol in the current scope.
    ///
    /// First declaration wins: if the name already exists in this scope (not
    /// an ancestor), the call is a silent no-op and the existing symbol keeps
    /// its usage and initialization state. Same-scope redeclarations are
    /// dropped, not diagnosed; a known limitation of this contract.
    pub fn declare(&mut self, name: &str, decl: &'a AstNode, declared_type: &str) {
        let scope = &mut self.scopes[self.current];
        if scope.symbols.contains_key(name) {
            return;
        }
        scope.symbols.insert(
            name.to_string(),
            Symbol {
                name: name.to_string(),
                decl,
                declared_type: declared_type.to_string(),
                use_count: 0,
                initialized: false,
            },
        );
    }

    /// Record a use of `name`. Silent no-op when the name resolves nowhere:
    /// undeclared identifiers are not this component's concern.
    pub fn use_name(&mut self, name: &str) {
        if let Some(symbol) = self.lookup_mut(name) {
            symbol.use_count += 1;
        }
    }

    /// Mark `name` as initialized. Silent no-op when unresolved.
    pub fn initialize(&mut self, name: &str) {
        if let Some(symbol) = self.lookup_mut(name) {
            symbol.initialized = true;
        }
    }

    /// Look up a symbol by name, walking from the current scope outward.
    /// The only operation that crosses scope boundaries; never mutates.
    pub fn lookup(&self, name: &str) -> Option<&Symbol<'a>> {
        let idx = self.lookup_index(name)?;
        self.scopes[idx].symbols.get(name)
    }

    fn lookup_mut(&mut self, name: &str) -> Option<&mut Symbol<'a>> {
        let idx = self.lookup_index(name)?;
        self.scopes[idx].symbols.get_mut(name)
    }

    /// Index of the nearest scope containing `name`, if any.
    fn lookup_index(&self, name: &str) -> Option<usize> {
        let mut idx = self.current;
        loop {
            if self.scopes[idx].symbols.contains_key(name) {
                return Some(idx);
            }
            idx = self.scopes[idx].parent?;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cvet_common::Span;

    use super::*;

    fn var_node() -> AstNode {
        AstNode::new(NodeKind::VarDecl, Span::dummy(), Arc::from(""), 0..0)
    }

    fn param_node() -> AstNode {
        AstNode::new(NodeKind::ParamDecl, Span::dummy(), Arc::from(""), 0..0)
    }

    #[test]
    fn declare_and_lookup() {
        let node = var_node();
        let mut stack = ScopeStack::new();
        stack.declare("x", &node, "int");
        assert!(stack.lookup("x").is_some());
        assert!(stack.lookup("y").is_none());
    }

    #[test]
    fn nested_scope_lookup() {
        let node = var_node();
        let mut stack = ScopeStack::new();
        stack.declare("x", &node, "int");
        stack.push();
        // x is visible from the parent.
        assert!(stack.lookup("x").is_some());
        stack.declare("y", &node, "int");
        assert!(stack.lookup("y").is_some());
        stack.pop();
        // y is no longer visible.
        assert!(stack.lookup("y").is_none());
    }

    #[test]
    fn first_declaration_wins() {
        let first = var_node();
        let second = param_node();
        let mut stack = ScopeStack::new();
        stack.declare("x", &first, "int");
        stack.use_name("x");
        stack.initialize("x");
        // A same-scope redeclaration must not replace the symbol or reset
        // its bookkeeping.
        stack.declare("x", &second, "float");
        let symbol = stack.lookup("x").unwrap();
        assert_eq!(symbol.declared_type, "int");
        assert_eq!(symbol.use_count, 1);
        assert!(symbol.initialized);
        assert!(!symbol.is_parameter());
    }

    #[test]
    fn shadowing_in_child_scope() {
        let outer = var_node();
        let inner = param_node();
        let mut stack = ScopeStack::new();
        stack.declare("x", &outer, "int");
        stack.push();
        stack.declare("x", &inner, "char");
        assert_eq!(stack.lookup("x").unwrap().declared_type, "char");
        stack.pop();
        assert_eq!(stack.lookup("x").unwrap().declared_type, "int");
    }

    #[test]
    fn use_counts_cross_scopes() {
        let node = var_node();
        let mut stack = ScopeStack::new();
        stack.declare("x", &node, "int");
        stack.push();
        stack.use_name("x");
        stack.use_name("x");
        stack.pop();
        assert_eq!(stack.lookup("x").unwrap().use_count, 2);
    }

    #[test]
    fn initialize_crosses_scopes() {
        let node = var_node();
        let mut stack = ScopeStack::new();
        stack.declare("x", &node, "int");
        stack.push();
        stack.initialize("x");
        stack.pop();
        assert!(stack.lookup("x").unwrap().initialized);
    }

    #[test]
    fn unresolved_names_are_silent() {
        let mut stack = ScopeStack::new();
        // Neither call may fail or create a binding.
        stack.use_name("ghost");
        stack.initialize("ghost");
        assert!(stack.lookup("ghost").is_none());
    }

    #[test]
    fn popped_scope_stays_readable() {
        let node = var_node();
        let mut stack = ScopeStack::new();
        stack.push();
        stack.declare("local", &node, "int");
        let idx = stack.pop();
        let scope = stack.get_scope(idx);
        assert_eq!(scope.symbols.len(), 1);
        assert_eq!(scope.symbols["local"].use_count, 0);
    }

    #[test]
    fn depth_tracks_nesting() {
        let mut stack = ScopeStack::new();
        assert_eq!(stack.depth(), 1);
        stack.push();
        stack.push();
        assert_eq!(stack.depth(), 3);
        stack.pop();
        stack.pop();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current_index(), 0);
    }
}
