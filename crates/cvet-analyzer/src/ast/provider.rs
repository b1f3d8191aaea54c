//! C parsing via the tree-sitter grammar.
//!
//! This is the only module that touches tree-sitter types. [`SourceFile::parse`]
//! runs the external parser once and adapts the concrete syntax tree into the
//! owned [`AstNode`] interface consumed by the analyzer; nothing downstream
//! ever sees a tree-sitter node.

use std::sync::Arc;

use tree_sitter::{Node, Parser};

use cvet_common::{Position, Span};

use super::nodes::{AstNode, NodeKind};

/// Errors from the external parser boundary.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to load the C grammar: {0}")]
    Grammar(String),
    #[error("source could not be parsed as C")]
    Unparseable,
}

/// A parsed C translation unit: the shared source text plus the adapted AST.
#[derive(Debug)]
pub struct SourceFile {
    pub source: Arc<str>,
    pub root: AstNode,
}

impl SourceFile {
    /// Parse C source text and adapt it into an [`AstNode`] tree.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        let language = tree_sitter_c::LANGUAGE;
        parser
            .set_language(&language.into())
            .map_err(|e| ParseError::Grammar(e.to_string()))?;

        let tree = parser.parse(source, None).ok_or(ParseError::Unparseable)?;

        let source: Arc<str> = Arc::from(source);
        let adapter = Adapter {
            source: source.clone(),
        };
        let root = adapter.branch(tree.root_node(), NodeKind::TranslationUnit);
        Ok(Self { source, root })
    }
}

// ============================================================================
// Grammar adaptation
// ============================================================================

/// Translates concrete tree-sitter nodes into the analyzer's vocabulary.
struct Adapter {
    source: Arc<str>,
}

impl Adapter {
    /// Adapt one concrete node. Most nodes map to exactly one [`AstNode`];
    /// comments vanish and multi-declarator declarations expand.
    fn adapt(&self, node: Node) -> Vec<AstNode> {
        match node.kind() {
            "comment" => Vec::new(),
            "function_definition" => vec![self.adapt_function_definition(node)],
            "declaration" => self.adapt_declaration(node),
            "compound_statement" => vec![self.branch(node, NodeKind::CompoundStmt)],
            "expression_statement" => self.adapt_expression_statement(node),
            "if_statement" => vec![self.adapt_if(node)],
            "while_statement" => vec![self.adapt_condition_and_body(node, NodeKind::WhileStmt)],
            "switch_statement" => vec![self.adapt_condition_and_body(node, NodeKind::SwitchStmt)],
            "do_statement" => vec![self.adapt_do(node)],
            "for_statement" => vec![self.adapt_for(node)],
            "case_statement" => vec![self.adapt_case(node)],
            "break_statement" => vec![self.leaf(node, NodeKind::BreakStmt)],
            "continue_statement" => vec![self.leaf(node, NodeKind::ContinueStmt)],
            "return_statement" => vec![self.branch(node, NodeKind::ReturnStmt)],
            "goto_statement" => vec![self.leaf(node, NodeKind::GotoStmt)],
            "labeled_statement" => vec![self.branch(node, NodeKind::LabelStmt)],
            "identifier" => vec![self.ident_ref(node)],
            "call_expression" => vec![self.adapt_call(node)],
            "assignment_expression" | "binary_expression" => vec![self.adapt_binary(node)],
            "unary_expression" | "update_expression" | "pointer_expression" => {
                vec![self.branch(node, NodeKind::UnaryOp)]
            }
            "number_literal" | "char_literal" | "string_literal" | "concatenated_string"
            | "true" | "false" | "null" => vec![self.leaf(node, NodeKind::Literal)],
            // Everything else (nested parentheses included) stays generic so
            // identifier uses inside it are still observed.
            _ => vec![self.branch(node, NodeKind::Other)],
        }
    }

    // ------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------

    fn adapt_if(&self, node: Node) -> AstNode {
        let mut adapted = self.make(node, NodeKind::IfStmt);
        if let Some(condition) = node.child_by_field_name("condition") {
            adapted.children.extend(self.adapt_condition(condition));
        }
        if let Some(consequence) = node.child_by_field_name("consequence") {
            adapted.children.extend(self.adapt(consequence));
        }
        if let Some(alternative) = node.child_by_field_name("alternative") {
            // The else clause wraps the actual else statement.
            adapted.children.extend(self.adapt_children(alternative));
        }
        adapted
    }

    fn adapt_condition_and_body(&self, node: Node, kind: NodeKind) -> AstNode {
        let mut adapted = self.make(node, kind);
        if let Some(condition) = node.child_by_field_name("condition") {
            adapted.children.extend(self.adapt_condition(condition));
        }
        if let Some(body) = node.child_by_field_name("body") {
            adapted.children.extend(self.adapt(body));
        }
        adapted
    }

    fn adapt_do(&self, node: Node) -> AstNode {
        let mut adapted = self.make(node, NodeKind::DoStmt);
        if let Some(body) = node.child_by_field_name("body") {
            adapted.children.extend(self.adapt(body));
        }
        if let Some(condition) = node.child_by_field_name("condition") {
            adapted.children.extend(self.adapt_condition(condition));
        }
        adapted
    }

    fn adapt_for(&self, node: Node) -> AstNode {
        let mut adapted = self.make(node, NodeKind::ForStmt);
        if let Some(initializer) = node.child_by_field_name("initializer") {
            adapted.children.extend(self.adapt(initializer));
        }
        if let Some(condition) = node.child_by_field_name("condition") {
            adapted.children.extend(self.adapt_condition(condition));
        }
        if let Some(update) = node.child_by_field_name("update") {
            adapted.children.extend(self.adapt(update));
        }
        if let Some(body) = node.child_by_field_name("body") {
            adapted.children.extend(self.adapt(body));
        }
        adapted
    }

    /// Unwrap the syntactic parentheses around a condition so the condition
    /// subtree starts at the expression's own first token. Only the outermost
    /// pair is syntax; any further nesting is a real expression node.
    fn adapt_condition(&self, node: Node) -> Vec<AstNode> {
        if node.kind() == "parenthesized_expression" {
            let mut cursor = node.walk();
            let inner = node
                .named_children(&mut cursor)
                .find(|child| child.kind() != "comment");
            match inner {
                Some(expression) => self.adapt(expression),
                None => Vec::new(),
            }
        } else {
            self.adapt(node)
        }
    }

    /// A bare `;` is a null statement; other expression statements unwrap to
    /// their expression.
    fn adapt_expression_statement(&self, node: Node) -> Vec<AstNode> {
        let mut cursor = node.walk();
        let inner: Vec<Node> = node
            .named_children(&mut cursor)
            .filter(|child| child.kind() != "comment")
            .collect();
        if inner.is_empty() {
            vec![self.leaf(node, NodeKind::NullStmt)]
        } else {
            inner
                .into_iter()
                .flat_map(|child| self.adapt(child))
                .collect()
        }
    }

    /// Case and default labels. Children are the label's statements only:
    /// the label value is a constant expression, not part of the body.
    fn adapt_case(&self, node: Node) -> AstNode {
        let value = node.child_by_field_name("value");
        let kind = if value.is_some() {
            NodeKind::CaseStmt
        } else {
            NodeKind::DefaultStmt
        };
        let mut adapted = self.make(node, kind);
        let value_id = value.map(|v| v.id());
        let mut cursor = node.walk();
        adapted.children = node
            .named_children(&mut cursor)
            .filter(|child| Some(child.id()) != value_id)
            .flat_map(|child| self.adapt(child))
            .collect();
        adapted
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    fn ident_ref(&self, node: Node) -> AstNode {
        let mut adapted = self.make(node, NodeKind::IdentRef);
        adapted.name = Some(self.text(node));
        adapted
    }

    fn adapt_call(&self, node: Node) -> AstNode {
        let mut adapted = self.make(node, NodeKind::CallExpr);
        if let Some(function) = node.child_by_field_name("function") {
            // Direct identifier targets resolve here; anything else (function
            // pointers, parenthesized targets) is left to the caller's
            // child-scanning fallback.
            if function.kind() == "identifier" {
                adapted.callee = Some(self.text(function));
            }
            adapted.children.extend(self.adapt(function));
        }
        if let Some(arguments) = node.child_by_field_name("arguments") {
            adapted.children.extend(self.adapt_children(arguments));
        }
        adapted
    }

    /// Plain assignment and every binary operator share one kind with exactly
    /// two operand children; the operator token is not modeled. Compound
    /// assignments (`+=` etc.) read their left operand first and stay generic.
    fn adapt_binary(&self, node: Node) -> AstNode {
        let compound = node.kind() == "assignment_expression"
            && node
                .child_by_field_name("operator")
                .map(|op| op.kind() != "=")
                .unwrap_or(false);
        let kind = if compound {
            NodeKind::Other
        } else {
            NodeKind::BinaryOp
        };
        let mut adapted = self.make(node, kind);
        for field in ["left", "right"] {
            if let Some(operand) = node.child_by_field_name(field) {
                adapted.children.extend(self.adapt(operand));
            }
        }
        adapted
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    fn adapt_function_definition(&self, node: Node) -> AstNode {
        let mut adapted = self.make(node, NodeKind::FunctionDecl);
        adapted.declared_type = node.child_by_field_name("type").map(|t| self.text(t));

        let declarator = node.child_by_field_name("declarator");
        if let Some(function_declarator) = declarator.and_then(find_function_declarator) {
            adapted.name = declarator_name(function_declarator).map(|n| self.text(n));
            if let Some(parameters) = function_declarator.child_by_field_name("parameters") {
                let mut cursor = parameters.walk();
                for parameter in parameters.named_children(&mut cursor) {
                    if parameter.kind() == "parameter_declaration" {
                        let adapted_parameter = self.adapt_parameter(parameter);
                        // `(void)` and unnamed parameters declare nothing.
                        if adapted_parameter.name.is_some() {
                            adapted.children.push(adapted_parameter);
                        }
                    }
                }
            }
        }
        if let Some(body) = node.child_by_field_name("body") {
            adapted.children.extend(self.adapt(body));
        }
        adapted
    }

    fn adapt_parameter(&self, node: Node) -> AstNode {
        let declarator = node.child_by_field_name("declarator");
        // Locate the parameter at its name when it has one; abstract
        // parameters like `(void)` keep the whole declaration's span.
        let mut adapted = match declarator.and_then(declarator_name) {
            Some(name_node) => {
                let mut n = self.make(name_node, NodeKind::ParamDecl);
                n.name = Some(self.text(name_node));
                n
            }
            None => self.make(node, NodeKind::ParamDecl),
        };
        adapted.declared_type = Some(self.render_declared_type(node));
        adapted
    }

    /// A C declaration can declare several names at once; each declarator
    /// becomes its own node. A declarator that resolves to a plain function
    /// declarator is a prototype and registers as a function instead.
    fn adapt_declaration(&self, node: Node) -> Vec<AstNode> {
        let type_node = node.child_by_field_name("type");
        let base_type = type_node.map(|t| self.text(t)).unwrap_or_default();
        // Named types become an explicit type-reference child so that
        // "initializer = any child that is not a type reference" holds.
        let type_ref = type_node
            .filter(|t| t.kind() == "type_identifier")
            .map(|t| self.leaf(t, NodeKind::TypeRef));

        let type_id = type_node.map(|t| t.id());
        let mut out = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if Some(child.id()) == type_id || child.kind() == "comment" {
                continue;
            }
            out.extend(self.adapt_declarator(child, &base_type, type_ref.as_ref()));
        }
        out
    }

    fn adapt_declarator(
        &self,
        declarator: Node,
        base_type: &str,
        type_ref: Option<&AstNode>,
    ) -> Vec<AstNode> {
        // Prototype: `int foo(void);`, possibly pointer-returning. Function
        // pointers fail the identifier check inside and fall through to the
        // variable path.
        if find_function_declarator(declarator).is_some() {
            let mut adapted = self.make(declarator, NodeKind::FunctionDecl);
            adapted.name = declarator_name(declarator).map(|n| self.text(n));
            adapted.declared_type = Some(base_type.to_string());
            return vec![adapted];
        }

        let Some(name_node) = declarator_name(declarator) else {
            // Storage-class specifiers, attributes, and other non-declarator
            // children carry no name and are skipped.
            return Vec::new();
        };

        let mut adapted = self.make(declarator, NodeKind::VarDecl);
        adapted.name = Some(self.text(name_node));
        adapted.declared_type = Some(format_declared_type(base_type, pointer_depth(declarator)));
        if let Some(type_ref) = type_ref {
            adapted.children.push(type_ref.clone());
        }
        self.collect_declarator_exprs(declarator, &mut adapted.children);
        vec![adapted]
    }

    /// Array sizes and initializer values become the declaration's children.
    fn collect_declarator_exprs(&self, declarator: Node, children: &mut Vec<AstNode>) {
        match declarator.kind() {
            "init_declarator" => {
                if let Some(inner) = declarator.child_by_field_name("declarator") {
                    self.collect_declarator_exprs(inner, children);
                }
                if let Some(value) = declarator.child_by_field_name("value") {
                    children.extend(self.adapt(value));
                }
            }
            "array_declarator" => {
                if let Some(inner) = declarator.child_by_field_name("declarator") {
                    self.collect_declarator_exprs(inner, children);
                }
                if let Some(size) = declarator.child_by_field_name("size") {
                    children.extend(self.adapt(size));
                }
            }
            "pointer_declarator" => {
                if let Some(inner) = declarator.child_by_field_name("declarator") {
                    self.collect_declarator_exprs(inner, children);
                }
            }
            _ => {}
        }
    }

    fn render_declared_type(&self, node: Node) -> String {
        let base = node
            .child_by_field_name("type")
            .map(|t| self.text(t))
            .unwrap_or_default();
        let depth = node
            .child_by_field_name("declarator")
            .map(pointer_depth)
            .unwrap_or(0);
        format_declared_type(&base, depth)
    }

    // ------------------------------------------------------------------
    // Shared builders
    // ------------------------------------------------------------------

    fn make(&self, node: Node, kind: NodeKind) -> AstNode {
        AstNode::new(kind, self.node_span(node), self.source.clone(), node.byte_range())
    }

    fn leaf(&self, node: Node, kind: NodeKind) -> AstNode {
        self.make(node, kind)
    }

    fn branch(&self, node: Node, kind: NodeKind) -> AstNode {
        let mut adapted = self.make(node, kind);
        adapted.children = self.adapt_children(node);
        adapted
    }

    fn adapt_children(&self, node: Node) -> Vec<AstNode> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .flat_map(|child| self.adapt(child))
            .collect()
    }

    fn text(&self, node: Node) -> String {
        node.utf8_text(self.source.as_bytes())
            .unwrap_or("")
            .to_string()
    }

    fn node_span(&self, node: Node) -> Span {
        let start = node.start_position();
        let end = node.end_position();
        Span::new(
            Position::new(
                start.row as u32 + 1,
                start.column as u32 + 1,
                node.start_byte() as u32,
            ),
            Position::new(
                end.row as u32 + 1,
                end.column as u32 + 1,
                node.end_byte() as u32,
            ),
        )
    }
}

// ============================================================================
// Declarator helpers
// ============================================================================

/// Dig through pointer declarators to a function declarator whose own
/// declarator is a plain identifier, i.e. one that declares a function
/// rather than a function pointer.
fn find_function_declarator(mut node: Node) -> Option<Node> {
    loop {
        match node.kind() {
            "function_declarator" => {
                let inner = node.child_by_field_name("declarator")?;
                return if inner.kind() == "identifier" {
                    Some(node)
                } else {
                    None
                };
            }
            "pointer_declarator" => {
                node = node.child_by_field_name("declarator")?;
            }
            _ => return None,
        }
    }
}

/// Innermost identifier of a declarator, digging through pointers, arrays,
/// parentheses, initializers, and function declarators.
fn declarator_name(node: Node) -> Option<Node> {
    match node.kind() {
        "identifier" => Some(node),
        "pointer_declarator" | "array_declarator" | "function_declarator" | "init_declarator" => {
            declarator_name(node.child_by_field_name("declarator")?)
        }
        "parenthesized_declarator" => {
            let mut cursor = node.walk();
            let inner = node
                .named_children(&mut cursor)
                .find(|child| child.kind() != "comment")?;
            declarator_name(inner)
        }
        _ => None,
    }
}

/// Number of pointer levels introduced by a declarator chain.
fn pointer_depth(mut node: Node) -> u32 {
    let mut depth = 0;
    loop {
        match node.kind() {
            "pointer_declarator" => {
                depth += 1;
                match node.child_by_field_name("declarator") {
                    Some(inner) => node = inner,
                    None => return depth,
                }
            }
            "init_declarator" => match node.child_by_field_name("declarator") {
                Some(inner) => node = inner,
                None => return depth,
            },
            _ => return depth,
        }
    }
}

/// The declared type as an opaque display string, one `*` per pointer level.
fn format_declared_type(base: &str, pointer_depth: u32) -> String {
    if pointer_depth == 0 {
        base.to_string()
    } else {
        format!("{} {}", base, "*".repeat(pointer_depth as usize))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> AstNode {
        SourceFile::parse(source).expect("source should parse").root
    }

    /// First node of the given kind, depth-first.
    fn find_kind(node: &AstNode, kind: NodeKind) -> Option<&AstNode> {
        if node.kind == kind {
            return Some(node);
        }
        node.children.iter().find_map(|child| find_kind(child, kind))
    }

    #[test]
    fn function_definition_shape() {
        let root = parse("int main(void) { return 0; }");
        assert_eq!(root.kind, NodeKind::TranslationUnit);
        let function = &root.children[0];
        assert_eq!(function.kind, NodeKind::FunctionDecl);
        assert_eq!(function.name.as_deref(), Some("main"));
        assert_eq!(function.declared_type.as_deref(), Some("int"));
        // `(void)` contributes no named parameter; the body is the only child.
        assert_eq!(function.children.len(), 1);
        assert_eq!(function.children[0].kind, NodeKind::CompoundStmt);
    }

    #[test]
    fn parameters_become_param_decls() {
        let root = parse("int add(int a, int b) { return 0; }");
        let function = &root.children[0];
        let params: Vec<_> = function
            .children
            .iter()
            .filter(|c| c.kind == NodeKind::ParamDecl)
            .collect();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name.as_deref(), Some("a"));
        assert_eq!(params[1].name.as_deref(), Some("b"));
        assert_eq!(params[0].declared_type.as_deref(), Some("int"));
    }

    #[test]
    fn declaration_without_initializer() {
        let root = parse("int main(void) { int x; return 0; }");
        let var = find_kind(&root, NodeKind::VarDecl).unwrap();
        assert_eq!(var.name.as_deref(), Some("x"));
        assert_eq!(var.declared_type.as_deref(), Some("int"));
        assert!(var.children.is_empty());
    }

    #[test]
    fn declaration_with_initializer_has_value_child() {
        let root = parse("int main(void) { int x = 5; return 0; }");
        let var = find_kind(&root, NodeKind::VarDecl).unwrap();
        assert_eq!(var.name.as_deref(), Some("x"));
        assert_eq!(var.children.len(), 1);
        assert_eq!(var.children[0].kind, NodeKind::Literal);
    }

    #[test]
    fn named_type_contributes_a_type_ref_child() {
        let root = parse("int main(void) { size_t n; return 0; }");
        let var = find_kind(&root, NodeKind::VarDecl).unwrap();
        assert_eq!(var.name.as_deref(), Some("n"));
        assert_eq!(var.children.len(), 1);
        assert_eq!(var.children[0].kind, NodeKind::TypeRef);
    }

    #[test]
    fn multiple_declarators_expand() {
        let root = parse("int main(void) { int a, b = 1; return 0; }");
        let body = find_kind(&root, NodeKind::CompoundStmt).unwrap();
        let vars: Vec<_> = body
            .children
            .iter()
            .filter(|c| c.kind == NodeKind::VarDecl)
            .collect();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].name.as_deref(), Some("a"));
        assert!(vars[0].children.is_empty());
        assert_eq!(vars[1].name.as_deref(), Some("b"));
        assert_eq!(vars[1].children.len(), 1);
    }

    #[test]
    fn pointer_declaration_renders_stars() {
        let root = parse("int main(void) { int *p; return 0; }");
        let var = find_kind(&root, NodeKind::VarDecl).unwrap();
        assert_eq!(var.name.as_deref(), Some("p"));
        assert_eq!(var.declared_type.as_deref(), Some("int *"));
    }

    #[test]
    fn prototype_is_a_function_decl_without_children() {
        let root = parse("void helper(int x);");
        let function = &root.children[0];
        assert_eq!(function.kind, NodeKind::FunctionDecl);
        assert_eq!(function.name.as_deref(), Some("helper"));
        assert!(function.children.is_empty());
    }

    #[test]
    fn function_pointer_is_a_variable() {
        let root = parse("int main(void) { int (*fp)(void); return 0; }");
        let var = find_kind(&root, NodeKind::VarDecl).unwrap();
        assert_eq!(var.name.as_deref(), Some("fp"));
    }

    #[test]
    fn if_condition_is_unwrapped() {
        let root = parse("int main(void) { if (0) { return 1; } return 0; }");
        let if_stmt = find_kind(&root, NodeKind::IfStmt).unwrap();
        assert_eq!(if_stmt.children[0].kind, NodeKind::Literal);
        assert_eq!(if_stmt.children[0].first_token(), Some("0"));
    }

    #[test]
    fn doubled_parentheses_stay_wrapped() {
        let root = parse("int main(void) { if ((0)) { return 1; } return 0; }");
        let if_stmt = find_kind(&root, NodeKind::IfStmt).unwrap();
        assert_eq!(if_stmt.children[0].kind, NodeKind::Other);
        assert_eq!(if_stmt.children[0].first_token(), Some("("));
    }

    #[test]
    fn bare_semicolon_body_is_a_null_statement() {
        let root = parse("int main(void) { int x = 1; if (x) ; return 0; }");
        let if_stmt = find_kind(&root, NodeKind::IfStmt).unwrap();
        assert_eq!(if_stmt.children.len(), 2);
        assert_eq!(if_stmt.children[0].kind, NodeKind::IdentRef);
        assert_eq!(if_stmt.children[1].kind, NodeKind::NullStmt);
    }

    #[test]
    fn case_children_exclude_the_label_value() {
        let root = parse(
            "int main(void) { int x = 1; switch (x) { case 1: break; default: break; } return 0; }",
        );
        let case = find_kind(&root, NodeKind::CaseStmt).unwrap();
        assert_eq!(case.children.len(), 1);
        assert_eq!(case.children[0].kind, NodeKind::BreakStmt);
        let default = find_kind(&root, NodeKind::DefaultStmt).unwrap();
        assert_eq!(default.children.len(), 1);
    }

    #[test]
    fn assignment_and_comparison_share_binary_op() {
        let root = parse("int main(void) { int x; x = 1; if (x == 2) { return 1; } return 0; }");
        let body = find_kind(&root, NodeKind::CompoundStmt).unwrap();
        let assignment = body
            .children
            .iter()
            .find(|c| c.kind == NodeKind::BinaryOp)
            .unwrap();
        assert_eq!(assignment.children.len(), 2);
        assert_eq!(assignment.children[0].kind, NodeKind::IdentRef);
        let if_stmt = find_kind(&root, NodeKind::IfStmt).unwrap();
        assert_eq!(if_stmt.children[0].kind, NodeKind::BinaryOp);
    }

    #[test]
    fn compound_assignment_stays_generic() {
        let root = parse("int main(void) { int x = 0; x += 1; return x; }");
        let body = find_kind(&root, NodeKind::CompoundStmt).unwrap();
        assert!(body.children.iter().all(|c| c.kind != NodeKind::BinaryOp));
    }

    #[test]
    fn direct_call_resolves_callee() {
        let root = parse("void f(void); int main(void) { f(); return 0; }");
        let call = find_kind(&root, NodeKind::CallExpr).unwrap();
        assert_eq!(call.callee.as_deref(), Some("f"));
        assert_eq!(call.children[0].kind, NodeKind::IdentRef);
    }

    #[test]
    fn indirect_call_has_no_callee() {
        let root = parse("int main(void) { int (*fp)(void); (*fp)(); return 0; }");
        let call = find_kind(&root, NodeKind::CallExpr).unwrap();
        assert!(call.callee.is_none());
    }

    #[test]
    fn locations_are_one_based() {
        let root = parse("int main(void) {\n    int x;\n    return 0;\n}\n");
        let var = find_kind(&root, NodeKind::VarDecl).unwrap();
        assert_eq!(var.span.start.line, 2);
        assert_eq!(var.span.start.column, 9);
    }

    #[test]
    fn comments_are_dropped() {
        let root = parse("int main(void) { /* note */ return 0; }");
        let body = find_kind(&root, NodeKind::CompoundStmt).unwrap();
        assert_eq!(body.children.len(), 1);
        assert_eq!(body.children[0].kind, NodeKind::ReturnStmt);
    }
}
