use std::ops::Range;
use std::sync::Arc;

use cvet_common::Span;

// ============================================================================
// Node vocabulary
// ============================================================================

/// Node kinds of the adapted syntax tree.
///
/// The provider translates the concrete C grammar into this fixed vocabulary;
/// the traversal engine and the rules only ever see these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    TranslationUnit,
    /// Function definition or prototype.
    FunctionDecl,
    ParamDecl,
    VarDecl,
    /// Bare reference to a named type inside a declaration.
    TypeRef,
    CompoundStmt,
    IfStmt,
    WhileStmt,
    DoStmt,
    ForStmt,
    SwitchStmt,
    CaseStmt,
    DefaultStmt,
    BreakStmt,
    ContinueStmt,
    ReturnStmt,
    GotoStmt,
    LabelStmt,
    /// A bare `;` used as a statement body.
    NullStmt,
    /// An identifier read in expression position.
    IdentRef,
    CallExpr,
    /// Binary or plain-assignment operator with two operand children.
    BinaryOp,
    UnaryOp,
    Literal,
    /// Anything the vocabulary does not model; children are still traversed.
    Other,
}

// ============================================================================
// Nodes
// ============================================================================

/// One node of the adapted syntax tree.
///
/// Nodes own their children and share the source text, so the tree is fully
/// detached from the parser that produced it. `name` is set for identifier
/// references, declarations, and parameters; `declared_type` for declarations;
/// `callee` for call expressions whose target is a direct identifier.
#[derive(Clone)]
pub struct AstNode {
    pub kind: NodeKind,
    pub name: Option<String>,
    pub declared_type: Option<String>,
    pub callee: Option<String>,
    pub span: Span,
    pub children: Vec<AstNode>,
    /// Shared source text of the whole translation unit.
    pub source: Arc<str>,
    /// This node's byte range within `source`.
    pub byte_range: Range<usize>,
}

impl AstNode {
    pub fn new(kind: NodeKind, span: Span, source: Arc<str>, byte_range: Range<usize>) -> Self {
        Self {
            kind,
            name: None,
            declared_type: None,
            callee: None,
            span,
            children: Vec::new(),
            source,
            byte_range,
        }
    }

    /// Source text covered by this node.
    pub fn text(&self) -> &str {
        &self.source[self.byte_range.clone()]
    }

    /// First lexical token of this node's source text, skipping whitespace
    /// and comments. Identifier and number characters group into one token;
    /// anything else is a single-character token.
    pub fn first_token(&self) -> Option<&str> {
        let mut rest = self.text();
        loop {
            rest = rest.trim_start();
            if let Some(stripped) = rest.strip_prefix("/*") {
                rest = match stripped.find("*/") {
                    Some(end) => &stripped[end + 2..],
                    None => "",
                };
            } else if let Some(stripped) = rest.strip_prefix("//") {
                rest = match stripped.find('\n') {
                    Some(end) => &stripped[end + 1..],
                    None => "",
                };
            } else {
                break;
            }
        }
        let first = rest.chars().next()?;
        if first.is_alphanumeric() || first == '_' {
            let end = rest
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            Some(&rest[..end])
        } else {
            Some(&rest[..first.len_utf8()])
        }
    }
}

// The derived Debug would print the shared source once per node; keep dumps
// readable by showing only the interesting fields.
impl std::fmt::Debug for AstNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = f.debug_struct("AstNode");
        out.field("kind", &self.kind);
        if let Some(ref name) = self.name {
            out.field("name", name);
        }
        if let Some(ref declared_type) = self.declared_type {
            out.field("type", declared_type);
        }
        if let Some(ref callee) = self.callee {
            out.field("callee", callee);
        }
        out.field("span", &format_args!("{}", self.span));
        if !self.children.is_empty() {
            out.field("children", &self.children);
        }
        out.finish()
    }
}
