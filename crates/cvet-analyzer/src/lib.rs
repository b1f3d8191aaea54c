//! cvet-analyzer: the analysis core of cvet.
//!
//! This crate turns C source into findings in three stages:
//! - `ast::provider` parses one translation unit with the tree-sitter C
//!   grammar and adapts it into an owned, parser-independent node tree;
//! - `analysis::scope` tracks declared symbols across nested lexical scopes,
//!   counting uses and watching initialization;
//! - `analysis::analyzer` walks the tree exactly once, dispatching every node
//!   to the registered `analysis::rules` and sweeping each scope for unused
//!   symbols as it closes.

pub mod analysis;
pub mod ast;

pub use analysis::analyze;
pub use analysis::analyzer::Analyzer;
pub use analysis::rules::{default_rules, Rule, BUILTIN_RULE_IDS};
pub use ast::nodes::{AstNode, NodeKind};
pub use ast::provider::{ParseError, SourceFile};
