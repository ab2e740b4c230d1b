//! tstrip_ast: Syntax tree definitions for the tstrip transpiler.
//!
//! Tokens and nodes share one `SyntaxKind` space. Nodes reference their
//! children through arena-allocated references; type-position nodes hang off
//! executable nodes only through explicit annotation edges, which is what
//! makes erasure a structural no-op rather than a rewrite.

pub mod flags;
pub mod node;
pub mod syntax_kind;

pub use flags::{ModifierFlags, NodeFlags, TokenFlags};
pub use node::AstNode;
pub use syntax_kind::SyntaxKind;
