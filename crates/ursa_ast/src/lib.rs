//! ursa_ast: Token and syntax tree definitions for the Ursa front end.
//!
//! This crate defines the `TokenKind` enum, the `Token` pair produced by the
//! scanner, and the tree nodes assembled by the parser. Statements and
//! expressions are closed sum types; every node carries its origin token and
//! renders back to a canonical parenthesized form via `Display`.

pub mod node;
pub mod token;
pub mod token_kind;

// Re-export key types
pub use node::*;
pub use token::Token;
pub use token_kind::TokenKind;
