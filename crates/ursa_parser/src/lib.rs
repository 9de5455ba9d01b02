//! ursa_parser: Pratt parser for Ursa source code.
//!
//! Pulls tokens from the scanner two at a time (current plus one-token
//! lookahead) and assembles statement and expression nodes with a
//! precedence-climbing loop. Parse errors are recorded as diagnostics and
//! never abort the pass; `parse_program` always returns a `Program`.

mod parser;
mod precedence;

pub use parser::Parser;
pub use precedence::OperatorPrecedence;
