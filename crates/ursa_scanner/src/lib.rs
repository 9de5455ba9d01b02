//! ursa_scanner: Lexer/tokenizer for Ursa source code.
//!
//! Converts source text into a lazy token sequence, one token per
//! `next_token` call. The scanner never fails hard: unrecognized bytes come
//! out as `Unknown` tokens and end of input is a sticky `EndOfFileToken`.

mod scanner;

pub use scanner::Scanner;
