//! Scanner integration tests.
//!
//! Verifies that token sequences scanned from source text exactly match
//! reference lists, terminating in a single sticky end-of-file token.

use ursa_ast::TokenKind;
use ursa_scanner::Scanner;

/// Helper: scan all tokens from source and return as (kind, literal) pairs.
fn scan_all(source: &str) -> Vec<(TokenKind, String)> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        if token.kind == TokenKind::EndOfFileToken {
            assert_eq!(token.literal, "");
            break;
        }
        tokens.push((token.kind, token.literal));
    }
    tokens
}

/// Helper: scan all token kinds.
fn scan_kinds(source: &str) -> Vec<TokenKind> {
    scan_all(source).into_iter().map(|(k, _)| k).collect()
}

fn assert_tokens(source: &str, expected: &[(TokenKind, &str)]) {
    let tokens = scan_all(source);
    assert_eq!(tokens.len(), expected.len(), "token count for {:?}", source);
    for (i, ((kind, literal), (want_kind, want_literal))) in
        tokens.iter().zip(expected).enumerate()
    {
        assert_eq!(kind, want_kind, "kind of token {} in {:?}", i, source);
        assert_eq!(literal, want_literal, "literal of token {} in {:?}", i, source);
    }
}

#[test]
fn test_empty_source() {
    assert!(scan_all("").is_empty());
}

#[test]
fn test_whitespace_only() {
    assert!(scan_all(" \t\r\n  \n").is_empty());
}

#[test]
fn test_delimiters_and_single_operators() {
    assert_tokens(
        "=+-*/|&(){}[],:;",
        &[
            (TokenKind::EqualsToken, "="),
            (TokenKind::PlusToken, "+"),
            (TokenKind::MinusToken, "-"),
            (TokenKind::AsteriskToken, "*"),
            (TokenKind::SlashToken, "/"),
            (TokenKind::BarToken, "|"),
            (TokenKind::AmpersandToken, "&"),
            (TokenKind::OpenParenToken, "("),
            (TokenKind::CloseParenToken, ")"),
            (TokenKind::OpenBraceToken, "{"),
            (TokenKind::CloseBraceToken, "}"),
            (TokenKind::OpenBracketToken, "["),
            (TokenKind::CloseBracketToken, "]"),
            (TokenKind::CommaToken, ","),
            (TokenKind::ColonToken, ":"),
            (TokenKind::SemicolonToken, ";"),
        ],
    );
}

#[test]
fn test_compound_operators() {
    assert_tokens(
        "== => += ++ -= -- |= || &= && != <= << >= >> ^= % ~ ^ ! < >",
        &[
            (TokenKind::EqualsEqualsToken, "=="),
            (TokenKind::EqualsGreaterThanToken, "=>"),
            (TokenKind::PlusEqualsToken, "+="),
            (TokenKind::PlusPlusToken, "++"),
            (TokenKind::MinusEqualsToken, "-="),
            (TokenKind::MinusMinusToken, "--"),
            (TokenKind::BarEqualsToken, "|="),
            (TokenKind::BarBarToken, "||"),
            (TokenKind::AmpersandEqualsToken, "&="),
            (TokenKind::AmpersandAmpersandToken, "&&"),
            (TokenKind::ExclamationEqualsToken, "!="),
            (TokenKind::LessThanEqualsToken, "<="),
            (TokenKind::LessThanLessThanToken, "<<"),
            (TokenKind::GreaterThanEqualsToken, ">="),
            (TokenKind::GreaterThanGreaterThanToken, ">>"),
            (TokenKind::CaretEqualsToken, "^="),
            (TokenKind::PercentToken, "%"),
            (TokenKind::TildeToken, "~"),
            (TokenKind::CaretToken, "^"),
            (TokenKind::ExclamationToken, "!"),
            (TokenKind::LessThanToken, "<"),
            (TokenKind::GreaterThanToken, ">"),
        ],
    );
}

#[test]
fn test_adjacent_compounds_without_spaces() {
    // One-byte peek must split these pairs the same way the spaced forms do.
    assert_eq!(
        scan_kinds("a+=1;b==c"),
        vec![
            TokenKind::Identifier,
            TokenKind::PlusEqualsToken,
            TokenKind::NumericLiteral,
            TokenKind::SemicolonToken,
            TokenKind::Identifier,
            TokenKind::EqualsEqualsToken,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_keywords() {
    let source = "fn let vol struct enum union const return if elif else match default for loop while import true false";
    assert_eq!(
        scan_kinds(source),
        vec![
            TokenKind::FnKeyword,
            TokenKind::LetKeyword,
            TokenKind::VolKeyword,
            TokenKind::StructKeyword,
            TokenKind::EnumKeyword,
            TokenKind::UnionKeyword,
            TokenKind::ConstKeyword,
            TokenKind::ReturnKeyword,
            TokenKind::IfKeyword,
            TokenKind::ElifKeyword,
            TokenKind::ElseKeyword,
            TokenKind::MatchKeyword,
            TokenKind::DefaultKeyword,
            TokenKind::ForKeyword,
            TokenKind::LoopKeyword,
            TokenKind::WhileKeyword,
            TokenKind::ImportKeyword,
            TokenKind::TrueKeyword,
            TokenKind::FalseKeyword,
        ]
    );
}

#[test]
fn test_type_keywords() {
    let source = "i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 bool";
    let kinds = scan_kinds(source);
    assert_eq!(kinds.len(), 13);
    for kind in kinds {
        assert!(kind.is_type_keyword(), "{:?} should be a type keyword", kind);
    }
}

#[test]
fn test_let_statement_line() {
    assert_tokens(
        "let sum: u32 = 5 + 10;",
        &[
            (TokenKind::LetKeyword, "let"),
            (TokenKind::Identifier, "sum"),
            (TokenKind::ColonToken, ":"),
            (TokenKind::U32Keyword, "u32"),
            (TokenKind::EqualsToken, "="),
            (TokenKind::NumericLiteral, "5"),
            (TokenKind::PlusToken, "+"),
            (TokenKind::NumericLiteral, "10"),
            (TokenKind::SemicolonToken, ";"),
        ],
    );
}

#[test]
fn test_function_snippet() {
    assert_tokens(
        "fn add(x: u16, y: u16) { return x + y; }",
        &[
            (TokenKind::FnKeyword, "fn"),
            (TokenKind::Identifier, "add"),
            (TokenKind::OpenParenToken, "("),
            (TokenKind::Identifier, "x"),
            (TokenKind::ColonToken, ":"),
            (TokenKind::U16Keyword, "u16"),
            (TokenKind::CommaToken, ","),
            (TokenKind::Identifier, "y"),
            (TokenKind::ColonToken, ":"),
            (TokenKind::U16Keyword, "u16"),
            (TokenKind::CloseParenToken, ")"),
            (TokenKind::OpenBraceToken, "{"),
            (TokenKind::ReturnKeyword, "return"),
            (TokenKind::Identifier, "x"),
            (TokenKind::PlusToken, "+"),
            (TokenKind::Identifier, "y"),
            (TokenKind::SemicolonToken, ";"),
            (TokenKind::CloseBraceToken, "}"),
        ],
    );
}

#[test]
fn test_match_arrow() {
    assert_eq!(
        scan_kinds("match x { default => 1 }"),
        vec![
            TokenKind::MatchKeyword,
            TokenKind::Identifier,
            TokenKind::OpenBraceToken,
            TokenKind::DefaultKeyword,
            TokenKind::EqualsGreaterThanToken,
            TokenKind::NumericLiteral,
            TokenKind::CloseBraceToken,
        ]
    );
}

#[test]
fn test_unknown_bytes_do_not_stop_the_scan() {
    assert_tokens(
        "a @ b",
        &[
            (TokenKind::Identifier, "a"),
            (TokenKind::Unknown, "@"),
            (TokenKind::Identifier, "b"),
        ],
    );
}
