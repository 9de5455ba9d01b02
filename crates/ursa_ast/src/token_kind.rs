//! TokenKind enum - all token kinds produced by the scanner.

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    /// An unrecognized byte. The scanner never fails hard; it emits this
    /// marker token and leaves the reaction to the parser.
    Unknown = 0,
    EndOfFileToken = 1,

    // Identifiers and literals
    Identifier = 2,
    NumericLiteral = 3,

    // Punctuation
    OpenBraceToken = 4,
    CloseBraceToken = 5,
    OpenParenToken = 6,
    CloseParenToken = 7,
    OpenBracketToken = 8,
    CloseBracketToken = 9,
    CommaToken = 10,
    ColonToken = 11,
    SemicolonToken = 12,
    LessThanToken = 13,
    GreaterThanToken = 14,
    LessThanEqualsToken = 15,
    GreaterThanEqualsToken = 16,
    EqualsEqualsToken = 17,
    ExclamationEqualsToken = 18,
    EqualsGreaterThanToken = 19,
    PlusToken = 20,
    MinusToken = 21,
    AsteriskToken = 22,
    SlashToken = 23,
    PercentToken = 24,
    PlusPlusToken = 25,
    MinusMinusToken = 26,
    LessThanLessThanToken = 27,
    GreaterThanGreaterThanToken = 28,
    AmpersandToken = 29,
    BarToken = 30,
    CaretToken = 31,
    ExclamationToken = 32,
    TildeToken = 33,
    AmpersandAmpersandToken = 34,
    BarBarToken = 35,

    // Assignments
    EqualsToken = 36,
    PlusEqualsToken = 37,
    MinusEqualsToken = 38,
    AmpersandEqualsToken = 39,
    BarEqualsToken = 40,
    CaretEqualsToken = 41,

    // Keywords
    FnKeyword = 42,
    LetKeyword = 43,
    VolKeyword = 44,
    ConstKeyword = 45,
    StructKeyword = 46,
    EnumKeyword = 47,
    UnionKeyword = 48,
    ReturnKeyword = 49,
    IfKeyword = 50,
    ElifKeyword = 51,
    ElseKeyword = 52,
    MatchKeyword = 53,
    DefaultKeyword = 54,
    ForKeyword = 55,
    LoopKeyword = 56,
    WhileKeyword = 57,
    ImportKeyword = 58,
    TrueKeyword = 59,
    FalseKeyword = 60,

    // Fixed-width numeric type keywords
    I8Keyword = 61,
    I16Keyword = 62,
    I32Keyword = 63,
    I64Keyword = 64,
    I128Keyword = 65,
    U8Keyword = 66,
    U16Keyword = 67,
    U32Keyword = 68,
    U64Keyword = 69,
    U128Keyword = 70,
    F32Keyword = 71,
    F64Keyword = 72,
    BoolKeyword = 73,
}

impl TokenKind {
    pub const FIRST_PUNCTUATION: TokenKind = TokenKind::OpenBraceToken;
    pub const LAST_PUNCTUATION: TokenKind = TokenKind::CaretEqualsToken;
    pub const FIRST_COMPOUND_ASSIGNMENT: TokenKind = TokenKind::PlusEqualsToken;
    pub const LAST_COMPOUND_ASSIGNMENT: TokenKind = TokenKind::CaretEqualsToken;
    pub const FIRST_KEYWORD: TokenKind = TokenKind::FnKeyword;
    pub const LAST_KEYWORD: TokenKind = TokenKind::BoolKeyword;
    pub const FIRST_TYPE_KEYWORD: TokenKind = TokenKind::I8Keyword;
    pub const LAST_TYPE_KEYWORD: TokenKind = TokenKind::BoolKeyword;
}

impl TokenKind {
    /// Whether this kind represents a keyword.
    #[inline]
    pub fn is_keyword(self) -> bool {
        let v = self as u8;
        v >= TokenKind::FIRST_KEYWORD as u8 && v <= TokenKind::LAST_KEYWORD as u8
    }

    /// Whether this kind is one of the fixed-width type keywords
    /// (`i8`..`i128`, `u8`..`u128`, `f32`, `f64`, `bool`).
    #[inline]
    pub fn is_type_keyword(self) -> bool {
        let v = self as u8;
        v >= TokenKind::FIRST_TYPE_KEYWORD as u8 && v <= TokenKind::LAST_TYPE_KEYWORD as u8
    }

    /// Whether this kind represents a punctuation token.
    #[inline]
    pub fn is_punctuation(self) -> bool {
        let v = self as u8;
        v >= TokenKind::FIRST_PUNCTUATION as u8 && v <= TokenKind::LAST_PUNCTUATION as u8
    }

    /// Whether this kind represents a compound assignment operator.
    #[inline]
    pub fn is_compound_assignment(self) -> bool {
        let v = self as u8;
        v >= TokenKind::FIRST_COMPOUND_ASSIGNMENT as u8
            && v <= TokenKind::LAST_COMPOUND_ASSIGNMENT as u8
    }

    /// The source text of a keyword kind.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            TokenKind::FnKeyword => Some("fn"),
            TokenKind::LetKeyword => Some("let"),
            TokenKind::VolKeyword => Some("vol"),
            TokenKind::ConstKeyword => Some("const"),
            TokenKind::StructKeyword => Some("struct"),
            TokenKind::EnumKeyword => Some("enum"),
            TokenKind::UnionKeyword => Some("union"),
            TokenKind::ReturnKeyword => Some("return"),
            TokenKind::IfKeyword => Some("if"),
            TokenKind::ElifKeyword => Some("elif"),
            TokenKind::ElseKeyword => Some("else"),
            TokenKind::MatchKeyword => Some("match"),
            TokenKind::DefaultKeyword => Some("default"),
            TokenKind::ForKeyword => Some("for"),
            TokenKind::LoopKeyword => Some("loop"),
            TokenKind::WhileKeyword => Some("while"),
            TokenKind::ImportKeyword => Some("import"),
            TokenKind::TrueKeyword => Some("true"),
            TokenKind::FalseKeyword => Some("false"),
            TokenKind::I8Keyword => Some("i8"),
            TokenKind::I16Keyword => Some("i16"),
            TokenKind::I32Keyword => Some("i32"),
            TokenKind::I64Keyword => Some("i64"),
            TokenKind::I128Keyword => Some("i128"),
            TokenKind::U8Keyword => Some("u8"),
            TokenKind::U16Keyword => Some("u16"),
            TokenKind::U32Keyword => Some("u32"),
            TokenKind::U64Keyword => Some("u64"),
            TokenKind::U128Keyword => Some("u128"),
            TokenKind::F32Keyword => Some("f32"),
            TokenKind::F64Keyword => Some("f64"),
            TokenKind::BoolKeyword => Some("bool"),
            _ => None,
        }
    }

    /// Look up the keyword kind for identifier text. This lookup, not the
    /// scanning loop, is what separates keywords from ordinary identifiers.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "fn" => TokenKind::FnKeyword,
            "let" => TokenKind::LetKeyword,
            "vol" => TokenKind::VolKeyword,
            "const" => TokenKind::ConstKeyword,
            "struct" => TokenKind::StructKeyword,
            "enum" => TokenKind::EnumKeyword,
            "union" => TokenKind::UnionKeyword,
            "return" => TokenKind::ReturnKeyword,
            "if" => TokenKind::IfKeyword,
            "elif" => TokenKind::ElifKeyword,
            "else" => TokenKind::ElseKeyword,
            "match" => TokenKind::MatchKeyword,
            "default" => TokenKind::DefaultKeyword,
            "for" => TokenKind::ForKeyword,
            "loop" => TokenKind::LoopKeyword,
            "while" => TokenKind::WhileKeyword,
            "import" => TokenKind::ImportKeyword,
            "true" => TokenKind::TrueKeyword,
            "false" => TokenKind::FalseKeyword,
            "i8" => TokenKind::I8Keyword,
            "i16" => TokenKind::I16Keyword,
            "i32" => TokenKind::I32Keyword,
            "i64" => TokenKind::I64Keyword,
            "i128" => TokenKind::I128Keyword,
            "u8" => TokenKind::U8Keyword,
            "u16" => TokenKind::U16Keyword,
            "u32" => TokenKind::U32Keyword,
            "u64" => TokenKind::U64Keyword,
            "u128" => TokenKind::U128Keyword,
            "f32" => TokenKind::F32Keyword,
            "f64" => TokenKind::F64Keyword,
            "bool" => TokenKind::BoolKeyword,
            _ => return None,
        };
        Some(kind)
    }

    /// The source text of a punctuation kind.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            TokenKind::OpenBraceToken => Some("{"),
            TokenKind::CloseBraceToken => Some("}"),
            TokenKind::OpenParenToken => Some("("),
            TokenKind::CloseParenToken => Some(")"),
            TokenKind::OpenBracketToken => Some("["),
            TokenKind::CloseBracketToken => Some("]"),
            TokenKind::CommaToken => Some(","),
            TokenKind::ColonToken => Some(":"),
            TokenKind::SemicolonToken => Some(";"),
            TokenKind::LessThanToken => Some("<"),
            TokenKind::GreaterThanToken => Some(">"),
            TokenKind::LessThanEqualsToken => Some("<="),
            TokenKind::GreaterThanEqualsToken => Some(">="),
            TokenKind::EqualsEqualsToken => Some("=="),
            TokenKind::ExclamationEqualsToken => Some("!="),
            TokenKind::EqualsGreaterThanToken => Some("=>"),
            TokenKind::PlusToken => Some("+"),
            TokenKind::MinusToken => Some("-"),
            TokenKind::AsteriskToken => Some("*"),
            TokenKind::SlashToken => Some("/"),
            TokenKind::PercentToken => Some("%"),
            TokenKind::PlusPlusToken => Some("++"),
            TokenKind::MinusMinusToken => Some("--"),
            TokenKind::LessThanLessThanToken => Some("<<"),
            TokenKind::GreaterThanGreaterThanToken => Some(">>"),
            TokenKind::AmpersandToken => Some("&"),
            TokenKind::BarToken => Some("|"),
            TokenKind::CaretToken => Some("^"),
            TokenKind::ExclamationToken => Some("!"),
            TokenKind::TildeToken => Some("~"),
            TokenKind::AmpersandAmpersandToken => Some("&&"),
            TokenKind::BarBarToken => Some("||"),
            TokenKind::EqualsToken => Some("="),
            TokenKind::PlusEqualsToken => Some("+="),
            TokenKind::MinusEqualsToken => Some("-="),
            TokenKind::AmpersandEqualsToken => Some("&="),
            TokenKind::BarEqualsToken => Some("|="),
            TokenKind::CaretEqualsToken => Some("^="),
            _ => None,
        }
    }

    /// A printable name for this kind, used in diagnostic messages.
    pub fn text(self) -> &'static str {
        if let Some(text) = self.punctuation_text() {
            return text;
        }
        if let Some(text) = self.keyword_text() {
            return text;
        }
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::NumericLiteral => "numeric literal",
            TokenKind::EndOfFileToken => "end of file",
            _ => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_round_trips() {
        for text in ["fn", "let", "vol", "return", "match", "i8", "u128", "f64", "bool"] {
            let kind = TokenKind::from_keyword(text).unwrap();
            assert!(kind.is_keyword());
            assert_eq!(kind.keyword_text(), Some(text));
        }
        assert_eq!(TokenKind::from_keyword("letx"), None);
        assert_eq!(TokenKind::from_keyword("I8"), None);
    }

    #[test]
    fn test_type_keyword_classification() {
        assert!(TokenKind::I8Keyword.is_type_keyword());
        assert!(TokenKind::U128Keyword.is_type_keyword());
        assert!(TokenKind::F32Keyword.is_type_keyword());
        assert!(TokenKind::BoolKeyword.is_type_keyword());
        assert!(!TokenKind::LetKeyword.is_type_keyword());
        assert!(!TokenKind::Identifier.is_type_keyword());
    }

    #[test]
    fn test_compound_assignment_classification() {
        assert!(TokenKind::PlusEqualsToken.is_compound_assignment());
        assert!(TokenKind::CaretEqualsToken.is_compound_assignment());
        assert!(!TokenKind::EqualsToken.is_compound_assignment());
        assert!(!TokenKind::PlusToken.is_compound_assignment());
    }

    #[test]
    fn test_text_for_diagnostics() {
        assert_eq!(TokenKind::EqualsToken.text(), "=");
        assert_eq!(TokenKind::LetKeyword.text(), "let");
        assert_eq!(TokenKind::Identifier.text(), "identifier");
        assert_eq!(TokenKind::EndOfFileToken.text(), "end of file");
    }
}
