//! The Ursa scanner.
//!
//! Byte-oriented with three cursors: the current position, the next read
//! position, and the current byte (0 once the buffer is exhausted). Each
//! `next_token` call skips whitespace, dispatches on the current byte, and
//! peeks at most one byte ahead to split single- from double-character
//! operators. O(1) amortized per token, no backtracking.

use ursa_ast::{Token, TokenKind};

/// The scanner converts Ursa source text into tokens.
pub struct Scanner {
    /// The source text being scanned.
    input: Vec<u8>,
    /// Position of the current byte.
    pos: usize,
    /// Position of the next byte to read.
    read_pos: usize,
    /// The current byte, 0 past the end of input.
    ch: u8,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(input: &str) -> Self {
        let mut scanner = Self {
            input: input.as_bytes().to_vec(),
            pos: 0,
            read_pos: 0,
            ch: 0,
        };
        scanner.read_char();
        scanner
    }

    /// Produce exactly one token and advance. Calling past the end of input
    /// keeps returning `EndOfFileToken`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => self.scan_equals(),
            b'+' => self.scan_plus(),
            b'-' => self.scan_minus(),
            b'|' => self.scan_bar(),
            b'&' => self.scan_ampersand(),
            b'!' => self.scan_exclamation(),
            b'<' => self.scan_less_than(),
            b'>' => self.scan_greater_than(),
            b'^' => self.scan_caret(),
            b'*' => self.single_char_token(TokenKind::AsteriskToken),
            b'/' => self.single_char_token(TokenKind::SlashToken),
            b'%' => self.single_char_token(TokenKind::PercentToken),
            b'~' => self.single_char_token(TokenKind::TildeToken),
            b'(' => self.single_char_token(TokenKind::OpenParenToken),
            b')' => self.single_char_token(TokenKind::CloseParenToken),
            b'{' => self.single_char_token(TokenKind::OpenBraceToken),
            b'}' => self.single_char_token(TokenKind::CloseBraceToken),
            b'[' => self.single_char_token(TokenKind::OpenBracketToken),
            b']' => self.single_char_token(TokenKind::CloseBracketToken),
            b',' => self.single_char_token(TokenKind::CommaToken),
            b':' => self.single_char_token(TokenKind::ColonToken),
            b';' => self.single_char_token(TokenKind::SemicolonToken),
            0 => Token::eof(),
            _ if is_letter(self.ch) => return self.scan_identifier(),
            _ if self.ch.is_ascii_digit() => return self.scan_number(),
            _ => self.single_char_token(TokenKind::Unknown),
        };

        self.read_char();
        token
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    fn scan_equals(&mut self) -> Token {
        match self.peek_char() {
            b'=' => self.double_char_token(TokenKind::EqualsEqualsToken),
            b'>' => self.double_char_token(TokenKind::EqualsGreaterThanToken),
            _ => self.single_char_token(TokenKind::EqualsToken),
        }
    }

    fn scan_plus(&mut self) -> Token {
        match self.peek_char() {
            b'=' => self.double_char_token(TokenKind::PlusEqualsToken),
            b'+' => self.double_char_token(TokenKind::PlusPlusToken),
            _ => self.single_char_token(TokenKind::PlusToken),
        }
    }

    fn scan_minus(&mut self) -> Token {
        match self.peek_char() {
            b'=' => self.double_char_token(TokenKind::MinusEqualsToken),
            b'-' => self.double_char_token(TokenKind::MinusMinusToken),
            _ => self.single_char_token(TokenKind::MinusToken),
        }
    }

    fn scan_bar(&mut self) -> Token {
        match self.peek_char() {
            b'=' => self.double_char_token(TokenKind::BarEqualsToken),
            b'|' => self.double_char_token(TokenKind::BarBarToken),
            _ => self.single_char_token(TokenKind::BarToken),
        }
    }

    fn scan_ampersand(&mut self) -> Token {
        match self.peek_char() {
            b'=' => self.double_char_token(TokenKind::AmpersandEqualsToken),
            b'&' => self.double_char_token(TokenKind::AmpersandAmpersandToken),
            _ => self.single_char_token(TokenKind::AmpersandToken),
        }
    }

    fn scan_exclamation(&mut self) -> Token {
        match self.peek_char() {
            b'=' => self.double_char_token(TokenKind::ExclamationEqualsToken),
            _ => self.single_char_token(TokenKind::ExclamationToken),
        }
    }

    fn scan_less_than(&mut self) -> Token {
        match self.peek_char() {
            b'=' => self.double_char_token(TokenKind::LessThanEqualsToken),
            b'<' => self.double_char_token(TokenKind::LessThanLessThanToken),
            _ => self.single_char_token(TokenKind::LessThanToken),
        }
    }

    fn scan_greater_than(&mut self) -> Token {
        match self.peek_char() {
            b'=' => self.double_char_token(TokenKind::GreaterThanEqualsToken),
            b'>' => self.double_char_token(TokenKind::GreaterThanGreaterThanToken),
            _ => self.single_char_token(TokenKind::GreaterThanToken),
        }
    }

    fn scan_caret(&mut self) -> Token {
        match self.peek_char() {
            b'=' => self.double_char_token(TokenKind::CaretEqualsToken),
            _ => self.single_char_token(TokenKind::CaretToken),
        }
    }

    /// Maximal run of letters, digits, and underscores, then a keyword-table
    /// lookup. The lookup, not the scanning loop, is what separates keywords
    /// and type keywords from ordinary identifiers.
    fn scan_identifier(&mut self) -> Token {
        let start = self.pos;
        while is_letter(self.ch) || self.ch.is_ascii_digit() {
            self.read_char();
        }
        let literal = self.slice_to_string(start);
        let kind = TokenKind::from_keyword(&literal).unwrap_or(TokenKind::Identifier);
        Token::new(kind, literal)
    }

    /// Maximal run of digits with embedded `.` allowed. Integer and float
    /// text both come out as one generic numeric token; the literal shape is
    /// resolved by later stages.
    fn scan_number(&mut self) -> Token {
        let start = self.pos;
        while self.ch.is_ascii_digit() || self.ch == b'.' {
            self.read_char();
        }
        Token::new(TokenKind::NumericLiteral, self.slice_to_string(start))
    }

    // ========================================================================
    // Cursor management
    // ========================================================================

    /// Advance to the next byte, pinning `ch` at 0 past the end.
    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_pos).copied().unwrap_or(0);
        self.pos = self.read_pos;
        self.read_pos += 1;
    }

    /// Look one byte ahead without consuming it.
    fn peek_char(&self) -> u8 {
        self.input.get(self.read_pos).copied().unwrap_or(0)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// A token made from the current byte alone. Does not advance; the
    /// dispatch loop consumes the byte after the token is built.
    fn single_char_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, (self.ch as char).to_string())
    }

    /// A token made from the current byte plus the peeked byte. Consumes the
    /// first byte; the dispatch loop consumes the second.
    fn double_char_token(&mut self, kind: TokenKind) -> Token {
        let first = self.ch;
        self.read_char();
        let mut literal = String::with_capacity(2);
        literal.push(first as char);
        literal.push(self.ch as char);
        Token::new(kind, literal)
    }

    fn slice_to_string(&self, start: usize) -> String {
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}
