//! The Ursa parser implementation.
//!
//! Statements are parsed by recursive descent; expressions by precedence
//! climbing over two dispatch tables keyed by token kind, one for prefix
//! starters and one for infix continuations. Every failure path appends a
//! diagnostic and returns no node; the overall pass always reaches EOF.

use rustc_hash::FxHashMap;
use ursa_ast::{
    Boolean, Expression, ExpressionStatement, Identifier, InfixExpression, IntegerLiteral,
    LetStatement, PrefixExpression, Program, ReturnStatement, Statement, Token, TokenKind,
};
use ursa_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use ursa_scanner::Scanner;

use crate::precedence::{binary_operator_precedence, OperatorPrecedence};

type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;
type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

/// The parser produces a `Program` from the scanner's token sequence.
pub struct Parser {
    scanner: Scanner,
    cur_token: Token,
    peek_token: Token,
    prefix_parse_fns: FxHashMap<TokenKind, PrefixParseFn>,
    infix_parse_fns: FxHashMap<TokenKind, InfixParseFn>,
    diagnostics: DiagnosticCollection,
}

impl Parser {
    pub fn new(scanner: Scanner) -> Self {
        let mut parser = Self {
            scanner,
            cur_token: Token::eof(),
            peek_token: Token::eof(),
            prefix_parse_fns: FxHashMap::default(),
            infix_parse_fns: FxHashMap::default(),
            diagnostics: DiagnosticCollection::new(),
        };

        // Read two tokens so cur_token and peek_token are both populated.
        parser.next_token();
        parser.next_token();

        parser.register_prefix(TokenKind::Identifier, Parser::parse_identifier);
        parser.register_prefix(TokenKind::NumericLiteral, Parser::parse_integer_literal);
        parser.register_prefix(TokenKind::MinusToken, Parser::parse_prefix_expression);
        parser.register_prefix(TokenKind::ExclamationToken, Parser::parse_prefix_expression);
        parser.register_prefix(TokenKind::TildeToken, Parser::parse_prefix_expression);
        parser.register_prefix(TokenKind::TrueKeyword, Parser::parse_boolean);
        parser.register_prefix(TokenKind::FalseKeyword, Parser::parse_boolean);
        parser.register_prefix(TokenKind::OpenParenToken, Parser::parse_grouped_expression);

        parser.register_infix(TokenKind::PlusToken, Parser::parse_infix_expression);
        parser.register_infix(TokenKind::MinusToken, Parser::parse_infix_expression);
        parser.register_infix(TokenKind::AsteriskToken, Parser::parse_infix_expression);
        parser.register_infix(TokenKind::SlashToken, Parser::parse_infix_expression);
        parser.register_infix(TokenKind::EqualsEqualsToken, Parser::parse_infix_expression);
        parser.register_infix(TokenKind::ExclamationEqualsToken, Parser::parse_infix_expression);
        parser.register_infix(TokenKind::LessThanToken, Parser::parse_infix_expression);
        parser.register_infix(TokenKind::GreaterThanToken, Parser::parse_infix_expression);

        parser
    }

    /// Parse statements until EOF. Always returns a `Program`; malformed
    /// statements contribute diagnostics instead of nodes.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::EndOfFileToken) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        program
    }

    /// The ordered diagnostics accumulated so far.
    pub fn errors(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Consume the parser, taking the accumulated diagnostics.
    pub fn into_diagnostics(self) -> DiagnosticCollection {
        self.diagnostics
    }

    // ========================================================================
    // Statement parsing
    // ========================================================================

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::LetKeyword => self.parse_let_statement(),
            TokenKind::ReturnKeyword => self.parse_return_statement(),
            // A bare `;` is an empty statement: no node, no diagnostic.
            TokenKind::SemicolonToken => None,
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <identifier>: <type keyword> = ... ;`
    ///
    /// The header is checked in strict order. The initializer tokens are
    /// skimmed up to the `;` without being parsed; `value` stays `None`.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Identifier) {
            self.skip_to_statement_end();
            return None;
        }
        let name = Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        };

        if !self.expect_peek(TokenKind::ColonToken) {
            self.skip_to_statement_end();
            return None;
        }

        if !self.expect_peek_type_keyword() {
            self.skip_to_statement_end();
            return None;
        }
        let ty = self.cur_token.clone();

        if !self.expect_peek(TokenKind::EqualsToken) {
            self.skip_to_statement_end();
            return None;
        }

        self.skip_to_statement_end();

        Some(Statement::Let(LetStatement {
            token,
            name,
            ty,
            value: None,
        }))
    }

    /// `return ... ;` — the value tokens are skimmed, not parsed.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        self.next_token();
        self.skip_to_statement_end();

        Some(Statement::Return(ReturnStatement { token, value: None }))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        let expression = self.parse_expression(OperatorPrecedence::Lowest);

        // The semicolon is optional after the last statement.
        if self.peek_token_is(TokenKind::SemicolonToken) {
            self.next_token();
        }

        Some(Statement::Expression(ExpressionStatement { token, expression }))
    }

    /// Resynchronize at the next statement-terminating token. Stopping at
    /// EOF keeps malformed input without a `;` from looping forever.
    fn skip_to_statement_end(&mut self) {
        while !self.cur_token_is(TokenKind::SemicolonToken)
            && !self.cur_token_is(TokenKind::EndOfFileToken)
        {
            self.next_token();
        }
    }

    // ========================================================================
    // Expression parsing
    // ========================================================================

    /// Precedence climbing: parse a prefix expression, then fold in infix
    /// continuations while the upcoming token binds more tightly than
    /// `min_precedence`. A peek token without an infix entry ends the
    /// expression at that boundary.
    fn parse_expression(&mut self, min_precedence: OperatorPrecedence) -> Option<Expression> {
        let prefix = match self.prefix_parse_fns.get(&self.cur_token.kind) {
            Some(prefix) => *prefix,
            None => {
                self.no_prefix_parse_fn_error(self.cur_token.kind);
                return None;
            }
        };
        let mut left = prefix(self)?;

        while !self.peek_token_is(TokenKind::SemicolonToken)
            && min_precedence < self.peek_precedence()
        {
            let infix = match self.infix_parse_fns.get(&self.peek_token.kind) {
                Some(infix) => *infix,
                None => return Some(left),
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        }))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.cur_token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(IntegerLiteral {
                token: self.cur_token.clone(),
                value,
            })),
            Err(_) => {
                self.diagnostics.add(Diagnostic::new(
                    &messages::COULD_NOT_PARSE_0_AS_INTEGER,
                    &[&self.cur_token.literal],
                ));
                None
            }
        }
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(Boolean {
            token: self.cur_token.clone(),
            value: self.cur_token_is(TokenKind::TrueKeyword),
        }))
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();

        self.next_token();
        let right = self
            .parse_expression(OperatorPrecedence::Prefix)
            .map(Box::new);

        Some(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right,
        }))
    }

    /// Shared by all binary operators: capture this operator's precedence
    /// and parse the right operand at it, which makes equal-precedence
    /// chains left-associative.
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence).map(Box::new);

        Some(Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right,
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(OperatorPrecedence::Lowest);

        if !self.expect_peek(TokenKind::CloseParenToken) {
            return None;
        }

        expression
    }

    // ========================================================================
    // Token management
    // ========================================================================

    /// Shift peek into current and pull one new token from the scanner.
    fn next_token(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.scanner.next_token());
    }

    fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Check the peek token: on match advance and succeed, on mismatch
    /// record a diagnostic and fail without advancing.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    /// Like `expect_peek` but accepts any of the fixed-width type keywords.
    fn expect_peek_type_keyword(&mut self) -> bool {
        if self.peek_token.kind.is_type_keyword() {
            self.next_token();
            true
        } else {
            self.diagnostics.add(Diagnostic::new(
                &messages::EXPECTED_A_TYPE_KEYWORD_GOT_0,
                &[self.peek_token.kind.text()],
            ));
            false
        }
    }

    fn peek_precedence(&self) -> OperatorPrecedence {
        binary_operator_precedence(self.peek_token.kind)
    }

    fn cur_precedence(&self) -> OperatorPrecedence {
        binary_operator_precedence(self.cur_token.kind)
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.diagnostics.add(Diagnostic::new(
            &messages::EXPECTED_NEXT_TOKEN_TO_BE_0_GOT_1,
            &[expected.text(), self.peek_token.kind.text()],
        ));
    }

    fn no_prefix_parse_fn_error(&mut self, kind: TokenKind) {
        self.diagnostics.add(Diagnostic::new(
            &messages::NO_PREFIX_PARSE_FUNCTION_FOR_0,
            &[kind.text()],
        ));
    }

    fn register_prefix(&mut self, kind: TokenKind, function: PrefixParseFn) {
        self.prefix_parse_fns.insert(kind, function);
    }

    fn register_infix(&mut self, kind: TokenKind, function: InfixParseFn) {
        self.infix_parse_fns.insert(kind, function);
    }
}
