//! Operator precedence for binary and prefix operators.

use ursa_ast::TokenKind;

/// Operator precedence levels, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
#[allow(dead_code)]
pub enum OperatorPrecedence {
    Lowest = 0,
    Equality = 1,
    Relational = 2,
    Sum = 3,
    Product = 4,
    Prefix = 5,
    Call = 6,
}

/// Get the binding precedence for a binary operator token. Any kind without
/// an entry binds at `Lowest`, which terminates the precedence climb.
pub fn binary_operator_precedence(kind: TokenKind) -> OperatorPrecedence {
    match kind {
        TokenKind::EqualsEqualsToken | TokenKind::ExclamationEqualsToken => {
            OperatorPrecedence::Equality
        }
        TokenKind::LessThanToken | TokenKind::GreaterThanToken => OperatorPrecedence::Relational,
        TokenKind::PlusToken | TokenKind::MinusToken => OperatorPrecedence::Sum,
        TokenKind::AsteriskToken | TokenKind::SlashToken => OperatorPrecedence::Product,
        _ => OperatorPrecedence::Lowest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(OperatorPrecedence::Lowest < OperatorPrecedence::Equality);
        assert!(OperatorPrecedence::Equality < OperatorPrecedence::Relational);
        assert!(OperatorPrecedence::Relational < OperatorPrecedence::Sum);
        assert!(OperatorPrecedence::Sum < OperatorPrecedence::Product);
        assert!(OperatorPrecedence::Product < OperatorPrecedence::Prefix);
        assert!(OperatorPrecedence::Prefix < OperatorPrecedence::Call);
    }

    #[test]
    fn test_unlisted_operators_bind_lowest() {
        assert_eq!(
            binary_operator_precedence(TokenKind::BarBarToken),
            OperatorPrecedence::Lowest
        );
        assert_eq!(
            binary_operator_precedence(TokenKind::EqualsToken),
            OperatorPrecedence::Lowest
        );
        assert_eq!(
            binary_operator_precedence(TokenKind::AsteriskToken),
            OperatorPrecedence::Product
        );
    }
}
