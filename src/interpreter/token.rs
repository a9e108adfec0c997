use std::fmt;

use crate::{interpreter::evaluator::function::core::Function, operator::Operator};

/// A unit of an expression, in either infix or postfix order.
///
/// Tokens refer to the static operator and function catalogs, so they are
/// `Copy` and carry no lifetimes beyond `'static`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal.
    Number(f64),
    /// An operator, already resolved to its unary or binary form.
    Operator(&'static Operator),
    /// A function. `arity` is the number of arguments in this particular
    /// call; it is `0` until the transformer closes the call.
    Function {
        function: &'static Function,
        arity:    usize,
    },
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
}

impl fmt::Display for Token {
    /// Renders the token the way it appears in a postfix listing.
    ///
    /// Unary operators print as `u-` and `u+`, function calls as
    /// `name/arity`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Function { function, arity } => write!(f, "{}/{arity}", function.name),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
            Self::Comma => f.write_str(","),
        }
    }
}

/// Joins tokens with single spaces.
///
/// # Example
/// ```
/// use yardcalc::{interpreter::token::render_postfix, to_postfix};
///
/// let program = to_postfix("-(1 + 2) * max(3, 4)").unwrap();
/// assert_eq!(render_postfix(&program), "1 2 + u- 3 4 max/2 *");
/// ```
#[must_use]
pub fn render_postfix(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
