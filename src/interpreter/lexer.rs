use logos::Logos;

use crate::{
    error::LexError,
    interpreter::{
        evaluator::function::core::{Function, MAX_NAME_LEN},
        token::Token,
    },
    operator::{Operator, OperatorArity},
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Raw lexemes as recognized by logos, before operator arity and function
/// names are resolved.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\x0B\x0C]+")]
enum RawToken {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Function names such as `max` or `log10`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Identifier,
    /// Any operator symbol; arity is decided by the surrounding tokens.
    #[regex(r"[-+*/%^]", |lex| lex.slice().chars().next())]
    Symbol(char),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

/// Parses a numeric literal, extending the match over an exponent suffix.
///
/// The exponent is only consumed when it is complete (`e`, an optional sign
/// and at least one digit), so `2e` lexes as `2` followed by `e`.
fn parse_number(lex: &mut logos::Lexer<RawToken>) -> Option<f64> {
    let exponent = exponent_len(lex.remainder());
    lex.bump(exponent);
    lex.slice().parse().ok()
}

fn exponent_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }

    let mut len = 1;
    if matches!(bytes.get(len), Some(b'+' | b'-')) {
        len += 1;
    }

    let digits = bytes[len..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 { 0 } else { len + digits }
}

/// Returns `true` if an operator following `previous` is in operand
/// position and must therefore be read as unary.
///
/// That is the case at the start of input, after another operator, and
/// after `(`.
const fn expects_operand(previous: Option<&Token>) -> bool {
    matches!(previous, None | Some(Token::Operator(_) | Token::LeftParen))
}

/// Turns an expression into [`Token`]s, one at a time.
///
/// The lexer remembers only the last token it produced, which is enough to
/// tell a unary `-` from a binary one.
///
/// # Example
/// ```
/// use yardcalc::interpreter::{lexer::Lexer, token::Token};
///
/// let tokens = Lexer::new("3 - -4").collect::<Result<Vec<_>, _>>().unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert!(matches!(tokens[1], Token::Operator(op) if !op.is_unary()));
/// assert!(matches!(tokens[2], Token::Operator(op) if op.is_unary()));
/// ```
pub struct Lexer<'src> {
    raw:      logos::Lexer<'src, RawToken>,
    previous: Option<Token>,
}

impl<'src> Lexer<'src> {
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { raw:      RawToken::lexer(source),
               previous: None, }
    }

    /// Produces the next token, or `None` once the input is exhausted.
    ///
    /// # Errors
    /// - [`LexError::InvalidCharacter`] for characters outside the grammar and
    ///   for operator symbols with no catalog entry of the required arity.
    /// - [`LexError::UndefinedFunction`] for unknown identifiers.
    pub fn next_token(&mut self) -> LexResult<Option<Token>> {
        let Some(raw) = self.raw.next() else {
            return Ok(None);
        };
        let position = self.raw.span().start;

        let token = match raw {
            Ok(RawToken::Number(n)) => Token::Number(n),
            Ok(RawToken::Identifier) => resolve_function(self.raw.slice())?,
            Ok(RawToken::Symbol(symbol)) => {
                let arity = if expects_operand(self.previous.as_ref()) {
                    OperatorArity::Unary
                } else {
                    OperatorArity::Binary
                };
                let op = Operator::lookup(symbol, arity).ok_or(LexError::InvalidCharacter {
                    character: symbol,
                    position,
                })?;
                Token::Operator(op)
            },
            Ok(RawToken::LParen) => Token::LeftParen,
            Ok(RawToken::RParen) => Token::RightParen,
            Ok(RawToken::Comma) => Token::Comma,
            Err(()) => {
                let character = self.raw.source()[position..].chars()
                                                             .next()
                                                             .unwrap_or_default();
                return Err(LexError::InvalidCharacter { character, position });
            },
        };

        self.previous = Some(token);
        Ok(Some(token))
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Looks up an identifier in the function catalog.
///
/// Names longer than [`MAX_NAME_LEN`] are truncated before the lookup.
fn resolve_function(identifier: &str) -> LexResult<Token> {
    let name = identifier.get(..MAX_NAME_LEN).unwrap_or(identifier);

    Function::lookup(name).map(|function| Token::Function { function, arity: 0 })
                          .ok_or_else(|| LexError::UndefinedFunction { name: name.to_string() })
}
