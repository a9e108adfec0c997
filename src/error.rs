use thiserror::Error;

use crate::util::stack::StackKind;

/// Lexing errors.
///
/// Raised while turning the input text into tokens: characters that are not
/// part of the grammar, operators in a position where their arity makes no
/// sense, and identifiers that do not name a known function.
pub mod lex_error;
/// Syntax errors.
///
/// Raised by the shunting-yard transformer for unbalanced parentheses and
/// commas that do not separate function arguments.
pub mod syntax_error;
/// Evaluation errors.
///
/// Raised while running a postfix program: function calls with the wrong
/// number of arguments, and the internal consistency checks on the value
/// stack.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use syntax_error::SyntaxError;

/// Every way an evaluation can fail.
///
/// The first error encountered aborts the pipeline and is returned as-is;
/// no partial result is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token sequence is not a well-formed infix expression.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The postfix program could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// A bounded stack was asked to grow past its capacity.
    #[error("Expression is too large: the {stack} stack is limited to {capacity} entries.")]
    CapacityExceeded {
        /// The stack that overflowed.
        stack:    StackKind,
        /// Its configured capacity.
        capacity: usize,
    },
}
