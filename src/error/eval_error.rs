use thiserror::Error;

use crate::interpreter::evaluator::function::core::Arity;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating a postfix program.
pub enum EvalError {
    /// A function was called with a number of arguments it does not accept.
    #[error("Function '{name}' expects {expected} argument(s), but {given} were given.")]
    ArityMismatch {
        /// The function name.
        name:     String,
        /// What the function accepts.
        expected: Arity,
        /// How many arguments the call supplied.
        given:    usize,
    },
    /// An operator or function found fewer operands than it needs.
    ///
    /// The transformer should never produce such a program, so this points at
    /// an operator in a position where no operand precedes it.
    #[error("Internal error: the value stack ran out of operands.")]
    InternalStackUnderflow,
    /// The program did not reduce to exactly one value, or contained tokens
    /// that have no meaning in postfix form.
    #[error("Malformed expression: evaluation left {values} value(s) instead of one.")]
    MalformedExpression {
        /// Number of values left on the stack.
        values: usize,
    },
}
