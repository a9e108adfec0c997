use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Represents all errors detected while reordering tokens into postfix form.
pub enum SyntaxError {
    /// A `)` without a matching `(`, or a `(` that is never closed.
    #[error("Mismatched parentheses.")]
    MismatchedParens,
    /// A `,` outside of any parenthesized argument list.
    #[error("Unexpected comma outside of a function call.")]
    UnexpectedComma,
}
