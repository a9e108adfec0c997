use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum LexError {
    /// Found a character that is not part of the grammar, or an operator
    /// symbol with no meaning in its position (such as a leading `*`).
    #[error("Error at position {position}: Invalid character '{character}'.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// An identifier does not name any known function.
    #[error("Undefined function '{name}'.")]
    UndefinedFunction {
        /// The identifier as written, truncated to the maximum name length.
        name: String,
    },
}
