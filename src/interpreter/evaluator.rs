/// Binary operator evaluation.
///
/// Implements the arithmetic of `+`, `-`, `*`, `/`, `%` and `^` on `f64`.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements unary plus and negation.
pub mod unary;

/// Core evaluation loop.
///
/// Contains the [`core::Evaluator`] with its value stack and the walk over a
/// postfix program.
pub mod core;

/// Function evaluation.
///
/// Holds the function catalog, arity checking and the builtin
/// implementations.
pub mod function;
