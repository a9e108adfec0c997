//! # yardcalc
//!
//! yardcalc is an arithmetic expression engine written in Rust.
//! It tokenizes an infix expression, reorders it into postfix form with the
//! shunting-yard algorithm, and evaluates the result on a value stack.
//! Operators `+ - * / % ^`, unary `+` and `-`, parentheses and named
//! functions with fixed or variable arity are supported.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::EngineConfig,
    error::EngineError,
    interpreter::{evaluator::core::Evaluator, lexer::Lexer, token::Token, transformer::Transformer},
};

/// Evaluation limits.
///
/// This module holds [`config::EngineConfig`], the knobs a caller may turn for
/// a single evaluation, and their defaults.
pub mod config;
/// Provides unified error types for lexing, transformation and evaluation.
///
/// This module defines all errors that can be raised while computing the
/// value of an expression. Each error carries the context needed for a precise
/// diagnostic: the offending character and its position, the unknown function
/// name, or the function name with its expected and given arity.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, transformer,
///   evaluator).
/// - Wraps them in a single [`error::EngineError`] returned by the public
///   entry points.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together the lexer, the shunting-yard transformer and the
/// postfix evaluator. Data flows strictly from one stage to the next.
///
/// # Responsibilities
/// - Turns text into tokens.
/// - Turns infix tokens into a postfix program.
/// - Runs the postfix program to a single number.
pub mod interpreter;
/// The operator catalog.
///
/// Declares the static descriptors of every operator: symbol, precedence,
/// associativity and arity.
pub mod operator;
/// General utilities shared by the pipeline stages.
///
/// # Responsibilities
/// - Provides the bounded stacks every stage keeps its state in.
pub mod util;

pub use interpreter::token::render_postfix;

/// Evaluates an arithmetic expression with the default limits.
///
/// # Errors
/// Returns the first error encountered while lexing, transforming or
/// evaluating the expression.
///
/// # Examples
/// ```
/// use yardcalc::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("max(1, 5, 3)").unwrap(), 5.0);
///
/// // Unknown function.
/// assert!(evaluate("foo(1)").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EngineError> {
    evaluate_with(expression, &EngineConfig::default())
}

/// Evaluates an arithmetic expression with explicit limits.
///
/// # Errors
/// See [`evaluate`]; additionally fails with
/// [`EngineError::CapacityExceeded`] when the expression needs more stack
/// space than `config` allows.
///
/// # Examples
/// ```
/// use yardcalc::{config::EngineConfig, error::EngineError, evaluate_with};
///
/// let tight = EngineConfig { stack_capacity: 2 };
/// assert!(matches!(evaluate_with("((((1))))", &tight),
///                  Err(EngineError::CapacityExceeded { .. })));
/// ```
pub fn evaluate_with(expression: &str, config: &EngineConfig) -> Result<f64, EngineError> {
    let program = to_postfix_with(expression, config)?;
    let result = Evaluator::new(config.stack_capacity).eval(&program)?;

    tracing::debug!(expression, result, "evaluated");
    Ok(result)
}

/// Converts an expression to its postfix program with the default limits.
///
/// # Errors
/// Returns lexing and syntax errors.
///
/// # Examples
/// ```
/// use yardcalc::{render_postfix, to_postfix};
///
/// let program = to_postfix("(2 + 3) * 4").unwrap();
/// assert_eq!(render_postfix(&program), "2 3 + 4 *");
/// ```
pub fn to_postfix(expression: &str) -> Result<Vec<Token>, EngineError> {
    to_postfix_with(expression, &EngineConfig::default())
}

/// Converts an expression to its postfix program with explicit limits.
///
/// # Errors
/// Returns lexing and syntax errors, and
/// [`EngineError::CapacityExceeded`] when a stack fills up.
pub fn to_postfix_with(expression: &str, config: &EngineConfig) -> Result<Vec<Token>, EngineError> {
    let mut transformer = Transformer::new(config.stack_capacity);

    for token in Lexer::new(expression) {
        transformer.push_token(token?)?;
    }

    let program = transformer.finish()?;
    tracing::debug!(postfix = %render_postfix(&program), "transformed");
    Ok(program)
}
