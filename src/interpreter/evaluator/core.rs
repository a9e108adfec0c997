use crate::{
    error::{EngineError, EvalError},
    interpreter::token::Token,
    operator::OperatorKind,
    util::stack::{BoundedStack, StackKind},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EngineError`] describing the failure.
pub type EvalResult<T> = Result<T, EngineError>;

/// Runs postfix programs on a bounded value stack.
///
/// ## Usage
///
/// An `Evaluator` is cheap to create and holds no state between programs
/// other than its capacity; [`Evaluator::eval`] clears the stack on entry.
pub struct Evaluator {
    values: BoundedStack<f64>,
}

impl Evaluator {
    /// Creates an evaluator whose value stack holds at most `capacity`
    /// numbers.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { values: BoundedStack::new(StackKind::Value, capacity) }
    }

    /// Evaluates a postfix program and returns its single result.
    ///
    /// Tokens are processed left to right:
    /// - numbers are pushed,
    /// - operators pop their operands (right operand first) and push the
    ///   result,
    /// - functions pop as many values as their call arity says.
    ///
    /// # Errors
    /// - [`EvalError::ArityMismatch`] for calls the function does not accept.
    /// - [`EvalError::InternalStackUnderflow`] if an operand is missing.
    /// - [`EvalError::MalformedExpression`] if the program leaves anything
    ///   other than one value, or contains punctuation.
    ///
    /// # Example
    /// ```
    /// use yardcalc::{interpreter::evaluator::core::Evaluator, to_postfix};
    ///
    /// let program = to_postfix("max(1, 5, 3) * 2").unwrap();
    /// let result = Evaluator::new(256).eval(&program).unwrap();
    /// assert_eq!(result, 10.0);
    /// ```
    pub fn eval(&mut self, program: &[Token]) -> EvalResult<f64> {
        self.values.clear();

        for token in program {
            match *token {
                Token::Number(n) => self.push_value(n)?,
                Token::Operator(op) => match op.kind {
                    OperatorKind::Binary(binary) => {
                        let rhs = self.pop_value()?;
                        let lhs = self.pop_value()?;
                        self.push_value(Self::eval_binary(binary, lhs, rhs))?;
                    },
                    OperatorKind::Unary(unary) => {
                        let rhs = self.pop_value()?;
                        self.push_value(Self::eval_unary(unary, rhs))?;
                    },
                },
                Token::Function { function, arity } => self.eval_function(function, arity)?,
                Token::LeftParen | Token::RightParen | Token::Comma => {
                    return Err(EvalError::MalformedExpression { values: self.values.len() }.into());
                },
            }
            tracing::trace!(%token, values = %self.values, "eval");
        }

        if self.values.len() != 1 {
            return Err(EvalError::MalformedExpression { values: self.values.len() }.into());
        }
        self.pop_value()
    }

    pub(crate) fn push_value(&mut self, value: f64) -> EvalResult<()> {
        self.values.push(value)
    }

    pub(crate) fn pop_value(&mut self) -> EvalResult<f64> {
        self.values
            .pop()
            .ok_or_else(|| EvalError::InternalStackUnderflow.into())
    }

    /// Pops `count` values, first-supplied argument first.
    pub(crate) fn pop_values(&mut self, count: usize) -> EvalResult<Vec<f64>> {
        self.values
            .pop_many(count)
            .ok_or_else(|| EvalError::InternalStackUnderflow.into())
    }
}
