use crate::{
    error::{EngineError, EvalError, SyntaxError},
    interpreter::token::Token,
    util::stack::{BoundedStack, StackKind},
};

/// Result type used by the transformer.
pub type TransformResult<T> = Result<T, EngineError>;

/// Counts the arguments of one open function call.
///
/// A call starts with no arguments. Any token other than a parenthesis marks
/// it as having at least one, and every comma adds another, so `f()` has
/// arity 0, `f(x)` arity 1 and `f(x, y)` arity 2.
#[derive(Debug, Clone, Copy, Default)]
struct ArityTracker {
    has_arguments: bool,
    commas:        usize,
}

impl ArityTracker {
    const fn arity(self) -> usize {
        if self.has_arguments { self.commas + 1 } else { 0 }
    }
}

/// Reorders infix tokens into a postfix program (shunting-yard).
///
/// Tokens are fed one at a time with [`Transformer::push_token`]; numbers go
/// straight to the output while operators, functions and left parentheses
/// wait on the operator stack until precedence, a closing parenthesis or the
/// end of input releases them. [`Transformer::finish`] drains the stack and
/// returns the program.
///
/// # Example
/// ```
/// use yardcalc::interpreter::{lexer::Lexer, token::render_postfix, transformer::Transformer};
///
/// let mut transformer = Transformer::new(256);
/// for token in Lexer::new("2 ^ 3 ^ 2") {
///     transformer.push_token(token.unwrap()).unwrap();
/// }
/// let program = transformer.finish().unwrap();
/// assert_eq!(render_postfix(&program), "2 3 2 ^ ^");
/// ```
pub struct Transformer {
    operators: BoundedStack<Token>,
    output:    BoundedStack<Token>,
    arities:   BoundedStack<ArityTracker>,
}

impl Transformer {
    /// Creates a transformer whose stacks each hold at most `capacity`
    /// entries.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { operators: BoundedStack::new(StackKind::Operator, capacity),
               output:    BoundedStack::new(StackKind::Output, capacity),
               arities:   BoundedStack::new(StackKind::Arity, capacity), }
    }

    /// Processes one infix token.
    ///
    /// # Errors
    /// - [`SyntaxError::UnexpectedComma`] for a comma with no enclosing `(`.
    /// - [`SyntaxError::MismatchedParens`] for a `)` with no matching `(`.
    /// - [`EngineError::CapacityExceeded`] if a stack is full.
    pub fn push_token(&mut self, token: Token) -> TransformResult<()> {
        if !matches!(token, Token::LeftParen | Token::RightParen)
           && let Some(tracker) = self.arities.top_mut()
        {
            tracker.has_arguments = true;
        }

        match token {
            Token::Number(_) => self.output.push(token)?,
            Token::Operator(op) if op.is_unary() => self.operators.push(token)?,
            Token::Operator(op) => {
                while let Some(Token::Operator(top)) = self.operators.top()
                      && op.yields_to(top)
                {
                    self.pop_to_output()?;
                }
                self.operators.push(token)?;
            },
            Token::Function { .. } => {
                self.arities.push(ArityTracker::default())?;
                self.operators.push(token)?;
            },
            Token::LeftParen => self.operators.push(token)?,
            Token::Comma => {
                if let Some(tracker) = self.arities.top_mut() {
                    tracker.commas += 1;
                }
                self.unwind_to_paren(SyntaxError::UnexpectedComma)?;
            },
            Token::RightParen => {
                self.unwind_to_paren(SyntaxError::MismatchedParens)?;
                self.operators.pop();
                if let Some(Token::Function { .. }) = self.operators.top() {
                    self.pop_to_output()?;
                }
            },
        }

        tracing::trace!(%token, operators = %self.operators, output = %self.output, "shunt");
        Ok(())
    }

    /// Drains the operator stack and returns the postfix program.
    ///
    /// # Errors
    /// [`SyntaxError::MismatchedParens`] if a `(` was never closed.
    pub fn finish(mut self) -> TransformResult<Vec<Token>> {
        while let Some(top) = self.operators.top() {
            if matches!(top, Token::LeftParen | Token::RightParen) {
                return Err(SyntaxError::MismatchedParens.into());
            }
            self.pop_to_output()?;
        }

        Ok(self.output.into_vec())
    }

    /// Moves operators to the output until a `(` is on top of the stack.
    ///
    /// The `(` itself stays. Reaching the bottom of the stack fails with
    /// `missing`.
    fn unwind_to_paren(&mut self, missing: SyntaxError) -> TransformResult<()> {
        loop {
            match self.operators.top() {
                None => return Err(missing.into()),
                Some(Token::LeftParen) => return Ok(()),
                Some(_) => self.pop_to_output()?,
            }
        }
    }

    /// Moves the top of the operator stack to the output.
    ///
    /// A function leaving the stack closes its call: its tracker is popped and
    /// the finished argument count is attached to the emitted token.
    fn pop_to_output(&mut self) -> TransformResult<()> {
        let Some(token) = self.operators.pop() else {
            return Ok(());
        };

        let token = match token {
            Token::Function { function, .. } => {
                let tracker = self.arities
                                  .pop()
                                  .ok_or(EngineError::Eval(EvalError::InternalStackUnderflow))?;
                Token::Function { function,
                                  arity: tracker.arity() }
            },
            other => other,
        };

        self.output.push(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::evaluator::function::core::Function;

    #[test]
    fn function_without_tracker_is_an_underflow() {
        let max = Function::lookup("max").unwrap();
        let mut transformer = Transformer::new(4);
        transformer.operators
                   .push(Token::Function { function: max,
                                           arity:    0, })
                   .unwrap();

        assert_eq!(transformer.pop_to_output(),
                   Err(EngineError::Eval(EvalError::InternalStackUnderflow)));
    }

    #[test]
    fn closing_a_call_attaches_the_counted_arity() {
        let max = Function::lookup("max").unwrap();
        let mut transformer = Transformer::new(8);
        for token in [Token::Function { function: max,
                                        arity:    0, },
                      Token::LeftParen,
                      Token::Number(1.0),
                      Token::Comma,
                      Token::Number(2.0),
                      Token::RightParen]
        {
            transformer.push_token(token).unwrap();
        }

        assert!(transformer.arities.top().is_none());
        assert_eq!(transformer.finish().unwrap().last(),
                   Some(&Token::Function { function: max,
                                           arity:    2, }));
    }
}
