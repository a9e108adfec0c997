use crate::{interpreter::evaluator::core::Evaluator, operator::BinaryOperator};

impl Evaluator {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Follows IEEE 754 throughout: division by zero gives an infinity or NaN,
    /// `%` is the floating-point remainder whose sign follows the dividend,
    /// and `^` is [`f64::powf`], which is NaN for a negative base with a
    /// fractional exponent. None of these are errors.
    ///
    /// # Example
    /// ```
    /// use yardcalc::{interpreter::evaluator::core::Evaluator, operator::BinaryOperator};
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Mod, -7.0, 3.0), -1.0);
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 5.0, 0.0), f64::INFINITY);
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, lhs: f64, rhs: f64) -> f64 {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        match op {
            Add => lhs + rhs,
            Sub => lhs - rhs,
            Mul => lhs * rhs,
            Div => lhs / rhs,
            Mod => lhs % rhs,
            Pow => lhs.powf(rhs),
        }
    }
}
