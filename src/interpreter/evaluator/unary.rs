use crate::{interpreter::evaluator::core::Evaluator, operator::UnaryOperator};

impl Evaluator {
    /// Evaluates a prefix operator on its single operand.
    #[must_use]
    pub const fn eval_unary(op: UnaryOperator, operand: f64) -> f64 {
        match op {
            UnaryOperator::Plus => operand,
            UnaryOperator::Negate => -operand,
        }
    }
}
