/// Returns the smallest of one or more arguments.
///
/// NaN arguments are ignored unless every argument is NaN, following
/// [`f64::min`].
///
/// # Example
/// ```
/// use yardcalc::interpreter::evaluator::function::min_max::min;
///
/// assert_eq!(min(&[2.0, 2.0, 2.0, 9.0]), 2.0);
/// ```
pub fn min(args: &[f64]) -> f64 {
    reduce(args, f64::min)
}

/// Returns the largest of one or more arguments.
///
/// # Example
/// ```
/// use yardcalc::interpreter::evaluator::function::min_max::max;
///
/// assert_eq!(max(&[1.0, 5.0, 3.0]), 5.0);
/// ```
pub fn max(args: &[f64]) -> f64 {
    reduce(args, f64::max)
}

/// Adds up one or more arguments.
pub fn sum(args: &[f64]) -> f64 {
    args.iter().sum()
}

fn reduce(args: &[f64], op: fn(f64, f64) -> f64) -> f64 {
    args.iter()
        .copied()
        .reduce(op)
        .unwrap_or(f64::NAN)
}
