//! Builtins are reached only through [`Function::call`] and the evaluator,
//! both of which check the argument count before indexing.
//!
//! [`Function::call`]: super::core::Function::call

/// Defines single-argument builtins that forward to an `f64` method.
macro_rules! real_builtin {
    ($($fname:ident),* $(,)?) => {
        $(
            pub fn $fname(args: &[f64]) -> f64 {
                args[0].$fname()
            }
        )*
    };
}

real_builtin!(sqrt, abs, exp, ln, log10, sin, cos, tan, asin, acos, atan, sinh, cosh, tanh);
real_builtin!(floor, ceil, round, trunc);

/// Logarithm of `args[0]` in base `args[1]`.
pub fn log(args: &[f64]) -> f64 {
    args[0].log(args[1])
}
