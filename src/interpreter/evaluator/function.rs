/// Single-argument real functions, logarithms and rounding.
pub(crate) mod builtin;
/// The function catalog, arity rules and call dispatch.
pub mod core;
/// `min`, `max` and `sum` over any number of arguments.
pub mod min_max;
