use std::fmt;

use crate::{
    error::EvalError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        function::{builtin, min_max},
    },
};

/// Longest identifier the lexer will look up; longer names are truncated.
pub const MAX_NAME_LEN: usize = 15;

/// Fewest arguments a variadic function accepts.
pub const MIN_VARIADIC_ARGS: usize = 1;

/// Type alias for builtin function handlers.
///
/// A builtin receives its arguments in call order. The argument count has
/// already been checked against the declared [`Arity`].
type BuiltinFn = fn(&[f64]) -> f64;

/// Specifies the allowed number of arguments for a function.
///
/// - `Fixed(n)` means the function must receive exactly `n` arguments.
/// - `Variadic` means any number of arguments, but at least
///   [`MIN_VARIADIC_ARGS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    Variadic,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// # Example
    /// ```
    /// use yardcalc::interpreter::evaluator::function::core::Arity;
    ///
    /// assert!(Arity::Fixed(2).accepts(2));
    /// assert!(Arity::Variadic.accepts(7));
    /// assert!(!Arity::Variadic.accepts(0));
    /// ```
    #[must_use]
    pub const fn accepts(self, given: usize) -> bool {
        match self {
            Self::Fixed(n) => given == n,
            Self::Variadic => given >= MIN_VARIADIC_ARGS,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(n) => write!(f, "{n}"),
            Self::Variadic => write!(f, "at least {MIN_VARIADIC_ARGS}"),
        }
    }
}

/// Static description of a callable function.
pub struct Function {
    pub name:  &'static str,
    pub arity: Arity,
    func:      BuiltinFn,
}

/// Defines builtin functions by generating the `FUNCTIONS` lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// The function catalog.
        pub static FUNCTIONS: &[Function] = &[
            $(
                Function { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "min"   => { arity: Arity::Variadic, func: min_max::min },
    "max"   => { arity: Arity::Variadic, func: min_max::max },
    "sum"   => { arity: Arity::Variadic, func: min_max::sum },
    "sqrt"  => { arity: Arity::Fixed(1), func: builtin::sqrt },
    "abs"   => { arity: Arity::Fixed(1), func: builtin::abs },
    "exp"   => { arity: Arity::Fixed(1), func: builtin::exp },
    "ln"    => { arity: Arity::Fixed(1), func: builtin::ln },
    "log10" => { arity: Arity::Fixed(1), func: builtin::log10 },
    "log"   => { arity: Arity::Fixed(2), func: builtin::log },
    "sin"   => { arity: Arity::Fixed(1), func: builtin::sin },
    "cos"   => { arity: Arity::Fixed(1), func: builtin::cos },
    "tan"   => { arity: Arity::Fixed(1), func: builtin::tan },
    "asin"  => { arity: Arity::Fixed(1), func: builtin::asin },
    "acos"  => { arity: Arity::Fixed(1), func: builtin::acos },
    "atan"  => { arity: Arity::Fixed(1), func: builtin::atan },
    "sinh"  => { arity: Arity::Fixed(1), func: builtin::sinh },
    "cosh"  => { arity: Arity::Fixed(1), func: builtin::cosh },
    "tanh"  => { arity: Arity::Fixed(1), func: builtin::tanh },
    "floor" => { arity: Arity::Fixed(1), func: builtin::floor },
    "ceil"  => { arity: Arity::Fixed(1), func: builtin::ceil },
    "round" => { arity: Arity::Fixed(1), func: builtin::round },
    "trunc" => { arity: Arity::Fixed(1), func: builtin::trunc },
}

impl Function {
    /// Finds a function by exact, case-sensitive name.
    ///
    /// # Example
    /// ```
    /// use yardcalc::interpreter::evaluator::function::core::{Arity, Function};
    ///
    /// assert_eq!(Function::lookup("max").unwrap().arity, Arity::Variadic);
    /// assert!(Function::lookup("MAX").is_none());
    /// ```
    #[must_use]
    pub fn lookup(name: &str) -> Option<&'static Self> {
        FUNCTIONS.iter().find(|f| f.name == name)
    }

    /// Applies the function to `args` after checking the argument count.
    pub fn call(&self, args: &[f64]) -> EvalResult<f64> {
        self.check_arity(args.len())?;
        Ok((self.func)(args))
    }

    /// Fails with [`EvalError::ArityMismatch`] if `given` arguments are not
    /// acceptable.
    pub fn check_arity(&self, given: usize) -> Result<(), EvalError> {
        if self.arity.accepts(given) {
            Ok(())
        } else {
            Err(EvalError::ArityMismatch { name: self.name.to_string(),
                                           expected: self.arity,
                                           given })
        }
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl Evaluator {
    /// Evaluates a function call with `given` arguments taken from the value
    /// stack.
    ///
    /// The count is validated before anything is popped, so a mismatch is
    /// reported as [`EvalError::ArityMismatch`] rather than an underflow.
    /// Argument 0 is the first argument supplied in the source.
    pub(crate) fn eval_function(&mut self, function: &Function, given: usize) -> EvalResult<()> {
        function.check_arity(given)?;

        let args = self.pop_values(given)?;
        let result = (function.func)(&args);

        tracing::trace!(function = function.name, ?args, result, "call");
        self.push_value(result)
    }
}
