/// The evaluator module runs postfix programs.
///
/// The evaluator walks the output of the transformer with a single value
/// stack, applying operators and functions as they appear.
///
/// # Responsibilities
/// - Applies the arithmetic of every operator with IEEE 754 semantics.
/// - Validates function call arity and dispatches to the builtins.
/// - Checks that the program reduces to exactly one value.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// The lexer reads the raw expression text and produces numbers, operators,
/// function references and punctuation. It decides whether `+` and `-` are
/// unary or binary by looking at the previous token.
///
/// # Responsibilities
/// - Recognizes numeric literals, identifiers and operator symbols.
/// - Resolves identifiers against the function catalog.
/// - Reports invalid characters with their position.
pub mod lexer;
/// Tokens shared by every stage of the pipeline.
pub mod token;
/// The transformer module reorders infix tokens into postfix order.
///
/// It implements the shunting-yard algorithm over bounded stacks and counts
/// the arguments of every function call along the way.
///
/// # Responsibilities
/// - Honors operator precedence and associativity.
/// - Matches parentheses and function argument lists.
/// - Attaches the call arity to each function in the output.
pub mod transformer;
