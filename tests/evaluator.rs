use yardcalc::{
    config::EngineConfig,
    error::{EngineError, EvalError},
    evaluate_with,
    interpreter::{
        evaluator::{
            core::Evaluator,
            function::core::{Arity, FUNCTIONS, Function},
        },
        token::Token,
    },
    operator::{Operator, OperatorArity},
    to_postfix_with,
};

fn assert_eval_error(program: &[Token], expected: &EngineError) {
    match Evaluator::new(8).eval(program) {
        Ok(value) => panic!("{program:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "{program:?} failed with the wrong error"),
    }
}

fn function(name: &str) -> &'static Function {
    Function::lookup(name).unwrap_or_else(|| panic!("'{name}' is not in the catalog"))
}

#[test]
fn punctuation_in_a_program_is_malformed() {
    assert_eval_error(&[Token::Number(1.0), Token::Comma],
                      &EvalError::MalformedExpression { values: 1 }.into());
    assert_eval_error(&[Token::LeftParen],
                      &EvalError::MalformedExpression { values: 0 }.into());
    assert_eval_error(&[Token::Number(1.0), Token::Number(2.0), Token::RightParen],
                      &EvalError::MalformedExpression { values: 2 }.into());
}

#[test]
fn missing_operands_underflow() {
    let add = Operator::lookup('+', OperatorArity::Binary).unwrap();
    let negate = Operator::lookup('-', OperatorArity::Unary).unwrap();

    assert_eval_error(&[Token::Number(1.0), Token::Operator(add)],
                      &EvalError::InternalStackUnderflow.into());
    assert_eval_error(&[Token::Operator(negate)], &EvalError::InternalStackUnderflow.into());
    assert_eval_error(&[Token::Number(1.0),
                        Token::Function { function: function("max"),
                                          arity:    2, }],
                      &EvalError::InternalStackUnderflow.into());
}

#[test]
fn call_arity_is_checked_before_popping() {
    assert_eval_error(&[Token::Number(4.0),
                        Token::Number(9.0),
                        Token::Function { function: function("sqrt"),
                                          arity:    2, }],
                      &EvalError::ArityMismatch { name:     "sqrt".to_string(),
                                                  expected: Arity::Fixed(1),
                                                  given:    2, }.into());
}

#[test]
fn evaluator_is_reusable_after_an_error() {
    let mut evaluator = Evaluator::new(8);
    assert!(evaluator.eval(&[Token::Number(1.0), Token::Comma]).is_err());
    assert_eq!(evaluator.eval(&[Token::Number(7.0)]).unwrap(), 7.0);
}

#[test]
fn every_catalog_function_rejects_an_empty_call() {
    for function in FUNCTIONS {
        match function.call(&[]) {
            Err(EngineError::Eval(EvalError::ArityMismatch { name, given: 0, .. })) => {
                assert_eq!(name, function.name);
            },
            other => panic!("'{}' called with no arguments gave {other:?}", function.name),
        }
    }
}

#[test]
fn direct_calls_check_arity() {
    assert_eq!(function("floor").call(&[3.8]).unwrap(), 3.0);
    assert_eq!(function("trunc").call(&[-3.8]).unwrap(), -3.0);
    assert_eq!(function("log").call(&[8.0, 2.0]).unwrap(), 3.0);
    assert_eq!(function("sum").call(&[1.0, 2.0, 3.0]).unwrap(), 6.0);
    assert_eq!(function("log").call(&[8.0]).unwrap_err(),
               EvalError::ArityMismatch { name:     "log".to_string(),
                                          expected: Arity::Fixed(2),
                                          given:    1, }.into());
    assert_eq!(function("round").call(&[1.0, 2.0]).unwrap_err(),
               EvalError::ArityMismatch { name:     "round".to_string(),
                                          expected: Arity::Fixed(1),
                                          given:    2, }.into());
}

#[test]
fn one_transform_then_eval_matches_evaluate_with() {
    let config = EngineConfig { stack_capacity: 64 };
    for src in ["2+3*4", "-(1 + 2) * max(3, 4)", "log(8, 2) ^ 2", "sqrt 16", "0/0"] {
        let program = to_postfix_with(src, &config).unwrap();
        let stepwise = Evaluator::new(config.stack_capacity).eval(&program).unwrap();
        let direct = evaluate_with(src, &config).unwrap();
        assert_eq!(stepwise.to_bits(), direct.to_bits(), "'{src}' differs between paths");
    }
}
