//! Property-based tests for the expression engine.
//!
//! These check the rules that are easy to get subtly wrong: when `+` and `-`
//! are unary, how equal-precedence operators group, and that evaluation is a
//! pure function of its input.

use proptest::prelude::*;
use yardcalc::evaluate;

fn operator_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '-', '*', '/', '%', '^'])
}

fn signs_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[+-]{0,8}").expect("valid regex")
}

/// Value of a run of prefix signs applied to `x`.
fn apply_signs(signs: &str, x: f64) -> f64 {
    if signs.matches('-').count() % 2 == 0 { x } else { -x }
}

proptest! {
    #[test]
    fn leading_signs_are_unary(signs in signs_strategy(), x in 0u32..10_000) {
        let value = evaluate(&format!("{signs}{x}")).unwrap();
        prop_assert_eq!(value, apply_signs(&signs, f64::from(x)));
    }

    #[test]
    fn signs_after_binary_minus_are_unary(a in 0u32..10_000,
                                          signs in signs_strategy(),
                                          b in 0u32..10_000) {
        let value = evaluate(&format!("{a}-{signs}{b}")).unwrap();
        prop_assert_eq!(value, f64::from(a) - apply_signs(&signs, f64::from(b)));
    }

    #[test]
    fn signs_after_left_paren_are_unary(signs in signs_strategy(), x in 0u32..10_000) {
        let value = evaluate(&format!("2*({signs}{x})")).unwrap();
        prop_assert_eq!(value, 2.0 * apply_signs(&signs, f64::from(x)));
    }

    #[test]
    fn subtraction_groups_left(a in 0u32..10_000, b in 0u32..10_000, c in 0u32..10_000) {
        let value = evaluate(&format!("{a}-{b}-{c}")).unwrap();
        prop_assert_eq!(value, (f64::from(a) - f64::from(b)) - f64::from(c));
    }

    #[test]
    fn power_groups_right(a in 1u32..5, b in 0u32..4, c in 0u32..3) {
        let value = evaluate(&format!("{a}^{b}^{c}")).unwrap();
        prop_assert_eq!(value, f64::from(a).powf(f64::from(b).powf(f64::from(c))));
    }

    #[test]
    fn multiplication_binds_tighter_than_addition(a in 0u32..1000,
                                                 b in 0u32..1000,
                                                 c in 0u32..1000) {
        let value = evaluate(&format!("{a}+{b}*{c}")).unwrap();
        prop_assert_eq!(value, f64::from(a) + f64::from(b) * f64::from(c));
    }

    #[test]
    fn max_and_min_reduce_all_arguments(values in prop::collection::vec(0u32..10_000, 1..20)) {
        let args = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
        let max = values.iter().copied().max().map(f64::from);
        let min = values.iter().copied().min().map(f64::from);

        prop_assert_eq!(Some(evaluate(&format!("max({args})")).unwrap()), max);
        prop_assert_eq!(Some(evaluate(&format!("min({args})")).unwrap()), min);
    }

    #[test]
    fn evaluation_is_repeatable(a in 0u32..1000,
                                op1 in operator_strategy(),
                                b in 0u32..1000,
                                op2 in operator_strategy(),
                                c in 0u32..1000) {
        let src = format!("{a}{op1}{b}{op2}-{c}");
        let first = evaluate(&src).unwrap();
        let second = evaluate(&src).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}
