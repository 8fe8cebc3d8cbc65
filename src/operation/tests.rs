use proptest::prelude::*;
use rstest::rstest;

use crate::expression::Number;
use crate::operation::constants::{MAX_POWER_EXPONENT, MAX_SHIFT_AMOUNT};
use crate::operation::{Operation, OperationError};

fn int(n: i128) -> Number {
    Number::Int(n)
}

fn real(x: f64) -> Number {
    Number::Real(x)
}

#[rstest]
#[case(Operation::Add, int(7), int(2), int(9))]
#[case(Operation::Sub, int(2), int(7), int(-5))]
#[case(Operation::Mul, int(7), int(9), int(63))]
#[case(Operation::Div, int(7), int(2), real(3.5))]
#[case(Operation::Div, int(8), int(2), real(4.0))]
#[case(Operation::FloorDiv, int(7), int(2), int(3))]
#[case(Operation::FloorDiv, int(-7), int(2), int(-4))]
#[case(Operation::FloorDiv, real(7.5), int(2), real(3.0))]
#[case(Operation::FloorDiv, int(1), real(0.1), real(9.0))]
#[case(Operation::FloorDiv, real(-1.0), real(0.1), real(-10.0))]
#[case(Operation::Mod, int(-7), int(3), int(2))]
#[case(Operation::Mod, real(7.5), int(2), real(1.5))]
#[case(Operation::Mod, int(1), real(0.1), real(0.09999999999999995))]
#[case(Operation::LeftShift, int(7), int(5), int(224))]
#[case(Operation::RightShift, int(7), int(1), int(3))]
#[case(Operation::RightShift, int(-7), int(1), int(-4))]
#[case(Operation::Pow, int(2), int(8), int(256))]
#[case(Operation::Pow, int(2), int(-1), real(0.5))]
#[case(Operation::Pow, real(4.0), real(0.5), real(2.0))]
#[case(Operation::Pow, int(-8), int(3), int(-512))]
#[case(Operation::Add, real(0.5), int(2), real(2.5))]
fn test_apply(
    #[case] operation: Operation,
    #[case] lhs: Number,
    #[case] rhs: Number,
    #[case] expected: Number,
) {
    let result = operation.apply(lhs, rhs);
    assert_eq!(result, Ok(expected), "{} {} {}", lhs, operation.symbol(), rhs);
}

#[rstest]
#[case(Operation::Div)]
#[case(Operation::FloorDiv)]
#[case(Operation::Mod)]
fn test_division_by_zero(#[case] operation: Operation) {
    assert_eq!(
        operation.apply(int(5), int(0)),
        Err(OperationError::DivisionByZero)
    );
    assert_eq!(
        operation.apply(real(5.0), real(0.0)),
        Err(OperationError::DivisionByZero)
    );
}

#[test]
fn test_zero_to_negative_power() {
    assert_eq!(
        Operation::Pow.apply(int(0), int(-2)),
        Err(OperationError::DivisionByZero)
    );
}

#[test]
fn test_power_guard_boundary_is_inclusive() {
    let limit = i128::from(MAX_POWER_EXPONENT);
    assert_eq!(Operation::Pow.apply(int(2), int(limit)), Ok(int(1024)));

    let result = Operation::Pow.apply(int(2), int(limit + 1));
    assert!(matches!(
        result,
        Err(OperationError::GuardViolation {
            operation: Operation::Pow,
            limit: 10,
            ..
        })
    ));

    // Real exponents are compared numerically
    assert!(matches!(
        Operation::Pow.apply(int(1), real(10.5)),
        Err(OperationError::GuardViolation { .. })
    ));
}

#[rstest]
#[case(Operation::LeftShift)]
#[case(Operation::RightShift)]
fn test_shift_guard_boundary_is_inclusive(#[case] operation: Operation) {
    let limit = i128::from(MAX_SHIFT_AMOUNT);
    assert!(operation.apply(int(1), int(limit)).is_ok());
    assert!(matches!(
        operation.apply(int(1), int(limit + 1)),
        Err(OperationError::GuardViolation { limit: 64, .. })
    ));
}

#[test]
fn test_guard_runs_before_type_checks() {
    // A real operand would be invalid for a shift, but the guard sees it first
    assert!(matches!(
        Operation::LeftShift.apply(real(1.5), int(100)),
        Err(OperationError::GuardViolation { .. })
    ));
}

#[rstest]
#[case(Operation::LeftShift, real(2.0), int(1))]
#[case(Operation::RightShift, int(2), real(1.0))]
#[case(Operation::LeftShift, int(2), int(-1))]
fn test_invalid_shift_operands(
    #[case] operation: Operation,
    #[case] lhs: Number,
    #[case] rhs: Number,
) {
    assert!(matches!(
        operation.apply(lhs, rhs),
        Err(OperationError::InvalidOperand { .. })
    ));
}

#[test]
fn test_negative_base_with_fractional_exponent() {
    assert_eq!(
        Operation::Pow.apply(int(-8), real(0.5)),
        Err(OperationError::InvalidOperand {
            operation: Operation::Pow,
            operand: real(0.5),
        })
    );
}

#[rstest]
#[case(Operation::Add, int(i128::MAX), int(1))]
#[case(Operation::Sub, int(i128::MIN), int(1))]
#[case(Operation::Mul, int(i128::MAX), int(2))]
#[case(Operation::FloorDiv, int(i128::MIN), int(-1))]
#[case(Operation::Pow, int(i128::MAX), int(2))]
#[case(Operation::LeftShift, int(i128::MAX), int(1))]
#[case(Operation::Mul, real(f64::MAX), int(2))]
#[case(Operation::Div, real(f64::MAX), real(0.5))]
#[case(Operation::Pow, real(1e300), int(2))]
fn test_overflow(#[case] operation: Operation, #[case] lhs: Number, #[case] rhs: Number) {
    assert_eq!(
        operation.apply(lhs, rhs),
        Err(OperationError::Overflow { operation })
    );
}

#[test]
fn test_symbols_are_distinct() {
    let symbols: Vec<_> = Operation::ALL.iter().map(|op| op.symbol()).collect();
    for (i, symbol) in symbols.iter().enumerate() {
        assert!(!symbols.iter().skip(i + 1).any(|other| other == symbol));
    }
    assert_eq!(Operation::FloorDiv.symbol(), "//");
    assert_eq!(Operation::Pow.symbol(), "^");
}

#[test]
fn test_only_pow_and_shifts_are_guarded() {
    let guarded: Vec<_> = Operation::ALL
        .into_iter()
        .filter(|op| op.limit().is_some())
        .collect();
    assert_eq!(
        guarded,
        vec![Operation::LeftShift, Operation::RightShift, Operation::Pow]
    );
}

#[test]
fn test_error_messages() {
    let err = OperationError::GuardViolation {
        operation: Operation::Pow,
        operand: int(11),
        limit: 10,
    };
    assert_eq!(err.to_string(), "Operand 11 of pow exceeds the limit of 10");
    assert_eq!(OperationError::DivisionByZero.to_string(), "Division by zero");
}

proptest! {
    #[test]
    fn floor_div_and_mod_reconstruct_the_dividend(a in -10_000i128..10_000, b in -100i128..100) {
        prop_assume!(b != 0);
        let quotient = Operation::FloorDiv.apply(int(a), int(b));
        let remainder = Operation::Mod.apply(int(a), int(b));
        prop_assert!(matches!((quotient, remainder), (Ok(Number::Int(_)), Ok(Number::Int(_)))));
        if let (Ok(Number::Int(q)), Ok(Number::Int(r))) = (quotient, remainder) {
            prop_assert_eq!(q * b + r, a);
            prop_assert!(r == 0 || (r < 0) == (b < 0));
        }
    }

    #[test]
    fn real_floor_div_and_mod_reconstruct_the_dividend(
        a in -10_000.0f64..10_000.0,
        b in prop_oneof![-100.0f64..-0.01, 0.01f64..100.0],
    ) {
        let quotient = Operation::FloorDiv.apply(real(a), real(b));
        let remainder = Operation::Mod.apply(real(a), real(b));
        prop_assert!(matches!((quotient, remainder), (Ok(Number::Real(_)), Ok(Number::Real(_)))));
        if let (Ok(Number::Real(q)), Ok(Number::Real(r))) = (quotient, remainder) {
            prop_assert_eq!(q.fract(), 0.0);
            prop_assert!(r == 0.0 || (r < 0.0) == (b < 0.0));
            prop_assert!(r.abs() <= b.abs());
            prop_assert!((q * b + r - a).abs() <= 1e-9 * a.abs().max(1.0));
        }
    }

    #[test]
    fn integer_results_agree_with_real_results(a in -1_000i128..1_000, b in -1_000i128..1_000) {
        for operation in [Operation::Add, Operation::Sub, Operation::Mul] {
            let exact = operation.apply(int(a), int(b));
            let approx = operation.apply(real(a as f64), real(b as f64));
            prop_assert_eq!(exact, approx);
        }
    }
}
