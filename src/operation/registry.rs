use std::fmt;

use log::trace;

use crate::expression::Number;
use crate::operation::constants::{MAX_POWER_EXPONENT, MAX_SHIFT_AMOUNT};
use crate::operation::errors::OperationError;

/// Binary operations available at every internal node of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Mul,
    Sub,
    Div,
    FloorDiv,
    LeftShift,
    RightShift,
    Mod,
    Pow,
}

impl Operation {
    /// Every operation, in the order candidates are generated
    pub const ALL: [Operation; 9] = [
        Operation::Add,
        Operation::Mul,
        Operation::Sub,
        Operation::Div,
        Operation::FloorDiv,
        Operation::LeftShift,
        Operation::RightShift,
        Operation::Mod,
        Operation::Pow,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Mul => "*",
            Operation::Sub => "-",
            Operation::Div => "/",
            Operation::FloorDiv => "//",
            Operation::LeftShift => "<<",
            Operation::RightShift => ">>",
            Operation::Mod => "%",
            Operation::Pow => "^",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Mul => "mul",
            Operation::Sub => "sub",
            Operation::Div => "div",
            Operation::FloorDiv => "floordiv",
            Operation::LeftShift => "lshift",
            Operation::RightShift => "rshift",
            Operation::Mod => "mod",
            Operation::Pow => "pow",
        }
    }

    /// Upper bound on the right operand, for operations that have one
    pub fn limit(self) -> Option<u32> {
        match self {
            Operation::Pow => Some(MAX_POWER_EXPONENT),
            Operation::LeftShift | Operation::RightShift => Some(MAX_SHIFT_AMOUNT),
            _ => None,
        }
    }

    /// Reject operands that would make the computation blow up, before computing anything
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::GuardViolation`] when `rhs` exceeds [`Operation::limit`].
    pub fn guard(self, rhs: Number) -> Result<(), OperationError> {
        match self.limit() {
            Some(limit) if rhs.exceeds(limit) => {
                trace!("Guard rejected {} with operand {}", self, rhs);
                Err(OperationError::GuardViolation {
                    operation: self,
                    operand: rhs,
                    limit,
                })
            }
            _ => Ok(()),
        }
    }

    /// # Errors
    ///
    /// Returns an error when:
    /// - the guard rejects `rhs` (exponent above 10, shift above 64)
    /// - `rhs` is zero for a division or modulo, or zero is raised to a negative power
    /// - an operand is not valid for the operation (real or negative shift operands,
    ///   negative real base with a fractional exponent)
    /// - the result does not fit an `i128` or is not a finite real
    pub fn apply(self, lhs: Number, rhs: Number) -> Result<Number, OperationError> {
        self.guard(rhs)?;

        match self {
            Operation::Add => self.arithmetic(lhs, rhs, i128::checked_add, |a, b| a + b),
            Operation::Sub => self.arithmetic(lhs, rhs, i128::checked_sub, |a, b| a - b),
            Operation::Mul => self.arithmetic(lhs, rhs, i128::checked_mul, |a, b| a * b),
            Operation::Div => {
                if rhs.is_zero() {
                    return Err(OperationError::DivisionByZero);
                }
                self.finite(lhs.as_f64() / rhs.as_f64())
            }
            Operation::FloorDiv => {
                if rhs.is_zero() {
                    return Err(OperationError::DivisionByZero);
                }
                self.arithmetic(lhs, rhs, floor_div, real_floor_div)
            }
            Operation::Mod => {
                if rhs.is_zero() {
                    return Err(OperationError::DivisionByZero);
                }
                self.arithmetic(lhs, rhs, floor_mod, real_floor_mod)
            }
            Operation::Pow => self.pow(lhs, rhs),
            Operation::LeftShift | Operation::RightShift => self.shift(lhs, rhs),
        }
    }

    fn arithmetic(
        self,
        lhs: Number,
        rhs: Number,
        int_op: fn(i128, i128) -> Option<i128>,
        real_op: fn(f64, f64) -> f64,
    ) -> Result<Number, OperationError> {
        match (lhs, rhs) {
            (Number::Int(a), Number::Int(b)) => int_op(a, b)
                .map(Number::Int)
                .ok_or(OperationError::Overflow { operation: self }),
            _ => self.finite(real_op(lhs.as_f64(), rhs.as_f64())),
        }
    }

    fn pow(self, lhs: Number, rhs: Number) -> Result<Number, OperationError> {
        if let (Number::Int(base), Number::Int(exponent)) = (lhs, rhs)
            && exponent >= 0
        {
            // The guard bounds the exponent, so it always fits a u32
            let exponent = u32::try_from(exponent)
                .map_err(|_| OperationError::Overflow { operation: self })?;
            return base
                .checked_pow(exponent)
                .map(Number::Int)
                .ok_or(OperationError::Overflow { operation: self });
        }

        let (base, exponent) = (lhs.as_f64(), rhs.as_f64());
        if base == 0.0 && exponent < 0.0 {
            return Err(OperationError::DivisionByZero);
        }
        if base < 0.0 && exponent.fract() != 0.0 {
            return Err(OperationError::InvalidOperand {
                operation: self,
                operand: rhs,
            });
        }
        self.finite(base.powf(exponent))
    }

    fn shift(self, lhs: Number, rhs: Number) -> Result<Number, OperationError> {
        let (Number::Int(value), Number::Int(amount)) = (lhs, rhs) else {
            let operand = if matches!(lhs, Number::Real(_)) { lhs } else { rhs };
            return Err(OperationError::InvalidOperand {
                operation: self,
                operand,
            });
        };
        let amount = u32::try_from(amount).map_err(|_| OperationError::InvalidOperand {
            operation: self,
            operand: rhs,
        })?;

        if self == Operation::RightShift {
            return value
                .checked_shr(amount)
                .map(Number::Int)
                .ok_or(OperationError::Overflow { operation: self });
        }

        match value.checked_shl(amount) {
            Some(shifted) if shifted >> amount == value => Ok(Number::Int(shifted)),
            _ => Err(OperationError::Overflow { operation: self }),
        }
    }

    fn finite(self, value: f64) -> Result<Number, OperationError> {
        if value.is_finite() {
            Ok(Number::Real(value))
        } else {
            Err(OperationError::Overflow { operation: self })
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Integer division rounding toward negative infinity
fn floor_div(a: i128, b: i128) -> Option<i128> {
    let quotient = a.checked_div(b)?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Remainder carrying the sign of the divisor
fn floor_mod(a: i128, b: i128) -> Option<i128> {
    let remainder = a.checked_rem(b)?;
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        remainder.checked_add(b)
    } else {
        Some(remainder)
    }
}

/// Quotient derived from the floored remainder, so that `q * b + real_floor_mod(a, b)`
/// gives back `a` even when `a / b` rounds up to an integer
fn real_floor_div(a: f64, b: f64) -> f64 {
    let remainder = a % b;
    let mut quotient = (a - remainder) / b;
    if remainder != 0.0 && ((remainder < 0.0) != (b < 0.0)) {
        quotient -= 1.0;
    }
    if quotient == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

fn real_floor_mod(a: f64, b: f64) -> f64 {
    let remainder = a % b;
    if remainder != 0.0 && ((remainder < 0.0) != (b < 0.0)) {
        remainder + b
    } else {
        remainder
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::{floor_div, floor_mod, real_floor_div, real_floor_mod};

    #[test]
    fn test_floor_div() {
        assert_eq!(floor_div(7, 2), Some(3));
        assert_eq!(floor_div(-7, 2), Some(-4));
        assert_eq!(floor_div(7, -2), Some(-4));
        assert_eq!(floor_div(-7, -2), Some(3));
        assert_eq!(floor_div(6, -3), Some(-2));
        assert_eq!(floor_div(i128::MIN, -1), None);
    }

    #[test]
    fn test_floor_mod() {
        assert_eq!(floor_mod(7, 3), Some(1));
        assert_eq!(floor_mod(-7, 3), Some(2));
        assert_eq!(floor_mod(7, -3), Some(-2));
        assert_eq!(floor_mod(-7, -3), Some(-1));
        assert_eq!(floor_mod(9, 3), Some(0));
    }

    #[test]
    fn test_real_floor_mod() {
        assert_eq!(real_floor_mod(7.5, 2.0), 1.5);
        assert_eq!(real_floor_mod(-7.5, 2.0), 0.5);
        assert_eq!(real_floor_mod(7.5, -2.0), -0.5);
    }

    #[test]
    fn test_real_floor_div() {
        assert_eq!(real_floor_div(7.5, 2.0), 3.0);
        assert_eq!(real_floor_div(-7.5, 2.0), -4.0);
        assert_eq!(real_floor_div(7.5, -2.0), -4.0);
        // 1 / 0.1 rounds to 10.0 but 0.1 fits only nine times
        assert_eq!(real_floor_div(1.0, 0.1), 9.0);
        assert_eq!(real_floor_mod(1.0, 0.1), 0.09999999999999995);
        assert!(real_floor_div(-0.5, 2.0) == -1.0);
        assert!(real_floor_div(0.5, -2.0) == -1.0);
        assert!(real_floor_div(0.0, -2.0).is_sign_negative());
    }
}
