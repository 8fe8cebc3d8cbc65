use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Non-zero reals at or above this magnitude, or below `SMALL_REAL_LIMIT`, print in
/// scientific notation
const PLAIN_REAL_LIMIT: f64 = 1e16;
const SMALL_REAL_LIMIT: f64 = 1e-4;

/// A value taking part in a search: either an input number or an intermediate result.
///
/// Integers stay integral for as long as the operations applied to them allow it,
/// reals are always finite (operations refuse to produce anything else).
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i128),
    Real(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Real(x) => x,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Real(x) => x == 0.0,
        }
    }

    pub fn is_finite(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Real(x) => x.is_finite(),
        }
    }

    /// True when the value is strictly greater than `limit`
    pub fn exceeds(self, limit: u32) -> bool {
        match self {
            Number::Int(n) => n > i128::from(limit),
            Number::Real(x) => x > f64::from(limit),
        }
    }

    /// Integral value of a real, when it has one that fits into an `i128`
    fn integral_value(x: f64) -> Option<i128> {
        // i128::MAX as f64 rounds up to 2^127, hence the strict bound
        if x.fract() == 0.0 && x.abs() < 2_f64.powi(127) {
            Some(x as i128)
        } else {
            None
        }
    }

    /// Absolute distance between two numbers
    pub fn abs_diff(self, other: Number) -> Distance {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Distance::Integral(a.abs_diff(b)),
            _ => Distance::Real((self.as_f64() - other.as_f64()).abs()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Real(a), Number::Real(b)) => a == b,
            (Number::Int(a), Number::Real(b)) | (Number::Real(b), Number::Int(a)) => {
                Number::integral_value(b) == Some(a)
            }
        }
    }
}

// Numbers are finite, so equality is reflexive.
impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match *self {
            Number::Int(n) => n.hash(state),
            Number::Real(x) => match Number::integral_value(x) {
                Some(n) => n.hash(state),
                // +0.0 and -0.0 are integral, so every remaining real has one bit pattern
                None => x.to_bits().hash(state),
            },
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Real(x) if x.fract() == 0.0 && x.abs() < PLAIN_REAL_LIMIT => {
                write!(f, "{:.1}", x)
            }
            Number::Real(x)
                if x != 0.0
                    && x.is_finite()
                    && (x.abs() < SMALL_REAL_LIMIT || x.abs() >= PLAIN_REAL_LIMIT) =>
            {
                // Exponent carries a sign and at least two digits: 1e-05, 1.5e+16
                let text = format!("{:e}", x);
                match text.split_once('e') {
                    Some((mantissa, exponent)) => {
                        let (sign, digits) = match exponent.strip_prefix('-') {
                            Some(digits) => ('-', digits),
                            None => ('+', exponent),
                        };
                        write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
                    }
                    None => f.write_str(&text),
                }
            }
            Number::Real(x) => write!(f, "{}", x),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(i128::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(i128::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Int(i128::from(value))
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::Int(i128::from(value))
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Real(value)
    }
}

/// How far a value lies from the target
#[derive(Debug, Clone, Copy)]
pub enum Distance {
    Integral(u128),
    Real(f64),
}

impl Distance {
    pub fn as_f64(self) -> f64 {
        match self {
            Distance::Integral(d) => d as f64,
            Distance::Real(d) => d,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Distance::Integral(d) => d == 0,
            Distance::Real(d) => d == 0.0,
        }
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (*self, *other) {
            (Distance::Integral(a), Distance::Integral(b)) => a.cmp(&b),
            _ => self.as_f64().total_cmp(&other.as_f64()),
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Distance::Integral(d) => write!(f, "{}", d),
            Distance::Real(d) => write!(f, "{}", d),
        }
    }
}
