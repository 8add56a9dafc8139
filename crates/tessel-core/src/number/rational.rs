//! Exact rational numbers with fixed-digit decimal expansion.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RationalError {
    #[error("Rational denominator is zero")]
    ZeroDenominator,
    #[error("Rational {0}/{1} does not fit in 64 bits")]
    Overflow(i64, i64),
}

/// A reduced fraction `num / den` with `den > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    /// Create a rational, moving the sign to the numerator and reducing.
    pub fn new(num: i64, den: i64) -> Result<Self, RationalError> {
        if den == 0 {
            return Err(RationalError::ZeroDenominator);
        }
        let overflow = || RationalError::Overflow(num, den);
        let g = i128::from(gcd(num.unsigned_abs(), den.unsigned_abs()));
        let (mut n, mut d) = (i128::from(num) / g, i128::from(den) / g);
        if d < 0 {
            n = -n;
            d = -d;
        }
        Ok(Self {
            num: i64::try_from(n).map_err(|_| overflow())?,
            den: i64::try_from(d).map_err(|_| overflow())?,
        })
    }

    pub fn from_integer(value: i64) -> Self {
        Self { num: value, den: 1 }
    }

    pub fn numer(&self) -> i64 {
        self.num
    }

    pub fn denom(&self) -> i64 {
        self.den
    }

    pub fn is_negative(&self) -> bool {
        self.num < 0
    }

    /// Decimal expansion with exactly `precision` fractional digits.
    ///
    /// The last digit is rounded half away from zero. A negative value keeps
    /// its sign even when it rounds to zero (`-0.00`).
    pub fn float_string(&self, precision: usize) -> String {
        let den = u128::from(self.den.unsigned_abs());
        let magnitude = u128::from(self.num.unsigned_abs());
        let mut int_part = magnitude / den;
        let mut rem = magnitude % den;

        let mut frac = Vec::with_capacity(precision);
        for _ in 0..precision {
            rem *= 10;
            frac.push((rem / den) as u8);
            rem %= den;
        }

        if rem * 2 >= den {
            // Propagate the round-up carry through the fraction into the integer part.
            let mut carry = true;
            for digit in frac.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                int_part += 1;
            }
        }

        let mut out = String::with_capacity(precision + 24);
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(&int_part.to_string());
        if precision > 0 {
            out.push('.');
            out.extend(frac.iter().map(|d| char::from(b'0' + d)));
        }
        out
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
