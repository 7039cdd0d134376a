use super::{abs, floor, int_gcd, round, EPSILON};

use core::fmt;
use thiserror::Error;

/// Default number of continued fraction terms expanded by [to_fraction].
pub const FRACTION_MAX_ITERATIONS: usize = 25;

/// Magnitude at which a float no longer fits in a fraction's integer parts.
const I64_LIMIT: f64 = i64::MAX as f64;

/// An irreducible fraction.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct Fraction {
    numer: i64,
    denom: u64,
}

impl Fraction {
    /// Creates the irreducible fraction `numer / denom`. A zero denominator is treated as one.
    pub fn new(numer: i64, denom: u64) -> Self {
        let denom = denom.max(1);
        let divisor = int_gcd(numer.unsigned_abs(), denom).max(1);
        Self {
            numer: numer / divisor as i64,
            denom: denom / divisor,
        }
    }

    pub fn numer(&self) -> i64 {
        self.numer
    }

    pub fn denom(&self) -> u64 {
        self.denom
    }

    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::new(n, 1)
    }
}

/// Displays as `p/q`, or `p` when the denominator is one.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

#[derive(Error, PartialEq, Debug, Clone, Copy)]
pub enum FractionError {
    #[error("{0} has no fractional representation")]
    NotFinite(f64),

    #[error("the fractional representation of {0} does not fit in 64 bits")]
    OutOfRange(f64),
}

/// Converts a decimal to its best low-denominator fraction with the default tolerance
/// ([EPSILON]) and iteration bound ([FRACTION_MAX_ITERATIONS]).
///
/// ```
/// use libcomputor::math::to_fraction;
///
/// assert_eq!(to_fraction(0.25).unwrap().to_string(), "1/4");
/// assert_eq!(to_fraction(-3.).unwrap().to_string(), "-3");
/// assert_eq!(to_fraction(std::f64::consts::PI).unwrap().to_string(), "103993/33102");
/// ```
pub fn to_fraction(decimal: f64) -> Result<Fraction, FractionError> {
    to_fraction_with(decimal, EPSILON, FRACTION_MAX_ITERATIONS)
}

/// Converts a decimal to a fraction by expanding its [continued fraction].
///
/// ## Algorithm
///
/// The sign is split off, and the expansion runs on `x = |decimal|`. Starting with `b = x`, each
/// step takes the integer part `a = floor(b)` and advances the convergent `h/k` with
///
/// ```text
/// h' = a * h + h_prev
/// k' = a * k + k_prev
/// ```
///
/// then continues with `b = 1 / (b - a)`. The expansion stops as soon as `h/k` is within
/// `tolerance * x` of `x`, or after `max_iterations` terms.
///
/// Convergents are the best rational approximations for their denominator size, so exact
/// fractions are recovered exactly, and irrational inputs degrade to close approximations (π
/// becomes `103993/33102`) rather than failing.
///
/// Numbers within `tolerance` of an integer are returned as that integer.
///
/// ## Failure
///
/// Non-finite inputs, and inputs whose convergent does not fit in 64-bit integers, are errors.
///
/// [continued fraction]: https://en.wikipedia.org/wiki/Continued_fraction
pub fn to_fraction_with(
    decimal: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<Fraction, FractionError> {
    if !decimal.is_finite() {
        return Err(FractionError::NotFinite(decimal));
    }

    let rounded = round(decimal);
    if abs(decimal - rounded) < tolerance {
        if abs(rounded) >= I64_LIMIT {
            return Err(FractionError::OutOfRange(decimal));
        }
        return Ok(Fraction::from(rounded as i64));
    }

    let sign = if decimal < 0. { -1 } else { 1 };
    let x = abs(decimal);

    let (mut h1, mut h2) = (1., 0.);
    let (mut k1, mut k2) = (0., 1.);
    let mut b = x;
    for _ in 0..max_iterations {
        let a = floor(b);

        let h = a * h1 + h2;
        h2 = h1;
        h1 = h;

        let k = a * k1 + k2;
        k2 = k1;
        k1 = k;

        if abs(x - h1 / k1) <= x * tolerance {
            break;
        }

        let rest = b - a;
        if rest == 0. {
            break;
        }
        b = 1. / rest;
    }

    if h1 >= I64_LIMIT || k1 >= I64_LIMIT {
        return Err(FractionError::OutOfRange(decimal));
    }
    Ok(Fraction::new(sign * h1 as i64, k1 as u64))
}
