use super::{abs, round};
use num_traits::{PrimInt, Unsigned};

/// Calculates the GCD of the nearest integers to `|a|` and `|b|` with the Euclidean algorithm.
///
/// `gcd(0, n) = n`, and the result is never negative. Returns NaN if either input is not finite.
pub fn gcd(a: f64, b: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }
    let (mut u, mut v) = (round(abs(a)), round(abs(b)));
    while v != 0. {
        let t = v;
        v = u % v;
        u = t;
    }
    u
}

/// The [Euclidean GCD] algorithm over unsigned integers.
///
/// [Euclidean GCD]: https://en.wikipedia.org/wiki/Euclidean_algorithm
pub fn int_gcd<N: Unsigned + PrimInt>(mut u: N, mut v: N) -> N {
    let mut t;
    while !v.is_zero() {
        t = v;
        v = u % v;
        u = t;
    }
    u
}
