//! Property-based tests for the numeric kernel.

use proptest::prelude::*;

use super::*;

// Numerators are kept small enough that no earlier convergent of p/q lands within the relative
// tolerance of p/q itself.
fn numerator() -> impl Strategy<Value = i64> {
    -200i64..200i64
}

fn denominator() -> impl Strategy<Value = u64> {
    1u64..=1_000_000u64
}

proptest! {
    #[test]
    fn sqrt_squares_back(x in 0f64..1e9) {
        let root = sqrt(x);
        prop_assert!(abs(root * root - x) <= 1e-6 * x, "sqrt({}) = {}", x, root);
    }

    #[test]
    fn sqrt_of_negative_is_nan(x in -1e9f64..-1e-9) {
        prop_assert!(sqrt(x).is_nan());
    }

    #[test]
    fn fraction_round_trips(p in numerator(), q in denominator()) {
        let expected = Fraction::new(p, q);
        let decimal = p as f64 / q as f64;
        prop_assert_eq!(to_fraction(decimal), Ok(expected));
    }

    #[test]
    fn gcd_recurrence(a in 0u32..1_000_000, b in 1u32..1_000_000) {
        let (a, b) = (a as f64, b as f64);
        prop_assert_eq!(gcd(a, b), gcd(b, a % b));
    }

    #[test]
    fn gcd_with_zero(a in -1_000_000i32..1_000_000) {
        prop_assert_eq!(gcd(a as f64, 0.), (a as f64).abs());
    }

    #[test]
    fn gcd_is_non_negative(a in -1_000_000i32..1_000_000, b in -1_000_000i32..1_000_000) {
        prop_assert!(gcd(a as f64, b as f64) >= 0.);
    }

    #[test]
    fn floor_brackets_input(x in -1e9f64..1e9) {
        let f = floor(x);
        prop_assert!(f <= x && x < f + 1.);
        prop_assert_eq!(f, round(f));
    }
}
