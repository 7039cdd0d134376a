//! The reduced form of an equation.

use crate::math::{abs, max, EPSILON};
use crate::utils::display_float;

use core::fmt;
use std::collections::BTreeMap;

/// Maps a power of `X` to its coefficient.
pub type CoefficientMap = BTreeMap<u32, f64>;

/// Creates a new polynomial from `power => coefficient` pairs.
///
/// # Examples:
///
/// ```
/// use libcomputor::poly;
///
/// let p = poly![0 => -6., 1 => 1., 2 => 1.]; // x^2 + x - 6
/// assert_eq!(p.degree(), 2);
/// assert_eq!(poly![].to_string(), "0 = 0");
/// ```
#[macro_export]
macro_rules! poly {
    ($($pow:expr => $coeff:expr),+ $(,)?) => {
        $crate::Polynomial::new(vec![$(($pow, $coeff)),+].into_iter().collect())
    };

    () => {
        $crate::Polynomial::new(Default::default())
    };
}

/// A polynomial `c0 + c1 X + c2 X^2 + ... = 0`, the reduced form of an equation.
///
/// Coefficients within [EPSILON] of zero are never stored, and the degree is always derived from
/// the stored coefficients.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial {
    coefficients: CoefficientMap,
    degree: u32,
}

impl Polynomial {
    pub fn new(coefficients: CoefficientMap) -> Self {
        let coefficients: CoefficientMap = coefficients
            .into_iter()
            .filter(|(_, coeff)| abs(*coeff) > EPSILON)
            .collect();
        let degree = max(coefficients.keys().map(|&pow| pow as f64));
        let degree = if degree.is_finite() { degree as u32 } else { 0 };

        Self {
            coefficients,
            degree,
        }
    }

    /// The highest power with a nonzero coefficient, or 0 for a constant (or empty) polynomial.
    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn coefficients(&self) -> &CoefficientMap {
        &self.coefficients
    }

    /// The coefficient of `X^power`, which is zero for absent powers.
    pub fn coefficient(&self, power: u32) -> f64 {
        self.coefficients.get(&power).copied().unwrap_or(0.)
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Renders the polynomial as `"c0 * X^0 + c1 * X^1 ... = 0"` in ascending powers.
    ///
    /// Each term carries its explicit coefficient and power. Signs are written as separators
    /// between terms, and as a `"- "` prefix when the first coefficient is negative. A polynomial
    /// with no terms renders as `"0 = 0"`.
    pub fn to_canonical_string(&self) -> String {
        if self.coefficients.is_empty() {
            return "0 = 0".to_owned();
        }

        let mut result = String::with_capacity(16 * self.coefficients.len());
        for (i, (pow, coeff)) in self.coefficients.iter().enumerate() {
            if i > 0 {
                result.push_str(if *coeff > 0. { " + " } else { " - " });
            } else if *coeff < 0. {
                result.push_str("- ");
            }
            result.push_str(&format!("{} * X^{}", display_float(abs(*coeff)), pow));
        }
        result.push_str(" = 0");
        result
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

#[cfg(test)]
mod tests {
    macro_rules! canonical_tests {
        ($($name:ident: $poly:expr => $canonical:expr)*) => {
        $(
            #[test]
            fn $name() {
                assert_eq!($poly.to_canonical_string(), $canonical);
            }
        )*
        }
    }

    mod canonical {
        canonical_tests! {
            ascending_powers: poly![2 => 1., 0 => 4., 1 => -5.] => "4 * X^0 - 5 * X^1 + 1 * X^2 = 0"
            single_negative_term: poly![2 => -5.] => "- 5 * X^2 = 0"
            empty: poly![] => "0 = 0"
            decimals: poly![0 => 4., 1 => 4., 2 => -9.3] => "4 * X^0 + 4 * X^1 - 9.3 * X^2 = 0"
            sparse: poly![3 => 1., 0 => -1.] => "- 1 * X^0 + 1 * X^3 = 0"
        }
    }

    mod construction {
        use crate::math::EPSILON;

        #[test]
        fn prunes_near_zero_coefficients() {
            let p = poly![0 => 5., 1 => EPSILON / 2., 2 => -EPSILON, 3 => 0.];
            assert_eq!(p.coefficients().len(), 1);
            assert_eq!(p.degree(), 0);
            assert_eq!(p.coefficient(1), 0.);
        }

        #[test]
        fn degree_is_highest_power() {
            assert_eq!(poly![0 => 1., 4 => 2., 1 => 3.].degree(), 4);
            assert_eq!(poly![1 => 3.].degree(), 1);
        }

        #[test]
        fn empty_has_degree_zero() {
            let p = poly![0 => 0., 2 => 1e-12];
            assert!(p.is_empty());
            assert_eq!(p.degree(), 0);
            assert_eq!(p.to_string(), "0 = 0");
        }

        #[test]
        fn absent_coefficients_are_zero() {
            let p = poly![2 => 1.];
            assert_eq!(p.coefficient(2), 1.);
            assert_eq!(p.coefficient(0), 0.);
        }
    }
}
