use num_traits::Float;

/// Tolerance below which a quantity is treated as exactly zero (or exactly integral).
pub const EPSILON: f64 = 1e-9;

/// Number of Babylonian refinements performed by [sqrt].
const SQRT_ITERATIONS: usize = 20;

/// Floats at least this large have no fractional part.
const TWO_POW_52: f64 = 4_503_599_627_370_496.;

/// Computes the square root of `x` with a fixed number of Babylonian (Newton) refinements,
/// starting from `x / 2`.
///
/// Returns NaN for negative `x`. The iteration count is fixed rather than convergence-checked, so
/// the cost is bounded and the result deterministic.
pub fn sqrt(x: f64) -> f64 {
    if x < 0. {
        return f64::NAN;
    }
    if x == 0. {
        return 0.;
    }

    let mut guess = x / 2.;
    for _ in 0..SQRT_ITERATIONS {
        guess = (guess + x / guess) / 2.;
    }
    guess
}

#[inline]
pub fn abs<F: Float>(x: F) -> F {
    if x < F::zero() {
        -x
    } else {
        x
    }
}

/// Returns the largest value of a sequence, or negative infinity if it is empty.
pub fn max<F, I>(values: I) -> F
where
    F: Float,
    I: IntoIterator<Item = F>,
{
    values
        .into_iter()
        .fold(F::neg_infinity(), |max, v| if v > max { v } else { max })
}

/// The mathematical floor of `x`: truncation toward zero, stepped down for negative numbers with a
/// fractional part.
pub fn floor(x: f64) -> f64 {
    if !x.is_finite() || abs(x) >= TWO_POW_52 {
        return x;
    }
    let truncated = x as i64 as f64;
    if x < 0. && truncated != x {
        truncated - 1.
    } else {
        truncated
    }
}

/// Rounds half up, `floor(x + 0.5)`.
#[inline]
pub fn round(x: f64) -> f64 {
    floor(x + 0.5)
}

/// Whether `n` is the square of an integer, within [EPSILON].
pub fn is_perfect_square(n: f64) -> bool {
    if n < 0. {
        return false;
    }
    let root = sqrt(n);
    abs(root - round(root)) < EPSILON
}
