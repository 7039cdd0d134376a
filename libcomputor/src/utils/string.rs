/// Formats a float the way it should read in an equation: the shortest representation that
/// round-trips, without a trailing `.0`, and never as negative zero.
pub fn display_float(num: f64) -> String {
    // -0 + 0 is +0
    (num + 0.).to_string()
}

/// Formats a float with exactly six decimal places, never as negative zero.
pub fn fixed_float(num: f64) -> String {
    format!("{:.6}", num + 0.)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_integral() {
        assert_eq!(display_float(4.), "4");
        assert_eq!(display_float(-9.3), "-9.3");
    }

    #[test]
    fn display_negative_zero() {
        assert_eq!(display_float(-0.), "0");
        assert_eq!(fixed_float(-0.), "0.000000");
    }

    #[test]
    fn fixed_rounds_to_six_places() {
        assert_eq!(fixed_float(-0.2), "-0.200000");
        assert_eq!(fixed_float(2. / 3.), "0.666667");
    }
}
