//! Emit strategies for solved and reduced equations.

use crate::solver::{SolutionType, SolveResult};
use crate::Polynomial;

use core::fmt;
use core::str::FromStr;
use serde_json::{json, Value};

/// The format in which a computor result should be emitted.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EmitFormat {
    /// Reduced form, degree, classification, and solutions, one per line.
    Pretty,
    /// Pretty header followed by the step-by-step explanation.
    Verbose,
    /// A single JSON object.
    Json,
    /// Computor internal debug form.
    /// NB: this form is not stable, and no assumptions should be made about it.
    Debug,
}

impl FromStr for EmitFormat {
    type Err = String;

    fn from_str(form: &str) -> Result<Self, Self::Err> {
        match form {
            "pretty" => Ok(Self::Pretty),
            "verbose" => Ok(Self::Verbose),
            "json" => Ok(Self::Json),
            "debug" => Ok(Self::Debug),
            other => Err(format!("{} is not an emit format", other)),
        }
    }
}

/// Terminal escape sequences wrapped around highlighted emit.
/// The default palette is empty, so nothing is highlighted.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Palette {
    pub reset: &'static str,
    pub red: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub cyan: &'static str,
}

impl Palette {
    /// ANSI SGR colors.
    pub const fn ansi() -> Self {
        Self {
            reset: "\x1b[0m",
            red: "\x1b[31m",
            green: "\x1b[32m",
            yellow: "\x1b[33m",
            cyan: "\x1b[36m",
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if color.is_empty() {
            return text.to_owned();
        }
        format!("{}{}{}", color, text, self.reset)
    }
}

/// Configuration options for emit.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct EmitConfig {
    /// Render rational solutions as irreducible fractions.
    pub fractions: bool,
    pub palette: Palette,
}

impl EmitConfig {
    pub fn with_palette(self, palette: Palette) -> Self {
        Self { palette, ..self }
    }
}

/// Builds a config from command line flags like `frac`. Unknown flags are ignored.
impl From<Vec<String>> for EmitConfig {
    fn from(opts: Vec<String>) -> Self {
        let mut config = Self::default();
        for opt in opts {
            if opt == "frac" {
                config.fractions = true;
            }
        }
        config
    }
}

/// Implements the emission of a type in an [EmitFormat][EmitFormat].
pub trait Emit
where
    Self: fmt::Display + fmt::Debug,
{
    /// Emit `self` with the given [EmitFormat][EmitFormat].
    fn emit(&self, form: EmitFormat, config: EmitConfig) -> String {
        match form {
            EmitFormat::Pretty => self.emit_pretty(config),
            EmitFormat::Verbose => self.emit_verbose(config),
            EmitFormat::Json => self.emit_json(config),
            EmitFormat::Debug => self.emit_debug(),
        }
    }

    /// Emit `self` with the [pretty emit format][EmitFormat::Pretty]
    fn emit_pretty(&self, config: EmitConfig) -> String;

    /// Emit `self` with the [verbose emit format][EmitFormat::Verbose]
    fn emit_verbose(&self, config: EmitConfig) -> String {
        self.emit_pretty(config)
    }

    /// Emit `self` with the [JSON emit format][EmitFormat::Json]
    fn emit_json(&self, config: EmitConfig) -> String;

    /// Emit `self` with the [debug emit format][EmitFormat::Debug]
    fn emit_debug(&self) -> String {
        format!("{:#?}", self)
    }
}

/// Implements `core::fmt::Display` for a type implementing `Emit`, using the pretty form without
/// highlighting.
macro_rules! fmt_emit_impl {
    ($S:path) => {
        impl core::fmt::Display for $S {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.emit_pretty(EmitConfig::default()))
            }
        }
    };
}

fn to_json_string(value: &Value) -> String {
    // Serializing a `Value` only fails for non-string map keys, which `Value` cannot hold.
    serde_json::to_string_pretty(value).unwrap_or_default()
}

fn header(reduced_form: &str, degree: u32, palette: &Palette) -> Vec<String> {
    vec![
        format!("Reduced form: {}", palette.paint(palette.green, reduced_form)),
        format!(
            "Polynomial degree: {}",
            palette.paint(palette.yellow, &degree.to_string())
        ),
    ]
}

fmt_emit_impl!(SolveResult);
impl Emit for SolveResult {
    fn emit_pretty(&self, config: EmitConfig) -> String {
        let palette = &config.palette;
        let mut lines = header(self.reduced_form(), self.degree(), palette);

        let summary = self.solution_type().summary();
        lines.push(match self.solution_type() {
            SolutionType::Unsupported | SolutionType::NoSolution => {
                palette.paint(palette.red, summary)
            }
            _ => summary.to_owned(),
        });
        for solution in self.solutions() {
            lines.push(palette.paint(palette.cyan, &solution.render(config.fractions)));
        }

        lines.join("\n")
    }

    fn emit_verbose(&self, config: EmitConfig) -> String {
        let palette = &config.palette;
        let mut lines = header(self.reduced_form(), self.degree(), palette);
        lines.extend(self.explanation().iter().cloned());

        if !self.solutions().is_empty() {
            let solutions = self
                .solutions()
                .iter()
                .map(|solution| solution.render(config.fractions))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!(
                "Solutions: {}",
                palette.paint(palette.cyan, &solutions)
            ));
        }

        lines.join("\n")
    }

    fn emit_json(&self, config: EmitConfig) -> String {
        if !config.fractions {
            return serde_json::to_string_pretty(self)
                .unwrap_or_else(|err| to_json_string(&json!({ "error": err.to_string() })));
        }

        // Objects keep insertion order, so the patched solutions stay in place.
        let mut value = match serde_json::to_value(self) {
            Ok(value) => value,
            Err(err) => json!({ "error": err.to_string() }),
        };
        value["solutions"] = self
            .solutions()
            .iter()
            .map(|solution| Value::String(solution.render(true)))
            .collect();
        to_json_string(&value)
    }
}

/// Reduced polynomials are emitted by `--parse-only`.
impl Emit for Polynomial {
    fn emit_pretty(&self, config: EmitConfig) -> String {
        header(&self.to_canonical_string(), self.degree(), &config.palette).join("\n")
    }

    fn emit_verbose(&self, config: EmitConfig) -> String {
        let mut lines = header(&self.to_canonical_string(), self.degree(), &config.palette);
        for (power, coefficient) in self.coefficients() {
            lines.push(format!(
                "Coefficient of X^{}: {}",
                power,
                crate::utils::display_float(*coefficient)
            ));
        }
        lines.join("\n")
    }

    fn emit_json(&self, _config: EmitConfig) -> String {
        let coefficients: serde_json::Map<String, Value> = self
            .coefficients()
            .iter()
            .map(|(power, coefficient)| (power.to_string(), json!(coefficient)))
            .collect();
        to_json_string(&json!({
            "reducedForm": self.to_canonical_string(),
            "degree": self.degree(),
            "coefficients": coefficients,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{poly, solve};

    fn frac() -> EmitConfig {
        EmitConfig::from(vec!["frac".to_owned()])
    }

    macro_rules! emit_tests {
        ($($name:ident: $poly:expr, $form:expr, $config:expr => $expected:expr)*) => {
        $(
            #[test]
            fn $name() {
                let result = solve(&$poly);
                assert_eq!(result.emit($form, $config), $expected);
            }
        )*
        }
    }

    emit_tests! {
        pretty_two_roots: poly![0 => -6., 1 => 1., 2 => 1.], EmitFormat::Pretty, EmitConfig::default()
            => "Reduced form: - 6 * X^0 + 1 * X^1 + 1 * X^2 = 0\n\
                Polynomial degree: 2\n\
                Discriminant is strictly positive, the two solutions are:\n\
                2\n\
                -3"
        pretty_fractions: poly![0 => -1., 1 => 3., 2 => 4.], EmitFormat::Pretty, frac()
            => "Reduced form: - 1 * X^0 + 3 * X^1 + 4 * X^2 = 0\n\
                Polynomial degree: 2\n\
                Discriminant is strictly positive, the two solutions are:\n\
                1/4\n\
                -1"
        pretty_complex: poly![0 => 1., 1 => 2., 2 => 5.], EmitFormat::Pretty, EmitConfig::default()
            => "Reduced form: 1 * X^0 + 2 * X^1 + 5 * X^2 = 0\n\
                Polynomial degree: 2\n\
                Discriminant is strictly negative, the two complex solutions are:\n\
                -0.200000 + i * 0.400000\n\
                -0.200000 - i * 0.400000"
        pretty_unsupported: poly![3 => 1.], EmitFormat::Pretty, EmitConfig::default()
            => "Reduced form: 1 * X^3 = 0\n\
                Polynomial degree: 3\n\
                The polynomial degree is strictly greater than 2, I can't solve."
        pretty_no_solution: poly![0 => 5.], EmitFormat::Pretty, EmitConfig::default()
            => "Reduced form: 5 * X^0 = 0\n\
                Polynomial degree: 0\n\
                No solution."
        verbose_linear: poly![0 => 1., 1 => 4.], EmitFormat::Verbose, frac()
            => "Reduced form: 1 * X^0 + 4 * X^1 = 0\n\
                Polynomial degree: 1\n\
                This is a linear equation (degree 1).\n\
                The solution is calculated as -c / b = -(1) / (4) = -0.250000\n\
                Solutions: -1/4"
        verbose_infinite: poly![], EmitFormat::Verbose, EmitConfig::default()
            => "Reduced form: 0 = 0\n\
                Polynomial degree: 0\n\
                The equation simplifies to 0 = 0. Any real number is a solution."
    }

    #[test]
    fn palette_highlights() {
        let config = EmitConfig::default().with_palette(Palette::ansi());
        let emit = solve(&poly![0 => 5.]).emit_pretty(config);
        assert_eq!(
            emit,
            "Reduced form: \x1b[32m5 * X^0 = 0\x1b[0m\n\
             Polynomial degree: \x1b[33m0\x1b[0m\n\
             \x1b[31mNo solution.\x1b[0m"
        );
    }

    #[test]
    fn display_is_uncolored_pretty() {
        let result = solve(&poly![0 => -4., 2 => 1.]);
        assert_eq!(result.to_string(), result.emit_pretty(EmitConfig::default()));
    }

    #[test]
    fn json_fields() {
        let emit = solve(&poly![0 => -6., 1 => 1., 2 => 1.]).emit_json(EmitConfig::default());
        let value: Value = serde_json::from_str(&emit).unwrap();
        assert_eq!(value["reducedForm"], "- 6 * X^0 + 1 * X^1 + 1 * X^2 = 0");
        assert_eq!(value["degree"], 2);
        assert_eq!(value["coefficients"], json!({ "a": 1.0, "b": 1.0, "c": -6.0 }));
        assert_eq!(value["discriminant"], 25.0);
        assert_eq!(value["solutionType"], "PositiveDiscriminant");
        assert_eq!(value["solutions"][0], 2.0);
        assert_eq!(value["explanation"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn json_keys_follow_record_order() {
        let keys = [
            "\"reducedForm\"",
            "\"degree\"",
            "\"coefficients\"",
            "\"discriminant\"",
            "\"solutionType\"",
            "\"solutions\"",
            "\"explanation\"",
        ];
        let result = solve(&poly![0 => -1., 1 => 3., 2 => 4.]);
        for config in [EmitConfig::default(), frac()].iter() {
            let emit = result.emit_json(*config);
            let positions: Vec<_> = keys.iter().map(|key| emit.find(key)).collect();
            assert!(positions.iter().all(Option::is_some), "{}", emit);
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", emit);
        }
    }

    #[test]
    fn json_complex_and_fraction_solutions() {
        let complex = solve(&poly![0 => 1., 1 => 2., 2 => 5.]).emit_json(EmitConfig::default());
        let value: Value = serde_json::from_str(&complex).unwrap();
        assert_eq!(value["solutions"][1], "-0.200000 - i * 0.400000");

        let fractions = solve(&poly![0 => -1., 1 => 3., 2 => 4.]).emit_json(frac());
        let value: Value = serde_json::from_str(&fractions).unwrap();
        assert_eq!(value["solutions"], json!(["1/4", "-1"]));
    }

    #[test]
    fn json_without_discriminant() {
        let emit = solve(&poly![0 => 5.]).emit_json(EmitConfig::default());
        let value: Value = serde_json::from_str(&emit).unwrap();
        assert_eq!(value["discriminant"], Value::Null);
        assert_eq!(value["solutions"], json!([]));
    }

    #[test]
    fn polynomial_emit() {
        let poly = poly![0 => 4., 1 => 4., 2 => -9.3];
        assert_eq!(
            poly.emit(EmitFormat::Pretty, EmitConfig::default()),
            "Reduced form: 4 * X^0 + 4 * X^1 - 9.3 * X^2 = 0\nPolynomial degree: 2"
        );

        let value: Value =
            serde_json::from_str(&poly.emit(EmitFormat::Json, EmitConfig::default())).unwrap();
        assert_eq!(value["coefficients"]["2"], -9.3);
        assert_eq!(value["degree"], 2);
    }

    #[test]
    fn emit_format_from_str() {
        assert_eq!("verbose".parse(), Ok(EmitFormat::Verbose));
        assert_eq!("json".parse(), Ok(EmitFormat::Json));
        assert!("latex".parse::<EmitFormat>().is_err());
    }
}
