//! Solves reduced equations of degree 2 or lower.
//!
//! [solve] classifies a [Polynomial] by its degree (and, for quadratics, by the sign of its
//! discriminant) and returns a [SolveResult] holding the roots and a step-by-step explanation.
//! Presenting the result is left to [Emit](crate::Emit).

use crate::math::{abs, is_perfect_square, sqrt, to_fraction, EPSILON};
use crate::utils::{display_float, fixed_float};
use crate::Polynomial;

use serde::ser::{Serialize, Serializer};
use tracing::debug;

/// How an equation was classified by the solver.
#[derive(serde::Serialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum SolutionType {
    /// The degree is greater than 2. Not an error, but nothing is solved.
    Unsupported,
    /// Quadratic with two real roots.
    PositiveDiscriminant,
    /// Quadratic with one (double) real root.
    ZeroDiscriminant,
    /// Quadratic with a pair of complex conjugate roots.
    NegativeDiscriminant,
    /// Degree 1, one root.
    Linear,
    /// A nonzero constant equals zero.
    NoSolution,
    /// `0 = 0`.
    InfiniteSolutions,
}

impl SolutionType {
    /// The one-line classification printed before the roots.
    pub fn summary(self) -> &'static str {
        use SolutionType::*;
        match self {
            Unsupported => "The polynomial degree is strictly greater than 2, I can't solve.",
            PositiveDiscriminant => "Discriminant is strictly positive, the two solutions are:",
            ZeroDiscriminant => "Discriminant is zero, the solution is:",
            NegativeDiscriminant => {
                "Discriminant is strictly negative, the two complex solutions are:"
            }
            Linear => "The solution is:",
            NoSolution => "No solution.",
            InfiniteSolutions => "Any real number is a solution.",
        }
    }
}

/// A real number produced by the solver, and whether it is known to be rational.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Root {
    pub value: f64,
    /// Rational roots may be rendered as fractions; irrational ones are always decimals.
    pub rational: bool,
}

impl Root {
    fn new(value: f64, rational: bool) -> Self {
        Self { value, rational }
    }

    /// Renders the root as a fraction when `fractions` is set and the root is rational, and as a
    /// decimal otherwise.
    pub fn render(&self, fractions: bool) -> String {
        if fractions && self.rational {
            if let Ok(frac) = to_fraction(self.value) {
                return frac.to_string();
            }
        }
        display_float(self.value)
    }
}

impl Serialize for Root {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

/// One solution of an equation.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Solution {
    Real(Root),
    /// `re + i * im`. The imaginary part carries the sign of the conjugate.
    Complex { re: Root, im: Root },
}

impl Solution {
    pub fn render(&self, fractions: bool) -> String {
        match self {
            Solution::Real(root) => root.render(fractions),
            Solution::Complex { re, im } => {
                let sign = if im.value < 0. { "-" } else { "+" };
                let im = Root::new(abs(im.value), im.rational);
                if fractions {
                    format!("{} {} i * {}", re.render(true), sign, im.render(true))
                } else {
                    format!("{} {} i * {}", fixed_float(re.value), sign, fixed_float(im.value))
                }
            }
        }
    }
}

/// Real solutions serialize as numbers, complex ones as preformatted strings.
impl Serialize for Solution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Solution::Real(root) => root.serialize(serializer),
            Solution::Complex { .. } => serializer.serialize_str(&self.render(false)),
        }
    }
}

/// The coefficients of `a X^2 + b X + c`.
#[derive(serde::Serialize, Copy, Clone, PartialEq, Debug)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Everything known about a solved equation.
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SolveResult {
    reduced_form: String,
    degree: u32,
    coefficients: Coefficients,
    discriminant: Option<f64>,
    solution_type: SolutionType,
    solutions: Vec<Solution>,
    explanation: Vec<String>,
}

impl SolveResult {
    /// The canonical string of the solved polynomial.
    pub fn reduced_form(&self) -> &str {
        &self.reduced_form
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    /// `b² - 4ac`, present only for quadratics.
    pub fn discriminant(&self) -> Option<f64> {
        self.discriminant
    }

    pub fn solution_type(&self) -> SolutionType {
        self.solution_type
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Step-by-step explanation of how the solutions were found.
    pub fn explanation(&self) -> &[String] {
        &self.explanation
    }
}

/// What the degree-specific analyses produce.
struct Analysis {
    solution_type: SolutionType,
    discriminant: Option<f64>,
    solutions: Vec<Solution>,
    explanation: Vec<String>,
}

/// Solves a reduced equation `polynomial = 0`.
pub fn solve(polynomial: &Polynomial) -> SolveResult {
    let coefficients = Coefficients {
        a: polynomial.coefficient(2),
        b: polynomial.coefficient(1),
        c: polynomial.coefficient(0),
    };

    let analysis = match polynomial.degree() {
        2 => quadratic(coefficients),
        1 => linear(coefficients),
        0 => constant(coefficients),
        _ => Analysis {
            solution_type: SolutionType::Unsupported,
            discriminant: None,
            solutions: Vec::new(),
            explanation: vec![SolutionType::Unsupported.summary().to_owned()],
        },
    };

    debug!(
        degree = polynomial.degree(),
        solution_type = ?analysis.solution_type,
        discriminant = ?analysis.discriminant,
        "solved equation"
    );

    SolveResult {
        reduced_form: polynomial.to_canonical_string(),
        degree: polynomial.degree(),
        coefficients,
        discriminant: analysis.discriminant,
        solution_type: analysis.solution_type,
        solutions: analysis.solutions,
        explanation: analysis.explanation,
    }
}

fn quadratic(Coefficients { a, b, c }: Coefficients) -> Analysis {
    let discriminant = b * b - 4. * a * c;
    let (da, db) = (display_float(a), display_float(b));
    let mut explanation = vec![
        "This is a quadratic equation (degree 2). We use the discriminant Δ = b² - 4ac."
            .to_owned(),
        format!(
            "Δ = ({})² - 4 * ({}) * ({}) = {}",
            db,
            da,
            display_float(c),
            display_float(discriminant)
        ),
    ];

    let (solution_type, solutions) = if discriminant > EPSILON {
        let root_d = sqrt(discriminant);
        let rational = is_perfect_square(discriminant);
        let x1 = (-b + root_d) / (2. * a);
        let x2 = (-b - root_d) / (2. * a);
        let dd = display_float(discriminant);
        explanation.push(SolutionType::PositiveDiscriminant.summary().to_owned());
        explanation.push(format!(
            "x₁ = (-b + √Δ) / 2a = (-({}) + √{}) / (2 * ({})) = {}",
            db,
            dd,
            da,
            fixed_float(x1)
        ));
        explanation.push(format!(
            "x₂ = (-b - √Δ) / 2a = (-({}) - √{}) / (2 * ({})) = {}",
            db,
            dd,
            da,
            fixed_float(x2)
        ));
        (
            SolutionType::PositiveDiscriminant,
            vec![
                Solution::Real(Root::new(x1, rational)),
                Solution::Real(Root::new(x2, rational)),
            ],
        )
    } else if discriminant >= -EPSILON {
        let x = -b / (2. * a);
        explanation.push("Discriminant is zero, the single solution is:".to_owned());
        explanation.push(format!(
            "x = -b / 2a = -({}) / (2 * ({})) = {}",
            db,
            da,
            fixed_float(x)
        ));
        (
            SolutionType::ZeroDiscriminant,
            vec![Solution::Real(Root::new(x, true))],
        )
    } else {
        let re = Root::new(-b / (2. * a), true);
        let im = abs(sqrt(-discriminant) / (2. * a));
        let im_rational = is_perfect_square(-discriminant);
        let x1 = Solution::Complex {
            re,
            im: Root::new(im, im_rational),
        };
        let x2 = Solution::Complex {
            re,
            im: Root::new(-im, im_rational),
        };
        let dd = display_float(-discriminant);
        explanation.push(SolutionType::NegativeDiscriminant.summary().to_owned());
        explanation.push(format!(
            "x₁ = (-b + i√-Δ) / 2a = (-({}) + i√{}) / (2 * ({})) = {}",
            db,
            dd,
            da,
            x1.render(false)
        ));
        explanation.push(format!(
            "x₂ = (-b - i√-Δ) / 2a = (-({}) - i√{}) / (2 * ({})) = {}",
            db,
            dd,
            da,
            x2.render(false)
        ));
        (SolutionType::NegativeDiscriminant, vec![x1, x2])
    };

    Analysis {
        solution_type,
        discriminant: Some(discriminant),
        solutions,
        explanation,
    }
}

fn linear(Coefficients { b, c, .. }: Coefficients) -> Analysis {
    let x = -c / b;
    Analysis {
        solution_type: SolutionType::Linear,
        discriminant: None,
        solutions: vec![Solution::Real(Root::new(x, true))],
        explanation: vec![
            "This is a linear equation (degree 1).".to_owned(),
            format!(
                "The solution is calculated as -c / b = -({}) / ({}) = {}",
                display_float(c),
                display_float(b),
                fixed_float(x)
            ),
        ],
    }
}

fn constant(Coefficients { c, .. }: Coefficients) -> Analysis {
    let (solution_type, explanation) = if abs(c) > EPSILON {
        (
            SolutionType::NoSolution,
            format!(
                "The equation simplifies to {} = 0, which is impossible. No solution.",
                display_float(c)
            ),
        )
    } else {
        (
            SolutionType::InfiniteSolutions,
            "The equation simplifies to 0 = 0. Any real number is a solution.".to_owned(),
        )
    };
    Analysis {
        solution_type,
        discriminant: None,
        solutions: Vec::new(),
        explanation: vec![explanation],
    }
}
