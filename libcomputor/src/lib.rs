//! libcomputor reduces and solves polynomial equations of degree 2 or lower.
//!
//! An equation flows through three stages:
//!
//! - [parse_equation] scans the text into [tokens](scanner::types::Token), reads each side into
//!   signed terms, and moves everything to the left side, producing a reduced [Polynomial].
//! - [solve] classifies the polynomial by degree and discriminant, and computes its roots along
//!   with a step-by-step explanation.
//! - [Emit] renders results as pretty text, verbose explanations, JSON, or a debug dump.
//!
//! The numeric kernels (square roots, gcds, decimal to fraction conversion) live in [math].
//!
//! ```
//! use libcomputor::{parse_equation, solve, Emit, EmitConfig, EmitFormat};
//!
//! let poly = parse_equation("X^2 + X = 6").unwrap();
//! let result = solve(&poly);
//! assert_eq!(
//!     result.emit(EmitFormat::Pretty, EmitConfig::default()),
//!     "Reduced form: - 6 * X^0 + 1 * X^1 + 1 * X^2 = 0\n\
//!      Polynomial degree: 2\n\
//!      Discriminant is strictly positive, the two solutions are:\n\
//!      2\n\
//!      -3"
//! );
//! ```

pub mod common;
pub mod diagnostics;

pub mod scanner;
pub use scanner::scan;

mod parser;
pub use parser::{parse_equation, ParseError, ParseErrors};

mod poly;
pub use poly::{CoefficientMap, Polynomial};

mod solver;
pub use solver::{solve, Coefficients, Root, Solution, SolutionType, SolveResult};

mod emit;
pub use emit::{Emit, EmitConfig, EmitFormat, Palette};

pub mod math;

mod utils;
