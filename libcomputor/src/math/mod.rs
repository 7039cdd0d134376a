//! The numeric kernel: deterministic primitives used by the parser, [Polynomial], and solver.
//!
//! Every function here is implemented from first principles rather than on top of a platform math
//! library, so results are reproducible bit for bit wherever computor runs.
//!
//! [Polynomial]: crate::Polynomial

mod primitives;
pub use primitives::*;

mod gcd;
pub use gcd::*;

mod fraction;
pub use fraction::*;

#[cfg(test)]
mod proptests;
