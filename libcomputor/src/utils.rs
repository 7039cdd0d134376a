mod iter;
pub use iter::*;

mod string;
pub use string::*;
