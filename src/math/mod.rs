//! Mathematical utilities: binomial expansions, least squares and
//! power-series polynomials.

pub mod binomial;
pub mod ols;
pub mod poly;

pub use binomial::*;
pub use ols::*;
pub use poly::*;
