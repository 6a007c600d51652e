//! Curve fitting orchestration.
//!
//! Responsibilities:
//!
//! - fit R-K coefficients for a given order (closed form or simplex)
//! - select an order using BIC + guardrails (parallel over orders)
//! - fit many independent samples (parallel)

pub mod fitter;
pub mod selection;
pub mod simplex;

pub use fitter::*;
pub use selection::*;
pub use simplex::*;
