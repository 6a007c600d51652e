//! Redlich-Kister and power-series model implementations.
//!
//! Models are implemented as small, pure functions so that fitting and root
//! finding code can stay generic.

pub mod power;
pub mod rk;

pub use power::*;
pub use rk::*;
