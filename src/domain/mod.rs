//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the paired observation set (`Sample`)
//! - fitting configuration (`FitMethod`, `FitOptions`)
//! - fit and extrema outputs (`RkFit`, `FitQuality`, `Extremum`, etc.)

pub mod types;

pub use types::*;
