//! Extrema of fitted curves.

pub mod finder;

pub use finder::*;
