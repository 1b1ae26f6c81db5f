//! Validation utilities for matrix construction and input tokens
//!
//! Pure functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{checked_index, validate_dimensions};
pub use parsing::{parse_i32, parse_operator};
