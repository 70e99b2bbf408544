//! Shared utilities for numconv crates.
//!
//! This crate provides the plain-decimal grammar used by both the format
//! classifier and the numeric cast, together with a Polars `AnyValue` helper.

pub mod any_value;
pub mod decimal;

// Re-export commonly used items at crate root
pub use any_value::any_as_text;
pub use decimal::{DecimalSeparator, normalize_decimal, parse_decimal, parse_plain_decimal};
