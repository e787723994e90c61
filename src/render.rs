//! Canonical text for the primitive placeholder types.

use std::fmt::Display;

/// `"True"` or `"False"`.
#[inline]
pub fn bool_text(value: bool) -> String {
    let text = if value { "True" } else { "False" };
    text.to_string()
}

#[inline]
pub fn int_text(value: i64) -> String {
    value.to_string()
}

/// Shortest text that parses back to the same `f64` (Rust's `Display`).
#[inline]
pub fn float_text(value: f64) -> String {
    value.to_string()
}

#[inline]
pub fn string_text(value: String) -> String {
    value
}

#[inline]
pub fn display_text<T: Display>(value: T) -> String {
    value.to_string()
}
