//! Type-safe string formatting from composable combinators.
//!
//! A format is a [`Spec`] value built from small typed pieces:
//! - [`literal`]: fixed text
//! - [`boolean`], [`int`], [`float`], [`string`], [`display`]: typed placeholders
//! - [`custom`] / [`placeholder`]: placeholders with a caller-supplied renderer
//!
//! Pieces are joined with [`cat`] (or [`Spec::then`], or `+`) and discharged
//! with [`sprintf`], the fixed-arity `sprintf1` ..= `sprintf9`, or
//! [`Spec::format`] with a tuple.
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//! - `spec`: the [`Spec`] value and its continuation types
//! - `render`: canonical text of the primitive placeholder types
//! - `combinators`: atomic constructors and concatenation
//! - `discharge`: `sprintf`, the generated arity families and [`Uncurry`]
//!
//! The [`spec!`] macro builds the same combinator trees from a template that
//! is tokenized entirely at compile time.
//!
//! # Type Safety
//!
//! The second type parameter of a spec is the chain of argument layers still
//! required. Supplying too few arguments leaves a callable, never a premature
//! string; supplying too many or the wrong types does not compile. There is
//! no runtime arity check and no runtime error type: once a discharge
//! type-checks it can only fail if a caller-supplied renderer panics.
//!
//! # Concurrency
//!
//! Specs hold no mutable state and are `Send + Sync`. Build once, share
//! freely, discharge from any thread.

#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

// ============================================================================
// Module Organization
// ============================================================================

mod combinators;
mod discharge;
mod render;
mod spec;

// ============================================================================
// Re-exports for Public API
// ============================================================================

pub use combinators::{boolean, cat, custom, display, float, int, literal, placeholder, string};
pub use discharge::*;
pub use spec::{Cont, Curried, Spec};

pub use fmtspec_proc_macro::spec;
