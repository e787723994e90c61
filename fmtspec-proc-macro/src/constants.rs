//! Compile-time limits and capacity hints for the fmtspec macros.
//!
//! This module centralizes every bound the macros enforce so that a runaway
//! template or generator invocation fails with a clear message instead of
//! exhausting the compiler.

// ============================================================================
// Template Limits
// ============================================================================

/// Maximum length of a `spec!` template in bytes.
pub const MAX_TEMPLATE_LEN: usize = 10_000;

/// Maximum number of tokens (text runs plus placeholders) in one template.
///
/// Each token becomes one node of the generated `cat` tree.
pub const MAX_TOKENS: usize = 256;

// ============================================================================
// Arity Family Limits
// ============================================================================

/// Largest arity `arity_family!` will generate.
pub const MAX_ARITY: usize = 16;

// ============================================================================
// Memory Pre-Allocation Hints
// ============================================================================

/// Initial capacity hint for the token vector.
///
/// Most templates have a handful of pieces.
pub const TOKENS_INITIAL_CAPACITY: usize = 8;
