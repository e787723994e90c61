//! Procedural macros for the fmtspec formatting combinators.
//!
//! This crate provides two macros:
//! - `spec!`: expands a template into a tree of `fmtspec` combinators
//! - `arity_family!`: generates the fixed-arity discharge helpers used by
//!   `fmtspec` itself
//!
//! # Architecture
//!
//! `spec!` works in two phases, both at compile time:
//! 1. **Tokenization**: the template is split into text runs and
//!    placeholders (`nom` parsers in `tokenization`)
//! 2. **Code Generation**: the tokens become a left-nested
//!    `cat(cat(literal(..), int()), ..)` expression
//!
//! The implementation is organized into focused modules:
//! - `constants`: template and arity limits
//! - `types`: core type definitions
//! - `validation`: placeholder names and arity bounds
//! - `parsing`: macro argument parsing
//! - `tokenization`: template tokenization
//! - `codegen`: code generation
//!
//! # Run Time
//!
//! Nothing of the template survives into the compiled program except its
//! literal text: the expansion is ordinary combinator calls, type-checked like
//! hand-written code. Argument count and types are fixed by the placeholders.
//!
//! # Limits
//!
//! - **Templates**: Maximum 10,000 bytes
//! - **Tokens**: Maximum 256 tokens per template
//! - **Arity families**: Maximum arity 16

#![forbid(unsafe_code)]

// ============================================================================
// Module Organization
// ============================================================================

mod codegen;
mod constants;
mod parsing;
mod tokenization;
mod types;
mod validation;

use proc_macro::TokenStream;
use syn::parse_macro_input;

use codegen::{generate_family, generate_spec};
use parsing::{ArityArgs, SpecArgs};
use validation::check_arity;

// ============================================================================
// Public Macros
// ============================================================================

/// Builds a `fmtspec::Spec` from a template, at compile time.
///
/// # Syntax
///
/// ```ignore
/// spec!("template", renderers...)
/// ```
///
/// - `template`: string literal with text and placeholders
/// - `renderers...`: one renderer expression per `{}` placeholder, in order
///
/// # Placeholders
///
/// | Placeholder | Expands to              | Argument type    |
/// |-------------|-------------------------|------------------|
/// | `{bool}`    | `fmtspec::boolean()`    | `bool`           |
/// | `{int}`     | `fmtspec::int()`        | `i64`            |
/// | `{float}`   | `fmtspec::float()`      | `f64`            |
/// | `{string}`  | `fmtspec::string()`     | `String`         |
/// | `{display}` | `fmtspec::display()`    | any `Display`    |
/// | `{}`        | `fmtspec::custom(r)`    | `r`'s input type |
///
/// `{{` and `}}` produce literal braces.
///
/// # Examples
///
/// ```ignore
/// use fmtspec::{spec, sprintf3};
///
/// let movie = spec!("Movie: {string}; Rating: {int}; Price: ${float}");
/// assert_eq!(
///     sprintf3(&movie, "Inside Out".to_string(), 5, 24.99),
///     "Movie: Inside Out; Rating: 5; Price: $24.99"
/// );
///
/// let list = spec!("[{}]", |xs: Vec<i64>| format!("{xs:?}"));
/// ```
#[proc_macro]
pub fn spec(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as SpecArgs);
    let renderers: Vec<_> = args.renderers.iter().collect();

    generate_spec(&args.template, &renderers)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Generates one family of fixed-arity helpers inside `fmtspec`.
///
/// ```ignore
/// arity_family!(sprintf, 9); // sprintf1 ..= sprintf9
/// arity_family!(uncurry, 9); // uncurry2 ..= uncurry9
/// arity_family!(tuple, 9);   // Uncurry impls for () ..= 9-tuples
/// ```
///
/// The expansion names items through `crate::`, so it only works inside the
/// crate that defines `Spec`, `Curried`, `sprintf` and `Uncurry`.
#[doc(hidden)]
#[proc_macro]
pub fn arity_family(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as ArityArgs);

    if let Err(message) = check_arity(args.family, args.max) {
        return syn::Error::new(args.max_lit.span(), message)
            .to_compile_error()
            .into();
    }

    generate_family(args.family, args.max).into()
}
