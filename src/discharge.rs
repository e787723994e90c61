//! Discharging a complete spec into a string.
//!
//! [`sprintf`] hands back the remaining argument chain of a spec whose result
//! type is `String`. The fixed-arity helpers `sprintf1` ..= `sprintf9` supply
//! all arguments at once, `uncurry2` ..= `uncurry9` do the same for any chain
//! of single-argument functions, and [`Uncurry`] accepts the arguments as one
//! tuple.
//!
//! The arity families are generated by `arity_family!`; they are plain
//! functions, so arity and type mistakes are reported by the compiler:
//!
//! ```compile_fail
//! use fmtspec::{cat, int, literal, sprintf2};
//!
//! let spec = cat(literal("only one: "), int());
//! sprintf2(&spec, 1, 2);
//! ```
//!
//! ```compile_fail
//! use fmtspec::{int, sprintf1};
//!
//! sprintf1(&int(), "not an int".to_string());
//! ```

use crate::spec::Spec;

/// Discharges a complete spec.
///
/// Returns the string directly when the spec has no placeholders, otherwise
/// a callable taking the first argument and returning the rest of the chain.
///
/// ```
/// use fmtspec::{boolean, cat, int, literal, sprintf, string};
///
/// let spec = cat(
///     cat(
///         cat(cat(cat(literal("Name: "), string()), literal("; Age: ")), int()),
///         literal("; Acct. Active: "),
///     ),
///     boolean(),
/// );
/// let text = sprintf(&spec)("Juan".to_string())(45)(true);
/// assert_eq!(text, "Name: Juan; Age: 45; Acct. Active: True");
/// ```
pub fn sprintf<F>(spec: &Spec<String, F>) -> F {
    spec.run_with(|text| text)
}

/// Applies a chain of single-argument functions to a tuple of arguments.
///
/// Implemented for every chain of arity 0 through 9; arity 0 returns the
/// value itself.
pub trait Uncurry<Args> {
    type Output;

    fn uncurry(self, args: Args) -> Self::Output;
}

impl<F> Spec<String, F> {
    /// Method form of [`sprintf`].
    pub fn sprintf(&self) -> F {
        sprintf(self)
    }

    /// Discharges the spec with all of its arguments as one tuple.
    ///
    /// ```
    /// use fmtspec::{Spec, cat, float, literal, string};
    ///
    /// let spec = cat(cat(string(), literal(" costs $")), float());
    /// assert_eq!(spec.format(("Tea".to_string(), 2.5)), "Tea costs $2.5");
    ///
    /// let banner: Spec<String, String> = literal("static");
    /// assert_eq!(banner.format(()), "static");
    /// ```
    pub fn format<Args>(&self, args: Args) -> <F as Uncurry<Args>>::Output
    where
        F: Uncurry<Args>,
    {
        self.sprintf().uncurry(args)
    }
}

fmtspec_proc_macro::arity_family!(sprintf, 9);
fmtspec_proc_macro::arity_family!(uncurry, 9);
fmtspec_proc_macro::arity_family!(tuple, 9);
