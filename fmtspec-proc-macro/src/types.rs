//! Core types shared by the fmtspec macros.

/// A built-in placeholder of a `spec!` template.
///
/// Each kind expands to the constructor of the same name in `fmtspec`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlaceholderKind {
    /// `{bool}` -> `fmtspec::boolean()`
    Bool,
    /// `{int}` -> `fmtspec::int()`
    Int,
    /// `{float}` -> `fmtspec::float()`
    Float,
    /// `{string}` -> `fmtspec::string()`
    String,
    /// `{display}` -> `fmtspec::display()`
    Display,
}

/// A placeholder in a template.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Placeholder {
    /// A named built-in placeholder such as `{int}`.
    Builtin(PlaceholderKind),

    /// `{}`: consumes the next renderer expression passed to the macro.
    Renderer,
}

/// Token produced by compile-time tokenization of a template.
///
/// Uses `Box<str>` for text since runs never change after tokenizing.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FormatToken {
    /// Literal text, with `{{` / `}}` already unescaped.
    Text(Box<str>),

    /// A placeholder consuming one argument at discharge time.
    Placeholder(Placeholder),
}

/// Which family of functions `arity_family!` generates.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Family {
    /// `sprintf1 ..= sprintfN`
    Sprintf,
    /// `uncurry2 ..= uncurryN`
    Uncurry,
    /// `Uncurry` impls for tuples of arity `0 ..= N`
    Tuple,
}

impl Family {
    /// Smallest arity the family starts at.
    pub fn min_arity(self) -> usize {
        match self {
            Self::Sprintf => 1,
            Self::Uncurry => 2,
            Self::Tuple => 0,
        }
    }
}
