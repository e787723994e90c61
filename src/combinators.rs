//! Atomic specifications and concatenation.
//!
//! Every constructor here is generic over the result type `A` so that the
//! piece can sit anywhere in a concatenation chain; the final
//! [`sprintf`](crate::sprintf) fixes the outermost result to `String`.

use std::fmt::Display;
use std::ops::Add;
use std::sync::Arc;

use crate::render;
use crate::spec::{Cont, Curried, Spec};

// ============================================================================
// Atomic Constructors
// ============================================================================

/// Fixed text, consuming no argument.
///
/// ```
/// use fmtspec::{literal, sprintf};
///
/// assert_eq!(sprintf(&literal("Hello, Gleam!")), "Hello, Gleam!");
/// ```
pub fn literal<A: 'static>(text: impl Into<String>) -> Spec<A, A> {
    let text: String = text.into();
    let text: Arc<str> = Arc::from(text);
    Spec::new(move |k: Cont<A>| k(text.to_string()))
}

/// A placeholder consuming one `T`, rendered with `render`.
///
/// A panic raised by `render` propagates unchanged out of the discharge call.
pub fn placeholder<T, A>(
    render: impl Fn(T) -> String + Send + Sync + 'static,
) -> Spec<A, Curried<T, A>>
where
    T: 'static,
    A: 'static,
{
    let render: Arc<dyn Fn(T) -> String + Send + Sync> = Arc::new(render);
    Spec::new(move |k: Cont<A>| {
        let render = Arc::clone(&render);
        Box::new(move |value: T| k(render(value))) as Curried<T, A>
    })
}

/// A placeholder for user-defined types, rendered with `show`.
///
/// `show` may itself discharge another spec:
///
/// ```
/// use fmtspec::{cat, custom, int, literal, sprintf1};
///
/// let item = cat(literal("#"), int());
/// let items = custom(move |xs: Vec<i64>| {
///     xs.into_iter()
///         .map(|x| sprintf1(&item, x))
///         .collect::<Vec<_>>()
///         .join(", ")
/// });
/// assert_eq!(sprintf1(&items, vec![1, 2]), "#1, #2");
/// ```
pub fn custom<T, A>(
    show: impl Fn(T) -> String + Send + Sync + 'static,
) -> Spec<A, Curried<T, A>>
where
    T: 'static,
    A: 'static,
{
    placeholder(show)
}

/// A `bool` placeholder, rendered `"True"` / `"False"`.
pub fn boolean<A: 'static>() -> Spec<A, Curried<bool, A>> {
    placeholder(render::bool_text)
}

/// An `i64` placeholder.
pub fn int<A: 'static>() -> Spec<A, Curried<i64, A>> {
    placeholder(render::int_text)
}

/// An `f64` placeholder.
pub fn float<A: 'static>() -> Spec<A, Curried<f64, A>> {
    placeholder(render::float_text)
}

/// A `String` placeholder, spliced verbatim.
pub fn string<A: 'static>() -> Spec<A, Curried<String, A>> {
    placeholder(render::string_text)
}

/// A placeholder for any `Display` type.
pub fn display<T, A>() -> Spec<A, Curried<T, A>>
where
    T: Display + 'static,
    A: 'static,
{
    placeholder(render::display_text::<T>)
}

// ============================================================================
// Concatenation
// ============================================================================

/// `left`'s text followed by `right`'s text.
///
/// The composite consumes `left`'s arguments first, then `right`'s. The
/// operation is associative: however a chain is grouped, the same arguments
/// give the same string.
///
/// ```
/// use fmtspec::{cat, int, literal, string, sprintf};
///
/// let spec = cat(cat(cat(literal("Name: "), string()), literal(", age ")), int());
/// assert_eq!(sprintf(&spec)("Ada".to_string())(36), "Name: Ada, age 36");
/// ```
pub fn cat<A, B, C>(left: Spec<A, B>, right: Spec<C, A>) -> Spec<C, B>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    Spec::new(move |k: Cont<C>| {
        let right = right.clone();
        left.run_with(move |head: String| {
            let k = Arc::clone(&k);
            right.run_with(move |tail: String| {
                let mut text = String::with_capacity(head.len() + tail.len());
                text.push_str(&head);
                text.push_str(&tail);
                k(text)
            })
        })
    })
}

impl<A, B> Spec<A, B>
where
    A: 'static,
    B: 'static,
{
    /// Method form of [`cat`].
    pub fn then<C: 'static>(self, right: Spec<C, A>) -> Spec<C, B> {
        cat(self, right)
    }
}

/// `left + right` is [`cat`]`(left, right)`.
impl<A, B, C> Add<Spec<C, A>> for Spec<A, B>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    type Output = Spec<C, B>;

    fn add(self, right: Spec<C, A>) -> Self::Output {
        cat(self, right)
    }
}
