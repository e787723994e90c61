//! The formatting specification value.
//!
//! A [`Spec<R, F>`] wraps a single function: given a completion callback that
//! turns the finished text into an `R`, it returns an `F`. `F` is whatever is
//! still needed before the text is known, expressed as a right-nested chain of
//! [`Curried`] layers ending in `R`:
//!
//! | Spec                              | `F`                                   |
//! |-----------------------------------|---------------------------------------|
//! | literal                           | `R`                                   |
//! | one placeholder of `T`            | `Curried<T, R>`                       |
//! | placeholders `T1, T2` in order    | `Curried<T1, Curried<T2, R>>`         |
//!
//! Reading the argument list off `F` is what lets the compiler reject a wrong
//! argument count or type at the discharge site.

use std::fmt;
use std::sync::Arc;

/// Completion callback receiving the text produced so far.
pub type Cont<R> = Arc<dyn Fn(String) -> R + Send + Sync>;

/// One layer of the remaining argument chain: consumes a `T`, yields `R`.
///
/// The layer can be called more than once, so a partially applied spec is
/// reusable with different trailing arguments.
pub type Curried<T, R> = Box<dyn Fn(T) -> R + Send + Sync>;

/// An immutable formatting specification.
///
/// Cloning is cheap: clones share the same underlying function.
pub struct Spec<R, F> {
    run: Arc<dyn Fn(Cont<R>) -> F + Send + Sync>,
}

impl<R, F> Spec<R, F> {
    /// Wraps a continuation-accepting function.
    ///
    /// The function must be pure: equivalent callbacks must give equivalent
    /// results no matter how often it is invoked.
    pub fn new(run: impl Fn(Cont<R>) -> F + Send + Sync + 'static) -> Self {
        Self { run: Arc::new(run) }
    }

    /// Runs the spec with an already shared completion callback.
    #[inline]
    pub fn run(&self, k: Cont<R>) -> F {
        (self.run)(k)
    }

    /// Runs the spec with `k` as the completion callback.
    #[inline]
    pub fn run_with(&self, k: impl Fn(String) -> R + Send + Sync + 'static) -> F {
        self.run(Arc::new(k))
    }
}

impl<R, F> Clone for Spec<R, F> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<R, F> fmt::Debug for Spec<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spec").finish_non_exhaustive()
    }
}
