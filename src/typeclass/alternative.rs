//! Alternative type class - choice between computations.
//!
//! `Alternative` extends [`Applicative`] with a failure value (`empty`)
//! and an associative choice operation (`alt`) that keeps the first
//! success.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! empty.alt(x) == x
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! x.alt(empty) == x
//! ```
//!
//! ## Associativity
//!
//! ```text
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```

use super::applicative::Applicative;

/// A type class for applicative contexts with failure and choice.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::Alternative;
///
/// let first: Option<i32> = None;
/// assert_eq!(first.alt(Some(42)), Some(42));
///
/// // First success wins.
/// assert_eq!(Some(1).alt(Some(2)), Some(1));
/// ```
pub trait Alternative: Applicative {
    /// Returns the identity element for `alt` - the failed computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Alternative;
    ///
    /// let empty: Option<i32> = <Option<()>>::empty();
    /// assert_eq!(empty, None);
    /// ```
    fn empty<A>() -> Self::WithType<A>;

    /// Combines two alternatives, returning the first success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Alternative;
    ///
    /// assert_eq!(None::<i32>.alt(Some(42)), Some(42));
    /// assert_eq!(Some(1).alt(Some(2)), Some(1));
    /// ```
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Conditionally succeeds with `()` or fails.
    ///
    /// Returns `pure(())` if the condition is true, otherwise `empty`.
    /// Useful for conditional filtering inside monadic computations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::{Alternative, Functor};
    ///
    /// fn keep_positive(n: i32) -> Option<i32> {
    ///     <Option<()>>::guard(n > 0).fmap(move |()| n)
    /// }
    ///
    /// assert_eq!(keep_positive(5), Some(5));
    /// assert_eq!(keep_positive(-3), None);
    /// ```
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }

    /// Chooses from multiple alternatives, returning the first success.
    ///
    /// Folds over the alternatives with `alt` semantics, starting from
    /// `empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Alternative;
    ///
    /// let result: Option<i32> = Option::choice(vec![None, Some(1), Some(2)]);
    /// assert_eq!(result, Some(1));
    ///
    /// let result: Option<i32> = Option::choice(vec![None, None]);
    /// assert_eq!(result, None);
    /// ```
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}

impl<A> Alternative for Option<A> {
    #[inline]
    fn empty<B>() -> Option<B> {
        None
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives.into_iter().find(Self::is_some).flatten()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_option_left_identity(value in any::<Option<i32>>()) {
            let empty: Option<i32> = <Option<()>>::empty();
            prop_assert_eq!(empty.alt(value), value);
        }

        #[test]
        fn prop_option_right_identity(value in any::<Option<i32>>()) {
            let empty: Option<i32> = <Option<()>>::empty();
            prop_assert_eq!(value.alt(empty), value);
        }

        #[test]
        fn prop_option_associativity(
            x in any::<Option<i32>>(),
            y in any::<Option<i32>>(),
            z in any::<Option<i32>>()
        ) {
            prop_assert_eq!(x.alt(y).alt(z), x.alt(y.alt(z)));
        }

        #[test]
        fn prop_option_choice_agrees_with_folded_alt(
            alternatives in prop::collection::vec(any::<Option<i32>>(), 0..8)
        ) {
            let folded = alternatives
                .iter()
                .copied()
                .fold(<Option<()>>::empty(), Alternative::alt);
            prop_assert_eq!(Option::choice(alternatives), folded);
        }
    }
}
