//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, letting the result of
//! one computation decide what computation runs next. This is the
//! capability the conditional-branching combinator in [`crate::monad`]
//! consumes.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// A type class for types that support sequencing of dependent computations.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::Monad;
///
/// let x = Some(5);
/// let y = x.flat_map(|n| if n > 0 { Some(n * 2) } else { None });
/// assert_eq!(y, Some(10));
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell this is `>>=` (bind); in Rust's standard library it is
    /// the shape of `Option::and_then` and `Result::and_then`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).flat_map(|n| Some(n * 2)), Some(10));
    /// assert_eq!(None::<i32>.flat_map(|n| Some(n * 2)), None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` matching Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` represents a failure, the failure propagates and `next`
    /// is not returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        Self::and_then(self, function)
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_flat_map_some_to_some() {
        assert_eq!(Some(5).flat_map(|n| Some(n * 2)), Some(10));
    }

    #[rstest]
    fn option_flat_map_some_to_none() {
        let result = Some(-5).flat_map(|n| if n > 0 { Some(n * 2) } else { None });
        assert_eq!(result, None);
    }

    #[rstest]
    fn option_flat_map_none_short_circuits() {
        assert_eq!(None::<i32>.flat_map(|n| Some(n * 2)), None);
    }

    #[rstest]
    fn option_then_discards_first_value() {
        assert_eq!(Some(5).then(Some("hello")), Some("hello"));
        assert_eq!(None::<i32>.then(Some("hello")), None);
    }

    #[rstest]
    fn result_flat_map_propagates_err() {
        let failed: Result<i32, &str> = Err("boom");
        assert_eq!(failed.flat_map(|n| Ok(n * 2)), Err("boom"));
    }

    #[rstest]
    fn result_flat_map_chains_ok() {
        let chained: Result<i32, &str> = Ok(5).flat_map(|n| Ok(n * 2));
        assert_eq!(chained, Ok(10));
    }

    #[rstest]
    fn identity_flat_map_transforms() {
        let result = Identity::new(5).flat_map(|n| Identity::new(n * 2));
        assert_eq!(result, Identity::new(10));
    }

    #[rstest]
    fn option_and_then_alias_agrees() {
        let via_flat_map = Some(5).flat_map(|n| Some(n * 2));
        let via_alias = Monad::and_then(Some(5), |n| Some(n * 2));
        assert_eq!(via_flat_map, via_alias);
    }
}
