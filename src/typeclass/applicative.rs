//! Applicative type class - applying functions within containers.
//!
//! `Applicative` extends [`Functor`] with `pure` (lifting a plain value
//! into the context) and `apply` (applying a wrapped function to a
//! wrapped argument).
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for contexts that can lift values and apply wrapped functions.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::Applicative;
///
/// let x: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(x, Some(42));
///
/// let sum = Some(1).map2(Some(2), |a, b| a + b);
/// assert_eq!(sum, Some(3));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either computation fails (in the sense appropriate to the
    /// context), the result fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |a, b| a + b), Some(3));
    /// assert_eq!(Some(1).map2(None::<i32>, |a, b| a + b), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Applies a wrapped function to a wrapped argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|n| n * 2);
    /// assert_eq!(function.apply(Some(21)), Some(42));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(b)) => Some(function(b)),
            _ => None,
        }
    }
}

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Ok(function), Ok(b)) => Ok(function(b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity((self.0)(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_pure_lifts() {
        let lifted: Option<i32> = <Option<()>>::pure(42);
        assert_eq!(lifted, Some(42));
    }

    #[rstest]
    fn option_map2_combines_both() {
        assert_eq!(Some(3).map2(Some(4), |a, b| a * b), Some(12));
    }

    #[rstest]
    fn option_map2_fails_on_either_none() {
        assert_eq!(Some(3).map2(None::<i32>, |a, b| a + b), None);
        assert_eq!(None::<i32>.map2(Some(4), |a, b| a + b), None);
    }

    #[rstest]
    fn option_apply_applies_wrapped_function() {
        let function: Option<fn(i32) -> i32> = Some(|n| n + 1);
        assert_eq!(function.apply(Some(41)), Some(42));
    }

    #[rstest]
    fn result_pure_lifts() {
        let lifted: Result<i32, String> = <Result<(), String>>::pure(42);
        assert_eq!(lifted, Ok(42));
    }

    #[rstest]
    fn result_map2_propagates_first_error() {
        let left: Result<i32, &str> = Err("left");
        let right: Result<i32, &str> = Err("right");
        assert_eq!(left.map2(right, |a, b| a + b), Err("left"));
    }

    #[rstest]
    fn identity_apply_applies() {
        let function = Identity::new(|n: i32| n * 2);
        assert_eq!(function.apply(Identity::new(21)), Identity::new(42));
    }

    // Homomorphism law: pure(f).apply(pure(x)) == pure(f(x))
    #[rstest]
    fn option_homomorphism_law() {
        let f = |n: i32| n + 1;
        let left: Option<i32> = <Option<()>>::pure(f).apply(<Option<()>>::pure(5));
        let right: Option<i32> = <Option<()>>::pure(f(5));
        assert_eq!(left, right);
    }
}
