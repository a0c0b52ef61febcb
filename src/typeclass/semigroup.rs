//! Semigroup type class - associative binary operations.
//!
//! A `Semigroup` is a type with an associative `combine` operation.
//! Together with [`super::monoid::Monoid`] it forms the algebra behind
//! the monoid-folding combinators.
//!
//! # Laws
//!
//! ## Associativity
//!
//! For all `a`, `b`, `c`:
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```

use super::identity::Identity;
use super::wrappers::{Product, Sum};
use std::ops::{Add, Mul};

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Semigroup;
    ///
    /// assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both sides; types can override
    /// it when a cheaper form exists.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut combined = Self::with_capacity(self.len() + other.len());
        combined.push_str(self);
        combined.push_str(other);
        combined
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// Option combines by keeping a lone `Some` and combining two `Some`s
/// with the inner semigroup.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }
}

/// The unit type combines trivially.
impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        let result = String::from("Hello, ").combine(String::from("World!"));
        assert_eq!(result, "Hello, World!");
    }

    #[rstest]
    fn string_combine_ref_leaves_operands_usable() {
        let a = String::from("ab");
        let b = String::from("cd");
        assert_eq!(a.combine_ref(&b), "abcd");
        assert_eq!(a, "ab");
        assert_eq!(b, "cd");
    }

    #[rstest]
    fn vec_combine_appends() {
        assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
    }

    #[rstest]
    #[case(Some(String::from("a")), Some(String::from("b")), Some(String::from("ab")))]
    #[case(Some(String::from("a")), None, Some(String::from("a")))]
    #[case(None, Some(String::from("b")), Some(String::from("b")))]
    #[case(None, None, None)]
    fn option_combine_cases(
        #[case] left: Option<String>,
        #[case] right: Option<String>,
        #[case] expected: Option<String>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn sum_combine_adds() {
        assert_eq!(Sum(2).combine(Sum(3)), Sum(5));
    }

    #[rstest]
    fn product_combine_multiplies() {
        assert_eq!(Product(2).combine(Product(3)), Product(6));
    }
}
