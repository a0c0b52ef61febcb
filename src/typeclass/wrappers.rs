//! Numeric wrappers selecting a monoid operation.
//!
//! A numeric type supports several lawful monoids (addition, multiplication,
//! ...), so the bare type cannot pick one. Wrapping a value in [`Sum`] or
//! [`Product`] selects the operation.

/// Wrapper selecting the additive monoid for a numeric type.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum(2).combine(Sum(3)), Sum(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the wrapper and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// Wrapper selecting the multiplicative monoid for a numeric type.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::{Product, Semigroup};
///
/// assert_eq!(Product(2).combine(Product(3)), Product(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the wrapper and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
