//! Identity wrapper type - the identity functor.
//!
//! `Identity` wraps a value and adds no behavior at all. It serves as the
//! trivial computational context: the simplest lawful model for every type
//! class in this crate, and the context of choice when a combinator that
//! is generic over a context should run "with no effect".

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Tuple-struct syntax also works
/// let wrapped = Identity("hello");
/// assert_eq!(wrapped.0, "hello");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// assert_eq!(x.into_inner(), "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
