//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust has no native Higher-Kinded Types: there is no way to write a trait
//! abstracting over `Option<_>` or `Result<_, E>` as bare type constructors.
//! The [`TypeConstructor`] trait works around this with a Generic Associated
//! Type, and is the foundation every type class in this crate builds on.

use super::identity::Identity;

/// A trait representing a type constructor.
///
/// Implementors are a type constructor applied to some type `A` (for
/// example `Option<A>`). The associated types recover both the applied
/// parameter and the constructor itself:
///
/// - `Inner`: the type parameter the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` must be the same type as
/// `F` (up to type equality).
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::TypeConstructor;
///
/// fn inner_of<T: TypeConstructor<Inner = i32>>(_: &T) {}
///
/// inner_of(&Some(42));
/// inner_of(&Ok::<i32, String>(42));
/// ```
pub trait TypeConstructor {
    /// The inner type this constructor is applied to.
    ///
    /// For `Option<i32>` this is `i32`.
    type Inner;

    /// The same constructor applied to a different type `B`.
    ///
    /// For `Option<i32>`, `WithType<String>` is `Option<String>`. The
    /// `TypeConstructor<Inner = B>` bound keeps the result chainable.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}
