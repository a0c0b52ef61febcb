//! Combinators over an abstract monadic context.
//!
//! These functions are generic over any [`Monad`], so they work uniformly
//! for `Option`, `Result`, [`Identity`](crate::typeclass::Identity), or any
//! other lawful implementation. The context is selected per call site by
//! the trait bound; the combinator adds no semantics of its own beyond the
//! context's `flat_map`.

use crate::typeclass::Monad;

/// Branches on a condition evaluated within a monadic context.
///
/// Sequences `condition` and returns `on_true` when it yields `true`,
/// otherwise `on_false`. Both branches are already-constructed context
/// values, so they are eager: any effects involved in *producing* them
/// have happened before this call. Callers needing lazy branches should
/// defer construction themselves.
///
/// There is no error path of its own - the behavior is fully determined
/// by the context's `flat_map`. For `Option`, a `None` condition yields
/// `None`; for `Result`, an `Err` condition propagates the error.
///
/// # Examples
///
/// ```rust
/// use funkit::monad::if_m;
/// use funkit::typeclass::Identity;
///
/// let chosen = if_m(Identity::new(true), Identity::new("foo"), Identity::new("bar"));
/// assert_eq!(chosen, Identity::new("foo"));
///
/// // The condition's own effects participate in sequencing.
/// assert_eq!(if_m(Some(false), Some(1), Some(2)), Some(2));
/// assert_eq!(if_m(None, Some(1), Some(2)), None);
/// ```
#[inline]
pub fn if_m<M, A>(
    condition: M,
    on_true: M::WithType<A>,
    on_false: M::WithType<A>,
) -> M::WithType<A>
where
    M: Monad<Inner = bool>,
{
    condition.flat_map(move |flag| if flag { on_true } else { on_false })
}
