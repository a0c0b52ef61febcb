//! Combinators over monoidal values.
//!
//! Conditional folding helpers generic over any [`Monoid`]. The
//! Option-specialized forms live in [`crate::option`]; these are the
//! general versions for when the value being guarded is itself a monoid
//! (a `String`, a `Vec`, a numeric wrapper, ...).

use crate::boolean;
use crate::typeclass::Monoid;

/// Returns the monoid identity when the condition holds, otherwise the
/// thunk's result.
///
/// The thunk is not invoked when the condition is true - producing the
/// real value may be expensive or effectful, and must not happen when it
/// would only be discarded.
///
/// # Examples
///
/// ```rust
/// use funkit::monoid::mempty_when;
///
/// assert_eq!(mempty_when(true, || String::from("costly")), "");
/// assert_eq!(mempty_when(false, || String::from("costly")), "costly");
/// ```
#[inline]
pub fn mempty_when<M, F>(condition: bool, thunk: F) -> M
where
    M: Monoid,
    F: FnOnce() -> M,
{
    if condition { M::empty() } else { thunk() }
}

/// Returns the thunk's result when the condition holds, otherwise the
/// monoid identity.
///
/// The dual of [`mempty_when`], implemented by negating the condition
/// and delegating. The thunk is not invoked when the condition is false.
///
/// # Examples
///
/// ```rust
/// use funkit::monoid::mempty_unless;
///
/// assert_eq!(mempty_unless(true, || vec![1, 2]), vec![1, 2]);
/// assert_eq!(mempty_unless(false, || vec![1, 2]), Vec::<i32>::new());
/// ```
#[inline]
pub fn mempty_unless<M, F>(condition: bool, thunk: F) -> M
where
    M: Monoid,
    F: FnOnce() -> M,
{
    mempty_when(boolean::invert(condition), thunk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn mempty_when_true_yields_identity() {
        let result: String = mempty_when(true, || String::from("x"));
        assert_eq!(result, "");
    }

    #[rstest]
    fn mempty_when_false_yields_thunk_result() {
        assert_eq!(mempty_when(false, || Sum(5)), Sum(5));
    }

    #[rstest]
    fn mempty_when_true_never_invokes_thunk() {
        let invocations = Cell::new(0);
        let result: Vec<i32> = mempty_when(true, || {
            invocations.set(invocations.get() + 1);
            vec![1]
        });
        assert_eq!(result, Vec::<i32>::new());
        assert_eq!(invocations.get(), 0);
    }

    #[rstest]
    fn mempty_unless_false_never_invokes_thunk() {
        let invocations = Cell::new(0);
        let result: String = mempty_unless(false, || {
            invocations.set(invocations.get() + 1);
            String::from("x")
        });
        assert_eq!(result, "");
        assert_eq!(invocations.get(), 0);
    }

    #[rstest]
    fn mempty_unless_true_yields_thunk_result() {
        assert_eq!(mempty_unless(true, || String::from("x")), "x");
    }

    #[rstest]
    fn duals_mirror_each_other() {
        for condition in [true, false] {
            let when: Vec<i32> = mempty_when(condition, || vec![1]);
            let unless: Vec<i32> = mempty_unless(!condition, || vec![1]);
            assert_eq!(when, unless);
        }
    }
}
