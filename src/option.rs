//! Combinators over optional values.
//!
//! Helpers for unwrapping, toggling, and defaulting `Option` values.
//! Absence is always represented as `None` - the one deliberate exception
//! is the `unsafe_` pair, which trades the typed absence for a panic and
//! says so in its name.

use crate::boolean;
use crate::typeclass::{Alternative, Monoid};

/// Message carried by [`unsafe_unwrap`] when the option is empty.
const UNWRAP_MESSAGE: &str = "unwrapped an empty Option";

/// Extracts the held value, panicking with the given message when empty.
///
/// This is an escape hatch for call sites that have already proven the
/// option non-empty - typically test assertions. Everywhere else, prefer
/// keeping the absence typed and matching on it.
///
/// # Panics
///
/// Panics with exactly `message` when `option` is `None`.
///
/// # Examples
///
/// ```rust
/// use funkit::option::unsafe_expect;
///
/// assert_eq!(unsafe_expect("looked up above", Some(5)), 5);
/// ```
///
/// ```rust,should_panic
/// use funkit::option::unsafe_expect;
///
/// let _: i32 = unsafe_expect("custom", None); // panics with "custom"
/// ```
#[inline]
#[track_caller]
pub fn unsafe_expect<A>(message: &str, option: Option<A>) -> A {
    option.unwrap_or_else(|| panic!("{message}"))
}

/// Extracts the held value, panicking with a fixed message when empty.
///
/// [`unsafe_expect`] with the default message `"unwrapped an empty
/// Option"`. The same escape-hatch caveats apply.
///
/// # Panics
///
/// Panics when `option` is `None`.
///
/// # Examples
///
/// ```rust
/// use funkit::option::unsafe_unwrap;
///
/// assert_eq!(unsafe_unwrap(Some(5)), 5);
/// ```
#[inline]
#[track_caller]
pub fn unsafe_unwrap<A>(option: Option<A>) -> A {
    unsafe_expect(UNWRAP_MESSAGE, option)
}

/// Returns an empty option with an explicitly inferable item type.
///
/// Behaviorally identical to `None`; exists so the item type can be
/// pinned with a turbofish where a bare `None` would leave inference
/// unconstrained.
///
/// # Examples
///
/// ```rust
/// use funkit::option::none_as;
///
/// let absent = none_as::<String>();
/// assert_eq!(absent, None);
/// ```
#[inline]
#[must_use]
pub const fn none_as<A>() -> Option<A> {
    None
}

/// Toggles an option against a reference value.
///
/// - `None` becomes `Some(reference)`.
/// - A held value equal to `reference` becomes `None`.
/// - Any *other* held value is replaced by `Some(reference)`.
///
/// The last case means this is not a true involution: applying it twice
/// to `Some(y)` with `y != reference` yields `Some(reference)`, not
/// `Some(y)`. That replacement behavior is intentional and pinned by a
/// regression test.
///
/// # Examples
///
/// ```rust
/// use funkit::option::invert;
///
/// assert_eq!(invert(5, None), Some(5));
/// assert_eq!(invert(5, Some(5)), None);
/// assert_eq!(invert(5, Some(7)), Some(5));
/// ```
#[inline]
pub fn invert<A>(reference: A, option: Option<A>) -> Option<A>
where
    A: PartialEq,
{
    invert_by(|a, b| a == b, reference, option)
}

/// [`invert`] with an explicit equality comparator.
///
/// Takes the equality capability as a closure instead of a `PartialEq`
/// bound, for types without a (usable) equality instance or when a
/// non-standard comparison is wanted.
///
/// # Examples
///
/// ```rust
/// use funkit::option::invert_by;
///
/// let case_insensitive = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
/// assert_eq!(invert_by(case_insensitive, "on", Some("ON")), None);
/// assert_eq!(invert_by(case_insensitive, "on", None), Some("on"));
/// ```
#[inline]
pub fn invert_by<A, F>(mut eq: F, reference: A, option: Option<A>) -> Option<A>
where
    F: FnMut(&A, &A) -> bool,
{
    match option {
        Some(held) if eq(&held, &reference) => None,
        _ => Some(reference),
    }
}

/// Extracts the held value, or the monoid identity when empty.
///
/// # Examples
///
/// ```rust
/// use funkit::option::to_monoid;
///
/// assert_eq!(to_monoid(Some(String::from("x"))), "x");
/// assert_eq!(to_monoid(None::<String>), "");
/// ```
#[inline]
pub fn to_monoid<A>(option: Option<A>) -> A
where
    A: Monoid,
{
    option.unwrap_or_else(A::empty)
}

/// Returns `None` when the condition holds, otherwise the thunk's result.
///
/// The thunk is not invoked when the condition is true - producing the
/// non-empty branch may be expensive or effectful, and must not happen
/// when it would only be discarded.
///
/// # Examples
///
/// ```rust
/// use funkit::option::mempty_when;
///
/// assert_eq!(mempty_when(true, || Some("x")), None);
/// assert_eq!(mempty_when(false, || Some("x")), Some("x"));
/// ```
#[inline]
pub fn mempty_when<A, F>(condition: bool, thunk: F) -> Option<A>
where
    F: FnOnce() -> Option<A>,
{
    if condition { None } else { thunk() }
}

/// Returns the thunk's result when the condition holds, otherwise `None`.
///
/// The dual of [`mempty_when`], implemented by negating the condition and
/// delegating. The thunk is not invoked when the condition is false.
///
/// # Examples
///
/// ```rust
/// use funkit::option::mempty_unless;
///
/// assert_eq!(mempty_unless(true, || Some("x")), Some("x"));
/// assert_eq!(mempty_unless(false, || Some("x")), None);
/// ```
#[inline]
pub fn mempty_unless<A, F>(condition: bool, thunk: F) -> Option<A>
where
    F: FnOnce() -> Option<A>,
{
    mempty_when(boolean::invert(condition), thunk)
}

/// Lifts the thunk's result into `Some` when the condition holds,
/// otherwise returns `None` without invoking the thunk.
///
/// # Examples
///
/// ```rust
/// use funkit::option::pure_if;
///
/// let is_even = |n: i32| n % 2 == 0;
///
/// assert_eq!(pure_if(is_even(4), || "answer"), Some("answer"));
/// assert_eq!(pure_if(is_even(3), || "answer"), None);
/// ```
#[inline]
pub fn pure_if<A, F>(condition: bool, thunk: F) -> Option<A>
where
    F: FnOnce() -> A,
{
    if condition { Some(thunk()) } else { None }
}

/// Returns the first non-empty option of an iterator.
///
/// Folds with [`Alternative::alt`] semantics: the first `Some` wins, an
/// exhausted iterator yields `None`. All options are already-constructed
/// values; to defer producing them, use [`alt_all_by`].
///
/// # Examples
///
/// ```rust
/// use funkit::option::alt_all;
///
/// assert_eq!(alt_all(vec![None, Some(1), Some(2)]), Some(1));
/// assert_eq!(alt_all(Vec::<Option<i32>>::new()), None);
/// ```
#[inline]
pub fn alt_all<A, I>(options: I) -> Option<A>
where
    I: IntoIterator<Item = Option<A>>,
{
    Option::choice(options)
}

/// Applies matchers to an input in order, returning the first `Some`.
///
/// Short-circuits: matchers after the first non-empty result are never
/// invoked. An empty matcher sequence, or one where every matcher misses,
/// yields `None`.
///
/// # Examples
///
/// ```rust
/// use funkit::option::alt_all_by;
///
/// let matchers: [fn(&&str) -> Option<i32>; 2] = [
///     |s| s.parse().ok(),
///     |s| i32::try_from(s.len()).ok(),
/// ];
///
/// // "foo" does not parse, so its length wins.
/// assert_eq!(alt_all_by(matchers, &"foo"), Some(3));
/// // "42" parses, so the length matcher never runs.
/// assert_eq!(alt_all_by(matchers, &"42"), Some(42));
/// ```
#[inline]
pub fn alt_all_by<A, B, I, F>(matchers: I, input: &A) -> Option<B>
where
    I: IntoIterator<Item = F>,
    F: FnMut(&A) -> Option<B>,
{
    matchers.into_iter().find_map(|mut matcher| matcher(input))
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // invert never leaves the reference value and the input both standing:
        // the result is None exactly when the input held the reference.
        #[test]
        fn prop_invert_is_none_iff_input_held_reference(
            reference in any::<i32>(),
            input in any::<Option<i32>>()
        ) {
            let result = invert(reference, input);
            if input == Some(reference) {
                prop_assert_eq!(result, None);
            } else {
                prop_assert_eq!(result, Some(reference));
            }
        }

        // Applying invert twice always yields Some(reference) for inputs
        // not holding the reference, and the original input otherwise.
        #[test]
        fn prop_invert_twice_pins_replacement_semantics(
            reference in any::<i32>(),
            input in any::<Option<i32>>()
        ) {
            let twice = invert(reference, invert(reference, input));
            if input == Some(reference) || input.is_none() {
                prop_assert_eq!(twice, input);
            } else {
                prop_assert_eq!(twice, None);
            }
        }

        #[test]
        fn prop_to_monoid_matches_unwrap_or_default(option in any::<Option<String>>()) {
            let expected = option.clone().unwrap_or_default();
            prop_assert_eq!(to_monoid(option), expected);
        }

        #[test]
        fn prop_mempty_duals_agree_under_negation(
            condition in any::<bool>(),
            value in any::<Option<i32>>()
        ) {
            let when = mempty_when(condition, || value);
            let unless = mempty_unless(!condition, || value);
            prop_assert_eq!(when, unless);
        }

        #[test]
        fn prop_alt_all_matches_iterator_flatten_next(
            options in prop::collection::vec(any::<Option<i32>>(), 0..8)
        ) {
            let expected = options.iter().copied().flatten().next();
            prop_assert_eq!(alt_all(options), expected);
        }
    }
}
