//! Boolean combinators.
//!
//! Named function forms of boolean operations, for use where a function
//! value reads better than an operator - typically as the negation step
//! of a delegating combinator such as [`crate::option::mempty_unless`].

/// Inverts a boolean value.
///
/// The function form of `!`, so the negation can be named, passed, and
/// composed like any other combinator.
///
/// # Examples
///
/// ```rust
/// use funkit::boolean::invert;
///
/// assert!(invert(false));
/// assert!(!invert(true));
/// ```
#[inline]
#[must_use]
pub const fn invert(value: bool) -> bool {
    !value
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, false)]
    #[case(false, true)]
    fn invert_negates(#[case] input: bool, #[case] expected: bool) {
        assert_eq!(invert(input), expected);
    }

    #[rstest]
    fn invert_twice_is_identity() {
        assert!(invert(invert(true)));
        assert!(!invert(invert(false)));
    }
}
