//! # funkit
//!
//! A collection of small, independent functional combinators for Rust,
//! grouped by the abstract type they operate over.
//!
//! ## Overview
//!
//! Every export is a pure, stateless function: given typed inputs it
//! produces a typed output, with no side effects beyond those documented
//! in the clearly named `unsafe_` variants. The modules are:
//!
//! - [`monad`]: Conditional branching inside an abstract computational context
//! - [`option`]: Unwrapping, inverting, and defaulting optional values
//! - [`boolean`]: Boolean combinators
//! - [`monoid`]: Conditional monoid folding
//! - [`typeclass`]: The base algebra the combinators consume (Functor,
//!   Applicative, Monad, Alternative, Semigroup, Monoid)
//!
//! Capability descriptors are ordinary trait bounds, resolved per call
//! site: there is no registry and no ambient context, which keeps every
//! function independently testable.
//!
//! ## Example
//!
//! ```rust
//! use funkit::prelude::*;
//!
//! // Branch inside a context; both branches are already-constructed values.
//! let chosen = if_m(Identity::new(true), Identity::new("foo"), Identity::new("bar"));
//! assert_eq!(chosen, Identity::new("foo"));
//!
//! // Toggle an optional value against a reference.
//! assert_eq!(invert(5, None), Some(5));
//! assert_eq!(invert(5, Some(5)), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the combinator surface and the type-class traits it is
/// built on.
///
/// # Usage
///
/// ```rust
/// use funkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::monad::if_m;
    pub use crate::option::{
        alt_all, alt_all_by, invert, invert_by, mempty_unless, mempty_when, none_as, pure_if,
        to_monoid, unsafe_expect, unsafe_unwrap,
    };
    pub use crate::typeclass::*;
    // The generic monoid duals share names with their Option specializations,
    // so they stay behind their module path.
    pub use crate::{boolean, monoid};
}

pub mod boolean;
pub mod monad;
pub mod monoid;
pub mod option;
pub mod typeclass;
