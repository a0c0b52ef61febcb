//! Type class traits - the base algebra the combinators consume.
//!
//! Rust has no native higher-kinded types, so [`TypeConstructor`] emulates
//! them with Generic Associated Types; the class hierarchy builds on that:
//!
//! - [`Functor`]: mapping over container values
//! - [`Applicative`]: lifting values and applying wrapped functions
//! - [`Monad`]: sequencing dependent computations
//! - [`Alternative`]: failure and first-success choice
//! - [`Semigroup`]: associative binary operations
//! - [`Monoid`]: semigroups with an identity element
//!
//! A trait bound here plays the role of a capability descriptor: it is
//! resolved explicitly at each call site by monomorphization, never through
//! a registry or ambient context. Implementations are expected to satisfy
//! the laws stated in each trait's documentation; the combinators trust
//! those laws and do not verify them at runtime.
//!
//! # Examples
//!
//! ```rust
//! use funkit::typeclass::{Monad, Monoid};
//!
//! // Sequencing within Option
//! let halved = Some(10).flat_map(|n| if n % 2 == 0 { Some(n / 2) } else { None });
//! assert_eq!(halved, Some(5));
//!
//! // Folding with a monoid
//! let combined = String::combine_all(vec!["a".to_string(), "b".to_string()]);
//! assert_eq!(combined, "ab");
//! ```

mod alternative;
mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
