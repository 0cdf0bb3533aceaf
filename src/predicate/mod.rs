//! Predicate combinators for composable format rules
//!
//! The format half of every requisites check ("digits only", "exactly 20
//! characters", "starts with 04") is a predicate over `str`. Predicates are
//! combined with `and`, `or` and `not`, and lifted into `Result` with
//! [`ensure`] so a check can return at its first broken rule.
//!
//! # Example
//!
//! ```rust
//! use requisites::predicate::*;
//!
//! fn bik_format(bik: &str) -> Result<(), &'static str> {
//!     ensure(bik, digits(), "BIK must only contain numbers.")?;
//!     ensure(bik, len_eq(9), "BIK must be 9 digits long.")?;
//!     ensure(bik, starts_with("04"), "BIK first 2 digits must be '04'.")
//! }
//!
//! assert_eq!(bik_format("044525225"), Ok(()));
//! assert_eq!(bik_format("144525225"), Err("BIK first 2 digits must be '04'."));
//! ```

mod combinators;
mod ensure;
mod string;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{And, Not, Or};

// Re-export string predicates
pub use string::{
    all_chars, digits, len_between, len_eq, len_one_of, starts_with, AllChars, Digits, LenBetween,
    LenOneOf, StartsWith,
};

// Re-export Result integration
pub use ensure::ensure;
