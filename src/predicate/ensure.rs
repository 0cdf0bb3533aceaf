//! Result integration for predicates
//!
//! Checks stop at the first broken rule, so predicates are lifted into
//! `Result` rather than into an accumulating type.

use super::combinators::Predicate;

/// Check a value against a predicate.
///
/// Returns `Ok(())` if the predicate is satisfied, otherwise `Err(error)`.
///
/// # Example
///
/// ```rust
/// use requisites::predicate::*;
///
/// assert_eq!(ensure("044525225", digits(), "not digits"), Ok(()));
/// assert_eq!(ensure("04452522x", digits(), "not digits"), Err("not digits"));
/// ```
pub fn ensure<T, E, P>(value: &T, predicate: P, error: E) -> Result<(), E>
where
    T: ?Sized,
    P: Predicate<T>,
{
    if predicate.check(value) {
        Ok(())
    } else {
        Err(error)
    }
}
