//! String predicates
//!
//! Lengths are counted in characters, so a rule such as "exactly 9
//! characters" means the same thing for ASCII and non-ASCII input.

use super::combinators::Predicate;

/// Predicate that checks a string is non-empty and made of ASCII digits.
#[derive(Clone, Copy, Default, Debug)]
pub struct Digits;

impl Predicate<str> for Digits {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
    }
}

/// Create a predicate that checks a string is non-empty and consists only of `0`-`9`.
///
/// # Example
///
/// ```rust
/// use requisites::predicate::*;
///
/// assert!(digits().check("044525225"));
/// assert!(!digits().check(""));
/// assert!(!digits().check("04452522O"));
/// ```
pub fn digits() -> Digits {
    Digits
}

/// Predicate that checks character count is in range.
#[derive(Clone, Copy, Debug)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl Predicate<str> for LenBetween {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let len = value.chars().count();
        len >= self.min && len <= self.max
    }
}

/// Create a predicate that checks if the character count is between min and max (inclusive).
///
/// # Example
///
/// ```rust
/// use requisites::predicate::*;
///
/// let okato = len_between(8, 11);
/// assert!(!okato.check("4528655"));
/// assert!(okato.check("45286555"));
/// assert!(okato.check("45286555000"));
/// assert!(!okato.check("452865550001"));
/// ```
pub fn len_between(min: usize, max: usize) -> LenBetween {
    LenBetween { min, max }
}

/// Create a predicate that checks if the character count is exactly len.
///
/// # Example
///
/// ```rust
/// use requisites::predicate::*;
///
/// assert!(len_eq(9).check("773601001"));
/// assert!(len_eq(9).check("7736АБ001"));
/// assert!(!len_eq(9).check("77360100"));
/// ```
pub fn len_eq(len: usize) -> LenBetween {
    LenBetween { min: len, max: len }
}

/// Predicate that checks the character count is one of a fixed set.
#[derive(Clone, Copy, Debug)]
pub struct LenOneOf(pub &'static [usize]);

impl Predicate<str> for LenOneOf {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.contains(&value.chars().count())
    }
}

/// Create a predicate that accepts only the listed character counts.
///
/// # Example
///
/// ```rust
/// use requisites::predicate::*;
///
/// let okpo = len_one_of(&[8, 10]);
/// assert!(okpo.check("00032537"));
/// assert!(!okpo.check("000325371"));
/// ```
pub fn len_one_of(lengths: &'static [usize]) -> LenOneOf {
    LenOneOf(lengths)
}

/// Predicate that checks if string starts with a prefix.
#[derive(Clone, Debug)]
pub struct StartsWith<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for StartsWith<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.starts_with(self.0.as_ref())
    }
}

/// Create a predicate that checks if string starts with prefix.
///
/// # Example
///
/// ```rust
/// use requisites::predicate::*;
///
/// assert!(starts_with("04").check("044525225"));
/// assert!(!starts_with("04").check("144525225"));
/// ```
pub fn starts_with<S: AsRef<str> + Send + Sync>(prefix: S) -> StartsWith<S> {
    StartsWith(prefix)
}

/// Predicate that checks if all characters satisfy a predicate.
#[derive(Clone, Copy, Debug)]
pub struct AllChars<F>(pub F);

impl<F: Fn(char) -> bool + Send + Sync> Predicate<str> for AllChars<F> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().all(&self.0)
    }
}

/// Create a predicate that checks if all characters satisfy a condition.
///
/// An empty string satisfies every `all_chars` predicate.
///
/// # Example
///
/// ```rust
/// use requisites::predicate::*;
///
/// let upper_or_digit = all_chars(|c: char| c.is_ascii_digit() || c.is_ascii_uppercase());
/// assert!(upper_or_digit.check("AB"));
/// assert!(!upper_or_digit.check("ab"));
/// ```
pub fn all_chars<F: Fn(char) -> bool + Send + Sync>(f: F) -> AllChars<F> {
    AllChars(f)
}
