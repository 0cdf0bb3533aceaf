//! Tax registration reason code (KPP)

use super::{split_at_char, CheckResult};
use crate::predicate::{all_chars, digits, ensure, len_eq};

const BAD_PATTERN: &str = "KPP has incorrect pattern.";

/// Validate a KPP: 4 digits (tax office), 2 digits or capital Latin letters
/// (reason), 3 digits (serial).
///
/// # Example
///
/// ```rust
/// use requisites::checksum::check_kpp;
///
/// assert_eq!(check_kpp("7707AB001"), Ok(()));
/// assert_eq!(check_kpp("7707ab001"), Err("KPP has incorrect pattern."));
/// ```
pub fn check_kpp(kpp: &str) -> CheckResult {
    ensure(
        kpp,
        len_eq(9),
        "KPP must be of 9 chars (digits or latin capital letters)",
    )?;

    let (tax_office, rest) = split_at_char(kpp, 4);
    let (reason, serial) = split_at_char(rest, 2);

    ensure(tax_office, digits(), BAD_PATTERN)?;
    ensure(
        reason,
        all_chars(|c: char| c.is_ascii_digit() || c.is_ascii_uppercase()),
        BAD_PATTERN,
    )?;
    ensure(serial, digits(), BAD_PATTERN)
}
