//! Statistical classifier codes (OKPO, OKATO, OKVED)
//!
//! These codes carry no control digit; only their shape is checked.

use super::CheckResult;
use crate::predicate::{digits, ensure, len_between, len_one_of, Predicate};

/// Validate an OKPO code: 8 digits for organizations, 10 for sole proprietors.
pub fn check_okpo(okpo: &str) -> CheckResult {
    ensure(okpo, digits(), "OKPO must only contain digits.")?;
    ensure(
        okpo,
        len_one_of(&[8, 10]),
        "OKPO must be either 8 or 10 digits long.",
    )
}

/// Validate an OKATO code: 8 to 11 digits.
pub fn check_okato(okato: &str) -> CheckResult {
    ensure(okato, digits(), "OKATO must only contain digits.")?;
    ensure(
        okato,
        len_between(8, 11),
        "OKATO must be from 8 to 11 digits long.",
    )
}

/// Validate an OKVED code: dot-separated groups of one or two digits,
/// 2 to 6 digits in total.
///
/// # Example
///
/// ```rust
/// use requisites::checksum::check_okved;
///
/// assert_eq!(check_okved("62.01"), Ok(()));
/// assert_eq!(
///     check_okved("620100"),
///     Err("Each part of OKVED separated by '.' must contain one or two digits.")
/// );
/// ```
pub fn check_okved(okved: &str) -> CheckResult {
    let segments: Vec<&str> = okved.split('.').collect();

    if !segments.iter().all(|s| digits().check(*s)) {
        return Err("OKVED must only contain digits separated by '.'");
    }

    let total: usize = segments.iter().map(|s| s.len()).sum();
    if !(2..=6).contains(&total) {
        return Err("OKVED must contain from 2 to 6 digits in total.");
    }

    if !segments.iter().all(|s| len_between(1, 2).check(*s)) {
        return Err("Each part of OKVED separated by '.' must contain one or two digits.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_okpo() {
        assert_eq!(check_okpo("00032537"), Ok(()));
        assert_eq!(check_okpo("0003253712"), Ok(()));
        assert_eq!(
            check_okpo("000325371"),
            Err("OKPO must be either 8 or 10 digits long.")
        );
        assert_eq!(check_okpo("0003253A"), Err("OKPO must only contain digits."));
    }

    #[test]
    fn test_okato() {
        assert_eq!(check_okato("45286555"), Ok(()));
        assert_eq!(check_okato("45286555000"), Ok(()));
        assert_eq!(
            check_okato("4528655"),
            Err("OKATO must be from 8 to 11 digits long.")
        );
        assert_eq!(
            check_okato("452865550001"),
            Err("OKATO must be from 8 to 11 digits long.")
        );
        assert_eq!(check_okato(""), Err("OKATO must only contain digits."));
    }

    #[test]
    fn test_okved_valid_forms() {
        assert_eq!(check_okved("62"), Ok(()));
        assert_eq!(check_okved("62.01"), Ok(()));
        assert_eq!(check_okved("64.19.1"), Ok(()));
        assert_eq!(check_okved("1.2.3"), Ok(()));
        assert_eq!(check_okved("46.90.10"), Ok(()));
    }

    #[test]
    fn test_okved_single_long_segment() {
        assert_eq!(
            check_okved("620100"),
            Err("Each part of OKVED separated by '.' must contain one or two digits.")
        );
    }

    #[test]
    fn test_okved_total_digits() {
        assert_eq!(
            check_okved("6"),
            Err("OKVED must contain from 2 to 6 digits in total.")
        );
        assert_eq!(
            check_okved("46.90.10.1"),
            Err("OKVED must contain from 2 to 6 digits in total.")
        );
    }

    #[test]
    fn test_okved_bad_separators() {
        let msg = "OKVED must only contain digits separated by '.'";
        assert_eq!(check_okved("62..01"), Err(msg));
        assert_eq!(check_okved("62.01."), Err(msg));
        assert_eq!(check_okved("62,01"), Err(msg));
        assert_eq!(check_okved(""), Err(msg));
    }
}
