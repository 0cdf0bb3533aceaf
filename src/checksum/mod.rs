//! Format and control-digit rules for individual requisites fields
//!
//! Every function here is a pure check over one field (and, for the two
//! account checks, a fragment of the BIK). A check returns `Ok(())` or the
//! message of the first rule the value breaks; it never panics on malformed
//! input.
//!
//! # Example
//!
//! ```rust
//! use requisites::checksum::{check_bik, check_correspondent_account, check_inn, Taxpayer};
//!
//! assert_eq!(check_inn("7707083893", Taxpayer::Organization), Ok(()));
//! assert_eq!(check_bik("044525225"), Ok(()));
//! assert_eq!(check_correspondent_account("30101810400000000225", "044525225"), Ok(()));
//! ```

mod account;
mod bik;
mod classifier;
mod inn;
mod kpp;
mod registration;

pub use account::{check_bank_account, check_correspondent_account, ACCOUNT_WEIGHTS};
pub use bik::check_bik;
pub use classifier::{check_okato, check_okpo, check_okved};
pub use inn::{
    check_inn, inn_control_digit, inn_control_digits_individual, Taxpayer, INN_WEIGHTS_10,
    INN_WEIGHTS_11, INN_WEIGHTS_12,
};
pub use kpp::check_kpp;
pub use registration::{check_ogrn, check_ogrnip, ogrn_control_digit, ogrnip_control_digit};

/// Outcome of a single field rule: `Err` carries a human-readable message.
pub type CheckResult = Result<(), &'static str>;

/// Sum of `digit * weight` over the common prefix of both slices.
///
/// # Example
///
/// ```rust
/// use requisites::checksum::weighted_sum;
///
/// assert_eq!(weighted_sum(&[1, 2, 3], &[3, 2, 1]), 10);
/// ```
pub fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

/// Parse a non-empty run of ASCII digits into their values.
pub(crate) fn to_digits(value: &str) -> Option<Vec<u32>> {
    if value.is_empty() {
        return None;
    }
    value.chars().map(|c| c.to_digit(10)).collect()
}

/// Split `value` after its first `n` characters.
pub(crate) fn split_at_char(value: &str, n: usize) -> (&str, &str) {
    let idx = value.char_indices().nth(n).map_or(value.len(), |(i, _)| i);
    value.split_at(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_sum_stops_at_shorter_slice() {
        assert_eq!(weighted_sum(&[1, 1, 1, 1], &[2, 2]), 4);
        assert_eq!(weighted_sum(&[], &[2, 2]), 0);
    }

    #[test]
    fn test_to_digits() {
        assert_eq!(to_digits("0459"), Some(vec![0, 4, 5, 9]));
        assert_eq!(to_digits(""), None);
        assert_eq!(to_digits("04a"), None);
        assert_eq!(to_digits("٤"), None);
    }

    #[test]
    fn test_split_at_char() {
        assert_eq!(split_at_char("7707AB001", 4), ("7707", "AB001"));
        assert_eq!(split_at_char("ЖЖЖ", 1), ("Ж", "ЖЖ"));
        assert_eq!(split_at_char("12", 5), ("12", ""));
    }
}
