//! Bank and correspondent accounts
//!
//! Both accounts are keyed by a fragment of the BIK and weighted by the same
//! `7 1 3` cycle, but they reduce differently: the bank account takes each
//! product modulo 10 before summing, the correspondent account sums the raw
//! products. The two rules are kept as separate functions.

use super::{to_digits, CheckResult};
use crate::predicate::{ensure, len_eq};

/// `[7, 1, 3]` seven times followed by `[7, 1]`: one weight per digit of
/// the 3-digit key plus the 20-digit account.
pub const ACCOUNT_WEIGHTS: [u32; 23] = [
    7, 1, 3, 7, 1, 3, 7, 1, 3, 7, 1, 3, 7, 1, 3, 7, 1, 3, 7, 1, 3, 7, 1,
];

/// Last `n` characters of `value` (fewer if it is shorter).
fn tail(value: &str, n: usize) -> &str {
    let start = value
        .char_indices()
        .rev()
        .nth(n.saturating_sub(1))
        .map_or(0, |(i, _)| i);
    &value[start..]
}

/// Validate a settlement account against the last three digits of its BIK.
///
/// An empty BIK contributes no key digits.
///
/// # Example
///
/// ```rust
/// use requisites::checksum::check_bank_account;
///
/// assert_eq!(check_bank_account("40702810438000060473", "044525225"), Ok(()));
/// assert_eq!(
///     check_bank_account("40702810538000060473", "044525225"),
///     Err("Bank account has incorrect control number.")
/// );
/// ```
pub fn check_bank_account(account: &str, bik: &str) -> CheckResult {
    const BAD_CONTROL: &str = "Bank account has incorrect control number.";

    let account_digits = to_digits(account).ok_or("Bank account can only consist of digits.")?;
    ensure(account, len_eq(20), "Bank account must consist of 20 digits.")?;

    let fragment = tail(bik, 3);
    let key = if fragment.is_empty() {
        Vec::new()
    } else {
        to_digits(fragment).ok_or(BAD_CONTROL)?
    };
    let checksum: u32 = key
        .iter()
        .chain(&account_digits)
        .zip(ACCOUNT_WEIGHTS)
        .map(|(d, w)| (d * w) % 10)
        .sum();

    if checksum % 10 == 0 {
        Ok(())
    } else {
        Err(BAD_CONTROL)
    }
}

/// Validate a correspondent account against `0` + BIK digits 5-6.
///
/// # Example
///
/// ```rust
/// use requisites::checksum::check_correspondent_account;
///
/// assert_eq!(check_correspondent_account("30101810400000000225", "044525225"), Ok(()));
/// ```
pub fn check_correspondent_account(account: &str, bik: &str) -> CheckResult {
    const BAD_CONTROL: &str = "Correspondent account has incorrect control number.";

    let account_digits =
        to_digits(account).ok_or("Correspondent account can only consist of digits.")?;
    ensure(
        account,
        len_eq(20),
        "Correspondent account must consist of 20 digits.",
    )?;

    let settlement_code: String = bik.chars().skip(4).take(2).collect();
    let mut key = vec![0];
    if !settlement_code.is_empty() {
        key.extend(to_digits(&settlement_code).ok_or(BAD_CONTROL)?);
    }
    let checksum: u32 = key
        .iter()
        .chain(&account_digits)
        .zip(ACCOUNT_WEIGHTS)
        .map(|(d, w)| d * w)
        .sum();

    if checksum % 10 == 0 {
        Ok(())
    } else {
        Err(BAD_CONTROL)
    }
}
