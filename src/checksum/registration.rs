//! State registration numbers (OGRN, OGRNIP)
//!
//! Both numbers carry one trailing control digit: the remainder of the body
//! (all preceding digits read as an integer) modulo a fixed prime, reduced
//! to its last decimal digit.

use super::{to_digits, CheckResult};
use crate::predicate::{ensure, len_eq, starts_with, PredicateExt};

struct RegistrationRule {
    len: usize,
    modulus: u64,
    not_digits: &'static str,
    wrong_len: &'static str,
    leading_zero: &'static str,
    bad_control: &'static str,
}

const OGRN: RegistrationRule = RegistrationRule {
    len: 13,
    modulus: 11,
    not_digits: "OGRN must only contain digits.",
    wrong_len: "OGRN must be 13 digits long.",
    leading_zero: "OGRN cannot start with a zero.",
    bad_control: "OGRN has invalid control number.",
};

const OGRNIP: RegistrationRule = RegistrationRule {
    len: 15,
    modulus: 13,
    not_digits: "OGRNIP must only contain digits.",
    wrong_len: "OGRNIP must be 15 digits long.",
    leading_zero: "OGRNIP cannot start with zero.",
    bad_control: "OGRNIP has invalid control number.",
};

impl RegistrationRule {
    fn check(&self, value: &str) -> CheckResult {
        let digits = to_digits(value).ok_or(self.not_digits)?;
        ensure(value, len_eq(self.len), self.wrong_len)?;
        ensure(value, starts_with("0").not(), self.leading_zero)?;

        let (body, control) = digits.split_at(self.len - 1);
        let body = body.iter().fold(0u64, |acc, d| acc * 10 + u64::from(*d));
        if (body % self.modulus % 10) as u32 != control[0] {
            return Err(self.bad_control);
        }

        Ok(())
    }
}

/// Control digit of an OGRN whose first 12 digits read as `body`.
///
/// # Example
///
/// ```rust
/// use requisites::checksum::ogrn_control_digit;
///
/// assert_eq!(ogrn_control_digit(102770013219), 5);
/// ```
pub fn ogrn_control_digit(body: u64) -> u32 {
    (body % OGRN.modulus % 10) as u32
}

/// Control digit of an OGRNIP whose first 14 digits read as `body`.
///
/// # Example
///
/// ```rust
/// use requisites::checksum::ogrnip_control_digit;
///
/// assert_eq!(ogrnip_control_digit(30450011600015), 7);
/// ```
pub fn ogrnip_control_digit(body: u64) -> u32 {
    (body % OGRNIP.modulus % 10) as u32
}

/// Validate the state registration number of an organization.
///
/// # Example
///
/// ```rust
/// use requisites::checksum::check_ogrn;
///
/// assert_eq!(check_ogrn("1027700132195"), Ok(()));
/// assert_eq!(check_ogrn("0027700132195"), Err("OGRN cannot start with a zero."));
/// ```
pub fn check_ogrn(ogrn: &str) -> CheckResult {
    OGRN.check(ogrn)
}

/// Validate the state registration number of a sole proprietor.
///
/// # Example
///
/// ```rust
/// use requisites::checksum::check_ogrnip;
///
/// assert_eq!(check_ogrnip("304500116000157"), Ok(()));
/// ```
pub fn check_ogrnip(ogrnip: &str) -> CheckResult {
    OGRNIP.check(ogrnip)
}
