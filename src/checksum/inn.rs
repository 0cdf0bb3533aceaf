//! Taxpayer identification number (INN)

use super::{to_digits, weighted_sum, CheckResult};
use crate::predicate::{ensure, len_eq, starts_with, Predicate};

/// Weights for the control digit of a 10-digit (organization) INN.
pub const INN_WEIGHTS_10: [u32; 9] = [2, 4, 10, 3, 5, 9, 4, 6, 8];

/// Weights for the 11th digit of a 12-digit (individual) INN.
pub const INN_WEIGHTS_11: [u32; 10] = [7, 2, 4, 10, 3, 5, 9, 4, 6, 8];

/// Weights for the 12th digit of a 12-digit (individual) INN.
pub const INN_WEIGHTS_12: [u32; 11] = [3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8];

/// Which INN form a field set expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Taxpayer {
    /// Legal entities: 10 digits, one control digit.
    Organization,
    /// Private individuals and sole proprietors: 12 digits, two control digits.
    Individual,
}

impl Taxpayer {
    /// Length of a valid INN for this taxpayer.
    pub fn inn_len(self) -> usize {
        match self {
            Taxpayer::Organization => 10,
            Taxpayer::Individual => 12,
        }
    }
}

/// Control digit for the first nine digits of an organization INN.
///
/// # Example
///
/// ```rust
/// use requisites::checksum::inn_control_digit;
///
/// assert_eq!(inn_control_digit(&[7, 7, 0, 7, 0, 8, 3, 8, 9]), 3);
/// ```
pub fn inn_control_digit(body: &[u32]) -> u32 {
    weighted_sum(body, &INN_WEIGHTS_10) % 11 % 10
}

/// Both control digits for the first ten digits of an individual INN.
///
/// # Example
///
/// ```rust
/// use requisites::checksum::inn_control_digits_individual;
///
/// assert_eq!(inn_control_digits_individual(&[5, 0, 0, 1, 0, 0, 7, 3, 2, 2]), (5, 9));
/// ```
pub fn inn_control_digits_individual(body: &[u32]) -> (u32, u32) {
    let eleventh = weighted_sum(body, &INN_WEIGHTS_11) % 11 % 10;
    let with_eleventh: Vec<u32> = body.iter().copied().chain([eleventh]).collect();
    let twelfth = weighted_sum(&with_eleventh, &INN_WEIGHTS_12) % 11 % 10;
    (eleventh, twelfth)
}

/// Region prefix 01-92, or the `9909` prefix issued to foreign organizations.
fn has_valid_region(inn: &str) -> bool {
    let region = inn.get(..2).unwrap_or(inn);
    let in_range = region
        .parse::<u32>()
        .map(|r| (1..=92).contains(&r))
        .unwrap_or(false);
    in_range || starts_with("9909").check(inn)
}

/// Validate an INN of the given taxpayer form.
///
/// # Example
///
/// ```rust
/// use requisites::checksum::{check_inn, Taxpayer};
///
/// assert_eq!(check_inn("500100732259", Taxpayer::Individual), Ok(()));
/// assert_eq!(
///     check_inn("7707083893", Taxpayer::Individual),
///     Err("INN for private individuals or IP must be 12 digits long.")
/// );
/// ```
pub fn check_inn(inn: &str, taxpayer: Taxpayer) -> CheckResult {
    let digits = to_digits(inn).ok_or("INN must only contain numbers.")?;

    if !has_valid_region(inn) {
        return Err("INN has invalid leading digits.");
    }

    match taxpayer {
        Taxpayer::Organization => {
            ensure(
                inn,
                len_eq(taxpayer.inn_len()),
                "INN for legal entities must be 10 digits long.",
            )?;
            if inn_control_digit(&digits[..9]) != digits[9] {
                return Err("INN has incorrect control number for a legal entity.");
            }
        }
        Taxpayer::Individual => {
            ensure(
                inn,
                len_eq(taxpayer.inn_len()),
                "INN for private individuals or IP must be 12 digits long.",
            )?;
            let (eleventh, twelfth) = inn_control_digits_individual(&digits[..10]);
            if eleventh != digits[10] {
                return Err(
                    "INN has incorrect control number for the 11th digit of private individual or IP.",
                );
            }
            if twelfth != digits[11] {
                return Err(
                    "INN has incorrect control number for the 12th digit of private individual or IP.",
                );
            }
        }
    }

    Ok(())
}
