//! Bank identification code (BIK)

use super::CheckResult;
use crate::predicate::{ensure, digits, len_eq, starts_with};

/// Validate a BIK: nine digits, Russian-bank prefix `04`, branch part 050-999.
///
/// # Example
///
/// ```rust
/// use requisites::checksum::check_bik;
///
/// assert_eq!(check_bik("044525225"), Ok(()));
/// assert_eq!(check_bik("044525049"), Err("BIK last 3 digits should be within 050 to 999."));
/// ```
pub fn check_bik(bik: &str) -> CheckResult {
    ensure(bik, digits(), "BIK must only contain numbers.")?;
    ensure(bik, len_eq(9), "BIK must be 9 digits long.")?;
    ensure(bik, starts_with("04"), "BIK first 2 digits must be '04'.")?;

    let branch: u32 = bik[6..]
        .parse()
        .map_err(|_| "BIK must only contain numbers.")?;
    if !(50..=999).contains(&branch) {
        return Err("BIK last 3 digits should be within 050 to 999.");
    }

    Ok(())
}
