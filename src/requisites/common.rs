//! Requisites shared by every partner kind; on their own they describe a
//! private individual.

use super::{Check, Requisites, TextFields};
use crate::checksum::{self, CheckResult, Taxpayer};

/// Fields introduced at the common level.
pub(crate) const COMMON_FIELDS: &[&str] = &[
    "requisites_name",
    "requisites_patronymic",
    "requisites_surname",
    "real_address",
    "inn",
    "bik",
    "bank_name",
    "correspondent_account",
    "bank_account",
];

/// Personal and banking requisites of a private individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommonRequisites {
    /// First name.
    pub requisites_name: String,
    /// Patronymic.
    pub requisites_patronymic: String,
    /// Surname.
    pub requisites_surname: String,
    /// Physical address (free text).
    pub real_address: String,
    /// Taxpayer identification number.
    pub inn: String,
    /// Bank identification code.
    pub bik: String,
    /// Bank name (free text).
    pub bank_name: String,
    /// Correspondent account of the bank.
    pub correspondent_account: String,
    /// Settlement account.
    pub bank_account: String,
}

impl CommonRequisites {
    pub(crate) fn take(fields: &mut TextFields) -> Self {
        CommonRequisites {
            requisites_name: fields.take("requisites_name"),
            requisites_patronymic: fields.take("requisites_patronymic"),
            requisites_surname: fields.take("requisites_surname"),
            real_address: fields.take("real_address"),
            inn: fields.take("inn"),
            bik: fields.take("bik"),
            bank_name: fields.take("bank_name"),
            correspondent_account: fields.take("correspondent_account"),
            bank_account: fields.take("bank_account"),
        }
    }

    pub(crate) fn visit(&self, visit: &mut dyn FnMut(&'static str, &str)) {
        visit("requisites_name", &self.requisites_name);
        visit("requisites_patronymic", &self.requisites_patronymic);
        visit("requisites_surname", &self.requisites_surname);
        visit("real_address", &self.real_address);
        visit("inn", &self.inn);
        visit("bik", &self.bik);
        visit("bank_name", &self.bank_name);
        visit("correspondent_account", &self.correspondent_account);
        visit("bank_account", &self.bank_account);
    }
}

impl AsRef<CommonRequisites> for CommonRequisites {
    fn as_ref(&self) -> &CommonRequisites {
        self
    }
}

pub(crate) fn inn<R: Requisites + AsRef<CommonRequisites>>(requisites: &R) -> CheckResult {
    checksum::check_inn(&requisites.as_ref().inn, R::TAXPAYER)
}

pub(crate) fn bik<R: AsRef<CommonRequisites>>(requisites: &R) -> CheckResult {
    checksum::check_bik(&requisites.as_ref().bik)
}

pub(crate) fn bank_account<R: AsRef<CommonRequisites>>(requisites: &R) -> CheckResult {
    let common = requisites.as_ref();
    checksum::check_bank_account(&common.bank_account, &common.bik)
}

pub(crate) fn correspondent_account<R: AsRef<CommonRequisites>>(requisites: &R) -> CheckResult {
    let common = requisites.as_ref();
    checksum::check_correspondent_account(&common.correspondent_account, &common.bik)
}

impl Requisites for CommonRequisites {
    const NAME: &'static str = "CommonRequisites";
    const TAXPAYER: Taxpayer = Taxpayer::Individual;
    const FIELD_GROUPS: &'static [&'static [&'static str]] = &[COMMON_FIELDS];
    const CHECKS: &'static [Check<Self>] = &[
        Check::new("inn", inn::<Self>),
        Check::new("bik", bik::<Self>),
        Check::new("bank_account", bank_account::<Self>),
        Check::new("correspondent_account", correspondent_account::<Self>),
    ];

    fn from_text(fields: &mut TextFields) -> Self {
        Self::take(fields)
    }

    fn visit_fields(&self, visit: &mut dyn FnMut(&'static str, &str)) {
        self.visit(visit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FieldValueError, RequisitesError};
    use crate::testing::samples;

    #[test]
    fn test_sample_is_valid() {
        let requisites = CommonRequisites::from_fields(samples::private_individual()).unwrap();
        assert_eq!(requisites.inn, "500100732259");
        assert_eq!(requisites.check_values(), Ok(()));
    }

    #[test]
    fn test_rejects_organization_inn() {
        let mut requisites =
            CommonRequisites::from_fields(samples::private_individual()).unwrap();
        requisites.inn = "7707083893".to_string();
        assert_eq!(
            requisites.check_values(),
            Err(FieldValueError {
                field: "inn",
                error: "INN for private individuals or IP must be 12 digits long.",
            })
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let mut requisites =
            CommonRequisites::from_fields(samples::private_individual()).unwrap();
        requisites.bik = "bad".to_string();
        requisites.bank_account = "bad".to_string();
        assert_eq!(
            requisites.check_values().map_err(|e| e.field),
            Err("bik")
        );
    }

    #[test]
    fn test_into_fields_round_trips_sample() {
        let requisites = CommonRequisites::from_fields(samples::private_individual()).unwrap();
        let fields = requisites.into_fields();
        assert_eq!(fields.len(), COMMON_FIELDS.len());
        assert_eq!(fields["bank_name"], "PAO Sberbank");
    }

    #[test]
    fn test_error_names_field_set() {
        let err = CommonRequisites::from_fields([("inn", "1")]).unwrap_err();
        assert_eq!(err.field_set(), "CommonRequisites");
        assert!(matches!(err.reason(), RequisitesError::Shape(_)));
    }
}
