//! Requisites of an organization (OOO, AO, ZAO, PAO).

use super::common::{self, COMMON_FIELDS};
use super::entity::{self, ENTITY_FIELDS};
use super::{Check, CommonRequisites, EntityCommonRequisites, Requisites, TextFields};
use crate::checksum::{self, CheckResult, Taxpayer};

/// Entity requisites plus the organization's registration number and KPP.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LegalEntityRequisites {
    /// The embedded entity requisites.
    pub entity: EntityCommonRequisites,
    /// State registration number of the organization.
    pub ogrn: String,
    /// Tax registration reason code.
    pub kpp: String,
}

impl AsRef<CommonRequisites> for LegalEntityRequisites {
    fn as_ref(&self) -> &CommonRequisites {
        &self.entity.common
    }
}

impl AsRef<EntityCommonRequisites> for LegalEntityRequisites {
    fn as_ref(&self) -> &EntityCommonRequisites {
        &self.entity
    }
}

fn ogrn(requisites: &LegalEntityRequisites) -> CheckResult {
    checksum::check_ogrn(&requisites.ogrn)
}

fn kpp(requisites: &LegalEntityRequisites) -> CheckResult {
    checksum::check_kpp(&requisites.kpp)
}

impl Requisites for LegalEntityRequisites {
    const NAME: &'static str = "LegalEntityRequisites";
    const TAXPAYER: Taxpayer = Taxpayer::Organization;
    const FIELD_GROUPS: &'static [&'static [&'static str]] =
        &[COMMON_FIELDS, ENTITY_FIELDS, &["ogrn", "kpp"]];
    const CHECKS: &'static [Check<Self>] = &[
        Check::new("inn", common::inn::<Self>),
        Check::new("bik", common::bik::<Self>),
        Check::new("bank_account", common::bank_account::<Self>),
        Check::new("correspondent_account", common::correspondent_account::<Self>),
        Check::new("okved", entity::okved::<Self>),
        Check::new("okpo", entity::okpo::<Self>),
        Check::new("okato", entity::okato::<Self>),
        Check::new("ogrn", ogrn),
        Check::new("kpp", kpp),
    ];

    fn from_text(fields: &mut TextFields) -> Self {
        LegalEntityRequisites {
            entity: EntityCommonRequisites::take(fields),
            ogrn: fields.take("ogrn"),
            kpp: fields.take("kpp"),
        }
    }

    fn visit_fields(&self, visit: &mut dyn FnMut(&'static str, &str)) {
        self.entity.visit(visit);
        visit("ogrn", &self.ogrn);
        visit("kpp", &self.kpp);
    }
}
