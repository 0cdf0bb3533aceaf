//! Requisites of a sole proprietor (IP).

use super::common::{self, COMMON_FIELDS};
use super::entity::{self, ENTITY_FIELDS};
use super::{Check, CommonRequisites, EntityCommonRequisites, Requisites, TextFields};
use crate::checksum::{self, CheckResult, Taxpayer};

/// Entity requisites plus the sole proprietor's registration number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IpRequisites {
    /// The embedded entity requisites.
    pub entity: EntityCommonRequisites,
    /// State registration number of the individual entrepreneur.
    pub ogrnip: String,
}

impl AsRef<CommonRequisites> for IpRequisites {
    fn as_ref(&self) -> &CommonRequisites {
        &self.entity.common
    }
}

impl AsRef<EntityCommonRequisites> for IpRequisites {
    fn as_ref(&self) -> &EntityCommonRequisites {
        &self.entity
    }
}

fn ogrnip(requisites: &IpRequisites) -> CheckResult {
    checksum::check_ogrnip(&requisites.ogrnip)
}

impl Requisites for IpRequisites {
    const NAME: &'static str = "IpRequisites";
    const TAXPAYER: Taxpayer = Taxpayer::Individual;
    const FIELD_GROUPS: &'static [&'static [&'static str]] =
        &[COMMON_FIELDS, ENTITY_FIELDS, &["ogrnip"]];
    const CHECKS: &'static [Check<Self>] = &[
        Check::new("inn", common::inn::<Self>),
        Check::new("bik", common::bik::<Self>),
        Check::new("bank_account", common::bank_account::<Self>),
        Check::new("correspondent_account", common::correspondent_account::<Self>),
        Check::new("okved", entity::okved::<Self>),
        Check::new("okpo", entity::okpo::<Self>),
        Check::new("okato", entity::okato::<Self>),
        Check::new("ogrnip", ogrnip),
    ];

    fn from_text(fields: &mut TextFields) -> Self {
        IpRequisites {
            entity: EntityCommonRequisites::take(fields),
            ogrnip: fields.take("ogrnip"),
        }
    }

    fn visit_fields(&self, visit: &mut dyn FnMut(&'static str, &str)) {
        self.entity.visit(visit);
        visit("ogrnip", &self.ogrnip);
    }
}
