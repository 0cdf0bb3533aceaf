//! Requisites shared by every kind that registers as a business.

use super::{CommonRequisites, TextFields};
use crate::checksum::{self, CheckResult};

/// Fields introduced at the entity level.
pub(crate) const ENTITY_FIELDS: &[&str] = &[
    "short_entity_name",
    "full_entity_name",
    "legal_address",
    "okved",
    "okpo",
    "okato",
];

/// Common requisites plus registered names, legal address and classifier codes.
///
/// Never validated on its own: sole proprietors and legal entities embed it
/// and add their registration numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityCommonRequisites {
    /// The embedded common requisites.
    pub common: CommonRequisites,
    /// Short registered name (free text).
    pub short_entity_name: String,
    /// Full registered name (free text).
    pub full_entity_name: String,
    /// Legal address (free text).
    pub legal_address: String,
    /// Industry classification code.
    pub okved: String,
    /// Statistics registration code.
    pub okpo: String,
    /// Territory classification code.
    pub okato: String,
}

impl EntityCommonRequisites {
    pub(crate) fn take(fields: &mut TextFields) -> Self {
        EntityCommonRequisites {
            common: CommonRequisites::take(fields),
            short_entity_name: fields.take("short_entity_name"),
            full_entity_name: fields.take("full_entity_name"),
            legal_address: fields.take("legal_address"),
            okved: fields.take("okved"),
            okpo: fields.take("okpo"),
            okato: fields.take("okato"),
        }
    }

    pub(crate) fn visit(&self, visit: &mut dyn FnMut(&'static str, &str)) {
        self.common.visit(visit);
        visit("short_entity_name", &self.short_entity_name);
        visit("full_entity_name", &self.full_entity_name);
        visit("legal_address", &self.legal_address);
        visit("okved", &self.okved);
        visit("okpo", &self.okpo);
        visit("okato", &self.okato);
    }
}

impl AsRef<CommonRequisites> for EntityCommonRequisites {
    fn as_ref(&self) -> &CommonRequisites {
        &self.common
    }
}

impl AsRef<EntityCommonRequisites> for EntityCommonRequisites {
    fn as_ref(&self) -> &EntityCommonRequisites {
        self
    }
}

pub(crate) fn okved<R: AsRef<EntityCommonRequisites>>(requisites: &R) -> CheckResult {
    checksum::check_okved(&requisites.as_ref().okved)
}

pub(crate) fn okpo<R: AsRef<EntityCommonRequisites>>(requisites: &R) -> CheckResult {
    checksum::check_okpo(&requisites.as_ref().okpo)
}

pub(crate) fn okato<R: AsRef<EntityCommonRequisites>>(requisites: &R) -> CheckResult {
    checksum::check_okato(&requisites.as_ref().okato)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requisites::common::COMMON_FIELDS;
    use crate::testing::samples;

    fn sample() -> EntityCommonRequisites {
        let mut text = TextFields::new();
        for (field, value) in samples::sole_proprietor() {
            text.insert(field, value.to_string());
        }
        EntityCommonRequisites::take(&mut text)
    }

    #[test]
    fn test_take_fills_both_levels() {
        let entity = sample();
        assert_eq!(entity.okved, "62.01");
        assert_eq!(entity.legal_address, "Moscow region, Lenina 5");
        assert_eq!(entity.common.bik, "044525225");
    }

    #[test]
    fn test_as_ref_reaches_embedded_common() {
        let entity = sample();
        let common: &CommonRequisites = entity.as_ref();
        assert_eq!(common, &entity.common);
    }

    #[test]
    fn test_visit_covers_common_then_entity_fields() {
        let mut visited = Vec::new();
        sample().visit(&mut |field, _| visited.push(field));
        let expected: Vec<&str> = COMMON_FIELDS.iter().chain(ENTITY_FIELDS).copied().collect();
        assert_eq!(visited, expected);
    }

    #[test]
    fn test_classifier_checks() {
        let mut entity = sample();
        assert_eq!(okved(&entity), Ok(()));
        assert_eq!(okpo(&entity), Ok(()));
        assert_eq!(okato(&entity), Ok(()));

        entity.okved = "620100".to_string();
        entity.okpo = "123456789".to_string();
        entity.okato = "4528655".to_string();
        assert_eq!(
            okved(&entity),
            Err("Each part of OKVED separated by '.' must contain one or two digits.")
        );
        assert_eq!(okpo(&entity), Err("OKPO must be either 8 or 10 digits long."));
        assert_eq!(okato(&entity), Err("OKATO must be from 8 to 11 digits long."));
    }
}
