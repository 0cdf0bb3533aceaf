//! Partner kinds and the dispatch table from kind to field set
//!
//! # Example
//!
//! ```rust
//! use requisites::{FieldSetKind, PartnerKind};
//!
//! let kind: PartnerKind = "PAO".parse().unwrap();
//! assert_eq!(kind.field_set(), FieldSetKind::LegalEntity);
//! assert_eq!(PartnerKind::Ip.field_set(), FieldSetKind::SoleProprietor);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidRequisites, UnknownPartnerKind};
use crate::requisites::{
    CommonRequisites, FieldValue, IpRequisites, LegalEntityRequisites, RawFields, Requisites,
};

/// Legal form of a partner submitting requisites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartnerKind {
    /// Limited liability company.
    Ooo,
    /// Joint-stock company.
    Ao,
    /// Closed joint-stock company.
    Zao,
    /// Public joint-stock company.
    Pao,
    /// Sole proprietor (individual entrepreneur).
    Ip,
    /// Private individual.
    PrivateIndividual,
}

/// The field-set variant a partner kind is validated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSetKind {
    /// [`CommonRequisites`].
    Common,
    /// [`IpRequisites`].
    SoleProprietor,
    /// [`LegalEntityRequisites`].
    LegalEntity,
}

type Validator = fn(RawFields) -> Result<BTreeMap<String, String>, InvalidRequisites>;

impl PartnerKind {
    /// Every partner kind.
    pub const ALL: [PartnerKind; 6] = [
        PartnerKind::Ooo,
        PartnerKind::Ao,
        PartnerKind::Zao,
        PartnerKind::Pao,
        PartnerKind::Ip,
        PartnerKind::PrivateIndividual,
    ];

    /// The tag this kind is exchanged as.
    pub fn as_str(self) -> &'static str {
        match self {
            PartnerKind::Ooo => "OOO",
            PartnerKind::Ao => "AO",
            PartnerKind::Zao => "ZAO",
            PartnerKind::Pao => "PAO",
            PartnerKind::Ip => "IP",
            PartnerKind::PrivateIndividual => "PRIVATE_INDIVIDUAL",
        }
    }

    /// The field set this kind is validated with.
    pub fn field_set(self) -> FieldSetKind {
        match self {
            PartnerKind::Ooo | PartnerKind::Ao | PartnerKind::Zao | PartnerKind::Pao => {
                FieldSetKind::LegalEntity
            }
            PartnerKind::Ip => FieldSetKind::SoleProprietor,
            PartnerKind::PrivateIndividual => FieldSetKind::Common,
        }
    }
}

impl FieldSetKind {
    /// Name of the field-set type.
    pub fn name(self) -> &'static str {
        match self {
            FieldSetKind::Common => CommonRequisites::NAME,
            FieldSetKind::SoleProprietor => IpRequisites::NAME,
            FieldSetKind::LegalEntity => LegalEntityRequisites::NAME,
        }
    }

    /// Declared field names of the field set, in declaration order.
    pub fn field_names(self) -> Vec<&'static str> {
        match self {
            FieldSetKind::Common => CommonRequisites::field_names().collect(),
            FieldSetKind::SoleProprietor => IpRequisites::field_names().collect(),
            FieldSetKind::LegalEntity => LegalEntityRequisites::field_names().collect(),
        }
    }

    fn validator(self) -> Validator {
        match self {
            FieldSetKind::Common => CommonRequisites::validate::<RawFields, String, FieldValue>,
            FieldSetKind::SoleProprietor => IpRequisites::validate::<RawFields, String, FieldValue>,
            FieldSetKind::LegalEntity => {
                LegalEntityRequisites::validate::<RawFields, String, FieldValue>
            }
        }
    }
}

impl fmt::Display for PartnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartnerKind {
    type Err = UnknownPartnerKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartnerKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownPartnerKind(s.to_string()))
    }
}

/// Validate a submission with the field set of `kind`.
///
/// Returns the normalized fields, or [`InvalidRequisites`] describing the
/// first problem found.
///
/// # Example
///
/// ```rust
/// use requisites::{validate, PartnerKind};
///
/// let err = validate(
///     PartnerKind::PrivateIndividual,
///     [("inn", "500100732259"), ("bik", "044525225")],
/// )
/// .unwrap_err();
/// assert_eq!(err.field_set(), "CommonRequisites");
/// ```
pub fn validate<I, K, V>(
    kind: PartnerKind,
    raw: I,
) -> Result<BTreeMap<String, String>, InvalidRequisites>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<FieldValue>,
{
    let raw = crate::requisites::collect_raw(raw);
    (kind.field_set().validator())(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::samples;

    #[test]
    fn test_every_kind_maps_to_a_field_set() {
        let legal: Vec<_> = PartnerKind::ALL
            .into_iter()
            .filter(|k| k.field_set() == FieldSetKind::LegalEntity)
            .collect();
        assert_eq!(
            legal,
            vec![
                PartnerKind::Ooo,
                PartnerKind::Ao,
                PartnerKind::Zao,
                PartnerKind::Pao
            ]
        );
        assert_eq!(PartnerKind::Ip.field_set(), FieldSetKind::SoleProprietor);
        assert_eq!(
            PartnerKind::PrivateIndividual.field_set(),
            FieldSetKind::Common
        );
    }

    #[test]
    fn test_tags_round_trip() {
        for kind in PartnerKind::ALL {
            assert_eq!(kind.as_str().parse::<PartnerKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            "LLC".parse::<PartnerKind>(),
            Err(UnknownPartnerKind("LLC".to_string()))
        );
        assert!("ooo".parse::<PartnerKind>().is_err());
    }

    #[test]
    fn test_field_set_names() {
        assert_eq!(FieldSetKind::Common.name(), "CommonRequisites");
        assert_eq!(FieldSetKind::SoleProprietor.name(), "IpRequisites");
        assert_eq!(FieldSetKind::LegalEntity.name(), "LegalEntityRequisites");
        assert_eq!(FieldSetKind::LegalEntity.field_names().len(), 17);
    }

    #[test]
    fn test_dispatch_uses_matching_field_set() {
        for kind in PartnerKind::ALL {
            let result = validate(kind, samples::for_kind(kind));
            assert!(result.is_ok(), "{kind}: {:?}", result);
        }
    }

    #[test]
    fn test_dispatch_rejects_other_kinds_sample() {
        let err = validate(PartnerKind::Ooo, samples::sole_proprietor()).unwrap_err();
        assert_eq!(err.field_set(), "LegalEntityRequisites");
        assert!(err.to_string().contains("ogrnip"));
    }
}
