//! Testing utilities for code that validates requisites
//!
//! This module provides known-good submissions for every partner kind,
//! assertion macros over [`validate`](crate::validate), and (with the
//! `proptest` feature) strategies that generate identifiers with correct
//! control digits.
//!
//! # Examples
//!
//! ## Samples
//!
//! ```rust
//! use requisites::testing::samples;
//! use requisites::{validate, PartnerKind};
//!
//! let fields = validate(PartnerKind::Pao, samples::legal_entity()).unwrap();
//! assert_eq!(fields["ogrn"], "1027700132195");
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use requisites::testing::samples;
//! use requisites::{assert_invalid, assert_valid, PartnerKind};
//!
//! assert_valid!(PartnerKind::Ip, samples::sole_proprietor());
//!
//! let mut fields = samples::sole_proprietor();
//! fields.retain(|(key, _)| *key != "ogrnip");
//! assert_invalid!(PartnerKind::Ip, fields);
//! ```

/// Known-good submissions, one per field set.
///
/// Identifier fields are written with embedded spaces where a person would
/// type them that way, so the samples also exercise normalization.
pub mod samples {
    use crate::kind::{FieldSetKind, PartnerKind};

    /// A submission as a list of field name and raw text pairs.
    pub type Sample = Vec<(&'static str, &'static str)>;

    /// Requisites of a private individual.
    pub fn private_individual() -> Sample {
        vec![
            ("requisites_name", "Ivan"),
            ("requisites_patronymic", "Ivanovich"),
            ("requisites_surname", "Ivanov"),
            ("real_address", "Moscow, Tverskaya 1"),
            ("inn", "5001 0073 2259"),
            ("bik", "044525225"),
            ("bank_name", "PAO Sberbank"),
            ("correspondent_account", "30101 810 4 0000 0000225"),
            ("bank_account", "40817810000000004312"),
        ]
    }

    /// Requisites of a sole proprietor.
    pub fn sole_proprietor() -> Sample {
        let mut sample = private_individual();
        sample.extend([
            ("short_entity_name", "IP Ivanov I. I."),
            ("full_entity_name", "Individual entrepreneur Ivanov Ivan Ivanovich"),
            ("legal_address", "Moscow region, Lenina 5"),
            ("okved", "62.01"),
            ("okpo", "0159753482"),
            ("okato", "45286555"),
            ("ogrnip", "304500116000157"),
        ]);
        sample
    }

    /// Requisites of an organization.
    pub fn legal_entity() -> Sample {
        vec![
            ("requisites_name", "German"),
            ("requisites_patronymic", "Oskarovich"),
            ("requisites_surname", "Gref"),
            ("real_address", "Moscow, Vavilova 19"),
            ("inn", "7707083893"),
            ("bik", "044525225"),
            ("bank_name", "PAO Sberbank"),
            ("correspondent_account", "30101810400000000225"),
            ("bank_account", "4070 2810 4380 0006 0473"),
            ("short_entity_name", "PAO Sberbank"),
            ("full_entity_name", "Public joint-stock company Sberbank of Russia"),
            ("legal_address", "Moscow, Vavilova 19"),
            ("okved", "64.19"),
            ("okpo", "00032537"),
            ("okato", "45286555000"),
            ("ogrn", "1027700132195"),
            ("kpp", "773601001"),
        ]
    }

    /// The sample matching the field set of `kind`.
    pub fn for_kind(kind: PartnerKind) -> Sample {
        match kind.field_set() {
            FieldSetKind::Common => private_individual(),
            FieldSetKind::SoleProprietor => sole_proprietor(),
            FieldSetKind::LegalEntity => legal_entity(),
        }
    }

    /// Replace the value of `field` in `sample`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requisites::testing::samples;
    ///
    /// let sample = samples::with(samples::legal_entity(), "kpp", "7707AB001");
    /// assert!(sample.contains(&("kpp", "7707AB001")));
    /// ```
    pub fn with(mut sample: Sample, field: &'static str, value: &'static str) -> Sample {
        for entry in sample.iter_mut().filter(|(key, _)| *key == field) {
            entry.1 = value;
        }
        sample
    }
}

/// Assert that a submission is accepted for a partner kind.
///
/// Evaluates to the normalized fields. Panics with the rejection message
/// otherwise.
///
/// # Example
///
/// ```rust
/// use requisites::testing::samples;
/// use requisites::{assert_valid, PartnerKind};
///
/// let fields = assert_valid!(PartnerKind::PrivateIndividual, samples::private_individual());
/// assert_eq!(fields["inn"], "500100732259");
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($kind:expr, $fields:expr) => {
        match $crate::validate($kind, $fields) {
            Ok(fields) => fields,
            Err(e) => panic!("Expected valid requisites, got: {}", e),
        }
    };
}

/// Assert that a submission is rejected for a partner kind.
///
/// Evaluates to the [`InvalidRequisites`](crate::InvalidRequisites). With a
/// third argument, also asserts the field the rejection names.
///
/// # Example
///
/// ```rust
/// use requisites::testing::samples;
/// use requisites::{assert_invalid, PartnerKind};
///
/// let fields = samples::with(samples::legal_entity(), "kpp", "7707ab001");
/// let err = assert_invalid!(PartnerKind::Ooo, fields, "kpp");
/// assert_eq!(err.field_set(), "LegalEntityRequisites");
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($kind:expr, $fields:expr) => {
        match $crate::validate($kind, $fields) {
            Err(e) => e,
            Ok(fields) => panic!("Expected invalid requisites, got: {:?}", fields),
        }
    };
    ($kind:expr, $fields:expr, $field:expr) => {{
        let err = $crate::assert_invalid!($kind, $fields);
        assert_eq!(
            err.field(),
            Some($field),
            "Expected rejection of '{}', got: {}",
            $field,
            err
        );
        err
    }};
}

/// Strategies for generating requisites with correct control digits.
///
/// # Example
///
/// ```rust
/// use proptest::prelude::*;
/// use requisites::checksum::{check_inn, Taxpayer};
/// use requisites::testing::strategies;
///
/// proptest!(|(inn in strategies::organization_inn())| {
///     prop_assert_eq!(check_inn(&inn, Taxpayer::Organization), Ok(()));
/// });
/// ```
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::collection::vec;
    use proptest::prelude::*;

    use crate::checksum::{
        inn_control_digit, inn_control_digits_individual, ogrn_control_digit,
        ogrnip_control_digit, ACCOUNT_WEIGHTS,
    };
    use crate::kind::{FieldSetKind, PartnerKind};

    // Position of the control digit inside a 20-digit account. Its weight
    // is 3, which is invertible modulo 10 (3 * 7 = 21).
    const ACCOUNT_CONTROL: usize = 8;

    fn render(digits: &[u32]) -> String {
        digits
            .iter()
            .filter_map(|d| char::from_digit(*d, 10))
            .collect()
    }

    fn bik_digits(bik: &str) -> Vec<u32> {
        bik.chars().filter_map(|c| c.to_digit(10)).collect()
    }

    fn region() -> impl Strategy<Value = Vec<u32>> {
        (1u32..=92).prop_map(|r| vec![r / 10, r % 10])
    }

    fn with_account_control(key: &[u32], mut account: Vec<u32>, reduce: bool) -> String {
        account[ACCOUNT_CONTROL] = 0;
        let sum: u32 = key
            .iter()
            .chain(&account)
            .zip(ACCOUNT_WEIGHTS)
            .map(|(d, w)| if reduce { d * w % 10 } else { d * w })
            .sum();
        account[ACCOUNT_CONTROL] = (10 - sum % 10) % 10 * 7 % 10;
        render(&account)
    }

    /// A 10-digit organization INN.
    pub fn organization_inn() -> impl Strategy<Value = String> {
        (region(), vec(0u32..10, 7)).prop_map(|(mut body, rest)| {
            body.extend(rest);
            body.push(inn_control_digit(&body));
            render(&body)
        })
    }

    /// A 12-digit individual INN.
    pub fn individual_inn() -> impl Strategy<Value = String> {
        (region(), vec(0u32..10, 8)).prop_map(|(mut body, rest)| {
            body.extend(rest);
            let (eleventh, twelfth) = inn_control_digits_individual(&body);
            body.extend([eleventh, twelfth]);
            render(&body)
        })
    }

    /// A BIK with the `04` prefix and a branch part of 050-999.
    pub fn bik() -> impl Strategy<Value = String> {
        (vec(0u32..10, 4), 50u32..1000)
            .prop_map(|(middle, branch)| format!("04{}{:03}", render(&middle), branch))
    }

    /// A settlement account matching `bik`.
    pub fn bank_account(bik: String) -> impl Strategy<Value = String> {
        vec(0u32..10, 20).prop_map(move |account| {
            let digits = bik_digits(&bik);
            let key = &digits[digits.len().saturating_sub(3)..];
            with_account_control(key, account, true)
        })
    }

    /// A correspondent account matching `bik`.
    pub fn correspondent_account(bik: String) -> impl Strategy<Value = String> {
        vec(0u32..10, 20).prop_map(move |account| {
            let key: Vec<u32> = [0]
                .into_iter()
                .chain(bik_digits(&bik).into_iter().skip(4).take(2))
                .collect();
            with_account_control(&key, account, false)
        })
    }

    /// A 13-digit OGRN.
    pub fn ogrn() -> impl Strategy<Value = String> {
        (1u64..10, 0u64..100_000_000_000).prop_map(|(first, rest)| {
            let body = first * 100_000_000_000 + rest;
            format!("{}{}", body, ogrn_control_digit(body))
        })
    }

    /// A 15-digit OGRNIP.
    pub fn ogrnip() -> impl Strategy<Value = String> {
        (1u64..10, 0u64..10_000_000_000_000).prop_map(|(first, rest)| {
            let body = first * 10_000_000_000_000 + rest;
            format!("{}{}", body, ogrnip_control_digit(body))
        })
    }

    /// A complete, valid submission for `kind`, keyed by field name.
    pub fn submission(kind: PartnerKind) -> impl Strategy<Value = Vec<(&'static str, String)>> {
        let field_set = kind.field_set();
        bik()
            .prop_flat_map(move |bik| {
                (
                    Just(bik.clone()),
                    bank_account(bik.clone()),
                    correspondent_account(bik),
                    if field_set == FieldSetKind::LegalEntity {
                        organization_inn().boxed()
                    } else {
                        individual_inn().boxed()
                    },
                    ogrn(),
                    ogrnip(),
                )
            })
            .prop_map(move |(bik, bank_account, correspondent, inn, ogrn, ogrnip)| {
                let mut fields = vec![
                    ("requisites_name", "Ivan".to_string()),
                    ("requisites_patronymic", "Ivanovich".to_string()),
                    ("requisites_surname", "Ivanov".to_string()),
                    ("real_address", "Moscow, Tverskaya 1".to_string()),
                    ("inn", inn),
                    ("bik", bik),
                    ("bank_name", "Test bank".to_string()),
                    ("correspondent_account", correspondent),
                    ("bank_account", bank_account),
                ];
                if field_set != FieldSetKind::Common {
                    fields.extend([
                        ("short_entity_name", "Test".to_string()),
                        ("full_entity_name", "Test entity".to_string()),
                        ("legal_address", "Moscow, Lenina 5".to_string()),
                        ("okved", "62.01".to_string()),
                        ("okpo", "00032537".to_string()),
                        ("okato", "45286555".to_string()),
                    ]);
                }
                match field_set {
                    FieldSetKind::SoleProprietor => fields.push(("ogrnip", ogrnip)),
                    FieldSetKind::LegalEntity => {
                        fields.extend([("ogrn", ogrn), ("kpp", "773601001".to_string())])
                    }
                    FieldSetKind::Common => {}
                }
                fields
            })
    }

    impl Arbitrary for PartnerKind {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            proptest::sample::select(PartnerKind::ALL.to_vec()).boxed()
        }
    }
}
