//! Integration tests for requisites validation
//!
//! These tests drive the public entry points the way a caller would: build a
//! submission, pick a partner kind, and inspect the normalized fields or the
//! rejection.

use requisites::testing::samples;
use requisites::{
    assert_invalid, assert_valid, Check, FieldSetKind, FieldValue, InvalidRequisites,
    LegalEntityRequisites, PartnerKind, RequisitesError,
};

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn every_kind_accepts_its_sample() {
    for kind in PartnerKind::ALL {
        let sample = samples::for_kind(kind);
        let fields = assert_valid!(kind, sample.clone());

        assert_eq!(fields.len(), sample.len());
        for (key, value) in sample {
            let expected = if requisites::requisites::is_free_text(key) {
                value.to_string()
            } else {
                strip_whitespace(value)
            };
            assert_eq!(fields[key], expected, "{kind}: {key}");
        }
    }
}

#[test]
fn validation_is_idempotent() {
    for kind in PartnerKind::ALL {
        let once = assert_valid!(kind, samples::for_kind(kind));
        let twice = assert_valid!(kind, once.clone());
        assert_eq!(once, twice);
    }
}

#[test]
fn identifier_fields_lose_all_whitespace() {
    let fields = samples::with(
        samples::legal_entity(),
        "correspondent_account",
        "3010 1810\t4000 0000\n0225",
    );
    let fields = assert_valid!(PartnerKind::Ooo, fields);
    assert_eq!(fields["correspondent_account"], "30101810400000000225");
    assert_eq!(fields["bank_account"], "40702810438000060473");
}

#[test]
fn free_text_fields_keep_their_spaces() {
    let fields = samples::with(samples::sole_proprietor(), "real_address", "Moscow, Tverskaya 1");
    let fields = assert_valid!(PartnerKind::Ip, fields);
    assert_eq!(fields["real_address"], "Moscow, Tverskaya 1");
    assert_eq!(fields["full_entity_name"], "Individual entrepreneur Ivanov Ivan Ivanovich");
}

#[test]
fn names_are_not_free_text() {
    let fields = samples::with(samples::private_individual(), "requisites_surname", "Van Der Berg");
    let fields = assert_valid!(PartnerKind::PrivateIndividual, fields);
    assert_eq!(fields["requisites_surname"], "VanDerBerg");
}

#[test]
fn missing_field_is_a_shape_error() {
    let mut fields = samples::legal_entity();
    fields.retain(|(key, _)| *key != "kpp");

    let err = assert_invalid!(PartnerKind::Ao, fields);
    match err.reason() {
        RequisitesError::Shape(shape) => {
            assert_eq!(shape.missing, vec!["kpp"]);
            assert!(shape.unexpected.is_empty());
        }
        other => panic!("expected shape error, got {other:?}"),
    }
    assert_eq!(err.field(), None);
}

#[test]
fn extra_field_is_a_shape_error() {
    let mut fields = samples::private_individual();
    fields.push(("ogrn", "1027700132195"));

    let err = assert_invalid!(PartnerKind::PrivateIndividual, fields);
    assert_eq!(
        err.to_string(),
        "Validation error: unexpected fields: ogrn"
    );
}

#[test]
fn empty_submission_lists_every_field() {
    let empty: Vec<(&str, &str)> = Vec::new();
    let err = assert_invalid!(PartnerKind::Ip, empty);
    match err.reason() {
        RequisitesError::Shape(shape) => {
            assert_eq!(
                shape.missing.len(),
                FieldSetKind::SoleProprietor.field_names().len()
            );
        }
        other => panic!("expected shape error, got {other:?}"),
    }
}

#[test]
fn non_text_value_is_a_type_error() {
    let fields = samples::legal_entity().into_iter().map(|(key, value)| match key {
        "okpo" => (key, FieldValue::Integer(32537)),
        _ => (key, FieldValue::from(value)),
    });

    let err = assert_invalid!(PartnerKind::Pao, fields, "okpo");
    assert_eq!(
        err.to_string(),
        "Validation error: LegalEntityRequisites 'okpo' field expected type is 'string', got 'integer'"
    );
}

#[test]
fn null_value_is_a_type_error() {
    let fields = samples::private_individual()
        .into_iter()
        .map(|(key, value)| (key, if key == "bik" { None } else { Some(value) }));

    let err = assert_invalid!(PartnerKind::PrivateIndividual, fields, "bik");
    assert!(matches!(err.reason(), RequisitesError::FieldType(e) if e.actual == "null"));
}

#[test]
fn value_error_message() {
    let fields = samples::with(samples::private_individual(), "inn", "500100732258");
    let err = assert_invalid!(PartnerKind::PrivateIndividual, fields, "inn");
    assert_eq!(
        err.to_string(),
        "Validation error: Validation failed: inn: \
         INN has incorrect control number for the 12th digit of private individual or IP."
    );
}

#[test]
fn single_digit_changes_are_rejected() {
    let cases = [
        (PartnerKind::Ooo, "inn", "7707083894"),
        (PartnerKind::Ip, "inn", "500100732269"),
        (PartnerKind::Ooo, "bank_account", "40702810538000060473"),
        (PartnerKind::Ooo, "bank_account", "40702810938000060473"),
        (PartnerKind::Ooo, "correspondent_account", "30101810500000000225"),
        (PartnerKind::Pao, "ogrn", "1027700132196"),
        (PartnerKind::Ip, "ogrnip", "304500116000158"),
    ];

    for (kind, field, value) in cases {
        let fields = samples::with(samples::for_kind(kind), field, value);
        assert_invalid!(kind, fields, field);
    }
}

#[test]
fn bik_prefix_changes_are_rejected() {
    for bik in ["144525225", "034525225", "004525225", "094525225"] {
        let fields = samples::with(samples::private_individual(), "bik", bik);
        let err = assert_invalid!(PartnerKind::PrivateIndividual, fields, "bik");
        assert!(err.to_string().contains("BIK first 2 digits must be '04'."));
    }
}

#[test]
fn account_checks_depend_on_bik() {
    // The correspondent account is checked after the bank account, so it is
    // never reached once the BIK no longer matches the bank account.
    let fields = samples::with(samples::legal_entity(), "bik", "044525226");
    assert_invalid!(PartnerKind::Ooo, fields, "bank_account");
}

#[test]
fn bank_and_correspondent_rules_differ() {
    let fields = samples::with(
        samples::legal_entity(),
        "bank_account",
        "30101810400000000225",
    );
    assert_invalid!(PartnerKind::Ooo, fields, "bank_account");

    let fields = samples::with(
        samples::legal_entity(),
        "correspondent_account",
        "40702810438000060473",
    );
    assert_invalid!(PartnerKind::Ooo, fields, "correspondent_account");
}

#[test]
fn inn_form_follows_field_set() {
    let fields = samples::with(samples::sole_proprietor(), "inn", "7707083893");
    let err = assert_invalid!(PartnerKind::Ip, fields, "inn");
    assert!(err
        .to_string()
        .contains("INN for private individuals or IP must be 12 digits long."));

    let fields = samples::with(samples::legal_entity(), "inn", "500100732259");
    let err = assert_invalid!(PartnerKind::Zao, fields, "inn");
    assert!(err
        .to_string()
        .contains("INN for legal entities must be 10 digits long."));
}

#[test]
fn okved_forms() {
    for okved in ["62", "62.0", "62.01", "62.01.1", "1.2.3"] {
        let fields = samples::with(samples::sole_proprietor(), "okved", okved);
        assert_valid!(PartnerKind::Ip, fields);
    }
    for okved in ["620100", "6", "62.", "62..01", "62.011", "62.01.01.01"] {
        let fields = samples::with(samples::sole_proprietor(), "okved", okved);
        assert_invalid!(PartnerKind::Ip, fields, "okved");
    }
}

#[test]
fn kpp_reason_code_may_hold_uppercase_letters() {
    let fields = samples::with(samples::legal_entity(), "kpp", "7707AB001");
    assert_valid!(PartnerKind::Ooo, fields);

    let fields = samples::with(samples::legal_entity(), "kpp", "7707ab001");
    assert_invalid!(PartnerKind::Ooo, fields, "kpp");
}

#[test]
fn first_failing_check_wins() {
    let fields = samples::with(samples::legal_entity(), "kpp", "x");
    let fields = samples::with(fields, "okved", "x");
    let fields = samples::with(fields, "inn", "x");
    assert_invalid!(PartnerKind::Ooo, fields, "inn");
}

#[test]
fn unknown_kind_tag_is_rejected() {
    let err = "SOLE_TRADER".parse::<PartnerKind>().unwrap_err();
    assert_eq!(err.to_string(), "unknown partner kind: 'SOLE_TRADER'");
}

#[test]
fn public_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<InvalidRequisites>();
    assert_send_sync::<RequisitesError>();
    assert_send_sync::<Check<LegalEntityRequisites>>();
    assert_send_sync::<LegalEntityRequisites>();
    assert_send_sync::<FieldValue>();
    assert_send_sync::<PartnerKind>();
    assert_send_sync::<FieldSetKind>();
}
