//! Validating partner requisites
//!
//! Shows the happy path for each partner kind, normalization of identifier
//! fields and the errors produced for the three kinds of failure.
//!
//! Run with: cargo run --example validate_requisites

use requisites::testing::samples;
use requisites::{validate, FieldValue, PartnerKind, RequisitesError};

fn main() {
    println!("Requisites Validation Examples");
    println!("==============================\n");

    valid_submissions();
    normalization();
    shape_errors();
    type_errors();
    value_errors();
}

fn valid_submissions() {
    println!("1. Valid submissions");
    println!("--------------------");

    for kind in PartnerKind::ALL {
        match validate(kind, samples::for_kind(kind)) {
            Ok(fields) => println!("  {:<18} -> {} fields", kind, fields.len()),
            Err(e) => println!("  {:<18} -> {}", kind, e),
        }
    }
    println!();
}

fn normalization() {
    println!("2. Normalization");
    println!("----------------");

    let fields = samples::with(samples::private_individual(), "bik", " 04 45 25 225 ");
    if let Ok(fields) = validate(PartnerKind::PrivateIndividual, fields) {
        println!("  bik          = {:?}", fields["bik"]);
        println!("  inn          = {:?}", fields["inn"]);
        println!("  real_address = {:?}", fields["real_address"]);
    }
    println!();
}

fn shape_errors() {
    println!("3. Missing and unexpected fields");
    println!("--------------------------------");

    let mut fields = samples::sole_proprietor();
    fields.retain(|(key, _)| *key != "okato");
    fields.push(("ogrn", "1027700132195"));

    if let Err(e) = validate(PartnerKind::Ip, fields) {
        println!("  {}", e);
        if let RequisitesError::Shape(shape) = e.reason() {
            println!("  missing:    {:?}", shape.missing);
            println!("  unexpected: {:?}", shape.unexpected);
        }
    }
    println!();
}

fn type_errors() {
    println!("4. Non-text values");
    println!("------------------");

    let fields = samples::private_individual()
        .into_iter()
        .map(|(key, value)| match key {
            "inn" => (key, FieldValue::Integer(500100732259)),
            _ => (key, FieldValue::from(value)),
        });

    if let Err(e) = validate(PartnerKind::PrivateIndividual, fields) {
        println!("  {}", e);
    }
    println!();
}

fn value_errors() {
    println!("5. Format and control-digit failures");
    println!("------------------------------------");

    let cases = [
        (PartnerKind::Pao, "inn", "7707083894"),
        (PartnerKind::Pao, "bank_account", "40702810538000060473"),
        (PartnerKind::Pao, "correspondent_account", "30101810500000000225"),
        (PartnerKind::Pao, "okved", "620100"),
        (PartnerKind::Pao, "kpp", "7707ab001"),
        (PartnerKind::Pao, "ogrn", "0027700132195"),
        (PartnerKind::Ip, "ogrnip", "304500116000158"),
    ];

    for (kind, field, value) in cases {
        let fields = samples::with(samples::for_kind(kind), field, value);
        match validate(kind, fields) {
            Ok(_) => println!("  {:<22} {:<22} accepted", field, value),
            Err(e) => println!("  {:<22} {:<22} {}", field, value, e),
        }
    }
}
