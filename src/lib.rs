//! # Requisites
//!
//! Validation of the payment and registration details ("requisites") that
//! Russian business partners submit: taxpayer numbers, bank codes, account
//! numbers and state registration numbers.
//!
//! A submission is a flat map of field names to values. It is validated
//! against the field set of the partner's kind:
//!
//! | Partner kind                      | Field set                   |
//! |-----------------------------------|-----------------------------|
//! | `OOO`, `AO`, `ZAO`, `PAO`         | [`LegalEntityRequisites`]   |
//! | `IP`                              | [`IpRequisites`]            |
//! | `PRIVATE_INDIVIDUAL`              | [`CommonRequisites`]        |
//!
//! Validation normalizes whitespace, checks that exactly the declared fields
//! are present and hold text, then runs the field set's rules in order and
//! reports the first failure.
//!
//! ## Quick Example
//!
//! ```rust
//! use requisites::{validate, PartnerKind};
//!
//! let fields = validate(
//!     "PRIVATE_INDIVIDUAL".parse::<PartnerKind>().unwrap(),
//!     [
//!         ("requisites_name", "Ivan"),
//!         ("requisites_patronymic", "Ivanovich"),
//!         ("requisites_surname", "Ivanov"),
//!         ("real_address", "Moscow, Tverskaya 1"),
//!         ("inn", "5001 0073 2259"),
//!         ("bik", "044525225"),
//!         ("bank_name", "PAO Sberbank"),
//!         ("correspondent_account", "30101810400000000225"),
//!         ("bank_account", "40817810000000004312"),
//!     ],
//! );
//!
//! match fields {
//!     Ok(fields) => assert_eq!(fields["inn"], "500100732259"),
//!     Err(e) => panic!("{}", e),
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: log every accepted and rejected submission
//! - `serde`: (de)serialize partner kinds, raw values and field sets
//! - `proptest`: generators for identifiers with correct control digits

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod checksum;
pub mod error;
pub mod kind;
pub mod predicate;
pub mod requisites;
pub mod testing;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use error::{
    FieldTypeError, FieldValueError, InvalidRequisites, RequisitesError, ShapeError,
    UnknownPartnerKind,
};
pub use kind::{validate, FieldSetKind, PartnerKind};
pub use requisites::{
    Check, CommonRequisites, EntityCommonRequisites, FieldValue, IpRequisites,
    LegalEntityRequisites, RawFields, Requisites,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::InvalidRequisites;
    pub use crate::kind::{validate, PartnerKind};
    pub use crate::requisites::{
        CommonRequisites, FieldValue, IpRequisites, LegalEntityRequisites, Requisites,
    };
}
