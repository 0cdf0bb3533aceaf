//! Field sets and the shared validation envelope
//!
//! A field set is a flat record of named string fields. Each dispatchable
//! variant implements [`Requisites`], which supplies the whole pipeline:
//!
//! 1. normalize whitespace ([`normalize`])
//! 2. compare the submitted keys with the declared fields
//! 3. require every declared field to be text
//! 4. build the typed record
//! 5. run the variant's ordered [`Check`] list, stopping at the first failure
//! 6. flatten the record back into a map
//!
//! Variants extend one another by embedding: [`EntityCommonRequisites`]
//! holds a [`CommonRequisites`], and both [`IpRequisites`] and
//! [`LegalEntityRequisites`] hold an [`EntityCommonRequisites`]. Each check is
//! written once, generically over any record that embeds the level its
//! fields belong to, and listed again in every variant that inherits it.
//!
//! # Example
//!
//! ```rust
//! use requisites::{LegalEntityRequisites, Requisites};
//!
//! let fields = LegalEntityRequisites::field_names().collect::<Vec<_>>();
//! assert_eq!(fields.len(), 17);
//! assert_eq!(LegalEntityRequisites::CHECKS.len(), 9);
//! ```

mod common;
mod entity;
mod fields;
mod legal_entity;
mod sole_proprietor;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::checksum::{CheckResult, Taxpayer};
use crate::error::{FieldTypeError, FieldValueError, InvalidRequisites, RequisitesError, ShapeError};

pub use common::CommonRequisites;
pub use entity::EntityCommonRequisites;
pub use fields::{
    collect_raw, is_free_text, normalize, FieldValue, RawFields, TextFields, FREE_TEXT_FIELDS,
};
pub use legal_entity::LegalEntityRequisites;
pub use sole_proprietor::IpRequisites;

/// One named rule of a field set.
pub struct Check<R> {
    /// The field the rule is reported against.
    pub field: &'static str,
    /// The rule itself.
    pub rule: fn(&R) -> CheckResult,
}

impl<R> Check<R> {
    /// Create a check.
    pub const fn new(field: &'static str, rule: fn(&R) -> CheckResult) -> Self {
        Check { field, rule }
    }

    /// Run the rule, attaching the field name to a failure.
    pub fn run(&self, requisites: &R) -> Result<(), FieldValueError> {
        (self.rule)(requisites).map_err(|error| FieldValueError {
            field: self.field,
            error,
        })
    }
}

impl<R> Clone for Check<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Check<R> {}

impl<R> fmt::Debug for Check<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check").field("field", &self.field).finish()
    }
}

/// A typed requisites field set with its validation pipeline.
pub trait Requisites: Sized + 'static {
    /// Name used in error messages.
    const NAME: &'static str;

    /// INN form this field set expects.
    const TAXPAYER: Taxpayer;

    /// Declared field names, grouped by the level that introduces them.
    const FIELD_GROUPS: &'static [&'static [&'static str]];

    /// Checks run by [`Requisites::check_values`], in order.
    const CHECKS: &'static [Check<Self>];

    /// Build the record from text values that passed the shape and type checks.
    fn from_text(fields: &mut TextFields) -> Self;

    /// Visit every field with its value, in declaration order.
    fn visit_fields(&self, visit: &mut dyn FnMut(&'static str, &str));

    /// All declared field names, in declaration order.
    fn field_names() -> impl Iterator<Item = &'static str> {
        Self::FIELD_GROUPS.iter().flat_map(|group| group.iter().copied())
    }

    /// Run every check in order, stopping at the first failure.
    fn check_values(&self) -> Result<(), FieldValueError> {
        Self::CHECKS.iter().try_for_each(|check| check.run(self))
    }

    /// Normalize, shape-check, type-check, build and value-check a submission.
    fn from_fields<I, K, V>(raw: I) -> Result<Self, InvalidRequisites>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let result = build::<Self>(collect_raw(raw));

        #[cfg(feature = "tracing")]
        log_outcome(Self::NAME, &result);

        result.map_err(|reason| InvalidRequisites::new(Self::NAME, reason))
    }

    /// Flatten the record into a field-name to value map.
    fn into_fields(self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        self.visit_fields(&mut |field, value| {
            out.insert(field.to_string(), value.to_string());
        });
        out
    }

    /// Validate a submission and return its normalized fields.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requisites::{CommonRequisites, Requisites};
    ///
    /// let result = CommonRequisites::validate([
    ///     ("requisites_name", "Ivan"),
    ///     ("requisites_patronymic", "Ivanovich"),
    ///     ("requisites_surname", "Ivanov"),
    ///     ("real_address", "Moscow, Tverskaya 1"),
    ///     ("inn", "5001 0073 2259"),
    ///     ("bik", "044525225"),
    ///     ("bank_name", "Sberbank"),
    ///     ("correspondent_account", "30101810400000000225"),
    ///     ("bank_account", "40817810000000004312"),
    /// ]);
    /// assert_eq!(result.unwrap()["inn"], "500100732259");
    /// ```
    fn validate<I, K, V>(raw: I) -> Result<BTreeMap<String, String>, InvalidRequisites>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self::from_fields(raw).map(Self::into_fields)
    }
}

fn build<R: Requisites>(raw: RawFields) -> Result<R, RequisitesError> {
    let mut normalized = normalize(raw);
    check_shape::<R>(&normalized)?;

    let mut text = TextFields::new();
    for field in R::field_names() {
        match normalized.remove(field) {
            Some(FieldValue::Text(value)) => text.insert(field, value),
            Some(other) => {
                return Err(FieldTypeError {
                    field_set: R::NAME,
                    field,
                    expected: "string",
                    actual: other.type_name(),
                }
                .into())
            }
            None => {
                return Err(ShapeError {
                    missing: vec![field.to_string()],
                    unexpected: Vec::new(),
                }
                .into())
            }
        }
    }

    let requisites = R::from_text(&mut text);
    requisites.check_values()?;
    Ok(requisites)
}

#[cfg(feature = "tracing")]
fn log_outcome<R>(field_set: &'static str, result: &Result<R, RequisitesError>) {
    match result {
        Ok(_) => tracing::trace!(field_set, "requisites accepted"),
        Err(err) => tracing::debug!(field_set, error = %err, "requisites rejected"),
    }
}

fn check_shape<R: Requisites>(raw: &RawFields) -> Result<(), ShapeError> {
    let declared: BTreeSet<&str> = R::field_names().collect();

    let missing: Vec<String> = declared
        .iter()
        .filter(|field| !raw.contains_key(**field))
        .map(|field| field.to_string())
        .collect();
    let unexpected: Vec<String> = raw
        .keys()
        .filter(|key| !declared.contains(key.as_str()))
        .cloned()
        .collect();

    if missing.is_empty() && unexpected.is_empty() {
        Ok(())
    } else {
        Err(ShapeError {
            missing,
            unexpected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::samples;

    #[test]
    fn test_field_names_follow_groups() {
        let names: Vec<_> = IpRequisites::field_names().collect();
        assert_eq!(names.first(), Some(&"requisites_name"));
        assert_eq!(names.last(), Some(&"ogrnip"));
        assert_eq!(names.len(), 16);
    }

    #[test]
    fn test_field_names_are_unique() {
        let names: Vec<_> = LegalEntityRequisites::field_names().collect();
        let unique: BTreeSet<_> = names.iter().collect();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_check_shape_reports_both_sides() {
        let mut raw = collect_raw(samples::private_individual());
        raw.remove("bik");
        raw.remove("inn");
        raw.insert("color".to_string(), FieldValue::from("red"));

        let err = check_shape::<CommonRequisites>(&raw).unwrap_err();
        assert_eq!(err.missing, vec!["bik", "inn"]);
        assert_eq!(err.unexpected, vec!["color"]);
    }

    #[test]
    fn test_type_error_names_first_declared_field() {
        let mut raw = collect_raw(samples::private_individual());
        raw.insert("bank_account".to_string(), FieldValue::Integer(1));
        raw.insert("inn".to_string(), FieldValue::Null);

        let err = build::<CommonRequisites>(raw).unwrap_err();
        assert_eq!(
            err,
            RequisitesError::FieldType(FieldTypeError {
                field_set: "CommonRequisites",
                field: "inn",
                expected: "string",
                actual: "null",
            })
        );
    }

    #[test]
    fn test_shape_checked_before_types() {
        let mut raw = collect_raw(samples::private_individual());
        raw.insert("inn".to_string(), FieldValue::Integer(1));
        raw.remove("bik");

        let err = build::<CommonRequisites>(raw).unwrap_err();
        assert!(matches!(err, RequisitesError::Shape(_)));
    }

    #[test]
    fn test_check_run_attaches_field() {
        let check: Check<CommonRequisites> = Check::new("bik", |_| Err("nope"));
        let requisites = CommonRequisites::from_fields(samples::private_individual()).unwrap();
        assert_eq!(
            check.run(&requisites),
            Err(FieldValueError {
                field: "bik",
                error: "nope",
            })
        );
    }

    #[test]
    fn test_check_debug_shows_field() {
        let check = CommonRequisites::CHECKS[0];
        assert_eq!(format!("{:?}", check), "Check { field: \"inn\" }");
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn test_rejection_is_logged() {
            let result = CommonRequisites::from_fields([("inn", "7707083893")]);
            assert!(result.is_err());
            assert!(logs_contain("requisites rejected"));
            assert!(logs_contain("missing required fields"));
        }

        #[traced_test]
        #[test]
        fn test_acceptance_is_logged() {
            let result = LegalEntityRequisites::from_fields(samples::legal_entity());
            assert!(result.is_ok());
            assert!(logs_contain("requisites accepted"));
            assert!(logs_contain("LegalEntityRequisites"));
        }
    }
}
