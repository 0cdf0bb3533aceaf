//! Error types for requisites validation
//!
//! Three internal failures can stop a validation run:
//!
//! - [`ShapeError`]: the submitted keys do not match the field set
//! - [`FieldTypeError`]: a declared field does not hold text
//! - [`FieldValueError`]: a format or control-digit rule failed
//!
//! They are collected in [`RequisitesError`]. Callers of the public entry
//! points only ever see [`InvalidRequisites`], which names the field set that
//! rejected the input and keeps the internal error as its source.
//!
//! # Example
//!
//! ```rust
//! use requisites::{validate, PartnerKind, RequisitesError};
//!
//! let err = validate(PartnerKind::Ip, [("inn", "500100732259")]).unwrap_err();
//! assert_eq!(err.field_set(), "IpRequisites");
//! assert!(matches!(err.reason(), RequisitesError::Shape(_)));
//! ```

use std::error::Error as StdError;
use std::fmt;

/// The submitted keys differ from the field set's declared fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    /// Declared fields absent from the input, sorted.
    pub missing: Vec<String>,
    /// Input keys the field set does not declare, sorted.
    pub unexpected: Vec<String>,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing required fields: {}", self.missing.join(", ")));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected fields: {}", self.unexpected.join(", ")));
        }
        write!(f, "{}", parts.join("; "))
    }
}

impl StdError for ShapeError {}

/// A declared field holds something other than text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTypeError {
    /// Name of the field set being built.
    pub field_set: &'static str,
    /// The offending field.
    pub field: &'static str,
    /// The type the field requires.
    pub expected: &'static str,
    /// The type that was supplied.
    pub actual: &'static str,
}

impl fmt::Display for FieldTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' field expected type is '{}', got '{}'",
            self.field_set, self.field, self.expected, self.actual
        )
    }
}

impl StdError for FieldTypeError {}

/// A field failed one of its format or control-digit rules.
///
/// # Example
///
/// ```rust
/// use requisites::FieldValueError;
///
/// let err = FieldValueError {
///     field: "bik",
///     error: "BIK must be 9 digits long.",
/// };
/// assert_eq!(format!("{}", err), "bik: BIK must be 9 digits long.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValueError {
    /// The field whose check failed.
    pub field: &'static str,
    /// Human-readable description of the broken rule.
    pub error: &'static str,
}

impl fmt::Display for FieldValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

impl StdError for FieldValueError {}

/// Any reason a validation run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequisitesError {
    /// Missing or unexpected keys.
    Shape(ShapeError),
    /// A declared field is not text.
    FieldType(FieldTypeError),
    /// A format or checksum rule failed.
    FieldValue(FieldValueError),
}

impl RequisitesError {
    /// The field the error is about, if it concerns a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            RequisitesError::Shape(_) => None,
            RequisitesError::FieldType(e) => Some(e.field),
            RequisitesError::FieldValue(e) => Some(e.field),
        }
    }
}

impl fmt::Display for RequisitesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequisitesError::Shape(e) => write!(f, "{}", e),
            RequisitesError::FieldType(e) => write!(f, "{}", e),
            RequisitesError::FieldValue(e) => write!(f, "Validation failed: {}", e),
        }
    }
}

impl StdError for RequisitesError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            RequisitesError::Shape(e) => Some(e),
            RequisitesError::FieldType(e) => Some(e),
            RequisitesError::FieldValue(e) => Some(e),
        }
    }
}

impl From<ShapeError> for RequisitesError {
    fn from(e: ShapeError) -> Self {
        RequisitesError::Shape(e)
    }
}

impl From<FieldTypeError> for RequisitesError {
    fn from(e: FieldTypeError) -> Self {
        RequisitesError::FieldType(e)
    }
}

impl From<FieldValueError> for RequisitesError {
    fn from(e: FieldValueError) -> Self {
        RequisitesError::FieldValue(e)
    }
}

/// The single error callers observe: a requisites submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRequisites {
    field_set: &'static str,
    reason: RequisitesError,
}

impl InvalidRequisites {
    /// Wrap an internal error raised while validating `field_set`.
    pub fn new(field_set: &'static str, reason: impl Into<RequisitesError>) -> Self {
        InvalidRequisites {
            field_set,
            reason: reason.into(),
        }
    }

    /// Name of the field set that rejected the input.
    pub fn field_set(&self) -> &'static str {
        self.field_set
    }

    /// The internal error.
    pub fn reason(&self) -> &RequisitesError {
        &self.reason
    }

    /// Consume and return the internal error.
    pub fn into_reason(self) -> RequisitesError {
        self.reason
    }

    /// The field the rejection is about, if any.
    pub fn field(&self) -> Option<&'static str> {
        self.reason.field()
    }
}

impl fmt::Display for InvalidRequisites {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error: {}", self.reason)
    }
}

impl StdError for InvalidRequisites {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.reason)
    }
}

/// A partner-kind tag outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPartnerKind(pub String);

impl fmt::Display for UnknownPartnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown partner kind: '{}'", self.0)
    }
}

impl StdError for UnknownPartnerKind {}
