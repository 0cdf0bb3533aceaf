//! Raw field values and whitespace normalization

use std::collections::BTreeMap;

/// Fields whose values keep their internal whitespace.
pub const FREE_TEXT_FIELDS: [&str; 5] = [
    "real_address",
    "legal_address",
    "short_entity_name",
    "full_entity_name",
    "bank_name",
];

/// A raw value as submitted by the caller.
///
/// Only [`FieldValue::Text`] is accepted for a declared field; the other
/// variants exist so loosely typed input (decoded JSON, form data) can be
/// passed through and rejected with a type error naming the field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A string.
    Text(String),
    /// An integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A boolean.
    Boolean(bool),
    /// An explicit null.
    Null,
}

impl FieldValue {
    /// Name of the value's type, as used in type-error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "string",
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Null => "null",
        }
    }

    /// Borrow the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Is this a text value?
    pub fn is_text(&self) -> bool {
        matches!(self, FieldValue::Text(_))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::Text(value.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// A raw submission: field name to raw value.
pub type RawFields = BTreeMap<String, FieldValue>;

/// Collect any key/value iterator into [`RawFields`].
///
/// A key that appears more than once keeps its last value.
pub fn collect_raw<I, K, V>(raw: I) -> RawFields
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<FieldValue>,
{
    raw.into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Is `field` one of the free-text fields?
pub fn is_free_text(field: &str) -> bool {
    FREE_TEXT_FIELDS.contains(&field)
}

/// Remove every whitespace character from textual values, except in the
/// free-text fields. Non-text values pass through unchanged.
///
/// # Example
///
/// ```rust
/// use requisites::requisites::{collect_raw, normalize, FieldValue};
///
/// let normalized = normalize(collect_raw([
///     ("inn", "7707 083 893"),
///     ("legal_address", "Moscow, Tverskaya 1"),
/// ]));
/// assert_eq!(normalized["inn"], FieldValue::from("7707083893"));
/// assert_eq!(normalized["legal_address"], FieldValue::from("Moscow, Tverskaya 1"));
/// ```
pub fn normalize(raw: RawFields) -> RawFields {
    raw.into_iter()
        .map(|(key, value)| {
            let value = match value {
                FieldValue::Text(text) if !is_free_text(&key) => {
                    FieldValue::Text(text.chars().filter(|c| !c.is_whitespace()).collect())
                }
                other => other,
            };
            (key, value)
        })
        .collect()
}

/// Text values of a submission that has passed the shape and type checks.
///
/// Field-set constructors take their values out of it by name.
#[derive(Debug, Default)]
pub struct TextFields(BTreeMap<&'static str, String>);

impl TextFields {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the value of a declared field.
    pub fn insert(&mut self, field: &'static str, value: String) {
        self.0.insert(field, value);
    }

    /// Take the value of a declared field, leaving it empty if absent.
    pub fn take(&mut self, field: &'static str) -> String {
        self.0.remove(field).unwrap_or_default()
    }
}
