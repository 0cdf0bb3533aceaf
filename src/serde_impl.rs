//! Serde support (feature-gated)
//!
//! - [`PartnerKind`] (de)serializes as its tag (`"OOO"`, `"IP"`, ...)
//! - [`FieldValue`] (de)serializes as the plain JSON-like value it holds
//! - field sets serialize as a flat map of their fields, and deserialize by
//!   running the full validation pipeline over the incoming map
//!
//! # Example
//!
//! ```rust
//! use requisites::{FieldValue, IpRequisites, PartnerKind};
//!
//! let kind: PartnerKind = serde_json::from_str(r#""IP""#).unwrap();
//! assert_eq!(kind, PartnerKind::Ip);
//!
//! let value: FieldValue = serde_json::from_str("304500116000157").unwrap();
//! assert_eq!(value, FieldValue::Integer(304500116000157));
//!
//! let result: Result<IpRequisites, _> = serde_json::from_str(r#"{"ogrnip": "304500116000157"}"#);
//! assert!(result.is_err());
//! ```

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::kind::PartnerKind;
use crate::requisites::{
    CommonRequisites, FieldValue, IpRequisites, LegalEntityRequisites, Requisites,
};

impl Serialize for PartnerKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PartnerKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(de::Error::custom)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Integer(i) => serializer.serialize_i64(*i),
            FieldValue::Float(f) => serializer.serialize_f64(*f),
            FieldValue::Boolean(b) => serializer.serialize_bool(*b),
            FieldValue::Null => serializer.serialize_none(),
        }
    }
}

struct FieldValueVisitor;

impl<'de> Visitor<'de> for FieldValueVisitor {
    type Value = FieldValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FieldValue, E> {
        Ok(FieldValue::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<FieldValue, E> {
        Ok(FieldValue::Text(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FieldValue, E> {
        Ok(FieldValue::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FieldValue, E> {
        Ok(i64::try_from(v).map_or(FieldValue::Float(v as f64), FieldValue::Integer))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<FieldValue, E> {
        Ok(FieldValue::Float(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<FieldValue, E> {
        Ok(FieldValue::Boolean(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<FieldValue, E> {
        Ok(FieldValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<FieldValue, E> {
        Ok(FieldValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<FieldValue, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FieldValueVisitor)
    }
}

struct RawFieldsVisitor;

impl<'de> Visitor<'de> for RawFieldsVisitor {
    type Value = BTreeMap<String, FieldValue>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of requisites fields")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut fields = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<String, FieldValue>()? {
            fields.insert(key, value);
        }
        Ok(fields)
    }
}

fn serialize_fields<R: Requisites, S: Serializer>(
    requisites: &R,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut entries = Vec::new();
    requisites.visit_fields(&mut |field, value| entries.push((field, value.to_string())));

    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (field, value) in &entries {
        map.serialize_entry(field, value)?;
    }
    map.end()
}

fn deserialize_fields<'de, R: Requisites, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<R, D::Error> {
    let raw = deserializer.deserialize_map(RawFieldsVisitor)?;
    R::from_fields(raw).map_err(de::Error::custom)
}

macro_rules! requisites_serde {
    ($($ty:ty),+) => {$(
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serialize_fields(self, serializer)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserialize_fields(deserializer)
            }
        }
    )+};
}

requisites_serde!(CommonRequisites, IpRequisites, LegalEntityRequisites);
