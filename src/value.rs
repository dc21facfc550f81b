//! Dynamic value representation for map file data.
//!
//! This module provides the [`Value`] enum, the closed set of shapes that
//! can appear in a [`Document`](crate::Document).
//!
//! After parsing, only two variants occur: [`Value::String`] for leaf
//! scalars and [`Value::Map`] for nested blocks. The remaining variants
//! exist on the producer side: [`Value::List`] and [`Value::Set`] are
//! written out using the index-keyed map encoding and come back as maps,
//! while [`Value::Absent`] marks a vacant slot in a decoded sparse list.
//!
//! ## Building values
//!
//! ```rust
//! use mapfile::Value;
//!
//! let text = Value::from("hello");
//! let count = Value::from(42);           // stored as the string "42"
//! let scores: Value = [10, 20, 30].into_iter().map(Value::from).collect();
//!
//! assert!(text.is_string());
//! assert_eq!(count.as_str(), Some("42"));
//! assert!(scores.is_list());
//! ```
//!
//! Every leaf is a string; numeric or boolean meaning is applied by the
//! typed accessors on [`Document`](crate::Document), never stored.

use crate::Document;
use serde::de::{self, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// A value stored in a [`Document`](crate::Document).
///
/// # Examples
///
/// ```rust
/// use mapfile::{Document, Value};
///
/// let mut doc = Document::new();
/// doc.insert("name", "Avery");
/// let value = Value::Map(doc);
///
/// assert!(value.is_map());
/// assert_eq!(value.as_map().unwrap().get_string("name").unwrap(), "Avery");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Value {
    /// A vacant slot in a decoded sparse list. Never stored in a document
    /// and has no text encoding.
    #[default]
    Absent,
    /// A leaf scalar. The only leaf shape the parser produces.
    String(String),
    /// A nested document.
    Map(Document),
    /// An ordered sequence; encoded as a map keyed by decimal indices.
    List(Vec<Value>),
    /// A set; encoded exactly like a sequence, decoded by discarding keys.
    Set(BTreeSet<Value>),
}

impl Value {
    /// Returns `true` if the value is the vacant-slot placeholder.
    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Returns `true` if the value is a leaf string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a nested document.
    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns `true` if the value is an ordered sequence.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns `true` if the value is a set.
    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Value::Set(_))
    }

    /// If the value is a leaf string, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a nested document, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&Document> {
        match self {
            Value::Map(doc) => Some(doc),
            _ => None,
        }
    }

    /// If the value is a sequence, returns a reference to its elements.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(elements) => Some(elements),
            _ => None,
        }
    }

    /// If the value is a set, returns a reference to its elements.
    #[inline]
    #[must_use]
    pub fn as_set(&self) -> Option<&BTreeSet<Value>> {
        match self {
            Value::Set(elements) => Some(elements),
            _ => None,
        }
    }

    /// If the value is a nested document, returns it by value.
    #[must_use]
    pub fn into_map(self) -> Option<Document> {
        match self {
            Value::Map(doc) => Some(doc),
            _ => None,
        }
    }
}

/// The generic string form returned by
/// [`Document::get_string`](crate::Document::get_string).
///
/// Leaves display as themselves; containers display in a brace/bracket
/// diagnostic form and an absent slot displays as nothing.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => Ok(()),
            Value::String(s) => f.write_str(s),
            Value::Map(doc) => write!(f, "{doc}"),
            Value::List(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Value::Set(elements) => {
                f.write_str("{")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::String(value.to_string())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::String(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::String(value.to_string())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::String(value.to_string())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::String(value.to_string())
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Document> for Value {
    fn from(value: Document) -> Self {
        Value::Map(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<BTreeSet<Value>> for Value {
    fn from(value: BTreeSet<Value>) -> Self {
        Value::Set(value)
    }
}

/// Collects into a [`Value::List`].
///
/// ```rust
/// use mapfile::Value;
///
/// let list: Value = ["a", "b"].into_iter().map(Value::from).collect();
/// assert_eq!(list.as_list().map(Vec::len), Some(2));
/// ```
impl<V: Into<Value>> FromIterator<V> for Value {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Value::List(iter.into_iter().map(Into::into).collect())
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Absent => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Map(doc) => doc.serialize(serializer),
            Value::List(elements) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Set(elements) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map file value")
            }

            // Foreign scalars become their text form; leaves are strings
            // by contract.
            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Absent)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Absent)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut elements = Vec::new();
                while let Some(element) = seq.next_element()? {
                    elements.push(element);
                }
                Ok(Value::List(elements))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut doc = Document::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    doc.insert(key, value);
                }
                Ok(Value::Map(doc))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Serializes a [`Document`] as a map of its entries.
impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = Document;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string-keyed map")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut doc = Document::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    doc.insert(key, value);
                }
                Ok(doc)
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}
